use serde::de::DeserializeOwned;
use serde_yaml::{Mapping, Sequence, Value};

use rolecat_definitions::{ErrorKind, FieldSet, Result};

use crate::util::Build;

/// Validate a flat mapping against its field set, then build it through its source type
pub fn from_mapping<S, T>(fields: &FieldSet, input: &Mapping) -> Result<T>
where
    S: DeserializeOwned + Build<T, ()>,
{
    let resolved = fields.resolve(input)?;
    let source: S = serde_yaml::from_value(Value::Mapping(resolved))?;
    source.build(&())
}

/// Build every mapping in a sequence, in order
///
/// Elements that are not mappings are reported as `label[index]`.
pub fn from_sequence<S, T>(fields: &FieldSet, label: &str, input: &Sequence) -> Result<Vec<T>>
where
    S: DeserializeOwned + Build<T, ()>,
{
    input
        .iter()
        .enumerate()
        .map(|(i, v)| match v.as_mapping() {
            Some(m) => from_mapping::<S, T>(fields, m),
            None => Err(ErrorKind::InvalidType(format!("{}[{}]", label, i), "a mapping".into()).into()),
        })
        .collect()
}
