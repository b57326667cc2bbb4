use std::collections::btree_map;
use std::collections::BTreeMap;

use serde_yaml::{Mapping, Value};

use super::{ErrorKind, Result};

/// Semantic type of a configurable field
#[derive(Serialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum FieldType {
    String,
    StringList,
}

/// Description of a single configurable field
///
/// Carries everything needed to validate a raw value for the field:
/// its type, whether it must be present, the default used when it isn't,
/// a minimum list length and a closed set of allowed values.
#[derive(Serialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Field {
    #[serde(rename = "type")]
    pub field_type: FieldType,
    pub required: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_items: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allowed: Option<&'static [&'static str]>,
    pub description: &'static str,
}

impl Field {
    /// An optional string field
    pub fn string(description: &'static str) -> Self {
        Field {
            field_type: FieldType::String,
            required: false,
            default: None,
            min_items: None,
            allowed: None,
            description,
        }
    }

    /// An optional ordered list of strings
    pub fn string_list(description: &'static str) -> Self {
        Field {
            field_type: FieldType::StringList,
            ..Field::string(description)
        }
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn default_value(mut self, value: &'static str) -> Self {
        self.default = Some(value);
        self
    }

    pub fn min_items(mut self, min: usize) -> Self {
        self.min_items = Some(min);
        self
    }

    /// Restrict values to a closed set (exact, case-sensitive match)
    pub fn one_of(mut self, allowed: &'static [&'static str]) -> Self {
        self.allowed = Some(allowed);
        self
    }

    /// Validate a raw value for this field
    ///
    /// `None` and an explicit null both mean the field was not supplied.
    /// A required string that is empty counts as missing, unless it is
    /// restricted to a closed set, in which case it is an invalid value.
    pub fn validate(&self, name: &str, value: Option<&Value>) -> Result<()> {
        let value = match value {
            None | Some(Value::Null) => {
                if self.required {
                    bail!(ErrorKind::MissingField(name.to_string()));
                }
                return Ok(());
            }
            Some(v) => v,
        };
        match self.field_type {
            FieldType::String => {
                let s = value
                    .as_str()
                    .ok_or_else(|| ErrorKind::InvalidType(name.to_string(), "a string".into()))?;
                if let Some(allowed) = self.allowed {
                    if !allowed.iter().any(|a| *a == s) {
                        let allowed = allowed.iter().map(|a| a.to_string()).collect();
                        bail!(ErrorKind::InvalidValue(name.to_string(), s.to_string(), allowed));
                    }
                }
                if self.required && s.is_empty() {
                    bail!(ErrorKind::MissingField(name.to_string()));
                }
            }
            FieldType::StringList => {
                let items = value
                    .as_sequence()
                    .ok_or_else(|| ErrorKind::InvalidType(name.to_string(), "a list of strings".into()))?;
                if items.iter().any(|i| i.as_str().is_none()) {
                    bail!(ErrorKind::InvalidType(name.to_string(), "a list of strings".into()));
                }
                if let Some(min) = self.min_items {
                    if items.len() < min {
                        bail!(ErrorKind::MinItems(name.to_string(), min));
                    }
                }
            }
        }
        Ok(())
    }
}

/// Mapping from field name to field descriptor
///
/// Fields are kept in name order, which is also the order they are validated in.
#[derive(Serialize, Clone, Debug, Default, PartialEq)]
pub struct FieldSet(BTreeMap<&'static str, Field>);

impl FieldSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, name: &'static str, field: Field) -> Self {
        self.0.insert(name, field);
        self
    }

    pub fn get(&self, name: &str) -> Option<&Field> {
        self.0.get(name)
    }

    pub fn iter(&self) -> btree_map::Iter<'_, &'static str, Field> {
        self.0.iter()
    }

    pub fn names(&self) -> Vec<&'static str> {
        self.0.keys().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Validate a flat configuration mapping against every field
    ///
    /// Returns the first error encountered. Unknown keys are checked before fields.
    pub fn validate(&self, input: &Mapping) -> Result<()> {
        for (key, _) in input.iter() {
            match key.as_str() {
                Some(k) if self.0.contains_key(k) => {}
                Some(k) => {
                    bail!(ErrorKind::UnknownField(k.to_string()));
                }
                None => {
                    bail!(ErrorKind::InvalidType(format!("{:?}", key), "a string key".into()));
                }
            }
        }
        for (name, field) in &self.0 {
            field.validate(name, input.get(&Value::String(name.to_string())))?;
        }
        debug!("Validated {} field(s) against {:?}", input.len(), self.names());
        Ok(())
    }

    /// Validate, then fill in defaults for absent optional fields
    pub fn resolve(&self, input: &Mapping) -> Result<Mapping> {
        self.validate(input)?;
        let mut resolved = input.clone();
        for (name, field) in &self.0 {
            if let Some(default) = field.default {
                let key = Value::String(name.to_string());
                let absent = match resolved.get(&key) {
                    None | Some(Value::Null) => true,
                    Some(_) => false,
                };
                if absent {
                    resolved.insert(key, Value::String(default.to_string()));
                }
            }
        }
        Ok(resolved)
    }
}

impl<'a> IntoIterator for &'a FieldSet {
    type IntoIter = btree_map::Iter<'a, &'static str, Field>;
    type Item = (&'a &'static str, &'a Field);

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
