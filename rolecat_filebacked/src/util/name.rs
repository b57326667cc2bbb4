use rolecat_definitions::{ErrorKind, Result};

use super::Build;

/// Name of a referenced object, required and non-empty
#[derive(Deserialize, Clone, Default)]
#[cfg_attr(test, derive(Debug))]
pub struct Name(String);

impl Build<String, ()> for Name {
    fn build(self, _: &()) -> Result<String> {
        let Self(name) = self;
        // Further checks (pattern, length) are left to the api server
        if name.is_empty() {
            bail!(ErrorKind::MissingField("name".into()));
        }
        Ok(name)
    }
}

impl From<&str> for Name {
    fn from(v: &str) -> Self {
        Self(v.to_string())
    }
}
