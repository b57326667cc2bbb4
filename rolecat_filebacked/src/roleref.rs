use rolecat_definitions::{Result, RoleKind, RoleRef};

use crate::util::{Build, Name, Require};

/// A role reference as written in configuration
#[derive(Deserialize, Clone, Default)]
#[serde(default, deny_unknown_fields)]
pub struct RoleRefSource {
    pub api_group: Option<String>,
    pub kind: Option<String>,
    pub name: Option<Name>,
}

impl Build<RoleRef, ()> for RoleRefSource {
    fn build(self, params: &()) -> Result<RoleRef> {
        let kind: RoleKind = self.kind.require("kind")?.parse()?;
        let name = self.name.require("name")?.build(params)?;
        debug!("Built role reference to {} {}", kind, name);
        Ok(RoleRef {
            api_group: self.api_group.unwrap_or_else(|| RoleRef::DEFAULT_API_GROUP.into()),
            kind,
            name,
        })
    }
}
