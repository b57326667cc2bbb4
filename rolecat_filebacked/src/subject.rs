use rolecat_definitions::{Result, Subject, SubjectKind};

use crate::util::{Build, Name, Require};

/// A binding subject as written in configuration
#[derive(Deserialize, Clone, Default)]
#[serde(default, deny_unknown_fields)]
pub struct SubjectSource {
    pub api_group: Option<String>,
    pub kind: Option<String>,
    pub name: Option<Name>,
    pub namespace: Option<String>,
}

impl Build<Subject, ()> for SubjectSource {
    fn build(self, params: &()) -> Result<Subject> {
        let kind: SubjectKind = self.kind.require("kind")?.parse()?;
        let name = self.name.require("name")?.build(params)?;
        if let Some(ns) = &self.namespace {
            if !kind.is_namespaced() && !ns.is_empty() {
                warn!("{} {} has namespace {}, which the authorizer will reject", kind, name, ns);
            }
        }
        debug!("Built subject {} {}", kind, name);
        Ok(Subject {
            api_group: self.api_group.unwrap_or_else(|| Subject::DEFAULT_API_GROUP.into()),
            kind,
            name,
            namespace: self.namespace,
        })
    }
}
