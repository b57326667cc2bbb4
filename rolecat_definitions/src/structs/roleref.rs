use std::fmt;
use std::str::FromStr;

use k8s_openapi::api::rbac::v1 as rbac;

use super::{Error, ErrorKind, Result};
use crate::schema::{Field, FieldSet};

/// Kinds of role a binding can reference
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum RoleKind {
    Role,
    ClusterRole,
}

impl RoleKind {
    pub const ALLOWED: &'static [&'static str] = &["Role", "ClusterRole"];

    pub fn as_str(&self) -> &'static str {
        match self {
            RoleKind::Role => "Role",
            RoleKind::ClusterRole => "ClusterRole",
        }
    }
}

impl FromStr for RoleKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "Role" => Ok(RoleKind::Role),
            "ClusterRole" => Ok(RoleKind::ClusterRole),
            _ => Err(ErrorKind::InvalidValue(
                "kind".into(),
                s.into(),
                Self::ALLOWED.iter().map(|a| a.to_string()).collect(),
            )
            .into()),
        }
    }
}

impl fmt::Display for RoleKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Reference to the Role or ClusterRole granted by a binding
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RoleRef {
    /// APIGroup is the group for the resource being referenced
    pub api_group: String,
    /// Kind is the type of resource being referenced
    pub kind: RoleKind,
    /// Name is the name of resource being referenced
    pub name: String,
}

impl RoleRef {
    pub const DEFAULT_API_GROUP: &'static str = "rbac.authorization.k8s.io";
}

/// Field set of a role reference
pub fn role_ref_fields() -> FieldSet {
    FieldSet::new()
        .with(
            "api_group",
            Field::string("APIGroup is the group for the resource being referenced")
                .default_value(RoleRef::DEFAULT_API_GROUP),
        )
        .with(
            "kind",
            Field::string("Kind is the type of resource being referenced")
                .required()
                .one_of(RoleKind::ALLOWED),
        )
        .with(
            "name",
            Field::string("Name is the name of resource being referenced").required(),
        )
}

impl From<RoleRef> for rbac::RoleRef {
    fn from(r: RoleRef) -> Self {
        rbac::RoleRef {
            api_group: r.api_group,
            kind: r.kind.to_string(),
            name: r.name,
        }
    }
}
