use std::fmt;
use std::str::FromStr;

use k8s_openapi::api::rbac::v1 as rbac;

use super::{Error, ErrorKind, Result};
use crate::schema::{Field, FieldSet};

/// Kinds of principal a binding can grant access to
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubjectKind {
    Group,
    ServiceAccount,
    User,
}

impl SubjectKind {
    pub const ALLOWED: &'static [&'static str] = &["Group", "ServiceAccount", "User"];

    pub fn as_str(&self) -> &'static str {
        match self {
            SubjectKind::Group => "Group",
            SubjectKind::ServiceAccount => "ServiceAccount",
            SubjectKind::User => "User",
        }
    }

    /// Only service accounts live in a namespace
    pub fn is_namespaced(&self) -> bool {
        *self == SubjectKind::ServiceAccount
    }
}

impl FromStr for SubjectKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "Group" => Ok(SubjectKind::Group),
            "ServiceAccount" => Ok(SubjectKind::ServiceAccount),
            "User" => Ok(SubjectKind::User),
            _ => Err(ErrorKind::InvalidValue(
                "kind".into(),
                s.into(),
                Self::ALLOWED.iter().map(|a| a.to_string()).collect(),
            )
            .into()),
        }
    }
}

impl fmt::Display for SubjectKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The principal a binding grants access to
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Subject {
    /// APIGroup is the group for the resource being referenced
    pub api_group: String,
    /// Kind is the type of resource being referenced
    pub kind: SubjectKind,
    /// Name is the name of resource being referenced
    pub name: String,
    /// Namespace of the referenced object
    ///
    /// If the kind is not namespaced (User or Group) and this is set,
    /// the Kubernetes authorizer reports an error. It is not rejected here.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub namespace: Option<String>,
}

impl Subject {
    pub const DEFAULT_API_GROUP: &'static str = "";
}

/// Field set of an RBAC subject
pub fn subject_fields() -> FieldSet {
    FieldSet::new()
        .with(
            "api_group",
            Field::string("APIGroup is the group for the resource being referenced")
                .default_value(Subject::DEFAULT_API_GROUP),
        )
        .with(
            "kind",
            Field::string("Kind is the type of resource being referenced")
                .required()
                .one_of(SubjectKind::ALLOWED),
        )
        .with(
            "name",
            Field::string("Name is the name of resource being referenced").required(),
        )
        .with(
            "namespace",
            Field::string(
                "Namespace of the referenced object. If the object kind is non-namespace, \
                 such as \"User\" or \"Group\", and this value is not empty the Authorizer \
                 should report an error.",
            ),
        )
}

impl From<Subject> for rbac::Subject {
    fn from(s: Subject) -> Self {
        rbac::Subject {
            api_group: Some(s.api_group),
            kind: s.kind.to_string(),
            name: s.name,
            namespace: s.namespace,
        }
    }
}
