/// Allow normal error handling from structs
pub use super::{Error, ErrorKind, Result};

// RBAC entities, each next to the field set describing its configuration

/// Authorization rules
pub mod policyrule;
pub use self::policyrule::{policy_rule_fields, PolicyRule};

/// Role references
pub mod roleref;
pub use self::roleref::{role_ref_fields, RoleKind, RoleRef};

/// Binding subjects
pub mod subject;
pub use self::subject::{subject_fields, Subject, SubjectKind};
