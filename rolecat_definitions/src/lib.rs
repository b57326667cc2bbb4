#![allow(renamed_and_removed_lints)]

#[macro_use]
extern crate serde_derive;
extern crate serde_yaml;
extern crate serde_json;
extern crate serde;

#[macro_use]
extern crate log;

#[macro_use]
extern crate error_chain;
error_chain! {
    types {
        Error, ErrorKind, ResultExt, Result;
    }
    links {}
    foreign_links {
        SerdeY(serde_yaml::Error);
        SerdeJ(serde_json::Error);
    }
    errors {
        MissingField(field: String) {
            description("required field missing")
            display("required field '{}' is missing", &field)
        }
        InvalidValue(field: String, value: String, allowed: Vec<String>) {
            description("invalid value")
            display("invalid value {:?} for '{}', expected one of [{}]", &value, &field, allowed.join(", "))
        }
        MinItems(field: String, min: usize) {
            description("minimum items not met")
            display("'{}' must contain at least {} item(s)", &field, min)
        }
        UnknownField(field: String) {
            description("unknown field")
            display("field '{}' is not expected here", &field)
        }
        InvalidType(field: String, expected: String) {
            description("invalid type")
            display("field '{}' must be {}", &field, &expected)
        }
    }
}

/// Field set descriptors
pub mod schema;
pub use schema::{Field, FieldSet, FieldType};

/// Validated RBAC values
pub mod structs;
pub use structs::{PolicyRule, RoleKind, RoleRef, Subject, SubjectKind};
pub use structs::{policy_rule_fields, role_ref_fields, subject_fields};
