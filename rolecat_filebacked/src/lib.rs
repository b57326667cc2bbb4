#[macro_use]
extern crate serde_derive;
#[macro_use]
extern crate log;
#[macro_use]
extern crate error_chain;

// Sources
mod policyrule;
mod roleref;
mod subject;
pub use crate::policyrule::PolicyRuleSource;
pub use crate::roleref::RoleRefSource;
pub use crate::subject::SubjectSource;

// Utilities
mod load;
mod util;
pub use crate::util::{Build, Name, Require};

use rolecat_definitions::{policy_rule_fields, role_ref_fields, subject_fields};
use rolecat_definitions::{PolicyRule, Result, RoleRef, Subject};
use serde_yaml::{Mapping, Sequence};

pub fn policy_rule(input: &Mapping) -> Result<PolicyRule> {
    load::from_mapping::<PolicyRuleSource, _>(&policy_rule_fields(), input)
}

pub fn policy_rules(input: &Sequence) -> Result<Vec<PolicyRule>> {
    load::from_sequence::<PolicyRuleSource, _>(&policy_rule_fields(), "rule", input)
}

pub fn role_ref(input: &Mapping) -> Result<RoleRef> {
    load::from_mapping::<RoleRefSource, _>(&role_ref_fields(), input)
}

pub fn subject(input: &Mapping) -> Result<Subject> {
    load::from_mapping::<SubjectSource, _>(&subject_fields(), input)
}

pub fn subjects(input: &Sequence) -> Result<Vec<Subject>> {
    load::from_sequence::<SubjectSource, _>(&subject_fields(), "subject", input)
}
