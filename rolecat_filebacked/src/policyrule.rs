use rolecat_definitions::{ErrorKind, PolicyRule, Result};

use crate::util::Build;

/// A policy rule as written in configuration
#[derive(Deserialize, Clone, Default)]
#[serde(default, deny_unknown_fields)]
pub struct PolicyRuleSource {
    pub api_groups: Option<Vec<String>>,
    pub non_resource_urls: Option<Vec<String>>,
    pub resource_names: Option<Vec<String>>,
    pub resources: Option<Vec<String>>,
    pub verbs: Option<Vec<String>>,
}

impl Build<PolicyRule, ()> for PolicyRuleSource {
    fn build(self, _: &()) -> Result<PolicyRule> {
        if let Some(groups) = &self.api_groups {
            if groups.is_empty() {
                bail!(ErrorKind::MinItems("api_groups".into(), 1));
            }
        }
        let rule = PolicyRule {
            api_groups: self.api_groups.unwrap_or_default(),
            non_resource_urls: self.non_resource_urls.unwrap_or_default(),
            resource_names: self.resource_names.unwrap_or_default(),
            resources: self.resources.unwrap_or_default(),
            verbs: self.verbs.unwrap_or_default(),
        };
        if rule.mixes_resource_kinds() {
            warn!("policy rule mixes resources with non_resource_urls, kubernetes will only honour one");
        }
        debug!("Built policy rule for verbs {:?}", rule.verbs);
        Ok(rule)
    }
}
