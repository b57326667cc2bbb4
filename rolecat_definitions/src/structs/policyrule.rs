use k8s_openapi::api::rbac::v1 as rbac;

use crate::schema::{Field, FieldSet};

/// A single authorization rule
///
/// Lists keep the order they were written in, duplicates included,
/// so that diffs against earlier versions stay stable.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PolicyRule {
    /// API groups containing the resources
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub api_groups: Vec<String>,
    /// Partial urls a user should have access to
    #[serde(default, rename = "nonResourceURLs", skip_serializing_if = "Vec::is_empty")]
    pub non_resource_urls: Vec<String>,
    /// Whitelist of names the rule applies to, empty means all
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub resource_names: Vec<String>,
    /// Resources the rule applies to
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub resources: Vec<String>,
    /// Actions to be allowed
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub verbs: Vec<String>,
}

impl PolicyRule {
    /// Whether the rule names both API resources and non-resource urls
    ///
    /// Kubernetes only honours one of the two per rule.
    pub fn mixes_resource_kinds(&self) -> bool {
        let resource_based = !self.resources.is_empty() || !self.resource_names.is_empty();
        resource_based && !self.non_resource_urls.is_empty()
    }
}

/// Field set of a policy rule
pub fn policy_rule_fields() -> FieldSet {
    FieldSet::new()
        .with(
            "api_groups",
            Field::string_list(
                "APIGroups is the name of the APIGroup that contains the resources. \
                 If multiple API groups are specified, any action requested against one of \
                 the enumerated resources in any API group will be allowed.",
            )
            .min_items(1),
        )
        .with(
            "non_resource_urls",
            Field::string_list(
                "NonResourceURLs is a set of partial urls that a user should have access to. \
                 *s are allowed, but only as the full, final step in the path. Since \
                 non-resource URLs are not namespaced, this field is only applicable for \
                 ClusterRoles referenced from a ClusterRoleBinding. Rules can either apply to \
                 API resources (such as \"pods\" or \"secrets\") or non-resource URL paths \
                 (such as \"/api\"), but not both.",
            ),
        )
        .with(
            "resource_names",
            Field::string_list(
                "ResourceNames is an optional white list of names that the rule applies to. \
                 An empty set means that everything is allowed.",
            ),
        )
        .with(
            "resources",
            Field::string_list(
                "Resources is a list of resources this rule applies to. \
                 ResourceAll represents all resources.",
            ),
        )
        .with(
            "verbs",
            Field::string_list(
                "Verbs is a list of Verbs that apply to ALL the ResourceKinds and \
                 AttributeRestrictions contained in this rule.",
            ),
        )
}

fn non_empty(v: Vec<String>) -> Option<Vec<String>> {
    if v.is_empty() {
        None
    } else {
        Some(v)
    }
}

impl From<PolicyRule> for rbac::PolicyRule {
    fn from(r: PolicyRule) -> Self {
        rbac::PolicyRule {
            api_groups: non_empty(r.api_groups),
            non_resource_urls: non_empty(r.non_resource_urls),
            resource_names: non_empty(r.resource_names),
            resources: non_empty(r.resources),
            verbs: r.verbs,
        }
    }
}
