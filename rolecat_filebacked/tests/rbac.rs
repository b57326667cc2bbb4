use serde_yaml::{Mapping, Sequence};

use rolecat_definitions::{ErrorKind, PolicyRule, RoleKind, SubjectKind};
use rolecat_filebacked::{policy_rule, policy_rules, role_ref, subject, subjects};

fn mapping(yaml: &str) -> Mapping {
    serde_yaml::from_str(yaml).unwrap()
}

fn sequence(yaml: &str) -> Sequence {
    serde_yaml::from_str(yaml).unwrap()
}

#[test]
fn optional_fields_can_be_omitted() {
    assert_eq!(policy_rule(&Mapping::new()).unwrap(), PolicyRule::default());
    assert!(role_ref(&mapping("kind: Role\nname: reader")).is_ok());
    assert!(subject(&mapping("kind: Group\nname: devs")).is_ok());
}

#[test]
fn role_ref_kinds() {
    assert_eq!(role_ref(&mapping("kind: Role\nname: a")).unwrap().kind, RoleKind::Role);
    assert_eq!(role_ref(&mapping("kind: ClusterRole\nname: a")).unwrap().kind, RoleKind::ClusterRole);
    for bad in &["Deployment", "''", "role"] {
        let err = role_ref(&mapping(&format!("kind: {}\nname: a", bad))).unwrap_err();
        match err.kind() {
            ErrorKind::InvalidValue(f, _, allowed) => {
                assert_eq!(f, "kind");
                assert_eq!(allowed, &vec!["Role".to_string(), "ClusterRole".into()]);
            }
            k => panic!("unexpected error {:?} for {}", k, bad),
        }
        assert!(err.to_string().contains("Role, ClusterRole"));
    }
}

#[test]
fn subject_kinds() {
    for (raw, kind) in &[
        ("Group", SubjectKind::Group),
        ("ServiceAccount", SubjectKind::ServiceAccount),
        ("User", SubjectKind::User),
    ] {
        let s = subject(&mapping(&format!("kind: {}\nname: a", raw))).unwrap();
        assert_eq!(s.kind, *kind);
    }
    let err = subject(&mapping("kind: Team\nname: a")).unwrap_err();
    match err.kind() {
        ErrorKind::InvalidValue(f, v, allowed) => {
            assert_eq!(f, "kind");
            assert_eq!(v, "Team");
            assert_eq!(allowed.len(), 3);
        }
        k => panic!("unexpected error {:?}", k),
    }
}

#[test]
fn api_group_defaults() {
    let rr = role_ref(&mapping("kind: ClusterRole\nname: view")).unwrap();
    assert_eq!(rr.api_group, "rbac.authorization.k8s.io");
    let s = subject(&mapping("kind: User\nname: jane")).unwrap();
    assert_eq!(s.api_group, "");
    let s = subject(&mapping("kind: User\nname: jane\napi_group: rbac.authorization.k8s.io")).unwrap();
    assert_eq!(s.api_group, "rbac.authorization.k8s.io");
}

#[test]
fn api_groups_cardinality() {
    match policy_rule(&mapping("api_groups: []")).unwrap_err().kind() {
        ErrorKind::MinItems(f, min) => {
            assert_eq!(f, "api_groups");
            assert_eq!(*min, 1);
        }
        k => panic!("unexpected error {:?}", k),
    }
    assert!(policy_rule(&mapping("verbs: [get]")).is_ok());
    assert_eq!(policy_rule(&mapping("api_groups: [apps]")).unwrap().api_groups, vec!["apps"]);
}

#[test]
fn list_order_preserved() {
    let rule = policy_rule(&mapping(
        "api_groups: [batch, \"\", batch]\nresources: [jobs, pods]\nverbs: [get, list, get]",
    ))
    .unwrap();
    assert_eq!(rule.verbs, vec!["get", "list", "get"]);
    assert_eq!(rule.resources, vec!["jobs", "pods"]);
    assert_eq!(rule.api_groups, vec!["batch", "", "batch"]);
}

#[test]
fn namespace_on_user_accepted() {
    let s = subject(&mapping("kind: User\nname: jane\nnamespace: default")).unwrap();
    assert_eq!(s.kind, SubjectKind::User);
    assert_eq!(s.namespace, Some("default".to_string()));
}

#[test]
fn required_fields() {
    match role_ref(&mapping("name: view")).unwrap_err().kind() {
        ErrorKind::MissingField(f) => assert_eq!(f, "kind"),
        k => panic!("unexpected error {:?}", k),
    }
    match subject(&mapping("kind: User")).unwrap_err().kind() {
        ErrorKind::MissingField(f) => assert_eq!(f, "name"),
        k => panic!("unexpected error {:?}", k),
    }
    match subject(&mapping("kind: User\nname: ~")).unwrap_err().kind() {
        ErrorKind::MissingField(f) => assert_eq!(f, "name"),
        k => panic!("unexpected error {:?}", k),
    }
}

#[test]
fn shape_errors() {
    match role_ref(&mapping("kind: Role\nname: a\nnamespace: x")).unwrap_err().kind() {
        ErrorKind::UnknownField(f) => assert_eq!(f, "namespace"),
        k => panic!("unexpected error {:?}", k),
    }
    match policy_rule(&mapping("verbs: get")).unwrap_err().kind() {
        ErrorKind::InvalidType(f, _) => assert_eq!(f, "verbs"),
        k => panic!("unexpected error {:?}", k),
    }
    match subject(&mapping("kind: User\nname: [a]")).unwrap_err().kind() {
        ErrorKind::InvalidType(f, _) => assert_eq!(f, "name"),
        k => panic!("unexpected error {:?}", k),
    }
}

#[test]
fn lists_of_entities() {
    let rules = policy_rules(&sequence(
        r#"
- api_groups: [""]
  resources: [pods]
  verbs: [get, watch, list]
- non_resource_urls: [/healthz, /healthz/*]
  verbs: [get]
"#,
    ))
    .unwrap();
    assert_eq!(rules.len(), 2);
    assert_eq!(rules[0].verbs, vec!["get", "watch", "list"]);
    assert_eq!(rules[1].non_resource_urls, vec!["/healthz", "/healthz/*"]);

    let subs = subjects(&sequence(
        r#"
- kind: ServiceAccount
  name: default
  namespace: kube-system
- kind: Group
  name: system:masters
"#,
    ))
    .unwrap();
    assert_eq!(subs[0].namespace, Some("kube-system".to_string()));
    assert_eq!(subs[1].name, "system:masters");

    let err = subjects(&sequence("- kind: Group\n  name: a\n- kind: Nope\n  name: b")).unwrap_err();
    match err.kind() {
        ErrorKind::InvalidValue(f, v, _) => {
            assert_eq!(f, "kind");
            assert_eq!(v, "Nope");
        }
        k => panic!("unexpected error {:?}", k),
    }
}

#[test]
fn into_kubernetes_objects() {
    let rr = role_ref(&mapping("kind: ClusterRole\nname: cluster-admin")).unwrap();
    let k: k8s_openapi::api::rbac::v1::RoleRef = rr.into();
    assert_eq!(k.api_group, "rbac.authorization.k8s.io");
    assert_eq!(k.kind, "ClusterRole");
}
