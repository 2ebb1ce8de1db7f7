use atlas_service_broker::broker::domain::model::{
    enums::broker_domain_error::BrokerDomainError,
    value_objects::{binding_id::BindingId, cluster_name::ClusterName, instance_id::InstanceId},
};

use crate::support::cluster_name_for;

fn is_valid_cluster_name(name: &str) -> bool {
    name.len() <= 23
        && name.starts_with(|c: char| c.is_ascii_lowercase())
        && name
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
}

#[test]
fn identifiers_that_already_are_cluster_names_are_kept() {
    assert_eq!(cluster_name_for("instance-1").value(), "instance-1");
    assert_eq!(cluster_name_for("orders-db").value(), "orders-db");
}

#[test]
fn rewritten_identifiers_get_a_digest_suffix() {
    let uppercase = cluster_name_for("Orders-DB");
    let punctuated = cluster_name_for("my_instance.1");
    let leading_digit = cluster_name_for("42abc");

    assert!(uppercase.value().starts_with("orders-db-"));
    assert!(punctuated.value().starts_with("my-instance-1-"));
    assert!(leading_digit.value().starts_with("c42abc-"));
    for name in [&uppercase, &punctuated, &leading_digit] {
        assert!(is_valid_cluster_name(name.value()), "{name:?}");
    }
}

#[test]
fn identifiers_differing_only_in_case_or_punctuation_do_not_share_a_cluster() {
    let groups = [
        vec!["a.b", "a-b", "a_b", "a~b"],
        vec!["Orders", "orders", "ORDERS"],
        vec!["1abc", "c1abc"],
    ];

    for group in groups {
        let names: Vec<ClusterName> = group.iter().map(|id| cluster_name_for(id)).collect();
        for (i, first) in names.iter().enumerate() {
            assert!(is_valid_cluster_name(first.value()), "{first:?}");
            for second in &names[i + 1..] {
                assert_ne!(first, second, "ids {group:?}");
            }
        }
    }
}

#[test]
fn verbatim_names_never_collide_with_digest_names() {
    let hashed = cluster_name_for("Orders");
    let lookalike = cluster_name_for(hashed.value());

    assert_ne!(hashed, lookalike);
    assert!(is_valid_cluster_name(lookalike.value()));
}

#[test]
fn long_identifiers_are_shortened_with_a_digest_suffix() {
    let name = cluster_name_for("8f3c1a2e-5b7d-4e9f-a0b1-c2d3e4f5a6b7");

    assert_eq!(name.value().len(), 23);
    assert!(name.value().starts_with("c8f3c1a2e-5b7d-"));
    assert!(is_valid_cluster_name(name.value()));
}

#[test]
fn derivation_is_deterministic() {
    let instance_id =
        InstanceId::new("8f3c1a2e-5b7d-4e9f-a0b1-c2d3e4f5a6b7".to_string()).expect("valid id");

    assert_eq!(
        ClusterName::from_instance_id(&instance_id),
        ClusterName::from_instance_id(&instance_id)
    );
}

#[test]
fn identifiers_sharing_a_long_prefix_map_to_distinct_names() {
    let first = cluster_name_for("tenant-production-orders-primary");
    let second = cluster_name_for("tenant-production-orders-replica");

    assert_ne!(first, second);
    assert!(is_valid_cluster_name(first.value()));
    assert!(is_valid_cluster_name(second.value()));
}

#[test]
fn identifiers_are_trimmed_and_validated() {
    let instance_id = InstanceId::new("  instance-1 ".to_string()).expect("valid id");
    assert_eq!(instance_id.value(), "instance-1");

    assert!(matches!(
        InstanceId::new("".to_string()),
        Err(BrokerDomainError::ValidationError(_))
    ));
    assert!(matches!(
        InstanceId::new("bad/id".to_string()),
        Err(BrokerDomainError::ValidationError(_))
    ));
    assert!(matches!(
        BindingId::new("-leading-dash".to_string()),
        Err(BrokerDomainError::ValidationError(_))
    ));
}
