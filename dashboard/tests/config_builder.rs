//! Launch form to deployment request

use proptest::prelude::*;

use theseus_dashboard::builder::config::{build_request, coerce_port};
use theseus_dashboard::builder::form::{
    fields, FormSnapshot, Row, RowGroupKind, CONTAINER_TYPE_NORMAL, CONTAINER_TYPE_WEBTOP,
};
use theseus_dashboard::models::deployment::ContainerVariant;

fn blank_rows(count: usize) -> Vec<Row> {
    (0..count)
        .map(|i| {
            if i % 2 == 0 {
                Row::default()
            } else {
                Row::new("", "")
            }
        })
        .collect()
}

#[test]
fn test_all_blank_rows_build_empty_collections() {
    for count in 0..5 {
        let mut form = FormSnapshot::default();
        form.port_mappings = blank_rows(count).into();
        form.env_variables = blank_rows(count).into();
        form.volume_mounts = blank_rows(count).into();

        let request = build_request(&form);
        assert!(request.ports.is_empty());
        assert!(request.environment_variables.is_empty());
        assert!(request.volume_mounts.is_empty());
    }
}

#[test]
fn test_non_numeric_ports_become_zero() {
    let mut form = FormSnapshot::default();
    form.port_mappings = vec![Row::new("http", "x80"), Row::new("  ", "three")].into();

    let request = build_request(&form);
    assert_eq!(request.ports.len(), 2);
    assert!(request.ports.iter().all(|p| p.external == 0 && p.internal == 0));
}

#[test]
fn test_maps_never_hold_empty_key() {
    let mut form = FormSnapshot::default();
    for kind in [RowGroupKind::EnvVariables, RowGroupKind::VolumeMounts] {
        form.add_row(kind);
        form.group_mut(kind).push(Row::new("", "value"));
        form.group_mut(kind).push(Row {
            val1: None,
            val2: Some("value".to_string()),
        });
        form.group_mut(kind).push(Row::new("key", ""));
    }

    let request = build_request(&form);
    assert!(!request.environment_variables.contains_key(""));
    assert!(!request.volume_mounts.contains_key(""));
    assert_eq!(request.environment_variables.get("key").map(String::as_str), Some(""));
    assert_eq!(request.volume_mounts.len(), 1);
}

#[test]
fn test_variant_switch_changes_only_derived_fields() {
    let plain = FormSnapshot::default()
        .with_field(fields::CONTAINER_NAME, "desk")
        .with_field(fields::IMAGE_NAME, "alpine:3")
        .with_field(fields::DESKTOP_ENV, "alpine-mate")
        .with_field(fields::CONTAINER_TYPE, CONTAINER_TYPE_NORMAL);
    let desktop = plain.clone().with_field(fields::CONTAINER_TYPE, CONTAINER_TYPE_WEBTOP);

    let plain_request = build_request(&plain);
    let desktop_request = build_request(&desktop);

    assert_eq!(
        plain_request.variant,
        ContainerVariant::Plain {
            image: "alpine:3".to_string()
        }
    );
    assert_eq!(
        desktop_request.variant,
        ContainerVariant::Desktop {
            profile: "alpine-mate".to_string()
        }
    );
    assert_eq!(desktop_request.resolved_image(), "lscr.io/linuxserver/webtop:alpine-mate");
    assert_eq!(plain_request.name, desktop_request.name);
}

fn any_cell() -> impl Strategy<Value = Option<String>> {
    prop_oneof![Just(None), Just(Some(String::new())), "[ -~]{0,8}".prop_map(Some)]
}

fn any_row() -> impl Strategy<Value = Row> {
    (any_cell(), any_cell()).prop_map(|(val1, val2)| Row { val1, val2 })
}

fn blank_row() -> impl Strategy<Value = Row> {
    (
        prop_oneof![Just(None), Just(Some(String::new()))],
        prop_oneof![Just(None), Just(Some(String::new()))],
    )
        .prop_map(|(val1, val2)| Row { val1, val2 })
}

proptest! {
    #[test]
    fn prop_blank_rows_build_empty_collections(
        ports in prop::collection::vec(blank_row(), 0..6),
        env in prop::collection::vec(blank_row(), 0..6),
        volumes in prop::collection::vec(blank_row(), 0..6),
    ) {
        let mut form = FormSnapshot::default();
        form.port_mappings = ports.into();
        form.env_variables = env.into();
        form.volume_mounts = volumes.into();

        let request = build_request(&form);
        prop_assert!(request.ports.is_empty());
        prop_assert!(request.environment_variables.is_empty());
        prop_assert!(request.volume_mounts.is_empty());
    }

    #[test]
    fn prop_rows_fold_without_empty_keys(
        ports in prop::collection::vec(any_row(), 0..8),
        env in prop::collection::vec(any_row(), 0..8),
        volumes in prop::collection::vec(any_row(), 0..8),
    ) {
        let filled_ports = ports.iter().filter(|row| !row.is_empty()).count();

        let mut form = FormSnapshot::default();
        form.port_mappings = ports.into();
        form.env_variables = env.into();
        form.volume_mounts = volumes.into();

        let request = build_request(&form);
        prop_assert_eq!(request.ports.len(), filled_ports);
        prop_assert!(!request.environment_variables.contains_key(""));
        prop_assert!(!request.volume_mounts.contains_key(""));
    }

    #[test]
    fn prop_non_numeric_port_text_is_zero(external in "[a-zA-Z]{1,8}", internal in "[a-zA-Z.:/]{1,8}") {
        let mut form = FormSnapshot::default();
        form.port_mappings = vec![Row::new(external, internal)].into();

        let request = build_request(&form);
        prop_assert_eq!(request.ports.len(), 1);
        prop_assert_eq!(request.ports[0].external, 0);
        prop_assert_eq!(request.ports[0].internal, 0);
    }

    #[test]
    fn prop_port_numbers_parse(port in any::<u16>(), suffix in "[a-z]{0,4}") {
        prop_assert_eq!(coerce_port(&format!("{}{}", port, suffix)), i64::from(port));
        prop_assert_eq!(coerce_port(&format!("  {}", port)), i64::from(port));
    }
}
