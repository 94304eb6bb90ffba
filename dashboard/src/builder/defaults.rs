//! Form presets for the desktop variant

use crate::builder::form::{fields, FormSnapshot, Row, RowGroup, CONTAINER_TYPE_WEBTOP};

/// Container name used when the operator has not typed one
pub const WEBTOP_DEFAULT_NAME: &str = "webtop";

/// Restart policy preset for desktop containers
pub const WEBTOP_RESTART_POLICY: &str = "unless-stopped";

/// Pre-populate the form for a desktop container.
///
/// Replaces the port, environment and volume rows with the desktop presets and
/// keeps an operator-typed container name.
pub fn apply_desktop_defaults(form: &mut FormSnapshot) {
    form.set_field(fields::CONTAINER_TYPE, CONTAINER_TYPE_WEBTOP);

    if form.field(fields::CONTAINER_NAME).is_empty() {
        form.set_field(fields::CONTAINER_NAME, WEBTOP_DEFAULT_NAME);
    }

    form.port_mappings = RowGroup::new(vec![Row::new("3000", "3000"), Row::new("3001", "3001")]);

    form.env_variables = RowGroup::new(vec![
        Row::new("PUID", "1000"),
        Row::new("PGID", "1000"),
        Row::new("TZ", "Etc/UTC"),
    ]);

    form.set_field(fields::RESTART_POLICY, WEBTOP_RESTART_POLICY);

    // Host path is left for the operator
    form.volume_mounts = RowGroup::new(vec![Row {
        val1: None,
        val2: Some("/config".to_string()),
    }]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::config::build_request;

    #[test]
    fn test_defaults_keep_typed_name() {
        let mut form = FormSnapshot::default().with_field(fields::CONTAINER_NAME, "desk-1");
        apply_desktop_defaults(&mut form);
        assert_eq!(form.field(fields::CONTAINER_NAME), "desk-1");
    }

    #[test]
    fn test_defaults_build_desktop_request() {
        let mut form = FormSnapshot::default()
            .with_field(fields::DESKTOP_ENV, "debian-xfce")
            .with_field(fields::RESTART_POLICY, "no");
        form.port_mappings = RowGroup::new(vec![Row::new("80", "80")]);

        apply_desktop_defaults(&mut form);
        let request = build_request(&form);

        assert_eq!(request.name, "webtop");
        assert_eq!(request.restart_policy, "unless-stopped");
        assert_eq!(request.resolved_image(), "lscr.io/linuxserver/webtop:debian-xfce");
        assert_eq!(request.ports.len(), 2);
        assert_eq!(request.ports[1].external, 3001);
        assert_eq!(request.environment_variables["TZ"], "Etc/UTC");
        assert_eq!(request.environment_variables.len(), 3);
        // the volume row has no host path yet, so it does not make it into the map
        assert!(request.volume_mounts.is_empty());
    }
}
