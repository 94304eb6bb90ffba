//! Build a deployment request from the launch form

use std::collections::BTreeMap;

use tracing::{debug, warn};

use crate::builder::form::{fields, FormSnapshot, RowGroup};
use crate::models::deployment::{ContainerVariant, DeploymentRequest, PortMapping};

/// Build the deployment request for the current form state.
///
/// Never fails: malformed input yields a well-formed request that the backend
/// is left to reject.
pub fn build_request(form: &FormSnapshot) -> DeploymentRequest {
    let variant = if form.is_desktop() {
        ContainerVariant::Desktop {
            profile: form.field(fields::DESKTOP_ENV).to_string(),
        }
    } else {
        ContainerVariant::Plain {
            image: form.field(fields::IMAGE_NAME).to_string(),
        }
    };

    let request = DeploymentRequest {
        name: form.field(fields::CONTAINER_NAME).to_string(),
        variant,
        host_machine_id: form.field(fields::HOST_MACHINE).to_string(),
        restart_policy: form.field(fields::RESTART_POLICY).to_string(),
        ports: fold_ports(&form.port_mappings),
        environment_variables: fold_pairs(&form.env_variables),
        volume_mounts: fold_pairs(&form.volume_mounts),
    };

    debug!("Deployment data: {:?}", request);
    request
}

/// Fold port rows into mappings, coercing each side to an integer
fn fold_ports(group: &RowGroup) -> Vec<PortMapping> {
    group
        .filled_rows()
        .map(|row| PortMapping {
            external: coerce_port(row.first()),
            internal: coerce_port(row.second()),
        })
        .collect()
}

/// Fold key/value rows into a map. Rows without a key are dropped and a
/// later duplicate key replaces the earlier one.
fn fold_pairs(group: &RowGroup) -> BTreeMap<String, String> {
    group
        .filled_rows()
        .filter(|row| !row.first().is_empty())
        .map(|row| (row.first().to_string(), row.second().to_string()))
        .collect()
}

/// Lenient integer parse of a port field.
///
/// Leading whitespace and a sign are accepted and the leading digit run is
/// used; anything else, including an empty field, becomes 0.
pub fn coerce_port(raw: &str) -> i64 {
    let trimmed = raw.trim_start();
    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let digits_end = rest
        .char_indices()
        .find(|(_, c)| !c.is_ascii_digit())
        .map(|(i, _)| i)
        .unwrap_or(rest.len());

    match rest[..digits_end].parse::<i64>() {
        Ok(value) if negative => -value,
        Ok(value) => value,
        Err(_) => {
            if !raw.trim().is_empty() {
                warn!("Port value {:?} is not a number, sending 0", raw);
            }
            0
        }
    }
}
