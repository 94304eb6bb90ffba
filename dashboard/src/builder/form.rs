//! Launch form snapshot
//!
//! A browser-free view of the container launch page: named scalar inputs plus
//! the three repeatable row groups (ports, environment variables, volumes).

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Names of the scalar inputs on the launch page
pub mod fields {
    pub const CONTAINER_NAME: &str = "containerName";
    pub const IMAGE_NAME: &str = "imageName";
    pub const HOST_MACHINE: &str = "hostMachine";
    pub const RESTART_POLICY: &str = "restartPolicy";
    pub const CONTAINER_TYPE: &str = "containerType";
    pub const DESKTOP_ENV: &str = "desktopEnv";
}

/// `containerType` value selecting the desktop variant
pub const CONTAINER_TYPE_WEBTOP: &str = "webtop";

/// `containerType` value selecting the plain variant
pub const CONTAINER_TYPE_NORMAL: &str = "normal";

/// One row of paired inputs
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Row {
    #[serde(default)]
    pub val1: Option<String>,
    #[serde(default)]
    pub val2: Option<String>,
}

impl Row {
    pub fn new(val1: impl Into<String>, val2: impl Into<String>) -> Self {
        Self {
            val1: Some(val1.into()),
            val2: Some(val2.into()),
        }
    }

    /// First value, absent reads as empty
    pub fn first(&self) -> &str {
        self.val1.as_deref().unwrap_or_default()
    }

    /// Second value, absent reads as empty
    pub fn second(&self) -> &str {
        self.val2.as_deref().unwrap_or_default()
    }

    /// Both sides empty or absent
    pub fn is_empty(&self) -> bool {
        self.first().is_empty() && self.second().is_empty()
    }
}

/// An ordered list of paired-input rows
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RowGroup {
    rows: Vec<Row>,
}

impl RowGroup {
    pub fn new(rows: Vec<Row>) -> Self {
        Self { rows }
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Rows with at least one value, in form order
    pub fn filled_rows(&self) -> impl Iterator<Item = &Row> {
        self.rows.iter().filter(|row| !row.is_empty())
    }

    pub fn push(&mut self, row: Row) {
        self.rows.push(row);
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

impl From<Vec<Row>> for RowGroup {
    fn from(rows: Vec<Row>) -> Self {
        Self::new(rows)
    }
}

/// The repeatable sections of the launch form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowGroupKind {
    Ports,
    EnvVariables,
    VolumeMounts,
}

/// Current state of the launch form
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormSnapshot {
    /// Scalar inputs by name
    #[serde(default)]
    pub fields: BTreeMap<String, String>,

    #[serde(default)]
    pub port_mappings: RowGroup,

    #[serde(default)]
    pub env_variables: RowGroup,

    #[serde(default)]
    pub volume_mounts: RowGroup,
}

impl FormSnapshot {
    /// Raw value of a scalar input; missing inputs read as empty
    pub fn field(&self, name: &str) -> &str {
        self.fields.get(name).map(String::as_str).unwrap_or_default()
    }

    pub fn set_field(&mut self, name: &str, value: impl Into<String>) {
        self.fields.insert(name.to_string(), value.into());
    }

    /// Builder-style variant of [`FormSnapshot::set_field`]
    pub fn with_field(mut self, name: &str, value: impl Into<String>) -> Self {
        self.set_field(name, value);
        self
    }

    pub fn group(&self, kind: RowGroupKind) -> &RowGroup {
        match kind {
            RowGroupKind::Ports => &self.port_mappings,
            RowGroupKind::EnvVariables => &self.env_variables,
            RowGroupKind::VolumeMounts => &self.volume_mounts,
        }
    }

    pub fn group_mut(&mut self, kind: RowGroupKind) -> &mut RowGroup {
        match kind {
            RowGroupKind::Ports => &mut self.port_mappings,
            RowGroupKind::EnvVariables => &mut self.env_variables,
            RowGroupKind::VolumeMounts => &mut self.volume_mounts,
        }
    }

    /// Append an empty row to a group
    pub fn add_row(&mut self, kind: RowGroupKind) {
        self.group_mut(kind).push(Row::default());
    }

    /// Remove a row; out of range is a no-op
    pub fn remove_row(&mut self, kind: RowGroupKind, index: usize) {
        let group = self.group_mut(kind);
        if index < group.rows.len() {
            group.rows.remove(index);
        }
    }

    /// Whether the exclusive container type choice selects the desktop variant
    pub fn is_desktop(&self) -> bool {
        self.field(fields::CONTAINER_TYPE) == CONTAINER_TYPE_WEBTOP
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_emptiness() {
        assert!(Row::default().is_empty());
        assert!(Row::new("", "").is_empty());
        assert!(!Row::new("", "x").is_empty());
        assert!(!Row {
            val1: Some("8080".to_string()),
            val2: None,
        }
        .is_empty());
    }

    #[test]
    fn test_add_and_remove_rows() {
        let mut form = FormSnapshot::default();
        form.add_row(RowGroupKind::Ports);
        form.add_row(RowGroupKind::Ports);
        assert_eq!(form.group(RowGroupKind::Ports).len(), 2);

        form.remove_row(RowGroupKind::Ports, 5);
        assert_eq!(form.group(RowGroupKind::Ports).len(), 2);

        form.remove_row(RowGroupKind::Ports, 0);
        assert_eq!(form.group(RowGroupKind::Ports).len(), 1);
        assert!(form.group(RowGroupKind::EnvVariables).is_empty());
    }

    #[test]
    fn test_snapshot_from_json() {
        let json = r#"{
            "fields": {"containerName": "web", "containerType": "normal"},
            "portMappings": [{"val1": "8080", "val2": "80"}, {}],
            "envVariables": [{"val1": "MODE"}]
        }"#;
        let form: FormSnapshot = serde_json::from_str(json).unwrap();

        assert_eq!(form.field(fields::CONTAINER_NAME), "web");
        assert_eq!(form.field(fields::IMAGE_NAME), "");
        assert!(!form.is_desktop());
        assert_eq!(form.port_mappings.len(), 2);
        assert_eq!(form.port_mappings.filled_rows().count(), 1);
        assert_eq!(form.env_variables.rows()[0].second(), "");
        assert!(form.volume_mounts.is_empty());
    }
}
