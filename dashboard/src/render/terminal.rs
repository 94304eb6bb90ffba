//! Terminal rendering for the CLI

use colored::Colorize;

use crate::models::container::ContainerStatus;
use crate::models::host::HostOption;
use crate::render::status::{StatusView, LOAD_FAILED_MESSAGE};

/// Render the status panel as text lines
pub fn format_status(view: &StatusView) -> String {
    let table = match view {
        StatusView::Table(table) => table,
        StatusView::Failed => return format!("{}\n", LOAD_FAILED_MESSAGE.red()),
    };

    let mut out = format!("{}\n", table.count_label().as_str().bold());
    for row in &table.rows {
        let label = format!("{:<12}", row.label);
        let label = match row.status {
            ContainerStatus::Running => label.as_str().green(),
            ContainerStatus::Restarting => label.as_str().yellow(),
            ContainerStatus::Stopped => label.as_str().red(),
        };
        let actions: Vec<&str> = row.actions.iter().map(|a| a.label()).collect();
        out.push_str(&format!(
            "{:<14} {:<24} {} [{}]\n",
            row.id,
            row.name,
            label,
            actions.join(", ")
        ));
    }
    out
}

/// Render the host selector options as text lines
pub fn format_hosts(options: &[HostOption]) -> String {
    options
        .iter()
        .map(|option| format!("{}\n", option.label))
        .collect()
}
