//! Container status table
//!
//! Classifies a snapshot of backend containers into badge, label and the
//! actions offered per row. Nothing here drives a state change.

use crate::errors::DashboardError;
use crate::models::container::{ContainerStatus, RemoteContainer};
use crate::render::html::escape;

/// Text of the placeholder row shown when the table cannot be loaded
pub const LOAD_FAILED_MESSAGE: &str = "Failed to load containers";

/// Actions a status row can offer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Start,
    Stop,
    Logs,
}

impl Action {
    pub fn label(&self) -> &'static str {
        match self {
            Action::Start => "Start",
            Action::Stop => "Stop",
            Action::Logs => "Logs",
        }
    }

    /// Button style on the dashboard page
    pub fn button_class(&self) -> &'static str {
        match self {
            Action::Start => "btn btn-sm btn-outline-success",
            Action::Stop => "btn btn-sm btn-outline-danger",
            Action::Logs => "btn btn-sm btn-outline-secondary",
        }
    }
}

/// How a status is presented
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Presentation {
    pub badge_class: &'static str,
    pub label: &'static str,
    pub primary_action: Option<Action>,
}

impl ContainerStatus {
    pub fn presentation(&self) -> Presentation {
        match self {
            ContainerStatus::Running => Presentation {
                badge_class: "text-bg-success",
                label: "Active",
                primary_action: Some(Action::Stop),
            },
            ContainerStatus::Restarting => Presentation {
                badge_class: "text-bg-warning",
                label: "Restarting",
                primary_action: None,
            },
            ContainerStatus::Stopped => Presentation {
                badge_class: "text-bg-danger",
                label: "Stopped",
                primary_action: Some(Action::Start),
            },
        }
    }
}

/// One rendered container row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusRow {
    pub id: String,
    pub name: String,
    pub status: ContainerStatus,
    pub badge_class: &'static str,
    pub label: &'static str,
    /// Primary action, if any, followed by Logs
    pub actions: Vec<Action>,
}

impl From<&RemoteContainer> for StatusRow {
    fn from(container: &RemoteContainer) -> Self {
        let status = ContainerStatus::from(container);
        let presentation = status.presentation();

        let mut actions = Vec::with_capacity(2);
        actions.extend(presentation.primary_action);
        actions.push(Action::Logs);

        Self {
            id: container.id.clone(),
            name: container.name.clone(),
            status,
            badge_class: presentation.badge_class,
            label: presentation.label,
            actions,
        }
    }
}

impl StatusRow {
    pub fn to_html(&self) -> String {
        let buttons: String = self
            .actions
            .iter()
            .map(|action| format!(r#"<button class="{}">{}</button>"#, action.button_class(), action.label()))
            .collect();

        format!(
            concat!(
                "<tr>",
                "<td><code>{id}</code></td>",
                "<td>{name}</td>",
                r#"<td><span class="badge rounded-pill {badge}">{label}</span></td>"#,
                "<td>{buttons}</td>",
                "</tr>"
            ),
            id = escape(&self.id),
            name = escape(&self.name),
            badge = self.badge_class,
            label = self.label,
            buttons = buttons,
        )
    }
}

/// Rendering plan for a successful poll
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatusTable {
    /// Containers whose status is exactly `running`
    pub running_count: usize,
    pub rows: Vec<StatusRow>,
}

impl StatusTable {
    /// Text of the running count element
    pub fn count_label(&self) -> String {
        format!("{} Active", self.running_count)
    }

    /// Table body markup
    pub fn to_html(&self) -> String {
        self.rows.iter().map(StatusRow::to_html).collect()
    }
}

/// Classify a snapshot of containers. Pure.
pub fn render_status(containers: &[RemoteContainer]) -> StatusTable {
    let rows: Vec<StatusRow> = containers.iter().map(StatusRow::from).collect();
    let running_count = rows
        .iter()
        .filter(|row| row.status == ContainerStatus::Running)
        .count();

    StatusTable {
        running_count,
        rows,
    }
}

/// What the status panel shows after a poll
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatusView {
    Table(StatusTable),
    /// The poll failed; the count element is left as it was
    Failed,
}

impl StatusView {
    /// Render a poll result. Failures become the placeholder, never a retry.
    pub fn from_poll(result: Result<Vec<RemoteContainer>, DashboardError>) -> Self {
        match result {
            Ok(containers) => StatusView::Table(render_status(&containers)),
            Err(_) => StatusView::Failed,
        }
    }

    /// New text for the count element, `None` when it must stay untouched
    pub fn count_label(&self) -> Option<String> {
        match self {
            StatusView::Table(table) => Some(table.count_label()),
            StatusView::Failed => None,
        }
    }

    /// Markup for the table body
    pub fn table_body_html(&self) -> String {
        match self {
            StatusView::Table(table) => table.to_html(),
            StatusView::Failed => format!(
                r#"<tr><td colspan="4" class="text-danger">{}</td></tr>"#,
                LOAD_FAILED_MESSAGE
            ),
        }
    }
}
