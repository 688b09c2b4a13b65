//! Text rendering of the dashboard.

use chrono::{DateTime, Utc};
use minijinja::{Environment, context};
use thiserror::Error;

use crate::server_registry::domain::ServerRecord;
use crate::server_registry::services::ServerDraft;
use crate::settings::DashboardSettings;

const DASHBOARD_TEMPLATE: &str = "\
> SERVER IP LIST
System monitoring interface v2.4.1
{% for server in servers %}
[{{ server.id }}] {{ server.name }}  {{ server.status | upper }}
    location   {{ server.location }}
    ip         {{ server.ip }}
    uptime     {{ server.uptime }}
{% else %}
(no servers)
{% endfor %}
> System operational | Last update: {{ last_update }}";

const CARD_TEMPLATE: &str = "\
[{{ server.id }}] {{ server.name }}  {{ server.status | upper }}
    location   {{ server.location }}
    ip         {{ server.ip }}
    uptime     {{ server.uptime }}";

const DRAFT_TEMPLATE: &str = "\
{% if id is none %}> NEW SERVER{% else %}> EDIT SERVER {{ id }}{% endif %}
    name       {{ fields.name }}
    ip         {{ fields.ip }}
    status     {{ fields.status }}
    location   {{ fields.location }}
    uptime     {{ fields.uptime }}
(set <field> <value>, then save or cancel)";

const SETTINGS_TEMPLATE: &str = "\
> SYSTEM SETTINGS
> refresh_interval: {{ refresh_interval_secs }}s
> notification_enabled: {{ notifications_enabled }}
> theme: {{ theme }}";

/// Command reference shown by `help`.
pub const HELP: &str = "\
list                    show every server
show <id>               show one server
copy <id>               copy a server's IP to the clipboard
add                     open the add form
edit <id>               open the edit form
set <field> <value>     change name, ip, status, location or uptime
save | cancel           close the form
delete <id>             delete a server
settings                show settings
quit                    leave";

/// Error raised when a view template fails to render.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("failed to render {view} view: {reason}")]
pub struct ViewError {
    /// View being rendered.
    pub view: &'static str,
    /// Renderer error text.
    pub reason: String,
}

fn render(view: &'static str, template: &str, ctx: minijinja::Value) -> Result<String, ViewError> {
    Environment::new()
        .render_str(template, ctx)
        .map_err(|err| ViewError {
            view,
            reason: err.to_string(),
        })
}

/// Renders the server list with the footer timestamp.
///
/// # Errors
///
/// Returns [`ViewError`] when rendering fails.
pub fn render_dashboard(
    servers: &[ServerRecord],
    last_update: DateTime<Utc>,
) -> Result<String, ViewError> {
    render(
        "dashboard",
        DASHBOARD_TEMPLATE,
        context! {
            servers => servers,
            last_update => last_update.format("%H:%M:%S").to_string(),
        },
    )
}

/// Renders a single server card.
///
/// # Errors
///
/// Returns [`ViewError`] when rendering fails.
pub fn render_card(server: &ServerRecord) -> Result<String, ViewError> {
    render("card", CARD_TEMPLATE, context! { server => server })
}

/// Renders the open form.
///
/// # Errors
///
/// Returns [`ViewError`] when rendering fails.
pub fn render_draft(draft: &ServerDraft) -> Result<String, ViewError> {
    render(
        "form",
        DRAFT_TEMPLATE,
        context! {
            id => draft.id().map(|id| id.value()),
            fields => &draft.fields,
        },
    )
}

/// Renders the settings tab.
///
/// # Errors
///
/// Returns [`ViewError`] when rendering fails.
pub fn render_settings(settings: &DashboardSettings) -> Result<String, ViewError> {
    render("settings", SETTINGS_TEMPLATE, minijinja::Value::from_serialize(settings))
}
