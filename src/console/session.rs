//! Interactive session tying commands to the registry and form.

use mockable::Clock;
use thiserror::Error;

use super::command::{Command, DraftField};
use super::view::{self, ViewError};
use crate::server_registry::domain::{ParseServerStatusError, ServerId, ServerRecord};
use crate::server_registry::services::{
    FormError, SaveOutcome, ServerDraft, ServerForm, ServerRegistry, ServerRegistryError,
};
use crate::settings::DashboardSettings;

/// What the caller should do after a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// Show this text and keep reading input.
    Output(String),
    /// Leave the dashboard.
    Quit,
}

/// Errors raised while executing a command.
#[derive(Debug, Clone, Error)]
pub enum SessionError {
    /// The registry rejected the operation.
    #[error(transparent)]
    Registry(#[from] ServerRegistryError),

    /// The form is not in the required state.
    #[error(transparent)]
    Form(#[from] FormError),

    /// The status value is not `online` or `offline`.
    #[error(transparent)]
    Status(#[from] ParseServerStatusError),

    /// A view failed to render.
    #[error(transparent)]
    View(#[from] ViewError),
}

/// The presentation layer's state: the registry plus one form dialog.
pub struct Session<C>
where
    C: Clock,
{
    registry: ServerRegistry<C>,
    form: ServerForm,
    settings: DashboardSettings,
}

impl<C> Session<C>
where
    C: Clock,
{
    /// Creates a session over an injected registry.
    #[must_use]
    pub fn new(registry: ServerRegistry<C>, settings: DashboardSettings) -> Self {
        Self {
            registry,
            form: ServerForm::new(),
            settings,
        }
    }

    /// Returns the registry.
    #[must_use]
    pub const fn registry(&self) -> &ServerRegistry<C> {
        &self.registry
    }

    /// Returns the form dialog.
    #[must_use]
    pub const fn form(&self) -> &ServerForm {
        &self.form
    }

    /// Executes one command.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError`] when the command cannot be carried out; the
    /// registry and form are left as they were.
    pub fn execute(&mut self, command: Command) -> Result<Reply, SessionError> {
        let text = match command {
            Command::List => {
                view::render_dashboard(self.registry.list(), self.registry.last_updated())?
            }
            Command::Show(id) => view::render_card(self.find(id)?)?,
            Command::Copy(id) => {
                let ip = self.find(id)?.ip().to_owned();
                self.registry.copy_address(&ip);
                format!("> copied {ip}")
            }
            Command::Add => view::render_draft(self.form.open_add(&self.registry))?,
            Command::Edit(id) => view::render_draft(self.form.open_edit(&self.registry, id)?)?,
            Command::Set { field, value } => {
                let draft = self.form.draft_mut().ok_or(FormError::NotOpen)?;
                apply_field(draft, field, value)?;
                view::render_draft(draft)?
            }
            Command::Save => match self.form.save(&mut self.registry)? {
                SaveOutcome::Added(record) => format!("> added server {}", record.id()),
                SaveOutcome::Updated(record) => format!("> saved server {}", record.id()),
            },
            Command::Cancel => {
                self.form.cancel()?;
                "> changes discarded".to_owned()
            }
            Command::Delete(id) => {
                let removed = self.registry.remove(id)?;
                format!("> deleted server {}", removed.id())
            }
            Command::Settings => view::render_settings(&self.settings)?,
            Command::Help => view::HELP.to_owned(),
            Command::Quit => return Ok(Reply::Quit),
        };
        Ok(Reply::Output(text))
    }

    fn find(&self, id: ServerId) -> Result<&ServerRecord, SessionError> {
        self.registry
            .find(id)
            .ok_or_else(|| ServerRegistryError::NotFound(id).into())
    }
}

fn apply_field(
    draft: &mut ServerDraft,
    field: DraftField,
    value: String,
) -> Result<(), ParseServerStatusError> {
    match field {
        DraftField::Name => draft.fields.name = value,
        DraftField::Ip => draft.fields.ip = value,
        DraftField::Status => draft.set_status_str(&value)?,
        DraftField::Location => draft.fields.location = value,
        DraftField::Uptime => draft.fields.uptime = value,
    }
    Ok(())
}
