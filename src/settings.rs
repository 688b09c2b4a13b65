//! Dashboard settings.
//!
//! Mirrors the settings tab of the dashboard (refresh interval, notification
//! toggle, theme) and adds the knobs the notification layer needs: how long a
//! confirmation stays visible and the `minijinja` templates used to word it.
//!
//! # Examples
//!
//! ```
//! use serverboard::settings::DashboardSettings;
//!
//! let settings = DashboardSettings::default();
//! assert!(settings.notifications_enabled);
//! assert_eq!(settings.notification_duration_ms, 2000);
//!
//! let quiet = DashboardSettings::quiet();
//! assert!(!quiet.notifications_enabled);
//! ```

use minijinja::Environment;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;

/// Message templates for the three confirmations.
///
/// `copied` receives `ip`; `updated` and `deleted` receive `name` and `id`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NotificationTemplates {
    /// Shown after an address is copied.
    pub copied: String,
    /// Shown after a record is updated.
    pub updated: String,
    /// Shown after a record is deleted.
    pub deleted: String,
}

impl Default for NotificationTemplates {
    fn default() -> Self {
        Self {
            copied: "IP {{ ip }} copied to clipboard".to_owned(),
            updated: "Server {{ name }} updated".to_owned(),
            deleted: "Server {{ name }} deleted".to_owned(),
        }
    }
}

impl NotificationTemplates {
    fn entries(&self) -> [(&'static str, &str); 3] {
        [
            ("copied", self.copied.as_str()),
            ("updated", self.updated.as_str()),
            ("deleted", self.deleted.as_str()),
        ]
    }
}

/// Operator-facing dashboard configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardSettings {
    /// Seconds between view refreshes.
    pub refresh_interval_secs: u64,
    /// Whether confirmations are shown at all.
    pub notifications_enabled: bool,
    /// Colour theme label.
    pub theme: String,
    /// How long a confirmation stays visible, in milliseconds.
    pub notification_duration_ms: u64,
    /// Confirmation wording.
    pub templates: NotificationTemplates,
}

impl Default for DashboardSettings {
    fn default() -> Self {
        Self {
            refresh_interval_secs: 30,
            notifications_enabled: true,
            theme: "terminal_green".to_owned(),
            notification_duration_ms: 2000,
            templates: NotificationTemplates::default(),
        }
    }
}

/// Errors raised while loading settings.
#[derive(Debug, Clone, Error)]
pub enum SettingsError {
    /// The settings document is not valid JSON for this schema.
    #[error("invalid settings document: {0}")]
    Parse(Arc<serde_json::Error>),

    /// A notification template does not compile.
    #[error("invalid {name} notification template: {reason}")]
    InvalidTemplate {
        /// Template slot (`copied`, `updated`, `deleted`).
        name: &'static str,
        /// Compiler error text.
        reason: String,
    },
}

impl DashboardSettings {
    /// Creates settings with notifications switched off.
    #[must_use]
    pub fn quiet() -> Self {
        Self {
            notifications_enabled: false,
            ..Self::default()
        }
    }

    /// Parses a JSON settings document. Missing keys take their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::Parse`] for malformed JSON and
    /// [`SettingsError::InvalidTemplate`] when a template does not compile.
    pub fn from_json_str(document: &str) -> Result<Self, SettingsError> {
        let settings: Self =
            serde_json::from_str(document).map_err(|err| SettingsError::Parse(Arc::new(err)))?;
        settings.validate()?;
        Ok(settings)
    }

    /// Checks that every notification template compiles.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::InvalidTemplate`] naming the first broken
    /// template.
    pub fn validate(&self) -> Result<(), SettingsError> {
        let environment = Environment::new();
        for (name, source) in self.templates.entries() {
            environment
                .template_from_str(source)
                .map_err(|err| SettingsError::InvalidTemplate {
                    name,
                    reason: err.to_string(),
                })?;
        }
        Ok(())
    }

    /// Returns the refresh interval.
    #[must_use]
    pub const fn refresh_interval(&self) -> Duration {
        Duration::from_secs(self.refresh_interval_secs)
    }

    /// Returns how long a confirmation stays visible.
    #[must_use]
    pub const fn notification_duration(&self) -> Duration {
        Duration::from_millis(self.notification_duration_ms)
    }
}
