//! Server record aggregate and its editable field set.

use super::{ServerId, ServerStatus};
use serde::{Deserialize, Serialize};

/// Placeholder address seeded into a fresh add-form draft.
pub const PLACEHOLDER_IP: &str = "0.0.0.0";
/// Placeholder location seeded into a fresh add-form draft.
pub const PLACEHOLDER_LOCATION: &str = "Unknown";
/// Placeholder uptime seeded into a fresh add-form draft.
pub const PLACEHOLDER_UPTIME: &str = "0%";

/// Every field of a server record except its identifier.
///
/// All strings are free-form. The address is not checked to be a real IP
/// and the uptime is an arbitrary display string such as `"99.9%"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerFields {
    /// Display label, e.g. `ALPHA-SRV-01`.
    pub name: String,
    /// Address shown on the card and copied to the clipboard.
    pub ip: String,
    /// Reachability status.
    pub status: ServerStatus,
    /// Data-centre or city label.
    pub location: String,
    /// Uptime display string.
    pub uptime: String,
}

impl ServerFields {
    /// Creates a field set from its parts.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        ip: impl Into<String>,
        status: ServerStatus,
        location: impl Into<String>,
        uptime: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            ip: ip.into(),
            status,
            location: location.into(),
            uptime: uptime.into(),
        }
    }

    /// Template used when the operator opens the add form.
    ///
    /// `position` is the 1-based slot the new record would take; it is
    /// rendered zero-padded to two digits (`NEW-SRV-07`).
    #[must_use]
    pub fn placeholder(position: usize) -> Self {
        Self::new(
            format!("NEW-SRV-{position:02}"),
            PLACEHOLDER_IP,
            ServerStatus::Offline,
            PLACEHOLDER_LOCATION,
            PLACEHOLDER_UPTIME,
        )
    }
}

/// Partial replacement of a record's mutable fields.
///
/// Fields left as `None` keep their stored value. A patch built from a full
/// [`ServerFields`] replaces everything except the identifier.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ServerPatch {
    name: Option<String>,
    ip: Option<String>,
    status: Option<ServerStatus>,
    location: Option<String>,
    uptime: Option<String>,
}

impl ServerPatch {
    /// Creates an empty patch.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the name.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Replaces the address.
    #[must_use]
    pub fn with_ip(mut self, ip: impl Into<String>) -> Self {
        self.ip = Some(ip.into());
        self
    }

    /// Replaces the status.
    #[must_use]
    pub const fn with_status(mut self, status: ServerStatus) -> Self {
        self.status = Some(status);
        self
    }

    /// Replaces the location.
    #[must_use]
    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    /// Replaces the uptime string.
    #[must_use]
    pub fn with_uptime(mut self, uptime: impl Into<String>) -> Self {
        self.uptime = Some(uptime.into());
        self
    }

    /// Returns `true` when the patch changes nothing.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.ip.is_none()
            && self.status.is_none()
            && self.location.is_none()
            && self.uptime.is_none()
    }

    fn apply_to(self, fields: &mut ServerFields) {
        if let Some(name) = self.name {
            fields.name = name;
        }
        if let Some(ip) = self.ip {
            fields.ip = ip;
        }
        if let Some(status) = self.status {
            fields.status = status;
        }
        if let Some(location) = self.location {
            fields.location = location;
        }
        if let Some(uptime) = self.uptime {
            fields.uptime = uptime;
        }
    }
}

impl From<ServerFields> for ServerPatch {
    fn from(fields: ServerFields) -> Self {
        Self {
            name: Some(fields.name),
            ip: Some(fields.ip),
            status: Some(fields.status),
            location: Some(fields.location),
            uptime: Some(fields.uptime),
        }
    }
}

/// A server entry owned by the registry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerRecord {
    id: ServerId,
    #[serde(flatten)]
    fields: ServerFields,
}

impl ServerRecord {
    /// Creates a record with an already allocated identifier.
    #[must_use]
    pub const fn new(id: ServerId, fields: ServerFields) -> Self {
        Self { id, fields }
    }

    /// Returns the identifier.
    #[must_use]
    pub const fn id(&self) -> ServerId {
        self.id
    }

    /// Returns the display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.fields.name
    }

    /// Returns the address string.
    #[must_use]
    pub fn ip(&self) -> &str {
        &self.fields.ip
    }

    /// Returns the reachability status.
    #[must_use]
    pub const fn status(&self) -> ServerStatus {
        self.fields.status
    }

    /// Returns the location label.
    #[must_use]
    pub fn location(&self) -> &str {
        &self.fields.location
    }

    /// Returns the uptime display string.
    #[must_use]
    pub fn uptime(&self) -> &str {
        &self.fields.uptime
    }

    /// Returns all mutable fields.
    #[must_use]
    pub const fn fields(&self) -> &ServerFields {
        &self.fields
    }

    /// Consumes the record, returning its fields.
    #[must_use]
    pub fn into_fields(self) -> ServerFields {
        self.fields
    }

    /// Applies a patch in place. The identifier never changes.
    pub fn apply(&mut self, patch: ServerPatch) {
        patch.apply_to(&mut self.fields);
    }
}
