//! Domain model for the server registry.
//!
//! Records, their identifiers and status, and the built-in catalogue. Nothing
//! in here touches the clipboard, notifications or any other side effect.

mod error;
mod ids;
mod record;
mod seed;
mod status;

pub use error::ParseServerStatusError;
pub use ids::ServerId;
pub use record::{
    PLACEHOLDER_IP, PLACEHOLDER_LOCATION, PLACEHOLDER_UPTIME, ServerFields, ServerPatch,
    ServerRecord,
};
pub use seed::seed_records;
pub use status::ServerStatus;
