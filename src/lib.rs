//! Serverboard: an in-memory server dashboard.
//!
//! The crate keeps a fixed catalogue of server records and lets an operator
//! view, copy, add, edit and delete them. Nothing is persisted and nothing
//! touches the network; the only side effects are clipboard writes and
//! short-lived notifications.
//!
//! # Architecture
//!
//! Serverboard follows hexagonal architecture principles:
//!
//! - **Domain**: records, identifiers and status with no side effects
//! - **Ports**: clipboard and notification interfaces
//! - **Adapters**: in-memory recorders, a `tracing` sink and an OSC 52
//!   terminal clipboard
//!
//! # Modules
//!
//! - [`server_registry`]: the record collection and its add/edit form
//! - [`settings`]: dashboard settings and notification wording
//! - [`console`]: text presentation layer used by the `serverboard` binary

pub mod console;
pub mod server_registry;
pub mod settings;
