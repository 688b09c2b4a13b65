//! In-memory server registry for the dashboard.
//!
//! The registry is the only stateful part of the dashboard: an ordered list
//! of server records with add, update, remove and lookup, plus clipboard and
//! notification side effects. The module follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Registry, notifier and form services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;
