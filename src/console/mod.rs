//! Terminal presentation layer for the dashboard.
//!
//! Parses operator commands, drives the registry and the add/edit form, and
//! renders the list, card, form and settings views as text.

pub mod command;
pub mod session;
pub mod view;

pub use command::{Command, CommandError, DraftField};
pub use session::{Reply, Session, SessionError};
pub use view::ViewError;
