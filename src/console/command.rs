//! Operator command parsing.

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use crate::server_registry::domain::ServerId;

/// Draft field addressed by `set`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DraftField {
    /// Display name.
    Name,
    /// Address.
    Ip,
    /// Online/offline status.
    Status,
    /// Location label.
    Location,
    /// Uptime string.
    Uptime,
}

impl DraftField {
    /// Returns the field name as typed by the operator.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Ip => "ip",
            Self::Status => "status",
            Self::Location => "location",
            Self::Uptime => "uptime",
        }
    }
}

impl fmt::Display for DraftField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DraftField {
    type Err = CommandError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.to_ascii_lowercase().as_str() {
            "name" => Ok(Self::Name),
            "ip" => Ok(Self::Ip),
            "status" => Ok(Self::Status),
            "location" => Ok(Self::Location),
            "uptime" => Ok(Self::Uptime),
            _ => Err(CommandError::UnknownField(value.to_owned())),
        }
    }
}

/// One line of operator input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Render every server card.
    List,
    /// Render one server card.
    Show(ServerId),
    /// Copy a server's address to the clipboard.
    Copy(ServerId),
    /// Open the add form.
    Add,
    /// Open the edit form for a server.
    Edit(ServerId),
    /// Change one field of the open draft.
    Set {
        /// Field to change.
        field: DraftField,
        /// New value, verbatim (may be empty or contain spaces).
        value: String,
    },
    /// Save the open draft.
    Save,
    /// Discard the open draft.
    Cancel,
    /// Delete a server.
    Delete(ServerId),
    /// Render the settings tab.
    Settings,
    /// Show the command reference.
    Help,
    /// Leave the dashboard.
    Quit,
}

/// Errors raised while parsing operator input.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CommandError {
    /// The line was blank.
    #[error("empty command")]
    Empty,

    /// The first word is not a known command.
    #[error("unknown command: {0} (try `help`)")]
    Unknown(String),

    /// A required argument is missing.
    #[error("`{command}` needs a {argument}")]
    MissingArgument {
        /// Command being parsed.
        command: &'static str,
        /// Description of the missing argument.
        argument: &'static str,
    },

    /// The identifier is not a non-negative integer.
    #[error("invalid server id: {0}")]
    InvalidId(String),

    /// `set` named a field that does not exist.
    #[error("unknown field: {0} (expected name, ip, status, location or uptime)")]
    UnknownField(String),

    /// A command that takes no arguments was given some.
    #[error("`{0}` takes no arguments")]
    UnexpectedArgument(&'static str),
}

impl Command {
    /// Parses one input line.
    ///
    /// # Errors
    ///
    /// Returns [`CommandError`] describing why the line is not a command.
    pub fn parse(line: &str) -> Result<Self, CommandError> {
        let trimmed = line.trim();
        let (word, rest) = trimmed
            .split_once(char::is_whitespace)
            .map_or((trimmed, ""), |(word, rest)| (word, rest.trim()));
        if word.is_empty() {
            return Err(CommandError::Empty);
        }
        match word.to_ascii_lowercase().as_str() {
            "list" | "ls" => no_args("list", rest, Self::List),
            "show" => parse_id("show", rest).map(Self::Show),
            "copy" | "cp" => parse_id("copy", rest).map(Self::Copy),
            "add" | "new" => no_args("add", rest, Self::Add),
            "edit" => parse_id("edit", rest).map(Self::Edit),
            "set" => parse_set(rest),
            "save" => no_args("save", rest, Self::Save),
            "cancel" => no_args("cancel", rest, Self::Cancel),
            "delete" | "rm" => parse_id("delete", rest).map(Self::Delete),
            "settings" => no_args("settings", rest, Self::Settings),
            "help" | "?" => Ok(Self::Help),
            "quit" | "exit" | "q" => Ok(Self::Quit),
            _ => Err(CommandError::Unknown(word.to_owned())),
        }
    }
}

fn no_args(command: &'static str, rest: &str, parsed: Command) -> Result<Command, CommandError> {
    if rest.is_empty() {
        Ok(parsed)
    } else {
        Err(CommandError::UnexpectedArgument(command))
    }
}

fn parse_id(command: &'static str, rest: &str) -> Result<ServerId, CommandError> {
    if rest.is_empty() {
        return Err(CommandError::MissingArgument {
            command,
            argument: "server id",
        });
    }
    rest.parse()
        .map_err(|_| CommandError::InvalidId(rest.to_owned()))
}

fn parse_set(rest: &str) -> Result<Command, CommandError> {
    if rest.is_empty() {
        return Err(CommandError::MissingArgument {
            command: "set",
            argument: "field name",
        });
    }
    let (field, value) = rest
        .split_once(char::is_whitespace)
        .map_or((rest, ""), |(field, value)| (field, value.trim()));
    Ok(Command::Set {
        field: field.parse()?,
        value: value.to_owned(),
    })
}
