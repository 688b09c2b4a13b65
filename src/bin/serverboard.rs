//! Interactive terminal dashboard over the in-memory server registry.
//!
//! Usage:
//!
//! ```text
//! serverboard [settings-path]
//! ```
//!
//! The optional JSON document at `settings-path` overrides any subset of the
//! dashboard settings, for example:
//!
//! ```json
//! {
//!   "notification_duration_ms": 3000,
//!   "templates": { "deleted": "Server {{ name }} removed" }
//! }
//! ```
//!
//! Copying an address emits an OSC 52 escape sequence on stdout so that the
//! terminal emulator places it on the system clipboard. Notifications are
//! logged through `tracing`; set `RUST_LOG` to change verbosity.

use camino::{Utf8Path, Utf8PathBuf};
use cap_std::ambient_authority;
use cap_std::fs_utf8::Dir;
use mockable::DefaultClock;
use serverboard::console::{Command, Reply, Session};
use serverboard::server_registry::adapters::{TerminalClipboard, TracingNotificationSink};
use serverboard::server_registry::services::{Notifier, ServerRegistry};
use serverboard::settings::{DashboardSettings, SettingsError};
use std::env;
use std::io::{self, BufRead, Write};
use std::sync::Arc;
use thiserror::Error;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Boxed error type for the main result.
type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Errors that can occur while starting the dashboard.
#[derive(Debug, Error)]
enum CliError {
    #[error("invalid arguments: {0}")]
    InvalidArgs(String),
    #[error("failed to read settings from {path}: {source}")]
    SettingsRead {
        path: Utf8PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to load settings: {0}")]
    SettingsParse(#[from] SettingsError),
}

fn main() -> Result<(), BoxError> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "serverboard=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let settings_path = parse_args(collect_args()?.into_iter())?;
    let settings = match settings_path {
        Some(path) => load_settings(&path)?,
        None => DashboardSettings::default(),
    };
    tracing::debug!(theme = %settings.theme, "settings loaded");

    let registry = ServerRegistry::seeded(Arc::new(DefaultClock))
        .with_clipboard(Arc::new(TerminalClipboard::new(io::stdout())))
        .with_notifier(Notifier::new(
            Arc::new(TracingNotificationSink),
            settings.clone(),
        ));
    let mut session = Session::new(registry, settings);
    run(&mut session, io::stdin().lock(), io::stdout())?;
    Ok(())
}

fn collect_args() -> Result<Vec<Utf8PathBuf>, CliError> {
    env::args_os()
        .map(|arg_os| {
            let arg = arg_os
                .into_string()
                .map_err(|_| CliError::InvalidArgs("argument is not valid UTF-8".into()))?;
            Ok(Utf8PathBuf::from(arg))
        })
        .collect()
}

fn parse_args(
    mut args: impl Iterator<Item = Utf8PathBuf>,
) -> Result<Option<Utf8PathBuf>, CliError> {
    let _program = args.next();
    let settings_path = args.next();
    if let Some(extra) = args.next() {
        return Err(CliError::InvalidArgs(format!(
            "unexpected extra argument: {extra}"
        )));
    }
    Ok(settings_path)
}

fn load_settings(path: &Utf8Path) -> Result<DashboardSettings, CliError> {
    let read_error = |source| CliError::SettingsRead {
        path: path.to_owned(),
        source,
    };
    let file_name = path.file_name().ok_or_else(|| {
        read_error(io::Error::new(
            io::ErrorKind::InvalidInput,
            "settings path has no file name",
        ))
    })?;
    let parent = path
        .parent()
        .filter(|parent| !parent.as_str().is_empty())
        .unwrap_or_else(|| Utf8Path::new("."));
    let dir = Dir::open_ambient_dir(parent, ambient_authority()).map_err(read_error)?;
    let document = dir.read_to_string(file_name).map_err(read_error)?;
    Ok(DashboardSettings::from_json_str(&document)?)
}

fn run(
    session: &mut Session<DefaultClock>,
    input: impl BufRead,
    mut out: impl Write,
) -> io::Result<()> {
    if let Reply::Output(text) = execute(session, Command::List) {
        writeln!(out, "{text}")?;
    }
    write!(out, "> ")?;
    out.flush()?;
    for entry in input.lines() {
        let line = entry?;
        if line.trim().is_empty() {
            write!(out, "> ")?;
            out.flush()?;
            continue;
        }
        let reply = match Command::parse(&line) {
            Ok(command) => execute(session, command),
            Err(err) => Reply::Output(format!("error: {err}")),
        };
        match reply {
            Reply::Output(text) => writeln!(out, "{text}")?,
            Reply::Quit => break,
        }
        write!(out, "> ")?;
        out.flush()?;
    }
    Ok(())
}

fn execute(session: &mut Session<DefaultClock>, command: Command) -> Reply {
    session
        .execute(command)
        .unwrap_or_else(|err| Reply::Output(format!("error: {err}")))
}
