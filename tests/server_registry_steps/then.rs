//! Then steps for server registry BDD scenarios.

use super::world::RegistryWorld;
use rstest_bdd_macros::then;
use serverboard::server_registry::{
    domain::ServerId,
    services::{SaveOutcome, ServerRegistryError},
};

#[then("the registry holds {count:usize} servers")]
fn registry_holds(world: &RegistryWorld, count: usize) -> Result<(), eyre::Report> {
    let held = world.registry.len();
    if held != count {
        return Err(eyre::eyre!("expected {count} servers, found {held}"));
    }
    Ok(())
}

#[then(r#"server {id:u64} is named "{name}""#)]
fn server_is_named(world: &RegistryWorld, id: u64, name: String) -> Result<(), eyre::Report> {
    let record = world
        .registry
        .find(ServerId::new(id))
        .ok_or_else(|| eyre::eyre!("expected server {id} to exist"))?;
    if record.name() != name {
        return Err(eyre::eyre!(
            "expected server {id} to be named '{name}', found '{}'",
            record.name()
        ));
    }
    Ok(())
}

#[then("server {id:u64} does not exist")]
fn server_absent(world: &RegistryWorld, id: u64) -> Result<(), eyre::Report> {
    if world.registry.contains(ServerId::new(id)) {
        return Err(eyre::eyre!("expected server {id} to be absent"));
    }
    Ok(())
}

#[then("the next server id is {id:u64}")]
fn next_id_is(world: &RegistryWorld, id: u64) -> Result<(), eyre::Report> {
    let next = world.registry.next_id();
    if next != Some(ServerId::new(id)) {
        return Err(eyre::eyre!("expected next id {id}, found {next:?}"));
    }
    Ok(())
}

#[then(r#"the last notification reads "{message}""#)]
fn last_notification_reads(world: &RegistryWorld, message: String) -> Result<(), eyre::Report> {
    let messages = world
        .sink
        .messages()
        .map_err(|err| eyre::eyre!("notification sink unreadable: {err}"))?;
    match messages.last() {
        Some(last) if *last == message => Ok(()),
        other => Err(eyre::eyre!(
            "expected last notification '{message}', got {other:?}"
        )),
    }
}

#[then(r#"the clipboard holds "{text}""#)]
fn clipboard_holds(world: &RegistryWorld, text: String) -> Result<(), eyre::Report> {
    let contents = world
        .clipboard
        .contents()
        .map_err(|err| eyre::eyre!("clipboard unreadable: {err}"))?;
    if contents.as_deref() != Some(text.as_str()) {
        return Err(eyre::eyre!("expected clipboard '{text}', got {contents:?}"));
    }
    Ok(())
}

#[then("the operation fails with a not found error")]
fn fails_with_not_found(world: &RegistryWorld) -> Result<(), eyre::Report> {
    let result = world
        .last_result
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing operation result in scenario world"))?;
    if !matches!(result, Err(ServerRegistryError::NotFound(_))) {
        return Err(eyre::eyre!("expected not found error, got {result:?}"));
    }
    Ok(())
}

#[then("the form added server {id:u64}")]
fn form_added(world: &RegistryWorld, id: u64) -> Result<(), eyre::Report> {
    let outcome = world
        .last_save
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing save result in scenario world"))?;
    match outcome {
        Ok(SaveOutcome::Added(record)) if record.id() == ServerId::new(id) => Ok(()),
        other => Err(eyre::eyre!("expected server {id} to be added, got {other:?}")),
    }
}
