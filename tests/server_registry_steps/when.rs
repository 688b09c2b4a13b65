//! When steps for server registry BDD scenarios.

use super::world::RegistryWorld;
use rstest_bdd_macros::when;
use serverboard::server_registry::domain::{ServerId, ServerPatch};

#[when("a server is added with placeholder values")]
fn add_placeholder_server(world: &mut RegistryWorld) {
    let fields = world.registry.placeholder_fields();
    world.last_result = Some(world.registry.add(fields));
}

#[when(r#"server {id:u64} is renamed to "{name}""#)]
fn rename_server(world: &mut RegistryWorld, id: u64, name: String) -> Result<(), eyre::Report> {
    let updated = world
        .registry
        .update(ServerId::new(id), ServerPatch::new().with_name(name))
        .map_err(|err| eyre::eyre!("update failed: {err}"))?;
    world.last_result = Some(Ok(updated));
    Ok(())
}

#[when("server {id:u64} is deleted")]
fn delete_server(world: &mut RegistryWorld, id: u64) {
    world.last_result = Some(world.registry.remove(ServerId::new(id)));
}

#[when("the address of server {id:u64} is copied")]
fn copy_server_address(world: &mut RegistryWorld, id: u64) -> Result<(), eyre::Report> {
    let ip = world
        .registry
        .find(ServerId::new(id))
        .ok_or_else(|| eyre::eyre!("server {id} missing from scenario registry"))?
        .ip()
        .to_owned();
    world.registry.copy_address(&ip);
    Ok(())
}

#[when("the form is saved")]
fn save_form(world: &mut RegistryWorld) {
    world.last_save = Some(world.form.save(&mut world.registry));
}
