//! Given steps for server registry BDD scenarios.

use super::world::RegistryWorld;
use eyre::WrapErr;
use rstest_bdd_macros::given;
use serverboard::server_registry::domain::ServerId;

#[given("a seeded server registry")]
fn a_seeded_registry(world: &mut RegistryWorld) {
    world.reseed();
}

#[given("the edit form is open for server {id:u64}")]
fn edit_form_open(world: &mut RegistryWorld, id: u64) -> Result<(), eyre::Report> {
    world
        .form
        .open_edit(&world.registry, ServerId::new(id))
        .wrap_err("open edit form for scenario")?;
    Ok(())
}
