//! Add and edit dialogs driven against a seeded registry.

use super::helpers::{Dashboard, dashboard};
use rstest::rstest;
use serverboard::server_registry::{
    domain::{ServerId, ServerStatus},
    services::{FormError, SaveOutcome, ServerForm, ServerRegistryError},
};

#[rstest]
fn add_dialog_saves_with_fresh_identifier(mut dashboard: Dashboard) {
    let mut form = ServerForm::new();
    let draft = form.open_add(&dashboard.registry);
    assert_eq!(draft.id(), None);
    draft.fields.name = "OMEGA-SRV-07".to_owned();
    draft.fields.ip = "10.1.2.3".to_owned();
    draft
        .set_status_str("Online")
        .expect("status should parse");

    let outcome = form.save(&mut dashboard.registry).expect("save should succeed");

    assert!(!form.is_open());
    let SaveOutcome::Added(record) = &outcome else {
        panic!("expected an added record, got {outcome:?}");
    };
    assert_eq!(record.id(), ServerId::new(7));
    assert_eq!(record.status(), ServerStatus::Online);
    assert_eq!(dashboard.registry.len(), 7);
    assert!(
        dashboard.sink.messages().expect("sink readable").is_empty(),
        "adding a server is silent"
    );
}

#[rstest]
fn edit_dialog_updates_in_place_and_notifies(mut dashboard: Dashboard) {
    let mut form = ServerForm::new();
    let draft = form
        .open_edit(&dashboard.registry, ServerId::new(4))
        .expect("edit should open");
    assert_eq!(draft.fields.name, "DELTA-SRV-04");
    draft.fields.location = "Toronto, CA".to_owned();

    let outcome = form.save(&mut dashboard.registry).expect("save should succeed");

    assert!(matches!(outcome, SaveOutcome::Updated(_)));
    let position = dashboard
        .registry
        .list()
        .iter()
        .position(|record| record.id() == ServerId::new(4));
    assert_eq!(position, Some(3));
    assert_eq!(outcome.record().location(), "Toronto, CA");
    assert_eq!(
        dashboard.sink.messages().expect("sink readable"),
        vec!["Server DELTA-SRV-04 updated".to_owned()]
    );
}

#[rstest]
fn cancelled_edit_changes_nothing(dashboard: Dashboard) {
    let before = dashboard.registry.list().to_vec();
    let mut form = ServerForm::new();
    form.open_edit(&dashboard.registry, ServerId::new(1))
        .expect("edit should open")
        .fields
        .name = "changed".to_owned();

    let discarded = form.cancel().expect("cancel should succeed");

    assert_eq!(discarded.fields.name, "changed");
    assert_eq!(dashboard.registry.list(), before.as_slice());
    assert!(matches!(form.cancel(), Err(FormError::NotOpen)));
}

#[rstest]
fn editing_a_missing_server_fails(dashboard: Dashboard) {
    let mut form = ServerForm::new();
    let result = form.open_edit(&dashboard.registry, ServerId::new(77));

    assert!(matches!(
        result,
        Err(FormError::Registry(ServerRegistryError::NotFound(_)))
    ));
    assert!(!form.is_open());
}
