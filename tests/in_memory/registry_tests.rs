//! Registry operations exercised through the public API.

use super::helpers::{Dashboard, dashboard, dashboard_with, ids};
use rstest::rstest;
use serverboard::server_registry::{
    domain::{ServerFields, ServerId, ServerPatch, ServerStatus},
    ports::NotificationKind,
    services::ServerRegistryError,
};
use serverboard::settings::DashboardSettings;

#[rstest]
fn seeded_registry_lists_in_insertion_order(dashboard: Dashboard) {
    assert_eq!(ids(&dashboard.registry), vec![1, 2, 3, 4, 5, 6]);
    let offline: Vec<&str> = dashboard
        .registry
        .list()
        .iter()
        .filter(|record| !record.status().is_online())
        .map(|record| record.name())
        .collect();
    assert_eq!(offline, vec!["GAMMA-SRV-03"]);
}

#[rstest]
fn add_update_remove_sequence(mut dashboard: Dashboard) {
    let fields = dashboard.registry.placeholder_fields();
    let added = dashboard.registry.add(fields).expect("ids available");
    assert_eq!(added.id(), ServerId::new(7));
    assert_eq!(added.name(), "NEW-SRV-07");
    assert_eq!(added.status(), ServerStatus::Offline);

    let renamed = dashboard
        .registry
        .update(ServerId::new(7), ServerPatch::new().with_name("X"))
        .expect("update should succeed");
    assert_eq!(renamed.name(), "X");
    assert_eq!(renamed.ip(), "0.0.0.0");

    dashboard
        .registry
        .remove(ServerId::new(3))
        .expect("removal should succeed");
    assert_eq!(ids(&dashboard.registry), vec![1, 2, 4, 5, 6, 7]);

    let next = dashboard
        .registry
        .add(ServerFields::new(
            "DELTA-SRV-08",
            "10.0.0.8",
            ServerStatus::Online,
            "Lisbon, PT",
            "99.0%",
        ))
        .expect("ids available");
    assert_eq!(next.id(), ServerId::new(8));
    assert_eq!(dashboard.registry.list().last(), Some(&next));
}

#[rstest]
fn removing_every_server_then_adding_continues_numbering(mut dashboard: Dashboard) {
    for id in 1..=6 {
        dashboard
            .registry
            .remove(ServerId::new(id))
            .expect("seed record should be removable");
    }
    assert!(dashboard.registry.is_empty());

    let fields = dashboard.registry.placeholder_fields();
    let added = dashboard.registry.add(fields).expect("ids available");
    assert_eq!(added.id(), ServerId::new(7));
    assert_eq!(added.name(), "NEW-SRV-01");
}

#[rstest]
fn failed_update_leaves_collection_untouched(mut dashboard: Dashboard) {
    let before = dashboard.registry.list().to_vec();

    let result = dashboard
        .registry
        .update(ServerId::new(42), ServerPatch::new().with_name("ghost"));

    assert!(matches!(result, Err(ServerRegistryError::NotFound(id)) if id == ServerId::new(42)));
    assert_eq!(dashboard.registry.list(), before.as_slice());
    assert!(
        dashboard
            .sink
            .notifications()
            .expect("sink readable")
            .is_empty()
    );
}

#[rstest]
fn notifications_carry_kind_and_configured_duration() {
    let settings = DashboardSettings {
        notification_duration_ms: 3500,
        ..DashboardSettings::default()
    };
    let mut dashboard = dashboard_with(settings);

    dashboard.registry.copy_address("192.168.1.100");
    dashboard
        .registry
        .remove(ServerId::new(1))
        .expect("removal should succeed");

    let notifications = dashboard.sink.notifications().expect("sink readable");
    let kinds: Vec<NotificationKind> = notifications.iter().map(|n| n.kind()).collect();
    assert_eq!(kinds, vec![NotificationKind::Copied, NotificationKind::Deleted]);
    assert!(notifications.iter().all(|n| n.duration_ms() == 3500));
    assert_eq!(
        dashboard.clipboard.contents().expect("clipboard readable"),
        Some("192.168.1.100".to_owned())
    );
}

#[rstest]
fn quiet_settings_suppress_notifications_but_not_clipboard() {
    let mut dashboard = dashboard_with(DashboardSettings::quiet());

    dashboard.registry.copy_address("10.0.0.45");
    dashboard
        .registry
        .update(ServerId::new(2), ServerPatch::new().with_uptime("100%"))
        .expect("update should succeed");

    assert!(dashboard.sink.messages().expect("sink readable").is_empty());
    assert_eq!(
        dashboard.clipboard.writes().expect("clipboard readable"),
        vec!["10.0.0.45".to_owned()]
    );
}
