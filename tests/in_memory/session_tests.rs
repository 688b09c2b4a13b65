//! Text commands driven through the console session.

use super::helpers::{Dashboard, dashboard};
use rstest::rstest;
use serverboard::console::{Command, Reply, Session, SessionError};
use serverboard::settings::DashboardSettings;

fn say(session: &mut Session<mockable::DefaultClock>, line: &str) -> Result<Reply, SessionError> {
    session.execute(Command::parse(line).expect("test command parses"))
}

fn text(reply: Result<Reply, SessionError>) -> String {
    match reply.expect("command succeeds") {
        Reply::Output(text) => text,
        Reply::Quit => panic!("unexpected quit"),
    }
}

#[rstest]
fn scripted_session_matches_registry_state(dashboard: Dashboard) {
    let Dashboard {
        registry,
        clipboard,
        sink,
    } = dashboard;
    let mut session = Session::new(registry, DashboardSettings::default());

    let listing = text(say(&mut session, "list"));
    assert!(listing.contains("[6] ZETA-SRV-06"));

    assert_eq!(text(say(&mut session, "cp 5")), "> copied 10.10.10.88");
    text(say(&mut session, "edit 5"));
    text(say(&mut session, "set uptime 97.0%"));
    assert_eq!(text(say(&mut session, "save")), "> saved server 5");
    assert_eq!(text(say(&mut session, "rm 1")), "> deleted server 1");

    let after = text(say(&mut session, "ls"));
    assert!(!after.contains("ALPHA-SRV-01"));
    assert!(after.contains("97.0%"));
    assert_eq!(
        clipboard.writes().expect("clipboard readable"),
        vec!["10.10.10.88".to_owned()]
    );
    assert_eq!(
        sink.messages().expect("sink readable"),
        vec![
            "IP 10.10.10.88 copied to clipboard".to_owned(),
            "Server EPSILON-SRV-05 updated".to_owned(),
            "Server ALPHA-SRV-01 deleted".to_owned(),
        ]
    );
    assert_eq!(say(&mut session, "exit").ok(), Some(Reply::Quit));
}
