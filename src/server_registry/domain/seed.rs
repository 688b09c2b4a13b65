//! Built-in server catalogue shown on first load.

use super::{ServerFields, ServerId, ServerRecord, ServerStatus};

const SEED: [(u64, &str, &str, ServerStatus, &str, &str); 6] = [
    (1, "ALPHA-SRV-01", "192.168.1.100", ServerStatus::Online, "Moscow DC", "99.9%"),
    (2, "BETA-SRV-02", "10.0.0.45", ServerStatus::Online, "Saint Petersburg", "99.8%"),
    (3, "GAMMA-SRV-03", "172.16.0.233", ServerStatus::Offline, "Novosibirsk", "95.2%"),
    (4, "DELTA-SRV-04", "192.168.100.12", ServerStatus::Online, "Yekaterinburg", "99.7%"),
    (5, "EPSILON-SRV-05", "10.10.10.88", ServerStatus::Online, "Kazan", "99.9%"),
    (6, "ZETA-SRV-06", "172.31.255.1", ServerStatus::Online, "Rostov", "98.9%"),
];

/// Returns the six records the dashboard starts with, ids 1 to 6.
#[must_use]
pub fn seed_records() -> Vec<ServerRecord> {
    SEED.iter()
        .map(|&(id, name, ip, status, location, uptime)| {
            ServerRecord::new(
                ServerId::new(id),
                ServerFields::new(name, ip, status, location, uptime),
            )
        })
        .collect()
}
