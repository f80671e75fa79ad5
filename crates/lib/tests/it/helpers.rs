//! Shared setup for the integration tests
//!
//! Every helper opens its instance in a fresh temporary directory. The
//! returned [`TempDir`] must be kept alive for as long as the instance is used.

#![allow(dead_code)]

use amity::{Facade, Instance, StorageConfig};
use tempfile::TempDir;

/// Storage config rooted in a nested `data` directory, so that the
/// directory itself does not exist until the first save.
pub fn temp_config(dir: &TempDir) -> StorageConfig {
    StorageConfig::in_dir(dir.path().join("data"))
}

/// Open a fresh Instance in a new temporary directory.
pub fn setup_instance() -> (TempDir, Instance) {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let instance = Instance::open_in(temp_config(&dir)).expect("Failed to open instance");
    (dir, instance)
}

/// Open a fresh Facade in a new temporary directory.
pub fn setup_facade() -> (TempDir, Facade) {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let facade = Facade::open(temp_config(&dir)).expect("Failed to open facade");
    (dir, facade)
}

/// Create each `(login, password)` account and open a session for it.
///
/// Returns the session tokens in the same order.
pub fn with_sessions(facade: &Facade, accounts: &[(&str, &str)]) -> Vec<String> {
    accounts
        .iter()
        .map(|(login, password)| {
            facade
                .create_account(login, password, "")
                .expect("Failed to create account");
            facade
                .open_session(login, password)
                .expect("Failed to open session")
        })
        .collect()
}

/// Make `a` and `b` confirmed friends through the request/accept handshake.
pub fn befriend(facade: &Facade, a_session: &str, a: &str, b_session: &str, b: &str) {
    facade
        .request_friend(a_session, b)
        .expect("Failed to send invite");
    facade
        .request_friend(b_session, a)
        .expect("Failed to accept invite");
}
