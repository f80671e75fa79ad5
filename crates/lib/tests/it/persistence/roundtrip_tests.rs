//! Save followed by load reproduces the account table

use amity::{
    Instance,
    account::Relation,
    persistence::PersistenceGateway,
    store::AccountStore,
};
use tempfile::TempDir;

use crate::helpers::*;

/// Build a small network covering every piece of per-account state.
fn populated_instance(dir: &TempDir) -> Instance {
    let instance = Instance::open_in(temp_config(dir)).unwrap();
    for (login, password, name) in [
        ("ana", "p1", "Ana"),
        ("bia", "p2", ""),
        ("caio", "p3", "Caio"),
    ] {
        instance.create_account(login, password, name).unwrap();
    }
    let ana = instance.open_session("ana", "p1").unwrap();
    let bia = instance.open_session("bia", "p2").unwrap();
    let caio = instance.open_session("caio", "p3").unwrap();

    instance.request_friend(&caio, "ana").unwrap();
    instance.request_friend(&ana, "caio").unwrap();
    instance.request_friend(&bia, "ana").unwrap();
    instance.request_friend(&ana, "bia").unwrap();
    instance.request_friend(&bia, "caio").unwrap();

    instance.edit_profile(&ana, "city", "Recife").unwrap();
    instance.edit_profile(&ana, "bio", "hi there").unwrap();
    instance.send_message(&bia, "caio", "one").unwrap();
    instance.send_message(&ana, "caio", "two").unwrap();
    instance
}

fn snapshot(instance: &Instance) -> AccountStore {
    let mut store = AccountStore::new();
    for account in instance.accounts() {
        store.register(account).unwrap();
    }
    store
}

#[test]
fn test_roundtrip_equivalent_table() {
    let dir = TempDir::new().unwrap();
    let instance = populated_instance(&dir);
    let before = snapshot(&instance);
    instance.shutdown().unwrap();

    let loaded = PersistenceGateway::new(temp_config(&dir)).unwrap().load().unwrap();
    assert_eq!(loaded, before);

    let ana = loaded.lookup("ana").unwrap();
    assert!(ana.verify_password("p1"));
    assert_eq!(ana.attribute("bio").unwrap(), "hi there");
    assert_eq!(ana.ordered_friends(), vec!["caio", "bia"]);

    let bia = loaded.lookup("bia").unwrap();
    assert_eq!(bia.friendships().relation("caio"), Some(Relation::Pending));
    assert_eq!(bia.friendships().relation("ana"), Some(Relation::Confirmed));

    let caio = loaded.lookup("caio").unwrap();
    assert_eq!(caio.inbox().len(), 2);
    assert_eq!(caio.friendships().relation("bia"), None);
}

#[test]
fn test_reopened_instance_continues() {
    let dir = TempDir::new().unwrap();
    populated_instance(&dir).shutdown().unwrap();

    let instance = Instance::open_in(temp_config(&dir)).unwrap();
    let caio = instance.open_session("caio", "p3").unwrap();
    assert_eq!(instance.read_next_message(&caio).unwrap().body, "one");
    let second = instance.read_next_message(&caio).unwrap();
    assert_eq!(second.sender, "ana");
    assert_eq!(second.body, "two");
    assert!(instance.read_next_message(&caio).is_err());
}

#[test]
fn test_stored_file_is_json_keyed_by_login() {
    let dir = TempDir::new().unwrap();
    populated_instance(&dir).shutdown().unwrap();

    let raw = std::fs::read_to_string(temp_config(&dir).primary_path()).unwrap();
    let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
    let accounts = value["accounts"].as_object().unwrap();
    let mut logins: Vec<&str> = accounts.keys().map(String::as_str).collect();
    logins.sort();
    assert_eq!(logins, vec!["ana", "bia", "caio"]);
    assert_eq!(accounts["ana"]["login"], "ana");
}
