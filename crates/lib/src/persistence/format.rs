//! On-disk shape of the account table
//!
//! The store is written as a versioned JSON object:
//!
//! ```json
//! { "accounts": { "ana": { "login": "ana", ... } } }
//! ```
//!
//! The `_v` version field is omitted while the format is at version 0.
//!
//! Decoding rejects tables whose friendships are not mutually consistent:
//! every confirmed relation must be mirrored by the peer, every peer must be
//! a stored account, and each account's friend order must list exactly its
//! confirmed peers.

use std::collections::HashMap;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::{
    account::{Account, Relation},
    store::AccountStore,
};

/// The current persistence file format version.
/// v0 indicates this is an unstable format subject to breaking changes.
const PERSISTENCE_VERSION: u8 = 0;

/// Helper to check if version is default (0) for serde skip_serializing_if
fn is_v0(v: &u8) -> bool {
    *v == 0
}

/// Validates the persistence version during deserialization.
fn validate_persistence_version<'de, D>(deserializer: D) -> std::result::Result<u8, D::Error>
where
    D: Deserializer<'de>,
{
    let version = u8::deserialize(deserializer)?;
    if version != PERSISTENCE_VERSION {
        return Err(serde::de::Error::custom(format!(
            "unsupported persistence version {version}; only version {PERSISTENCE_VERSION} is supported"
        )));
    }
    Ok(version)
}

#[derive(Serialize)]
struct SerializableStoreRef<'a> {
    #[serde(rename = "_v", skip_serializing_if = "is_v0")]
    version: u8,
    accounts: &'a HashMap<String, Account>,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct SerializableStore {
    /// File format version for compatibility checking
    #[serde(
        rename = "_v",
        default,
        deserialize_with = "validate_persistence_version"
    )]
    #[allow(dead_code)]
    version: u8,
    accounts: HashMap<String, Account>,
}

impl Serialize for AccountStore {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        SerializableStoreRef {
            version: PERSISTENCE_VERSION,
            accounts: &self.accounts,
        }
        .serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for AccountStore {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        // Version validation happens via deserialize_with on SerializableStore._v
        let serializable = SerializableStore::deserialize(deserializer)?;

        for (key, account) in &serializable.accounts {
            if key != account.login() {
                return Err(serde::de::Error::custom(format!(
                    "account stored under '{key}' has login '{}'",
                    account.login()
                )));
            }
            account
                .validate()
                .map_err(|e| serde::de::Error::custom(format!("account '{key}': {e}")))?;
        }

        check_friendships(&serializable.accounts).map_err(serde::de::Error::custom)?;

        Ok(AccountStore {
            accounts: serializable.accounts,
        })
    }
}

fn check_friendships(accounts: &HashMap<String, Account>) -> std::result::Result<(), String> {
    for (login, account) in accounts {
        let friendships = account.friendships();
        friendships
            .check_order()
            .map_err(|reason| format!("account '{login}': {reason}"))?;

        for (peer, relation) in friendships.relations() {
            let Some(other) = accounts.get(peer) else {
                return Err(format!(
                    "account '{login}' has a relation to unknown account '{peer}'"
                ));
            };
            match (relation, other.friendships().relation(login)) {
                (Relation::Confirmed, Some(Relation::Confirmed)) | (Relation::Pending, None) => {}
                (Relation::Confirmed, _) => {
                    return Err(format!(
                        "account '{login}' lists '{peer}' as a friend but '{peer}' does not list '{login}'"
                    ));
                }
                (Relation::Pending, Some(back)) => {
                    return Err(format!(
                        "invite from '{login}' to '{peer}' conflicts with relation {back:?} in the other direction"
                    ));
                }
            }
        }
    }
    Ok(())
}
