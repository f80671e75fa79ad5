//! Per-account friendship state
//!
//! Each account records its own view of every peer it has interacted with.
//! A relation is either [`Relation::Pending`] (this account invited the peer)
//! or [`Relation::Confirmed`] (mutual). No entry means no relation.
//!
//! The two-account handshake that moves a pair to `Confirmed` is driven by
//! [`AccountStore::request_friendship`](crate::store::AccountStore::request_friendship);
//! this type only stores one side of it.

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};

/// Relation of an account towards one peer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Relation {
    /// Invite sent by this account, not yet reciprocated
    Pending,
    /// Mutual friendship
    Confirmed,
}

/// One account's friendship relations plus the order friendships were confirmed in.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FriendshipState {
    relations: HashMap<String, Relation>,
    /// Confirmed peers, oldest confirmation first, each at most once
    order: Vec<String>,
}

impl FriendshipState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Relation towards `peer`, or `None` if there is none.
    pub fn relation(&self, peer: &str) -> Option<Relation> {
        self.relations.get(peer).copied()
    }

    pub fn is_confirmed(&self, peer: &str) -> bool {
        self.relation(peer) == Some(Relation::Confirmed)
    }

    pub fn is_pending(&self, peer: &str) -> bool {
        self.relation(peer) == Some(Relation::Pending)
    }

    /// Record an outgoing invite. Never downgrades a confirmed relation.
    pub(crate) fn invite(&mut self, peer: &str) {
        self.relations
            .entry(peer.to_string())
            .or_insert(Relation::Pending);
    }

    /// Mark `peer` as a confirmed friend, appending it to the confirmation
    /// order unless it is already listed.
    pub(crate) fn confirm(&mut self, peer: &str) {
        self.relations.insert(peer.to_string(), Relation::Confirmed);
        if !self.order.iter().any(|p| p == peer) {
            self.order.push(peer.to_string());
        }
    }

    /// Confirmed friends in confirmation order.
    ///
    /// Entries of the recorded order that are no longer confirmed are skipped.
    pub fn ordered_friends(&self) -> Vec<String> {
        self.order
            .iter()
            .filter(|peer| self.is_confirmed(peer))
            .cloned()
            .collect()
    }

    /// Peers this account has invited that have not answered yet.
    pub fn pending_invites(&self) -> Vec<String> {
        let mut pending: Vec<String> = self
            .relations
            .iter()
            .filter(|(_, relation)| **relation == Relation::Pending)
            .map(|(peer, _)| peer.clone())
            .collect();
        pending.sort();
        pending
    }

    pub fn friend_count(&self) -> usize {
        self.relations
            .values()
            .filter(|relation| **relation == Relation::Confirmed)
            .count()
    }

    /// Every peer with a relation, in unspecified order.
    pub fn relations(&self) -> impl Iterator<Item = (&str, Relation)> {
        self.relations
            .iter()
            .map(|(peer, relation)| (peer.as_str(), *relation))
    }

    /// Check that the confirmation order lists each confirmed peer exactly
    /// once and nothing else.
    pub(crate) fn check_order(&self) -> Result<(), String> {
        let mut listed = HashSet::new();
        for peer in &self.order {
            if !listed.insert(peer.as_str()) {
                return Err(format!("'{peer}' appears twice in the friend order"));
            }
            if !self.is_confirmed(peer) {
                return Err(format!("'{peer}' is in the friend order but not confirmed"));
            }
        }
        for (peer, relation) in self.relations() {
            if relation == Relation::Confirmed && !listed.contains(peer) {
                return Err(format!("confirmed friend '{peer}' is missing from the friend order"));
            }
        }
        Ok(())
    }

    /// Whether `login` appears anywhere in its own relations.
    pub(crate) fn mentions(&self, login: &str) -> bool {
        self.relations.contains_key(login) || self.order.iter().any(|p| p == login)
    }
}
