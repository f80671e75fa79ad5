//! Ephemeral login sessions
//!
//! A session token is an opaque string bound to a login after successful
//! authentication. Tokens live only in memory, are never persisted, and do
//! not expire.

use std::collections::HashMap;

use uuid::Uuid;

pub mod errors;

pub use errors::SessionError;

/// Opaque token identifying an open session.
pub type SessionToken = String;

/// In-memory map from session token to login.
#[derive(Debug, Default)]
pub struct SessionRegistry {
    sessions: HashMap<SessionToken, String>,
}

impl SessionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mint a fresh token bound to `login`.
    ///
    /// Tokens are random v4 UUIDs, so repeated calls for the same login
    /// yield distinct, independently valid sessions.
    pub fn open(&mut self, login: &str) -> SessionToken {
        let token = Uuid::new_v4().to_string();
        self.sessions.insert(token.clone(), login.to_string());
        token
    }

    /// Login bound to `token`.
    ///
    /// Fails with [`SessionError::InvalidSession`] for an empty, malformed or unknown token.
    pub fn resolve(&self, token: &str) -> Result<&str, SessionError> {
        if token.is_empty() || Uuid::parse_str(token).is_err() {
            return Err(SessionError::InvalidSession);
        }
        self.sessions
            .get(token)
            .map(String::as_str)
            .ok_or(SessionError::InvalidSession)
    }

    /// Drop every session.
    pub fn close_all(&mut self) {
        self.sessions.clear();
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }
}
