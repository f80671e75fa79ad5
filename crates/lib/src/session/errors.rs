//! Error types for session handling

use thiserror::Error;

/// Errors raised while opening or resolving sessions.
///
/// # Stability
///
/// - New variants may be added in minor versions (enum is `#[non_exhaustive]`)
/// - Existing variants will not be removed in minor versions
#[non_exhaustive]
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SessionError {
    /// Login unknown or password mismatch. Deliberately does not say which.
    #[error("Invalid login or password")]
    InvalidCredentials,

    /// Token is empty, malformed or not bound to any login.
    #[error("Invalid session")]
    InvalidSession,
}

impl SessionError {
    /// Check if this error is authentication-related. Every variant is.
    pub fn is_authentication_error(&self) -> bool {
        true
    }
}

impl From<SessionError> for crate::Error {
    fn from(err: SessionError) -> Self {
        crate::Error::Session(err)
    }
}
