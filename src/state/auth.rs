//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! The navigation guard receives this value explicitly instead of reading
//! storage itself. `components::route_gate` snapshots it from `localStorage`
//! on every navigation, so tokens written or cleared elsewhere are honoured.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::util::token_storage;

/// Authentication context: whether a credential token is held.
///
/// Only presence is checked; the token is never validated client-side.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthState {
    pub token: Option<String>,
}

impl AuthState {
    pub fn with_token(token: impl Into<String>) -> Self {
        Self { token: Some(token.into()) }
    }

    /// Snapshot the token currently stored under `key`.
    pub fn load(key: &str) -> Self {
        Self::load_with(key, token_storage::read_token)
    }

    /// Snapshot the token through `read`, the storage accessor for `key`.
    pub fn load_with(key: &str, read: impl FnOnce(&str) -> Option<String>) -> Self {
        Self { token: read(key) }
    }

    /// An empty stored string counts as logged out.
    pub fn is_authenticated(&self) -> bool {
        self.token.as_deref().is_some_and(|t| !t.is_empty())
    }
}
