//! Persisted login session.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use super::storage::KeyValueStore;
use crate::error::StorageError;
use crate::net::types::LoginResponse;

/// Storage key for the session token.
pub const AUTH_TOKEN_KEY: &str = "authToken";
/// Storage key for the signed-in user's identifier.
pub const USER_ID_KEY: &str = "id";

/// Token and user id issued by a successful login.
#[derive(Clone, PartialEq, Eq)]
pub struct Session {
    pub token: String,
    pub user_id: String,
}

impl Session {
    /// Write both keys. The token is written first; a failed write leaves any
    /// earlier keys in place.
    ///
    /// # Errors
    ///
    /// Propagates the store's `StorageError`.
    pub fn persist(&self, store: &impl KeyValueStore) -> Result<(), StorageError> {
        store.set(AUTH_TOKEN_KEY, &self.token)?;
        store.set(USER_ID_KEY, &self.user_id)
    }

    /// Read a session back; `None` unless both keys are present.
    pub fn load(store: &impl KeyValueStore) -> Option<Self> {
        let token = store.get(AUTH_TOKEN_KEY)?;
        let user_id = store.get(USER_ID_KEY)?;
        Some(Self { token, user_id })
    }

    pub fn clear(store: &impl KeyValueStore) {
        store.remove(AUTH_TOKEN_KEY);
        store.remove(USER_ID_KEY);
    }
}

impl From<LoginResponse> for Session {
    fn from(resp: LoginResponse) -> Self {
        Self { token: resp.token, user_id: resp.id }
    }
}

// Keeps the token out of logs.
impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("token", &"<redacted>")
            .field("user_id", &self.user_id)
            .finish()
    }
}
