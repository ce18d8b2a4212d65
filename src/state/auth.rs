#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use super::session::Session;
use super::storage::KeyValueStore;

/// Authentication state shared through Leptos context.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthState {
    pub session: Option<Session>,
}

impl AuthState {
    /// Seed from whatever session is already in `store`.
    pub fn from_store(store: &impl KeyValueStore) -> Self {
        Self { session: Session::load(store) }
    }

    pub fn is_signed_in(&self) -> bool {
        self.session.is_some()
    }
}
