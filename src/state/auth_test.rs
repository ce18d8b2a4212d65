use super::*;
use crate::state::storage::MemoryStore;

// =============================================================
// AuthState defaults
// =============================================================

#[test]
fn auth_state_default_has_no_session() {
    let state = AuthState::default();
    assert!(state.session.is_none());
    assert!(!state.is_signed_in());
}

// =============================================================
// Seeding from storage
// =============================================================

#[test]
fn from_store_picks_up_persisted_session() {
    let store = MemoryStore::new();
    Session { token: "abc".to_owned(), user_id: "42".to_owned() }.persist(&store).unwrap();

    let state = AuthState::from_store(&store);

    assert!(state.is_signed_in());
    assert_eq!(state.session.map(|s| s.user_id).as_deref(), Some("42"));
}

#[test]
fn from_empty_store_is_signed_out() {
    assert_eq!(AuthState::from_store(&MemoryStore::new()), AuthState::default());
}
