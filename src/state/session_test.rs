use super::*;
use crate::state::storage::MemoryStore;

fn session() -> Session {
    Session { token: "abc".to_owned(), user_id: "42".to_owned() }
}

#[test]
fn persist_writes_fixed_keys() {
    let store = MemoryStore::new();
    session().persist(&store).unwrap();
    assert_eq!(store.get("authToken").as_deref(), Some("abc"));
    assert_eq!(store.get("id").as_deref(), Some("42"));
}

#[test]
fn load_round_trips_persisted_session() {
    let store = MemoryStore::new();
    session().persist(&store).unwrap();
    assert_eq!(Session::load(&store), Some(session()));
}

#[test]
fn load_requires_both_keys() {
    let store = MemoryStore::new();
    store.set(AUTH_TOKEN_KEY, "abc").unwrap();
    assert_eq!(Session::load(&store), None);
}

#[test]
fn clear_removes_both_keys() {
    let store = MemoryStore::new();
    session().persist(&store).unwrap();
    Session::clear(&store);
    assert!(store.is_empty());
}

#[test]
fn debug_output_redacts_token() {
    let rendered = format!("{:?}", session());
    assert!(!rendered.contains("abc"));
    assert!(rendered.contains("42"));
}
