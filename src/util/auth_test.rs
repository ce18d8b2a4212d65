use super::*;
use crate::state::session::Session;

#[test]
fn should_skip_login_when_session_present() {
    let state = AuthState {
        session: Some(Session { token: "abc".to_owned(), user_id: "42".to_owned() }),
    };
    assert!(should_skip_login(&state));
}

#[test]
fn should_not_skip_login_without_session() {
    assert!(!should_skip_login(&AuthState::default()));
}
