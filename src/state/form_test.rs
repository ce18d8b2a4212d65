use super::*;
use crate::error::FormKind;

#[test]
fn default_is_idle_without_error() {
    let state = FormState::default();
    assert_eq!(state.phase(), FormPhase::Idle);
    assert!(state.error().is_none());
    assert!(!state.is_busy());
}

#[test]
fn begin_only_from_idle() {
    let mut state = FormState::default();
    assert!(state.begin());
    assert_eq!(state.phase(), FormPhase::Validating);
    assert!(!state.begin());

    state.mark_submitting();
    assert_eq!(state.phase(), FormPhase::Submitting);
    assert!(!state.begin(), "second submit while in flight must be ignored");
}

#[test]
fn validation_failure_returns_to_idle_with_message() {
    let mut state = FormState::default();
    state.begin();
    state.fail(&FormError::InvalidEmail);
    assert_eq!(state.phase(), FormPhase::Idle);
    assert_eq!(state.error(), Some("Please enter a valid email address"));
    assert!(state.begin());
}

#[test]
fn finish_err_sets_message_and_idles() {
    let mut state = FormState::default();
    state.begin();
    state.mark_submitting();
    state.finish::<()>(&Err(FormError::Unavailable(FormKind::Registration)));
    assert_eq!(state.phase(), FormPhase::Idle);
    assert_eq!(state.error(), Some("An error occurred during registration"));
}

#[test]
fn finish_ok_is_terminal() {
    let mut state = FormState::default();
    state.begin();
    state.mark_submitting();
    state.finish(&Ok(()));
    assert_eq!(state.phase(), FormPhase::Redirecting);
    assert!(!state.begin());

    state.fail(&FormError::Rejected("late".to_owned()));
    assert_eq!(state.phase(), FormPhase::Redirecting);
}

#[test]
fn mark_submitting_requires_validating() {
    let mut state = FormState::default();
    state.mark_submitting();
    assert_eq!(state.phase(), FormPhase::Idle);
}

#[test]
fn earlier_error_stays_visible_until_replaced() {
    let mut state = FormState::default();
    state.begin();
    state.fail(&FormError::PasswordMismatch);
    state.begin();
    assert_eq!(state.error(), Some("Passwords do not match"));
}
