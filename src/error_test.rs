use super::*;

#[test]
fn validation_messages_match_form_copy() {
    assert_eq!(FormError::InvalidEmail.to_string(), "Please enter a valid email address");
    assert_eq!(FormError::PasswordMismatch.to_string(), "Passwords do not match");
}

#[test]
fn unavailable_message_names_the_form() {
    assert_eq!(
        FormError::Unavailable(FormKind::Login).to_string(),
        "An error occurred during login"
    );
    assert_eq!(
        FormError::Unavailable(FormKind::Registration).to_string(),
        "An error occurred during registration"
    );
}

#[test]
fn rejected_with_message_is_shown_verbatim() {
    let err = ApiError::Rejected { status: 401, message: Some("bad credentials".to_owned()) };
    assert_eq!(
        FormError::from_api(FormKind::Login, &err),
        FormError::Rejected("bad credentials".to_owned())
    );
}

#[test]
fn rejected_without_message_uses_fallback() {
    let missing = ApiError::Rejected { status: 500, message: None };
    assert_eq!(FormError::from_api(FormKind::Login, &missing).to_string(), "Login failed");

    let empty = ApiError::Rejected { status: 409, message: Some(String::new()) };
    assert_eq!(
        FormError::from_api(FormKind::Registration, &empty).to_string(),
        "Registration failed"
    );
}

#[test]
fn transport_and_decode_collapse_to_unavailable() {
    let transport = ApiError::Transport(TransportError::Request("connection refused".to_owned()));
    assert_eq!(
        FormError::from_api(FormKind::Registration, &transport),
        FormError::Unavailable(FormKind::Registration)
    );

    let decode = ApiError::Decode(serde_json::from_str::<serde_json::Value>("<html>").unwrap_err());
    assert_eq!(FormError::from_api(FormKind::Login, &decode), FormError::Unavailable(FormKind::Login));
}
