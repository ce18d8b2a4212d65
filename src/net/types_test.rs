use super::*;

// =============================================================
// LoginResponse
// =============================================================

#[test]
fn login_response_reads_string_id() {
    let resp: LoginResponse = serde_json::from_str(r#"{"token":"abc","id":"42"}"#).unwrap();
    assert_eq!(resp, LoginResponse { token: "abc".to_owned(), id: "42".to_owned() });
}

#[test]
fn login_response_accepts_integer_id() {
    let resp: LoginResponse = serde_json::from_str(r#"{"token":"abc","id":42,"role":"doctor"}"#).unwrap();
    assert_eq!(resp.id, "42");
}

#[test]
fn login_response_rejects_fractional_or_missing_id() {
    assert!(serde_json::from_str::<LoginResponse>(r#"{"token":"abc","id":4.5}"#).is_err());
    assert!(serde_json::from_str::<LoginResponse>(r#"{"token":"abc"}"#).is_err());
}

// =============================================================
// Request payloads
// =============================================================

#[test]
fn login_request_serializes_email_and_password() {
    let req = LoginRequest { email: "doc@clinic.test".to_owned(), password: "pw".to_owned() };
    assert_eq!(
        serde_json::to_value(&req).unwrap(),
        serde_json::json!({"email": "doc@clinic.test", "password": "pw"})
    );
}

#[test]
fn registration_payload_uses_camel_case_and_phone() {
    let payload = DoctorRegistrationPayload {
        first_name: "Ada",
        last_name: "Lovelace",
        phone: "555-0100",
        email: "ada@clinic.test",
        password: "secret",
        specialization: "cardiology",
    };
    assert_eq!(
        serde_json::to_value(&payload).unwrap(),
        serde_json::json!({
            "firstName": "Ada",
            "lastName": "Lovelace",
            "phone": "555-0100",
            "email": "ada@clinic.test",
            "password": "secret",
            "specialization": "cardiology",
        })
    );
}

// =============================================================
// ErrorBody
// =============================================================

#[test]
fn error_body_message_is_optional() {
    let with: ErrorBody = serde_json::from_str(r#"{"message":"bad credentials"}"#).unwrap();
    assert_eq!(with.message.as_deref(), Some("bad credentials"));

    let without: ErrorBody = serde_json::from_str(r#"{"error":"x"}"#).unwrap();
    assert!(without.message.is_none());
}

#[test]
fn error_body_accepts_any_json_value() {
    for raw in [r#""Unauthorized""#, "[]", "null", "0", r#"{"message":null}"#, r#"{"message":[1]}"#] {
        let body: ErrorBody = serde_json::from_str(raw).unwrap();
        assert_eq!(body.message, None, "{raw}");
    }
}

#[test]
fn error_body_message_follows_truthiness() {
    let msg = |raw: &str| serde_json::from_str::<ErrorBody>(raw).unwrap().message;
    assert_eq!(msg(r#"{"message":42}"#).as_deref(), Some("42"));
    assert_eq!(msg(r#"{"message":1.5}"#).as_deref(), Some("1.5"));
    assert_eq!(msg(r#"{"message":true}"#).as_deref(), Some("true"));
    assert_eq!(msg(r#"{"message":0}"#), None);
    assert_eq!(msg(r#"{"message":false}"#), None);
    assert_eq!(msg(r#"{"message":""}"#), None);
}

// =============================================================
// Specialization
// =============================================================

#[test]
fn specialization_parses_every_wire_value() {
    for spec in Specialization::ALL {
        assert_eq!(spec.as_str().parse::<Specialization>(), Ok(spec));
    }
}

#[test]
fn specialization_rejects_unknown_value() {
    assert_eq!(
        "dermatology".parse::<Specialization>(),
        Err(UnknownSpecialization("dermatology".to_owned()))
    );
}

#[test]
fn specialization_serde_matches_as_str() {
    assert_eq!(serde_json::to_value(Specialization::Ent).unwrap(), serde_json::json!("ent"));
    assert_eq!(Specialization::Ent.label(), "ENT");
}
