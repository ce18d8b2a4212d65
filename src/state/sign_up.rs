//! Doctor registration draft and submission flow.
//!
//! The draft is edited one field per input event. Submission checks the
//! password confirmation, posts the draft with `phoneNumber` renamed to
//! `phone`, and on success loads `/dashboard` whatever the reply body holds.

#[cfg(test)]
#[path = "sign_up_test.rs"]
mod sign_up_test;

use super::form::FormState;
use crate::error::{FormError, FormKind};
use crate::net::api::AuthApi;
use crate::net::http::HttpClient;
use crate::net::types::{DoctorRegistrationPayload, Specialization};
use crate::routes;
use crate::util::navigation::{NavigationMode, Navigator};
use crate::util::validation::passwords_match;

/// Editable registration fields, keyed by their element ids.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SignUpField {
    FirstName,
    LastName,
    PhoneNumber,
    Email,
    Password,
    ConfirmPassword,
    Specialization,
}

impl SignUpField {
    pub const ALL: [Self; 7] = [
        Self::FirstName,
        Self::LastName,
        Self::PhoneNumber,
        Self::Email,
        Self::Password,
        Self::ConfirmPassword,
        Self::Specialization,
    ];

    /// Element id, which doubles as the draft key.
    pub fn id(self) -> &'static str {
        match self {
            Self::FirstName => "firstName",
            Self::LastName => "lastName",
            Self::PhoneNumber => "phoneNumber",
            Self::Email => "email",
            Self::Password => "password",
            Self::ConfirmPassword => "confirmPassword",
            Self::Specialization => "specialization",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|field| field.id() == id)
    }
}

/// In-progress registration.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DoctorSignUpDraft {
    pub first_name: String,
    pub last_name: String,
    pub phone_number: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub specialization: Option<Specialization>,
}

impl DoctorSignUpDraft {
    /// Replace one field. An unrecognised specialization value clears the
    /// selection.
    pub fn set(&mut self, field: SignUpField, value: String) {
        match field {
            SignUpField::FirstName => self.first_name = value,
            SignUpField::LastName => self.last_name = value,
            SignUpField::PhoneNumber => self.phone_number = value,
            SignUpField::Email => self.email = value,
            SignUpField::Password => self.password = value,
            SignUpField::ConfirmPassword => self.confirm_password = value,
            SignUpField::Specialization => self.specialization = value.parse().ok(),
        }
    }

    /// Apply a change event from the element with `id`. Returns `false` for
    /// ids that are not part of the draft.
    pub fn apply_change(&mut self, id: &str, value: String) -> bool {
        match SignUpField::from_id(id) {
            Some(field) => {
                self.set(field, value);
                true
            }
            None => false,
        }
    }

    pub fn get(&self, field: SignUpField) -> &str {
        match field {
            SignUpField::FirstName => &self.first_name,
            SignUpField::LastName => &self.last_name,
            SignUpField::PhoneNumber => &self.phone_number,
            SignUpField::Email => &self.email,
            SignUpField::Password => &self.password,
            SignUpField::ConfirmPassword => &self.confirm_password,
            SignUpField::Specialization => self.specialization.map_or("", Specialization::as_str),
        }
    }

    /// Wire body for `POST /api/doctor/create`.
    pub fn payload(&self) -> DoctorRegistrationPayload<'_> {
        DoctorRegistrationPayload {
            first_name: &self.first_name,
            last_name: &self.last_name,
            phone: &self.phone_number,
            email: &self.email,
            password: &self.password,
            specialization: self.get(SignUpField::Specialization),
        }
    }
}

/// # Errors
///
/// `FormError::PasswordMismatch` when the confirmation differs.
pub fn validate_sign_up(draft: &DoctorSignUpDraft) -> Result<(), FormError> {
    if passwords_match(&draft.password, &draft.confirm_password) {
        Ok(())
    } else {
        Err(FormError::PasswordMismatch)
    }
}

/// Post a validated draft and load `/dashboard` on success.
///
/// # Errors
///
/// `FormError::Rejected` with the server message (or "Registration failed"),
/// or `FormError::Unavailable` when the request or an error reply is broken.
pub async fn send_sign_up<H, N>(
    api: &AuthApi<H>,
    navigator: &N,
    draft: &DoctorSignUpDraft,
) -> Result<(), FormError>
where
    H: HttpClient,
    N: Navigator,
{
    log::debug!("submitting doctor registration");
    match api.create_doctor(&draft.payload()).await {
        Ok(body) => {
            match body {
                Some(body) => log::info!("doctor registered successfully: {body}"),
                None => log::info!("doctor registered successfully"),
            }
            navigator.go_to(routes::DASHBOARD, NavigationMode::FullPageLoad);
            Ok(())
        }
        Err(err) => {
            let form_err = FormError::from_api(FormKind::Registration, &err);
            if matches!(form_err, FormError::Rejected(_)) {
                log::warn!("registration rejected: {err}");
            } else {
                log::error!("error during registration: {err}");
            }
            Err(form_err)
        }
    }
}

/// Validate then send.
///
/// # Errors
///
/// See `validate_sign_up` and `send_sign_up`.
pub async fn submit_sign_up<H, N>(
    api: &AuthApi<H>,
    navigator: &N,
    draft: &DoctorSignUpDraft,
) -> Result<(), FormError>
where
    H: HttpClient,
    N: Navigator,
{
    validate_sign_up(draft)?;
    send_sign_up(api, navigator, draft).await
}

/// Run the synchronous half of a submit against `form`.
///
/// Returns `true` when the caller should go on to `send_sign_up`.
pub fn start_sign_up(form: &mut FormState, draft: &DoctorSignUpDraft) -> bool {
    if !form.begin() {
        return false;
    }
    match validate_sign_up(draft) {
        Ok(()) => {
            form.mark_submitting();
            true
        }
        Err(err) => {
            form.fail(&err);
            false
        }
    }
}
