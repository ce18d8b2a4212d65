//! Doctor login flow.
//!
//! `validate_login` runs synchronously inside the submit handler; only a
//! request that passes it reaches `send_login`. `submit_login` chains the two
//! for callers that do not need the phase split.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use super::form::FormState;
use super::session::Session;
use super::storage::KeyValueStore;
use crate::error::{FormError, FormKind};
use crate::net::api::AuthApi;
use crate::net::http::HttpClient;
use crate::net::types::LoginRequest;
use crate::routes;
use crate::util::navigation::{NavigationMode, Navigator};
use crate::util::validation::is_valid_email;

/// Check the email shape and build the request body.
///
/// # Errors
///
/// `FormError::InvalidEmail` when the email is not `local@domain.tld`.
pub fn validate_login(email: &str, password: &str) -> Result<LoginRequest, FormError> {
    if !is_valid_email(email) {
        return Err(FormError::InvalidEmail);
    }
    Ok(LoginRequest { email: email.to_owned(), password: password.to_owned() })
}

/// Send a validated login, persist the session and move to `/home`.
///
/// Storage and navigation only happen on success.
///
/// # Errors
///
/// `FormError::Rejected` with the server message (or "Login failed"), or
/// `FormError::Unavailable` when the request, the reply or the storage write
/// fails.
pub async fn send_login<H, S, N>(
    api: &AuthApi<H>,
    store: &S,
    navigator: &N,
    request: &LoginRequest,
) -> Result<Session, FormError>
where
    H: HttpClient,
    S: KeyValueStore,
    N: Navigator,
{
    log::debug!("submitting login");
    let session: Session = match api.login(request).await {
        Ok(resp) => resp.into(),
        Err(err) => {
            let form_err = FormError::from_api(FormKind::Login, &err);
            if matches!(form_err, FormError::Rejected(_)) {
                log::warn!("login rejected: {err}");
            } else {
                log::error!("login failed: {err}");
            }
            return Err(form_err);
        }
    };

    if let Err(err) = session.persist(store) {
        log::error!("could not store session: {err}");
        return Err(FormError::Unavailable(FormKind::Login));
    }

    log::info!("login succeeded for user {}", session.user_id);
    navigator.go_to(routes::HOME, NavigationMode::ClientSide);
    Ok(session)
}

/// Validate then send.
///
/// # Errors
///
/// See `validate_login` and `send_login`. A validation error means no
/// request was made.
pub async fn submit_login<H, S, N>(
    api: &AuthApi<H>,
    store: &S,
    navigator: &N,
    email: &str,
    password: &str,
) -> Result<Session, FormError>
where
    H: HttpClient,
    S: KeyValueStore,
    N: Navigator,
{
    let request = validate_login(email, password)?;
    send_login(api, store, navigator, &request).await
}

/// Run the synchronous half of a submit against `form`.
///
/// Returns the request to hand to `send_login`, or `None` when the form is
/// busy or validation failed (the error is already on `form`).
pub fn start_login(form: &mut FormState, email: &str, password: &str) -> Option<LoginRequest> {
    if !form.begin() {
        return None;
    }
    match validate_login(email, password) {
        Ok(request) => {
            form.mark_submitting();
            Some(request)
        }
        Err(err) => {
            form.fail(&err);
            None
        }
    }
}
