//! REST API client for the auth and doctor endpoints.
//!
//! ERROR HANDLING
//! ==============
//! Every call resolves to `Result<_, ApiError>`. A non-2xx status becomes
//! `ApiError::Rejected` carrying the body's `message` when the body is JSON.
//! A body that is not JSON at all surfaces as `ApiError::Decode`, so callers
//! can tell a server-explained rejection apart from a broken reply.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use serde::de::DeserializeOwned;

use super::http::{HttpClient, HttpReply};
use super::types::{DoctorRegistrationPayload, ErrorBody, LoginRequest, LoginResponse};
use crate::config::ApiConfig;
use crate::error::ApiError;

pub const LOGIN_PATH: &str = "/api/auth/login";
pub const CREATE_DOCTOR_PATH: &str = "/api/doctor/create";

/// Typed access to the backend over an `HttpClient`.
#[derive(Clone, Debug)]
pub struct AuthApi<H> {
    http: H,
    config: ApiConfig,
}

impl<H: HttpClient> AuthApi<H> {
    pub fn new(http: H, config: ApiConfig) -> Self {
        Self { http, config }
    }

    pub fn http(&self) -> &H {
        &self.http
    }

    /// Exchange credentials for a session via `POST /api/auth/login`.
    ///
    /// # Errors
    ///
    /// `Rejected` on a non-2xx status, `Transport` when the request fails,
    /// `Decode` when a body lacks the expected JSON shape.
    pub async fn login(&self, request: &LoginRequest) -> Result<LoginResponse, ApiError> {
        let url = self.config.endpoint(LOGIN_PATH);
        let reply = self.http.post_json(&url, request).await?;
        decode_reply(&reply)
    }

    /// Register a doctor via `POST /api/doctor/create`.
    ///
    /// The success body has no fixed shape; it is returned as JSON when it
    /// parses and `None` otherwise.
    ///
    /// # Errors
    ///
    /// `Rejected` on a non-2xx status, `Transport` when the request fails,
    /// `Decode` when an error body is not JSON.
    pub async fn create_doctor(
        &self,
        payload: &DoctorRegistrationPayload<'_>,
    ) -> Result<Option<serde_json::Value>, ApiError> {
        let url = self.config.endpoint(CREATE_DOCTOR_PATH);
        let reply = self.http.post_json(&url, payload).await?;
        check_status(&reply)?;
        Ok(serde_json::from_str(&reply.body).ok())
    }
}

/// Turn a non-2xx reply into `ApiError::Rejected`.
fn check_status(reply: &HttpReply) -> Result<(), ApiError> {
    if reply.ok() {
        return Ok(());
    }
    let value: serde_json::Value = serde_json::from_str(&reply.body)?;
    let body = ErrorBody::from_value(&value);
    Err(ApiError::Rejected { status: reply.status, message: body.message })
}

fn decode_reply<T: DeserializeOwned>(reply: &HttpReply) -> Result<T, ApiError> {
    check_status(reply)?;
    Ok(serde_json::from_str(&reply.body)?)
}
