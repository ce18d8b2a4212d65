//! Minimal HTTP transport used by the API client.
//!
//! Client-side (hydrate): `GlooHttpClient` issues real `fetch` calls via
//! `gloo-net`. Tests substitute a scripted client. The trait only covers what
//! the forms need: a JSON `POST` whose raw status and body come back to the
//! caller for interpretation.

#![allow(async_fn_in_trait)]

use serde::Serialize;

use crate::error::TransportError;

/// Status and raw body of a completed request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpReply {
    pub status: u16,
    pub body: String,
}

impl HttpReply {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self { status, body: body.into() }
    }

    /// `true` for any 2xx status, matching `fetch`'s `Response.ok`.
    pub fn ok(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Sends JSON requests.
///
/// Futures are not required to be `Send`: the browser runtime is
/// single-threaded and `fetch` futures are not.
pub trait HttpClient {
    /// `POST` `body` as JSON to `url`.
    ///
    /// # Errors
    ///
    /// Returns a `TransportError` when the body cannot be encoded, the request
    /// never completes, or the reply body cannot be read. A non-2xx status is
    /// not an error at this layer.
    async fn post_json<B>(&self, url: &str, body: &B) -> Result<HttpReply, TransportError>
    where
        B: Serialize + ?Sized;
}

/// Browser `fetch` transport.
#[cfg(feature = "hydrate")]
#[derive(Clone, Copy, Debug, Default)]
pub struct GlooHttpClient;

#[cfg(feature = "hydrate")]
impl HttpClient for GlooHttpClient {
    async fn post_json<B>(&self, url: &str, body: &B) -> Result<HttpReply, TransportError>
    where
        B: Serialize + ?Sized,
    {
        let resp = gloo_net::http::Request::post(url)
            .json(body)
            .map_err(|e| TransportError::Encode(e.to_string()))?
            .send()
            .await
            .map_err(|e| TransportError::Request(e.to_string()))?;
        let status = resp.status();
        let body = resp
            .text()
            .await
            .map_err(|e| TransportError::Body(e.to_string()))?;
        Ok(HttpReply { status, body })
    }
}
