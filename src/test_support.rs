//! Shared doubles for unit tests.

use std::cell::RefCell;
use std::collections::VecDeque;

use serde::Serialize;

use crate::error::TransportError;
use crate::net::http::{HttpClient, HttpReply};

/// A recorded `post_json` call.
#[derive(Clone, Debug, PartialEq)]
pub struct SentRequest {
    pub url: String,
    pub body: serde_json::Value,
}

/// `HttpClient` that replays scripted outcomes in order and records requests.
#[derive(Debug, Default)]
pub struct FakeHttp {
    replies: RefCell<VecDeque<Result<HttpReply, TransportError>>>,
    sent: RefCell<Vec<SentRequest>>,
}

impl FakeHttp {
    pub fn replying(status: u16, body: serde_json::Value) -> Self {
        let fake = Self::default();
        fake.push(Ok(HttpReply::new(status, body.to_string())));
        fake
    }

    pub fn replying_raw(status: u16, body: &str) -> Self {
        let fake = Self::default();
        fake.push(Ok(HttpReply::new(status, body)));
        fake
    }

    pub fn failing(err: TransportError) -> Self {
        let fake = Self::default();
        fake.push(Err(err));
        fake
    }

    pub fn push(&self, outcome: Result<HttpReply, TransportError>) {
        self.replies.borrow_mut().push_back(outcome);
    }

    pub fn sent(&self) -> Vec<SentRequest> {
        self.sent.borrow().clone()
    }

    pub fn call_count(&self) -> usize {
        self.sent.borrow().len()
    }
}

impl HttpClient for FakeHttp {
    async fn post_json<B>(&self, url: &str, body: &B) -> Result<HttpReply, TransportError>
    where
        B: Serialize + ?Sized,
    {
        let body = serde_json::to_value(body).map_err(|e| TransportError::Encode(e.to_string()))?;
        self.sent.borrow_mut().push(SentRequest { url: url.to_owned(), body });
        self.replies
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Err(TransportError::Request("no scripted reply".to_owned())))
    }
}
