//! Networking modules for the backend REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `http` abstracts the transport, `api` knows the endpoints and how to read
//! their replies, and `types` defines the JSON wire schema.

pub mod api;
pub mod http;
pub mod types;
