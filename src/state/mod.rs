//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern so pages depend on small focused models:
//! `form` is the submission state machine both forms share, `login` and
//! `sign_up` hold the per-form flows, and `session`/`storage`/`auth` cover
//! what survives a page load.

pub mod auth;
pub mod form;
pub mod login;
pub mod session;
pub mod sign_up;
pub mod storage;
