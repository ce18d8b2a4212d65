//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns its signals and the submit handler. Validation, requests,
//! storage and navigation live in `state` so they can be tested without a
//! browser.

pub mod doctor_sign_up;
pub mod login;
