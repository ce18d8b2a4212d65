//! Client-side field checks run before any request is sent.

#[cfg(test)]
#[path = "validation_test.rs"]
mod validation_test;

use std::sync::LazyLock;

use regex::Regex;

/// One `@`, no whitespace, and a dotted domain with non-empty labels on
/// both sides of some dot.
static EMAIL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("Valid regex"));

/// Whether `email` has the basic `local@domain.tld` shape.
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email)
}

/// Whether the confirmation matches exactly (no trimming or case folding).
pub fn passwords_match(password: &str, confirm: &str) -> bool {
    password == confirm
}
