//! Shared auth UI helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! A doctor who already holds a stored session has no reason to see the
//! login form; the page sends them straight on to `/home`.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::routes;
use crate::state::auth::AuthState;

pub fn should_skip_login(state: &AuthState) -> bool {
    state.is_signed_in()
}

/// Redirect to `/home` whenever a session is present.
pub fn install_signed_in_redirect<F>(auth: RwSignal<AuthState>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if auth.with(should_skip_login) {
            navigate(routes::HOME, NavigateOptions::default());
        }
    });
}
