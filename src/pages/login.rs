//! Doctor login page.
//!
//! Submitting runs `start_login` synchronously (busy gate + email check) and
//! then, in the browser, `send_login` on a local task. The submit button has
//! no click handler of its own: the form's submit event is the only path to
//! navigation. A visitor who already has a session is sent on to `/home`.

use leptos::prelude::*;

use crate::config::ApiConfig;
use crate::routes;
use crate::state::auth::AuthState;
use crate::state::form::FormState;
use crate::state::login::start_login;
use crate::util::auth::install_signed_in_redirect;

#[component]
pub fn LoginPage() -> impl IntoView {
    let config = use_context::<ApiConfig>().unwrap_or_default();
    let auth = use_context::<RwSignal<AuthState>>();
    let form = RwSignal::new(FormState::default());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let navigate = leptos_router::hooks::use_navigate();
    if let Some(auth) = auth {
        install_signed_in_redirect(auth, navigate.clone());
    }

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let mut request = None;
        form.update(|state| {
            request = start_login(state, &email.get_untracked(), &password.get_untracked());
        });
        let Some(request) = request else {
            return;
        };

        #[cfg(feature = "hydrate")]
        {
            use crate::net::{api::AuthApi, http::GlooHttpClient};
            use crate::state::{login::send_login, storage::BrowserStore};
            use crate::util::navigation::BrowserNavigator;

            let api = AuthApi::new(GlooHttpClient, config.clone());
            let navigator = BrowserNavigator::new(navigate.clone());
            leptos::task::spawn_local(async move {
                let outcome = send_login(&api, &BrowserStore, &navigator, &request).await;
                if let (Ok(session), Some(auth)) = (&outcome, auth) {
                    auth.set(AuthState { session: Some(session.clone()) });
                }
                let _ = form.try_update(|state| state.finish(&outcome));
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (request, &config, auth, &navigate);
        }
    };

    view! {
        <div class="auth-page auth-page--login">
            <div class="auth-card">
                <h2 class="auth-card__title">"Login"</h2>
                <form class="auth-form" on:submit=on_submit>
                    <Show when=move || form.with(|s| s.error().is_some())>
                        <p class="auth-error">
                            {move || form.with(|s| s.error().unwrap_or_default().to_owned())}
                        </p>
                    </Show>
                    <label class="auth-field">
                        <span>"Email"</span>
                        <input
                            id="email"
                            name="email"
                            type="email"
                            required
                            prop:value=move || email.get()
                            on:input=move |ev| email.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="auth-field">
                        <span>"Password"</span>
                        <input
                            id="password"
                            name="password"
                            type="password"
                            required
                            prop:value=move || password.get()
                            on:input=move |ev| password.set(event_target_value(&ev))
                        />
                    </label>
                    <a href=routes::FORGOT_PASSWORD class="auth-link auth-link--small">
                        "Forgot Password?"
                    </a>
                    <button class="auth-button" type="submit" disabled=move || form.with(FormState::is_busy)>
                        "Login"
                    </button>
                </form>
                <p class="auth-card__footer">
                    "Don't have an account? "
                    <a href=routes::SIGN_UP_DOCTOR class="auth-link">"Sign up"</a>
                </p>
            </div>
        </div>
    }
}
