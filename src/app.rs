//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::config::ApiConfig;
use crate::pages::{doctor_sign_up::DoctorSignUpPage, login::LoginPage};
use crate::state::auth::AuthState;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the API config and auth state, then routes between the login
/// and sign-up screens. `/home` and `/dashboard` are served elsewhere.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    provide_context(ApiConfig::from_build_env());
    provide_context(RwSignal::new(initial_auth_state()));

    view! {
        <Stylesheet id="leptos" href="/pkg/doctor-portal.css"/>
        <Title text="Doctor Portal"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=LoginPage/>
                <Route path=StaticSegment("login-doc") view=LoginPage/>
                <Route path=StaticSegment("sign-up-doctor") view=DoctorSignUpPage/>
            </Routes>
        </Router>
    }
}

fn initial_auth_state() -> AuthState {
    #[cfg(feature = "hydrate")]
    {
        AuthState::from_store(&crate::state::storage::BrowserStore)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        AuthState::default()
    }
}
