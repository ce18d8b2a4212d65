//! Doctor registration page.

use leptos::prelude::*;

use crate::config::ApiConfig;
use crate::net::types::Specialization;
use crate::routes;
use crate::state::form::FormState;
use crate::state::sign_up::{DoctorSignUpDraft, SignUpField, start_sign_up};

#[component]
pub fn DoctorSignUpPage() -> impl IntoView {
    let config = use_context::<ApiConfig>().unwrap_or_default();
    let form = RwSignal::new(FormState::default());
    let draft = RwSignal::new(DoctorSignUpDraft::default());
    #[cfg(feature = "hydrate")]
    let navigate = leptos_router::hooks::use_navigate();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let draft_value = draft.get_untracked();
        let mut proceed = false;
        form.update(|state| proceed = start_sign_up(state, &draft_value));
        if !proceed {
            return;
        }

        #[cfg(feature = "hydrate")]
        {
            use crate::net::{api::AuthApi, http::GlooHttpClient};
            use crate::state::sign_up::send_sign_up;
            use crate::util::navigation::BrowserNavigator;

            let api = AuthApi::new(GlooHttpClient, config.clone());
            let navigator = BrowserNavigator::new(navigate.clone());
            leptos::task::spawn_local(async move {
                let outcome = send_sign_up(&api, &navigator, &draft_value).await;
                let _ = form.try_update(|state| state.finish(&outcome));
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (draft_value, &config);
        }
    };

    view! {
        <div class="auth-page auth-page--doctor">
            <div class="auth-card auth-card--wide">
                <h2 class="auth-card__title">"Doctor Sign Up"</h2>
                <form class="auth-form" on:submit=on_submit>
                    <Show when=move || form.with(|s| s.error().is_some())>
                        <p class="auth-error">
                            {move || form.with(|s| s.error().unwrap_or_default().to_owned())}
                        </p>
                    </Show>
                    <div class="auth-form__row">
                        <DraftInput draft=draft field=SignUpField::FirstName label="First Name" input_type="text"/>
                        <DraftInput draft=draft field=SignUpField::LastName label="Last Name" input_type="text"/>
                    </div>
                    <DraftInput draft=draft field=SignUpField::Email label="Email" input_type="email"/>
                    <DraftInput draft=draft field=SignUpField::Password label="Password" input_type="password"/>
                    <DraftInput
                        draft=draft
                        field=SignUpField::ConfirmPassword
                        label="Confirm Password"
                        input_type="password"
                    />
                    <DraftInput draft=draft field=SignUpField::PhoneNumber label="Phone Number" input_type="tel"/>
                    <label class="auth-field">
                        <span>"Specialization"</span>
                        <select
                            id={SignUpField::Specialization.id()}
                            required
                            on:change=move |ev| {
                                draft.update(|d| d.set(SignUpField::Specialization, event_target_value(&ev)));
                            }
                        >
                            <option value="" disabled=true selected=true>
                                "Select a specialization"
                            </option>
                            {Specialization::ALL
                                .into_iter()
                                .map(|spec| view! { <option value={spec.as_str()}>{spec.label()}</option> })
                                .collect_view()}
                        </select>
                    </label>
                    <button class="auth-button" type="submit" disabled=move || form.with(FormState::is_busy)>
                        "Sign Up"
                    </button>
                </form>
                <p class="auth-card__footer">
                    "Already have an account? "
                    <a href=routes::LOGIN_DOC class="auth-link">"Login"</a>
                </p>
            </div>
        </div>
    }
}

/// Text input bound to one draft field.
#[component]
fn DraftInput(
    draft: RwSignal<DoctorSignUpDraft>,
    field: SignUpField,
    label: &'static str,
    input_type: &'static str,
) -> impl IntoView {
    view! {
        <label class="auth-field">
            <span>{label}</span>
            <input
                id={field.id()}
                type=input_type
                required
                prop:value=move || draft.with(|d| d.get(field).to_owned())
                on:input=move |ev| draft.update(|d| d.set(field, event_target_value(&ev)))
            />
        </label>
    }
}
