//! Account registration page.

#[cfg(test)]
#[path = "register_test.rs"]
mod register_test;

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::config::ClientConfig;
use crate::net::api::ApiClient;
use crate::net::types::Registration;
use crate::state::session::{Session, SessionEvents};
use crate::util::session::{DEMO_TOKEN, install_signed_in_redirect, sign_in};

pub const MIN_PASSWORD_LEN: usize = 6;

/// Trim name and email, require all fields and a minimum password length.
///
/// # Errors
///
/// Returns the message to show under the form.
pub fn validate_registration(name: &str, email: &str, password: &str) -> Result<Registration, &'static str> {
    let name = name.trim();
    let email = email.trim();
    if name.is_empty() || email.is_empty() || password.is_empty() {
        return Err("Fill in your name, email and a password.");
    }
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err("Passwords must be at least 6 characters.");
    }
    Ok(Registration { name: name.to_owned(), email: email.to_owned(), password: password.to_owned() })
}

#[component]
pub fn RegisterPage() -> impl IntoView {
    let session = expect_context::<RwSignal<Session>>();
    let events = expect_context::<SessionEvents>();
    let api = expect_context::<ApiClient>();
    let config = expect_context::<ClientConfig>();
    install_signed_in_redirect(session, use_navigate());

    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let registration = match validate_registration(&name.get(), &email.get(), &password.get()) {
            Ok(registration) => registration,
            Err(msg) => {
                info.set(msg.to_owned());
                return;
            }
        };
        if config.demo_session {
            info.set(String::new());
            sign_in(&api, &events, DEMO_TOKEN);
            return;
        }
        busy.set(true);
        info.set("Creating your account...".to_owned());

        #[cfg(feature = "hydrate")]
        {
            let api = api.clone();
            let events = events.clone();
            leptos::task::spawn_local(async move {
                use crate::net::types::AuthResponse;

                let result = match crate::net::api::auth::register(&registration) {
                    Ok(request) => api.detached().fetch::<AuthResponse>(request).await,
                    Err(e) => Err(e),
                };
                match result {
                    Ok(resp) => {
                        log::info!("register: created user {}", resp.user.id);
                        info.set(String::new());
                        sign_in(&api, &events, &resp.token);
                    }
                    Err(e) => info.set(super::login::auth_error_message(&e)),
                }
                busy.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = registration;
            busy.set(false);
        }
    };

    view! {
        <div class="auth-page">
            <div class="auth-page__intro">
                <h1 class="auth-page__logo">"socialfeed"</h1>
                <p>"It's quick and easy."</p>
            </div>
            <div class="auth-card">
                <h2 class="auth-card__title">"Create a new account"</h2>
                <form class="auth-form" on:submit=on_submit>
                    <input
                        class="auth-input"
                        type="text"
                        placeholder="Full name"
                        autocomplete="name"
                        prop:value=move || name.get()
                        on:input=move |ev| name.set(event_target_value(&ev))
                    />
                    <input
                        class="auth-input"
                        type="text"
                        placeholder="Email or phone number"
                        autocomplete="username"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <input
                        class="auth-input"
                        type="password"
                        placeholder="New password"
                        autocomplete="new-password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button class="auth-button auth-button--secondary" type="submit" disabled=move || busy.get()>
                        "Sign Up"
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="auth-message">{move || info.get()}</p>
                </Show>
                <div class="auth-card__divider"></div>
                <A href="/login" attr:class="auth-card__link">"Already have an account?"</A>
            </div>
        </div>
    }
}
