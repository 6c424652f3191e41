//! Login page: email or phone plus password.
//!
//! A successful login stores the token and restarts the session cycle. The
//! page itself never navigates on submit; it leaves once the session
//! resolves to `Authenticated`.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::config::ClientConfig;
use crate::net::api::{ApiClient, ApiError};
use crate::net::types::Credentials;
use crate::state::session::{Session, SessionEvents};
use crate::util::session::{DEMO_TOKEN, install_signed_in_redirect, sign_in};

/// Trim the identifier and require both fields.
///
/// # Errors
///
/// Returns the message to show under the form.
pub fn validate_login(email: &str, password: &str) -> Result<Credentials, &'static str> {
    let email = email.trim();
    if email.is_empty() || password.is_empty() {
        return Err("Enter your email or phone number and password.");
    }
    Ok(Credentials { email: email.to_owned(), password: password.to_owned() })
}

/// User-facing text for a failed login or registration.
pub fn auth_error_message(error: &ApiError) -> String {
    match error {
        ApiError::Unauthorized => "The email or password you entered is incorrect.".to_owned(),
        ApiError::Transport(_) | ApiError::Unavailable => "Can't reach the server. Try again.".to_owned(),
        other => format!("Something went wrong: {other}"),
    }
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let session = expect_context::<RwSignal<Session>>();
    let events = expect_context::<SessionEvents>();
    let api = expect_context::<ApiClient>();
    let config = expect_context::<ClientConfig>();
    install_signed_in_redirect(session, use_navigate());

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let credentials = match validate_login(&email.get(), &password.get()) {
            Ok(credentials) => credentials,
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
        info.set("Logging in...".to_owned());

        #[cfg(feature = "hydrate")]
        {
            let api = api.clone();
            let events = events.clone();
            leptos::task::spawn_local(async move {
                use crate::net::types::AuthResponse;

                let result = match crate::net::api::auth::login(&credentials) {
                    Ok(request) => api.detached().fetch::<AuthResponse>(request).await,
                    Err(e) => Err(e),
                };
                match result {
                    Ok(resp) => {
                        log::info!("login: signed in as user {}", resp.user.id);
                        info.set(String::new());
                        sign_in(&api, &events, &resp.token);
                    }
                    Err(e) => info.set(auth_error_message(&e)),
                }
                busy.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = credentials;
            busy.set(false);
        }
    };

    view! {
        <div class="auth-page">
            <div class="auth-page__intro">
                <h1 class="auth-page__logo">"socialfeed"</h1>
                <p>"Connect with friends and the world around you."</p>
            </div>
            <div class="auth-card">
                <form class="auth-form" on:submit=on_submit>
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
                        placeholder="Password"
                        autocomplete="current-password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button class="auth-button" type="submit" disabled=move || busy.get()>
                        "Log In"
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="auth-message">{move || info.get()}</p>
                </Show>
                <a class="auth-card__link" href="#">"Forgotten password?"</a>
                <div class="auth-card__divider"></div>
                <A href="/register" attr:class="auth-button auth-button--secondary">
                    "Create new account"
                </A>
            </div>
        </div>
    }
}
