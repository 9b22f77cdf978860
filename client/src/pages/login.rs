//! Login page: email + password exchanged for a bearer token.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
#[cfg(feature = "hydrate")]
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::error_banner::ErrorBanner;
use crate::state::route::Route;
use crate::state::session::SessionHandle;
use crate::util::auth::RouteGate;

pub const LOGIN_FAILED_MESSAGE: &str = "Login failed. Please try again.";

/// Trim the email and require both fields.
///
/// # Errors
///
/// Returns the message to show when a field is blank.
pub fn validate_login_input(email: &str, password: &str) -> Result<(String, String), &'static str> {
    let email = email.trim();
    if email.is_empty() || password.is_empty() {
        return Err("Enter both email and password.");
    }
    Ok((email.to_owned(), password.to_owned()))
}

#[component]
pub fn LoginPage(session: SessionHandle) -> impl IntoView {
    view! {
        <RouteGate session=session route=|| Route::Login>
            <LoginForm session=session/>
        </RouteGate>
    }
}

#[component]
fn LoginForm(session: SessionHandle) -> impl IntoView {
    let navigate = use_navigate();
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let (email_value, password_value) = match validate_login_input(&email.get(), &password.get()) {
            Ok(values) => values,
            Err(msg) => {
                error.set(Some(msg.to_owned()));
                return;
            }
        };
        busy.set(true);
        error.set(None);

        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                match crate::net::api::login(&email_value, &password_value).await {
                    Ok(token) => match session.login(&token) {
                        Ok(()) => navigate("/", NavigateOptions::default()),
                        Err(e) => {
                            leptos::logging::warn!("login returned unusable token: {e}");
                            error.set(Some(LOGIN_FAILED_MESSAGE.to_owned()));
                        }
                    },
                    Err(e) => error.set(Some(e.user_message(LOGIN_FAILED_MESSAGE))),
                }
                busy.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (email_value, password_value, &navigate, session);
        }
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>"Welcome Back"</h1>
                <p class="auth-card__subtitle">"Sign in to continue"</p>
                <ErrorBanner message=error/>
                <form class="auth-form" on:submit=on_submit>
                    <input
                        class="auth-input"
                        type="email"
                        placeholder="Email"
                        required=true
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <input
                        class="auth-input"
                        type="password"
                        placeholder="Password"
                        required=true
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button class="auth-button" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Signing in..." } else { "Login" }}
                    </button>
                </form>
                <p class="auth-card__switch">
                    "Don't have an account? "
                    <a href="/signup">"Sign up"</a>
                </p>
            </div>
        </div>
    }
}
