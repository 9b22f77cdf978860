//! Signup page. A successful registration sends the user to `/login`.

#[cfg(test)]
#[path = "signup_test.rs"]
mod signup_test;

use leptos::prelude::*;
#[cfg(feature = "hydrate")]
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::error_banner::ErrorBanner;
use crate::state::route::Route;
use crate::state::session::SessionHandle;
use crate::util::auth::RouteGate;

pub const SIGNUP_FAILED_MESSAGE: &str = "Failed to create user. Please try again.";

/// Validated registration fields.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SignupInput {
    pub username: String,
    pub email: String,
    pub password: String,
}

/// Trim username and email and require every field.
///
/// # Errors
///
/// Returns the message to show when a field is blank.
pub fn validate_signup_input(username: &str, email: &str, password: &str) -> Result<SignupInput, &'static str> {
    let username = username.trim();
    let email = email.trim();
    if username.is_empty() || email.is_empty() || password.is_empty() {
        return Err("Fill in username, email, and password.");
    }
    Ok(SignupInput { username: username.to_owned(), email: email.to_owned(), password: password.to_owned() })
}

#[component]
pub fn SignupPage(session: SessionHandle) -> impl IntoView {
    view! {
        <RouteGate session=session route=|| Route::Signup>
            <SignupForm/>
        </RouteGate>
    }
}

#[component]
fn SignupForm() -> impl IntoView {
    let navigate = use_navigate();
    let username = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let input = match validate_signup_input(&username.get(), &email.get(), &password.get()) {
            Ok(input) => input,
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
                match crate::net::api::register(&input.username, &input.email, &input.password).await {
                    Ok(()) => navigate("/login", NavigateOptions::default()),
                    Err(e) => error.set(Some(e.user_message(SIGNUP_FAILED_MESSAGE))),
                }
                busy.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (input, &navigate);
        }
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>"Create Account"</h1>
                <p class="auth-card__subtitle">"Join the conversation"</p>
                <ErrorBanner message=error/>
                <form class="auth-form" on:submit=on_submit>
                    <input
                        class="auth-input"
                        type="text"
                        placeholder="Username"
                        required=true
                        prop:value=move || username.get()
                        on:input=move |ev| username.set(event_target_value(&ev))
                    />
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
                        {move || if busy.get() { "Creating account..." } else { "Sign Up" }}
                    </button>
                </form>
                <p class="auth-card__switch">
                    "Already have an account? "
                    <a href="/login">"Login"</a>
                </p>
            </div>
        </div>
    }
}
