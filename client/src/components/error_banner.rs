//! Inline error banner used by every view.

use leptos::prelude::*;

/// Renders `message` when it is `Some`.
#[component]
pub fn ErrorBanner(#[prop(into)] message: Signal<Option<String>>) -> impl IntoView {
    view! {
        <Show when=move || message.get().is_some()>
            <p class="error-banner" role="alert">
                {move || message.get().unwrap_or_default()}
            </p>
        </Show>
    }
}
