//! Top bar with the brand link and the signed-in user's avatar.

use leptos::prelude::*;

use crate::state::session::SessionHandle;

#[component]
pub fn Navbar(session: SessionHandle) -> impl IntoView {
    let profile_href = move || {
        session
            .user_id()
            .map_or_else(|| "/login".to_owned(), |id| format!("/profile/{id}"))
    };

    view! {
        <header class="navbar">
            <a class="navbar__brand" href="/">"Agora"</a>
            <a class="navbar__search" href="/search">"Search"</a>
            <a class="navbar__me" href=profile_href title="Your profile">"Me"</a>
        </header>
    }
}
