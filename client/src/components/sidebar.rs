//! Side navigation with the post composer and logout.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::post_form::PostForm;
use crate::state::session::SessionHandle;

#[component]
pub fn Sidebar(session: SessionHandle, feed_refresh: RwSignal<u64>) -> impl IntoView {
    let navigate = use_navigate();
    let composer_open = RwSignal::new(false);

    let on_profile = {
        let navigate = navigate.clone();
        move |_| {
            if let Some(id) = session.user_id() {
                navigate(&format!("/profile/{id}"), NavigateOptions::default());
            }
        }
    };

    let on_logout = move |_| {
        session.logout();
        navigate("/login", NavigateOptions::default());
    };

    let on_close = Callback::new(move |()| composer_open.set(false));
    let on_created = Callback::new(move |()| feed_refresh.update(|n| *n += 1));

    view! {
        <nav class="sidebar">
            <a class="sidebar__item" href="/">"Home"</a>
            <a class="sidebar__item" href="/search">"Search"</a>
            <button class="sidebar__item" on:click=on_profile>"Profile"</button>
            <button class="sidebar__item sidebar__item--primary" on:click=move |_| composer_open.set(true)>
                "New Post"
            </button>
            <button class="sidebar__item" on:click=on_logout>"Logout"</button>
        </nav>
        <Show when=move || composer_open.get()>
            <PostForm session=session on_close=on_close on_created=on_created/>
        </Show>
    }
}
