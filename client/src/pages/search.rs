//! User search page with a debounced query box.

use leptos::prelude::*;

use crate::components::error_banner::ErrorBanner;
use crate::state::route::Route;
use crate::state::search::{SearchAction, SearchState};
use crate::state::session::SessionHandle;
use crate::util::auth::RouteGate;
use crate::util::display::avatar_initial;

pub const SEARCH_FAILED_MESSAGE: &str = "Search failed. Please try again.";

#[component]
pub fn SearchPage(session: SessionHandle) -> impl IntoView {
    view! {
        <RouteGate session=session route=|| Route::Search>
            <SearchView session=session/>
        </RouteGate>
    }
}

#[component]
fn SearchView(session: SessionHandle) -> impl IntoView {
    let state = RwSignal::new(SearchState::default());

    let on_query = move |value: String| {
        let Some(action) = state.try_update(|s| s.set_query(&value)) else {
            return;
        };
        let SearchAction::Fetch(ticket) = action else {
            return;
        };

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            gloo_timers::future::sleep(std::time::Duration::from_millis(crate::config::SEARCH_DEBOUNCE_MS)).await;
            if state.try_update(|s| s.start(&ticket)) != Some(true) {
                return;
            }
            let token = session.token();
            let result = crate::net::api::search_users(token.as_deref(), &ticket.query).await;
            state.update(|s| {
                s.finish(&ticket, result);
            });
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = (ticket, session);
    };

    let error = Signal::derive(move || {
        state.with(|s| s.error.as_ref().map(|e| e.user_message(SEARCH_FAILED_MESSAGE)))
    });
    let hint = move || {
        state.with(|s| {
            if s.loading {
                Some("Searching...")
            } else if s.query.trim().is_empty() {
                Some("Start typing to search for users")
            } else if s.results.is_empty() && s.error.is_none() {
                Some("No users found")
            } else {
                None
            }
        })
    };

    view! {
        <section class="search">
            <input
                class="search__input"
                type="search"
                placeholder="Search users..."
                prop:value=move || state.with(|s| s.query.clone())
                on:input=move |ev| on_query(event_target_value(&ev))
            />
            <ErrorBanner message=error/>
            {move || hint().map(|text| view! { <p class="search__hint">{text}</p> })}
            <ul class="search__results">
                <For
                    each=move || state.with(|s| s.results.clone())
                    key=|user| user.id.clone()
                    let:user
                >
                    <li class="search__result">
                        <a href=format!("/profile/{}", user.id)>
                            <span class="avatar avatar--small">{avatar_initial(&user.username)}</span>
                            <span class="search__name">{user.username.clone()}</span>
                        </a>
                    </li>
                </For>
            </ul>
        </section>
    }
}
