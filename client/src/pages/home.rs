//! Home page: the post feed.

use leptos::prelude::*;

use crate::components::error_banner::ErrorBanner;
use crate::components::post_card::PostCard;
use crate::state::feed::{FEED_EMPTY_MESSAGE, FeedState};
use crate::state::route::Route;
use crate::state::session::SessionHandle;
use crate::util::auth::RouteGate;

/// Shows the feed. Redirects to `/login` when signed out.
#[component]
pub fn HomePage(session: SessionHandle, feed_refresh: RwSignal<u64>) -> impl IntoView {
    view! {
        <RouteGate session=session route=|| Route::Home>
            <Feed session=session feed_refresh=feed_refresh/>
        </RouteGate>
    }
}

#[component]
fn Feed(session: SessionHandle, feed_refresh: RwSignal<u64>) -> impl IntoView {
    let feed = RwSignal::new(FeedState::default());

    // Fetch on mount and whenever a new post is created.
    Effect::new(move || {
        feed_refresh.track();
        let token = session.token();
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let result = crate::net::api::fetch_posts(token.as_deref()).await;
            feed.set(FeedState::from_result(result));
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = token;
    });

    let error = Signal::derive(move || feed.with(FeedState::error_message));

    view! {
        <section class="feed">
            <ErrorBanner message=error/>
            <Show when=move || feed.with(|f| matches!(f, FeedState::Loading))>
                <p class="feed__hint">"Loading posts..."</p>
            </Show>
            <Show when=move || feed.with(|f| f.is_empty() && f.error_message().is_none())>
                <p class="feed__hint">{FEED_EMPTY_MESSAGE}</p>
            </Show>
            <For
                each=move || feed.with(|f| f.posts().to_vec())
                key=|post| post.id.clone()
                let:post
            >
                <PostCard session=session post=post/>
            </For>
        </section>
    }
}
