//! Profile page for `/profile/:userId`.
//!
//! DESIGN
//! ======
//! The profile aggregate (user, stats, posts) is reloaded whenever the route
//! parameter changes. The follow relationship is fetched only when a signed-in
//! viewer looks at someone else's profile. Follow/unfollow waits for the
//! server before the button or the follower count changes.

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::components::error_banner::ErrorBanner;
use crate::net::types::Post;
use crate::state::profile::{PROFILE_FAILED_MESSAGE, ProfileState, ProfileTab};
#[cfg(feature = "hydrate")]
use crate::state::profile::should_check_follow;
use crate::state::route::Route;
use crate::state::session::SessionHandle;
use crate::util::auth::RouteGate;
use crate::util::display::{avatar_initial, timestamp_label};

#[component]
pub fn ProfilePage(session: SessionHandle) -> impl IntoView {
    let params = use_params_map();
    let user_id = Memo::new(move |_| params.with(|p| p.get("userId").unwrap_or_default()));

    view! {
        <RouteGate session=session route=move || Route::Profile(user_id.get())>
            <ProfileView session=session user_id=user_id/>
        </RouteGate>
    }
}

#[component]
fn ProfileView(session: SessionHandle, user_id: Memo<String>) -> impl IntoView {
    let state = RwSignal::new(ProfileState::loading());

    Effect::new(move || {
        let id = user_id.get();
        state.set(ProfileState::loading());
        #[cfg(feature = "hydrate")]
        {
            let token = session.token();
            let viewer = session.user_id();
            leptos::task::spawn_local(async move {
                let result = crate::net::api::fetch_user_profile(token.as_deref(), &id).await;
                let check = result
                    .as_ref()
                    .ok()
                    .map(|p| p.user.id.clone())
                    .filter(|target| should_check_follow(viewer.as_deref(), target));
                if user_id.get_untracked() != id {
                    return;
                }
                state.update(|s| s.load(result));
                if let (Some(viewer), Some(target)) = (viewer, check) {
                    match crate::net::api::check_following(token.as_deref(), &viewer, &target).await {
                        Ok(following) if user_id.get_untracked() == id => {
                            state.update(|s| s.following = following);
                        }
                        _ => {}
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = id;
    });

    let on_follow = move |_| {
        let viewer = session.user_id();
        let Some((target, was_following)) = state.with_untracked(|s| {
            if s.follow_busy || !s.can_follow(viewer.as_deref()) {
                return None;
            }
            s.profile.as_ref().map(|p| (p.user.id.clone(), s.following))
        }) else {
            return;
        };
        state.update(|s| s.follow_busy = true);

        #[cfg(feature = "hydrate")]
        {
            let token = session.token();
            leptos::task::spawn_local(async move {
                let viewer = viewer.unwrap_or_default();
                let result = crate::net::api::set_following(token.as_deref(), &viewer, &target, !was_following).await;
                state.update(|s| {
                    s.apply_follow_result(was_following, &result);
                });
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (target, was_following);
        }
    };

    let error = Signal::derive(move || {
        state.with(|s| s.error.as_ref().map(|e| e.user_message(PROFILE_FAILED_MESSAGE)))
    });
    let can_follow = move || state.with(|s| s.can_follow(session.user_id().as_deref()));

    view! {
        <section class="profile">
            <ErrorBanner message=error/>
            <Show when=move || state.with(|s| s.loading)>
                <p class="profile__hint">"Loading profile..."</p>
            </Show>
            {move || {
                state.with(|s| s.profile.clone()).map(|profile| {
                    let stats = profile.stats.clone();
                    view! {
                        <header class="profile__header">
                            <span class="avatar avatar--large">{avatar_initial(&profile.user.username)}</span>
                            <div class="profile__identity">
                                <h1 class="profile__name">{profile.user.username.clone()}</h1>
                                {profile.user.email.clone().map(|email| view! { <p class="profile__email">{email}</p> })}
                            </div>
                            <ul class="profile__stats">
                                <li><strong>{stats.post_count}</strong>" posts"</li>
                                <li>
                                    <strong>{move || state.with(|s| s.profile.as_ref().map_or(0, |p| p.stats.followers_count))}</strong>
                                    " followers"
                                </li>
                                <li><strong>{stats.following_count}</strong>" following"</li>
                            </ul>
                        </header>
                    }
                })
            }}
            <Show when=can_follow>
                <button
                    class="btn btn--primary profile__follow"
                    disabled=move || state.with(|s| s.follow_busy)
                    on:click=on_follow
                >
                    {move || if state.with(|s| s.following) { "Unfollow" } else { "Follow" }}
                </button>
            </Show>
            <Show when=move || state.with(|s| s.profile.is_some())>
                <nav class="profile__tabs">
                    <TabButton state=state tab=ProfileTab::Posts label="Posts"/>
                    <TabButton state=state tab=ProfileTab::Threads label="Threads"/>
                </nav>
                <div class="profile__posts">
                    <For
                        each=move || state.with(ProfileState::tab_posts)
                        key=|post| post.id.clone()
                        let:post
                    >
                        <ProfilePost post=post/>
                    </For>
                    <Show when=move || state.with(|s| s.tab_posts().is_empty())>
                        <p class="profile__hint">"Nothing here yet."</p>
                    </Show>
                </div>
            </Show>
        </section>
    }
}

#[component]
fn TabButton(state: RwSignal<ProfileState>, tab: ProfileTab, label: &'static str) -> impl IntoView {
    view! {
        <button
            class="profile__tab"
            class:profile__tab--active=move || state.with(|s| s.tab == tab)
            on:click=move |_| state.update(|s| s.tab = tab)
        >
            {label}
        </button>
    }
}

#[component]
fn ProfilePost(post: Post) -> impl IntoView {
    let media = post.media_url.clone().filter(|u| !u.is_empty());
    view! {
        <article class="profile-post">
            {media.map(|src| view! { <img class="profile-post__media" src=src alt="Post"/> })}
            <p class="profile-post__content">{post.content.clone().unwrap_or_default()}</p>
            <span class="profile-post__time">{timestamp_label(post.created_at.as_deref())}</span>
        </article>
    }
}
