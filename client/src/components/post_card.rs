//! Feed card for one post: author header, media, like toggle, comments.
//!
//! DESIGN
//! ======
//! Likes and comments are loaded per card on mount. A like click goes through
//! `LikeState::begin` before the request and `confirm`/`revert` after it, with
//! the ticket captured per click so a failure only rolls back its own click.

use leptos::prelude::*;

use crate::net::types::Post;
use crate::state::comments::CommentsState;
use crate::state::like::LikeState;
use crate::state::session::SessionHandle;
use crate::util::display::{avatar_initial, timestamp_label};

#[component]
pub fn PostCard(session: SessionHandle, post: Post) -> impl IntoView {
    let likes = RwSignal::new(LikeState::loading());
    let comments = RwSignal::new(CommentsState::default());
    let post_id = StoredValue::new(post.id.clone());

    let load_comments = move || {
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let id = post_id.get_value();
            if let Ok(items) = crate::net::api::fetch_comments(&id).await {
                comments.update(|c| c.items = items);
            }
        });
    };

    // Initial likes + comments.
    Effect::new(move || {
        #[cfg(feature = "hydrate")]
        {
            let token = session.token();
            leptos::task::spawn_local(async move {
                let id = post_id.get_value();
                match crate::net::api::fetch_likes(token.as_deref(), &id).await {
                    Ok(resp) => {
                        let count = u64::try_from(resp.likes.len()).unwrap_or(u64::MAX);
                        likes.update(|l| {
                            l.load(crate::state::like::LikeSnapshot::new(resp.current_user_liked, count));
                        });
                    }
                    Err(_) => likes.update(LikeState::load_failed),
                }
            });
        }
        load_comments();
    });

    let on_like = move |_| {
        if session.user_id().is_none() || likes.with_untracked(|l| l.loading) {
            return;
        }
        let Some(ticket) = likes.try_update(LikeState::begin) else {
            return;
        };

        #[cfg(feature = "hydrate")]
        {
            let token = session.token();
            leptos::task::spawn_local(async move {
                let id = post_id.get_value();
                let result = crate::net::api::toggle_like(token.as_deref(), &id).await;
                likes.update(|l| {
                    if result.is_ok() {
                        l.confirm(ticket);
                    } else {
                        l.revert(ticket);
                    }
                });
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = ticket;
        }
    };

    let on_comment = move |_| {
        let Some(text) = comments.with_untracked(|c| c.submission(session.user_id().as_deref())) else {
            return;
        };
        comments.update(|c| c.submitting = true);

        #[cfg(feature = "hydrate")]
        {
            let token = session.token();
            leptos::task::spawn_local(async move {
                let id = post_id.get_value();
                match crate::net::api::create_comment(token.as_deref(), &id, &text).await {
                    Ok(()) => {
                        comments.update(CommentsState::submitted);
                        load_comments();
                    }
                    Err(_) => comments.update(|c| c.submitting = false),
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = text;
        }
    };

    let initial = avatar_initial(&post.username);
    let when = timestamp_label(post.created_at.as_deref());
    let media = post.media_url.clone().filter(|u| !u.is_empty());

    view! {
        <article class="post-card">
            <header class="post-card__header">
                <span class="avatar">{initial}</span>
                <div>
                    <span class="post-card__author">{post.username.clone()}</span>
                    <span class="post-card__time">{when}</span>
                </div>
            </header>
            {media.map(|src| view! { <img class="post-card__media" src=src alt="Post"/> })}
            <p class="post-card__content">{post.content.clone().unwrap_or_default()}</p>
            <div class="post-card__actions">
                <button
                    class="post-card__like"
                    class:post-card__like--active=move || likes.with(|l| l.displayed().liked)
                    disabled=move || likes.with(|l| l.loading)
                    on:click=on_like
                >
                    {move || if likes.with(|l| l.displayed().liked) { "♥" } else { "♡" }}
                </button>
                <span class="post-card__count">{move || likes.with(|l| l.displayed().count)}</span>
                <span class="post-card__comments-count">{move || comments.with(CommentsState::count)}</span>
            </div>
            <div class="post-card__comment-form">
                <input
                    class="post-card__comment-input"
                    type="text"
                    placeholder="Add a comment..."
                    prop:value=move || comments.with(|c| c.draft.clone())
                    on:input=move |ev| comments.update(|c| c.draft = event_target_value(&ev))
                />
                <button
                    class="btn btn--primary"
                    disabled=move || comments.with(|c| c.submitting)
                    on:click=on_comment
                >
                    "Post Comment"
                </button>
            </div>
            <ul class="post-card__comments">
                <For
                    each=move || comments.with(|c| c.items.clone())
                    key=|comment| comment.id.clone()
                    let:comment
                >
                    <li class="comment">
                        <span class="avatar avatar--small">{avatar_initial(&comment.username)}</span>
                        <div>
                            <span class="comment__author">{comment.username.clone()}</span>
                            <p class="comment__content">{comment.content.clone()}</p>
                            <span class="comment__time">{timestamp_label(comment.created_at.as_deref())}</span>
                        </div>
                    </li>
                </For>
            </ul>
        </article>
    }
}
