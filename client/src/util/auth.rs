//! Shared auth UI helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every routed page wraps itself in [`RouteGate`] so redirect behavior is
//! identical across views and driven only by `state::route::decide`.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::route::{Decision, Route, decide};
use crate::state::session::SessionHandle;

/// Track the gate decision for `route` and navigate whenever it says redirect.
pub fn install_route_gate<R, F>(session: SessionHandle, route: R, navigate: F) -> Memo<Decision>
where
    R: Fn() -> Route + Send + Sync + 'static,
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    let decision = Memo::new(move |_| decide(&session.state(), &route()));
    Effect::new(move || {
        if let Some(path) = decision.with(Decision::redirect_path) {
            navigate(&path, NavigateOptions { replace: true, ..NavigateOptions::default() });
        }
    });
    decision
}

/// Render `children` only when the gate allows `route`.
#[component]
pub fn RouteGate<R>(session: SessionHandle, route: R, children: ChildrenFn) -> impl IntoView
where
    R: Fn() -> Route + Send + Sync + 'static,
{
    let navigate = use_navigate();
    let decision = install_route_gate(session, route, navigate);

    view! {
        <Show when=move || decision.get() == Decision::Render>
            {children()}
        </Show>
    }
}
