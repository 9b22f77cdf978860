//! Routing table and auth gate.
//!
//! DESIGN
//! ======
//! Every route declares an [`Access`] level. [`decide`] maps the current
//! session state plus a route to render/redirect/wait. It is pure and
//! synchronous; the page wrapper in `util::auth` turns redirects into
//! navigation.

#[cfg(test)]
#[path = "route_test.rs"]
mod route_test;

use super::session::SessionState;

/// Client-side routes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Route {
    Home,
    Profile(String),
    Login,
    Signup,
    Search,
}

/// Who may see a route.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Access {
    /// Requires an authenticated session.
    Protected,
    /// Only for visitors; signed-in users are sent home.
    GuestOnly,
    /// Reachable in every state.
    Public,
}

/// Outcome of consulting the gate for a route.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Decision {
    Render,
    Redirect(Route),
    /// The session has not been restored yet; render nothing.
    Wait,
}

impl Decision {
    /// Path to navigate to, when this decision is a redirect.
    pub fn redirect_path(&self) -> Option<String> {
        match self {
            Self::Redirect(target) => Some(target.path()),
            Self::Render | Self::Wait => None,
        }
    }
}

impl Route {
    pub fn access(&self) -> Access {
        match self {
            Self::Home | Self::Profile(_) => Access::Protected,
            Self::Login | Self::Signup => Access::GuestOnly,
            Self::Search => Access::Public,
        }
    }

    pub fn path(&self) -> String {
        match self {
            Self::Home => "/".to_owned(),
            Self::Profile(user_id) => format!("/profile/{user_id}"),
            Self::Login => "/login".to_owned(),
            Self::Signup => "/signup".to_owned(),
            Self::Search => "/search".to_owned(),
        }
    }

}

/// Decide whether `route` renders for `state`.
pub fn decide(state: &SessionState, route: &Route) -> Decision {
    if route.access() == Access::Public {
        return Decision::Render;
    }
    if !state.restored {
        return Decision::Wait;
    }
    match (route.access(), state.is_authenticated()) {
        (Access::Protected, false) => Decision::Redirect(Route::Login),
        (Access::GuestOnly, true) => Decision::Redirect(Route::Home),
        _ => Decision::Render,
    }
}
