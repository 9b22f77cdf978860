//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! The session is created once in the root component, restored from the token
//! store after hydration, and handed to the route guard and every view that
//! scopes its API calls by user. Nothing else reads or writes the token store.
//!
//! INVARIANT
//! =========
//! The session is authenticated exactly when a token that decoded to a user id
//! is held in the store. Authentication is derived from `user_id`, so the two
//! can never disagree.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use leptos::prelude::*;

use crate::util::token::{TokenError, decode_user_id};
use crate::util::token_store::{BrowserTokenStore, TokenStore};

/// Error returned by [`Session::login`].
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("invalid token: {0}")]
    InvalidToken(#[from] TokenError),
}

/// Observable auth state.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SessionState {
    /// Set once the token store has been consulted. Server rendering and the
    /// first hydrate tick run before this.
    pub restored: bool,
    pub user_id: Option<String>,
}

impl SessionState {
    pub fn is_authenticated(&self) -> bool {
        self.user_id.is_some()
    }
}

/// Session bound to a token store.
#[derive(Clone, Debug)]
pub struct Session<S> {
    store: S,
    state: SessionState,
}

impl<S: TokenStore> Session<S> {
    /// Create an unrestored, unauthenticated session.
    pub fn new(store: S) -> Self {
        Self { store, state: SessionState::default() }
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    /// Read the stored token and adopt its identity. A token that fails to
    /// decode is treated as a logout.
    pub fn restore(&mut self) {
        self.state.restored = true;
        let Some(token) = self.store.get() else {
            self.state.user_id = None;
            return;
        };
        match decode_user_id(&token) {
            Ok(identity) => self.state.user_id = Some(identity.user_id),
            Err(e) => {
                leptos::logging::warn!("stored token invalid: {e}");
                self.logout();
            }
        }
    }

    /// Adopt a freshly issued token.
    ///
    /// The token is decoded before it is persisted; an undecodable token is
    /// never written and leaves the session logged out.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::InvalidToken`] if the token carries no
    /// readable user id.
    pub fn login(&mut self, token: &str) -> Result<(), SessionError> {
        self.state.restored = true;
        match decode_user_id(token) {
            Ok(identity) => {
                self.store.set(token);
                self.state.user_id = Some(identity.user_id);
                Ok(())
            }
            Err(e) => {
                self.logout();
                Err(e.into())
            }
        }
    }

    /// Forget the token and identity. Local only; the API has no logout call.
    pub fn logout(&mut self) {
        self.store.clear();
        self.state.user_id = None;
    }

    /// The bearer token, if the session is authenticated.
    pub fn token(&self) -> Option<String> {
        if self.state.is_authenticated() { self.store.get() } else { None }
    }
}

/// Reactive handle to the browser session, passed to views as a prop.
#[derive(Clone, Copy, Debug)]
pub struct SessionHandle {
    inner: RwSignal<Session<BrowserTokenStore>>,
}

impl SessionHandle {
    pub fn new() -> Self {
        Self { inner: RwSignal::new(Session::new(BrowserTokenStore)) }
    }

    /// Tracked snapshot of the auth state.
    pub fn state(&self) -> SessionState {
        self.inner.with(|s| s.state().clone())
    }

    /// Tracked user id.
    pub fn user_id(&self) -> Option<String> {
        self.inner.with(|s| s.state().user_id.clone())
    }

    pub fn is_authenticated(&self) -> bool {
        self.inner.with(|s| s.state().is_authenticated())
    }

    /// Bearer token for an API call. Untracked; callers read it at call time.
    pub fn token(&self) -> Option<String> {
        self.inner.with_untracked(Session::token)
    }

    pub fn restore(&self) {
        self.inner.update(Session::restore);
    }

    /// # Errors
    ///
    /// See [`Session::login`].
    pub fn login(&self, token: &str) -> Result<(), SessionError> {
        let mut result = Ok(());
        self.inner.update(|s| result = s.login(token));
        result
    }

    pub fn logout(&self) {
        self.inner.update(Session::logout);
    }
}

impl Default for SessionHandle {
    fn default() -> Self {
        Self::new()
    }
}
