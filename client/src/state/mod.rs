//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`session`, `feed`, `like`, `search`, etc.) so
//! each view depends on a small focused model. Models here are plain data
//! with no browser or network access, which keeps every ordering rule
//! testable on the host.

pub mod comments;
pub mod feed;
pub mod like;
pub mod profile;
pub mod route;
pub mod search;
pub mod session;
