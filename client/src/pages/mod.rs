//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page wraps itself in `util::auth::RouteGate`, owns its route-scoped
//! fetches, and delegates shared rendering to `components`.

pub mod home;
pub mod login;
pub mod profile;
pub mod search;
pub mod signup;
