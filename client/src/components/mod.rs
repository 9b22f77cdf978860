//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the app chrome and the post card. Session access comes in
//! through an explicit `SessionHandle` prop rather than a context provider.

pub mod error_banner;
pub mod navbar;
pub mod post_card;
pub mod post_form;
pub mod sidebar;
