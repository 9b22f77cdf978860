//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns (storage, token
//! decoding) from page and component logic to improve reuse and testability.

pub mod auth;
pub mod display;
pub mod token;
pub mod token_store;
