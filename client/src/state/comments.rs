//! Per-post comment thread state.

#[cfg(test)]
#[path = "comments_test.rs"]
mod comments_test;

use crate::net::types::Comment;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct CommentsState {
    pub items: Vec<Comment>,
    pub draft: String,
    pub submitting: bool,
}

impl CommentsState {
    /// Text to submit for the current draft, or `None` if the draft is blank,
    /// nobody is signed in, or a submit is already running.
    pub fn submission(&self, user_id: Option<&str>) -> Option<String> {
        if self.submitting || user_id.is_none() {
            return None;
        }
        let text = self.draft.trim();
        (!text.is_empty()).then(|| text.to_owned())
    }

    /// A comment was accepted; clear the draft.
    pub fn submitted(&mut self) {
        self.submitting = false;
        self.draft.clear();
    }

    pub fn count(&self) -> usize {
        self.items.len()
    }
}
