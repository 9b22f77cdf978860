//! User-search state with debounce and stale-response protection.
//!
//! DESIGN
//! ======
//! Every query edit bumps a generation counter and hands out a ticket for that
//! generation. The page sleeps for the debounce period, asks whether the
//! ticket is still current before sending, and applies the response only if
//! the ticket is still current when it arrives. Arrival order never matters.

#[cfg(test)]
#[path = "search_test.rs"]
mod search_test;

use crate::net::error::ApiError;
use crate::net::types::UserSummary;

/// Claim on the results slot for one query edit.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchTicket {
    generation: u64,
    pub query: String,
}

/// What the page should do after a query edit.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SearchAction {
    /// Blank query; results were cleared locally and nothing is sent.
    Cleared,
    /// Wait out the debounce, then fetch for this ticket.
    Fetch(SearchTicket),
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SearchState {
    pub query: String,
    pub results: Vec<UserSummary>,
    pub loading: bool,
    pub error: Option<ApiError>,
    generation: u64,
}

impl SearchState {
    /// Record a query edit. Any earlier ticket becomes stale.
    pub fn set_query(&mut self, query: &str) -> SearchAction {
        self.generation += 1;
        self.query = query.to_owned();
        self.error = None;
        let trimmed = query.trim();
        if trimmed.is_empty() {
            self.results.clear();
            self.loading = false;
            return SearchAction::Cleared;
        }
        SearchAction::Fetch(SearchTicket { generation: self.generation, query: trimmed.to_owned() })
    }

    /// Whether `ticket` still belongs to the latest edit.
    pub fn is_current(&self, ticket: &SearchTicket) -> bool {
        ticket.generation == self.generation
    }

    /// Mark the request for `ticket` as sent. Returns `false` if it went
    /// stale during the debounce and should not be sent at all.
    pub fn start(&mut self, ticket: &SearchTicket) -> bool {
        if !self.is_current(ticket) {
            return false;
        }
        self.loading = true;
        true
    }

    /// Apply a response. Stale responses are dropped and return `false`.
    pub fn finish(&mut self, ticket: &SearchTicket, result: Result<Vec<UserSummary>, ApiError>) -> bool {
        if !self.is_current(ticket) {
            return false;
        }
        self.loading = false;
        match result {
            Ok(users) => {
                self.results = users;
                self.error = None;
            }
            Err(e) => {
                self.results.clear();
                self.error = Some(e);
            }
        }
        true
    }
}
