//! Optimistic like toggle for a single post.
//!
//! DESIGN
//! ======
//! Each click is a ticket. `begin` applies the toggle to the displayed state
//! immediately and records the ticket as pending; the network result then
//! either `confirm`s it (folded into the server-known state) or `revert`s it
//! (dropped). The displayed state is always the confirmed state with every
//! still-pending toggle replayed on top, so a failure only ever undoes its own
//! click, however many clicks are in flight.

#[cfg(test)]
#[path = "like_test.rs"]
mod like_test;

/// Liked flag plus like count.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LikeSnapshot {
    pub liked: bool,
    pub count: u64,
}

impl LikeSnapshot {
    pub fn new(liked: bool, count: u64) -> Self {
        Self { liked, count }
    }

    /// State after one toggle.
    pub fn toggled(self) -> Self {
        if self.liked {
            Self { liked: false, count: self.count.saturating_sub(1) }
        } else {
            Self { liked: true, count: self.count + 1 }
        }
    }
}

/// Handle for one in-flight click.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LikeTicket {
    id: u64,
}

/// Like state for one post card.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LikeState {
    confirmed: LikeSnapshot,
    pending: Vec<u64>,
    next_ticket: u64,
    /// True until the initial like fetch settles.
    pub loading: bool,
}

impl LikeState {
    /// State waiting for the initial fetch.
    pub fn loading() -> Self {
        Self { loading: true, ..Self::default() }
    }

    /// Adopt server-reported state. Clears any pending clicks.
    pub fn load(&mut self, snapshot: LikeSnapshot) {
        self.confirmed = snapshot;
        self.pending.clear();
        self.loading = false;
    }

    /// Give up on the initial fetch and show what we have.
    pub fn load_failed(&mut self) {
        self.loading = false;
    }

    /// What the user sees.
    pub fn displayed(&self) -> LikeSnapshot {
        self.pending.iter().fold(self.confirmed, |snap, _| snap.toggled())
    }

    /// Tentatively apply a click.
    pub fn begin(&mut self) -> LikeTicket {
        let id = self.next_ticket;
        self.next_ticket += 1;
        self.pending.push(id);
        LikeTicket { id }
    }

    /// The server accepted the click. Returns `false` for unknown tickets.
    pub fn confirm(&mut self, ticket: LikeTicket) -> bool {
        if !self.take(ticket) {
            return false;
        }
        self.confirmed = self.confirmed.toggled();
        true
    }

    /// The server rejected the click; drop it. Returns `false` for unknown
    /// tickets.
    pub fn revert(&mut self, ticket: LikeTicket) -> bool {
        self.take(ticket)
    }

    fn take(&mut self, ticket: LikeTicket) -> bool {
        let Some(pos) = self.pending.iter().position(|id| *id == ticket.id) else {
            return false;
        };
        self.pending.remove(pos);
        true
    }
}
