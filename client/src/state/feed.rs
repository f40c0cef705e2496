//! Feed state owned by the application shell.
//!
//! SYSTEM CONTEXT
//! ==============
//! Holds the selected category, the fact snapshot, and the loading and
//! form-visibility flags. The snapshot goes stale as soon as anyone else
//! votes or posts; it is refreshed only on category change and patched
//! locally after this client's own mutations.
//!
//! Overlapping category fetches are fenced: every fetch takes a ticket and
//! only the most recently issued ticket may write the snapshot, whatever
//! order the responses arrive in.

#[cfg(test)]
#[path = "feed_test.rs"]
mod feed_test;

use facts::{CategoryFilter, Fact};

/// Identifies one fetch request. Only the newest ticket is applied.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FetchTicket(u64);

/// What [`FeedState::finish_fetch`] did with a response.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FetchOutcome {
    /// The response replaced the snapshot.
    Applied,
    /// The latest fetch failed; the snapshot is unchanged.
    Failed,
    /// A newer fetch was issued; the response was dropped.
    Stale,
}

impl FetchOutcome {
    /// Only a failure of the latest fetch interrupts the user.
    #[must_use]
    pub fn alerts_user(self) -> bool {
        self == Self::Failed
    }
}

#[derive(Clone, Debug, Default)]
pub struct FeedState {
    pub current_category: CategoryFilter,
    pub facts: Vec<Fact>,
    pub is_loading: bool,
    pub show_form: bool,
    latest_ticket: u64,
}

impl FeedState {
    /// Switch the category filter. Returns `false` if it was already selected.
    pub fn select_category(&mut self, filter: CategoryFilter) -> bool {
        if self.current_category == filter {
            return false;
        }
        self.current_category = filter;
        true
    }

    /// Start a fetch: raises the loading flag and supersedes older tickets.
    pub fn begin_fetch(&mut self) -> FetchTicket {
        self.latest_ticket += 1;
        self.is_loading = true;
        FetchTicket(self.latest_ticket)
    }

    /// Apply a fetch response if `ticket` is still the latest.
    ///
    /// A stale response leaves everything, including the loading flag, to the
    /// newer request. A failed latest response keeps the old snapshot.
    pub fn finish_fetch<E>(&mut self, ticket: FetchTicket, result: Result<Vec<Fact>, E>) -> FetchOutcome {
        if ticket.0 != self.latest_ticket {
            return FetchOutcome::Stale;
        }
        self.is_loading = false;
        match result {
            Ok(facts) => {
                self.facts = facts;
                FetchOutcome::Applied
            }
            Err(_) => FetchOutcome::Failed,
        }
    }

    /// Put a newly created fact at the top of the list.
    pub fn prepend(&mut self, fact: Fact) {
        self.facts.insert(0, fact);
    }

    /// Show a fact this client just posted: newest first, form closed.
    pub fn apply_created(&mut self, fact: Fact) {
        self.prepend(fact);
        self.show_form = false;
    }

    /// Swap in the backend's copy of a fact, matched by id.
    ///
    /// Returns `false` when the fact is no longer in the snapshot (e.g. the
    /// category changed while the vote was in flight).
    pub fn replace(&mut self, fact: Fact) -> bool {
        match self.facts.iter_mut().find(|f| f.id == fact.id) {
            Some(slot) => {
                *slot = fact;
                true
            }
            None => false,
        }
    }

    pub fn toggle_form(&mut self) {
        self.show_form = !self.show_form;
    }
}
