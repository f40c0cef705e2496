//! Submission form input state.

#[cfg(test)]
#[path = "form_test.rs"]
mod form_test;

use facts::NewFact;

/// Text, source, and category inputs plus an in-flight insert guard.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormState {
    pub text: String,
    pub source: String,
    pub category: String,
    pub submitting: bool,
}

impl FormState {
    /// Characters left for the fact text; negative once over the limit.
    #[must_use]
    pub fn remaining(&self) -> i64 {
        facts::remaining_chars(&self.text)
    }

    /// Validate the inputs and mark an insert as in flight.
    ///
    /// Returns `None` (and changes nothing) when the inputs are invalid or an
    /// insert is already running; the form rejects silently.
    pub fn begin_submit(&mut self) -> Option<NewFact> {
        if self.submitting {
            return None;
        }
        let new_fact = facts::validate_new_fact(&self.text, &self.source, &self.category).ok()?;
        self.submitting = true;
        Some(new_fact)
    }

    /// Settle an insert. Success clears every field; failure keeps them so
    /// the user can retry.
    pub fn finish_submit(&mut self, inserted: bool) {
        if inserted {
            *self = Self::default();
        } else {
            self.submitting = false;
        }
    }
}
