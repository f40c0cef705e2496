//! Shared fact model for the board's browser client and host.
//!
//! This crate owns the wire representation of a fact row as the hosted
//! backend stores it, the static category registry, and the submission
//! validation rules. Both `client` and `server` depend on it so the
//! browser and the host agree on field names and on what a valid fact is.


pub mod category;
pub mod validate;

use serde::{Deserialize, Serialize};

pub use category::{CATEGORIES, Category, CategoryFilter, category_color, find_category};
pub use validate::{MAX_TEXT_CHARS, is_valid_http_url, remaining_chars, text_len, validate_new_fact};

/// Error returned when a fact, category, or vote payload is rejected.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FactError {
    /// The fact text is empty.
    #[error("fact text is empty")]
    EmptyText,
    /// The fact text is longer than [`MAX_TEXT_CHARS`].
    #[error("fact text is too long: {len} UTF-16 units")]
    TextTooLong { len: usize },
    /// The source is not an absolute `http`/`https` URL.
    #[error("source is not an absolute http(s) URL: {0}")]
    InvalidSource(String),
    /// No category was chosen.
    #[error("category is empty")]
    EmptyCategory,
    /// The category is not in the registry.
    #[error("unknown category: {0}")]
    UnknownCategory(String),
    /// A vote counter would go negative.
    #[error("vote value must be non-negative, got {0}")]
    NegativeVote(i64),
}

/// One of the three independent vote counters on a fact.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VoteField {
    #[serde(rename = "voteInteresting")]
    Interesting,
    #[serde(rename = "voteMindblowing")]
    Mindblowing,
    #[serde(rename = "voteFalse")]
    False,
}

impl VoteField {
    /// Display order of the vote buttons.
    pub const ALL: [Self; 3] = [Self::Interesting, Self::Mindblowing, Self::False];

    /// Backend column name for this counter.
    #[must_use]
    pub fn column(self) -> &'static str {
        match self {
            Self::Interesting => "voteInteresting",
            Self::Mindblowing => "voteMindblowing",
            Self::False => "voteFalse",
        }
    }

    /// Emoji shown on the vote button.
    #[must_use]
    pub fn emoji(self) -> &'static str {
        match self {
            Self::Interesting => "👍",
            Self::Mindblowing => "🤯",
            Self::False => "⛔️",
        }
    }
}

/// A fact row as returned by the backend.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fact {
    /// Backend-assigned row identifier.
    pub id: i64,
    /// Fact body, at most [`MAX_TEXT_CHARS`] UTF-16 code units.
    pub text: String,
    /// Absolute `http`/`https` URL backing the fact.
    pub source: String,
    /// Registry category name.
    pub category: String,
    #[serde(rename = "voteInteresting", default)]
    pub vote_interesting: i64,
    #[serde(rename = "voteMindblowing", default)]
    pub vote_mindblowing: i64,
    #[serde(rename = "voteFalse", default)]
    pub vote_false: i64,
    /// Backend creation timestamp, passed through untouched.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

impl Fact {
    /// Current value of one vote counter.
    #[must_use]
    pub fn votes(&self, field: VoteField) -> i64 {
        match field {
            VoteField::Interesting => self.vote_interesting,
            VoteField::Mindblowing => self.vote_mindblowing,
            VoteField::False => self.vote_false,
        }
    }

    /// Overwrite one vote counter, leaving the other two untouched.
    pub fn set_votes(&mut self, field: VoteField, value: i64) {
        match field {
            VoteField::Interesting => self.vote_interesting = value,
            VoteField::Mindblowing => self.vote_mindblowing = value,
            VoteField::False => self.vote_false = value,
        }
    }

    /// The value a vote click sends: the displayed count plus one.
    #[must_use]
    pub fn next_vote(&self, field: VoteField) -> VoteUpdate {
        VoteUpdate { field, value: self.votes(field).saturating_add(1) }
    }
}

/// Validated insert payload. Build one with [`validate_new_fact`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewFact {
    pub text: String,
    pub source: String,
    pub category: String,
}

impl NewFact {
    /// Re-run validation on a payload that arrived over the wire.
    ///
    /// # Errors
    ///
    /// Returns the first [`FactError`] the payload violates.
    pub fn validated(self) -> Result<Self, FactError> {
        validate_new_fact(&self.text, &self.source, &self.category)
    }
}

/// Request body for setting one vote counter on a fact.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct VoteUpdate {
    pub field: VoteField,
    pub value: i64,
}

impl VoteUpdate {
    /// Reject negative counter values.
    ///
    /// # Errors
    ///
    /// Returns [`FactError::NegativeVote`] when `value < 0`.
    pub fn validated(self) -> Result<Self, FactError> {
        if self.value < 0 {
            return Err(FactError::NegativeVote(self.value));
        }
        Ok(self)
    }
}
