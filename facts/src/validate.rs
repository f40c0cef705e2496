//! Submission rules for new facts.
//!
//! The form rejects silently, so these functions only answer yes/no with a
//! typed reason; the host re-runs the same gate on every insert it proxies.

#[cfg(test)]
#[path = "validate_test.rs"]
mod validate_test;

use crate::{FactError, NewFact, find_category};

/// Maximum fact text length, counted in UTF-16 code units as the browser
/// reports `text.length`.
pub const MAX_TEXT_CHARS: usize = 200;

/// Characters left before hitting [`MAX_TEXT_CHARS`]. Negative once over.
#[must_use]
pub fn remaining_chars(text: &str) -> i64 {
    let used = i64::try_from(text_len(text)).unwrap_or(i64::MAX);
    i64::try_from(MAX_TEXT_CHARS).unwrap_or(i64::MAX).saturating_sub(used)
}

/// Length of `text` in UTF-16 code units. Astral-plane characters such as
/// emoji count twice.
#[must_use]
pub fn text_len(text: &str) -> usize {
    text.encode_utf16().count()
}

/// Whether `raw` parses as an absolute URL with an `http` or `https` scheme.
#[must_use]
pub fn is_valid_http_url(raw: &str) -> bool {
    url::Url::parse(raw).is_ok_and(|u| matches!(u.scheme(), "http" | "https"))
}

/// Check form input and build the insert payload.
///
/// # Errors
///
/// Returns the first rule broken, checked in the order text, source, category.
pub fn validate_new_fact(text: &str, source: &str, category: &str) -> Result<NewFact, FactError> {
    if text.is_empty() {
        return Err(FactError::EmptyText);
    }
    let len = text_len(text);
    if len > MAX_TEXT_CHARS {
        return Err(FactError::TextTooLong { len });
    }
    if !is_valid_http_url(source) {
        return Err(FactError::InvalidSource(source.to_owned()));
    }
    if category.is_empty() {
        return Err(FactError::EmptyCategory);
    }
    if find_category(category).is_none() {
        return Err(FactError::UnknownCategory(category.to_owned()));
    }
    Ok(NewFact { text: text.to_owned(), source: source.to_owned(), category: category.to_owned() })
}
