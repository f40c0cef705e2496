//! Fact table access.
//!
//! DESIGN
//! ======
//! Route handlers talk to an `Arc<dyn FactStore>` so the hosted PostgREST
//! table and the in-process development store are interchangeable. Each call
//! is one standalone round trip; the store holds no cache and never retries.

pub mod memory;
pub mod postgrest;

use facts::{CategoryFilter, Fact, NewFact, VoteUpdate};

pub use memory::MemoryFactStore;
pub use postgrest::PostgrestFactStore;

/// Errors produced by fact store operations.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The HTTP request to the backend failed.
    #[error("backend request failed: {0}")]
    Request(String),

    /// The backend returned a non-success HTTP status.
    #[error("backend response error: status {status}: {body}")]
    Response { status: u16, body: String },

    /// The backend response body could not be deserialized.
    #[error("backend response parse failed: {0}")]
    Parse(String),

    /// No row matched the requested fact id.
    #[error("fact not found: {0}")]
    NotFound(i64),

    /// The underlying HTTP client could not be constructed.
    #[error("HTTP client build failed: {0}")]
    HttpClientBuild(String),
}

/// The three table operations the board needs.
#[async_trait::async_trait]
pub trait FactStore: Send + Sync {
    /// `SELECT * [WHERE category = :cat]`, newest first.
    ///
    /// # Errors
    ///
    /// Returns a [`StoreError`] if the backend call fails.
    async fn select(&self, filter: &CategoryFilter) -> Result<Vec<Fact>, StoreError>;

    /// `INSERT {text, source, category} RETURNING row`.
    ///
    /// # Errors
    ///
    /// Returns a [`StoreError`] if the backend call fails.
    async fn insert(&self, fact: &NewFact) -> Result<Fact, StoreError>;

    /// `UPDATE {field: value} WHERE id = :id RETURNING row`.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] when no row has `id`, or another
    /// [`StoreError`] if the backend call fails.
    async fn update_vote(&self, id: i64, vote: VoteUpdate) -> Result<Fact, StoreError>;
}
