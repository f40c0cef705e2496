//! REST API helpers for reading and mutating facts through the host.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning an error since these calls are only
//! meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Each call maps every failure (transport, non-OK status, bad body) to one
//! `ApiError` variant per operation. Nothing is retried; callers decide how
//! loudly to surface it.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{CategoryFilter, Fact, NewFact, VoteUpdate};

/// Failure of one fact API call.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    #[error("fetch failed: {0}")]
    FetchFailed(String),
    #[error("insert failed: {0}")]
    InsertFailed(String),
    #[error("update failed: {0}")]
    UpdateFailed(String),
}

#[cfg(any(test, feature = "hydrate"))]
fn facts_endpoint(filter: &CategoryFilter) -> String {
    format!("/api/facts?category={filter}")
}

#[cfg(any(test, feature = "hydrate"))]
fn vote_endpoint(fact_id: i64) -> String {
    format!("/api/facts/{fact_id}/vote")
}

#[cfg(any(test, feature = "hydrate"))]
fn status_failed_message(status: u16) -> String {
    format!("server responded with status {status}")
}

/// Fetch facts for a category (or all) via `GET /api/facts`.
///
/// # Errors
///
/// Returns [`ApiError::FetchFailed`] on transport failure, non-OK status, or
/// an unreadable body.
pub async fn fetch_facts(filter: &CategoryFilter) -> Result<Vec<Fact>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(&facts_endpoint(filter))
            .send()
            .await
            .map_err(|e| ApiError::FetchFailed(e.to_string()))?;
        if !resp.ok() {
            return Err(ApiError::FetchFailed(status_failed_message(resp.status())));
        }
        resp.json::<Vec<Fact>>()
            .await
            .map_err(|e| ApiError::FetchFailed(e.to_string()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = filter;
        Err(ApiError::FetchFailed("not available on server".to_owned()))
    }
}

/// Insert a validated fact via `POST /api/facts`; returns the stored row.
///
/// # Errors
///
/// Returns [`ApiError::InsertFailed`] on transport failure, non-OK status, or
/// an unreadable body.
pub async fn insert_fact(new_fact: &NewFact) -> Result<Fact, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post("/api/facts")
            .json(new_fact)
            .map_err(|e| ApiError::InsertFailed(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::InsertFailed(e.to_string()))?;
        if !resp.ok() {
            return Err(ApiError::InsertFailed(status_failed_message(resp.status())));
        }
        resp.json::<Fact>()
            .await
            .map_err(|e| ApiError::InsertFailed(e.to_string()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = new_fact;
        Err(ApiError::InsertFailed("not available on server".to_owned()))
    }
}

/// Set one vote counter via `PATCH /api/facts/{id}/vote`; returns the
/// updated row.
///
/// The caller sends the displayed count plus one. Two clicks send two
/// independent requests.
///
/// # Errors
///
/// Returns [`ApiError::UpdateFailed`] on transport failure, non-OK status, or
/// an unreadable body.
pub async fn increment_vote(fact_id: i64, vote: VoteUpdate) -> Result<Fact, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::patch(&vote_endpoint(fact_id))
            .json(&vote)
            .map_err(|e| ApiError::UpdateFailed(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::UpdateFailed(e.to_string()))?;
        if !resp.ok() {
            return Err(ApiError::UpdateFailed(status_failed_message(resp.status())));
        }
        resp.json::<Fact>()
            .await
            .map_err(|e| ApiError::UpdateFailed(e.to_string()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (fact_id, vote);
        Err(ApiError::UpdateFailed("not available on server".to_owned()))
    }
}
