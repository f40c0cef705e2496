//! Fact routes: list by category, insert, and set one vote counter.
//!
//! Every handler is a single pass-through to the [`FactStore`]; inserts and
//! votes are re-validated here so the backend never sees a malformed row.
//!
//! [`FactStore`]: crate::store::FactStore

#[cfg(test)]
#[path = "facts_test.rs"]
mod facts_test;

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::Json;
use facts::{CategoryFilter, Fact, NewFact, VoteUpdate};
use serde::Deserialize;

use crate::state::AppState;
use crate::store::StoreError;

#[derive(Debug, Default, Deserialize)]
pub struct FactsQuery {
    pub category: Option<String>,
}

/// `GET /api/facts?category=<name|all>`: list facts, newest first.
pub async fn list_facts(
    State(state): State<AppState>,
    Query(query): Query<FactsQuery>,
) -> Result<Json<Vec<Fact>>, StatusCode> {
    let filter = query
        .category
        .as_deref()
        .unwrap_or(CategoryFilter::ALL_KEY)
        .parse::<CategoryFilter>()
        .map_err(|_| StatusCode::BAD_REQUEST)?;

    let rows = state.store.select(&filter).await.map_err(|e| {
        tracing::warn!(error = %e, %filter, "fact select failed");
        store_error_to_status(&e)
    })?;
    Ok(Json(rows))
}

/// `POST /api/facts`: insert a validated fact and return the stored row.
pub async fn create_fact(
    State(state): State<AppState>,
    Json(body): Json<NewFact>,
) -> Result<(StatusCode, Json<Fact>), StatusCode> {
    let new_fact = body.validated().map_err(|e| {
        tracing::debug!(error = %e, "rejected fact submission");
        StatusCode::BAD_REQUEST
    })?;

    let row = state.store.insert(&new_fact).await.map_err(|e| {
        tracing::warn!(error = %e, "fact insert failed");
        store_error_to_status(&e)
    })?;
    tracing::info!(id = row.id, category = %row.category, "fact created");
    Ok((StatusCode::CREATED, Json(row)))
}

/// `PATCH /api/facts/{id}/vote`: set one vote counter to the sent value.
pub async fn vote_fact(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(body): Json<VoteUpdate>,
) -> Result<Json<Fact>, StatusCode> {
    let vote = body.validated().map_err(|_| StatusCode::BAD_REQUEST)?;

    let row = state.store.update_vote(id, vote).await.map_err(|e| {
        tracing::warn!(error = %e, id, field = vote.field.column(), "vote update failed");
        store_error_to_status(&e)
    })?;
    Ok(Json(row))
}

pub(crate) fn store_error_to_status(err: &StoreError) -> StatusCode {
    match err {
        StoreError::NotFound(_) => StatusCode::NOT_FOUND,
        StoreError::Request(_) | StoreError::Response { .. } | StoreError::Parse(_) => StatusCode::BAD_GATEWAY,
        StoreError::HttpClientBuild(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}
