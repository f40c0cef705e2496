//! PostgREST-backed fact store (Supabase-style `/rest/v1/{table}`).

#[cfg(test)]
#[path = "postgrest_test.rs"]
mod postgrest_test;

use std::time::Duration;

use facts::{CategoryFilter, Fact, NewFact, VoteUpdate};
use reqwest::RequestBuilder;

use super::{FactStore, StoreError};
use crate::config::BackendConfig;

pub struct PostgrestFactStore {
    http: reqwest::Client,
    table_url: String,
    api_key: String,
}

impl PostgrestFactStore {
    /// Build a store for the configured backend table.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::HttpClientBuild`] if the HTTP client fails to build.
    pub fn new(config: &BackendConfig) -> Result<Self, StoreError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeouts.request_secs))
            .connect_timeout(Duration::from_secs(config.timeouts.connect_secs))
            .build()
            .map_err(|e| StoreError::HttpClientBuild(e.to_string()))?;
        Ok(Self { http, table_url: table_url(&config.base_url, &config.table), api_key: config.api_key.clone() })
    }

    fn authed(&self, builder: RequestBuilder) -> RequestBuilder {
        builder
            .header("apikey", &self.api_key)
            .bearer_auth(&self.api_key)
    }

    async fn send_rows(&self, builder: RequestBuilder) -> Result<Vec<Fact>, StoreError> {
        let response = self
            .authed(builder)
            .send()
            .await
            .map_err(|e| StoreError::Request(e.to_string()))?;

        let status = response.status().as_u16();
        let text = response
            .text()
            .await
            .map_err(|e| StoreError::Request(e.to_string()))?;

        if !(200..300).contains(&status) {
            return Err(StoreError::Response { status, body: text });
        }
        parse_rows(&text)
    }
}

#[async_trait::async_trait]
impl FactStore for PostgrestFactStore {
    async fn select(&self, filter: &CategoryFilter) -> Result<Vec<Fact>, StoreError> {
        tracing::debug!(%filter, "selecting facts");
        let request = self.http.get(&self.table_url).query(&select_query(filter));
        self.send_rows(request).await
    }

    async fn insert(&self, fact: &NewFact) -> Result<Fact, StoreError> {
        tracing::debug!(category = %fact.category, "inserting fact");
        let request = self
            .http
            .post(&self.table_url)
            .header("Prefer", "return=representation")
            .json(&[fact]);
        first_row(self.send_rows(request).await?)
            .ok_or_else(|| StoreError::Parse("insert returned no rows".to_owned()))
    }

    async fn update_vote(&self, id: i64, vote: VoteUpdate) -> Result<Fact, StoreError> {
        tracing::debug!(id, field = vote.field.column(), value = vote.value, "updating vote");
        let request = self
            .http
            .patch(&self.table_url)
            .query(&[("id", format!("eq.{id}"))])
            .header("Prefer", "return=representation")
            .json(&vote_body(vote));
        first_row(self.send_rows(request).await?).ok_or(StoreError::NotFound(id))
    }
}

fn table_url(base_url: &str, table: &str) -> String {
    format!("{}/rest/v1/{table}", base_url.trim_end_matches('/'))
}

/// Query string for a filtered select: `select=*&order=id.desc[&category=eq.X]`.
fn select_query(filter: &CategoryFilter) -> Vec<(&'static str, String)> {
    let mut query = vec![("select", "*".to_owned()), ("order", "id.desc".to_owned())];
    if let Some(name) = filter.name() {
        query.push(("category", format!("eq.{name}")));
    }
    query
}

/// Patch body setting a single counter column.
fn vote_body(vote: VoteUpdate) -> serde_json::Value {
    let mut body = serde_json::Map::new();
    body.insert(vote.field.column().to_owned(), serde_json::Value::from(vote.value));
    serde_json::Value::Object(body)
}

fn parse_rows(text: &str) -> Result<Vec<Fact>, StoreError> {
    serde_json::from_str(text).map_err(|e| StoreError::Parse(e.to_string()))
}

fn first_row(rows: Vec<Fact>) -> Option<Fact> {
    rows.into_iter().next()
}
