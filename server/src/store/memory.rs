//! In-process fact store for local development and tests.

#[cfg(test)]
#[path = "memory_test.rs"]
mod memory_test;

use facts::{CategoryFilter, Fact, NewFact, VoteUpdate};
use tokio::sync::RwLock;

use super::{FactStore, StoreError};

/// Fact rows held in memory. Ids are assigned from a running counter the way
/// the backend's identity column would.
pub struct MemoryFactStore {
    rows: RwLock<Vec<Fact>>,
}

impl MemoryFactStore {
    #[must_use]
    pub fn new(rows: Vec<Fact>) -> Self {
        Self { rows: RwLock::new(rows) }
    }

    /// A store preloaded with a few demo facts across several categories.
    #[must_use]
    pub fn seeded() -> Self {
        Self::new(demo_facts())
    }
}

impl Default for MemoryFactStore {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

#[async_trait::async_trait]
impl FactStore for MemoryFactStore {
    async fn select(&self, filter: &CategoryFilter) -> Result<Vec<Fact>, StoreError> {
        let rows = self.rows.read().await;
        let mut selected: Vec<Fact> = rows.iter().filter(|f| filter.matches(f)).cloned().collect();
        selected.sort_by(|a, b| b.id.cmp(&a.id));
        Ok(selected)
    }

    async fn insert(&self, fact: &NewFact) -> Result<Fact, StoreError> {
        let mut rows = self.rows.write().await;
        let id = rows.iter().map(|f| f.id).max().unwrap_or(0) + 1;
        let row = Fact {
            id,
            text: fact.text.clone(),
            source: fact.source.clone(),
            category: fact.category.clone(),
            vote_interesting: 0,
            vote_mindblowing: 0,
            vote_false: 0,
            created_at: None,
        };
        rows.push(row.clone());
        Ok(row)
    }

    async fn update_vote(&self, id: i64, vote: VoteUpdate) -> Result<Fact, StoreError> {
        let mut rows = self.rows.write().await;
        let row = rows
            .iter_mut()
            .find(|f| f.id == id)
            .ok_or(StoreError::NotFound(id))?;
        row.set_votes(vote.field, vote.value);
        Ok(row.clone())
    }
}

fn demo_fact(id: i64, text: &str, source: &str, category: &str, votes: [i64; 3]) -> Fact {
    Fact {
        id,
        text: text.to_owned(),
        source: source.to_owned(),
        category: category.to_owned(),
        vote_interesting: votes[0],
        vote_mindblowing: votes[1],
        vote_false: votes[2],
        created_at: None,
    }
}

/// Demo rows used by [`MemoryFactStore::seeded`].
#[must_use]
pub fn demo_facts() -> Vec<Fact> {
    vec![
        demo_fact(
            1,
            "React is being developed by Meta (formerly facebook)",
            "https://opensource.fb.com/",
            "Technology",
            [24, 9, 4],
        ),
        demo_fact(
            2,
            "Millennial dads spend 3 times as much time with their kids than their fathers spent with them.",
            "https://www.mother.ly/parenting/millennial-dads-spend-more-time-with-their-kids",
            "Society",
            [11, 2, 0],
        ),
        demo_fact(
            3,
            "Lisbon is the capital of Portugal",
            "https://en.wikipedia.org/wiki/Lisbon",
            "Society",
            [8, 3, 1],
        ),
        demo_fact(
            4,
            "Light from the Sun takes about eight minutes to reach Earth.",
            "https://en.wikipedia.org/wiki/Sunlight",
            "Science",
            [4, 1, 0],
        ),
    ]
}
