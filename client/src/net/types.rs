//! Wire types shared with the host.
//!
//! The host proxies the backend table one-to-one, so the browser uses the
//! `facts` crate's row types directly.

pub use facts::{CategoryFilter, Fact, NewFact, VoteField, VoteUpdate};
