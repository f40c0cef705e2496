//! Networking modules for the fact API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` issues the three HTTP calls to the host's `/api/facts` routes and
//! `types` re-exports the shared wire schema from the `facts` crate.

pub mod api;
pub mod types;
