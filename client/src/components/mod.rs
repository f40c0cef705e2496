//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components receive read-only props and report user actions upward through
//! callbacks; only the feed page touches shared state.

pub mod category_filter;
pub mod fact_form;
pub mod fact_item;
pub mod fact_list;
pub mod header;
pub mod loader;
