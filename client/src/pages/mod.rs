//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! The feed page owns fetch orchestration and delegates rendering details
//! to `components`.

pub mod feed;
