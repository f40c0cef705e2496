//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! `feed` is the shell's single state container, provided via context and
//! handed to children as read-only props plus callbacks. `form` is local to
//! the submission form and dropped when the form closes.

pub mod feed;
pub mod form;
