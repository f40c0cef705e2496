//! Blocking browser notifications.
//!
//! Only a failed feed fetch is surfaced to the user, through `window.alert`.
//! SSR paths no-op.

/// Message shown when the fact list cannot be loaded.
pub const FETCH_FAILED_MESSAGE: &str = "There was a problem with data..";

/// Show a blocking `window.alert` with `message`.
pub fn blocking_alert(message: &str) {
    #[cfg(feature = "hydrate")]
    {
        let Some(window) = web_sys::window() else {
            return;
        };
        if let Err(e) = window.alert_with_message(message) {
            leptos::logging::warn!("alert failed: {e:?}");
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = message;
    }
}
