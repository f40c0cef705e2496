use leptos::prelude::*;

/// Placeholder shown while the feed is loading.
#[component]
pub fn Loader() -> impl IntoView {
    view! { <p class="message">"Loading..."</p> }
}
