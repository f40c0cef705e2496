//! Ordered list of facts.

use facts::Fact;
use leptos::prelude::*;

use crate::components::fact_item::FactItem;

/// Renders the feed snapshot in order; each item handles its own votes.
#[component]
pub fn FactList(#[prop(into)] facts: Signal<Vec<Fact>>, on_updated: Callback<Fact>) -> impl IntoView {
    view! {
        <section>
            <ul class="facts-list">
                {move || {
                    facts
                        .get()
                        .into_iter()
                        .map(|fact| view! { <FactItem fact=fact on_updated=on_updated/> })
                        .collect::<Vec<_>>()
                }}
            </ul>
        </section>
    }
}
