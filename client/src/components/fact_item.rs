//! A single fact with its source link, category tag, and vote buttons.
//!
//! Voting is read-modify-write: the click sends the displayed count plus
//! one, so two clients voting on the same snapshot lose an increment. The
//! backend's returned row replaces the local copy on success; on failure the
//! stale count stays and the error is only logged.

use facts::{Fact, VoteField, category_color};
use leptos::prelude::*;

#[component]
pub fn FactItem(fact: Fact, on_updated: Callback<Fact>) -> impl IntoView {
    let tag_style = format!("background-color: {}", category_color(&fact.category));

    let vote_buttons = VoteField::ALL
        .into_iter()
        .map(|field| {
            let fact_id = fact.id;
            let vote = fact.next_vote(field);
            let count = fact.votes(field);
            let on_click = move |_| {
                #[cfg(feature = "hydrate")]
                leptos::task::spawn_local(async move {
                    match crate::net::api::increment_vote(fact_id, vote).await {
                        Ok(updated) => on_updated.run(updated),
                        Err(e) => leptos::logging::warn!("vote on fact {fact_id} not applied: {e}"),
                    }
                });
                #[cfg(not(feature = "hydrate"))]
                {
                    let _ = (fact_id, vote, on_updated);
                }
            };
            view! {
                <button class="vote-button" title=field.column() on:click=on_click>
                    {field.emoji()}
                    " "
                    {count}
                </button>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <li class="fact">
            <p>
                {fact.text}
                " "
                <a class="source" href=fact.source target="_blank" rel="noreferrer">
                    "(Source)"
                </a>
            </p>
            <span class="tag" style=tag_style>
                {fact.category}
            </span>
            <div class="vote-buttons">{vote_buttons}</div>
        </li>
    }
}
