//! Submission form for new facts.
//!
//! ERROR HANDLING
//! ==============
//! Invalid input is rejected silently with no insert call. A failed insert
//! only logs; the form stays open with its inputs so the user can retry.

use facts::{CATEGORIES, Fact};
use leptos::prelude::*;

use crate::state::form::FormState;

#[component]
pub fn FactForm(on_created: Callback<Fact>) -> impl IntoView {
    let form = RwSignal::new(FormState::default());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let mut pending = None;
        form.update(|f| pending = f.begin_submit());
        let Some(new_fact) = pending else {
            return;
        };

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::insert_fact(&new_fact).await {
                Ok(fact) => {
                    form.update(|f| f.finish_submit(true));
                    on_created.run(fact);
                }
                Err(e) => {
                    leptos::logging::warn!("{e}");
                    form.update(|f| f.finish_submit(false));
                }
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (new_fact, on_created);
        }
    };

    let options = CATEGORIES
        .iter()
        .map(|c| view! { <option value=c.name>{c.name.to_uppercase()}</option> })
        .collect::<Vec<_>>();

    view! {
        <form class="fact-form" on:submit=on_submit>
            <input
                type="text"
                placeholder="Share a fact with the world..."
                prop:value=move || form.with(|f| f.text.clone())
                on:input=move |ev| form.update(|f| f.text = event_target_value(&ev))
            />
            <span>{move || form.with(FormState::remaining)}</span>
            <input
                type="text"
                placeholder="Trustworthy source..."
                prop:value=move || form.with(|f| f.source.clone())
                on:input=move |ev| form.update(|f| f.source = event_target_value(&ev))
            />
            <select
                prop:value=move || form.with(|f| f.category.clone())
                on:change=move |ev| form.update(|f| f.category = event_target_value(&ev))
            >
                <option value="">"Choose category:"</option>
                {options}
            </select>
            <button class="btn btn-large" type="submit" disabled=move || form.with(|f| f.submitting)>
                "Post"
            </button>
        </form>
    }
}
