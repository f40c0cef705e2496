//! Category sidebar: "All" plus one button per registry category.
//!
//! DESIGN
//! ======
//! Stateless. The selected filter is passed in only to mark the active
//! button; clicks are reported to the feed page, which owns the selection.

use facts::{CATEGORIES, CategoryFilter as Filter};
use leptos::prelude::*;

#[component]
pub fn CategoryFilter(#[prop(into)] current: Signal<Filter>, on_select: Callback<Filter>) -> impl IntoView {
    let buttons = CATEGORIES
        .iter()
        .map(|category| {
            let filter = Filter::category(category);
            let active = filter.clone();
            view! {
                <li class="category">
                    <button
                        class="btn btn-category"
                        class:btn--active=move || current.with(|c| *c == active)
                        style=format!("background-color: {}", category.color)
                        on:click=move |_| on_select.run(filter.clone())
                    >
                        {category.name}
                    </button>
                </li>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <aside class="category-filter">
            <ul>
                <li class="category">
                    <button
                        class="btn btn-all-categories"
                        class:btn--active=move || current.with(|c| *c == Filter::All)
                        on:click=move |_| on_select.run(Filter::All)
                    >
                        "All"
                    </button>
                </li>
                {buttons}
            </ul>
        </aside>
    }
}
