//! Feed page: header, optional form, category sidebar, and the fact list.
//!
//! SYSTEM CONTEXT
//! ==============
//! The only route. Reads and writes the shared `FeedState` context and is the
//! single place that talks to the list endpoint.
//!
//! DESIGN
//! ======
//! A memo over the selected category drives the fetch effect, so vote and
//! insert updates to the list never trigger a refetch. Every fetch takes a
//! ticket; a response that arrives after a newer fetch started is dropped.

use facts::Fact;
use leptos::prelude::*;

use crate::components::category_filter::CategoryFilter;
use crate::components::fact_form::FactForm;
use crate::components::fact_list::FactList;
use crate::components::header::Header;
use crate::components::loader::Loader;
use crate::state::feed::FeedState;
#[cfg(feature = "hydrate")]
use crate::state::feed::FetchOutcome;

#[component]
pub fn FeedPage() -> impl IntoView {
    let feed = expect_context::<RwSignal<FeedState>>();

    let category = Memo::new(move |_| feed.with(|s| s.current_category.clone()));

    Effect::new(move || {
        let filter = category.get();
        let mut ticket = None;
        feed.update(|s| ticket = Some(s.begin_fetch()));
        let Some(ticket) = ticket else {
            return;
        };

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let result = crate::net::api::fetch_facts(&filter).await;
            if let Err(e) = &result {
                leptos::logging::warn!("{e}");
            }
            let mut outcome = FetchOutcome::Stale;
            feed.update(|s| outcome = s.finish_fetch(ticket, result));
            if outcome.alerts_user() {
                crate::util::alert::blocking_alert(crate::util::alert::FETCH_FAILED_MESSAGE);
            } else if outcome == FetchOutcome::Stale {
                leptos::logging::log!("dropped stale response for category {filter}");
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (filter, ticket);
        }
    });

    let on_select = Callback::new(move |filter: facts::CategoryFilter| {
        feed.update(|s| {
            s.select_category(filter);
        });
    });
    let on_toggle = Callback::new(move |()| feed.update(FeedState::toggle_form));
    let on_created = Callback::new(move |fact: Fact| feed.update(|s| s.apply_created(fact)));
    let on_updated = Callback::new(move |fact: Fact| {
        feed.update(|s| {
            if !s.replace(fact) {
                leptos::logging::log!("updated fact is no longer in the list");
            }
        });
    });

    let show_form = Memo::new(move |_| feed.with(|s| s.show_form));
    let facts = Memo::new(move |_| feed.with(|s| s.facts.clone()));

    view! {
        <Header show_form=show_form on_toggle=on_toggle/>
        <Show when=move || show_form.get()>
            <FactForm on_created=on_created/>
        </Show>
        <main class="main">
            <CategoryFilter current=category on_select=on_select/>
            <Show when=move || !feed.with(|s| s.is_loading) fallback=|| view! { <Loader/> }>
                <FactList facts=facts on_updated=on_updated/>
            </Show>
        </main>
    }
}
