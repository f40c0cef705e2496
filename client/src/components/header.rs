//! Page header with the title and the form toggle.

use leptos::prelude::*;

/// Shown in the header and as the document title.
pub const TITLE: &str = "World of my Projects";

/// Top bar. The button label follows form visibility.
#[component]
pub fn Header(#[prop(into)] show_form: Signal<bool>, on_toggle: Callback<()>) -> impl IntoView {
    view! {
        <header class="header">
            <div class="logo">
                <img id="logo" src="/logo.svg" alt="Fact board logo"/>
                <h1>{TITLE}</h1>
            </div>
            <button class="btn btn-large btn-open" on:click=move |_| on_toggle.run(())>
                {move || if show_form.get() { "Close" } else { "Share a fact" }}
            </button>
        </header>
    }
}
