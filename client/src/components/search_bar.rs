//! Search input. Typing only updates `UiState::search_query`; submitting
//! does nothing.

use leptos::prelude::*;

use crate::state::ui::UiState;

#[component]
pub fn SearchBar() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    view! {
        <form
            class="search-bar"
            role="search"
            on:submit=move |ev: leptos::ev::SubmitEvent| ev.prevent_default()
        >
            <input
                class="search-bar__input"
                type="search"
                placeholder="Search videos, channels, and topics"
                aria-label="Search"
                prop:value=move || ui.with(|s| s.search_query.clone())
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    ui.update(|s| s.set_search_query(value));
                }
            />
            <button class="search-bar__button" type="submit" aria-label="Search">
                <svg viewBox="0 0 24 24" aria-hidden="true">
                    <circle cx="11" cy="11" r="7"></circle>
                    <line x1="16.5" y1="16.5" x2="21" y2="21"></line>
                </svg>
            </button>
        </form>
    }
}
