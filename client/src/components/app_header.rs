//! Top bar with the brand mark and the search box.

use leptos::prelude::*;

use crate::components::search_bar::SearchBar;

#[component]
pub fn AppHeader() -> impl IntoView {
    view! {
        <header class="app-header">
            <a class="app-header__brand" href="/">
                <span class="app-header__logo" aria-hidden="true">"✦"</span>
                <span class="app-header__title">"Magna Galactica"</span>
            </a>
            <SearchBar/>
        </header>
    }
}
