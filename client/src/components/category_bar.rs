//! Horizontally scrolling row of category pills.
//!
//! Clicking a pill moves the highlight. The sections below are not
//! refiltered.

use leptos::prelude::*;
use model::Category;
use model::catalog::ALL_PILL_LABEL;

use crate::state::ui::UiState;

#[component]
pub fn CategoryBar() -> impl IntoView {
    view! {
        <nav class="category-bar" aria-label="Categories">
            <CategoryPill category=None/>
            {Category::ALL
                .into_iter()
                .map(|c| view! { <CategoryPill category=Some(c)/> })
                .collect::<Vec<_>>()}
        </nav>
    }
}

/// One pill. `None` is the "All" pill.
#[component]
fn CategoryPill(category: Option<Category>) -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let label = category.map_or(ALL_PILL_LABEL, Category::label);

    view! {
        <button
            class="category-pill"
            class:category-pill--active=move || ui.with(|s| s.is_category_active(category))
            on:click=move |_| ui.update(|s| s.select_category(category))
        >
            {label}
        </button>
    }
}
