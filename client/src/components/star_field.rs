//! Decorative twinkling dots behind the page content.

use leptos::prelude::*;
use model::starfield::landing_stars;

#[component]
pub fn StarField() -> impl IntoView {
    view! {
        <div class="star-field" aria-hidden="true">
            {landing_stars()
                .into_iter()
                .map(|star| view! { <span class="star-field__star" style=star.style()></span> })
                .collect::<Vec<_>>()}
        </div>
    }
}
