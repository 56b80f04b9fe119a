//! "Backend Status" and "API Response" cards fed by the status probe.
//!
//! DESIGN
//! ======
//! Each card reads exactly one resource. An unresolved resource renders the
//! slot's initial state, which is also what SSR emits.

use leptos::prelude::*;
use model::status::unreachable_hint;
use model::{ConnectionStatus, GreetingStatus};

#[component]
pub fn StatusPanel(
    root: LocalResource<ConnectionStatus>,
    greeting: LocalResource<GreetingStatus>,
    base_url: String,
) -> impl IntoView {
    view! {
        <div class="status-panel">
            <div class="status-card">
                <h2 class="status-card__title">"Backend Status"</h2>
                {move || match root.get().unwrap_or_default() {
                    ConnectionStatus::Connecting => {
                        view! { <p class="status-card__pending">"Connecting to API..."</p> }.into_any()
                    }
                    ConnectionStatus::Connected { message } => {
                        view! {
                            <div>
                                <p class="status-card__ok">"✅ Connected"</p>
                                <p class="status-card__text">{message}</p>
                            </div>
                        }
                            .into_any()
                    }
                    ConnectionStatus::Failed { reason } => {
                        view! {
                            <div>
                                <p class="status-card__error">{format!("❌ Error: {reason}")}</p>
                                <p class="status-card__hint">{unreachable_hint(&base_url)}</p>
                            </div>
                        }
                            .into_any()
                    }
                }}
            </div>
            <div class="status-card">
                <h2 class="status-card__title">"API Response"</h2>
                {move || match greeting.get().unwrap_or_default() {
                    GreetingStatus::Loading => {
                        view! { <p class="status-card__pending">"Loading..."</p> }.into_any()
                    }
                    GreetingStatus::Loaded(message) => {
                        view! { <p class="status-card__text">{message}</p> }.into_any()
                    }
                }}
            </div>
        </div>
    }
}
