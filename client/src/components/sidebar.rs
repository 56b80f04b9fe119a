//! Left navigation rail.

use leptos::prelude::*;
use model::NavItem;

use crate::state::ui::UiState;

#[component]
pub fn Sidebar() -> impl IntoView {
    view! {
        <aside class="sidebar">
            <nav aria-label="Main">
                <ul class="sidebar__list">
                    {NavItem::ALL
                        .into_iter()
                        .map(|item| view! { <SidebarItem item=item/> })
                        .collect::<Vec<_>>()}
                </ul>
            </nav>
        </aside>
    }
}

#[component]
fn SidebarItem(item: NavItem) -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    view! {
        <li>
            <button
                class="sidebar__item"
                class:sidebar__item--active=move || ui.with(|s| s.is_nav_active(item))
                on:click=move |_| ui.update(|s| s.select_nav(item))
            >
                <svg class="sidebar__icon" viewBox="0 0 24 24" aria-hidden="true">
                    <path d=item.icon()></path>
                </svg>
                <span class="sidebar__label">{item.label()}</span>
            </button>
        </li>
    }
}
