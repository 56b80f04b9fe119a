//! Landing page: hero, category pills, status probe and video rows.

use leptos::prelude::*;
use model::catalog;

use crate::components::app_header::AppHeader;
use crate::components::category_bar::CategoryBar;
use crate::components::sidebar::Sidebar;
use crate::components::star_field::StarField;
use crate::components::status_panel::StatusPanel;
use crate::components::video_section::VideoSection;
use crate::net::api;

/// Landing page. Fires both status probes once on mount.
#[component]
pub fn HomePage() -> impl IntoView {
    let base_url = api::api_base_url();

    // Independent one-shot probes; each writes only its own card.
    let root = LocalResource::new({
        let base_url = base_url.clone();
        move || api::probe_root(base_url.clone())
    });
    let greeting = LocalResource::new({
        let base_url = base_url.clone();
        move || api::probe_greeting(base_url.clone())
    });

    view! {
        <div class="home-page">
            <StarField/>
            <AppHeader/>
            <div class="home-page__layout">
                <Sidebar/>
                <main class="home-page__main">
                    <section class="hero">
                        <h1 class="hero__title">"Knowledge Without Limits"</h1>
                        <p class="hero__subtitle">
                            "Explore the world's video knowledge with context, curation, and conversation."
                        </p>
                    </section>
                    <CategoryBar/>
                    <StatusPanel root=root greeting=greeting base_url=base_url/>
                    {catalog::sections()
                        .into_iter()
                        .map(|section| view! { <VideoSection section=section/> })
                        .collect::<Vec<_>>()}
                </main>
            </div>
        </div>
    }
}
