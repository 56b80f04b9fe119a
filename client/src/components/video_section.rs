//! Titled, horizontally scrolling row of video cards.

use leptos::prelude::*;
use model::Section;

use crate::components::video_card::VideoCard;

#[component]
pub fn VideoSection(section: Section) -> impl IntoView {
    let id = format!("section-{}", section.kind.key());
    let count = section.videos.len();

    view! {
        <section class="video-section" id=id>
            <header class="video-section__header">
                <h2 class="video-section__title">{section.kind.title()}</h2>
                <span class="video-section__count">{format!("{count} videos")}</span>
            </header>
            <div class="video-section__row">
                {section
                    .videos
                    .into_iter()
                    .map(|video| view! { <VideoCard video=video/> })
                    .collect::<Vec<_>>()}
            </div>
        </section>
    }
}
