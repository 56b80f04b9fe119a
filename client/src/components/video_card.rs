//! Fixed-size card for one mock video.

use leptos::prelude::*;
use model::VideoSummary;

#[component]
pub fn VideoCard(video: &'static VideoSummary) -> impl IntoView {
    view! {
        <article class="video-card" data-video-id=video.id.to_string()>
            <div class="video-card__thumbnail" style:background=video.thumbnail>
                <span class="video-card__duration">{video.duration}</span>
            </div>
            <div class="video-card__body">
                <h3 class="video-card__title">{video.title}</h3>
                <p class="video-card__channel">{video.channel}</p>
                <p class="video-card__meta">{format!("{} • {}", video.views, video.uploaded)}</p>
                <span class="video-card__category">{video.category.label()}</span>
            </div>
        </article>
    }
}
