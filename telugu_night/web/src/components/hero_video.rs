use crate::hooks::MediaSession;
use dioxus::prelude::*;
use telugu_night_core::scroll::{filter_css, HERO_BRIGHTNESS};

/// Muted, looping hero video that blurs as the page scrolls.
#[component]
pub fn HeroVideo(session: MediaSession, src: String, blur: f64) -> Element {
    let filter = filter_css(blur, HERO_BRIGHTNESS);

    rsx! {
        div { class: "absolute inset-0 z-0 overflow-hidden",
            video {
                class: "w-full h-full object-cover",
                autoplay: true,
                muted: true,
                r#loop: true,
                preload: "metadata",
                "playsinline": "true",
                style: "filter: {filter}; object-position: center center; min-width: 100%; min-height: 100%;",
                onmounted: move |evt| session.attach_video(&evt.data()),
                source { src: "{src}", r#type: "video/mp4" }
            }
            div { class: "absolute inset-0 bg-gradient-to-b from-black/20 via-transparent to-black/40" }
        }
    }
}
