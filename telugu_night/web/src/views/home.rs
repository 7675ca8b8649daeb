use crate::components::{
    AnimatedSection, Animation, AudioPlayer, CountdownPanel, DetailCard, FeatureCard, Footer, HeroVideo,
    MediaBackground, ScrollIndicator, SuggestionLink,
};
use crate::dom;
use crate::hooks::{use_media_session, use_scroll_blur, use_settings};
use dioxus::prelude::*;
use telugu_night_core::Playback;
use tracing::debug;

struct Feature {
    icon: &'static str,
    title: &'static str,
    description: &'static str,
}

const FEATURES: [Feature; 4] = [
    Feature {
        icon: "🎵",
        title: "Telugu Music",
        description: "Curated playlist of contemporary and classic Telugu hits",
    },
    Feature {
        icon: "👥",
        title: "Dance Floor",
        description: "Open space for dancing and socializing with fellow attendees",
    },
    Feature {
        icon: "🍽️",
        title: "Food & Drinks",
        description: "Selection of refreshments available throughout the evening",
    },
    Feature {
        icon: "✨",
        title: "Atmosphere",
        description: "Immersive environment celebrating Telugu culture",
    },
];

// Stagger between neighbouring cards, in milliseconds.
const DETAIL_STAGGER_MS: u32 = 50;
const FEATURE_STAGGER_MS: u32 = 25;

/// The landing page: hero with video and countdown, feature cards, call to
/// action and footer.
#[component]
pub fn Home() -> Element {
    let settings = use_settings();
    let session = use_media_session(settings.audio.clone());
    let scroll = use_scroll_blur(settings.blur_curve(), settings.scroll.indicator_threshold_px);
    let target_millis = use_hook(|| dom::local_epoch_millis(settings.event.starts_at));

    let blur = (scroll.blur)();
    let event = settings.event.clone();
    let details = [
        ("📅", "Date", event.date_label.clone()),
        ("🕖", "Time", event.time_label.clone()),
        ("📍", "Venue", event.venue.clone()),
    ];

    rsx! {
        div { class: "min-h-screen bg-black text-white font-sans relative overflow-x-hidden",
            AudioPlayer {
                session,
                on_change: move |playback: Playback| debug!(?playback, "background audio state"),
            }
            SuggestionLink { href: settings.links.suggestions_url.clone() }

            div { class: "relative z-10",
                section { class: "min-h-screen flex items-center justify-center px-4 sm:px-6 lg:px-8 relative bg-black",
                    div { class: "text-center max-w-7xl mx-auto w-full",
                        div { class: "mb-6 sm:mb-8 md:mb-12 lg:mb-16 py-[101px]",
                            div { class: "hero-frame relative aspect-square max-w-md sm:max-w-lg md:max-w-2xl lg:max-w-3xl xl:max-w-5xl mx-auto rounded-lg sm:rounded-xl lg:rounded-2xl border border-white/20 bg-black overflow-hidden shadow-2xl",
                                if let Some(image_url) = settings.background.image_url.clone() {
                                    MediaBackground { image_url, blur }
                                }
                                HeroVideo { session, src: settings.video.url.clone(), blur }

                                div { class: "relative z-10 h-full flex flex-col items-center justify-center p-8 sm:p-10 md:p-12 lg:p-16 xl:p-20",
                                    h1 { class: "hero-title text-3xl sm:text-4xl md:text-5xl lg:text-6xl xl:text-7xl 2xl:text-8xl font-bold mb-2 sm:mb-3 md:mb-4 lg:mb-6 text-white tracking-tighter text-center uppercase",
                                        "{event.title}"
                                    }
                                    div { class: "w-8 sm:w-12 md:w-16 h-0.5 bg-white/90 mx-auto mb-2 sm:mb-3 md:mb-4" }
                                    p { class: "hero-tagline text-sm sm:text-base md:text-lg lg:text-xl xl:text-2xl text-white/95 font-bold tracking-tight text-center px-2",
                                        "{event.tagline}"
                                    }
                                }
                            }
                        }

                        if (scroll.show_indicator)() {
                            ScrollIndicator {}
                        }

                        div { class: "grid grid-cols-1 sm:grid-cols-3 gap-3 sm:gap-4 md:gap-6 lg:gap-8 mb-6 sm:mb-8 md:mb-12 lg:mb-16 max-w-5xl mx-auto",
                            {details.into_iter().enumerate().map(|(index, (icon, label, value))| rsx! {
                                AnimatedSection { key: "{label}", delay_ms: index as u32 * DETAIL_STAGGER_MS,
                                    DetailCard { icon: icon.to_string(), label: label.to_string(), value }
                                }
                            })}
                        }

                        AnimatedSection {
                            CountdownPanel { target_millis }
                        }
                    }
                }

                section { class: "py-16 sm:py-20 md:py-24 lg:py-32 px-4 sm:px-6 lg:px-8 bg-black",
                    div { class: "max-w-7xl mx-auto",
                        AnimatedSection { class: "text-center mb-12 sm:mb-16 md:mb-20".to_string(),
                            div { class: "bg-zinc-900/60 backdrop-blur-sm rounded-xl sm:rounded-2xl p-6 sm:p-8 md:p-12 border border-zinc-800/80 shadow-2xl",
                                h2 { class: "text-2xl sm:text-3xl md:text-4xl lg:text-5xl font-bold text-white mb-3 sm:mb-4 md:mb-6 tracking-tight",
                                    "What to Expect"
                                }
                                div { class: "w-12 sm:w-16 h-0.5 bg-white/70 mx-auto mb-3 sm:mb-4 md:mb-6" }
                                p { class: "text-base sm:text-lg md:text-xl text-white/80 max-w-2xl mx-auto",
                                    "An evening celebrating Telugu music and culture"
                                }
                            }
                        }

                        div { class: "grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-4 gap-4 sm:gap-6 md:gap-8",
                            {FEATURES.iter().enumerate().map(|(index, feature)| rsx! {
                                AnimatedSection { key: "{feature.title}", delay_ms: index as u32 * FEATURE_STAGGER_MS,
                                    FeatureCard {
                                        icon: feature.icon.to_string(),
                                        title: feature.title.to_string(),
                                        description: feature.description.to_string(),
                                    }
                                }
                            })}
                        }
                    }
                }

                section { class: "py-16 sm:py-20 md:py-24 lg:py-32 px-4 sm:px-6 lg:px-8 bg-black",
                    div { class: "max-w-4xl mx-auto text-center",
                        AnimatedSection { animation: Animation::FadeIn,
                            div { class: "bg-zinc-900/60 backdrop-blur-sm rounded-xl sm:rounded-2xl p-8 sm:p-12 md:p-16 border border-zinc-800/80 shadow-2xl",
                                h2 { class: "text-2xl sm:text-3xl md:text-4xl lg:text-5xl font-bold text-white mb-4 sm:mb-6 md:mb-8 tracking-tight",
                                    "Join Us for an Amazing Night!"
                                }
                                p { class: "text-base sm:text-lg md:text-xl text-white/80 mb-8 sm:mb-10 md:mb-12 max-w-2xl mx-auto",
                                    "Experience the best of Telugu music and culture"
                                }
                            }
                        }
                    }
                }

                Footer { copyright: "© 2025 Telugu Night Manipal. All rights reserved.".to_string() }
            }
        }
    }
}
