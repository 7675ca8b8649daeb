use crate::hooks::MediaSession;
use dioxus::prelude::*;
use telugu_night_core::Playback;

const CONTROL_CLASS: &str = "bg-zinc-900/90 backdrop-blur-sm border border-zinc-700/50 rounded-full w-10 h-10 sm:w-11 sm:h-11 flex items-center justify-center text-white hover:bg-zinc-800/90 transition-all duration-200 touch-manipulation disabled:opacity-50 disabled:cursor-not-allowed shadow-lg hover:shadow-xl active:scale-95";

/// Hidden background `<audio>` element plus its play/pause and mute controls.
///
/// The play/pause button drives the whole session, so a hero video attached
/// to the same session pauses and resumes with it.
#[component]
pub fn AudioPlayer(session: MediaSession, on_change: Option<EventHandler<Playback>>) -> Element {
    let url = session.source_url();
    let audio = session.audio();
    let playing = session.is_playing();
    let errored = audio.is_errored();

    use_effect(move || {
        let audio = session.audio();
        if let Some(handler) = on_change {
            handler.call(audio);
        }
    });

    let play_label = if playing { "Pause audio" } else { "Play audio" };
    let mute_label = if audio.muted { "Unmute audio" } else { "Mute audio" };

    rsx! {
        audio {
            class: "hidden",
            preload: "auto",
            crossorigin: "anonymous",
            onmounted: move |evt| session.attach_audio(&evt.data()),
            source { src: "{url}", r#type: "audio/mpeg" }
            "Your browser does not support the audio element."
        }

        div { class: "fixed top-3 left-3 sm:top-4 sm:left-4 md:top-6 md:left-6 z-50 flex gap-2 sm:gap-3",
            button {
                r#type: "button",
                class: CONTROL_CLASS,
                disabled: errored,
                aria_label: play_label,
                onclick: move |_| session.toggle_play(),
                if errored {
                    span { class: "text-red-400", "✕" }
                } else if playing {
                    span { "❚❚" }
                } else {
                    span { "▶" }
                }
            }
            button {
                r#type: "button",
                class: CONTROL_CLASS,
                disabled: errored,
                aria_label: mute_label,
                onclick: move |_| session.toggle_mute(),
                if audio.muted {
                    span { "🔇" }
                } else {
                    span { "🔊" }
                }
            }
            if !audio.is_loaded() && !errored {
                div { class: "self-center bg-zinc-900/90 backdrop-blur-sm border border-zinc-700/50 rounded-full px-3 py-1.5 text-xs text-white/70 whitespace-nowrap",
                    "Loading audio..."
                }
            }
        }
    }
}
