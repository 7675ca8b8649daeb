use dioxus::prelude::*;

/// Fixed link to the external song suggestion form.
#[component]
pub fn SuggestionLink(href: String) -> Element {
    rsx! {
        div { class: "fixed top-3 right-3 sm:top-4 sm:right-4 md:top-6 md:right-6 z-50",
            a {
                href: "{href}",
                target: "_blank",
                rel: "noopener noreferrer",
                class: "bg-zinc-900/90 backdrop-blur-sm border border-zinc-700/50 rounded-full px-3 py-2 sm:px-4 sm:py-2.5 hover:bg-zinc-800/90 transition-colors duration-150 touch-manipulation text-white text-xs sm:text-sm font-medium",
                "🎵 Add Song Suggestions"
            }
        }
    }
}
