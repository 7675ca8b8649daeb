use dioxus::prelude::*;

/// Bouncing "scroll down" hint shown near the top of the page.
#[component]
pub fn ScrollIndicator() -> Element {
    rsx! {
        div { class: "absolute bottom-6 sm:bottom-8 left-1/2 transform -translate-x-1/2 animate-bounce",
            div { class: "bg-zinc-900/90 backdrop-blur-sm rounded-full px-3 py-2 border border-zinc-700/50 shadow-lg text-white/80 text-lg",
                "⌄"
            }
        }
    }
}
