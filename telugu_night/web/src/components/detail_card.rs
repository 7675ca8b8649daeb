use dioxus::prelude::*;

/// Small card in the hero listing one event fact.
#[component]
pub fn DetailCard(icon: String, label: String, value: String) -> Element {
    rsx! {
        div { class: "text-center py-4 sm:py-6 md:py-8 px-3 sm:px-4 md:px-6 rounded-lg sm:rounded-xl border transition-colors duration-200 bg-zinc-900/60 border-zinc-800/80 shadow-xl backdrop-blur-sm",
            div { class: "text-2xl sm:text-3xl mb-2 sm:mb-3 md:mb-4 text-white/80", "{icon}" }
            h3 { class: "text-xs sm:text-sm font-bold text-white/70 uppercase tracking-tight mb-1 sm:mb-2 md:mb-3",
                "{label}"
            }
            p { class: "text-sm sm:text-base md:text-lg lg:text-xl text-white font-bold", "{value}" }
        }
    }
}
