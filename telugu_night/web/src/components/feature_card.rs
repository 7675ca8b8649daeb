use dioxus::prelude::*;

#[component]
pub fn FeatureCard(icon: String, title: String, description: String) -> Element {
    rsx! {
        div { class: "bg-zinc-900/60 backdrop-blur-sm border border-zinc-800/80 hover:border-zinc-700/80 transition-colors duration-200 shadow-2xl rounded-lg sm:rounded-xl group h-full",
            div { class: "p-4 sm:p-6 md:p-8 text-center h-full flex flex-col",
                div { class: "bg-zinc-800/60 p-3 sm:p-4 rounded-full w-fit mx-auto mb-4 sm:mb-6 group-hover:bg-zinc-700/60 transition-colors duration-200 flex-shrink-0 text-2xl sm:text-3xl",
                    "{icon}"
                }
                h3 { class: "text-base sm:text-lg font-bold text-white mb-2 sm:mb-4 tracking-tight flex-shrink-0",
                    "{title}"
                }
                p { class: "text-white/70 text-xs sm:text-sm leading-relaxed flex-grow font-bold",
                    "{description}"
                }
            }
        }
    }
}
