use dioxus::prelude::*;

#[component]
pub fn Footer(copyright: String) -> Element {
    rsx! {
        footer { class: "py-8 sm:py-12 md:py-16 px-4 sm:px-6 lg:px-8 bg-black",
            div { class: "max-w-4xl mx-auto text-center",
                div { class: "bg-zinc-900/60 backdrop-blur-sm rounded-lg sm:rounded-xl p-4 sm:p-6 md:p-8 border border-zinc-800/80",
                    p { class: "text-white/70 text-xs sm:text-sm font-bold", "{copyright}" }
                }
            }
        }
    }
}
