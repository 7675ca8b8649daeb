use crate::hooks::use_countdown;
use dioxus::prelude::*;

/// Days, hours, minutes and seconds until the event starts.
#[component]
pub fn CountdownPanel(target_millis: i64) -> Element {
    let time_left = use_countdown(target_millis);

    rsx! {
        div { class: "p-4 sm:p-6 md:p-8 lg:p-10 max-w-xl sm:max-w-2xl mx-auto rounded-xl sm:rounded-2xl border transition-colors duration-200 bg-zinc-900/60 border-zinc-800/80 shadow-2xl backdrop-blur-sm",
            h3 { class: "text-base sm:text-lg md:text-xl font-bold mb-4 sm:mb-6 md:mb-8 text-white/90 uppercase tracking-tight text-center",
                "Event Countdown"
            }
            div { class: "grid grid-cols-4 gap-2 sm:gap-3 md:gap-4 lg:gap-6",
                {time_left().units().into_iter().map(|(unit, value)| rsx! {
                    div { key: "{unit}", class: "text-center",
                        div { class: "p-2 sm:p-3 md:p-4 lg:p-6 mb-1 sm:mb-2 md:mb-4 rounded-lg sm:rounded-xl border bg-zinc-800/60 border-zinc-700/80 shadow-xl backdrop-blur-sm",
                            span { class: "text-lg sm:text-xl md:text-2xl lg:text-3xl font-bold text-white tracking-tight block",
                                "{value}"
                            }
                        }
                        span { class: "text-xs sm:text-sm uppercase tracking-wider text-white/70 font-medium block",
                            "{unit}"
                        }
                    }
                })}
            }
        }
    }
}
