use dioxus::prelude::*;

#[component]
pub fn NotFound(route: Vec<String>) -> Element {
    let path = route.join("/");

    rsx! {
        div {
            class: "min-h-screen flex items-center justify-center bg-black text-white",
            div {
                class: "text-center px-6",
                div {
                    class: "mb-8",
                    h1 {
                        class: "text-9xl font-bold text-zinc-700 mb-4",
                        "404"
                    }
                    h2 {
                        class: "text-4xl font-bold mb-4",
                        "Page Not Found"
                    }
                    p {
                        class: "text-xl text-white/70 mb-8",
                        "There is nothing at /{path}. The party is on the main page."
                    }
                }
                Link {
                    to: "/",
                    class: "inline-block bg-zinc-900/90 border border-zinc-700/50 hover:bg-zinc-800/90 text-white font-bold py-3 px-6 rounded-full transition-colors duration-200",
                    "Back to Telugu Night"
                }
            }
        }
    }
}
