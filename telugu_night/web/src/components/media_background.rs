use dioxus::prelude::*;
use telugu_night_core::scroll::{filter_css, HERO_BRIGHTNESS};
use telugu_night_core::ImageLoad;
use tracing::{debug, warn};
use wasm_bindgen::JsCast;
use web_sys::HtmlImageElement;

/// Blurred background image with a spinner while loading and a gradient if
/// the image cannot be loaded.
#[component]
pub fn MediaBackground(
    image_url: String,
    blur: f64,
    on_load: Option<EventHandler<()>>,
) -> Element {
    let mut load = use_signal(ImageLoad::default);

    let mut loaded = move |next: ImageLoad, first: bool| {
        load.set(next);
        if first {
            debug!("background image loaded");
            if let Some(handler) = on_load {
                handler.call(());
            }
        }
    };

    // A cached image can finish before the load listener exists.
    let check_complete = move |evt: MountedEvent| {
        let data = evt.data();
        let Some(img) = data
            .downcast::<web_sys::Element>()
            .and_then(|element| element.dyn_ref::<HtmlImageElement>())
        else {
            return;
        };
        match ImageLoad::from_element(img.complete(), img.natural_width()) {
            ImageLoad::Loaded => {
                let (next, first) = load.peek().on_load();
                loaded(next, first);
            }
            ImageLoad::Failed => {
                warn!(src = %img.src(), "background image was already broken at mount");
                load.set(ImageLoad::Failed);
            }
            ImageLoad::Loading => {}
        }
    };

    let state = load();
    let filter = filter_css(blur, HERO_BRIGHTNESS);
    let opacity = if state == ImageLoad::Loaded { "opacity-100" } else { "opacity-0" };

    rsx! {
        div { class: "absolute inset-0 z-0 overflow-hidden bg-zinc-950",
            if state.shows_fallback() {
                div { class: "absolute inset-0 bg-gradient-to-br from-zinc-900 via-zinc-950 to-black" }
            } else {
                div { class: "absolute inset-0 w-full h-full",
                    img {
                        src: "{image_url}",
                        alt: "Event visual background",
                        class: "w-full h-full object-cover transition-opacity duration-700 {opacity}",
                        style: "filter: {filter}; object-position: center center; min-width: 100%; min-height: 100%; transform: scale(1.05);",
                        loading: "eager",
                        decoding: "async",
                        crossorigin: "anonymous",
                        onmounted: check_complete,
                        onload: move |_| {
                            let (next, first) = load.peek().on_load();
                            loaded(next, first);
                        },
                        onerror: move |_| {
                            warn!("background image failed to load");
                            let next = load.peek().on_error();
                            load.set(next);
                        },
                    }
                }
                if state.shows_spinner() {
                    div { class: "absolute inset-0 flex items-center justify-center bg-zinc-950",
                        div { class: "w-8 h-8 border-4 border-white/20 border-t-white/80 rounded-full animate-spin" }
                    }
                }
            }
            div { class: "absolute inset-0 bg-gradient-to-b from-black/20 via-transparent to-black/40 pointer-events-none" }
        }
    }
}
