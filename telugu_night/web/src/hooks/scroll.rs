use super::use_scoped;
use crate::dom;
use dioxus::prelude::*;
use gloo_events::EventListener;
use telugu_night_core::scroll::shows_scroll_indicator;
use telugu_night_core::BlurCurve;

/// What the page derives from the window scroll position.
#[derive(Clone, Copy)]
pub struct ScrollBlur {
    pub blur: Memo<f64>,
    pub show_indicator: Memo<bool>,
}

pub fn use_scroll_blur(curve: BlurCurve, indicator_threshold_px: f64) -> ScrollBlur {
    let mut scroll_y = use_signal(dom::scroll_y);

    use_scoped(move || {
        let window = web_sys::window()?;
        Some(EventListener::new(&window, "scroll", move |_| {
            scroll_y.set(dom::scroll_y());
        }))
    });

    let blur = use_memo(move || curve.blur_for(scroll_y()));
    let show_indicator = use_memo(move || shows_scroll_indicator(scroll_y(), indicator_threshold_px));

    ScrollBlur {
        blur,
        show_indicator,
    }
}
