use dioxus::prelude::*;
use gloo_timers::future::TimeoutFuture;

/// Entrance animation applied once the section is revealed.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub enum Animation {
    #[default]
    FadeUp,
    FadeIn,
}

impl Animation {
    fn class(self) -> &'static str {
        match self {
            Animation::FadeUp => "reveal-fade-up",
            Animation::FadeIn => "reveal-fade-in",
        }
    }
}

/// Renders its children and reveals them after `delay_ms`.
#[component]
pub fn AnimatedSection(
    #[props(default)] animation: Animation,
    #[props(default)] delay_ms: u32,
    #[props(default)] class: String,
    children: Element,
) -> Element {
    let mut revealed = use_signal(|| false);

    use_effect(move || {
        spawn(async move {
            if delay_ms > 0 {
                TimeoutFuture::new(delay_ms).await;
            }
            revealed.set(true);
        });
    });

    let state = if revealed() { "reveal-shown" } else { "reveal-hidden" };
    let animation = animation.class();

    rsx! {
        div { class: "reveal {animation} {state} {class}", {children} }
    }
}
