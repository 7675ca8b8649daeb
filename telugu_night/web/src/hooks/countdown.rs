use super::use_scoped;
use crate::dom;
use dioxus::prelude::*;
use gloo_timers::callback::Interval;
use telugu_night_core::{Countdown, TimeLeft};

/// Remaining time until `target_millis`, refreshed once per second.
pub fn use_countdown(target_millis: i64) -> ReadOnlySignal<TimeLeft> {
    let mut time_left = use_signal(move || Countdown::new(target_millis).tick(dom::now_millis()));

    use_scoped(move || {
        let mut countdown = Countdown::new(target_millis);
        Some(Interval::new(1_000, move || {
            time_left.set(countdown.tick(dom::now_millis()));
        }))
    });

    time_left.into()
}
