//! Browser bindings for the core traits.
use chrono::{Datelike, NaiveDateTime, Timelike};
use dioxus::prelude::MountedData;
use gloo_timers::callback::Timeout;
use std::future::Future;
use telugu_night_core::{MediaError, MediaEvent, MediaHandle, Playback, Scheduler};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::HtmlMediaElement;

// HTMLMediaElement.readyState values.
const HAVE_CURRENT_DATA: u16 = 2;
const HAVE_FUTURE_DATA: u16 = 3;

/// An `<audio>` or `<video>` element driven through [`MediaHandle`].
#[derive(Debug, Clone, PartialEq)]
pub struct DomMedia(HtmlMediaElement);

impl DomMedia {
    /// Resolves the element behind an `onmounted` event.
    pub fn from_mounted(data: &MountedData) -> Option<Self> {
        data.downcast::<web_sys::Element>()
            .and_then(|element| element.dyn_ref::<HtmlMediaElement>())
            .cloned()
            .map(DomMedia)
    }

    pub fn element(&self) -> &HtmlMediaElement {
        &self.0
    }

    pub fn can_play(&self) -> bool {
        self.0.ready_state() >= HAVE_FUTURE_DATA
    }

    /// Playback snapshot for events the element fired before anyone listened.
    pub fn snapshot(&self, mut playback: Playback) -> Playback {
        if self.0.error().is_some() {
            playback.apply(MediaEvent::Error);
            return playback;
        }
        if self.0.ready_state() >= HAVE_CURRENT_DATA {
            playback.apply(MediaEvent::CanPlay);
        }
        if !self.0.paused() {
            playback.apply(MediaEvent::Play);
        }
        playback.apply(MediaEvent::VolumeChange {
            muted: self.0.muted(),
        });
        playback
    }
}

impl MediaHandle for DomMedia {
    fn set_volume(&self, volume: f64) {
        self.0.set_volume(volume);
    }

    fn set_muted(&self, muted: bool) {
        self.0.set_muted(muted);
    }

    fn is_muted(&self) -> bool {
        self.0.muted()
    }

    fn play(&self) -> impl Future<Output = Result<(), MediaError>> {
        let promise = self.0.play();
        async move {
            let promise = promise.map_err(|err| MediaError::PlayRejected(describe(&err)))?;
            JsFuture::from(promise)
                .await
                .map(|_| ())
                .map_err(|err| MediaError::PlayRejected(describe(&err)))
        }
    }

    fn pause(&self) -> Result<(), MediaError> {
        self.0
            .pause()
            .map_err(|err| MediaError::PauseFailed(describe(&err)))
    }
}

/// [`Scheduler`] backed by `setTimeout`; dropping the handle clears it.
#[derive(Debug, Clone, Copy, Default)]
pub struct TimeoutScheduler;

impl Scheduler for TimeoutScheduler {
    type Handle = Timeout;

    fn schedule(&self, delay_ms: u32, task: Box<dyn FnOnce()>) -> Timeout {
        Timeout::new(delay_ms, task)
    }
}

fn describe(value: &JsValue) -> String {
    match value.dyn_ref::<js_sys::Error>() {
        Some(err) => String::from(err.message()),
        None => format!("{value:?}"),
    }
}

pub fn now_millis() -> i64 {
    js_sys::Date::now() as i64
}

/// Epoch milliseconds of a wall-clock time in the browser's time zone.
pub fn local_epoch_millis(at: NaiveDateTime) -> i64 {
    let date = js_sys::Date::new_with_year_month_day_hr_min_sec(
        at.year() as u32,
        at.month0() as i32,
        at.day() as i32,
        at.hour() as i32,
        at.minute() as i32,
        at.second() as i32,
    );
    date.get_time() as i64
}

pub fn scroll_y() -> f64 {
    web_sys::window()
        .and_then(|window| window.scroll_y().ok())
        .unwrap_or(0.0)
}
