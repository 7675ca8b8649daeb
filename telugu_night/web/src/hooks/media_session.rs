//! One audio element, optionally paired with the hero video, under the
//! autoplay policy from the core crate.
use crate::dom::{DomMedia, TimeoutScheduler};
use dioxus::prelude::*;
use gloo_events::EventListener;
use std::rc::Rc;
use telugu_night_core::{
    toggle_pair, AudioSettings, AutoplayController, AutoplayTrigger, MediaEvent, MediaHandle,
    Playback,
};
use tracing::{debug, error, info_span, warn};
use tracing_futures::Instrument;
use wasm_bindgen_futures::spawn_local;

type Controller = AutoplayController<DomMedia, TimeoutScheduler>;

const ELEMENT_EVENTS: [&str; 8] = [
    "loadstart",
    "canplay",
    "loadeddata",
    "play",
    "pause",
    "ended",
    "error",
    "volumechange",
];
const GESTURE_EVENTS: [&str; 3] = ["click", "touchstart", "keydown"];

/// Handle to the page's media. Playback state only changes when an element
/// fires an event; the methods here only issue requests.
#[derive(Clone, Copy, PartialEq)]
pub struct MediaSession {
    settings: Signal<AudioSettings>,
    audio: Signal<Playback>,
    video: Signal<Playback>,
    audio_el: Signal<Option<DomMedia>>,
    video_el: Signal<Option<DomMedia>>,
    controller: Signal<Option<Rc<Controller>>>,
    listeners: Signal<Vec<EventListener>>,
    gestures: Signal<Vec<EventListener>>,
}

pub fn use_media_session(settings: AudioSettings) -> MediaSession {
    let session = MediaSession {
        settings: use_signal(move || settings),
        audio: use_signal(Playback::default),
        video: use_signal(Playback::muted),
        audio_el: use_signal(|| None),
        video_el: use_signal(|| None),
        controller: use_signal(|| None),
        listeners: use_signal(Vec::new),
        gestures: use_signal(Vec::new),
    };
    use_drop(move || session.teardown());
    session
}

impl MediaSession {
    pub fn source_url(&self) -> String {
        self.settings.read().url.clone()
    }

    pub fn audio(&self) -> Playback {
        (self.audio)()
    }

    /// Audio and video count as one playing unit.
    pub fn is_playing(&self) -> bool {
        self.audio.read().is_playing() || self.video.read().is_playing()
    }

    /// Binds the mounted `<audio>` element and kicks off autoplay.
    pub fn attach_audio(mut self, data: &MountedData) {
        let Some(media) = DomMedia::from_mounted(data) else {
            warn!("mounted audio node is not a media element");
            return;
        };
        let settings = self.settings.peek().clone();

        media.element().set_loop(true);
        let initial = media.snapshot(*self.audio.peek());
        self.audio.set(initial);
        let mut listeners = watch(&media, self.audio);

        let controller = Rc::new(Controller::new(
            media.clone(),
            TimeoutScheduler,
            settings.volume,
            settings.unmute_delay_ms,
        ));

        if settings.autoplay {
            let gestures = self.gesture_listeners(controller.clone());
            self.gestures.set(gestures);
            match settings.trigger {
                AutoplayTrigger::OnCanPlay if !media.can_play() => {
                    let controller = controller.clone();
                    listeners.push(EventListener::once(media.element(), "canplay", move |_| {
                        run_autoplay(controller);
                    }));
                }
                AutoplayTrigger::OnMount | AutoplayTrigger::OnCanPlay => {
                    run_autoplay(controller.clone());
                }
            }
        } else {
            media.set_volume(settings.volume);
        }

        self.listeners.write().extend(listeners);
        self.audio_el.set(Some(media));
        self.controller.set(Some(controller));
    }

    /// Binds the mounted hero `<video>` so it follows the play/pause toggle.
    pub fn attach_video(mut self, data: &MountedData) {
        let Some(media) = DomMedia::from_mounted(data) else {
            warn!("mounted video node is not a media element");
            return;
        };

        let initial = media.snapshot(*self.video.peek());
        self.video.set(initial);
        let listeners = watch(&media, self.video);
        self.listeners.write().extend(listeners);
        self.video_el.set(Some(media));
    }

    /// Pauses both elements if either plays, otherwise asks both to play.
    pub fn toggle_play(self) {
        let Some(audio) = self.audio_el.peek().clone() else {
            return;
        };
        let video = self.video_el.peek().clone();
        let audio_playing = self.audio.peek().is_playing();
        let video_playing = self.video.peek().is_playing();

        spawn(async move {
            match toggle_pair(&audio, video.as_ref(), audio_playing, video_playing).await {
                Ok(toggle) => debug!(?toggle, "playback toggled"),
                Err(err) => error!(%err, "playback toggle failed"),
            }
        });
    }

    /// Mutes or unmutes the audio without pausing it.
    pub fn toggle_mute(self) {
        if let Some(controller) = self.controller.peek().as_ref() {
            let muted = controller.toggle_mute();
            debug!(muted, "mute toggled");
        }
    }

    fn gesture_listeners(self, controller: Rc<Controller>) -> Vec<EventListener> {
        let Some(document) = web_sys::window().and_then(|window| window.document()) else {
            return Vec::new();
        };

        GESTURE_EVENTS
            .into_iter()
            .map(|event_type| {
                let controller = controller.clone();
                EventListener::once(&document, event_type, move |_| {
                    self.on_first_gesture(controller);
                })
            })
            .collect()
    }

    fn on_first_gesture(mut self, controller: Rc<Controller>) {
        if !controller.gate().is_open() {
            return;
        }
        // The listener that got us here is still on the stack, so the set is
        // dropped from the task rather than inline.
        let gestures = std::mem::take(&mut *self.gestures.write());
        let is_playing = self.audio.peek().is_playing();

        spawn_local(
            async move {
                let outcome = controller.on_interaction(is_playing).await;
                debug!(?outcome, "first interaction handled");
                drop(gestures);
            }
            .instrument(info_span!("interaction_retry")),
        );
    }

    fn teardown(mut self) {
        if let Some(controller) = self.controller.write().take() {
            controller.teardown();
        }
        self.gestures.write().clear();
        self.listeners.write().clear();
    }
}

fn run_autoplay(controller: Rc<Controller>) {
    spawn_local(
        async move {
            let outcome = controller.start().await;
            debug!(?outcome, "autoplay finished");
        }
        .instrument(info_span!("autoplay")),
    );
}

/// Mirrors element events into `state`.
fn watch(media: &DomMedia, mut state: Signal<Playback>) -> Vec<EventListener> {
    ELEMENT_EVENTS
        .into_iter()
        .map(|event_type| {
            let element = media.element().clone();
            EventListener::new(media.element(), event_type, move |event| {
                let media_event = match event.type_().as_str() {
                    "volumechange" => Some(MediaEvent::VolumeChange {
                        muted: element.muted(),
                    }),
                    other => MediaEvent::from_dom_type(other),
                };
                let Some(media_event) = media_event else {
                    return;
                };
                if media_event == MediaEvent::Error {
                    let code = element.error().map(|err| err.code());
                    warn!(?code, src = %element.current_src(), "media element failed to load");
                }

                let mut next = *state.peek();
                if next.apply(media_event) {
                    state.set(next);
                }
            })
        })
        .collect()
}
