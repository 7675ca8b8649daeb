//! Playback state for a single media element.
//!
//! State only moves in response to events the element actually fired. Play,
//! pause and mute commands go to the element and come back here as events.

/// Lifecycle of one media element.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PlaybackState {
    #[default]
    Idle,
    Loading,
    Playing,
    Paused,
    Errored,
}

/// Element events the state machine listens to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaEvent {
    LoadStart,
    /// `canplay` or `loadeddata`.
    CanPlay,
    Play,
    Pause,
    Ended,
    Error,
    /// `volumechange`, carrying the element's muted flag at that moment.
    VolumeChange { muted: bool },
}

impl MediaEvent {
    /// Maps a DOM event type to a media event. `volumechange` needs the
    /// element's muted flag, so callers build that variant themselves.
    pub fn from_dom_type(event_type: &str) -> Option<Self> {
        match event_type {
            "loadstart" => Some(MediaEvent::LoadStart),
            "canplay" | "loadeddata" => Some(MediaEvent::CanPlay),
            "play" => Some(MediaEvent::Play),
            "pause" => Some(MediaEvent::Pause),
            "ended" => Some(MediaEvent::Ended),
            "error" => Some(MediaEvent::Error),
            _ => None,
        }
    }
}

/// Event-sourced snapshot of a media element.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Playback {
    pub state: PlaybackState,
    pub muted: bool,
    pub loaded: bool,
}

impl Playback {
    /// Snapshot for an element that starts out muted, like the hero video.
    pub fn muted() -> Self {
        Playback {
            muted: true,
            ..Playback::default()
        }
    }

    /// Applies an element event. Returns whether anything changed.
    pub fn apply(&mut self, event: MediaEvent) -> bool {
        let before = *self;

        match event {
            MediaEvent::LoadStart => {
                if matches!(self.state, PlaybackState::Idle | PlaybackState::Errored) {
                    self.state = PlaybackState::Loading;
                }
            }
            MediaEvent::CanPlay => {
                self.loaded = true;
                if matches!(
                    self.state,
                    PlaybackState::Idle | PlaybackState::Loading | PlaybackState::Errored
                ) {
                    self.state = PlaybackState::Paused;
                }
            }
            MediaEvent::Play => self.state = PlaybackState::Playing,
            MediaEvent::Pause | MediaEvent::Ended => {
                if !matches!(self.state, PlaybackState::Idle | PlaybackState::Errored) {
                    self.state = PlaybackState::Paused;
                }
            }
            MediaEvent::Error => {
                self.state = PlaybackState::Errored;
                self.loaded = false;
            }
            MediaEvent::VolumeChange { muted } => self.muted = muted,
        }

        *self != before
    }

    pub fn is_playing(&self) -> bool {
        self.state == PlaybackState::Playing
    }

    pub fn is_errored(&self) -> bool {
        self.state == PlaybackState::Errored
    }

    pub fn is_loaded(&self) -> bool {
        self.loaded
    }
}
