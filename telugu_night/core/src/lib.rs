//! Core state and policy for the Telugu Night landing page.
//!
//! Everything in here is independent of the DOM: the web crate feeds element
//! events and clock readings in, and renders whatever state comes out.
pub mod autoplay;
pub mod countdown;
pub mod image;
pub mod media;
pub mod playback;
pub mod scroll;
pub mod settings;

pub use autoplay::{
    AutoplayController, AutoplayOutcome, InteractionGate, PairToggle, Scheduler, toggle_pair,
};
pub use countdown::{Countdown, TimeLeft};
pub use image::ImageLoad;
pub use media::{MediaError, MediaHandle};
pub use playback::{MediaEvent, Playback, PlaybackState};
pub use scroll::BlurCurve;
pub use settings::{AudioSettings, AutoplayTrigger, LandingSettings, SettingsError};
