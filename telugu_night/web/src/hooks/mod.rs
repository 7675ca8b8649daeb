mod countdown;
mod media_session;
mod scoped;
mod scroll;

pub use countdown::use_countdown;
pub use media_session::{use_media_session, MediaSession};
pub use scoped::use_scoped;
pub use scroll::use_scroll_blur;

use dioxus::prelude::*;
use telugu_night_core::LandingSettings;

/// Page settings provided at launch.
pub fn use_settings() -> LandingSettings {
    use_context::<LandingSettings>()
}
