mod animated_section;
mod audio_player;
mod countdown_panel;
mod detail_card;
mod feature_card;
mod footer;
mod hero_video;
mod media_background;
mod scroll_indicator;
mod suggestion_link;

pub use animated_section::{AnimatedSection, Animation};
pub use audio_player::AudioPlayer;
pub use countdown_panel::CountdownPanel;
pub use detail_card::DetailCard;
pub use feature_card::FeatureCard;
pub use footer::Footer;
pub use hero_video::HeroVideo;
pub use media_background::MediaBackground;
pub use scroll_indicator::ScrollIndicator;
pub use suggestion_link::SuggestionLink;
