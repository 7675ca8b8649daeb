//! Page configuration.
//!
//! The web crate embeds a TOML file at build time and parses it here, so the
//! same rules are exercised by native tests.
use crate::scroll::BlurCurve;
use chrono::NaiveDateTime;
use serde::Deserialize;
use thiserror::Error;

const DEFAULT_AUDIO_URL: &str =
    "https://hebbkx1anhila5yf.public.blob.vercel-storage.com/ene-fMXduK1wvhZtAy9z0Jnivz9GQSvKpN.mp3";
const DEFAULT_VIDEO_URL: &str = "https://hebbkx1anhila5yf.public.blob.vercel-storage.com/ene%20%281%29-8pE5Sy5CmTmieOXwVxIer1prre9eF7.mp4";
const DEFAULT_SUGGESTIONS_URL: &str = "https://docs.google.com/forms/d/e/1FAIpQLSeXkOqRQiqViyCEmW7NNksrl94633z9bfmtRnlhp0vL3vks-w/viewform";

#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("failed to read settings: {0}")]
    Config(#[from] config::ConfigError),
    #[error("invalid setting `{field}`: {reason}")]
    Invalid { field: &'static str, reason: String },
}

/// When the first autoplay attempt happens.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AutoplayTrigger {
    /// As soon as the element is mounted.
    OnMount,
    /// Once the element reports it can play.
    #[default]
    OnCanPlay,
}

/// Background audio options.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AudioSettings {
    pub url: String,
    #[serde(default = "default_volume")]
    pub volume: f64,
    #[serde(default = "default_true")]
    pub autoplay: bool,
    #[serde(default)]
    pub trigger: AutoplayTrigger,
    #[serde(default = "default_unmute_delay_ms")]
    pub unmute_delay_ms: u32,
}

impl AudioSettings {
    pub fn new(url: impl Into<String>) -> Self {
        AudioSettings {
            url: url.into(),
            volume: default_volume(),
            autoplay: true,
            trigger: AutoplayTrigger::default(),
            unmute_delay_ms: default_unmute_delay_ms(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct EventSettings {
    pub title: String,
    pub tagline: String,
    /// Local wall-clock start of the event.
    pub starts_at: NaiveDateTime,
    pub date_label: String,
    pub time_label: String,
    pub venue: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct VideoSettings {
    pub url: String,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct BackgroundSettings {
    #[serde(default)]
    pub image_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ScrollSettings {
    #[serde(default = "default_max_blur_px")]
    pub max_blur_px: f64,
    #[serde(default = "default_saturation_px")]
    pub saturation_px: f64,
    #[serde(default = "default_indicator_threshold_px")]
    pub indicator_threshold_px: f64,
}

impl Default for ScrollSettings {
    fn default() -> Self {
        ScrollSettings {
            max_blur_px: default_max_blur_px(),
            saturation_px: default_saturation_px(),
            indicator_threshold_px: default_indicator_threshold_px(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LinkSettings {
    pub suggestions_url: String,
}

/// Everything the landing page needs to render.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LandingSettings {
    #[serde(default = "default_log_level")]
    pub log_level: String,
    pub event: EventSettings,
    pub audio: AudioSettings,
    pub video: VideoSettings,
    #[serde(default)]
    pub background: BackgroundSettings,
    #[serde(default)]
    pub scroll: ScrollSettings,
    pub links: LinkSettings,
}

impl LandingSettings {
    /// Parse and validate settings from a TOML document.
    pub fn from_toml(source: &str) -> Result<Self, SettingsError> {
        let settings = config::Config::builder()
            .add_source(config::File::from_str(source, config::FileFormat::Toml))
            .build()?;

        let parsed: LandingSettings = settings.try_deserialize()?;
        parsed.validate()?;
        Ok(parsed)
    }

    fn validate(&self) -> Result<(), SettingsError> {
        if !(0.0..=1.0).contains(&self.audio.volume) {
            return Err(SettingsError::Invalid {
                field: "audio.volume",
                reason: format!("{} is outside 0.0..=1.0", self.audio.volume),
            });
        }
        if self.audio.url.trim().is_empty() {
            return Err(SettingsError::Invalid {
                field: "audio.url",
                reason: "must not be empty".to_string(),
            });
        }
        if self.scroll.saturation_px <= 0.0 {
            return Err(SettingsError::Invalid {
                field: "scroll.saturation_px",
                reason: "must be positive".to_string(),
            });
        }
        if self.scroll.max_blur_px < 0.0 {
            return Err(SettingsError::Invalid {
                field: "scroll.max_blur_px",
                reason: "must not be negative".to_string(),
            });
        }
        Ok(())
    }

    pub fn blur_curve(&self) -> BlurCurve {
        BlurCurve {
            max_blur_px: self.scroll.max_blur_px,
            saturation_px: self.scroll.saturation_px,
        }
    }

    /// Configured log level, falling back to `INFO` for unknown names.
    pub fn log_level(&self) -> tracing::Level {
        self.log_level.parse().unwrap_or(tracing::Level::INFO)
    }
}

impl Default for LandingSettings {
    fn default() -> Self {
        LandingSettings {
            log_level: default_log_level(),
            event: EventSettings {
                title: "తెలుగు NIGHT".to_string(),
                tagline: "August 3rd • DTR, Manipal".to_string(),
                starts_at: NaiveDateTime::parse_from_str("2025-08-03T19:00:00", "%Y-%m-%dT%H:%M:%S")
                    .unwrap_or_default(),
                date_label: "3rd August 2025".to_string(),
                time_label: "7:00 PM - 11:00 PM".to_string(),
                venue: "DTR, Manipal".to_string(),
            },
            audio: AudioSettings {
                volume: 0.8,
                trigger: AutoplayTrigger::OnMount,
                ..AudioSettings::new(DEFAULT_AUDIO_URL)
            },
            video: VideoSettings {
                url: DEFAULT_VIDEO_URL.to_string(),
            },
            background: BackgroundSettings::default(),
            scroll: ScrollSettings::default(),
            links: LinkSettings {
                suggestions_url: DEFAULT_SUGGESTIONS_URL.to_string(),
            },
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_volume() -> f64 {
    0.7
}

fn default_true() -> bool {
    true
}

fn default_unmute_delay_ms() -> u32 {
    1_000
}

fn default_max_blur_px() -> f64 {
    8.0
}

fn default_saturation_px() -> f64 {
    500.0
}

fn default_indicator_threshold_px() -> f64 {
    50.0
}
