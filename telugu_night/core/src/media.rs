use std::future::Future;
use thiserror::Error;

/// Failures reported by a media element.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MediaError {
    #[error("play request was rejected: {0}")]
    PlayRejected(String),
    #[error("pause failed: {0}")]
    PauseFailed(String),
    #[error("media element is no longer attached")]
    Detached,
}

/// Commands the autoplay policy issues to a media element.
///
/// Implementations only forward requests; the element reports what actually
/// happened through its own events.
pub trait MediaHandle {
    fn set_volume(&self, volume: f64);
    fn set_muted(&self, muted: bool);
    fn is_muted(&self) -> bool;
    fn play(&self) -> impl Future<Output = Result<(), MediaError>>;
    fn pause(&self) -> Result<(), MediaError>;
}
