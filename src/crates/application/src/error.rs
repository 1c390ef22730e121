use domain::listener::ListenerError;
use domain::playback::PlaybackError;
use domain::track::TrackError;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Listener error: {0}")]
    ListenerError(#[from] ListenerError),
    #[error("Track error: {0}")]
    TrackError(#[from] TrackError),
    #[error("Playback error: {0}")]
    PlaybackError(#[from] PlaybackError),
    #[error("Aggregate not found: {0}: {1}")]
    AggregateNotFound(String, String),
    #[error("Unknown error: {0}")]
    UnknownError(String),
}
