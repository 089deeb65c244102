//! Error types for the player

use thiserror::Error;

/// Recoverable player failures. None of these end the session; they are
/// logged and the UI stays interactive.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PlayerError {
    /// The bundled song directory could not be enumerated
    #[error("could not enumerate songs: {0}")]
    LibraryScan(String),

    /// The media element refused to start playback
    #[error("playback failed: {0}")]
    PlaybackRejected(String),

    /// Web Audio is not available, the visualizer stays idle
    #[error("audio graph unavailable: {0}")]
    GraphUnavailable(String),

    /// Settings could not be read or written
    #[error("settings storage error: {0}")]
    Storage(String),
}

/// Result type for player operations
pub type Result<T> = std::result::Result<T, PlayerError>;
