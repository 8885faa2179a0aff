use thiserror::Error;

use crate::host::Sound;

/// Playback failures. None of these are fatal; the game logs them and
/// carries on.
#[derive(Debug, Error)]
pub enum AudioError {
    #[error("sound {0:?} is not supported by this output")]
    Unsupported(Sound),
    #[error("playback blocked: {0}")]
    Blocked(String),
    #[error("audio output failed: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("{var} must be a positive integer, got {value:?}")]
    InvalidNumber { var: &'static str, value: String },
    #[error("playfield {width}x{height} is smaller than the largest sprite ({min}px)")]
    PlayfieldTooSmall { width: f32, height: f32, min: f32 },
}
