//! Error types for fretlab

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FretlabError {
    #[error("Unknown scale: {0}")]
    UnknownScale(String),
    #[error("Voicing index {index} out of range (chord has {len} voicings)")]
    IndexOutOfRange { index: usize, len: usize },
    #[error("Sequence position {index} out of range (sequence has {len} chords)")]
    PositionOutOfRange { index: usize, len: usize },
    #[error("Invalid chord: {0}")]
    InvalidChord(String),
    #[error("Invalid voicing: {0}")]
    InvalidVoicing(String),
    #[error("Unknown pitch: {0}")]
    UnknownPitch(String),
    #[error("Unknown style: {0}")]
    UnknownStyle(String),
}

pub type Result<T> = std::result::Result<T, FretlabError>;
