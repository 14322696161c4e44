//! Error types for fight data.
//!
//! Only the non real-time paths return errors: loading and saving the move
//! library, editing a draft move and parsing names coming from data files.
//! The per-tick systems and observers never propagate failures; they log and
//! carry on.

use thiserror::Error;

/// The error type for move, library and configuration operations.
#[derive(Debug, Error)]
pub enum FightError {
    #[error("Move not equipped: {0}")]
    InvalidMoveReference(String),

    #[error("Move is full: {name} already holds {capacity} key poses")]
    CapacityExceeded { name: String, capacity: usize },

    #[error("Duplicate move name: {0}")]
    DuplicateMoveName(String),

    #[error("Move name must not be empty")]
    EmptyMoveName,

    #[error("Unknown body part: {0}")]
    UnknownBodyPart(String),

    #[error("Corrupt move record {name}: {reason}")]
    CorruptMove { name: String, reason: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Format(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(String),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, FightError>;
