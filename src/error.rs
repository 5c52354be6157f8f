//! Error handling for the route-card pipeline.
//!
//! Incomplete records are skipped rather than reported, so the error type
//! only covers failures that halt a run: the store, polyline decoding,
//! malformed duration strings, and output I/O.

/// Errors surfaced while reading the store or rendering cards.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// SQLite open or query failure.
    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),

    /// The stored summary polyline could not be decoded.
    #[error("invalid polyline: {0}")]
    Decode(String),

    /// A stored moving_time string did not parse as `H:MM:SS`.
    #[error("malformed moving time {value:?}: {reason}")]
    MovingTime { value: String, reason: String },

    /// Output file could not be written.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
