//! Error types for the noughts crate

use thiserror::Error;

/// Main error type for the noughts crate
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("invalid move: cell ({row}, {col}) is not a free cell")]
    InvalidMove { row: usize, col: usize },

    #[error("move ({row}, {col}) is out of bounds for a {rows}x{cols} board")]
    MoveOutOfBounds {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },

    #[error("game already over")]
    GameOver,

    #[error("episode is still in progress")]
    EpisodeNotFinished,

    #[error("rewards were already distributed for this episode")]
    RewardsAlreadyDistributed,

    #[error("no valid moves available")]
    NoValidMoves,

    #[error("malformed input '{input}': {reason}")]
    MalformedInput { input: String, reason: String },

    #[error("input stream closed while waiting for a move")]
    InputClosed,

    #[error("invalid state key '{key}': {reason}")]
    InvalidStateKey { key: String, reason: String },

    #[error("invalid board dimensions {rows}x{cols} (both must be at least 1, at most 4096 cells)")]
    InvalidDimensions { rows: usize, cols: usize },

    #[error("invalid configuration: {message}")]
    InvalidConfiguration { message: String },

    #[error("failed to {operation}: {source}")]
    Io {
        operation: String,
        #[source]
        source: std::io::Error,
    },

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("failed to {operation}: {message}")]
    SerializationContext { operation: String, message: String },

    #[error("unsupported policy file format for '{path}' (expected .json, .msgpack or .mpk)")]
    UnsupportedFormat { path: String },

    #[error("progress bar template error: {message}")]
    ProgressBarTemplate { message: String },
}

/// Convenience type alias for Results using the crate's Error type
pub type Result<T> = std::result::Result<T, Error>;

impl From<std::io::Error> for Error {
    fn from(source: std::io::Error) -> Self {
        Error::Io {
            operation: "IO operation".to_string(),
            source,
        }
    }
}

impl Error {
    /// Whether this error signals a broken player implementation.
    pub fn is_invalid_move(&self) -> bool {
        matches!(
            self,
            Error::InvalidMove { .. } | Error::MoveOutOfBounds { .. }
        )
    }
}
