//! Error types for the xo crate

use thiserror::Error;

/// Main error type for the xo crate
///
/// Everything except [`Error::InvalidCoordinate`] and the I/O variants is a
/// contract violation between the game, the agents and the orchestrator.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("invalid move: cell ({row}, {col}) is occupied, out of range, or the game is over")]
    InvalidMove { row: usize, col: usize },

    #[error("state '{state}' is terminal")]
    TerminalState { state: String },

    #[error("no valid moves available")]
    NoValidMoves,

    #[error("malformed episode trajectory: {reason}")]
    MalformedTrajectory { reason: String },

    #[error("agent '{agent}' returned no action for a non-terminal state")]
    NoActionReturned { agent: String },

    #[error("invalid coordinate '{input}' (expected 'row col' with values 0-2)")]
    InvalidCoordinate { input: String },

    #[error("invalid state key {key}")]
    InvalidStateKey { key: u32 },

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
