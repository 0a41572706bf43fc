//! Error types for the engine's outer layers.
//!
//! Evaluation and search never fail; these errors come from parsing user
//! input (FEN, moves), looking up sessions, and loading configuration.

use thiserror::Error;

/// Errors that can occur outside the search core
#[derive(Error, Debug)]
pub enum Error {
    /// FEN string rejected by the rules engine
    #[error("Invalid FEN: {fen}")]
    InvalidFen { fen: String },

    /// Move string that is not legal in the current position
    #[error("Illegal move: {mv}")]
    IllegalMove { mv: String },

    /// No game registered under this session id
    #[error("Unknown session: {id}")]
    UnknownSession { id: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid config: {0}")]
    Config(#[from] toml::de::Error),
}

/// Result type alias for engine operations
pub type Result<T> = std::result::Result<T, Error>;
