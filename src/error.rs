//! Error types for the depth chart

use thiserror::Error;

/// Main error type for depth chart operations
#[derive(Error, Debug)]
pub enum ChartError {
    /// Position identifier did not resolve against the position catalog
    #[error("Position not found: {0}")]
    PositionNotFound(String),

    /// Player name did not resolve against the player catalog
    #[error("Player not found: {0}")]
    PlayerNotFound(String),

    /// No chart entry exists for the player at the position
    #[error("No depth chart entry for {player} at {position}")]
    EntryNotFound { position: String, player: String },

    /// Rank text is not an integer
    #[error("Invalid rank: {0}")]
    InvalidRank(String),

    /// Command line could not be parsed
    #[error("Invalid command: {0}")]
    InvalidCommand(String),

    /// Roster file is well-formed JSON but unusable
    #[error("Invalid roster: {0}")]
    InvalidRoster(String),

    /// File I/O error
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// JSON (de)serialization error
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

impl ChartError {
    /// True for the three lookup failures raised by the chart itself
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            ChartError::PositionNotFound(_)
                | ChartError::PlayerNotFound(_)
                | ChartError::EntryNotFound { .. }
        )
    }
}

/// Result type alias for depth chart operations
pub type ChartResult<T> = Result<T, ChartError>;
