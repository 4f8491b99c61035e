//! Error types for game module
//!
//! Provides custom error types for the rule engine: setup validation,
//! selection and move application failures, and broken board invariants.
//!
//! Off-board squares are not an error here. Square arithmetic returns `None`
//! and every scan treats that as a stop condition.

use crate::game::components::PieceColor;
use crate::game::types::Square;

/// Errors that can occur in game logic
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    /// Selecting an empty square, an opponent's piece, or out of turn
    #[error("Illegal selection at {square}: {message}")]
    IllegalSelection { square: Square, message: String },

    /// A selection is already active; deselect or pick a destination first
    #[error("A piece is already selected at {selected}")]
    SelectionActive { selected: Square },

    /// Destination is not one of the highlighted targets
    #[error("Illegal destination {to} for piece at {from}")]
    IllegalDestination { from: Square, to: Square },

    /// Apply was requested without a selected piece
    #[error("No piece selected")]
    NoSelection,

    /// Input arrived after the game ended
    #[error("Game is over: {message}")]
    GameOver { message: String },

    /// Piece not found at expected position
    #[error("Piece not found at {square}")]
    PieceNotFound { square: Square },

    /// Malformed initial setup grid
    #[error("Invalid setup: {message}")]
    InvalidSetup { message: String },

    /// The board violates an engine invariant (e.g. a side without a king)
    #[error("Board invariant violated: {message}")]
    InvariantViolation { message: String },
}

impl GameError {
    pub(crate) fn missing_king(color: PieceColor) -> Self {
        GameError::InvariantViolation {
            message: format!("{color:?} has no king on the board"),
        }
    }
}

/// Result type alias for game operations
pub type GameResult<T> = Result<T, GameError>;
