//! Game over state tracking and result management
//!
//! The game ends when the side to move is checkmated, or when a king has been
//! captured outright (non-king pieces may ignore check, so this can happen).
//!
//! # State Transitions
//!
//! ```text
//! Playing → WhiteWon / BlackWon
//! ```
//!
//! Every non-Playing state is terminal: the controller refuses further input.

use serde::{Deserialize, Serialize};

use crate::game::components::PieceColor;

#[derive(Default, Debug, PartialEq, Eq, Clone, Copy, Serialize, Deserialize)]
pub enum GameOverState {
    /// Game is still in progress
    #[default]
    Playing,

    /// White won by checkmate or by taking Black's king
    WhiteWon,

    /// Black won by checkmate or by taking White's king
    BlackWon,
}

impl GameOverState {
    /// Terminal state in which `winner` has won
    pub fn won_by(winner: PieceColor) -> Self {
        match winner {
            PieceColor::White => GameOverState::WhiteWon,
            PieceColor::Black => GameOverState::BlackWon,
        }
    }

    /// Returns `true` for any non-Playing state, meaning input should be refused
    pub fn is_game_over(&self) -> bool {
        !matches!(self, GameOverState::Playing)
    }

    /// Human-readable description of the result
    pub fn message(&self) -> &str {
        match self {
            GameOverState::Playing => "Game in progress",
            GameOverState::WhiteWon => "White wins!",
            GameOverState::BlackWon => "Black wins!",
        }
    }

    pub fn winner(&self) -> Option<PieceColor> {
        match self {
            GameOverState::WhiteWon => Some(PieceColor::White),
            GameOverState::BlackWon => Some(PieceColor::Black),
            GameOverState::Playing => None,
        }
    }
}
