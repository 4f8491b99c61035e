//! Turn tracking resource
//!
//! Manages the current player's turn and move counter. The controller is the
//! only writer; it switches turns after every successfully applied move.
//!
//! # Turn Flow
//!
//! ```text
//! Move 1: White plays → switch() → Black plays → switch() → Move 2: White plays
//! ```

use serde::{Deserialize, Serialize};

use crate::game::components::{GamePhase, PieceColor};

/// Tracks whose turn it currently is and the current move number
///
/// Move numbers follow chess notation: a move is White's turn plus Black's
/// reply, so the number increments only after Black completes their turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrentTurn {
    pub color: PieceColor,
    pub move_number: u32,
}

impl Default for CurrentTurn {
    fn default() -> Self {
        Self {
            color: PieceColor::White,
            move_number: 1,
        }
    }
}

impl CurrentTurn {
    /// Switch to the other player's turn
    ///
    /// # Example
    ///
    /// ```
    /// use tilechess::game::components::PieceColor;
    /// use tilechess::game::resources::CurrentTurn;
    ///
    /// let mut turn = CurrentTurn::default();
    /// turn.switch(); // Now Black's turn, still move 1
    /// assert_eq!(turn.color, PieceColor::Black);
    /// assert_eq!(turn.move_number, 1);
    ///
    /// turn.switch(); // Now White's turn, move 2
    /// assert_eq!(turn.color, PieceColor::White);
    /// assert_eq!(turn.move_number, 2);
    /// ```
    pub fn switch(&mut self) {
        self.color = match self.color {
            PieceColor::White => PieceColor::Black,
            PieceColor::Black => {
                self.move_number += 1;
                PieceColor::White
            }
        };
    }
}

/// Phase of the side to move (Playing, Check, Checkmate)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CurrentGamePhase(pub GamePhase);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_current_turn_default() {
        //! Verifies that games start with White to move on move 1
        let turn = CurrentTurn::default();
        assert_eq!(turn.color, PieceColor::White);
        assert_eq!(turn.move_number, 1);
    }

    #[test]
    fn test_turn_switch_black_to_white() {
        //! Tests switching from Black to White increments the move number
        let mut turn = CurrentTurn {
            color: PieceColor::Black,
            move_number: 1,
        };
        turn.switch();

        assert_eq!(turn.color, PieceColor::White);
        assert_eq!(turn.move_number, 2, "Move number should increment when Black completes their turn");
    }

    #[test]
    fn test_current_game_phase_default() {
        //! Verifies game phase defaults to Playing
        let phase = CurrentGamePhase::default();
        assert_eq!(phase.0, GamePhase::Playing);
    }
}
