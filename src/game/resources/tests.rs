//! Resource module unit tests
//!
//! This test module validates the behavior of the controller-owned resources:
//! - Turn tracking and move number incrementing
//! - Selection lifecycle
//! - Game over states
//! - Move history management

use super::*;
use crate::game::components::{MoveKind, MoveRecord, Piece, PieceColor, PieceType, PossibleMove};
use crate::game::types::Square;

fn record(from: (u8, u8), to: (u8, u8)) -> MoveRecord {
    MoveRecord {
        piece: Piece::white(PieceType::Pawn),
        from: from.into(),
        to: to.into(),
        kind: MoveKind::Quiet,
        captured: None,
        rook_move: None,
        is_check: false,
        is_checkmate: false,
    }
}

// ============================================================================
// CurrentTurn Tests
// ============================================================================

#[test]
fn test_turn_switch_white_to_black() {
    //! Tests switching from white's turn to black's turn
    //!
    //! A "move" is both sides' turns, so the number only increments when
    //! Black completes their turn.
    let mut turn = CurrentTurn::default();
    turn.switch();

    assert_eq!(turn.color, PieceColor::Black, "Should switch to black");
    assert_eq!(turn.move_number, 1, "Move number should not increment when white moves");
}

#[test]
fn test_turn_full_cycles() {
    //! Ten switches bring White back on move 6
    let mut turn = CurrentTurn::default();
    for _ in 0..10 {
        turn.switch();
    }
    assert_eq!(turn.color, PieceColor::White);
    assert_eq!(turn.move_number, 6);
}

// ============================================================================
// Selection Tests
// ============================================================================

#[test]
fn test_selection_select_and_clear() {
    //! Selecting stores the square and targets; clearing drops both
    let mut selection = Selection::default();
    assert!(!selection.is_selected());

    let target = PossibleMove::new(Square::new(3, 4), MoveKind::Quiet);
    selection.select(Square::new(1, 4), vec![target]);
    assert!(selection.is_selected());
    assert_eq!(selection.target(Square::new(3, 4)), Some(target));
    assert_eq!(selection.target(Square::new(2, 5)), None);

    selection.clear();
    assert!(!selection.is_selected());
    assert!(selection.possible_moves.is_empty());
}

// ============================================================================
// GameOverState Tests
// ============================================================================

#[test]
fn test_game_over_states() {
    //! Playing is the only non-terminal state
    assert!(!GameOverState::default().is_game_over());
    assert_eq!(GameOverState::default().winner(), None);

    let white = GameOverState::won_by(PieceColor::White);
    assert_eq!(white, GameOverState::WhiteWon);
    assert!(white.is_game_over());
    assert_eq!(white.winner(), Some(PieceColor::White));
    assert_eq!(white.message(), "White wins!");

    let black = GameOverState::won_by(PieceColor::Black);
    assert_eq!(black.winner(), Some(PieceColor::Black));
    assert_eq!(black.message(), "Black wins!");
}

// ============================================================================
// MoveHistory Tests
// ============================================================================

#[test]
fn test_move_history_order() {
    //! Moves are kept in the order they were played
    let mut history = MoveHistory::default();
    assert!(history.is_empty());
    assert!(history.last_move().is_none());

    history.add_move(record((1, 4), (3, 4)));
    history.add_move(record((6, 4), (4, 4)));

    assert_eq!(history.len(), 2);
    assert_eq!(history.get_move(0).map(|m| m.to), Some(Square::new(3, 4)));
    assert_eq!(history.last_move().map(|m| m.from), Some(Square::new(6, 4)));
    assert_eq!(history.iter().count(), 2);
    assert!(history.get_move(2).is_none());
}
