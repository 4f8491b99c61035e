//! Component module unit tests
//!
//! This test module validates the behavior of game components including:
//! - Piece codes used by setup grids
//! - HasMoved state tracking and the en passant countdown
//! - MoveKind / MoveRecord helpers
//!
//! Components are mostly plain data, so these tests check the few places
//! where they carry logic of their own.

use super::*;
use crate::game::error::GameError;
use crate::game::types::Square;

// ============================================================================
// Piece Tests
// ============================================================================

#[test]
fn test_piece_from_code_ranges() {
    //! Tests the setup code layout: 0 empty, 1-6 black, 7-12 white
    //!
    //! Both colours share the same type order (pawn, rook, knight, bishop,
    //! queen, king), offset by six.
    assert_eq!(Piece::from_code(0), Ok(None));
    assert_eq!(Piece::from_code(1), Ok(Some(Piece::black(PieceType::Pawn))));
    assert_eq!(Piece::from_code(6), Ok(Some(Piece::black(PieceType::King))));
    assert_eq!(Piece::from_code(7), Ok(Some(Piece::white(PieceType::Pawn))));
    assert_eq!(Piece::from_code(8), Ok(Some(Piece::white(PieceType::Rook))));
    assert_eq!(Piece::from_code(12), Ok(Some(Piece::white(PieceType::King))));
}

#[test]
fn test_piece_from_code_rejects_unknown() {
    //! Codes above 12 are invalid setups
    assert!(matches!(Piece::from_code(13), Err(GameError::InvalidSetup { .. })));
    assert!(matches!(Piece::from_code(255), Err(GameError::InvalidSetup { .. })));
}

#[test]
fn test_piece_code_inverts_from_code() {
    //! Every valid code decodes to a piece that encodes back to it
    for code in 1..=12 {
        let piece = Piece::from_code(code)
            .expect("valid code")
            .expect("non-empty code");
        assert_eq!(piece.code(), code);
    }
}

#[test]
fn test_piece_symbol_case() {
    //! White pieces print uppercase, black lowercase
    assert_eq!(Piece::white(PieceType::Knight).symbol(), 'N');
    assert_eq!(Piece::black(PieceType::Knight).symbol(), 'n');
    assert_eq!(Piece::white(PieceType::King).symbol(), 'K');
}

#[test]
fn test_piece_color_helpers() {
    //! Opponent flips the colour; forward is +1 for White, -1 for Black
    assert_eq!(PieceColor::White.opponent(), PieceColor::Black);
    assert_eq!(PieceColor::Black.opponent(), PieceColor::White);
    assert_eq!(PieceColor::White.forward(), 1);
    assert_eq!(PieceColor::Black.forward(), -1);
}

// ============================================================================
// HasMoved Tests
// ============================================================================

#[test]
fn test_has_moved_default() {
    //! New pieces are unmoved and not capturable en passant
    let state = HasMoved::default();
    assert!(!state.moved);
    assert_eq!(state.move_count, 0);
    assert!(!state.is_en_passant_capturable());
}

#[test]
fn test_has_moved_record_move() {
    //! Recording moves sets the flag permanently and counts
    let mut state = HasMoved::default();
    state.record_move();
    state.record_move();
    assert!(state.moved);
    assert_eq!(state.move_count, 2);
}

#[test]
fn test_en_passant_countdown_window() {
    //! The countdown is capturable only at exactly one and stops at zero
    let mut state = HasMoved {
        en_passant_countdown: HasMoved::EN_PASSANT_FRESH,
        ..HasMoved::default()
    };
    assert!(!state.is_en_passant_capturable(), "Not capturable before the first tick");

    state.tick_en_passant();
    assert!(state.is_en_passant_capturable());

    state.tick_en_passant();
    assert!(!state.is_en_passant_capturable());

    state.tick_en_passant();
    assert_eq!(state.en_passant_countdown, 0, "Countdown saturates at zero");
}

// ============================================================================
// Move Tests
// ============================================================================

#[test]
fn test_move_kind_is_capture() {
    //! Captures and en passant remove a piece by definition
    assert!(MoveKind::Capture.is_capture());
    assert!(MoveKind::EnPassant.is_capture());
    assert!(!MoveKind::Quiet.is_capture());
    assert!(!MoveKind::Castle.is_capture());
}

#[test]
fn test_move_record_special_moves() {
    //! MoveRecord helpers report castling and en passant
    let record = MoveRecord {
        piece: Piece::white(PieceType::King),
        from: Square::new(0, 4),
        to: Square::new(0, 6),
        kind: MoveKind::Castle,
        captured: None,
        rook_move: Some((Square::new(0, 7), Square::new(0, 5))),
        is_check: false,
        is_checkmate: false,
    };
    assert!(record.is_castling());
    assert!(!record.is_en_passant());
}

#[test]
fn test_game_phase_default() {
    //! Tests that GamePhase defaults to Playing
    assert_eq!(GamePhase::default(), GamePhase::Playing);
}
