//! Setup Integration Tests
//!
//! Tests for initial placement:
//! - The standard layout
//! - JSON loading
//! - Validation of malformed grids and king counts

use std::fs;

use tilechess::game::components::{Piece, PieceColor, PieceType};
use tilechess::game::types::BoardSize;
use tilechess::game::{ChessGame, GameError, InitialSetup, Square};

fn minimal_setup() -> InitialSetup {
    InitialSetup::empty(8, 8)
        .with_piece(Square::new(0, 4), Piece::white(PieceType::King))
        .with_piece(Square::new(7, 4), Piece::black(PieceType::King))
}

// ============================================================================
// Standard Layout Tests
// ============================================================================

#[test]
fn test_standard_layout() {
    //! The standard setup places 16 pieces per side on an 8×8 board
    let board = InitialSetup::standard().build().expect("standard setup is valid");

    assert_eq!(board.size(), BoardSize::STANDARD);
    assert_eq!(board.pieces().count(), 32);
    assert_eq!(board.get_pieces_by_color(PieceColor::White).count(), 16);
    assert_eq!(board.find_king(PieceColor::White), Some(Square::new(0, 4)));
    assert_eq!(board.find_king(PieceColor::Black), Some(Square::new(7, 4)));
    assert_eq!(board.get_piece_at(Square::new(0, 3)), Some(Piece::white(PieceType::Queen)));
    assert_eq!(board.get_piece_at(Square::new(7, 0)), Some(Piece::black(PieceType::Rook)));
    assert_eq!(board.count_pieces(Piece::black(PieceType::Pawn)), 8);
    assert!(board.pieces().all(|(_, slot)| !slot.state.moved));
}

#[test]
fn test_standard_text_board() {
    //! The text rendering of the start position reads like a diagram
    let board = InitialSetup::standard().build().expect("standard setup is valid");
    let text = board.to_string();
    let lines: Vec<&str> = text.lines().collect();

    assert_eq!(lines.len(), 8);
    assert_eq!(lines[0], "rnbqkbnr");
    assert_eq!(lines[1], "pppppppp");
    assert_eq!(lines[4], "........");
    assert_eq!(lines[7], "RNBQKBNR");
}

// ============================================================================
// JSON Tests
// ============================================================================

#[test]
fn test_setup_from_json() {
    //! A small board loads from the JSON grid format
    let json = r#"{ "ranks": [[12, 0, 0], [0, 0, 0], [0, 0, 6]] }"#;
    let setup = InitialSetup::from_json(json).expect("valid JSON");
    let board = setup.build().expect("valid setup");

    assert_eq!(board.size(), BoardSize::new(3, 3));
    assert_eq!(board.find_king(PieceColor::White), Some(Square::new(0, 0)));
    assert_eq!(board.find_king(PieceColor::Black), Some(Square::new(2, 2)));
}

#[test]
fn test_setup_json_matches_builder() {
    //! Serializing a built setup and reading it back gives the same grid
    let setup = minimal_setup().with_piece(Square::new(1, 1), Piece::white(PieceType::Pawn));
    let json = serde_json::to_string(&setup).expect("serialize");
    assert_eq!(InitialSetup::from_json(&json), Ok(setup));
}

#[test]
fn test_setup_malformed_json() {
    //! Broken JSON is an invalid setup
    let result = InitialSetup::from_json("{ \"ranks\": [[1, 2],");
    assert!(matches!(result, Err(GameError::InvalidSetup { .. })));
}

#[test]
fn test_setup_load_from_file() {
    //! Setups load from disk; a missing file is an invalid setup
    let dir = std::env::temp_dir().join(format!("tilechess-setup-{}", std::process::id()));
    fs::create_dir_all(&dir).expect("create scratch dir");
    let path = dir.join("setup.json");
    fs::write(&path, serde_json::to_string(&minimal_setup()).expect("serialize"))
        .expect("write setup");

    let loaded = InitialSetup::load(&path).expect("load setup");
    assert_eq!(loaded, minimal_setup());

    let missing = InitialSetup::load(&dir.join("missing.json"));
    assert!(matches!(missing, Err(GameError::InvalidSetup { .. })));

    let _ = fs::remove_dir_all(dir);
}

// ============================================================================
// Validation Tests
// ============================================================================

#[test]
fn test_setup_ragged_grid_rejected() {
    //! All ranks must have the same number of files
    let setup = InitialSetup {
        ranks: vec![vec![12, 0, 0], vec![0, 0], vec![0, 0, 6]],
    };
    assert!(matches!(setup.build(), Err(GameError::InvalidSetup { .. })));
}

#[test]
fn test_setup_empty_grid_rejected() {
    //! A board needs at least one square
    let setup = InitialSetup { ranks: Vec::new() };
    assert!(matches!(setup.size(), Err(GameError::InvalidSetup { .. })));

    let setup = InitialSetup { ranks: vec![Vec::new()] };
    assert!(matches!(setup.size(), Err(GameError::InvalidSetup { .. })));
}

#[test]
fn test_setup_oversized_grid_rejected() {
    //! Boards are limited to 255 ranks and files
    let setup = InitialSetup {
        ranks: vec![vec![0; 2]; 256],
    };
    assert!(matches!(setup.size(), Err(GameError::InvalidSetup { .. })));
}

#[test]
fn test_setup_unknown_code_rejected() {
    //! Codes outside 0..=12 are rejected
    let mut setup = minimal_setup();
    setup.ranks[3][3] = 13;
    assert!(matches!(setup.build(), Err(GameError::InvalidSetup { .. })));
}

#[test]
fn test_setup_king_count_enforced() {
    //! Each side needs exactly one king
    let missing_black = InitialSetup::empty(8, 8)
        .with_piece(Square::new(0, 4), Piece::white(PieceType::King));
    assert!(matches!(missing_black.build(), Err(GameError::InvariantViolation { .. })));

    let two_white = minimal_setup().with_piece(Square::new(0, 0), Piece::white(PieceType::King));
    assert!(matches!(two_white.build(), Err(GameError::InvariantViolation { .. })));
}

#[test]
fn test_with_piece_ignores_off_board_squares() {
    //! Placing outside the grid leaves the setup unchanged
    let setup = minimal_setup().with_piece(Square::new(8, 0), Piece::white(PieceType::Queen));
    assert_eq!(setup, minimal_setup());
}

#[test]
fn test_game_rejects_invalid_setup() {
    //! The controller refuses to start from a broken position
    let setup = InitialSetup::empty(4, 4);
    assert!(matches!(
        ChessGame::new(&setup),
        Err(GameError::InvariantViolation { .. })
    ));
}
