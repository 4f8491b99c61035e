//! Game state components

use serde::{Deserialize, Serialize};

use super::{MoveKind, Piece};
use crate::game::types::Square;

/// Phase of the side to move, refreshed after every completed turn
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GamePhase {
    #[default]
    Playing,
    Check,
    Checkmate,
}

/// Move record for history
///
/// `is_check` and `is_checkmate` describe the position the move produced,
/// as seen by the side that has to answer it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRecord {
    pub piece: Piece,
    pub from: Square,
    pub to: Square,
    pub kind: MoveKind,
    pub captured: Option<Piece>,
    /// Rook relocation of a castling move
    pub rook_move: Option<(Square, Square)>,
    pub is_check: bool,
    pub is_checkmate: bool,
}

impl MoveRecord {
    pub fn is_castling(&self) -> bool {
        self.kind == MoveKind::Castle
    }

    pub fn is_en_passant(&self) -> bool {
        self.kind == MoveKind::EnPassant
    }
}
