//! Move-related components
//!
//! A [`PossibleMove`] is one highlighted destination: the square plus the
//! category the rendering layer uses to pick a tile colour and the applier
//! uses to pick side effects.

use serde::{Deserialize, Serialize};

use crate::game::types::Square;

/// Highlight category of a destination square
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MoveKind {
    /// Move to an empty square
    Quiet,
    /// Capture of the piece standing on the destination
    Capture,
    /// King steps two files; the rook jumps over it
    Castle,
    /// Pawn captures the enemy pawn beside its origin
    EnPassant,
    /// Pawn reaches the last rank (quietly or by capture) and becomes a queen
    Promotion,
}

impl MoveKind {
    pub fn is_capture(self) -> bool {
        matches!(self, MoveKind::Capture | MoveKind::EnPassant)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PossibleMove {
    pub to: Square,
    pub kind: MoveKind,
}

impl PossibleMove {
    pub fn new(to: Square, kind: MoveKind) -> Self {
        PossibleMove { to, kind }
    }
}
