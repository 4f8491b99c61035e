//! Move application
//!
//! Mutates the board for one highlighted destination: relocation, capture,
//! castling with the rook co-move, en passant and promotion. After every
//! applied move all pawn en-passant countdowns tick down by one.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::board_state::BoardState;
use super::piece_moves::castling_partner;
use crate::game::components::{HasMoved, MoveKind, Piece, PieceType, PossibleMove};
use crate::game::error::{GameError, GameResult};
use crate::game::types::Square;

/// What an applied move did, for history and for the rendering layer
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppliedMove {
    /// The mover as it stood on `from`
    pub piece: Piece,
    pub from: Square,
    pub to: Square,
    pub kind: MoveKind,
    /// Removed piece and the square it was removed from
    pub captured: Option<(Square, Piece)>,
    /// Castling rook relocation
    pub rook_move: Option<(Square, Square)>,
    pub promoted_to: Option<Piece>,
}

/// Apply `target` for the piece on `from`
///
/// The caller is responsible for `target` being one of the piece's generated
/// destinations; this function only carries out its side effects.
pub fn apply_move(
    board_state: &mut BoardState,
    from: Square,
    target: PossibleMove,
) -> GameResult<AppliedMove> {
    let mover = board_state
        .get(from)
        .map(|slot| slot.piece)
        .ok_or(GameError::PieceNotFound { square: from })?;
    let to = target.to;

    let mut applied = AppliedMove {
        piece: mover,
        from,
        to,
        kind: target.kind,
        captured: None,
        rook_move: None,
        promoted_to: None,
    };

    match target.kind {
        MoveKind::Quiet => relocate(board_state, from, to),
        MoveKind::Capture => {
            applied.captured = take(board_state, to);
            relocate(board_state, from, to);
        }
        MoveKind::EnPassant => {
            let victim = Square::new(from.rank(), to.file());
            applied.captured = take(board_state, victim);
            relocate(board_state, from, to);
        }
        MoveKind::Castle => {
            applied.rook_move = Some(castle(board_state, from, to)?);
        }
        MoveKind::Promotion => {
            applied.captured = take(board_state, to);
            relocate(board_state, from, to);
            applied.promoted_to = Some(promote(board_state, to)?);
        }
    }

    tick_en_passant(board_state);

    debug!(
        "[MOVE] {} {}->{} {:?}{}",
        mover.symbol(),
        from,
        to,
        target.kind,
        applied
            .captured
            .map(|(_, piece)| format!(" (took {})", piece.symbol()))
            .unwrap_or_default()
    );
    Ok(applied)
}

fn take(board_state: &mut BoardState, at: Square) -> Option<(Square, Piece)> {
    board_state.remove(at).map(|slot| (at, slot.piece))
}

/// Quiet relocation plus the mover's bookkeeping
fn relocate(board_state: &mut BoardState, from: Square, to: Square) {
    board_state.relocate(from, to);
    let Some(moved) = board_state.get_mut(to) else {
        return;
    };
    moved.state.record_move();
    if moved.piece.piece_type == PieceType::Pawn {
        moved.state.en_passant_countdown = if from.rank().abs_diff(to.rank()) == 2 {
            HasMoved::EN_PASSANT_FRESH
        } else {
            0
        };
    }
}

/// Move king two files and the partner rook onto the square the king crossed
fn castle(board_state: &mut BoardState, from: Square, to: Square) -> GameResult<(Square, Square)> {
    let side: i8 = if to.file() > from.file() { 1 } else { -1 };
    let size = board_state.size();

    let rook_from = castling_partner(board_state, from, side)
        .filter(|&sq| {
            board_state
                .get_piece_at(sq)
                .is_some_and(|piece| piece.piece_type == PieceType::Rook)
        })
        .ok_or(GameError::PieceNotFound { square: to })?;
    let rook_to = to
        .offset(0, -side, size)
        .ok_or(GameError::IllegalDestination { from, to })?;

    relocate(board_state, from, to);
    relocate(board_state, rook_from, rook_to);
    Ok((rook_from, rook_to))
}

fn promote(board_state: &mut BoardState, at: Square) -> GameResult<Piece> {
    let slot = board_state
        .get_mut(at)
        .ok_or(GameError::PieceNotFound { square: at })?;
    slot.piece.piece_type = PieceType::Queen;
    slot.state.en_passant_countdown = 0;
    Ok(slot.piece)
}

fn tick_en_passant(board_state: &mut BoardState) {
    board_state
        .pieces_mut()
        .filter(|slot| slot.piece.piece_type == PieceType::Pawn)
        .for_each(|slot| slot.state.tick_en_passant());
}
