//! Check and checkmate detection
//!
//! For the side being evaluated the detector unions the opponent's
//! threat-mode attack sets into a [`DangerMap`], reads check off the king's
//! square, and counts the king's own escapes under that map.
//!
//! Only the king's mobility decides mate. Blocking the checking line or
//! capturing the checker with another piece is not searched for.

use super::board_state::{BoardState, DangerMap};
use super::piece_moves::{attack_moves, quiet_moves, AttackMode};
use crate::game::components::{MoveKind, PieceColor};
use crate::game::error::{GameError, GameResult};
use crate::game::types::Square;

/// Result of evaluating one side's king
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CheckStatus {
    pub side: PieceColor,
    pub king: Square,
    pub in_check: bool,
    /// Number of squares the king can still move to
    pub king_mobility: usize,
    pub danger: DangerMap,
}

impl CheckStatus {
    pub fn is_checkmate(&self) -> bool {
        self.in_check && self.king_mobility == 0
    }
}

/// Every square threatened by the opponent of `defender`
pub fn build_danger_map(board_state: &BoardState, defender: PieceColor) -> DangerMap {
    let mut danger = DangerMap::new(board_state.size());
    // Attackers' own king gating is irrelevant in threat mode
    let unused = DangerMap::new(board_state.size());

    for (square, _) in board_state.get_pieces_by_color(defender.opponent()) {
        for threatened in attack_moves(board_state, square, AttackMode::Threat, &unused) {
            danger.mark(threatened.to);
        }
    }
    danger
}

/// Squares the king on `king` may move to under `danger`, castling excluded
pub fn king_escapes(board_state: &BoardState, king: Square, danger: &DangerMap) -> usize {
    let steps = quiet_moves(board_state, king, danger)
        .into_iter()
        .filter(|mv| mv.kind != MoveKind::Castle)
        .count();
    let captures = attack_moves(board_state, king, AttackMode::Capture, danger).len();
    steps + captures
}

/// Evaluate check and king mobility for `side`
///
/// Fails with an invariant violation when `side` has no king on the board.
pub fn evaluate(board_state: &BoardState, side: PieceColor) -> GameResult<CheckStatus> {
    let king = board_state
        .find_king(side)
        .ok_or_else(|| GameError::missing_king(side))?;

    let danger = build_danger_map(board_state, side);
    let in_check = danger.is_marked(king);
    let king_mobility = king_escapes(board_state, king, &danger);

    Ok(CheckStatus {
        side,
        king,
        in_check,
        king_mobility,
        danger,
    })
}

/// True when the king of `side` stands on a square the opponent attacks
pub fn is_in_check(board_state: &BoardState, side: PieceColor) -> GameResult<bool> {
    evaluate(board_state, side).map(|status| status.in_check)
}

/// True when `side` is in check and its king has nowhere to go
pub fn is_checkmate(board_state: &BoardState, side: PieceColor) -> GameResult<bool> {
    evaluate(board_state, side).map(|status| status.is_checkmate())
}
