//! Chess piece movement rules
//!
//! Contains the rules for how each chess piece can move. Pure functions with
//! no side effects.
//!
//! Every piece yields two independent sets: quiet destinations (empty squares)
//! and attacked squares. Attack generation runs in one of two modes:
//!
//! - [`AttackMode::Capture`]: real captures against enemy pieces, as offered
//!   to a player who selected the piece.
//! - [`AttackMode::Threat`]: every square the piece threatens whatever stands
//!   there, friendly pieces included. The check detector unions these sets
//!   into the [`DangerMap`] a king may not step onto.

use std::iter;

use super::board_state::{BoardState, DangerMap};
use crate::game::components::{BoardPiece, MoveKind, PieceColor, PieceType, PossibleMove};
use crate::game::types::{BoardSize, Square};

type Step = (i8, i8);

const ORTHOGONAL: [Step; 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];
const DIAGONAL: [Step; 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];
const KNIGHT_JUMPS: [Step; 8] = [
    (-1, -2),
    (1, -2),
    (-1, 2),
    (1, 2),
    (-2, -1),
    (2, -1),
    (-2, 1),
    (2, 1),
];
const KING_STEPS: [Step; 8] = [
    (1, 0),
    (-1, 0),
    (0, 1),
    (0, -1),
    (1, 1),
    (1, -1),
    (-1, 1),
    (-1, -1),
];

/// How attack targets are collected
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AttackMode {
    /// Only squares holding an enemy piece
    Capture,
    /// Every threatened square, occupied or not
    Threat,
}

/// Quiet destinations and attacked squares of one piece
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Destinations {
    pub quiet: Vec<PossibleMove>,
    pub attacks: Vec<PossibleMove>,
}

impl Destinations {
    pub fn iter(&self) -> impl Iterator<Item = &PossibleMove> + '_ {
        self.quiet.iter().chain(self.attacks.iter())
    }

    pub fn into_vec(self) -> Vec<PossibleMove> {
        let mut all = self.quiet;
        all.extend(self.attacks);
        all
    }

    pub fn find(&self, to: Square) -> Option<PossibleMove> {
        self.iter().find(|mv| mv.to == to).copied()
    }

    pub fn len(&self) -> usize {
        self.quiet.len() + self.attacks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.quiet.is_empty() && self.attacks.is_empty()
    }
}

/// Get all possible moves for the piece on `position`
///
/// `danger` only affects the king. An empty square yields no destinations.
pub fn get_possible_moves(
    board_state: &BoardState,
    position: Square,
    danger: &DangerMap,
) -> Destinations {
    Destinations {
        quiet: quiet_moves(board_state, position, danger),
        attacks: attack_moves(board_state, position, AttackMode::Capture, danger),
    }
}

/// Destinations on empty squares, including castling and quiet promotions
pub fn quiet_moves(board_state: &BoardState, from: Square, danger: &DangerMap) -> Vec<PossibleMove> {
    let Some(slot) = board_state.get(from) else {
        return Vec::new();
    };

    match slot.piece_type() {
        PieceType::Pawn => pawn_quiet(board_state, from, slot.color()),
        PieceType::Rook => slide_quiet(board_state, from, &ORTHOGONAL),
        PieceType::Bishop => slide_quiet(board_state, from, &DIAGONAL),
        PieceType::Queen => {
            let mut moves = slide_quiet(board_state, from, &ORTHOGONAL);
            moves.extend(slide_quiet(board_state, from, &DIAGONAL));
            moves
        }
        PieceType::Knight => step_quiet(board_state, from, &KNIGHT_JUMPS, None),
        PieceType::King => {
            let mut moves = step_quiet(board_state, from, &KING_STEPS, Some(danger));
            moves.extend(castling_moves(board_state, from, slot));
            moves
        }
    }
}

/// Attacked squares of the piece on `from` under the given mode
pub fn attack_moves(
    board_state: &BoardState,
    from: Square,
    mode: AttackMode,
    danger: &DangerMap,
) -> Vec<PossibleMove> {
    let Some(slot) = board_state.get(from) else {
        return Vec::new();
    };
    let color = slot.color();

    match slot.piece_type() {
        PieceType::Pawn => pawn_attacks(board_state, from, color, mode),
        PieceType::Rook => slide_attacks(board_state, from, color, &ORTHOGONAL, mode),
        PieceType::Bishop => slide_attacks(board_state, from, color, &DIAGONAL, mode),
        PieceType::Queen => {
            let mut moves = slide_attacks(board_state, from, color, &ORTHOGONAL, mode);
            moves.extend(slide_attacks(board_state, from, color, &DIAGONAL, mode));
            moves
        }
        PieceType::Knight => step_attacks(board_state, from, color, &KNIGHT_JUMPS, mode, None),
        PieceType::King => step_attacks(board_state, from, color, &KING_STEPS, mode, Some(danger)),
    }
}

/// Squares along one direction, nearest first, ending at the board edge
fn ray(from: Square, (d_rank, d_file): Step, size: BoardSize) -> impl Iterator<Item = Square> {
    iter::successors(from.offset(d_rank, d_file, size), move |square| {
        square.offset(d_rank, d_file, size)
    })
}

fn starting_rank(color: PieceColor, size: BoardSize) -> u8 {
    match color {
        PieceColor::White => 1,
        PieceColor::Black => size.ranks.saturating_sub(2),
    }
}

fn promotion_rank(color: PieceColor, size: BoardSize) -> u8 {
    match color {
        PieceColor::White => size.last_rank(),
        PieceColor::Black => 0,
    }
}

/// `kind`, unless the pawn lands on its promotion rank
fn pawn_target(to: Square, kind: MoveKind, color: PieceColor, size: BoardSize) -> PossibleMove {
    if to.rank() == promotion_rank(color, size) {
        PossibleMove::new(to, MoveKind::Promotion)
    } else {
        PossibleMove::new(to, kind)
    }
}

fn pawn_quiet(board_state: &BoardState, from: Square, color: PieceColor) -> Vec<PossibleMove> {
    let size = board_state.size();
    let forward = color.forward();
    let mut moves = Vec::new();

    let Some(one) = from.offset(forward, 0, size) else {
        return moves;
    };
    if !board_state.is_empty(one) {
        return moves;
    }
    moves.push(pawn_target(one, MoveKind::Quiet, color, size));

    if from.rank() == starting_rank(color, size) {
        if let Some(two) = one.offset(forward, 0, size) {
            if board_state.is_empty(two) {
                moves.push(pawn_target(two, MoveKind::Quiet, color, size));
            }
        }
    }
    moves
}

fn pawn_attacks(
    board_state: &BoardState,
    from: Square,
    color: PieceColor,
    mode: AttackMode,
) -> Vec<PossibleMove> {
    let size = board_state.size();
    let forward = color.forward();
    let mut moves = Vec::new();

    for side in [-1, 1] {
        let Some(diagonal) = from.offset(forward, side, size) else {
            continue;
        };
        match mode {
            AttackMode::Threat => moves.push(PossibleMove::new(diagonal, MoveKind::Capture)),
            AttackMode::Capture => {
                if board_state.is_enemy(diagonal, color) {
                    moves.push(pawn_target(diagonal, MoveKind::Capture, color, size));
                } else if board_state.is_empty(diagonal)
                    && en_passant_victim(board_state, from, side, color).is_some()
                {
                    moves.push(PossibleMove::new(diagonal, MoveKind::EnPassant));
                }
            }
        }
    }
    moves
}

/// Enemy pawn beside `from` that double-stepped on the previous move
pub(crate) fn en_passant_victim(
    board_state: &BoardState,
    from: Square,
    side: i8,
    color: PieceColor,
) -> Option<Square> {
    let beside = from.offset(0, side, board_state.size())?;
    let victim = board_state.get(beside)?;
    (victim.piece.is(color.opponent(), PieceType::Pawn) && victim.state.is_en_passant_capturable())
        .then_some(beside)
}

fn slide_quiet(board_state: &BoardState, from: Square, directions: &[Step]) -> Vec<PossibleMove> {
    directions
        .iter()
        .flat_map(|&step| ray(from, step, board_state.size()).take_while(move |&sq| board_state.is_empty(sq)))
        .map(|to| PossibleMove::new(to, MoveKind::Quiet))
        .collect()
}

/// Walk each ray to its first occupied square
///
/// In threat mode empty squares count too, and the ray keeps going through
/// the enemy king so the square behind it stays unsafe for that king.
fn slide_attacks(
    board_state: &BoardState,
    from: Square,
    color: PieceColor,
    directions: &[Step],
    mode: AttackMode,
) -> Vec<PossibleMove> {
    let mut moves = Vec::new();

    for &step in directions {
        for square in ray(from, step, board_state.size()) {
            let Some(target) = board_state.get(square) else {
                if mode == AttackMode::Threat {
                    moves.push(PossibleMove::new(square, MoveKind::Capture));
                }
                continue;
            };

            if mode == AttackMode::Threat || target.color() != color {
                moves.push(PossibleMove::new(square, MoveKind::Capture));
            }
            let pierces_king =
                mode == AttackMode::Threat && target.piece.is(color.opponent(), PieceType::King);
            if !pierces_king {
                break;
            }
        }
    }
    moves
}

fn step_quiet(
    board_state: &BoardState,
    from: Square,
    steps: &[Step],
    danger: Option<&DangerMap>,
) -> Vec<PossibleMove> {
    steps
        .iter()
        .filter_map(|&(d_rank, d_file)| from.offset(d_rank, d_file, board_state.size()))
        .filter(|&to| board_state.is_empty(to))
        .filter(|&to| !danger.is_some_and(|map| map.is_marked(to)))
        .map(|to| PossibleMove::new(to, MoveKind::Quiet))
        .collect()
}

fn step_attacks(
    board_state: &BoardState,
    from: Square,
    color: PieceColor,
    steps: &[Step],
    mode: AttackMode,
    danger: Option<&DangerMap>,
) -> Vec<PossibleMove> {
    steps
        .iter()
        .filter_map(|&(d_rank, d_file)| from.offset(d_rank, d_file, board_state.size()))
        .filter(|&to| match mode {
            AttackMode::Threat => true,
            AttackMode::Capture => {
                board_state.is_enemy(to, color) && !danger.is_some_and(|map| map.is_marked(to))
            }
        })
        .map(|to| PossibleMove::new(to, MoveKind::Capture))
        .collect()
}

/// First occupied square from the king along its rank in `side` direction
pub(crate) fn castling_partner(board_state: &BoardState, king_at: Square, side: i8) -> Option<Square> {
    ray(king_at, (0, side), board_state.size()).find(|&sq| !board_state.is_empty(sq))
}

/// Castling targets for an unmoved king
///
/// The partner rook is found by scanning, so the squares strictly between
/// king and rook are empty by construction. The rook must sit at least three
/// files away so the king's two-file step stays short of it.
fn castling_moves(board_state: &BoardState, from: Square, king: &BoardPiece) -> Vec<PossibleMove> {
    if king.state.moved {
        return Vec::new();
    }

    let mut moves = Vec::new();
    for side in [1, -1] {
        let Some(rook_at) = castling_partner(board_state, from, side) else {
            continue;
        };
        let eligible = board_state
            .get(rook_at)
            .is_some_and(|rook| rook.piece.is(king.color(), PieceType::Rook) && !rook.state.moved);
        if !eligible || rook_at.file().abs_diff(from.file()) < 3 {
            continue;
        }
        if let Some(to) = from.offset(0, 2 * side, board_state.size()) {
            moves.push(PossibleMove::new(to, MoveKind::Castle));
        }
    }
    moves
}
