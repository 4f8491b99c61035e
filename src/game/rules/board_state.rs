//! Board state representation for move generation and application
//!
//! The board is a rank-major grid of optional pieces. Reads are public; the
//! mutators are crate-private so only the setup loader and the move applier
//! can change placement.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::game::components::{BoardPiece, Piece, PieceColor, PieceType};
use crate::game::types::{BoardSize, Square};

/// Represents the state of the board
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardState {
    size: BoardSize,
    squares: Vec<Option<BoardPiece>>,
}

impl BoardState {
    pub fn empty(size: BoardSize) -> Self {
        BoardState {
            size,
            squares: vec![None; size.square_count()],
        }
    }

    pub fn size(&self) -> BoardSize {
        self.size
    }

    /// Piece and its movement state; `None` for empty or off-board squares
    pub fn get(&self, pos: Square) -> Option<&BoardPiece> {
        self.size.index(pos).and_then(|i| self.squares[i].as_ref())
    }

    pub fn get_piece_at(&self, pos: Square) -> Option<Piece> {
        self.get(pos).map(|slot| slot.piece)
    }

    pub fn get_piece_color(&self, pos: Square) -> Option<PieceColor> {
        self.get(pos).map(|slot| slot.piece.color)
    }

    /// True for an in-bounds square with nothing on it
    pub fn is_empty(&self, pos: Square) -> bool {
        self.size.contains(pos) && self.get(pos).is_none()
    }

    /// True if `pos` holds a piece of the opponent of `color`
    pub fn is_enemy(&self, pos: Square, color: PieceColor) -> bool {
        self.get_piece_color(pos) == Some(color.opponent())
    }

    pub fn pieces(&self) -> impl Iterator<Item = (Square, &BoardPiece)> + '_ {
        self.size
            .squares()
            .zip(self.squares.iter())
            .filter_map(|(square, slot)| slot.as_ref().map(|piece| (square, piece)))
    }

    pub fn get_pieces_by_color(
        &self,
        color: PieceColor,
    ) -> impl Iterator<Item = (Square, &BoardPiece)> + '_ {
        self.pieces().filter(move |(_, slot)| slot.color() == color)
    }

    pub fn find_king(&self, color: PieceColor) -> Option<Square> {
        self.pieces()
            .find(|(_, slot)| slot.piece.is(color, PieceType::King))
            .map(|(square, _)| square)
    }

    pub fn count_pieces(&self, piece: Piece) -> usize {
        self.pieces().filter(|(_, slot)| slot.piece == piece).count()
    }

    pub(crate) fn get_mut(&mut self, pos: Square) -> Option<&mut BoardPiece> {
        let index = self.size.index(pos)?;
        self.squares[index].as_mut()
    }

    pub(crate) fn pieces_mut(&mut self) -> impl Iterator<Item = &mut BoardPiece> + '_ {
        self.squares.iter_mut().flatten()
    }

    /// Put a piece on a square, returning whatever stood there
    pub(crate) fn place(&mut self, pos: Square, piece: BoardPiece) -> Option<BoardPiece> {
        let index = self.size.index(pos)?;
        self.squares[index].replace(piece)
    }

    pub(crate) fn remove(&mut self, pos: Square) -> Option<BoardPiece> {
        let index = self.size.index(pos)?;
        self.squares[index].take()
    }

    /// Move the piece on `from` to `to`, returning the piece it displaced
    ///
    /// Does nothing when `from` is empty or either square is off the board.
    pub(crate) fn relocate(&mut self, from: Square, to: Square) -> Option<BoardPiece> {
        if !self.size.contains(to) {
            return None;
        }
        let moving = self.remove(from)?;
        self.place(to, moving)
    }
}

impl fmt::Display for BoardState {
    /// Text board, highest rank on top, White in uppercase
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for rank in (0..self.size.ranks).rev() {
            let row: String = (0..self.size.files)
                .map(|file| {
                    self.get_piece_at(Square::new(rank, file))
                        .map_or('.', Piece::symbol)
                })
                .collect();
            writeln!(f, "{row}")?;
        }
        Ok(())
    }
}

/// Squares a king of one side must not step onto
///
/// Built from the opponent's threat set by the check detector and consulted by
/// the king move generator. Off-board lookups read as "not dangerous".
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DangerMap {
    size: BoardSize,
    marked: Vec<bool>,
}

impl DangerMap {
    pub fn new(size: BoardSize) -> Self {
        DangerMap {
            size,
            marked: vec![false; size.square_count()],
        }
    }

    pub fn mark(&mut self, pos: Square) {
        if let Some(index) = self.size.index(pos) {
            self.marked[index] = true;
        }
    }

    pub fn is_marked(&self, pos: Square) -> bool {
        self.size.index(pos).is_some_and(|i| self.marked[i])
    }

    pub fn marked_squares(&self) -> impl Iterator<Item = Square> + '_ {
        self.size
            .squares()
            .zip(self.marked.iter())
            .filter_map(|(square, &marked)| marked.then_some(square))
    }

    pub fn clear(&mut self) {
        self.marked.iter_mut().for_each(|m| *m = false);
    }
}
