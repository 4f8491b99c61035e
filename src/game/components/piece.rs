//! Piece-related components
//!
//! A piece is a (type, color) pair. The integer codes used by setup grids
//! exist only at the boundary: [`Piece::from_code`] and [`Piece::code`].

use serde::{Deserialize, Serialize};

use crate::game::error::{GameError, GameResult};

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default, Serialize, Deserialize)]
pub enum PieceColor {
    #[default]
    White,
    Black,
}

impl PieceColor {
    pub fn opponent(self) -> PieceColor {
        match self {
            PieceColor::White => PieceColor::Black,
            PieceColor::Black => PieceColor::White,
        }
    }

    /// Rank step a pawn of this color advances by
    pub fn forward(self) -> i8 {
        match self {
            PieceColor::White => 1,
            PieceColor::Black => -1,
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum PieceType {
    Pawn,
    Rook,
    Knight,
    Bishop,
    Queen,
    King,
}

impl PieceType {
    const ORDER: [PieceType; 6] = [
        PieceType::Pawn,
        PieceType::Rook,
        PieceType::Knight,
        PieceType::Bishop,
        PieceType::Queen,
        PieceType::King,
    ];

    /// Letter used in text boards and move logs
    pub fn letter(self) -> char {
        match self {
            PieceType::Pawn => 'p',
            PieceType::Rook => 'r',
            PieceType::Knight => 'n',
            PieceType::Bishop => 'b',
            PieceType::Queen => 'q',
            PieceType::King => 'k',
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub struct Piece {
    pub color: PieceColor,
    pub piece_type: PieceType,
}

impl Piece {
    pub const fn new(color: PieceColor, piece_type: PieceType) -> Self {
        Piece { color, piece_type }
    }

    pub const fn white(piece_type: PieceType) -> Self {
        Piece::new(PieceColor::White, piece_type)
    }

    pub const fn black(piece_type: PieceType) -> Self {
        Piece::new(PieceColor::Black, piece_type)
    }

    /// Decode a setup code: 0 empty, 1..=6 black pawn..king, 7..=12 white pawn..king
    pub fn from_code(code: u8) -> GameResult<Option<Piece>> {
        let (color, offset) = match code {
            0 => return Ok(None),
            1..=6 => (PieceColor::Black, code - 1),
            7..=12 => (PieceColor::White, code - 7),
            _ => {
                return Err(GameError::InvalidSetup {
                    message: format!("unknown piece code {code}"),
                })
            }
        };
        Ok(Some(Piece::new(color, PieceType::ORDER[offset as usize])))
    }

    pub fn code(self) -> u8 {
        let offset = PieceType::ORDER
            .iter()
            .position(|&kind| kind == self.piece_type)
            .unwrap_or_default() as u8;
        match self.color {
            PieceColor::Black => 1 + offset,
            PieceColor::White => 7 + offset,
        }
    }

    /// Uppercase for White, lowercase for Black
    pub fn symbol(self) -> char {
        let letter = self.piece_type.letter();
        match self.color {
            PieceColor::White => letter.to_ascii_uppercase(),
            PieceColor::Black => letter,
        }
    }

    pub fn is(self, color: PieceColor, piece_type: PieceType) -> bool {
        self.color == color && self.piece_type == piece_type
    }
}

/// Per-piece movement state that travels with the piece
///
/// `has_moved` gates castling and is never reset. `en_passant_countdown` is
/// set to 2 by a pawn's double step and ticked down after every applied move,
/// so it reads 1 exactly while the opponent makes their next move.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HasMoved {
    pub moved: bool,
    pub move_count: u32,
    pub en_passant_countdown: u8,
}

impl HasMoved {
    pub const EN_PASSANT_FRESH: u8 = 2;
    pub const EN_PASSANT_CAPTURABLE: u8 = 1;

    pub fn is_en_passant_capturable(&self) -> bool {
        self.en_passant_countdown == Self::EN_PASSANT_CAPTURABLE
    }

    pub(crate) fn record_move(&mut self) {
        self.moved = true;
        self.move_count += 1;
    }

    pub(crate) fn tick_en_passant(&mut self) {
        self.en_passant_countdown = self.en_passant_countdown.saturating_sub(1);
    }
}

/// A piece standing on the board together with its movement state
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardPiece {
    pub piece: Piece,
    pub state: HasMoved,
}

impl BoardPiece {
    pub fn new(piece: Piece) -> Self {
        BoardPiece {
            piece,
            state: HasMoved::default(),
        }
    }

    pub fn color(&self) -> PieceColor {
        self.piece.color
    }

    pub fn piece_type(&self) -> PieceType {
        self.piece.piece_type
    }
}
