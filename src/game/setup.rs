//! Initial placement of the pieces
//!
//! A setup is a rank-major grid of piece codes, rank 0 first:
//! `0` empty, `1..=6` black pawn, rook, knight, bishop, queen, king and
//! `7..=12` the white equivalents. It is consumed once when a game starts.
//!
//! ```json
//! { "ranks": [[8, 9, 10, 11, 12, 10, 9, 8], [7, 7, 7, 7, 7, 7, 7, 7], ...] }
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::game::components::{BoardPiece, Piece, PieceColor, PieceType};
use crate::game::error::{GameError, GameResult};
use crate::game::rules::BoardState;
use crate::game::types::{BoardSize, Square};

const STANDARD_RANKS: [[u8; 8]; 8] = [
    [8, 9, 10, 11, 12, 10, 9, 8],
    [7; 8],
    [0; 8],
    [0; 8],
    [0; 8],
    [0; 8],
    [1; 8],
    [2, 3, 4, 5, 6, 4, 3, 2],
];

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct InitialSetup {
    pub ranks: Vec<Vec<u8>>,
}

impl Default for InitialSetup {
    fn default() -> Self {
        InitialSetup::standard()
    }
}

impl InitialSetup {
    /// The usual 8×8 starting position
    pub fn standard() -> Self {
        InitialSetup {
            ranks: STANDARD_RANKS.iter().map(|rank| rank.to_vec()).collect(),
        }
    }

    /// A board of the given size with nothing on it
    pub fn empty(ranks: u8, files: u8) -> Self {
        InitialSetup {
            ranks: vec![vec![0; files as usize]; ranks as usize],
        }
    }

    /// Put `piece` on `square`; squares outside the grid are left alone
    pub fn with_piece(mut self, square: Square, piece: Piece) -> Self {
        if let Some(cell) = self
            .ranks
            .get_mut(square.rank() as usize)
            .and_then(|rank| rank.get_mut(square.file() as usize))
        {
            *cell = piece.code();
        }
        self
    }

    pub fn from_json(json: &str) -> GameResult<Self> {
        serde_json::from_str(json).map_err(|e| GameError::InvalidSetup {
            message: format!("malformed setup JSON: {e}"),
        })
    }

    pub fn load(path: &Path) -> GameResult<Self> {
        let contents = fs::read_to_string(path).map_err(|e| GameError::InvalidSetup {
            message: format!("cannot read {}: {e}", path.display()),
        })?;
        let setup = Self::from_json(&contents)?;
        info!("[SETUP] Loaded setup from {:?}", path);
        Ok(setup)
    }

    /// Board dimensions, validating that the grid is rectangular and fits
    pub fn size(&self) -> GameResult<BoardSize> {
        let ranks = self.ranks.len();
        let files = self.ranks.first().map_or(0, Vec::len);
        if ranks == 0 || files == 0 {
            return Err(GameError::InvalidSetup {
                message: "setup grid is empty".to_string(),
            });
        }
        if let Some(bad) = self.ranks.iter().position(|rank| rank.len() != files) {
            return Err(GameError::InvalidSetup {
                message: format!("rank {bad} has {} files, expected {files}", self.ranks[bad].len()),
            });
        }
        let ranks = u8::try_from(ranks).map_err(|_| GameError::InvalidSetup {
            message: format!("{ranks} ranks exceed the supported maximum of 255"),
        })?;
        let files = u8::try_from(files).map_err(|_| GameError::InvalidSetup {
            message: format!("{files} files exceed the supported maximum of 255"),
        })?;
        Ok(BoardSize::new(ranks, files))
    }

    /// Decode the grid into a board with every piece unmoved
    ///
    /// Each side must have exactly one king.
    pub fn build(&self) -> GameResult<BoardState> {
        let size = self.size()?;
        let mut board = BoardState::empty(size);

        for (rank, row) in self.ranks.iter().enumerate() {
            for (file, &code) in row.iter().enumerate() {
                if let Some(piece) = Piece::from_code(code)? {
                    board.place(Square::new(rank as u8, file as u8), BoardPiece::new(piece));
                }
            }
        }

        for color in [PieceColor::White, PieceColor::Black] {
            let kings = board.count_pieces(Piece::new(color, PieceType::King));
            if kings != 1 {
                return Err(GameError::InvariantViolation {
                    message: format!("{color:?} must have exactly one king, found {kings}"),
                });
            }
        }
        Ok(board)
    }
}
