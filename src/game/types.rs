//! Type definitions and utilities for board coordinates
//!
//! Provides newtype patterns for ranks and files so the two board axes are
//! never mixed up, plus the [`BoardSize`] that bounds every square lookup.
//!
//! Axis convention: rank 0 is White's home rank and pawns of White advance
//! toward higher ranks; files run left to right starting at 0 ('a').

use serde::{Deserialize, Serialize};
use std::fmt;

/// Board coordinate representing a file (column) on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct File(pub u8);

impl File {
    /// Create a file from a letter ('a'..='z')
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            'a'..='z' => Some(File(c as u8 - b'a')),
            _ => None,
        }
    }

    /// Convert file to a letter, if the board is narrow enough to have one
    pub fn to_char(self) -> Option<char> {
        (self.0 < 26).then(|| (b'a' + self.0) as char)
    }

    pub fn index(self) -> u8 {
        self.0
    }
}

/// Board coordinate representing a rank (row) on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Rank(pub u8);

impl Rank {
    /// Create a rank from its 1-based number
    pub fn from_number(n: u16) -> Option<Self> {
        if (1..=255).contains(&n) {
            Some(Rank((n - 1) as u8))
        } else {
            None
        }
    }

    /// Convert rank to its 1-based number
    pub fn to_number(self) -> u16 {
        self.0 as u16 + 1
    }

    pub fn index(self) -> u8 {
        self.0
    }
}

/// Board square position (rank, file)
///
/// Ordering is rank-major so sorted square lists read bottom-up, left to right.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Square {
    pub rank: Rank,
    pub file: File,
}

impl Square {
    /// Create a square from rank and file indices
    pub const fn new(rank: u8, file: u8) -> Self {
        Square {
            rank: Rank(rank),
            file: File(file),
        }
    }

    /// Create a square from algebraic notation (e.g., "e4", "b10")
    ///
    /// # Examples
    ///
    /// ```
    /// use tilechess::game::types::Square;
    /// let square = Square::from_algebraic("e4").unwrap();
    /// assert_eq!(square, Square::new(3, 4));
    /// ```
    pub fn from_algebraic(s: &str) -> Option<Self> {
        let mut chars = s.trim().chars();
        let file = File::from_char(chars.next()?.to_ascii_lowercase())?;
        let rank_text = chars.as_str();
        if rank_text.is_empty() || !rank_text.chars().all(|c| c.is_ascii_digit()) {
            return None;
        }
        let rank = Rank::from_number(rank_text.parse().ok()?)?;
        Some(Square { rank, file })
    }

    /// Convert square to algebraic notation, when the file has a letter
    pub fn to_algebraic(self) -> Option<String> {
        Some(format!("{}{}", self.file.to_char()?, self.rank.to_number()))
    }

    pub fn rank(self) -> u8 {
        self.rank.0
    }

    pub fn file(self) -> u8 {
        self.file.0
    }

    /// Step by a signed (rank, file) offset, staying inside `size`
    ///
    /// Leaving the grid yields `None`; callers treat that as "stop scanning".
    pub fn offset(self, d_rank: i8, d_file: i8, size: BoardSize) -> Option<Square> {
        let rank = self.rank.0 as i16 + d_rank as i16;
        let file = self.file.0 as i16 + d_file as i16;
        if rank < 0 || file < 0 {
            return None;
        }
        let square = Square::new(u8::try_from(rank).ok()?, u8::try_from(file).ok()?);
        size.contains(square).then_some(square)
    }

    pub fn to_tuple(self) -> (u8, u8) {
        (self.rank.0, self.file.0)
    }
}

impl From<(u8, u8)> for Square {
    fn from((rank, file): (u8, u8)) -> Self {
        Square::new(rank, file)
    }
}

impl From<Square> for (u8, u8) {
    fn from(square: Square) -> Self {
        square.to_tuple()
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.to_algebraic() {
            Some(name) => f.write_str(&name),
            None => write!(f, "({}, {})", self.rank.0, self.file.0),
        }
    }
}

/// Dimensions of the board: number of ranks and number of files
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BoardSize {
    pub ranks: u8,
    pub files: u8,
}

impl BoardSize {
    pub const STANDARD: BoardSize = BoardSize { ranks: 8, files: 8 };

    pub const fn new(ranks: u8, files: u8) -> Self {
        BoardSize { ranks, files }
    }

    pub fn contains(self, square: Square) -> bool {
        square.rank.0 < self.ranks && square.file.0 < self.files
    }

    pub fn square_count(self) -> usize {
        self.ranks as usize * self.files as usize
    }

    /// Row-major index of an in-bounds square
    pub(crate) fn index(self, square: Square) -> Option<usize> {
        self.contains(square)
            .then(|| square.rank.0 as usize * self.files as usize + square.file.0 as usize)
    }

    /// Every square of the board, rank 0 first
    pub fn squares(self) -> impl Iterator<Item = Square> {
        (0..self.ranks).flat_map(move |rank| (0..self.files).map(move |file| Square::new(rank, file)))
    }

    pub fn last_rank(self) -> u8 {
        self.ranks.saturating_sub(1)
    }
}

impl Default for BoardSize {
    fn default() -> Self {
        BoardSize::STANDARD
    }
}
