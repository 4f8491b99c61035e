//! Move history tracking resource
//!
//! Keeps a chronological record of every applied move. The rules themselves
//! never read it: castling rights and en passant live on the pieces. The
//! history exists for the input layer (move lists, last-move display).

use serde::{Deserialize, Serialize};

use crate::game::components::MoveRecord;

/// The complete move history for the current game
///
/// Index 0 is White's first move, index 1 Black's reply, and so on.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveHistory {
    pub moves: Vec<MoveRecord>,
}

impl MoveHistory {
    pub fn add_move(&mut self, record: MoveRecord) {
        self.moves.push(record);
    }

    /// The most recent move, `None` before the first move
    pub fn last_move(&self) -> Option<&MoveRecord> {
        self.moves.last()
    }

    pub fn len(&self) -> usize {
        self.moves.len()
    }

    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    pub fn get_move(&self, index: usize) -> Option<&MoveRecord> {
        self.moves.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, MoveRecord> {
        self.moves.iter()
    }
}
