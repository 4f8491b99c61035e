//! Selection resource for tracking the selected piece

use crate::game::components::PossibleMove;
use crate::game::types::Square;

/// Currently selected square and the destinations highlighted for it
///
/// Selection is one-shot: it is cleared whether or not the follow-up
/// destination turns out to be legal.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Selection {
    pub selected_position: Option<Square>,
    pub possible_moves: Vec<PossibleMove>,
}

impl Selection {
    pub fn select(&mut self, position: Square, possible_moves: Vec<PossibleMove>) {
        self.selected_position = Some(position);
        self.possible_moves = possible_moves;
    }

    pub fn clear(&mut self) {
        self.selected_position = None;
        self.possible_moves.clear();
    }

    pub fn is_selected(&self) -> bool {
        self.selected_position.is_some()
    }

    /// Highlight carried by `to`, if it is one of the selected piece's targets
    pub fn target(&self, to: Square) -> Option<PossibleMove> {
        self.possible_moves.iter().find(|mv| mv.to == to).copied()
    }
}
