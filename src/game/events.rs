//! Notifications raised by the controller for the input/rendering layer
//!
//! Events queue up inside the controller and are drained by the caller after
//! each request. They carry no timing: how long a "Check" banner stays on
//! screen is the renderer's business.

use serde::{Deserialize, Serialize};

use crate::game::components::PieceColor;
use crate::game::rules::AppliedMove;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// A move was applied and the turn passed to `next`
    TurnComplete { applied: AppliedMove, next: PieceColor },
    /// `side`'s king is attacked
    Check { side: PieceColor },
    /// `side` is mated; the game is over
    Checkmate { side: PieceColor, winner: PieceColor },
    /// `side` lost its king to a capture; the game is over
    KingCaptured { side: PieceColor, winner: PieceColor },
}

impl GameEvent {
    /// True for events after which the input layer must stop forwarding clicks
    pub fn ends_game(&self) -> bool {
        matches!(self, GameEvent::Checkmate { .. } | GameEvent::KingCaptured { .. })
    }
}
