//! Chess game resources - controller-owned game state
//!
//! Resources are the singletons the selection/turn controller keeps next to
//! the board: whose turn it is, what is selected, how the game stands, and
//! what has been played.
//!
//! # Resource Categories
//!
//! ## Turn Management
//! - [`CurrentTurn`] - Tracks whose turn it is and move numbers
//! - [`CurrentGamePhase`] - Playing / Check / Checkmate for the side to move
//!
//! ## Player Interaction
//! - [`Selection`] - Currently selected piece and its highlighted targets
//!
//! ## Game History
//! - [`MoveHistory`] - Record of applied moves
//!
//! ## Game Status
//! - [`GameOverState`] - Win conditions; terminal states freeze input

pub mod game_over;
pub mod history;
pub mod selection;
pub mod turn;

#[cfg(test)]
mod tests;

pub use game_over::GameOverState;
pub use history::MoveHistory;
pub use selection::Selection;
pub use turn::{CurrentGamePhase, CurrentTurn};
