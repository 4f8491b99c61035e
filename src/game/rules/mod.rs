//! Chess rules module - pure game logic
//!
//! Implements move generation, move application and check detection as plain
//! functions over a [`BoardState`], so every rule can be unit tested without
//! the selection/turn controller around it.
//!
//! # Module Structure
//!
//! - `board_state` - Board grid, per-piece movement state, danger map
//! - `piece_moves` - Quiet and attack destinations for each piece type
//! - `apply` - Carrying out a chosen destination, special moves included
//! - `check` - Danger map construction, check and checkmate detection

pub mod apply;
pub mod board_state;
pub mod check;
pub mod piece_moves;


// Re-export commonly used items
pub use apply::{apply_move, AppliedMove};
pub use board_state::{BoardState, DangerMap};
pub use check::{build_danger_map, evaluate, is_checkmate, is_in_check, CheckStatus};
pub use piece_moves::{attack_moves, get_possible_moves, quiet_moves, AttackMode, Destinations};
