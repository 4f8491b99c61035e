//! Chess game components module
//!
//! Components are plain data structures with little logic.
//! Organized by domain: pieces, move markers, and game state.

pub mod game_state;
pub mod move_marker;
pub mod piece;

#[cfg(test)]
mod tests;

// Re-export all components for convenience
pub use game_state::*;
pub use move_marker::*;
pub use piece::*;
