//! Chess game logic module - rule engine and turn controller
//!
//! Implements two-player chess on a rectangular board of any size, with clean
//! separation between pure rules and the controller that sequences turns.
//!
//! # Module Organization
//!
//! - `types` - Squares, ranks, files and board dimensions
//! - `components` - Piece data (Piece, HasMoved, GamePhase, MoveRecord, PossibleMove)
//! - `resources` - Controller-owned state (CurrentTurn, Selection, MoveHistory, GameOverState)
//! - `rules` - Pure chess logic (move generation, move application, check detection)
//! - `systems` - Phase update run after every applied move
//! - `setup` - Initial piece placement and its validation
//! - `controller` - [`ChessGame`], the selection/turn state machine
//! - `events` - Notifications for whatever draws the board
//!
//! # Request Flow
//!
//! 1. Selection (`ChessGame::try_select`) highlights a piece's destinations
//! 2. Move execution (`ChessGame::try_apply`) carries one out
//! 3. Game state update (`update_game_phase`) re-evaluates check for the side to move
//! 4. The caller drains [`GameEvent`]s and redraws

pub mod components;
pub mod controller;
pub mod error;
pub mod events;
pub mod resources;
pub mod rules;
pub mod setup;
pub mod systems;
pub mod types;

pub use controller::{ChessGame, ClickOutcome};
pub use error::{GameError, GameResult};
pub use events::GameEvent;
pub use setup::InitialSetup;
pub use types::{BoardSize, File, Rank, Square};
