//! tilechess - chess rules and turn control for boards of any size
//!
//! - [`game`] - Rule engine, selection/turn controller and game state
//! - [`core`] - Settings persistence and logging setup

pub mod core;
pub mod game;
