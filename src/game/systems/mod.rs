//! Turn-level logic run by the controller between requests

pub mod game_logic;

pub use game_logic::update_game_phase;
