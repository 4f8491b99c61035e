//! Core module - application infrastructure around the rule engine
//!
//! - [`EngineSettings`] - Front-end preferences persisted as JSON
//! - [`init_logging`] - `tracing` subscriber setup for the binary
//! - [`CoreError`] - Failures of the above

pub mod error;
pub mod logging;
pub mod settings_persistence;

pub use error::{CoreError, CoreResult};
pub use logging::init_logging;
pub use settings_persistence::{
    get_settings_path, load_settings, load_settings_from, save_settings, save_settings_to,
    EngineSettings, LoadedSettings, SettingsFallback,
};
