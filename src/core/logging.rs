//! Logging setup for the binary
//!
//! The library only emits `tracing` events; installing a subscriber is left
//! to whoever embeds it. The command-line front end calls [`init_logging`].

use tracing_subscriber::EnvFilter;

use crate::core::error::{CoreError, CoreResult};

/// Install a fmt subscriber filtered by `filter`
///
/// `RUST_LOG` wins over `filter` when it is set. Calling this twice is
/// harmless: the second global subscriber is simply not installed.
pub fn init_logging(filter: &str) -> CoreResult<()> {
    let env_filter = match std::env::var(EnvFilter::DEFAULT_ENV) {
        Ok(from_env) if !from_env.is_empty() => EnvFilter::try_new(&from_env),
        _ => EnvFilter::try_new(filter),
    }
    .map_err(|e| CoreError::LogFilter {
        filter: filter.to_string(),
        message: e.to_string(),
    })?;

    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
    Ok(())
}
