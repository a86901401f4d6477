// src/logging.rs
use std::io::IsTerminal;

use line_counter_shared_kernel::{PresentationError, PresentationResult};
use tracing_subscriber::EnvFilter;

/// Installs the stderr subscriber. Only `filter` decides what is shown;
/// the environment is not consulted.
pub fn init(filter: &str) -> PresentationResult<()> {
    let env_filter = EnvFilter::try_new(filter).map_err(|err| PresentationError::InvalidLogFilter {
        filter: filter.to_string(),
        reason: err.to_string(),
    })?;

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(env_filter)
        .with_target(false)
        .with_ansi(std::io::stderr().is_terminal())
        .try_init()
        .map_err(|err| PresentationError::LoggingInit(err.to_string()))
}
