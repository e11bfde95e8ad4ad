//! Logging setup.
//!
//! Validation emits `tracing` events; embedding applications either install
//! their own subscriber or call [`init_tracing`].

use crate::config::Config;
use crate::error::{ConfigError, ConfigResult};
use tracing_subscriber::EnvFilter;

/// Install a stderr `fmt` subscriber.
///
/// The filter comes from `RUST_LOG` when set, otherwise from
/// [`Config::log_level`]. Fails if a global subscriber is already installed.
pub fn init_tracing(config: &Config) -> ConfigResult<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_level))
        .map_err(|e| ConfigError::InvalidValue {
            var: "LOG_LEVEL".to_string(),
            reason: e.to_string(),
        })?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| ConfigError::Other(e.to_string()))
}
