//! Structured logging setup for the command-line front end.
//!
//! Library code only emits `tracing` events; installing a subscriber is left
//! to the binary so embedders keep control over their own output.

use anyhow::{Result, anyhow};
use tracing_subscriber::EnvFilter;

/// Environment variable holding a `tracing` filter directive.
pub const LOG_ENV: &str = "IMGCOMMENTS_LOG";

pub const DEFAULT_LEVEL: &str = "warn";

/// Build the filter from [`LOG_ENV`], falling back to `level`.
pub fn filter(level: Option<&str>) -> Result<EnvFilter> {
	if let Ok(filter) = EnvFilter::try_from_env(LOG_ENV) {
		return Ok(filter);
	}

	let directive = level.unwrap_or(DEFAULT_LEVEL);
	EnvFilter::try_new(directive).map_err(|err| anyhow!("invalid log level '{directive}': {err}"))
}

/// Install a stderr subscriber. Calling this twice is harmless.
pub fn initialize(level: Option<&str>) -> Result<()> {
	let filter = filter(level)?;
	let _ = tracing_subscriber::fmt()
		.with_env_filter(filter)
		.with_writer(std::io::stderr)
		.with_target(false)
		.try_init();
	Ok(())
}
