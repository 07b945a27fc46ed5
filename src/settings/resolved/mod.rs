use std::path::PathBuf;

use crate::cli::OutputFormat;

mod errors;
mod sources;
mod summary;
mod validation;

pub(crate) use errors::ConfigError;
pub(crate) use sources::{ConfigSources, SettingSource};

/// Application-ready configuration derived from user input, config files and
/// defaults.
#[derive(Debug)]
pub(crate) struct ResolvedConfig {
	/// Absolute workspace folders. Empty means "use the document's directory".
	pub(crate) workspace_folders: Vec<PathBuf>,
	pub(crate) page_title: String,
	pub(crate) output: OutputFormat,
	pub(crate) log_level: Option<String>,
}

impl ResolvedConfig {
	pub(super) fn validate(&self, sources: &ConfigSources) -> Result<(), ConfigError> {
		validation::validate(self, sources)
	}

	/// Print a human readable summary of the effective configuration to stderr.
	pub(crate) fn print_summary(&self) {
		summary::print_summary(self);
	}
}
