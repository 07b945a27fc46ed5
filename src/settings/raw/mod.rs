use std::env;
use std::path::PathBuf;

use anyhow::{Error, Result};
use imgcomments::normalize_path;
use imgcomments::view::DEFAULT_PAGE_TITLE;
use serde::Deserialize;

use crate::cli::{CliArgs, OutputFormat};

use super::resolved::{ConfigError, ConfigSources, ResolvedConfig, SettingSource};

/// `[workspace]` section.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct WorkspaceSection {
	pub(super) folders: Option<Vec<PathBuf>>,
}

/// `[panel]` section.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct PanelSection {
	pub(super) page_title: Option<String>,
}

/// `[output]` section.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct OutputSection {
	pub(super) format: Option<String>,
}

/// `[log]` section.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct LogSection {
	pub(super) level: Option<String>,
}

/// Mirror of the configuration file representation before CLI overrides and
/// validation are applied.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct RawConfig {
	pub(super) workspace: WorkspaceSection,
	pub(super) panel: PanelSection,
	pub(super) output: OutputSection,
	pub(super) log: LogSection,
}

impl RawConfig {
	/// Apply CLI overrides on top of the raw configuration values.
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		if !cli.workspace.is_empty() {
			self.workspace.folders = Some(cli.workspace.clone());
		}
		if let Some(title) = &cli.page_title {
			self.panel.page_title = Some(title.clone());
		}
		if let Some(format) = cli.output {
			self.output.format = Some(format.as_str().to_string());
		}
		if let Some(level) = &cli.log_level {
			self.log.level = Some(level.clone());
		}
	}

	/// Convert the raw configuration into a [`ResolvedConfig`], validating and
	/// filling defaults where required.
	pub(super) fn resolve(self, cli: &CliArgs) -> Result<ResolvedConfig> {
		let sources = ConfigSources {
			workspace_folders: detect_source(
				!cli.workspace.is_empty(),
				self.workspace.folders.is_some(),
				"IMGCOMMENTS__WORKSPACE__FOLDERS",
				"--workspace",
				"workspace.folders",
			),
			page_title: detect_source(
				cli.page_title.is_some(),
				self.panel.page_title.is_some(),
				"IMGCOMMENTS__PANEL__PAGE_TITLE",
				"--page-title",
				"panel.page_title",
			),
			output_format: detect_source(
				cli.output.is_some(),
				self.output.format.is_some(),
				"IMGCOMMENTS__OUTPUT__FORMAT",
				"--output",
				"output.format",
			),
		};

		let workspace_folders = self
			.workspace
			.folders
			.unwrap_or_default()
			.into_iter()
			.map(|folder| normalize_path(&folder))
			.collect();

		let output = match self.output.format {
			Some(format) => OutputFormat::parse(&format).ok_or_else(|| {
				ConfigError::invalid(
					"output.format",
					format.clone(),
					sources.source_for_output_format(),
					"expected one of html, plain, json",
				)
			})?,
			None => OutputFormat::default(),
		};

		let config = ResolvedConfig {
			workspace_folders,
			page_title: self
				.panel
				.page_title
				.unwrap_or_else(|| DEFAULT_PAGE_TITLE.to_string()),
			output,
			log_level: self.log.level.filter(|level| !level.trim().is_empty()),
		};

		config.validate(&sources).map_err(Error::new)?;

		Ok(config)
	}
}

fn detect_source(
	cli_present: bool,
	value_present: bool,
	env_var: &'static str,
	cli_flag: &'static str,
	key: &'static str,
) -> Option<SettingSource> {
	if !value_present {
		return None;
	}

	if cli_present {
		return Some(SettingSource::CliFlag(cli_flag));
	}

	if env::var_os(env_var).is_some() {
		return Some(SettingSource::Environment(env_var));
	}

	Some(SettingSource::ConfigKey(key))
}
