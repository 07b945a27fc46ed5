use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum SettingSource {
	CliFlag(&'static str),
	Environment(&'static str),
	ConfigKey(&'static str),
}

impl fmt::Display for SettingSource {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::CliFlag(flag) => write!(f, "CLI flag `{flag}`"),
			Self::Environment(var) => write!(f, "environment variable `{var}`"),
			Self::ConfigKey(key) => write!(f, "configuration key `{key}`"),
		}
	}
}

#[derive(Debug, Default, Clone)]
pub(crate) struct ConfigSources {
	pub(crate) workspace_folders: Option<SettingSource>,
	pub(crate) page_title: Option<SettingSource>,
	pub(crate) output_format: Option<SettingSource>,
}

impl ConfigSources {
	pub(crate) fn source_for_workspace_folders(&self) -> SettingSource {
		self.workspace_folders
			.clone()
			.unwrap_or(SettingSource::ConfigKey("workspace.folders"))
	}

	pub(crate) fn source_for_page_title(&self) -> SettingSource {
		self.page_title
			.clone()
			.unwrap_or(SettingSource::ConfigKey("panel.page_title"))
	}

	pub(crate) fn source_for_output_format(&self) -> SettingSource {
		self.output_format
			.clone()
			.unwrap_or(SettingSource::ConfigKey("output.format"))
	}
}
