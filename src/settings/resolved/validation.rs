use super::{ConfigError, ConfigSources, ResolvedConfig};

pub(super) fn validate(
	config: &ResolvedConfig,
	sources: &ConfigSources,
) -> Result<(), ConfigError> {
	for folder in &config.workspace_folders {
		if !folder.is_dir() {
			return Err(ConfigError::invalid(
				"workspace.folders",
				folder.display().to_string(),
				sources.source_for_workspace_folders(),
				"must be an existing directory",
			));
		}
	}

	if config.page_title.trim().is_empty() {
		return Err(ConfigError::invalid(
			"panel.page_title",
			config.page_title.clone(),
			sources.source_for_page_title(),
			"must not be empty",
		));
	}

	Ok(())
}
