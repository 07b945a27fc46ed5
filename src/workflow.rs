use std::env;
use std::path::{Path, PathBuf};

use anyhow::Result;
use imgcomments::{DiskProbe, HtmlRenderer, PanelController, WorkspaceFolders, normalize_path};
use tracing::debug;

use crate::settings::ResolvedConfig;

pub(crate) type Controller = PanelController<WorkspaceFolders, DiskProbe, HtmlRenderer>;

/// Build the panel controller described by the resolved configuration.
///
/// Without configured folders the workspace is the directory of `document`,
/// or the current directory when no document is given.
pub(crate) fn build_controller(config: &ResolvedConfig, document: Option<&Path>) -> Result<Controller> {
	let workspace = workspace_for(&config.workspace_folders, document)?;
	debug!(folders = ?workspace.folders(), "workspace resolved");
	Ok(PanelController::new(
		workspace,
		DiskProbe,
		HtmlRenderer::new(config.page_title.clone()),
	))
}

fn workspace_for(folders: &[PathBuf], document: Option<&Path>) -> Result<WorkspaceFolders> {
	if !folders.is_empty() {
		return Ok(WorkspaceFolders::new(folders.iter().cloned()));
	}

	let fallback = match document.and_then(Path::parent) {
		Some(parent) => normalize_path(parent),
		None => normalize_path(&env::current_dir()?),
	};
	Ok(WorkspaceFolders::new([fallback]))
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn configured_folders_win() {
		let workspace =
			workspace_for(&[PathBuf::from("/a"), PathBuf::from("/b")], Some(Path::new("/c/d.md")))
				.unwrap();
		assert_eq!(workspace.folders(), &[PathBuf::from("/a"), PathBuf::from("/b")]);
	}

	#[test]
	fn document_directory_is_the_fallback() {
		let workspace = workspace_for(&[], Some(Path::new("/c/d.md"))).unwrap();
		assert_eq!(workspace.folders(), &[PathBuf::from("/c")]);
	}
}
