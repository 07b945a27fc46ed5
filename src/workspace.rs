//! Host collaborators used during path resolution.
//!
//! An editor knows which folders make up the open workspace and can answer
//! whether a file exists. Both are expressed as traits so the resolver stays
//! independent of any particular host; [`WorkspaceFolders`] and [`DiskProbe`]
//! are the implementations used by the command-line front end.

use std::fs;
use std::path::{Component, Path, PathBuf};

/// Maps absolute paths to the workspace folder that contains them.
pub trait WorkspaceResolver {
	/// Return the innermost workspace folder containing `path`, if any.
	fn folder_for(&self, path: &Path) -> Option<PathBuf>;

	/// Render `path` relative to its workspace folder, or verbatim when it
	/// lies outside the workspace.
	fn relative_path(&self, path: &Path) -> String {
		match self.folder_for(path) {
			Some(folder) => match path.strip_prefix(&folder) {
				Ok(rel) if rel.components().next().is_some() => rel.display().to_string(),
				_ => path.display().to_string(),
			},
			None => path.display().to_string(),
		}
	}
}

/// Synchronous existence check for regular files.
pub trait FileProbe {
	fn is_file(&self, path: &Path) -> bool;
}

/// A fixed set of workspace root folders.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WorkspaceFolders {
	folders: Vec<PathBuf>,
}

impl WorkspaceFolders {
	pub fn new<I, P>(folders: I) -> Self
	where
		I: IntoIterator<Item = P>,
		P: Into<PathBuf>,
	{
		let mut folders: Vec<PathBuf> = folders.into_iter().map(Into::into).collect();
		folders.dedup();
		Self { folders }
	}

	pub fn folders(&self) -> &[PathBuf] {
		&self.folders
	}
}

impl WorkspaceResolver for WorkspaceFolders {
	fn folder_for(&self, path: &Path) -> Option<PathBuf> {
		self.folders
			.iter()
			.filter(|folder| path.starts_with(folder))
			.max_by_key(|folder| folder.components().count())
			.cloned()
	}
}

/// Spell `path` the way every other path handed to the resolver is spelled.
///
/// Existing paths are canonicalized. Paths that do not exist are made
/// absolute with `.` and `..` segments removed lexically.
pub fn normalize_path(path: &Path) -> PathBuf {
	if let Ok(canonical) = fs::canonicalize(path) {
		return canonical;
	}

	let absolute = std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf());
	let mut normalized = PathBuf::new();
	for component in absolute.components() {
		match component {
			Component::CurDir => {}
			Component::ParentDir => {
				normalized.pop();
			}
			other => normalized.push(other),
		}
	}
	normalized
}

/// [`FileProbe`] backed by the local filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct DiskProbe;

impl FileProbe for DiskProbe {
	fn is_file(&self, path: &Path) -> bool {
		fs::metadata(path).is_ok_and(|metadata| metadata.is_file())
	}
}

#[cfg(test)]
mod tests {
	use std::fs;

	use tempfile::tempdir;

	use super::*;

	#[test]
	fn innermost_folder_wins() {
		let workspace = WorkspaceFolders::new(["/work", "/work/app", "/other"]);
		assert_eq!(
			workspace.folder_for(Path::new("/work/app/src/main.rs")),
			Some(PathBuf::from("/work/app"))
		);
		assert_eq!(
			workspace.folder_for(Path::new("/work/docs/readme.md")),
			Some(PathBuf::from("/work"))
		);
		assert_eq!(workspace.folder_for(Path::new("/elsewhere/file")), None);
	}

	#[test]
	fn folder_matching_is_component_based() {
		let workspace = WorkspaceFolders::new(["/work/app"]);
		assert_eq!(workspace.folder_for(Path::new("/work/application/x")), None);
	}

	#[test]
	fn relative_path_strips_the_containing_folder() {
		let workspace = WorkspaceFolders::new(["/work"]);
		assert_eq!(
			workspace.relative_path(Path::new("/work/assets/logo.png")),
			Path::new("assets").join("logo.png").display().to_string()
		);
		assert_eq!(
			workspace.relative_path(Path::new("/tmp/logo.png")),
			Path::new("/tmp/logo.png").display().to_string()
		);
	}

	#[test]
	fn normalize_resolves_parent_segments_of_existing_paths() {
		let dir = tempdir().unwrap();
		fs::create_dir_all(dir.path().join("proj")).unwrap();
		fs::create_dir_all(dir.path().join("other")).unwrap();
		fs::write(dir.path().join("proj").join("doc.md"), "").unwrap();

		let dotted = dir.path().join("other").join("..").join("proj").join("doc.md");
		assert_eq!(
			normalize_path(&dotted),
			fs::canonicalize(dir.path().join("proj").join("doc.md")).unwrap()
		);
	}

	#[test]
	fn normalize_cleans_missing_paths_lexically() {
		assert_eq!(
			normalize_path(Path::new("/no/such/./dir/../file.md")),
			PathBuf::from("/no/such/file.md")
		);
	}

	#[test]
	fn disk_probe_only_accepts_regular_files() {
		let dir = tempdir().unwrap();
		let file = dir.path().join("image.png");
		fs::write(&file, b"png").unwrap();

		assert!(DiskProbe.is_file(&file));
		assert!(!DiskProbe.is_file(dir.path()));
		assert!(!DiskProbe.is_file(&dir.path().join("missing.png")));
	}
}
