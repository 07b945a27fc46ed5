use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Errors raised while loading a document from disk.
#[derive(Debug, Error)]
pub enum DocumentError {
	#[error("failed to read document '{}'", path.display())]
	Read {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},
}

/// Read-only snapshot of the document in the active editor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActiveDocument {
	path: PathBuf,
	text: String,
	cursor_line: usize,
}

impl ActiveDocument {
	pub fn new(path: impl Into<PathBuf>, text: impl Into<String>, cursor_line: usize) -> Self {
		Self {
			path: path.into(),
			text: text.into(),
			cursor_line,
		}
	}

	/// Load `path` from disk with the cursor placed on `cursor_line`.
	pub fn load(path: impl AsRef<Path>, cursor_line: usize) -> Result<Self, DocumentError> {
		let path = path.as_ref();
		let text = fs::read_to_string(path).map_err(|source| DocumentError::Read {
			path: path.to_path_buf(),
			source,
		})?;
		Ok(Self::new(path, text, cursor_line))
	}

	pub fn path(&self) -> &Path {
		&self.path
	}

	pub fn text(&self) -> &str {
		&self.text
	}

	pub fn cursor_line(&self) -> usize {
		self.cursor_line
	}

	pub fn with_cursor_line(mut self, cursor_line: usize) -> Self {
		self.cursor_line = cursor_line;
		self
	}

	pub fn set_cursor_line(&mut self, cursor_line: usize) {
		self.cursor_line = cursor_line;
	}

	pub fn set_text(&mut self, text: impl Into<String>) {
		self.text = text.into();
	}
}
