//! Pick the annotation that applies to the cursor and locate its image.

use std::path::{Path, PathBuf};

use tracing::trace;

use crate::annotations::{AnnotationIndex, ImageReference};
use crate::workspace::{FileProbe, WorkspaceResolver};

/// Image formats the panel is willing to display.
///
/// SVG is only ever used as an `<img>` source, never embedded inline.
pub const ACCEPTED_IMAGE_EXTENSIONS: &[&str] = &["png", "jpeg", "jpg", "svg"];

/// Return the reference shown for `cursor_line`.
///
/// The nearest annotation at or above the cursor wins. A cursor above every
/// annotation falls back to the topmost one, so the panel is only empty when
/// the document has no annotations at all.
pub fn select_active(index: &AnnotationIndex, cursor_line: usize) -> Option<&ImageReference> {
	index
		.iter()
		.find(|reference| reference.line <= cursor_line)
		.or_else(|| index.topmost())
}

/// Whether `path` ends in one of [`ACCEPTED_IMAGE_EXTENSIONS`], ignoring case.
pub fn has_accepted_extension(path: &str) -> bool {
	let Some((_, extension)) = path.rsplit_once('.') else {
		return false;
	};

	ACCEPTED_IMAGE_EXTENSIONS
		.iter()
		.any(|accepted| extension.eq_ignore_ascii_case(accepted))
}

/// Locate the image declared by `reference` for a document at `document`.
///
/// The declared path is tried against the workspace folder holding the
/// document, then against the folder enclosing that folder's parent, and so on
/// until no workspace folder contains the next step.
pub fn resolve_path(
	reference: &ImageReference,
	document: &Path,
	workspace: &dyn WorkspaceResolver,
	probe: &dyn FileProbe,
) -> Option<PathBuf> {
	let declared = reference.path.as_deref()?;
	if !has_accepted_extension(declared) {
		trace!(line = reference.line, path = declared, "rejected image extension");
		return None;
	}

	let relative = declared.trim_start_matches(['/', '\\']);
	let mut folder = workspace.folder_for(document);

	while let Some(current) = folder {
		let candidate = current.join(relative);
		trace!(candidate = %candidate.display(), "probing image candidate");
		if probe.is_file(&candidate) {
			return Some(candidate);
		}

		let next = current.parent().and_then(|parent| workspace.folder_for(parent));
		if next.as_ref() == Some(&current) {
			break;
		}
		folder = next;
	}

	trace!(line = reference.line, path = declared, "image not found in workspace");
	None
}

#[cfg(test)]
mod tests;
