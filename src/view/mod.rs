//! Structured description of what the image panel displays.
//!
//! [`PanelView`] is produced from the active reference and handed to a
//! [`PanelRenderer`], which owns the actual markup. [`HtmlRenderer`] renders
//! the webview pages an editor panel expects.

mod html;

use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::annotations::ImageReference;
use crate::workspace::WorkspaceResolver;

pub use html::{DEFAULT_PAGE_TITLE, HtmlRenderer};

/// Turns view models into whatever representation the host displays.
pub trait PanelRenderer {
	fn render_panel(&self, view: &PanelView) -> String;

	/// Render the enlarged preview of `image`.
	fn render_preview(&self, image: &Path) -> String;
}

/// Content of the side panel.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "lowercase")]
pub enum PanelView {
	/// Placeholder shown when nothing resolves.
	#[default]
	Empty,
	Image(ImageView),
}

/// A resolved image ready for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ImageView {
	/// Zero-based line of the annotation.
	pub line: usize,
	/// Annotation title, or the workspace-relative image path when untitled.
	pub caption: String,
	pub image: PathBuf,
	/// Workspace-relative image path.
	pub footer: String,
	pub clickable: bool,
}

impl ImageView {
	/// One-based line number as shown to the user.
	pub fn display_line(&self) -> usize {
		self.line + 1
	}
}

impl PanelView {
	/// Build the view for `reference`, given the outcome of path resolution.
	pub fn for_reference(
		reference: Option<&ImageReference>,
		resolved: Option<PathBuf>,
		workspace: &dyn WorkspaceResolver,
	) -> Self {
		let (Some(reference), Some(image)) = (reference, resolved) else {
			return Self::Empty;
		};

		let footer = workspace.relative_path(&image);
		let caption = reference
			.title
			.clone()
			.unwrap_or_else(|| footer.clone());

		Self::Image(ImageView {
			line: reference.line,
			caption,
			image,
			footer,
			clickable: true,
		})
	}

	pub fn is_empty(&self) -> bool {
		matches!(self, Self::Empty)
	}

	pub fn image(&self) -> Option<&ImageView> {
		match self {
			Self::Image(view) => Some(view),
			Self::Empty => None,
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::workspace::WorkspaceFolders;

	#[test]
	fn unresolved_reference_is_empty() {
		let workspace = WorkspaceFolders::new(["/work"]);
		let reference = ImageReference::new(1, Some("t".into()), Some("a.png".into()));
		assert!(PanelView::for_reference(Some(&reference), None, &workspace).is_empty());
		assert!(
			PanelView::for_reference(None, Some(PathBuf::from("/work/a.png")), &workspace)
				.is_empty()
		);
	}

	#[test]
	fn titled_reference_uses_title_as_caption() {
		let workspace = WorkspaceFolders::new(["/work"]);
		let reference = ImageReference::new(1, Some("Diagram".into()), Some("d.png".into()));
		let view = PanelView::for_reference(
			Some(&reference),
			Some(PathBuf::from("/work/d.png")),
			&workspace,
		);
		let image = view.image().expect("image view");
		assert_eq!(image.caption, "Diagram");
		assert_eq!(image.footer, "d.png");
		assert_eq!(image.display_line(), 2);
		assert!(image.clickable);
	}

	#[test]
	fn untitled_reference_uses_relative_path_as_caption() {
		let workspace = WorkspaceFolders::new(["/work"]);
		let reference = ImageReference::new(3, None, Some("x.jpg".into()));
		let view = PanelView::for_reference(
			Some(&reference),
			Some(PathBuf::from("/work/x.jpg")),
			&workspace,
		);
		assert_eq!(view.image().map(|image| image.caption.as_str()), Some("x.jpg"));
	}

	#[test]
	fn view_serializes_with_state_tag() {
		let value = serde_json::to_value(PanelView::Empty).unwrap();
		assert_eq!(value["state"], "empty");
	}
}
