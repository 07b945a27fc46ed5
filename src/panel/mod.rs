//! Panel controller reacting to editor events.
//!
//! The controller owns the annotation index of the active document and the
//! last rendered page. Hosts forward their notifications to the `on_*`
//! methods; every call runs the indexer and resolver synchronously and
//! replaces the stored state in one step.

mod message;

use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::annotations::{AnnotationIndex, index_text};
use crate::document::ActiveDocument;
use crate::resolver::{has_accepted_extension, resolve_path, select_active};
use crate::view::{PanelRenderer, PanelView};
use crate::workspace::{FileProbe, WorkspaceResolver};

pub use message::{MessageError, PanelMessage};

/// Compute the panel view for `document` from an existing index.
pub fn current_view(
	document: &ActiveDocument,
	index: &AnnotationIndex,
	workspace: &dyn WorkspaceResolver,
	probe: &dyn FileProbe,
) -> PanelView {
	let active = select_active(index, document.cursor_line());
	let resolved =
		active.and_then(|reference| resolve_path(reference, document.path(), workspace, probe));
	PanelView::for_reference(active, resolved, workspace)
}

/// An enlarged preview opened from the panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Preview {
	/// Window title, `img: <file name>`.
	pub title: String,
	pub image: PathBuf,
	pub html: String,
}

/// Rendered state of the attached panel.
#[derive(Debug, Clone, Default)]
struct PanelSurface {
	view: PanelView,
	html: String,
	visible: bool,
}

/// Owns the index of the active document and drives the panel.
pub struct PanelController<W, P, R> {
	workspace: W,
	probe: P,
	renderer: R,
	index: AnnotationIndex,
	surface: Option<PanelSurface>,
}

impl<W, P, R> PanelController<W, P, R>
where
	W: WorkspaceResolver,
	P: FileProbe,
	R: PanelRenderer,
{
	pub fn new(workspace: W, probe: P, renderer: R) -> Self {
		Self {
			workspace,
			probe,
			renderer,
			index: AnnotationIndex::default(),
			surface: None,
		}
	}

	pub fn index(&self) -> &AnnotationIndex {
		&self.index
	}

	/// Most recently rendered panel page, if the panel is attached.
	pub fn html(&self) -> Option<&str> {
		self.surface.as_ref().map(|surface| surface.html.as_str())
	}

	pub fn view(&self) -> Option<&PanelView> {
		self.surface.as_ref().map(|surface| &surface.view)
	}

	pub fn is_attached(&self) -> bool {
		self.surface.is_some()
	}

	pub fn is_visible(&self) -> bool {
		self.surface.as_ref().is_some_and(|surface| surface.visible)
	}

	pub fn workspace(&self) -> &W {
		&self.workspace
	}

	pub fn renderer(&self) -> &R {
		&self.renderer
	}

	/// Attach the panel, reveal it and render the active document.
	pub fn resolve_panel(&mut self, document: Option<&ActiveDocument>) {
		let view = PanelView::Empty;
		let html = self.renderer.render_panel(&view);
		self.surface = Some(PanelSurface {
			view,
			html,
			visible: true,
		});
		debug!("image panel attached");

		if let Some(document) = document {
			self.reindex(document);
			self.refresh(document);
		}
	}

	/// Reveal the panel when it is attached.
	pub fn open_panel(&mut self) {
		if let Some(surface) = self.surface.as_mut() {
			surface.visible = true;
		}
	}

	/// The cursor moved: re-render without re-indexing.
	pub fn on_selection_changed(&mut self, document: &ActiveDocument) {
		self.refresh(document);
	}

	/// The text changed: rebuild the index. The panel keeps its current page
	/// until the next selection event.
	pub fn on_document_changed(&mut self, document: &ActiveDocument) {
		self.reindex(document);
	}

	pub fn on_document_opened(&mut self, document: &ActiveDocument) {
		self.reindex(document);
		self.refresh(document);
	}

	/// Another editor became active, or none is.
	pub fn on_active_editor_changed(&mut self, document: Option<&ActiveDocument>) {
		let Some(document) = document else {
			return;
		};
		self.reindex(document);
		self.refresh(document);
	}

	/// Handle a message posted by the panel page.
	pub fn on_message(&mut self, message: PanelMessage) -> Option<Preview> {
		match message {
			PanelMessage::OpenImageFile { file } => self.open_preview(&file),
		}
	}

	fn open_preview(&mut self, file: &Path) -> Option<Preview> {
		let accepted = file.to_str().is_some_and(has_accepted_extension);
		if !accepted || !self.probe.is_file(file) {
			warn!(file = %file.display(), "ignoring preview request for unavailable image");
			return None;
		}

		let name = file
			.file_name()
			.map(|name| name.to_string_lossy().into_owned())
			.unwrap_or_else(|| file.display().to_string());
		let preview = Preview {
			title: format!("img: {name}"),
			image: file.to_path_buf(),
			html: self.renderer.render_preview(file),
		};
		debug!(file = %file.display(), "opened image preview");

		if let Some(surface) = self.surface.as_mut() {
			surface.html = self.renderer.render_panel(&surface.view);
		}

		Some(preview)
	}

	fn reindex(&mut self, document: &ActiveDocument) {
		self.index = index_text(document.text());
		debug!(
			document = %document.path().display(),
			references = self.index.len(),
			"rebuilt annotation index"
		);
	}

	fn refresh(&mut self, document: &ActiveDocument) {
		let Some(surface) = self.surface.as_mut() else {
			return;
		};

		let view = current_view(document, &self.index, &self.workspace, &self.probe);
		surface.html = self.renderer.render_panel(&view);
		surface.view = view;
	}
}
