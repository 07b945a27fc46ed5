//! Index `@img ![title](path)` comment annotations and drive an image panel.
//!
//! The indexing and resolution core ([`annotations`], [`resolver`]) is made of
//! pure functions over document text and a cursor line. [`PanelController`]
//! keeps the per-session state and reacts to editor events, while
//! [`view::PanelRenderer`] implementations turn the resulting [`PanelView`]
//! into markup.

pub mod annotations;
pub mod app_dirs;
pub mod document;
pub mod logging;
pub mod panel;
pub mod resolver;
pub mod view;
pub mod workspace;

pub use annotations::{AnnotationIndex, ImageReference, index_lines, index_text};
pub use document::{ActiveDocument, DocumentError};
pub use panel::{MessageError, PanelController, PanelMessage, Preview, current_view};
pub use resolver::{ACCEPTED_IMAGE_EXTENSIONS, has_accepted_extension, resolve_path, select_active};
pub use view::{HtmlRenderer, ImageView, PanelRenderer, PanelView};
pub use workspace::{DiskProbe, FileProbe, WorkspaceFolders, WorkspaceResolver, normalize_path};
