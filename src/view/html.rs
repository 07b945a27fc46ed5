use std::fmt::Write;
use std::path::Path;

use super::{ImageView, PanelRenderer, PanelView};

pub const DEFAULT_PAGE_TITLE: &str = "Image Comments";

/// Click handler for the panel image. Posts an `openImageFile` message
/// carrying the absolute file path stored on the element.
const CLICK_SCRIPT: &str = r#"<script type="text/javascript">
	(function () {
		const host = typeof acquireVsCodeApi === 'function' ? acquireVsCodeApi() : window.parent;
		document.querySelector('#imageView').addEventListener('click', (event) => {
			const file = event.target.dataset.file;
			if (file) {
				host.postMessage({ type: 'openImageFile', file: file }, '*');
			}
		});
	}());
</script>"#;

/// Renders panel and preview pages as standalone HTML documents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HtmlRenderer {
	page_title: String,
}

impl Default for HtmlRenderer {
	fn default() -> Self {
		Self::new(DEFAULT_PAGE_TITLE)
	}
}

impl HtmlRenderer {
	pub fn new(page_title: impl Into<String>) -> Self {
		Self {
			page_title: page_title.into(),
		}
	}

	fn page(&self, has_content: bool, body: &str) -> String {
		let mut html = String::new();
		let _ = writeln!(html, "<!DOCTYPE html>");
		let _ = writeln!(html, "<html lang=\"en\">");
		let _ = writeln!(html, "<head>");
		let _ = writeln!(html, "<meta charset=\"UTF-8\">");
		let _ = writeln!(html, "<title>{}</title>", html_escape(&self.page_title));
		html.push_str(&style(has_content));
		let _ = writeln!(html, "</head>");
		let _ = writeln!(html, "<body>");
		html.push_str(body);
		let _ = writeln!(html, "</body>");
		let _ = writeln!(html, "</html>");
		html
	}

	fn image_body(view: &ImageView) -> String {
		let image = view.image.display().to_string();
		let mut body = String::new();
		let _ = writeln!(
			body,
			"<div id=\"title\">line {}: {}</div>",
			view.display_line(),
			html_escape(&view.caption)
		);
		let _ = write!(
			body,
			"<img id=\"imageView\" src=\"{}\"",
			html_escape(&file_uri(&view.image))
		);
		if view.clickable {
			let _ = write!(body, " data-file=\"{}\"", html_escape(&image));
		}
		let _ = writeln!(body, " />");
		let _ = writeln!(body, "<div id=\"footer\">{}</div>", html_escape(&view.footer));
		if view.clickable {
			let _ = writeln!(body, "{CLICK_SCRIPT}");
		}
		body
	}
}

impl PanelRenderer for HtmlRenderer {
	fn render_panel(&self, view: &PanelView) -> String {
		match view {
			PanelView::Empty => self.page(false, ""),
			PanelView::Image(image) => self.page(true, &Self::image_body(image)),
		}
	}

	fn render_preview(&self, image: &Path) -> String {
		let body = format!("<img src=\"{}\" />\n", html_escape(&file_uri(image)));
		self.page(true, &body)
	}
}

fn style(has_content: bool) -> String {
	let body = if has_content {
		"color: #000000; background: #fefefe;"
	} else {
		""
	};

	format!(
		"<style>
	#title {{ position: fixed; top: 0; width: 100%; background: #fefefe; border-bottom: 1px solid; padding: 3px; }}
	#footer {{ position: fixed; bottom: 0; width: 100%; background: #fefefe; border-top: 1px solid; padding-bottom: 7px; }}
	#imageView {{ margin-top: 24px; margin-bottom: 100px; }}
	body {{ {body} }}
</style>
"
	)
}

fn html_escape(value: &str) -> String {
	v_htmlescape::escape(value).to_string()
}

/// Convert an absolute path into a `file://` URI, percent-encoding bytes
/// outside the unreserved set.
fn file_uri(path: &Path) -> String {
	let raw = path.to_string_lossy().replace('\\', "/");
	let mut uri = String::from("file://");
	if !raw.starts_with('/') {
		uri.push('/');
	}
	for byte in raw.bytes() {
		match byte {
			b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'.' | b'_' | b'~' | b'/' | b':' => {
				uri.push(byte as char)
			}
			other => {
				let _ = write!(uri, "%{other:02X}");
			}
		}
	}
	uri
}
