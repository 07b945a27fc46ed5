use anyhow::Result;
use imgcomments::{AnnotationIndex, PanelRenderer, PanelView};

use super::OutputFormat;

/// Format the panel view in the chosen output format.
pub(crate) fn format_view(
	view: &PanelView,
	format: OutputFormat,
	renderer: &dyn PanelRenderer,
) -> Result<String> {
	Ok(match format {
		OutputFormat::Html => renderer.render_panel(view),
		OutputFormat::Json => serde_json::to_string_pretty(view)?,
		OutputFormat::Plain => match view {
			PanelView::Empty => String::from("No image"),
			PanelView::Image(image) => format!(
				"line {}: {}\n{}",
				image.display_line(),
				image.caption,
				image.image.display()
			),
		},
	})
}

pub(crate) fn print_view(
	view: &PanelView,
	format: OutputFormat,
	renderer: &dyn PanelRenderer,
) -> Result<()> {
	println!("{}", format_view(view, format, renderer)?);
	Ok(())
}

/// Format the annotation index. HTML output has no meaning for an index and
/// falls back to plain text.
pub(crate) fn format_index(index: &AnnotationIndex, format: OutputFormat) -> Result<String> {
	if format == OutputFormat::Json {
		return Ok(serde_json::to_string_pretty(index)?);
	}

	let lines: Vec<String> = index
		.iter()
		.map(|reference| {
			format!(
				"{}\t{}\t{}",
				reference.line + 1,
				reference.title.as_deref().unwrap_or("-"),
				reference.path.as_deref().unwrap_or("-")
			)
		})
		.collect();
	Ok(lines.join("\n"))
}

pub(crate) fn print_index(index: &AnnotationIndex, format: OutputFormat) -> Result<()> {
	let text = format_index(index, format)?;
	if !text.is_empty() {
		println!("{text}");
	}
	Ok(())
}
