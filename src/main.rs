mod cli;
mod settings;
mod workflow;

use std::io;
use std::path::Path;

use anyhow::{Result, anyhow};
use cli::{CliArgs, parse_cli, print_index, print_view, run_events};
use imgcomments::{ActiveDocument, PanelRenderer, logging, normalize_path};
use settings::ResolvedConfig;

fn main() -> Result<()> {
	let cli = parse_cli();
	let resolved = settings::load(&cli)?;
	logging::initialize(resolved.log_level.as_deref())?;

	if cli.print_config {
		resolved.print_summary();
	}

	if cli.events {
		return run_event_stream(&cli, &resolved);
	}

	let file = cli
		.file
		.as_deref()
		.ok_or_else(|| anyhow!("a document path is required"))?;
	render_document(&cli, &resolved, file)
}

/// Render the panel, preview or index for a single document.
fn render_document(cli: &CliArgs, config: &ResolvedConfig, file: &Path) -> Result<()> {
	let document = ActiveDocument::load(normalize_path(file), cli.line)?;
	let mut controller = workflow::build_controller(config, Some(document.path()))?;

	if cli.list {
		controller.on_document_opened(&document);
		return print_index(controller.index(), config.output);
	}

	controller.resolve_panel(Some(&document));
	let view = controller.view().cloned().unwrap_or_default();

	if cli.preview {
		if let Some(image) = view.image() {
			println!("{}", controller.renderer().render_preview(&image.image));
		}
		return Ok(());
	}

	print_view(&view, config.output, controller.renderer())
}

/// Run the JSON event loop on stdin/stdout.
fn run_event_stream(cli: &CliArgs, config: &ResolvedConfig) -> Result<()> {
	let document = match cli.file.as_deref() {
		Some(file) => Some(ActiveDocument::load(normalize_path(file), cli.line)?),
		None => None,
	};
	let controller =
		workflow::build_controller(config, document.as_ref().map(ActiveDocument::path))?;
	let mut session = cli::EventSession::new(controller, document);

	let stdin = io::stdin();
	let stdout = io::stdout();
	run_events(&mut session, stdin.lock(), stdout.lock())
}
