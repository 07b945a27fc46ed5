use std::path::PathBuf;

use clap::{ArgAction, ColorChoice, Parser};

use super::options::OutputFormat;
use super::styles::{cli_styles, long_version};

/// Command-line arguments accepted by the `imgcomments` binary.
#[derive(Parser, Debug)]
#[command(
	name = "imgcomments",
	version,
	long_version = long_version(),
	about = "Show the image annotated nearest to a line of a source file",
	color = ColorChoice::Auto,
	styles = cli_styles()
)]
pub(crate) struct CliArgs {
	#[arg(
		value_name = "FILE",
		required_unless_present = "events",
		help = "Document to scan for @img annotations"
	)]
	pub(crate) file: Option<PathBuf>,
	#[arg(
		short = 'l',
		long,
		value_name = "LINE",
		default_value_t = 0,
		help = "Zero-based cursor line used to pick the annotation"
	)]
	pub(crate) line: usize,
	#[arg(
		short = 'w',
		long = "workspace",
		value_name = "DIR",
		action = ArgAction::Append,
		help = "Workspace folder used to resolve image paths (default: the document's directory)"
	)]
	pub(crate) workspace: Vec<PathBuf>,
	#[arg(
		short,
		long = "config",
		value_name = "FILE",
		env = "IMGCOMMENTS_CONFIG",
		action = ArgAction::Append,
		help = "Additional configuration file to merge (default: none)"
	)]
	pub(crate) config: Vec<PathBuf>,
	#[arg(
		short = 'n',
		long = "no-config",
		help = "Skip loading default configuration files (default: disabled)"
	)]
	pub(crate) no_config: bool,
	#[arg(
		long = "page-title",
		value_name = "TITLE",
		help = "Title of the rendered panel page (default: Image Comments)"
	)]
	pub(crate) page_title: Option<String>,
	#[arg(
		long,
		conflicts_with_all = ["preview", "events"],
		help = "Print the annotation index instead of the panel (default: disabled)"
	)]
	pub(crate) list: bool,
	#[arg(
		long,
		conflicts_with = "events",
		help = "Print the enlarged preview page of the active image (default: disabled)"
	)]
	pub(crate) preview: bool,
	#[arg(
		long,
		help = "Read JSON editor events from stdin and print rendered pages (default: disabled)"
	)]
	pub(crate) events: bool,
	#[arg(
		short = 'o',
		long = "output",
		value_enum,
		help = "Choose how to print the panel (default: html)"
	)]
	pub(crate) output: Option<OutputFormat>,
	#[arg(
		long = "log-level",
		value_name = "LEVEL",
		env = "IMGCOMMENTS_LOG_LEVEL",
		help = "Log filter used when IMGCOMMENTS_LOG is unset (default: warn)"
	)]
	pub(crate) log_level: Option<String>,
	#[arg(
		short = 'p',
		long = "print-config",
		help = "Print the resolved configuration to stderr before running (default: disabled)"
	)]
	pub(crate) print_config: bool,
}
