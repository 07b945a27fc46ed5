use std::fmt::Write;

use super::ResolvedConfig;

pub(super) fn format_summary(config: &ResolvedConfig) -> String {
	let mut out = String::new();
	let _ = writeln!(out, "Effective configuration:");
	if config.workspace_folders.is_empty() {
		let _ = writeln!(out, "  Workspace folders: (document directory)");
	} else {
		let _ = writeln!(out, "  Workspace folders:");
		for folder in &config.workspace_folders {
			let _ = writeln!(out, "    {}", folder.display());
		}
	}
	let _ = writeln!(out, "  Page title: {}", config.page_title);
	let _ = writeln!(out, "  Output: {}", config.output.as_str());
	let _ = writeln!(
		out,
		"  Log level: {}",
		config.log_level.as_deref().unwrap_or("(default)")
	);
	out
}

pub(super) fn print_summary(config: &ResolvedConfig) {
	eprint!("{}", format_summary(config));
}
