use clap::ValueEnum;

/// Output formats supported by the CLI utility.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, ValueEnum)]
pub(crate) enum OutputFormat {
	#[default]
	Html,
	Plain,
	Json,
}

impl OutputFormat {
	/// Return the identifier used in configuration files.
	pub(crate) fn as_str(self) -> &'static str {
		match self {
			OutputFormat::Html => "html",
			OutputFormat::Plain => "plain",
			OutputFormat::Json => "json",
		}
	}

	pub(crate) fn parse(value: &str) -> Option<Self> {
		match value.trim().to_ascii_lowercase().as_str() {
			"html" => Some(Self::Html),
			"plain" => Some(Self::Plain),
			"json" => Some(Self::Json),
			_ => None,
		}
	}
}
