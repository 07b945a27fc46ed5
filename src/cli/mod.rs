mod args;
mod events;
mod output;

pub(crate) use args::{CliArgs, OutputFormat, parse_cli};
pub(crate) use events::{EventSession, run_events};
pub(crate) use output::{print_index, print_view};
