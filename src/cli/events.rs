//! Drive the panel controller from JSON editor events read line by line.
//!
//! Each input line is one event, for example
//! `{"event": "open", "path": "notes.md", "line": 4}`. Every page the panel
//! renders is written back as one JSON line so a host can replace its view.

use std::io::{BufRead, Write};
use std::path::PathBuf;

use anyhow::Result;
use imgcomments::{
	ActiveDocument, DocumentError, MessageError, PanelMessage, Preview, normalize_path,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

use crate::workflow::Controller;

/// Notifications a host forwards to the panel.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "event", rename_all = "lowercase")]
pub(crate) enum HostEvent {
	/// A document was opened; `text` defaults to the file contents.
	Open {
		path: PathBuf,
		#[serde(default)]
		text: Option<String>,
		#[serde(default)]
		line: usize,
	},
	/// The active document's text changed.
	Change { text: String },
	/// The cursor moved in the active document.
	Select { line: usize },
	/// Another editor became active; no path means none is.
	Switch {
		#[serde(default)]
		path: Option<PathBuf>,
		#[serde(default)]
		text: Option<String>,
		#[serde(default)]
		line: usize,
	},
	/// A message posted by the panel page.
	Message { payload: serde_json::Value },
	/// Reveal the panel.
	Show,
}

/// Pages emitted back to the host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub(crate) enum HostOutput {
	Panel { html: String },
	Preview { title: String, image: PathBuf, html: String },
}

/// Errors that skip a single event without ending the session.
#[derive(Debug, Error)]
pub(crate) enum EventError {
	#[error("line {line}: malformed event: {source}")]
	Decode {
		line: usize,
		#[source]
		source: serde_json::Error,
	},

	#[error(transparent)]
	Document(#[from] DocumentError),

	#[error(transparent)]
	Message(#[from] MessageError),

	#[error("'{0}' event received without an active document")]
	NoActiveDocument(&'static str),
}

/// Event loop state: the controller plus the active document.
pub(crate) struct EventSession {
	controller: Controller,
	active: Option<ActiveDocument>,
}

impl EventSession {
	/// Attach the panel to `controller`, rendering `active` when given.
	pub(crate) fn new(mut controller: Controller, active: Option<ActiveDocument>) -> Self {
		controller.resolve_panel(active.as_ref());
		Self { controller, active }
	}

	#[cfg(test)]
	pub(crate) fn controller(&self) -> &Controller {
		&self.controller
	}

	fn panel(&self) -> Vec<HostOutput> {
		self.controller
			.html()
			.map(|html| HostOutput::Panel {
				html: html.to_owned(),
			})
			.into_iter()
			.collect()
	}

	/// Apply one event and return the pages to send back.
	pub(crate) fn apply(&mut self, event: HostEvent) -> Result<Vec<HostOutput>, EventError> {
		match event {
			HostEvent::Open { path, text, line } => {
				let document = load_document(path, text, line)?;
				self.controller.on_document_opened(&document);
				self.active = Some(document);
				Ok(self.panel())
			}
			HostEvent::Change { text } => {
				let document = self
					.active
					.as_mut()
					.ok_or(EventError::NoActiveDocument("change"))?;
				document.set_text(text);
				self.controller.on_document_changed(document);
				Ok(Vec::new())
			}
			HostEvent::Select { line } => {
				let document = self
					.active
					.as_mut()
					.ok_or(EventError::NoActiveDocument("select"))?;
				document.set_cursor_line(line);
				self.controller.on_selection_changed(document);
				Ok(self.panel())
			}
			HostEvent::Switch { path: None, .. } => {
				self.active = None;
				self.controller.on_active_editor_changed(None);
				Ok(Vec::new())
			}
			HostEvent::Switch {
				path: Some(path),
				text,
				line,
			} => {
				let document = load_document(path, text, line)?;
				self.controller.on_active_editor_changed(Some(&document));
				self.active = Some(document);
				Ok(self.panel())
			}
			HostEvent::Message { payload } => {
				let message = PanelMessage::from_value(payload)?;
				let mut outputs: Vec<HostOutput> = self
					.controller
					.on_message(message)
					.map(preview_output)
					.into_iter()
					.collect();
				outputs.extend(self.panel());
				Ok(outputs)
			}
			HostEvent::Show => {
				self.controller.open_panel();
				Ok(self.panel())
			}
		}
	}
}

fn preview_output(preview: Preview) -> HostOutput {
	HostOutput::Preview {
		title: preview.title,
		image: preview.image,
		html: preview.html,
	}
}

fn load_document(
	path: PathBuf,
	text: Option<String>,
	line: usize,
) -> Result<ActiveDocument, DocumentError> {
	let path = normalize_path(&path);
	match text {
		Some(text) => Ok(ActiveDocument::new(path, text, line)),
		None => ActiveDocument::load(path, line),
	}
}

fn decode(line: usize, input: &str) -> Result<HostEvent, EventError> {
	serde_json::from_str(input).map_err(|source| EventError::Decode { line, source })
}

/// Read events from `input` until EOF, writing rendered pages to `output`.
pub(crate) fn run_events<R: BufRead, W: Write>(
	session: &mut EventSession,
	input: R,
	mut output: W,
) -> Result<()> {
	for page in session.panel() {
		writeln!(output, "{}", serde_json::to_string(&page)?)?;
	}

	for (number, line) in input.lines().enumerate() {
		let line = line?;
		if line.trim().is_empty() {
			continue;
		}

		let outputs = match decode(number + 1, &line).and_then(|event| {
			debug!(?event, "host event");
			session.apply(event)
		}) {
			Ok(outputs) => outputs,
			Err(err) => {
				warn!("skipping event: {err}");
				continue;
			}
		};

		for page in outputs {
			writeln!(output, "{}", serde_json::to_string(&page)?)?;
		}
		output.flush()?;
	}

	Ok(())
}
