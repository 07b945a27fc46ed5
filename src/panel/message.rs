use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Messages posted by the panel's page script.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PanelMessage {
	/// The user clicked the displayed image.
	#[serde(rename = "openImageFile")]
	OpenImageFile { file: PathBuf },
}

/// Errors raised while decoding a panel message.
#[derive(Debug, Error)]
pub enum MessageError {
	#[error("panel message is not valid JSON: {0}")]
	Malformed(#[source] serde_json::Error),

	#[error("unsupported panel message type '{0}'")]
	UnknownType(String),
}

impl PanelMessage {
	/// Decode a message payload as posted by the page script.
	pub fn from_json(payload: &str) -> Result<Self, MessageError> {
		let value: serde_json::Value =
			serde_json::from_str(payload).map_err(MessageError::Malformed)?;
		Self::from_value(value)
	}

	pub fn from_value(value: serde_json::Value) -> Result<Self, MessageError> {
		let kind = value
			.get("type")
			.and_then(serde_json::Value::as_str)
			.unwrap_or_default()
			.to_owned();

		match kind.as_str() {
			"openImageFile" => serde_json::from_value(value).map_err(MessageError::Malformed),
			_ => Err(MessageError::UnknownType(kind)),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn decodes_open_image_file() {
		let message = PanelMessage::from_json(r#"{"type":"openImageFile","file":"/w/a.png"}"#)
			.expect("decodes");
		assert_eq!(
			message,
			PanelMessage::OpenImageFile {
				file: PathBuf::from("/w/a.png")
			}
		);
	}

	#[test]
	fn unknown_types_are_reported() {
		let err = PanelMessage::from_json(r#"{"type":"zoom"}"#).unwrap_err();
		assert!(matches!(err, MessageError::UnknownType(kind) if kind == "zoom"));
	}

	#[test]
	fn missing_file_is_malformed() {
		let err = PanelMessage::from_json(r#"{"type":"openImageFile"}"#).unwrap_err();
		assert!(matches!(err, MessageError::Malformed(_)));
	}

	#[test]
	fn invalid_json_is_malformed() {
		assert!(matches!(
			PanelMessage::from_json("{not json"),
			Err(MessageError::Malformed(_))
		));
	}
}
