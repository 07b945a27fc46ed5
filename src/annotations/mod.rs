//! Scan document text for `@img ![title](path)` annotations.
//!
//! The indexer walks the document from the last line to the first so that the
//! produced [`AnnotationIndex`] is ordered by descending line number. The
//! resolver relies on that ordering to find the nearest annotation at or above
//! the cursor with a single forward pass.

use std::sync::LazyLock;

use regex_lite::Regex;
use serde::Serialize;

/// Marker, optional whitespace, bracketed title, optional whitespace, then the
/// path up to (but not requiring) the closing parenthesis.
const ANNOTATION_PATTERN: &str = r"@img\s*!\[([^\]]*)\]\s*\(([^)]*)";

static ANNOTATION: LazyLock<Regex> =
	LazyLock::new(|| Regex::new(ANNOTATION_PATTERN).expect("annotation pattern compiles"));

/// A single annotation occurrence in the scanned document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ImageReference {
	/// Zero-based line the annotation was found on.
	pub line: usize,
	pub title: Option<String>,
	/// Declared path, verbatim. `None` marks an annotation that cannot be resolved.
	pub path: Option<String>,
}

impl ImageReference {
	pub fn new(line: usize, title: Option<String>, path: Option<String>) -> Self {
		Self { line, title, path }
	}
}

/// All annotations of one document, last occurrence first.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct AnnotationIndex {
	references: Vec<ImageReference>,
}

impl AnnotationIndex {
	pub fn is_empty(&self) -> bool {
		self.references.is_empty()
	}

	pub fn len(&self) -> usize {
		self.references.len()
	}

	pub fn iter(&self) -> std::slice::Iter<'_, ImageReference> {
		self.references.iter()
	}

	/// The reference with the smallest line number.
	pub fn topmost(&self) -> Option<&ImageReference> {
		self.references.last()
	}

	pub fn as_slice(&self) -> &[ImageReference] {
		&self.references
	}
}

impl<'a> IntoIterator for &'a AnnotationIndex {
	type Item = &'a ImageReference;
	type IntoIter = std::slice::Iter<'a, ImageReference>;

	fn into_iter(self) -> Self::IntoIter {
		self.iter()
	}
}

/// Parse the first annotation on `text`, tagging it with `line`.
pub fn parse_annotation(line: usize, text: &str) -> Option<ImageReference> {
	let captures = ANNOTATION.captures(text)?;
	let capture = |group: usize| {
		captures
			.get(group)
			.map(|m| m.as_str())
			.filter(|value| !value.is_empty())
			.map(str::to_owned)
	};

	Some(ImageReference::new(line, capture(1), capture(2)))
}

/// Build the index of a document given as individual lines.
pub fn index_lines<S: AsRef<str>>(lines: &[S]) -> AnnotationIndex {
	let references = lines
		.iter()
		.enumerate()
		.rev()
		.filter_map(|(line, text)| parse_annotation(line, text.as_ref()))
		.collect();

	AnnotationIndex { references }
}

/// Build the index of a full document, splitting it on `\n`.
pub fn index_text(text: &str) -> AnnotationIndex {
	let lines: Vec<&str> = text.split('\n').collect();
	index_lines(&lines)
}
