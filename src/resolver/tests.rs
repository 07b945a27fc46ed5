use std::collections::HashSet;
use std::fs;

use tempfile::tempdir;

use super::*;
use crate::annotations::index_text;
use crate::workspace::{DiskProbe, WorkspaceFolders};

const SCENARIO: &str = "intro\n@img ![Diagram](assets/diagram.png)\nbody text\n@img ![](img/x.jpg)";

/// Probe that reports a fixed set of paths as existing files.
struct KnownFiles(HashSet<PathBuf>);

impl KnownFiles {
	fn new<const N: usize>(paths: [&str; N]) -> Self {
		Self(paths.into_iter().map(PathBuf::from).collect())
	}
}

impl FileProbe for KnownFiles {
	fn is_file(&self, path: &Path) -> bool {
		self.0.contains(path)
	}
}

fn reference(path: &str) -> ImageReference {
	ImageReference::new(0, None, Some(path.into()))
}

#[test]
fn empty_index_has_no_active_reference() {
	let index = index_text("nothing here\nat all");
	for cursor in [0, 1, 50] {
		assert_eq!(select_active(&index, cursor), None);
	}
}

#[test]
fn cursor_below_annotation_selects_nearest_above() {
	let index = index_text(SCENARIO);
	let active = select_active(&index, 2).expect("active reference");
	assert_eq!(active.line, 1);
	assert_eq!(active.title.as_deref(), Some("Diagram"));
	assert_eq!(active.path.as_deref(), Some("assets/diagram.png"));
}

#[test]
fn cursor_on_annotation_line_selects_it() {
	let index = index_text(SCENARIO);
	let active = select_active(&index, 3).expect("active reference");
	assert_eq!(active.line, 3);
	assert_eq!(active.title, None);
	assert_eq!(active.path.as_deref(), Some("img/x.jpg"));
}

#[test]
fn cursor_above_all_annotations_falls_back_to_topmost() {
	let index = index_text(SCENARIO);
	let active = select_active(&index, 0).expect("fallback reference");
	assert_eq!(active.line, 1);
	assert_eq!(active.path.as_deref(), Some("assets/diagram.png"));
}

#[test]
fn selection_picks_greatest_line_not_after_cursor() {
	let text = (0..20)
		.map(|line| {
			if line % 5 == 2 {
				format!("@img ![{line}](i{line}.png)")
			} else {
				String::from("code")
			}
		})
		.collect::<Vec<_>>()
		.join("\n");
	let index = index_text(&text);

	for cursor in 0..25 {
		let expected = [17, 12, 7, 2]
			.into_iter()
			.find(|line| *line <= cursor)
			.unwrap_or(2);
		let first = select_active(&index, cursor).map(|r| r.line);
		assert_eq!(first, Some(expected), "cursor {cursor}");
		assert_eq!(select_active(&index, cursor).map(|r| r.line), first);
	}
}

#[test]
fn accepted_extensions_ignore_case() {
	for path in ["a.png", "b.JPEG", "c.Jpg", "dir.v2/d.svg", ".png"] {
		assert!(has_accepted_extension(path), "{path}");
	}
	for path in ["a.gif", "b.bmp", "noext", "png", "a.png.txt", "a.png "] {
		assert!(!has_accepted_extension(path), "{path}");
	}
}

#[test]
fn rejected_extension_never_resolves_even_when_present() {
	let probe = KnownFiles::new(["/work/assets/logo.bmp", "/work/assets/anim.gif", "/work/assets/raw"]);
	let workspace = WorkspaceFolders::new(["/work"]);
	let document = Path::new("/work/src/main.rs");

	for path in ["assets/logo.bmp", "assets/anim.gif", "assets/raw"] {
		assert_eq!(resolve_path(&reference(path), document, &workspace, &probe), None);
	}
}

#[test]
fn absent_path_never_resolves() {
	let probe = KnownFiles::new([]);
	let workspace = WorkspaceFolders::new(["/work"]);
	let reference = ImageReference::new(0, Some("title".into()), None);
	assert_eq!(
		resolve_path(&reference, Path::new("/work/a.rs"), &workspace, &probe),
		None
	);
}

#[test]
fn resolves_against_document_folder_first() {
	let probe = KnownFiles::new(["/work/app/img/x.png", "/work/img/x.png"]);
	let workspace = WorkspaceFolders::new(["/work", "/work/app"]);
	let resolved = resolve_path(
		&reference("img/x.png"),
		Path::new("/work/app/src/lib.rs"),
		&workspace,
		&probe,
	);
	assert_eq!(resolved, Some(PathBuf::from("/work/app/img/x.png")));
}

#[test]
fn walks_up_to_enclosing_workspace_folders() {
	let probe = KnownFiles::new(["/work/assets/shared.svg"]);
	let workspace = WorkspaceFolders::new(["/work", "/work/app", "/work/app/nested"]);
	let resolved = resolve_path(
		&reference("assets/shared.svg"),
		Path::new("/work/app/nested/doc.md"),
		&workspace,
		&probe,
	);
	assert_eq!(resolved, Some(PathBuf::from("/work/assets/shared.svg")));
}

#[test]
fn walk_stops_outside_the_workspace() {
	let probe = KnownFiles::new(["/assets/outside.png"]);
	let workspace = WorkspaceFolders::new(["/work"]);
	assert_eq!(
		resolve_path(
			&reference("assets/outside.png"),
			Path::new("/work/doc.md"),
			&workspace,
			&probe
		),
		None
	);
}

#[test]
fn document_outside_workspace_never_resolves() {
	let probe = KnownFiles::new(["/work/a.png"]);
	let workspace = WorkspaceFolders::new(["/work"]);
	assert_eq!(
		resolve_path(&reference("a.png"), Path::new("/tmp/doc.md"), &workspace, &probe),
		None
	);
}

#[test]
fn leading_separator_is_joined_not_absolute() {
	let probe = KnownFiles::new(["/work/assets/a.png"]);
	let workspace = WorkspaceFolders::new(["/work"]);
	assert_eq!(
		resolve_path(&reference("/assets/a.png"), Path::new("/work/doc.md"), &workspace, &probe),
		Some(PathBuf::from("/work/assets/a.png"))
	);
}

#[test]
fn root_workspace_folder_terminates() {
	let probe = KnownFiles::new([]);
	let workspace = WorkspaceFolders::new(["/"]);
	assert_eq!(
		resolve_path(&reference("missing.png"), Path::new("/doc.md"), &workspace, &probe),
		None
	);
}

#[test]
fn resolves_on_disk_through_nested_folders() {
	let dir = tempdir().unwrap();
	let root = dir.path().to_path_buf();
	let nested = root.join("packages").join("web");
	fs::create_dir_all(nested.join("src")).unwrap();
	fs::create_dir_all(root.join("assets")).unwrap();
	fs::write(root.join("assets").join("logo.png"), b"png").unwrap();
	fs::write(root.join("assets").join("logo.bmp"), b"bmp").unwrap();

	let workspace = WorkspaceFolders::new([root.clone(), nested.clone()]);
	let document = nested.join("src").join("index.ts");

	assert_eq!(
		resolve_path(&reference("assets/logo.png"), &document, &workspace, &DiskProbe),
		Some(root.join("assets/logo.png"))
	);
	assert_eq!(
		resolve_path(&reference("assets/logo.bmp"), &document, &workspace, &DiskProbe),
		None
	);
}
