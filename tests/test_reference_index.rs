//! Reference index behavior over real project directories.

use std::fs;
use std::path::{Path, PathBuf};

use nukita::hir::{Location, ReferenceIndex, SharedReferenceIndex};
use nukita::project::Project;
use rstest::rstest;

fn write(root: &Path, rel: &str, text: &str) -> PathBuf {
    let path = root.join(rel);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(&path, text).unwrap();
    path
}

fn sample_project() -> (tempfile::TempDir, Project) {
    let dir = tempfile::tempdir().unwrap();
    write(
        dir.path(),
        "a.ad",
        "fun area(w, h) {\n  return w * h\n}\nprint(area(2, 3))\n",
    );
    write(dir.path(), "lib/b.ad", "var x = area(1, 1)\n");
    write(dir.path(), "notes.txt", "area area area\n");
    let project = Project::new("sample", dir.path());
    (dir, project)
}

#[test]
fn test_references_in_traversal_order() {
    let (dir, project) = sample_project();
    let mut index = ReferenceIndex::new();

    let refs = index.find_references(&project, "area");
    let a = dir.path().join("a.ad");
    let b = dir.path().join("lib/b.ad");
    assert_eq!(
        refs,
        vec![
            format!("{}:1", a.display()),
            format!("{}:4", a.display()),
            format!("{}:1", b.display()),
        ]
    );
}

#[test]
fn test_definition_line_counts_as_reference() {
    let (_dir, project) = sample_project();
    let mut index = ReferenceIndex::new();
    let def = index.goto_definition(&project, "area").unwrap();

    let refs = index.references("area");
    assert!(refs.contains(&def));
    assert_eq!(def.line, 1);
}

#[test]
fn test_queries_build_lazily() {
    let (_dir, project) = sample_project();
    let mut index = ReferenceIndex::new();
    assert!(!index.is_built());
    assert!(index.references("area").is_empty());

    assert!(index.goto_definition(&project, "area").is_some());
    assert!(index.is_built());
}

#[test]
fn test_last_definition_wins() {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "a.ad", "fun f() {\n}\n");
    let second = write(dir.path(), "b.ad", "\nfun f() {\n}\n");
    let project = Project::new("dup", dir.path());

    let mut index = ReferenceIndex::new();
    assert_eq!(index.goto_definition(&project, "f"), Some(Location::new(second, 2)));
    assert_eq!(index.find_references(&project, "f").len(), 2);
}

#[test]
fn test_build_index_is_idempotent() {
    let (_dir, project) = sample_project();
    let mut index = ReferenceIndex::new();

    index.build_index(&project);
    let first: Vec<_> = ["area", "w", "x", "print"]
        .iter()
        .map(|s| (index.references(s), index.definition(s)))
        .collect();

    index.build_index(&project);
    let second: Vec<_> = ["area", "w", "x", "print"]
        .iter()
        .map(|s| (index.references(s), index.definition(s)))
        .collect();

    assert_eq!(first, second);
}

#[test]
fn test_rebuild_sees_edits() {
    let (dir, project) = sample_project();
    let mut index = ReferenceIndex::new();
    index.build_index(&project);
    assert_eq!(index.definition("volume"), None);

    write(dir.path(), "lib/b.ad", "fun volume(x) {\n}\n");
    assert_eq!(index.definition("volume"), None);

    index.build_index(&project);
    assert_eq!(
        index.definition("volume"),
        Some(Location::new(dir.path().join("lib/b.ad"), 1))
    );
    assert!(index.definition("area").is_some());
}

#[test]
fn test_non_source_files_ignored() {
    let (_dir, project) = sample_project();
    let mut index = ReferenceIndex::new();
    index.build_index(&project);

    assert_eq!(index.tables().file_count(), 2);
    assert!(index.references("area").iter().all(|l| l.path.extension().unwrap() == "ad"));
}

#[test]
fn test_invalid_utf8_is_tolerated() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("bin.ad");
    fs::write(&path, b"fun g\xff\xfe() {\n}\ng()\n").unwrap();
    let project = Project::new("bytes", dir.path());

    let mut index = ReferenceIndex::new();
    assert_eq!(index.goto_definition(&project, "g"), Some(Location::new(&path, 1)));
    assert_eq!(index.find_references(&project, "g").len(), 2);
}

#[cfg(unix)]
#[test]
fn test_unreadable_file_is_skipped() {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "good.ad", "fun ok() {\n}\n");
    // Dangling symlink: listed, but fails to read.
    let broken = dir.path().join("broken.ad");
    std::os::unix::fs::symlink(dir.path().join("missing"), &broken).unwrap();
    let project = Project::new("partial", dir.path());
    assert!(project.source_files().contains(&broken));

    let mut index = ReferenceIndex::new();
    index.build_index(&project);
    assert_eq!(index.tables().file_count(), 1);
    assert!(index.definition("ok").is_some());
}

#[cfg(unix)]
#[test]
fn test_symlinked_source_is_indexed() {
    let shared = tempfile::tempdir().unwrap();
    let real = write(shared.path(), "helpers.ad", "fun helper() {\n}\n");

    let dir = tempfile::tempdir().unwrap();
    let main = write(dir.path(), "main.ad", "helper()\n");
    let util = dir.path().join("util.ad");
    std::os::unix::fs::symlink(&real, &util).unwrap();
    let project = Project::new("linked", dir.path());

    let mut index = ReferenceIndex::new();
    assert_eq!(
        index.find_references(&project, "helper"),
        vec![format!("{}:1", main.display()), format!("{}:1", util.display())]
    );
    assert_eq!(index.goto_definition(&project, "helper"), Some(Location::new(util, 1)));
}

#[test]
fn test_form_feed_ends_a_line() {
    let dir = tempfile::tempdir().unwrap();
    let path = write(dir.path(), "paged.ad", "// page one\x0cfun f() {\n}\n");
    let project = Project::new("paged", dir.path());

    let mut index = ReferenceIndex::new();
    assert_eq!(index.goto_definition(&project, "f"), Some(Location::new(path, 2)));
}

#[rstest]
#[case("fun", 1)]
#[case("return", 1)]
#[case("h", 2)]
#[case("missing", 0)]
fn test_keyword_tokens_are_indexed(#[case] symbol: &str, #[case] count: usize) {
    let (_dir, project) = sample_project();
    let mut index = ReferenceIndex::new();
    assert_eq!(index.find_references(&project, symbol).len(), count);
}

#[test]
fn test_shared_index_snapshots_survive_rebuild() {
    let (dir, project) = sample_project();
    let shared = SharedReferenceIndex::new();
    assert!(shared.snapshot().is_none());

    let refs = shared.find_references(&project, "area");
    assert_eq!(refs.len(), 3);
    let before = shared.snapshot().unwrap();

    write(dir.path(), "c.ad", "area()\n");
    let after = shared.build_index(&project);

    assert_eq!(before.references("area").len(), 3);
    assert_eq!(after.references("area").len(), 4);
    assert_eq!(shared.find_references(&project, "area").len(), 4);
}

#[test]
fn test_shared_index_concurrent_queries() {
    let (_dir, project) = sample_project();
    let shared = SharedReferenceIndex::new();

    std::thread::scope(|scope| {
        for _ in 0..4 {
            scope.spawn(|| {
                assert_eq!(
                    shared.goto_definition(&project, "area").map(|l| l.line),
                    Some(1)
                );
            });
        }
    });
    assert!(shared.snapshot().is_some());
}
