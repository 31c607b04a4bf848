//! Manifest resolution and content-listing tests over real directories.

use bindery_container::Container;
use std::fs;
use std::path::Path;

fn write(dir: &Path, name: &str, content: &str) {
    fs::write(dir.join(name), content).unwrap();
}

#[test]
fn yaml_manifest_wins_over_all_json_candidates() {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "manifest.yaml", "dublin_core:\n  identifier: from-yaml\n");
    write(dir.path(), "manifest.json", r#"{"dublin_core": {"identifier": "from-json"}}"#);
    write(dir.path(), "package.json", r#"{"dublin_core": {"identifier": "from-package"}}"#);

    let container = Container::open(dir.path());
    assert_eq!(container.resource().identifier, "from-yaml");
    assert!(container.warnings().is_empty());
}

#[test]
fn malformed_yaml_falls_back_to_json_with_one_warning() {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "manifest.yaml", "dublin_core: [unclosed\n");
    write(dir.path(), "manifest.json", r#"{"dublin_core": {"identifier": "from-json"}}"#);

    let container = Container::open(dir.path());
    assert_eq!(container.resource().identifier, "from-json");
    let warnings = container.warnings();
    assert_eq!(warnings.len(), 1);
    assert!(
        warnings[0].contains("manifest.yaml"),
        "warning must name the malformed candidate: {warnings:?}"
    );
    assert!(warnings[0].starts_with("Badly formed 'manifest.yaml' in "));
}

#[test]
fn json_candidates_are_tried_in_priority_order() {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "project.json", r#"{"identifier": "from-project"}"#);
    write(dir.path(), "meta.json", r#"{"identifier": "from-meta"}"#);

    let container = Container::open(dir.path());
    assert_eq!(container.resource().identifier, "from-project");
}

#[test]
fn meta_json_is_the_last_file_candidate() {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "meta.json", r#"{"identifier": "from-meta"}"#);

    let container = Container::open(dir.path());
    assert_eq!(container.resource().identifier, "from-meta");
}

#[test]
fn directory_without_manifests_synthesizes_identifier_from_base_name() {
    let parent = tempfile::tempdir().unwrap();
    let dir = parent.path().join("en_ulb_gen");
    fs::create_dir(&dir).unwrap();

    let container = Container::open(&dir);
    assert_eq!(container.resource().identifier, "en_ulb_gen");
    assert!(container.warnings().is_empty());
}

#[test]
fn absent_directory_synthesizes_from_name() {
    let container = Container::open_named("/nonexistent/path/for/bindery-tests", "my-repo");
    assert_eq!(container.resource().identifier, "my-repo");
    assert!(container.warnings().is_empty());
}

#[test]
fn all_candidates_malformed_synthesizes_and_warns_per_candidate() {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "manifest.yaml", "key: [broken\n");
    write(dir.path(), "manifest.json", "{broken");
    write(dir.path(), "meta.json", "also broken");

    let container = Container::open_named(dir.path(), "broken-repo");
    assert_eq!(container.resource().identifier, "broken-repo");
    let warnings = container.warnings();
    assert_eq!(warnings.len(), 3);
    assert!(warnings.iter().all(|w| w.contains("broken-repo")));
}

#[test]
fn resolution_is_cached_after_first_access() {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "manifest.yaml", "dublin_core:\n  identifier: cached\n");

    let container = Container::open(dir.path());
    assert_eq!(container.resource().identifier, "cached");

    // Removing the file must not affect the already-resolved instance.
    fs::remove_file(dir.path().join("manifest.yaml")).unwrap();
    assert_eq!(container.resource().identifier, "cached");
    assert_eq!(container.manifest().len(), 1);
}

#[test]
fn chunks_defaults_chapter_to_project_id_and_filters() {
    let dir = tempfile::tempdir().unwrap();
    write(
        dir.path(),
        "manifest.yaml",
        "projects:\n  - identifier: gen\n    path: './content'\n",
    );
    let chapter_dir = dir.path().join("content").join("gen");
    fs::create_dir_all(&chapter_dir).unwrap();
    write(&chapter_dir, "a.txt", "text");
    write(&chapter_dir, ".hidden", "hidden");
    write(&chapter_dir, "b.usfm", "usfm");
    write(&chapter_dir, "c.bin", "binary");

    let container = Container::open(dir.path());
    assert_eq!(container.chunks("gen", None), vec!["a.txt", "b.usfm"]);
}

#[test]
fn chunks_accepts_extensionless_markdown_and_text_files() {
    let dir = tempfile::tempdir().unwrap();
    write(
        dir.path(),
        "manifest.yaml",
        "projects:\n  - identifier: gen\n    path: '.'\n",
    );
    let chapter_dir = dir.path().join("01");
    fs::create_dir(&chapter_dir).unwrap();
    write(&chapter_dir, "02.md", "md");
    write(&chapter_dir, "01.text", "text");
    write(&chapter_dir, "title", "no extension");

    let container = Container::open(dir.path());
    assert_eq!(
        container.chunks("gen", Some("01")),
        vec!["01.text", "02.md", "title"]
    );
}

#[test]
fn chunks_for_unknown_project_is_empty() {
    let dir = tempfile::tempdir().unwrap();
    write(
        dir.path(),
        "manifest.yaml",
        "projects:\n  - identifier: gen\n  - identifier: exo\n",
    );
    let container = Container::open(dir.path());
    assert!(container.chunks("lev", None).is_empty());
}

#[test]
fn chapters_excludes_directories_without_qualifying_chunks() {
    let dir = tempfile::tempdir().unwrap();
    write(
        dir.path(),
        "manifest.yaml",
        "projects:\n  - identifier: gen\n    path: '.'\n",
    );
    let full = dir.path().join("01");
    fs::create_dir(&full).unwrap();
    write(&full, "01.txt", "verse");
    let empty = dir.path().join("02");
    fs::create_dir(&empty).unwrap();
    write(&empty, "notes.bin", "not a chunk");
    fs::create_dir(dir.path().join(".git")).unwrap();

    let container = Container::open(dir.path());
    assert_eq!(container.chapters(Some("gen")), vec!["01"]);
}

#[test]
fn chapters_sorted_ascending() {
    let dir = tempfile::tempdir().unwrap();
    write(
        dir.path(),
        "manifest.yaml",
        "projects:\n  - identifier: gen\n    path: '.'\n",
    );
    for chapter in ["03", "01", "02"] {
        let chapter_dir = dir.path().join(chapter);
        fs::create_dir(&chapter_dir).unwrap();
        write(&chapter_dir, "01.txt", "verse");
    }

    let container = Container::open(dir.path());
    assert_eq!(container.chapters(Some("gen")), vec!["01", "02", "03"]);
}

#[test]
fn chapters_for_ambiguous_project_is_empty() {
    let dir = tempfile::tempdir().unwrap();
    write(
        dir.path(),
        "manifest.yaml",
        "projects:\n  - identifier: gen\n  - identifier: exo\n",
    );
    let container = Container::open(dir.path());
    assert!(container.chapters(None).is_empty());
}

#[test]
fn usfm_files_lists_only_usfm_extension() {
    let dir = tempfile::tempdir().unwrap();
    write(
        dir.path(),
        "manifest.yaml",
        "projects:\n  - identifier: gen\n    path: '.'\n",
    );
    write(dir.path(), "01-GEN.usfm", "usfm");
    write(dir.path(), "notes.txt", "text");

    let container = Container::open(dir.path());
    assert_eq!(container.usfm_files(Some("gen")), vec!["01-GEN.usfm"]);
}

#[test]
fn listing_helpers_never_error_on_missing_directories() {
    let container = Container::from_name("ghost");
    assert!(container.chapters(None).is_empty());
    assert!(container.chunks("gen", None).is_empty());
    assert!(container.usfm_files(None).is_empty());
}

#[test]
fn synthesized_default_project_lists_container_root() {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "manifest.json", r#"{"dublin_core": {"identifier": "gen"}}"#);
    let chapter_dir = dir.path().join("01");
    fs::create_dir(&chapter_dir).unwrap();
    write(&chapter_dir, "01.txt", "verse");

    let container = Container::open(dir.path());
    assert_eq!(container.project_count(), 1);
    assert_eq!(container.chapters(None), vec!["01"]);
}
