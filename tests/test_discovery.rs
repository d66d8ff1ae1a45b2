use std::fs;
use std::path::Path;

use agents_md_lint::config::Config;
use agents_md_lint::discovery::discover;
use agents_md_lint::document::Document;
use agents_md_lint::error::LintError;
use agents_md_lint::validate::validate_file;

fn touch(root: &Path, rel: &str) {
    let path = root.join(rel);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, "# Rules\n").unwrap();
}

// --- Discovery ---

#[test]
fn missing_root_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = discover(&dir.path().join("nope")).unwrap_err();
    assert!(matches!(err, LintError::PathNotFound(_)));
    assert!(err.to_string().ends_with("does not exist"));
}

#[test]
fn single_file_is_returned_whatever_its_name() {
    let dir = tempfile::tempdir().unwrap();
    touch(dir.path(), "CLAUDE.md");
    let files = discover(&dir.path().join("CLAUDE.md")).unwrap();
    assert_eq!(files, vec![dir.path().join("CLAUDE.md")]);
}

#[test]
fn directory_search_is_recursive_exact_and_sorted() {
    let dir = tempfile::tempdir().unwrap();
    touch(dir.path(), "zeta/AGENTS.md");
    touch(dir.path(), "AGENTS.md");
    touch(dir.path(), "alpha/beta/AGENTS.md");
    touch(dir.path(), "alpha/agents.md");
    touch(dir.path(), "alpha/AGENTS.md.bak");
    fs::create_dir_all(dir.path().join("gamma/AGENTS.md")).unwrap();

    let files = discover(dir.path()).unwrap();
    assert_eq!(
        files,
        vec![
            dir.path().join("AGENTS.md"),
            dir.path().join("alpha/beta/AGENTS.md"),
            dir.path().join("zeta/AGENTS.md"),
        ]
    );
}

#[cfg(unix)]
#[test]
fn symlinked_agents_md_is_discovered() {
    let dir = tempfile::tempdir().unwrap();
    touch(dir.path(), "shared/rules.md");
    fs::create_dir_all(dir.path().join("pkg")).unwrap();
    std::os::unix::fs::symlink(
        dir.path().join("shared/rules.md"),
        dir.path().join("pkg/AGENTS.md"),
    )
    .unwrap();

    let files = discover(dir.path()).unwrap();
    assert_eq!(files, vec![dir.path().join("pkg/AGENTS.md")]);
}

#[test]
fn directory_without_matches_is_empty_not_error() {
    let dir = tempfile::tempdir().unwrap();
    touch(dir.path(), "README.md");
    assert!(discover(dir.path()).unwrap().is_empty());
}

// --- Loading ---

#[test]
fn load_splits_like_naive_split() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("AGENTS.md");
    fs::write(&path, "a\r\nb\n").unwrap();

    let doc = Document::load(&path).unwrap();
    assert_eq!(doc.lines(), ["a\r", "b", ""]);
    assert_eq!(doc.content(), "a\r\nb\n");
}

#[test]
fn empty_file_has_one_line() {
    assert_eq!(Document::from_text("AGENTS.md", "").line_count(), 1);
}

#[test]
fn unreadable_file_is_a_read_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = validate_file(&dir.path().join("AGENTS.md"), &Config::default()).unwrap_err();
    assert!(matches!(err, LintError::Read { .. }));
}

// --- Config ---

#[test]
fn no_config_path_gives_defaults() {
    let config = Config::load(None).unwrap();
    assert_eq!(config, Config::default());
    assert!(config.is_check_enabled("anti_patterns"));
    assert!(config.is_check_enabled("unknown_check"));
}

#[test]
fn config_toggles_checks_and_strict() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("lint.toml");
    fs::write(
        &path,
        "[strict]\nenabled = true\n\n[checks]\nanti_patterns = false\n",
    )
    .unwrap();

    let config = Config::load(Some(path.as_path())).unwrap();
    assert!(config.strict.enabled);
    assert!(!config.is_check_enabled("anti_patterns"));
    assert!(config.is_check_enabled("length"));
}

#[test]
fn missing_config_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = Config::load(Some(dir.path().join("missing.toml").as_path())).unwrap_err();
    assert!(matches!(err, LintError::ConfigNotFound(_)));
}

#[test]
fn malformed_config_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("lint.toml");
    fs::write(&path, "[checks]\nlength = \"yes\"\n").unwrap();
    let err = Config::load(Some(path.as_path())).unwrap_err();
    assert!(matches!(err, LintError::ConfigParse { .. }));
}
