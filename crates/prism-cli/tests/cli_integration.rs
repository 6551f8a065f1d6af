//! CLI Integration Tests
//!
//! These tests run the token build end-to-end and verify the file layout
//! it produces under the build directory.

use std::fs;
use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

// ============================================================================
// Test Utilities
// ============================================================================

/// Create a CLI command building into a temporary directory
fn cli_cmd(build_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("prism-tokens").expect("Failed to find prism-tokens binary");
    cmd.arg("--build-dir").arg(build_dir.path());
    cmd
}

/// Names of CSS files directly inside `dir`, excluding index.css
fn css_files(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = fs::read_dir(dir)
        .unwrap_or_else(|_| panic!("missing directory {}", dir.display()))
        .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
        .filter(|name| name.ends_with(".css") && name != "index.css")
        .collect();
    names.sort();
    names
}

/// Write an overlay token tree with `core` and `themes/light` subdirs
fn write_overlay(root: &Path) {
    fs::create_dir_all(root.join("core")).unwrap();
    fs::write(
        root.join("core/brand.json"),
        r##"{ "color": { "brand": { "500": { "value": "#ff6f00" } } } }"##,
    )
    .unwrap();
    fs::create_dir_all(root.join("themes/light")).unwrap();
    fs::write(
        root.join("themes/light/overrides.json"),
        r##"{ "color": { "background": { "value": "#fffdf8" } } }"##,
    )
    .unwrap();
}

// ============================================================================
// Default Build
// ============================================================================

#[test]
fn test_default_build_produces_core_and_light_theme() {
    let build_dir = TempDir::new().unwrap();

    cli_cmd(&build_dir).assert().success();

    assert_eq!(
        css_files(&build_dir.path().join("core")),
        vec!["custom-media-breakpoints.css", "variables.css"]
    );
    assert_eq!(
        css_files(&build_dir.path().join("themes/light")),
        vec!["utility-classes.css", "variables.css"]
    );
    assert!(build_dir.path().join("core/index.css").is_file());
    assert!(build_dir.path().join("themes/index.css").is_file());
}

#[test]
fn test_core_variables_content() {
    let build_dir = TempDir::new().unwrap();

    cli_cmd(&build_dir).assert().success();

    let variables = fs::read_to_string(build_dir.path().join("core/variables.css")).unwrap();
    assert!(variables.contains("Generated by the Prism token build"));
    assert!(variables.contains(":root {"));
    assert!(variables.contains("--prism-color-brand-500: #0a3055;"));
    assert!(variables.contains("--prism-spacing-1: 0.25rem;"));

    let media =
        fs::read_to_string(build_dir.path().join("core/custom-media-breakpoints.css")).unwrap();
    assert!(media.contains("@custom-media --prism-breakpoint-md (min-width: 768px);"));
}

#[test]
fn test_theme_output_preserves_references() {
    let build_dir = TempDir::new().unwrap();

    cli_cmd(&build_dir).assert().success();

    let variables =
        fs::read_to_string(build_dir.path().join("themes/light/variables.css")).unwrap();
    assert!(variables.contains("--prism-color-background: var(--prism-color-gray-100);"));

    let utilities =
        fs::read_to_string(build_dir.path().join("themes/light/utility-classes.css")).unwrap();
    assert!(utilities.contains(".bg-primary { background-color: var(--prism-color-primary); }"));
}

// ============================================================================
// Multi-theme Build
// ============================================================================

#[test]
fn test_two_themes_produce_exactly_eight_files() {
    let build_dir = TempDir::new().unwrap();

    cli_cmd(&build_dir)
        .args(["--themes", "light", "dark"])
        .assert()
        .success();

    // Two core files plus variables + utility-classes for each theme.
    assert_eq!(css_files(&build_dir.path().join("core")).len(), 2);
    for theme in ["light", "dark"] {
        assert_eq!(
            css_files(&build_dir.path().join("themes").join(theme)),
            vec!["utility-classes.css", "variables.css"]
        );
    }

    // Exactly two index files: core, and the aggregate over all themes.
    assert!(build_dir.path().join("core/index.css").is_file());
    let themes_index = fs::read_to_string(build_dir.path().join("themes/index.css")).unwrap();
    assert!(themes_index.contains("@import \"./light/variables.css\";"));
    assert!(themes_index.contains("@import \"./dark/variables.css\";"));
    assert!(!build_dir.path().join("themes/light/index.css").exists());
}

// ============================================================================
// Overlay Sources
// ============================================================================

#[test]
fn test_source_overlay_shadows_base_tokens() {
    let build_dir = TempDir::new().unwrap();
    let overlay = TempDir::new().unwrap();
    write_overlay(overlay.path());

    cli_cmd(&build_dir)
        .arg("--source")
        .arg(overlay.path())
        .assert()
        .success();

    let core = fs::read_to_string(build_dir.path().join("core/variables.css")).unwrap();
    assert!(core.contains("--prism-color-brand-500: #ff6f00;"));

    let theme = fs::read_to_string(build_dir.path().join("themes/light/variables.css")).unwrap();
    assert!(theme.contains("--prism-color-background: #fffdf8;"));
}

#[test]
fn test_source_tokens_only_excludes_base_tokens() {
    let build_dir = TempDir::new().unwrap();
    let overlay = TempDir::new().unwrap();
    write_overlay(overlay.path());

    cli_cmd(&build_dir)
        .arg("--source")
        .arg(overlay.path())
        .arg("--source-tokens-only")
        .assert()
        .success();

    let core = fs::read_to_string(build_dir.path().join("core/variables.css")).unwrap();
    assert!(core.contains("--prism-color-brand-500: #ff6f00;"));
    assert!(!core.contains("--prism-spacing-1"));

    let theme = fs::read_to_string(build_dir.path().join("themes/light/variables.css")).unwrap();
    assert!(theme.contains("--prism-color-background: #fffdf8;"));
    assert!(!theme.contains("--prism-color-text-primary"));
}

// ============================================================================
// Failure Propagation
// ============================================================================

#[test]
fn test_invalid_overlay_json_fails_the_build() {
    let build_dir = TempDir::new().unwrap();
    let overlay = TempDir::new().unwrap();
    fs::create_dir_all(overlay.path().join("core")).unwrap();
    fs::write(overlay.path().join("core/broken.json"), "{ not json").unwrap();

    cli_cmd(&build_dir)
        .arg("--source")
        .arg(overlay.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("parse"));
}

#[test]
fn test_help_lists_options() {
    Command::cargo_bin("prism-tokens")
        .unwrap()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--build-dir"))
        .stdout(predicate::str::contains("--source-tokens-only"))
        .stdout(predicate::str::contains("--themes"));
}
