//! Tests for failure paths: messages, hints and exit codes.

use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn postgen(site: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("postgen").unwrap();
    cmd.current_dir(site.path())
        .env_remove("POSTGEN_SITE__DIR")
        .env_remove("POSTGEN_SITE__TEMPLATE")
        .env_remove("RUST_LOG")
        .env_remove("NO_COLOR")
        .arg("--dir")
        .arg(site.path());
    cmd
}

fn entries(site: &TempDir) -> Vec<String> {
    let mut names: Vec<String> = fs::read_dir(site.path())
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}

#[test]
fn test_no_arguments_prints_usage() {
    let site = TempDir::new().unwrap();
    fs::write(site.path().join("post-template.html"), "t").unwrap();

    postgen(&site)
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Usage:"))
        .stderr(predicate::str::contains("Example: postgen my-first-post"));

    assert_eq!(entries(&site), ["post-template.html"]);
}

#[test]
fn test_empty_slug_is_a_usage_error() {
    let site = TempDir::new().unwrap();
    fs::write(site.path().join("post-template.html"), "t").unwrap();

    postgen(&site)
        .arg("")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("slug cannot be empty"));

    assert!(!site.path().join(".html").exists());
}

#[test]
fn test_missing_template() {
    let site = TempDir::new().unwrap();

    postgen(&site)
        .arg("orphan")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("post-template.html not found"))
        .stdout(predicate::str::is_empty());

    assert!(entries(&site).is_empty());
}

#[test]
fn test_missing_template_wins_over_existing_output() {
    let site = TempDir::new().unwrap();
    fs::write(site.path().join("both.html"), "old").unwrap();

    postgen(&site)
        .arg("both")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("not found"));

    assert_eq!(fs::read_to_string(site.path().join("both.html")).unwrap(), "old");
}

#[test]
fn test_directory_as_template_leaves_no_output() {
    let site = TempDir::new().unwrap();
    fs::create_dir(site.path().join("dirtpl")).unwrap();

    for _ in 0..2 {
        postgen(&site)
            .args(["-t", "dirtpl", "x"])
            .assert()
            .failure()
            .code(1)
            .stderr(predicate::str::contains("is not a regular file"));
    }

    assert_eq!(entries(&site), ["dirtpl"]);
}

#[test]
fn test_existing_output_is_not_overwritten() {
    let site = TempDir::new().unwrap();
    fs::write(site.path().join("post-template.html"), "new").unwrap();
    fs::write(site.path().join("taken.html"), "original").unwrap();

    postgen(&site)
        .arg("taken")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("taken.html already exists"));

    assert_eq!(
        fs::read_to_string(site.path().join("taken.html")).unwrap(),
        "original"
    );
}

#[test]
fn test_missing_site_directory() {
    let root = TempDir::new().unwrap();
    let mut cmd = Command::cargo_bin("postgen").unwrap();
    cmd.current_dir(root.path())
        .env_remove("POSTGEN_SITE__DIR")
        .env_remove("NO_COLOR")
        .arg("--dir")
        .arg(root.path().join("nowhere"))
        .arg("post")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("not found"));
}

#[test]
fn test_unknown_flag_exits_one() {
    let mut cmd = Command::cargo_bin("postgen").unwrap();
    cmd.args(["--bogus", "slug"]).assert().failure().code(1);
}

#[test]
fn test_completions_conflict_with_slug() {
    let mut cmd = Command::cargo_bin("postgen").unwrap();
    cmd.args(["--completions", "bash", "slug"])
        .assert()
        .failure()
        .code(1);
}

#[test]
fn test_missing_config_file() {
    let site = TempDir::new().unwrap();
    fs::write(site.path().join("post-template.html"), "t").unwrap();

    postgen(&site)
        .arg("--config")
        .arg(site.path().join("absent.toml"))
        .arg("post")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Configuration error"));

    assert!(!site.path().join("post.html").exists());
}

#[test]
fn test_verbose_shows_log_events_on_stderr() {
    let site = TempDir::new().unwrap();

    postgen(&site)
        .args(["-vv", "orphan"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("post-template.html not found"))
        .stderr(predicate::str::contains("DEBUG"));
}
