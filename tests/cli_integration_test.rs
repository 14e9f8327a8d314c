//! CLI-level tests: flag surface, preview output, and the default rewrite
//! behavior of the installed binary.

use assert_cmd::Command;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn write(dir: &Path, name: &str, content: &str) {
    fs::write(dir.join(name), content).unwrap();
}

fn classmin() -> Command {
    Command::cargo_bin("classmin").unwrap()
}

#[test]
fn test_preview_prints_map_without_modifying_files() {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "style.css", ".banner { }\n.banner { }\n.badge { }\n");

    let assert = classmin()
        .arg(dir.path())
        .arg("--preview")
        .assert()
        .success();

    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    assert_eq!(stdout, "banner -> a\nbadge -> b\n");

    let content = fs::read_to_string(dir.path().join("style.css")).unwrap();
    assert_eq!(content, ".banner { }\n.banner { }\n.badge { }\n");
}

#[test]
fn test_default_run_rewrites_in_place() {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "index.html", "<div class=\"banner\">\n");
    write(dir.path(), "style.css", ".banner { }\n");

    classmin().arg(dir.path()).assert().success();

    assert_eq!(
        fs::read_to_string(dir.path().join("index.html")).unwrap(),
        "<div class=\"a\">\n"
    );
    assert_eq!(
        fs::read_to_string(dir.path().join("style.css")).unwrap(),
        ".a { }\n"
    );
}

#[test]
fn test_json_preview_format() {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "style.css", ".banner { }\n");

    let assert = classmin()
        .arg(dir.path())
        .arg("--preview")
        .arg("--format")
        .arg("json")
        .assert()
        .success();

    let stdout = assert.get_output().stdout.clone();
    let pairs: serde_json::Value = serde_json::from_slice(&stdout).unwrap();
    assert_eq!(pairs[0]["class"], "banner");
    assert_eq!(pairs[0]["replacement"], "a");
}

#[test]
fn test_missing_directory_fails() {
    classmin()
        .arg("/nonexistent/classmin-test-dir")
        .arg("--preview")
        .assert()
        .failure();
}
