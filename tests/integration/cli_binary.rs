//! Smoke tests for the `boilerplate` binary

use std::path::Path;
use std::process::{Command, Output};
use tempfile::TempDir;

fn run(test_dir: &TempDir, project: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_boilerplate"))
        .arg("--dir")
        .arg(project)
        .arg("--quiet")
        .args(args)
        .env("HOME", test_dir.path().join("home"))
        .env("XDG_CONFIG_HOME", test_dir.path().join("config"))
        .env_remove("BOILERPLATE_AUTHOR")
        .env_remove("BOILERPLATE_PACKAGE__VERSION")
        .env_remove("BOILERPLATE_LOG")
        .output()
        .unwrap()
}

fn project(test_dir: &TempDir) -> std::path::PathBuf {
    let dir = test_dir.path().join("widget");
    std::fs::create_dir_all(&dir).unwrap();
    dir
}

#[test]
fn test_init_with_defaults() {
    let test_dir = TempDir::new().unwrap();
    let project = project(&test_dir);

    let output = run(
        &test_dir,
        &project,
        &["init", "--yes", "--author", "octocat", "--skip-install"],
    );

    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("package.json"));
    assert!(stdout.contains("Package installation skipped."));
    assert!(stdout.contains("Enhance your README"));
    for name in ["package.json", "tests.js", "widget.js", "LICENSE", "README.md", ".travis.yml", ".gitignore"] {
        assert!(project.join(name).exists(), "{} missing", name);
    }
}

#[test]
fn test_manifest_dry_run_prints_json() {
    let test_dir = TempDir::new().unwrap();
    let project = project(&test_dir);

    let output = run(
        &test_dir,
        &project,
        &["manifest", "--dry-run", "--yes", "--author", "octocat", "--browser", "y"],
    );

    assert!(output.status.success());
    let printed: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(printed["name"], "widget");
    assert_eq!(printed["author"], "octocat");
    assert!(printed["scripts"]["build"].is_string());
    assert!(!project.join("package.json").exists());
}

#[test]
fn test_broken_manifest_exits_with_error() {
    let test_dir = TempDir::new().unwrap();
    let project = project(&test_dir);
    std::fs::write(project.join("package.json"), "{ nope").unwrap();

    let output = run(
        &test_dir,
        &project,
        &["init", "--yes", "--author", "octocat", "--skip-install"],
    );

    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("Error:"));
    assert!(!project.join("LICENSE").exists());
}

#[test]
fn test_invalid_flag_value_is_rejected() {
    let test_dir = TempDir::new().unwrap();
    let project = project(&test_dir);

    let output = run(&test_dir, &project, &["init", "--tests", "perhaps"]);

    assert!(!output.status.success());
    assert!(!project.join("package.json").exists());
}
