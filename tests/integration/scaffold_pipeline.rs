//! End-to-end scaffolding through the library API

use super::test_utils::project_dir;
use boilerplate::config::ToolConfig;
use boilerplate::manifest::{load_manifest, MANIFEST_FILE};
use boilerplate::prompt::{collect_answers, AnswerPresets, DefaultsPrompter};
use boilerplate::scaffold::{FileAction, ScaffoldOptions, Scaffolder};
use boilerplate::settings::{ProjectContext, ProjectSettings};
use serde_json::json;
use std::path::Path;
use tempfile::TempDir;

const SKIP_INSTALL: ScaffoldOptions = ScaffoldOptions { skip_install: true };

fn settings_for(dir: &Path, presets: AnswerPresets) -> ProjectSettings {
    let context = ProjectContext::discover(dir, "octocat").unwrap();
    let answers = collect_answers(&mut DefaultsPrompter, &presets).unwrap();
    ProjectSettings::with_year(&context, answers, "https://github.com", 2015)
}

#[test]
fn test_fresh_directory_gets_complete_project() {
    let test_dir = TempDir::new().unwrap();
    let project = project_dir(&test_dir, "left-pad");
    let settings = settings_for(
        &project,
        AnswerPresets {
            description: Some("Pads strings on the left".to_string()),
            keywords: Some("pad  string ".to_string()),
            browser: Some(true),
            ..AnswerPresets::default()
        },
    );
    let config = ToolConfig::default();

    let summary = Scaffolder::new(&project, &settings, &config)
        .run(SKIP_INSTALL)
        .unwrap();
    assert!(summary.with_action(FileAction::Skipped).is_empty());

    let manifest = load_manifest(&project.join(MANIFEST_FILE)).unwrap();
    assert_eq!(manifest["name"], json!("left-pad"));
    assert_eq!(manifest["main"], json!("left-pad.js"));
    assert_eq!(manifest["keywords"], json!(["pad", "string"]));
    assert_eq!(manifest["license"], json!("MIT"));
    assert_eq!(manifest["homepage"], json!("https://github.com/octocat/left-pad"));
    assert!(manifest["scripts"]["build"]
        .as_str()
        .unwrap()
        .contains("-s leftPad -r ./"));
    assert!(manifest["scripts"]["test"].is_string());

    let readme = std::fs::read_to_string(project.join("README.md")).unwrap();
    assert!(readme.starts_with("left-pad\n========\n"));
    assert!(readme.contains("Pads strings on the left"));
    assert!(readme.contains("secure.travis-ci.org/octocat/left-pad.png"));

    let license = std::fs::read_to_string(project.join("LICENSE")).unwrap();
    assert!(license.contains("Copyright (c) 2015 octocat"));

    let travis = std::fs::read_to_string(project.join(".travis.yml")).unwrap();
    assert!(travis.contains("node_js"));

    assert!(project.join("favicon.ico").exists());
    assert_eq!(
        std::fs::read_to_string(project.join(".gitignore")).unwrap(),
        "node_modules\ncoverage\n"
    );
}

#[test]
fn test_existing_manifest_keeps_its_values() {
    let test_dir = TempDir::new().unwrap();
    let project = project_dir(&test_dir, "widget");
    std::fs::write(
        project.join(MANIFEST_FILE),
        r#"{
  "name": "@scope/widget",
  "version": "2.3.4",
  "repository": { "type": "git" },
  "dependencies": { "lodash": "^4.0.0" }
}
"#,
    )
    .unwrap();
    let settings = settings_for(&project, AnswerPresets::default());
    let config = ToolConfig::default();

    let summary = Scaffolder::new(&project, &settings, &config)
        .run(SKIP_INSTALL)
        .unwrap();
    assert_eq!(summary.action_for(MANIFEST_FILE), Some(FileAction::Updated));

    let manifest = load_manifest(&project.join(MANIFEST_FILE)).unwrap();
    assert_eq!(manifest["name"], json!("@scope/widget"));
    assert_eq!(manifest["version"], json!("2.3.4"));
    assert_eq!(
        manifest["repository"],
        json!({"type": "git", "url": "https://github.com/octocat/widget"})
    );
    assert_eq!(manifest["dependencies"], json!({"lodash": "^4.0.0"}));

    let keys: Vec<&str> = manifest.keys().map(String::as_str).collect();
    assert_eq!(&keys[..4], &["name", "version", "repository", "dependencies"]);
}

#[test]
fn test_index_js_becomes_main() {
    let test_dir = TempDir::new().unwrap();
    let project = project_dir(&test_dir, "widget");
    std::fs::write(project.join("index.js"), "module.exports = 1\n").unwrap();
    let settings = settings_for(&project, AnswerPresets::default());
    let config = ToolConfig::default();

    let summary = Scaffolder::new(&project, &settings, &config)
        .run(SKIP_INSTALL)
        .unwrap();

    assert_eq!(summary.action_for("index.js"), Some(FileAction::Skipped));
    assert!(!project.join("widget.js").exists());
    assert_eq!(
        std::fs::read_to_string(project.join("index.js")).unwrap(),
        "module.exports = 1\n"
    );
    let manifest = load_manifest(&project.join(MANIFEST_FILE)).unwrap();
    assert_eq!(manifest["bin"], json!("index.js"));
}

#[test]
fn test_rerun_is_a_no_op() {
    let test_dir = TempDir::new().unwrap();
    let project = project_dir(&test_dir, "widget");
    let settings = settings_for(&project, AnswerPresets::default());
    let config = ToolConfig::default();
    let scaffolder = Scaffolder::new(&project, &settings, &config);

    scaffolder.run(SKIP_INSTALL).unwrap();
    let manifest_before = std::fs::read_to_string(project.join(MANIFEST_FILE)).unwrap();
    let gitignore_before = std::fs::read_to_string(project.join(".gitignore")).unwrap();

    let second = scaffolder.run(SKIP_INSTALL).unwrap();
    assert!(second.with_action(FileAction::Created).is_empty());
    assert!(second.with_action(FileAction::Updated).is_empty());
    assert_eq!(
        std::fs::read_to_string(project.join(MANIFEST_FILE)).unwrap(),
        manifest_before
    );
    assert_eq!(
        std::fs::read_to_string(project.join(".gitignore")).unwrap(),
        gitignore_before
    );
}

#[cfg(unix)]
#[test]
fn test_install_runs_in_project_directory() {
    let test_dir = TempDir::new().unwrap();
    let project = project_dir(&test_dir, "widget");
    let settings = settings_for(&project, AnswerPresets::default());
    let mut config = ToolConfig::default();
    config.package_manager.program = "sh".to_string();
    config.package_manager.install_args = vec![
        "-c".to_string(),
        "echo \"$@\" > installed.txt".to_string(),
        "sh".to_string(),
    ];

    let summary = Scaffolder::new(&project, &settings, &config)
        .run(ScaffoldOptions::default())
        .unwrap();

    assert_eq!(
        summary.installed,
        Some(vec!["istanbul".to_string(), "nodeunit".to_string()])
    );
    assert_eq!(
        std::fs::read_to_string(project.join("installed.txt")).unwrap(),
        "istanbul nodeunit\n"
    );
}
