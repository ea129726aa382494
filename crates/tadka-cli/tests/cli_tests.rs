use std::path::PathBuf;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const CYCLIC_RECIPE: &str = r#"{
    "name": "Loop",
    "steps": [
        {"id": 1, "action": "stir", "requires": [2]},
        {"id": 2, "action": "taste", "requires": [1]}
    ]
}"#;

/// Directory holding the bundled sample recipes
fn sample_recipe_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("recipes")
}

/// Helper function to create a Command with --no-color flag for testing
fn tadka_cmd() -> Command {
    let mut cmd = Command::cargo_bin("tadka").expect("Failed to find tadka binary");
    cmd.arg("--no-color");
    cmd
}

/// Command reading recipes from the bundled sample directory
fn sample_cmd() -> Command {
    let mut cmd = tadka_cmd();
    cmd.arg("--recipe-dir").arg(sample_recipe_dir());
    cmd
}

#[test]
fn test_cli_show_recipe_by_name() {
    sample_cmd()
        .args(["show", "jeera-aloo"])
        .assert()
        .success()
        .stdout(predicate::str::contains("# Jeera aloo"))
        .stdout(predicate::str::contains("- Steps: 6"))
        .stdout(predicate::str::contains("### 6. fry potato"));
}

#[test]
fn test_cli_show_recipe_by_path() {
    let path = sample_recipe_dir().join("jeera-aloo.json");

    tadka_cmd()
        .arg("show")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("### 4. add zeera"));
}

#[test]
fn test_cli_show_missing_recipe() {
    let temp_dir = TempDir::new().expect("Failed to create temporary directory");

    tadka_cmd()
        .arg("--recipe-dir")
        .arg(temp_dir.path())
        .args(["show", "biryani"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to load recipe 'biryani'"));
}

#[test]
fn test_cli_check_valid_recipe() {
    sample_cmd()
        .args(["check", "jeera-aloo"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Success: Recipe 'Jeera aloo' is valid (6 steps)",
        ))
        .stdout(predicate::str::contains(
            "Cooking order: 1 -> 2 -> 3 -> 4 -> 5 -> 6",
        ));
}

#[test]
fn test_cli_check_cyclic_recipe() {
    let temp_dir = TempDir::new().expect("Failed to create temporary directory");
    std::fs::write(temp_dir.path().join("loop.json"), CYCLIC_RECIPE)
        .expect("Failed to write recipe");

    tadka_cmd()
        .arg("--recipe-dir")
        .arg(temp_dir.path())
        .args(["check", "loop"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Prerequisite cycle"));
}

#[test]
fn test_cli_next_markdown() {
    sample_cmd()
        .args(["next", "jeera-aloo", "--done", "1,3:2tbsp"])
        .assert()
        .success()
        .stdout(predicate::str::contains("- Progress: 2/6 steps (33%)"))
        .stdout(predicate::str::contains("- State: oil_hot"))
        .stdout(predicate::str::contains("### 2. chop potato"))
        .stdout(predicate::str::contains("### 4. add zeera"));
}

#[test]
fn test_cli_next_json() {
    let output = sample_cmd()
        .args(["next", "jeera-aloo", "--done", "1,3:2tbsp", "--json"])
        .output()
        .expect("Failed to run tadka");
    assert!(output.status.success());

    let snapshot: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("Snapshot should be JSON");
    assert_eq!(snapshot["recipe"], "Jeera aloo");
    assert_eq!(snapshot["state"], "oil_hot");
    assert!(snapshot["ingredients"].get("pan").is_none());
    assert_eq!(snapshot["ingredients"]["oil"], "2tbsp");
    assert_eq!(snapshot["selected_options"]["3"], "2tbsp");
    assert_eq!(snapshot["progress"]["completed"], 2);

    let next: Vec<u64> = snapshot["next_steps"]
        .as_array()
        .expect("next_steps should be an array")
        .iter()
        .filter_map(|step| step["id"].as_u64())
        .collect();
    assert_eq!(next, vec![2, 4]);
}

#[test]
fn test_cli_next_unknown_step() {
    sample_cmd()
        .args(["next", "jeera-aloo", "--done", "42"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to replay step 42"));
}

#[test]
fn test_cli_play_session() {
    sample_cmd()
        .args(["play", "jeera-aloo"])
        .write_stdin("do place pan\ndo add oil 1tbsp\nprogress\nquit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("# Jeera aloo"))
        .stdout(predicate::str::contains("Success: Completed step 1. place pan"))
        .stdout(predicate::str::contains("State: pan_ready"))
        .stdout(predicate::str::contains("Success: Completed step 3. add oil"))
        .stdout(predicate::str::contains("Progress: 2/6 steps (33%)"));
}

#[test]
fn test_cli_play_reports_ineligible_action() {
    sample_cmd()
        .args(["play", "jeera-aloo"])
        .write_stdin("do fry potato\n")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Error: No eligible step for action 'fry'",
        ));
}

#[test]
fn test_cli_list_recipes() {
    sample_cmd()
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("# Recipes"))
        .stdout(predicate::str::contains("- jeera-aloo"));
}

#[test]
fn test_cli_list_is_default_command() {
    let temp_dir = TempDir::new().expect("Failed to create temporary directory");

    tadka_cmd()
        .arg("--recipe-dir")
        .arg(temp_dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("No recipes found."));
}

#[test]
fn test_cli_match_ingredient() {
    tadka_cmd()
        .args(["match", "jeera", "cumin"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Success: 'jeera' matches 'cumin'"));

    tadka_cmd()
        .args(["match", "haldi", "cumin"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Error: 'haldi' does not match 'cumin'",
        ));
}

#[test]
fn test_cli_schema() {
    tadka_cmd()
        .arg("schema")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"steps\""))
        .stdout(predicate::str::contains("\"requires\""));
}
