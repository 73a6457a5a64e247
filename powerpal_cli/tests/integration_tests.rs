//! Integration tests for the powerpal binary.
//!
//! These tests verify end-to-end behavior including:
//! - Onboarding and plan generation
//! - Level and goal changes
//! - CSV export and reset
//! - Error reporting for invalid input

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// Helper to create a test data directory
fn setup_test_dir() -> TempDir {
    tempfile::tempdir().expect("Failed to create temp dir")
}

/// Helper to get the CLI binary pointed at an isolated data and config dir
fn cli(data_dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("powerpal").expect("Failed to find powerpal binary");
    cmd.env("XDG_CONFIG_HOME", data_dir.join("config"))
        .env_remove("RUST_LOG")
        .arg("--data-dir")
        .arg(data_dir);
    cmd
}

fn onboard(data_dir: &Path, name: &str, age: &str, goal: &str) {
    cli(data_dir)
        .args(["setup", "--name", name, "--age", age, "--goal", goal])
        .assert()
        .success();
}

fn read_json(path: &Path) -> serde_json::Value {
    let contents = fs::read_to_string(path).expect("Failed to read record");
    serde_json::from_str(&contents).expect("Record is not valid JSON")
}

#[test]
fn test_cli_help() {
    let temp_dir = setup_test_dir();
    cli(temp_dir.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Weekly workout and meal plans from your fitness profile",
        ));
}

#[test]
fn test_setup_creates_all_records() {
    let temp_dir = setup_test_dir();
    let data_dir = temp_dir.path();

    cli(data_dir)
        .args(["setup", "--name", "Al", "--age", "30", "--goal", "weight-loss"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Profile saved"))
        .stdout(predicate::str::contains("Egg White Omelet"))
        .stdout(predicate::str::contains("Tuesday - Rest day"));

    assert!(data_dir.join("profile.json").exists());
    assert!(data_dir.join("workout_plan.json").exists());
    assert!(data_dir.join("meal_plan.json").exists());

    let profile = read_json(&data_dir.join("profile.json"));
    assert_eq!(profile["name"], "Al");
    assert_eq!(profile["age"], 30);
    assert_eq!(profile["goal"], "weight_loss");

    let meals = read_json(&data_dir.join("meal_plan.json"));
    let days = meals["days"].as_array().unwrap();
    assert_eq!(days.len(), 7);
    assert!(days[3].get("dessert").is_none());
    assert!(days[6].get("dessert").is_none());
    assert_eq!(days[0]["breakfast"]["name"], "Egg White Omelet");
}

#[test]
fn test_setup_rejects_invalid_age() {
    let temp_dir = setup_test_dir();
    let data_dir = temp_dir.path();

    cli(data_dir)
        .args(["setup", "--name", "Al", "--age", "5"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("InvalidProfile"));

    assert!(!data_dir.join("profile.json").exists());
}

#[test]
fn test_setup_rejects_blank_name() {
    let temp_dir = setup_test_dir();

    cli(temp_dir.path())
        .args(["setup", "--name", "   ", "--age", "30"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("InvalidProfile"));
}

#[test]
fn test_invalid_goal_falls_back() {
    let temp_dir = setup_test_dir();
    let data_dir = temp_dir.path();

    cli(data_dir)
        .args(["setup", "--name", "Al", "--age", "30", "--goal", "parkour"])
        .assert()
        .success()
        .stderr(predicate::str::contains("Unknown goal"))
        .stdout(predicate::str::contains("Mixed Cardio & Strength"));

    let profile = read_json(&data_dir.join("profile.json"));
    assert_eq!(profile["goal"], "general_fitness");
}

#[test]
fn test_commands_require_profile() {
    let temp_dir = setup_test_dir();

    for args in [&["workout"][..], &["meals"], &["today"], &["goal", "endurance"]] {
        cli(temp_dir.path())
            .args(args)
            .assert()
            .failure()
            .stderr(predicate::str::contains("MissingProfile"));
    }
}

#[test]
fn test_workout_shows_stored_plan() {
    let temp_dir = setup_test_dir();
    onboard(temp_dir.path(), "Sam", "25", "muscle-gain");

    cli(temp_dir.path())
        .arg("workout")
        .assert()
        .success()
        .stdout(predicate::str::contains("4 training days"))
        .stdout(predicate::str::contains("Weight Lifting: 4 sets x 8 reps"));
}

#[test]
fn test_meals_single_day() {
    let temp_dir = setup_test_dir();
    onboard(temp_dir.path(), "Al", "30", "weight-loss");

    cli(temp_dir.path())
        .args(["meals", "--day", "thu"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Thursday meals"))
        .stdout(predicate::str::contains("Turkey Wrap"))
        .stdout(predicate::str::contains("Dessert").not())
        .stdout(predicate::str::contains("Monday meals").not());
}

#[test]
fn test_meals_unknown_day_fails() {
    let temp_dir = setup_test_dir();
    onboard(temp_dir.path(), "Al", "30", "weight-loss");

    cli(temp_dir.path())
        .args(["meals", "--day", "someday"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown day"));
}

#[test]
fn test_regenerate_is_stable() {
    let temp_dir = setup_test_dir();
    let data_dir = temp_dir.path();
    onboard(data_dir, "Taylor", "47", "endurance");

    let before = fs::read_to_string(data_dir.join("meal_plan.json")).unwrap();

    cli(data_dir)
        .args(["meals", "--regenerate"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Meal plan regenerated"));

    let after = fs::read_to_string(data_dir.join("meal_plan.json")).unwrap();
    assert_eq!(before, after);
}

#[test]
fn test_level_change_keeps_meal_plan() {
    let temp_dir = setup_test_dir();
    let data_dir = temp_dir.path();
    onboard(data_dir, "Al", "30", "weight-loss");

    let meals_before = fs::read_to_string(data_dir.join("meal_plan.json")).unwrap();

    cli(data_dir)
        .args(["level", "advanced"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Fitness level set to Advanced"));

    let profile = read_json(&data_dir.join("profile.json"));
    assert_eq!(profile["fitness_level"], "advanced");

    let meals_after = fs::read_to_string(data_dir.join("meal_plan.json")).unwrap();
    assert_eq!(meals_before, meals_after);
}

#[test]
fn test_goal_change_regenerates_both_plans() {
    let temp_dir = setup_test_dir();
    let data_dir = temp_dir.path();
    onboard(data_dir, "Al", "30", "weight-loss");

    cli(data_dir)
        .args(["goal", "flexibility"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Both plans regenerated"));

    let workout = read_json(&data_dir.join("workout_plan.json"));
    assert_eq!(workout["days"][0]["exercises"][0]["name"], "Yoga");

    let meals = read_json(&data_dir.join("meal_plan.json"));
    let breakfast = meals["days"][0]["breakfast"]["name"].as_str().unwrap();
    assert!(
        ["Vegetable Omelet", "Smoothie Bowl", "Porridge & Berries"].contains(&breakfast),
        "unexpected breakfast {}",
        breakfast
    );
}

#[test]
fn test_today_shows_agenda() {
    let temp_dir = setup_test_dir();
    onboard(temp_dir.path(), "Al", "30", "general-fitness");

    cli(temp_dir.path())
        .arg("today")
        .assert()
        .success()
        .stdout(predicate::str::contains("TODAY:"))
        .stdout(predicate::str::contains("meals"));
}

#[test]
fn test_export_creates_csv() {
    let temp_dir = setup_test_dir();
    let data_dir = temp_dir.path();
    onboard(data_dir, "Al", "30", "weight-loss");

    let csv_path = data_dir.join("export").join("week.csv");

    cli(data_dir)
        .arg("export")
        .arg("--out")
        .arg(&csv_path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Exported 7 days"));

    let csv_content = fs::read_to_string(&csv_path).expect("Failed to read CSV");
    assert!(csv_content.starts_with("day,rest,exercises"));
    assert_eq!(csv_content.lines().count(), 8);
}

#[test]
fn test_reset_removes_records() {
    let temp_dir = setup_test_dir();
    let data_dir = temp_dir.path();
    onboard(data_dir, "Al", "30", "weight-loss");

    cli(data_dir)
        .arg("reset")
        .assert()
        .success()
        .stdout(predicate::str::contains("deleted"));

    assert!(!data_dir.join("profile.json").exists());
    assert!(!data_dir.join("workout_plan.json").exists());
    assert!(!data_dir.join("meal_plan.json").exists());

    // Resetting an empty data dir is fine too
    cli(data_dir).arg("reset").assert().success();
}

#[test]
fn test_config_file_sets_data_dir() {
    let temp_dir = setup_test_dir();
    let config_home = temp_dir.path().join("xdg");
    let data_dir = temp_dir.path().join("from-config");

    fs::create_dir_all(config_home.join("powerpal")).unwrap();
    fs::write(
        config_home.join("powerpal").join("config.toml"),
        format!("[data]\ndata_dir = {:?}\n", data_dir.to_string_lossy()),
    )
    .unwrap();

    Command::cargo_bin("powerpal")
        .expect("Failed to find powerpal binary")
        .env("XDG_CONFIG_HOME", &config_home)
        .args(["setup", "--name", "Al", "--age", "30"])
        .assert()
        .success();

    assert!(data_dir.join("profile.json").exists());
}

#[test]
fn test_malformed_config_falls_back_to_defaults() {
    let temp_dir = setup_test_dir();
    let data_dir = temp_dir.path();

    let config_dir = data_dir.join("config").join("powerpal");
    fs::create_dir_all(&config_dir).unwrap();
    fs::write(config_dir.join("config.toml"), "[data\n").unwrap();

    cli(data_dir)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage"));

    cli(data_dir)
        .args(["setup", "--name", "Al", "--age", "30"])
        .assert()
        .success()
        .stderr(predicate::str::contains("Ignoring unreadable config file"));

    assert!(data_dir.join("profile.json").exists());
}
