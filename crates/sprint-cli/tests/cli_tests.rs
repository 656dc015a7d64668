//! CLI integration tests using assert_cmd.

use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// A command running in `dir` with no ambient config or overrides.
fn maths_sprint(dir: &Path) -> Command {
    #[allow(deprecated)]
    let mut cmd = Command::cargo_bin("maths-sprint").unwrap();
    cmd.current_dir(dir)
        .env("HOME", dir)
        .env_remove("MATHS_SPRINT_RESULTS")
        .env_remove("MATHS_SPRINT_USER")
        .env_remove("RUST_LOG");
    cmd
}

fn generate_json(dir: &Path, args: &[&str]) -> serde_json::Value {
    let output = maths_sprint(dir)
        .arg("generate")
        .args(args)
        .args(["--format", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());
    serde_json::from_slice(&output.stdout).unwrap()
}

#[test]
fn help_lists_commands() {
    let dir = TempDir::new().unwrap();
    maths_sprint(dir.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("generate"))
        .stdout(predicate::str::contains("quiz"))
        .stdout(predicate::str::contains("stats"));
}

#[test]
fn generate_text_is_reproducible_with_seed() {
    let dir = TempDir::new().unwrap();
    let run = || {
        maths_sprint(dir.path())
            .args(["generate", "--operation", "addition", "--count", "3", "--seed", "9"])
            .output()
            .unwrap()
    };
    let first = run();
    assert!(first.status.success());
    assert_eq!(first.stdout, run().stdout);

    let text = String::from_utf8(first.stdout).unwrap();
    assert!(text.contains("1. "));
    assert!(text.contains("3. "));
    assert!(text.contains(" + "));
    assert!(text.contains("4) "));
}

#[test]
fn generate_json_questions() {
    let dir = TempDir::new().unwrap();
    let json = generate_json(
        dir.path(),
        &["--operation", "square", "--min", "1", "--max", "12", "--count", "5", "--seed", "1"],
    );
    let questions = json.as_array().unwrap();
    assert_eq!(questions.len(), 5);
    for q in questions {
        let options = q["options"].as_array().unwrap();
        assert_eq!(options.len(), 4);
        assert!(options.contains(&q["correctAnswer"]));
        assert_eq!(q["operation"], "square");
        assert!(q["prompt"].as_str().unwrap().ends_with("² = ?"));
    }
}

#[test]
fn generate_trigonometry_uses_symbols() {
    let dir = TempDir::new().unwrap();
    let json = generate_json(dir.path(), &["--operation", "trigonometry", "--count", "4"]);
    for q in json.as_array().unwrap() {
        assert!(q["correctAnswer"].is_string());
        assert!(q["prompt"].as_str().unwrap().contains("° = ?"));
    }
}

#[test]
fn generate_accepts_legacy_alias() {
    let dir = TempDir::new().unwrap();
    let json = generate_json(dir.path(), &["--operation", "cubes", "--count", "2"]);
    assert_eq!(json[0]["operation"], "cube");
}

#[test]
fn unknown_operation_fails() {
    let dir = TempDir::new().unwrap();
    maths_sprint(dir.path())
        .args(["generate", "--operation", "modulo"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error"))
        .stderr(predicate::str::contains("modulo"));
}

#[test]
fn invalid_range_fails() {
    let dir = TempDir::new().unwrap();
    maths_sprint(dir.path())
        .args(["generate", "--operation", "addition", "--min", "10", "--max", "2"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error"));
}

#[test]
fn generate_accepts_negative_range() {
    let dir = TempDir::new().unwrap();
    let json = generate_json(
        dir.path(),
        &["--operation", "addition", "--min", "-5", "--max", "5", "--count", "20", "--seed", "3"],
    );
    for q in json.as_array().unwrap() {
        let answer = q["correctAnswer"].as_i64().unwrap();
        assert!((-10..=10).contains(&answer));
        assert_eq!(q["options"].as_array().unwrap().len(), 4);
    }
}

#[test]
fn unknown_format_fails() {
    let dir = TempDir::new().unwrap();
    maths_sprint(dir.path())
        .args(["generate", "--operation", "addition", "--format", "xml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown format"));
}

#[test]
fn quiz_saves_result_to_history() {
    let dir = TempDir::new().unwrap();
    maths_sprint(dir.path())
        .args(["quiz", "--operation", "multiplication", "--count", "3", "--seed", "4"])
        .write_stdin("1\n2\n3\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Question 3/3"))
        .stdout(predicate::str::contains("Quiz complete, Math Sprinter!"))
        .stdout(predicate::str::contains("Result saved to"));

    let saved = std::fs::read_to_string(dir.path().join("maths-sprint-data/results.json")).unwrap();
    let doc: serde_json::Value = serde_json::from_str(&saved).unwrap();
    let results = doc["mathsSprintResults"].as_array().unwrap();
    assert_eq!(results.len(), 1);
    assert_eq!(results[0]["operation"], "multiplication");
    assert_eq!(results[0]["totalQuestions"], 3);

    maths_sprint(dir.path())
        .arg("history")
        .assert()
        .success()
        .stdout(predicate::str::contains("multiplication"))
        .stdout(predicate::str::contains("Showing 1 of 1"));
}

#[test]
fn quitting_a_quiz_saves_nothing() {
    let dir = TempDir::new().unwrap();
    maths_sprint(dir.path())
        .args(["quiz", "--operation", "addition", "--count", "3"])
        .write_stdin("1\nq\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("result not saved"));

    assert!(!dir.path().join("maths-sprint-data/results.json").exists());
}

#[test]
fn empty_history_message() {
    let dir = TempDir::new().unwrap();
    maths_sprint(dir.path())
        .arg("history")
        .assert()
        .success()
        .stdout(predicate::str::contains("No quizzes recorded yet"));
}

#[test]
fn stats_after_quiz() {
    let dir = TempDir::new().unwrap();
    maths_sprint(dir.path())
        .args(["quiz", "--operation", "division", "--count", "2", "--seed", "2"])
        .write_stdin("1\n1\n")
        .assert()
        .success();

    maths_sprint(dir.path())
        .arg("stats")
        .assert()
        .success()
        .stdout(predicate::str::contains("division"))
        .stdout(predicate::str::contains("trigonometry"))
        .stdout(predicate::str::contains("Quizzes: 1"))
        .stdout(predicate::str::contains("All time"));
}

#[test]
fn profile_set_and_show() {
    let dir = TempDir::new().unwrap();
    maths_sprint(dir.path())
        .args(["profile", "--name", "  Ada  "])
        .assert()
        .success()
        .stdout(predicate::str::contains("Profile name set to Ada"));

    maths_sprint(dir.path())
        .arg("profile")
        .assert()
        .success()
        .stdout(predicate::str::contains("Name: Ada"))
        .stdout(predicate::str::contains("Quizzes taken: 0"));
}

#[test]
fn blank_profile_name_fails() {
    let dir = TempDir::new().unwrap();
    maths_sprint(dir.path())
        .args(["profile", "--name", "   "])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid profile name"));
}

#[test]
fn user_env_overrides_config() {
    let dir = TempDir::new().unwrap();
    maths_sprint(dir.path())
        .env("MATHS_SPRINT_USER", "Grace")
        .arg("profile")
        .assert()
        .success()
        .stdout(predicate::str::contains("Name: Grace"));
}

#[test]
fn init_creates_config() {
    let dir = TempDir::new().unwrap();

    maths_sprint(dir.path())
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Created sprint.toml"));
    assert!(dir.path().join("sprint.toml").exists());

    maths_sprint(dir.path())
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("already exists, skipping"));
}

#[test]
fn config_defaults_drive_generation() {
    let dir = TempDir::new().unwrap();
    std::fs::write(
        dir.path().join("sprint.toml"),
        "default_question_count = 7\ndefault_min = 3\ndefault_max = 3\n",
    )
    .unwrap();

    let json = generate_json(dir.path(), &["--operation", "cube"]);
    let questions = json.as_array().unwrap();
    assert_eq!(questions.len(), 7);
    assert!(questions.iter().all(|q| q["correctAnswer"] == 27));
}

#[test]
fn missing_explicit_config_fails() {
    let dir = TempDir::new().unwrap();
    maths_sprint(dir.path())
        .args(["--config", "nope.toml", "history"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("config file not found"));
}

#[test]
fn clear_empties_history() {
    let dir = TempDir::new().unwrap();
    maths_sprint(dir.path())
        .args(["quiz", "--operation", "square", "--count", "1"])
        .write_stdin("1\n")
        .assert()
        .success();

    maths_sprint(dir.path())
        .arg("clear")
        .assert()
        .success()
        .stdout(predicate::str::contains("Quiz history cleared"));

    maths_sprint(dir.path())
        .arg("history")
        .assert()
        .success()
        .stdout(predicate::str::contains("No quizzes recorded yet"));
}
