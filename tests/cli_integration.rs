//! Integration tests for the el-mention CLI.
//!
//! Runs the binary over small dataset files in a temp directory.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

const DATASET: &str = r#"{
    "dataset": {"id": "tiny"},
    "questions": [
        {"id": 1, "question_id": 1, "question": "Who killed Abraham Lincoln?",
         "dbr": "http://dbpedia.org/resource/Abraham_Lincoln"},
        {"id": 2, "question_id": 2, "question": "I love New York City a lot",
         "dbr": "http://dbpedia.org/resource/New_York_City"},
        {"id": 3, "question_id": 3, "question": "What does JFK stand for?",
         "dbr": "http://dbpedia.org/resource/John_F._Kennedy"}
    ]
}"#;

fn setup_dataset() -> (TempDir, std::path::PathBuf) {
    let dir = tempfile::tempdir().expect("Failed to create temp directory");
    let path = dir.path().join("tiny.json");
    fs::write(&path, DATASET).expect("Failed to write dataset");
    (dir, path)
}

fn el_mention() -> Command {
    let mut cmd = Command::cargo_bin("el-mention").unwrap();
    cmd.env_remove("RUST_LOG");
    cmd
}

fn read_json(path: &std::path::Path) -> serde_json::Value {
    serde_json::from_str(&fs::read_to_string(path).unwrap()).unwrap()
}

#[test]
fn test_process_default_output_path() {
    let (dir, path) = setup_dataset();

    el_mention()
        .args(["process", "-d", path.to_str().unwrap()])
        .assert()
        .success();

    let out = read_json(&dir.path().join("tiny_processed.json"));
    assert_eq!(out["dataset"]["id"], "tiny");
    assert_eq!(out["questions"][0]["mention"], "Abraham Lincoln");
    assert_eq!(out["questions"][1]["mention"], "New York City");
    // Input fields pass through unchanged
    assert_eq!(out["questions"][0]["question"], "Who killed Abraham Lincoln?");
}

#[test]
fn test_process_baseline_parallel() {
    let (dir, path) = setup_dataset();
    let output = dir.path().join("baseline.json");

    el_mention()
        .args([
            "process",
            "-d",
            path.to_str().unwrap(),
            "--baseline",
            "--parallel",
            "-o",
            output.to_str().unwrap(),
        ])
        .assert()
        .success();

    let out = read_json(&output);
    assert_eq!(out["questions"].as_array().unwrap().len(), 3);
    assert_eq!(out["questions"][1]["mention"], "New York City");
}

#[test]
fn test_process_with_config_file() {
    let (dir, path) = setup_dataset();
    let config = dir.path().join("run.toml");
    fs::write(&config, "method = \"baseline\"\noutput_suffix = \"_base\"\n").unwrap();

    el_mention()
        .args([
            "process",
            "-d",
            path.to_str().unwrap(),
            "-c",
            config.to_str().unwrap(),
        ])
        .assert()
        .success()
        .stderr(predicate::str::contains("baseline"));

    assert!(dir.path().join("tiny_base.json").exists());
}

#[test]
fn test_process_bad_config_fails() {
    let (dir, path) = setup_dataset();
    let config = dir.path().join("run.toml");
    fs::write(&config, "threshold = 0.5\n").unwrap();

    el_mention()
        .args([
            "process",
            "-d",
            path.to_str().unwrap(),
            "-c",
            config.to_str().unwrap(),
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to load config"));
}

#[test]
fn test_process_missing_dataset_fails() {
    el_mention()
        .args(["process", "-d", "/nonexistent/data.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to load dataset"));
}

#[test]
fn test_evaluate_against_labels_with_keep() {
    let (dir, path) = setup_dataset();
    el_mention()
        .args(["process", "-d", path.to_str().unwrap()])
        .assert()
        .success();

    let processed = dir.path().join("tiny_processed.json");
    el_mention()
        .args(["evaluate", "-d", processed.to_str().unwrap(), "-k"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Acc 0.6667 (2/3)"));

    let misses = read_json(&dir.path().join("tiny_processed_misses.json"));
    let misses = misses["questions"].as_array().unwrap();
    assert_eq!(misses.len(), 1);
    assert_eq!(misses[0]["id"], 3);
}

#[test]
fn test_evaluate_against_annotations() {
    let (dir, path) = setup_dataset();
    el_mention()
        .args(["process", "-d", path.to_str().unwrap()])
        .assert()
        .success();

    let annotations = dir.path().join("annotations.json");
    fs::write(
        &annotations,
        r#"{"total": {
            "annotated": [
                {"id": 1, "question_id": 1, "dbr": "http://dbpedia.org/resource/Abraham_Lincoln", "mention": "Abraham Lincoln"},
                {"id": 3, "question_id": 3, "dbr": "http://dbpedia.org/resource/John_F._Kennedy", "mention": "John F Kennedy"}
            ],
            "errors": {"abbreviation": [[3, 3]]}
        }}"#,
    )
    .unwrap();

    let processed = dir.path().join("tiny_processed.json");
    el_mention()
        .args([
            "evaluate",
            "-d",
            processed.to_str().unwrap(),
            "-a",
            annotations.to_str().unwrap(),
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#"{"abbreviation":[[3,3]]}"#))
        .stdout(predicate::str::contains("Acc 0.5000 (1/2)"));
}

#[test]
fn test_stats() {
    let (_dir, path) = setup_dataset();
    el_mention()
        .args(["stats", "-d", path.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Unique Questions 3"))
        .stdout(predicate::str::contains("Unique Entities 3"))
        .stdout(predicate::str::contains("Total Samples 3"));
}

#[test]
fn test_stats_json() {
    let (_dir, path) = setup_dataset();
    el_mention()
        .args(["stats", "-d", path.to_str().unwrap(), "--json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"total_samples\": 3"));
}

#[test]
fn test_stats_to_file() {
    let (dir, path) = setup_dataset();
    let output = dir.path().join("stats.json");

    el_mention()
        .args([
            "stats",
            "-d",
            path.to_str().unwrap(),
            "--json",
            "-o",
            output.to_str().unwrap(),
        ])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    let stats = read_json(&output);
    assert_eq!(stats["unique_questions"], 3);
    assert_eq!(stats["total_samples"], 3);
}

#[test]
fn test_help_lists_commands() {
    el_mention()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("process"))
        .stdout(predicate::str::contains("evaluate"))
        .stdout(predicate::str::contains("stats"));
}
