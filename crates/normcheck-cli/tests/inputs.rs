//! Integration tests for configuration and exercise loading.

use std::fs;

use normcheck_cli::config::Config;
use normcheck_cli::input::load_exercise;
use normcheck_model::{FunctionalDependency, attribute_set};

#[test]
fn test_load_exercise_mixed_dependency_forms() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("answer.json");
    fs::write(
        &path,
        r#"{
            "attributes": ["order", "product", "qty", "customer"],
            "fds": [
                "order, product -> qty",
                {"lhs": ["order"], "rhs": ["customer"]}
            ],
            "primary_key": ["order", "product"]
        }"#,
    )
    .unwrap();

    let exercise = load_exercise(&path).unwrap();

    assert_eq!(exercise.attributes.len(), 4);
    assert_eq!(
        exercise.dependencies(),
        vec![
            FunctionalDependency::new(["order", "product"], "qty"),
            FunctionalDependency::new(["order"], "customer"),
        ]
    );
    assert_eq!(
        exercise.primary_key_set(),
        Some(attribute_set(["order", "product"]))
    );
}

#[test]
fn test_load_exercise_reports_path_on_bad_json() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("broken.json");
    fs::write(&path, r#"{"fds": ["order customer"]}"#).unwrap();

    let error = load_exercise(&path).unwrap_err();

    let message = format!("{error:#}");
    assert!(message.contains("broken.json"), "{message}");
}

#[test]
fn test_load_exercise_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    assert!(load_exercise(&dir.path().join("absent.json")).is_err());
}

#[test]
fn test_config_file_sets_grading_options() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("normcheck.toml");
    fs::write(&path, "[keys]\nmax_optional = 8\n").unwrap();

    let config = Config::load_optional(Some(path.as_path())).unwrap();
    let options = config.grading_options();

    assert_eq!(options.key_search.max_optional, 8);
    assert!(!options.strict_nested_order);
}

#[test]
fn test_config_absent_path_uses_defaults() {
    assert_eq!(Config::load_optional(None).unwrap(), Config::default());
}
