//! Whole-exercise grading tests.

use normcheck_grade::{GradingContext, check_primary_key, grade_exercise};
use normcheck_model::{
    Attribute, CompoundDependency, Exercise, FailureReason, GradingOptions, KeySearchOptions,
    Relation, ScoreLabel, Task, TaskNote, TaskStatus, attribute_set,
};

fn attrs(names: &[&str]) -> Vec<Attribute> {
    names.iter().copied().map(Attribute::from).collect()
}

fn dep(text: &str) -> CompoundDependency {
    text.parse().expect("valid dependency")
}

/// Order lines: (order, product) -> qty; order -> customer; customer -> city;
/// product -> price.
fn reference() -> Exercise {
    Exercise {
        attributes: attrs(&["order", "product", "qty", "customer", "city", "price"]),
        fds: vec![
            dep("order, product -> qty"),
            dep("order -> customer"),
            dep("customer -> city"),
            dep("product -> price"),
        ],
        primary_key: Some(attrs(&["order", "product"])),
        partial: None,
        transitive: Some(vec![dep("customer -> city")]),
        schema_2nf: Some(vec![
            Relation::new("lines", ["order", "product", "qty"]),
            Relation::new("orders", ["order", "customer", "city"]),
            Relation::new("products", ["product", "price"]),
        ]),
        schema_3nf: Some(vec![
            Relation::new("lines", ["order", "product", "qty"]),
            Relation::new("orders", ["order", "customer"]),
            Relation::new("customers", ["customer", "city"]),
            Relation::new("products", ["product", "price"]),
        ]),
    }
}

#[test]
fn reference_answer_grades_itself_clean() {
    let reference = reference();
    let student = Exercise {
        partial: Some(vec![dep("order -> customer"), dep("product -> price")]),
        ..reference.clone()
    };
    let report = grade_exercise(&reference, &student, &GradingOptions::default());

    assert!(report.fingerprint_match);
    assert_eq!(report.tasks.len(), Task::ALL.len());
    for result in &report.tasks {
        assert_eq!(result.status, TaskStatus::Pass, "{:?}", result);
    }
    assert_eq!(report.score.map(|score| score.label), Some(ScoreLabel::Full));
    assert!(!report.has_failures());
}

#[test]
fn flawed_answer_fails_the_right_tasks() {
    let reference = reference();
    let student = Exercise {
        attributes: reference.attributes.clone(),
        fds: vec![dep("order, product -> qty"), dep("order -> customer")],
        primary_key: Some(attrs(&["order", "product", "qty"])),
        partial: Some(vec![dep("order -> customer")]),
        transitive: Some(vec![dep("customer -> city")]),
        schema_2nf: reference.schema_2nf.clone(),
        schema_3nf: Some(vec![
            Relation::new("lines", ["order", "product", "qty"]),
            Relation::new("orders", ["order", "customer", "city"]),
            Relation::new("products", ["product", "price"]),
        ]),
    };
    let report = grade_exercise(&reference, &student, &GradingOptions::default());

    let status = |task| report.task(task).map(|result| result.status);
    assert_eq!(status(Task::Dependencies), Some(TaskStatus::Fail));
    assert_eq!(status(Task::PrimaryKey), Some(TaskStatus::Fail));
    assert_eq!(status(Task::PartialDependencies), Some(TaskStatus::Fail));
    assert_eq!(status(Task::PartialChains), Some(TaskStatus::Fail));
    assert_eq!(status(Task::TransitiveDependencies), Some(TaskStatus::Pass));
    assert_eq!(status(Task::SecondNormalFormSchema), Some(TaskStatus::Pass));
    assert_eq!(status(Task::ThirdNormalFormSchema), Some(TaskStatus::Fail));
    assert_eq!(report.score.map(|score| score.label), Some(ScoreLabel::Most));

    let third = report.task(Task::ThirdNormalFormSchema).expect("3NF task");
    assert!(matches!(
        &third.reason,
        Some(FailureReason::NormalFormViolation { relation, .. }) if relation == "orders"
    ));
    let chains = report.task(Task::TransitiveChains).expect("chain task");
    assert_eq!(chains.notes, vec![TaskNote::OrderNotChecked]);
}

#[test]
fn reordered_attribute_list_warns_unless_strict() {
    let reference = reference();
    let mut attributes = reference.attributes.clone();
    attributes.reverse();
    let student = Exercise {
        attributes,
        ..reference.clone()
    };

    let report = grade_exercise(&reference, &student, &GradingOptions::default());
    let result = report.task(Task::Attributes).expect("attribute task");
    assert_eq!(result.status, TaskStatus::Warn);
    assert_eq!(result.reason, Some(FailureReason::AttributeOrder));
    assert!(report.fingerprint_match);
    assert_eq!(report.count(TaskStatus::Warn), 1);
    assert!(!report.has_failures());

    let strict = GradingOptions::default().with_strict_attribute_order(true);
    let report = grade_exercise(&reference, &student, &strict);
    assert_eq!(
        report.task(Task::Attributes).map(|result| result.status),
        Some(TaskStatus::Fail)
    );
    assert!(report.has_failures());
}

#[test]
fn empty_reference_is_insufficient() {
    let report = grade_exercise(
        &Exercise::default(),
        &reference(),
        &GradingOptions::default(),
    );
    assert!(!report.fingerprint_match);
    assert!(report.score.is_none());
    assert!(report
        .tasks
        .iter()
        .all(|result| result.status == TaskStatus::Insf));
}

#[test]
fn missing_reference_key_is_insufficient() {
    let reference = Exercise {
        primary_key: None,
        ..reference()
    };
    let report = grade_exercise(&reference, &reference, &GradingOptions::default());
    for task in [Task::PrimaryKey, Task::PartialDependencies, Task::PartialChains] {
        let result = report.task(task).expect("task present");
        assert_eq!(result.status, TaskStatus::Insf);
        assert_eq!(result.reason, Some(FailureReason::NoPrimaryKey));
    }
}

#[test]
fn not_minimal_key_verdict_snapshot() {
    let ctx = GradingContext::new(
        attribute_set(["A", "B", "C"]),
        &CompoundDependency::new(["A"], ["B", "C"]).split(),
        KeySearchOptions::default(),
    );
    let result = check_primary_key(&ctx, &attrs(&["A", "B"]), &attrs(&["A", "B"]));
    insta::assert_json_snapshot!(result, @r#"
    {
      "task": "primary_key",
      "status": "FAIL",
      "reason": {
        "kind": "not_minimal"
      },
      "expected": [
        "A",
        "B"
      ],
      "actual": [
        "A",
        "B"
      ]
    }
    "#);
}
