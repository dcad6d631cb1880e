//! End-to-end scenarios across the engine.

use normcheck_core::{
    candidate_keys, check_3nf, closure, coverage_check, lossless_join_basic, minimal_cover,
    project_fds,
};
use normcheck_model::{FunctionalDependency, KeySearchOptions, Relation, attribute_set};

fn fd(lhs: &[&str], rhs: &str) -> FunctionalDependency {
    FunctionalDependency::new(lhs.iter().copied(), rhs)
}

#[test]
fn chain_closure_and_cover() {
    let fds = vec![fd(&["A"], "B"), fd(&["B"], "C")];
    assert_eq!(
        closure(&attribute_set(["A"]), &fds),
        attribute_set(["A", "B", "C"])
    );
    assert_eq!(minimal_cover(&fds), fds);
}

#[test]
fn composite_key_from_single_dependency() {
    let relation = attribute_set(["A", "B", "C"]);
    let result = candidate_keys(&relation, &[fd(&["A", "B"], "C")], &KeySearchOptions::default());
    assert_eq!(result.keys, vec![attribute_set(["A", "B"])]);
}

#[test]
fn chain_violates_third_normal_form() {
    let relation = attribute_set(["A", "B", "C"]);
    let fds = vec![fd(&["A"], "B"), fd(&["B"], "C")];
    let keys = candidate_keys(&relation, &fds, &KeySearchOptions::default()).keys;
    assert_eq!(keys, vec![attribute_set(["A"])]);

    let local = project_fds(&relation, &fds);
    let report = check_3nf(&relation, &local, &keys);
    assert!(!report.ok);
    assert_eq!(report.violations, vec![fd(&["B"], "C")]);
}

#[test]
fn key_preserving_decomposition() {
    let universe = attribute_set(["A", "B", "C", "D"]);
    let fds = vec![fd(&["A"], "B"), fd(&["A"], "C"), fd(&["A"], "D")];
    let relations = vec![
        Relation::new("R1", ["A", "B"]),
        Relation::new("R2", ["A", "C", "D"]),
    ];
    assert!(coverage_check(&universe, &relations).ok);
    assert!(lossless_join_basic(&universe, &fds, &relations));
}
