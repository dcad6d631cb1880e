//! Second and third normal form classification for a single relation.
//!
//! Both checks take the relation's local dependencies (see [`project_fds`])
//! and its candidate keys, and report every violating dependency.

use normcheck_model::{
    AttributeSet, FdSet, FunctionalDependency, NormalFormReport, prime_attributes,
};

use crate::closure::is_superkey;

/// Dependencies whose attributes all lie inside `relation`, in input order.
pub fn project_fds(relation: &AttributeSet, fds: &[FunctionalDependency]) -> FdSet {
    fds.iter()
        .filter(|fd| fd.lhs.is_subset(relation) && relation.contains(&fd.rhs))
        .cloned()
        .collect()
}

/// Partial dependencies: the left side is a proper subset of some key and the
/// dependent is non-prime.
pub fn check_2nf(
    _relation: &AttributeSet,
    local_fds: &[FunctionalDependency],
    keys: &[AttributeSet],
) -> NormalFormReport {
    let prime = prime_attributes(keys);
    let violations = local_fds
        .iter()
        .filter(|fd| !fd.is_trivial() && !prime.contains(&fd.rhs))
        .filter(|fd| {
            keys.iter()
                .any(|key| fd.lhs.len() < key.len() && fd.lhs.is_subset(key))
        })
        .cloned()
        .collect();
    NormalFormReport::from_violations(violations)
}

/// Transitive dependencies: the left side is not a superkey of the relation
/// and the dependent is non-prime.
pub fn check_3nf(
    relation: &AttributeSet,
    local_fds: &[FunctionalDependency],
    keys: &[AttributeSet],
) -> NormalFormReport {
    let prime = prime_attributes(keys);
    let violations = local_fds
        .iter()
        .filter(|fd| !fd.is_trivial() && !prime.contains(&fd.rhs))
        .filter(|fd| !is_superkey(&fd.lhs, relation, local_fds))
        .cloned()
        .collect();
    NormalFormReport::from_violations(violations)
}
