//! Checks over a proposed decomposition of the universal relation.
//!
//! Lossless join and dependency preservation are sufficient-condition tests,
//! not decision procedures: a `false` from either means "not shown", which
//! callers report as a warning rather than a failure.

use normcheck_model::{
    AttributeSet, CoverageReport, FunctionalDependency, KeySearchOptions, Relation,
    union_attributes,
};
use tracing::debug;

use crate::cover::minimal_cover;
use crate::keys::candidate_keys;

/// Compares the union of all relation attributes with `universe`.
pub fn coverage_check(universe: &AttributeSet, relations: &[Relation]) -> CoverageReport {
    let union = union_attributes(relations);
    let missing: AttributeSet = universe.difference(&union).cloned().collect();
    let extra: AttributeSet = union.difference(universe).cloned().collect();
    CoverageReport {
        ok: missing.is_empty() && extra.is_empty(),
        missing,
        extra,
    }
}

/// True when some relation holds a whole candidate key of `(universe, fds)`.
pub fn lossless_join_basic(
    universe: &AttributeSet,
    fds: &[FunctionalDependency],
    relations: &[Relation],
) -> bool {
    lossless_join_with(universe, fds, relations, &KeySearchOptions::default())
}

/// [`lossless_join_basic`] with an explicit key search bound.
pub fn lossless_join_with(
    universe: &AttributeSet,
    fds: &[FunctionalDependency],
    relations: &[Relation],
    options: &KeySearchOptions,
) -> bool {
    let search = candidate_keys(universe, fds, options);
    let holder = relations.iter().find(|relation| {
        search
            .keys
            .iter()
            .any(|key| key.is_subset(&relation.attributes))
    });
    if let Some(relation) = holder {
        debug!(relation = %relation.name, "relation holds a candidate key");
    }
    holder.is_some()
}

/// True when every dependency of the minimal cover of `fds` fits entirely
/// inside a single relation.
///
/// Dependencies only enforceable through a combination of relations are
/// reported as not preserved.
pub fn dependency_preservation_approx(
    fds: &[FunctionalDependency],
    relations: &[Relation],
) -> bool {
    minimal_cover(fds).iter().all(|fd| {
        let attrs = fd.attributes();
        let preserved = relations
            .iter()
            .any(|relation| attrs.is_subset(&relation.attributes));
        if !preserved {
            debug!(dependency = %fd, "dependency not held by any single relation");
        }
        preserved
    })
}
