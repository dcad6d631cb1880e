//! Minimal cover computation.
//!
//! Three steps, each relying on the previous one:
//!
//! 1. split right-hand sides so every dependency has one dependent attribute;
//! 2. drop left-hand attributes that the rest of the left side already
//!    implies the dependent from;
//! 3. drop dependencies implied by the remaining ones.
//!
//! Left-hand minimization tests against the split working set, which still
//! contains the dependency being minimized. The working set is closure
//! equivalent to the input, so every drop it allows is sound.

use normcheck_model::{AttributeSet, CompoundDependency, FdSet, FunctionalDependency, split_all};
use tracing::trace;

use crate::closure::closure;

/// Minimal cover of single-RHS dependencies.
///
/// The output is sorted (left side, then dependent) and free of duplicates,
/// so two inputs listing the same dependencies in different orders produce
/// the same cover.
pub fn minimal_cover(fds: &[FunctionalDependency]) -> FdSet {
    let working = fds.to_vec();
    let mut minimized: FdSet = working
        .iter()
        .map(|fd| FunctionalDependency {
            lhs: minimize_lhs(&fd.lhs, fd, &working),
            rhs: fd.rhs.clone(),
        })
        .collect();
    minimized.sort();
    minimized.dedup();
    remove_redundant(minimized)
}

/// Minimal cover of dependencies whose right-hand side may list several attributes.
pub fn minimal_cover_compound(deps: &[CompoundDependency]) -> FdSet {
    minimal_cover(&split_all(deps))
}

/// Drops attributes from `lhs` one at a time, in sorted order.
///
/// A dropped attribute stays dropped for the following tests. The left side
/// is never reduced to nothing.
fn minimize_lhs(
    lhs: &AttributeSet,
    fd: &FunctionalDependency,
    working: &[FunctionalDependency],
) -> AttributeSet {
    let mut current = lhs.clone();
    for attr in lhs {
        if current.len() <= 1 {
            break;
        }
        let mut without = current.clone();
        without.remove(attr);
        if closure(&without, working).contains(&fd.rhs) {
            trace!(dependency = %fd, attribute = %attr, "dropped extraneous attribute");
            current = without;
        }
    }
    current
}

/// Removes dependencies implied by the others.
///
/// Each test runs against the dependencies still kept, so of two mutually
/// implied copies exactly one survives.
fn remove_redundant(mut fds: FdSet) -> FdSet {
    let mut idx = 0;
    while idx < fds.len() {
        let candidate = fds.remove(idx);
        if closure(&candidate.lhs, &fds).contains(&candidate.rhs) {
            trace!(dependency = %candidate, "dropped redundant dependency");
        } else {
            fds.insert(idx, candidate);
            idx += 1;
        }
    }
    fds
}
