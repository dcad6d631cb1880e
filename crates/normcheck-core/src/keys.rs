//! Candidate key search.
//!
//! Attributes that never appear as a dependent belong to every key
//! (`mandatory`); the rest (`optional`) are enumerated depth-first with an
//! explicit worklist. A node that is already a superkey is never expanded,
//! and the collected keys are kept as an antichain at all times.

use normcheck_model::{
    Attribute, AttributeSet, FunctionalDependency, KeySearchOptions, KeySearchResult,
};
use tracing::{debug, warn};

use crate::closure::ClosureCache;

/// Enumerates the minimal superkeys of `relation` under `fds`.
///
/// When more than `options.max_optional` attributes are optional, only the
/// first `max_optional` in sorted order are enumerated and the result is
/// flagged as truncated; keys needing a skipped attribute are then missed.
/// Keys are returned in discovery order.
pub fn candidate_keys(
    relation: &AttributeSet,
    fds: &[FunctionalDependency],
    options: &KeySearchOptions,
) -> KeySearchResult {
    let dependents: AttributeSet = fds.iter().map(|fd| fd.rhs.clone()).collect();
    let mandatory: AttributeSet = relation.difference(&dependents).cloned().collect();
    let mut optional: Vec<Attribute> = relation.intersection(&dependents).cloned().collect();

    if optional.is_empty() {
        return KeySearchResult {
            keys: vec![mandatory],
            ..KeySearchResult::default()
        };
    }

    let skipped = if optional.len() > options.max_optional {
        let skipped = optional.split_off(options.max_optional);
        warn!(
            optional = optional.len() + skipped.len(),
            max_optional = options.max_optional,
            skipped = skipped.len(),
            "candidate key search truncated; result may be incomplete"
        );
        skipped
    } else {
        Vec::new()
    };

    let mut cache = ClosureCache::new(fds);
    let mut keys: Vec<AttributeSet> = Vec::new();
    let mut nodes_visited = 0u64;
    // (next optional index, mandatory plus chosen optional attributes)
    let mut worklist = vec![(0usize, mandatory)];

    while let Some((idx, current)) = worklist.pop() {
        nodes_visited += 1;
        if cache.is_superkey(&current, relation) {
            record_key(&mut keys, current);
            continue;
        }
        let Some(next) = optional.get(idx) else {
            continue;
        };
        let mut with_next = current.clone();
        with_next.insert(next.clone());
        // Exclusion branch is popped first.
        worklist.push((idx + 1, with_next));
        worklist.push((idx + 1, current));
    }

    debug!(
        keys = keys.len(),
        nodes_visited,
        cache_hits = cache.hits(),
        truncated = !skipped.is_empty(),
        "candidate key search finished"
    );

    KeySearchResult {
        keys,
        truncated: !skipped.is_empty(),
        skipped,
        nodes_visited,
    }
}

/// Adds `candidate` unless a known key is a proper subset of it, evicting
/// known keys that are proper supersets of it.
fn record_key(keys: &mut Vec<AttributeSet>, candidate: AttributeSet) {
    let is_proper_subset = |small: &AttributeSet, large: &AttributeSet| {
        small.len() < large.len() && small.is_subset(large)
    };
    if keys.iter().any(|key| is_proper_subset(key, &candidate)) {
        return;
    }
    keys.retain(|key| !is_proper_subset(&candidate, key));
    keys.push(candidate);
}
