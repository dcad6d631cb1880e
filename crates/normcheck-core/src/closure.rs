//! Attribute-set closure under a set of functional dependencies.

use std::collections::HashMap;

use normcheck_model::{AttributeSet, FunctionalDependency};

/// Computes `X+`: every attribute determined by `attrs` under `fds`.
///
/// Rescans the dependency list until a full pass adds nothing. Attributes
/// that no dependency mentions are inert and simply stay where they are.
pub fn closure(attrs: &AttributeSet, fds: &[FunctionalDependency]) -> AttributeSet {
    let mut result = attrs.clone();
    let mut changed = true;
    while changed {
        changed = false;
        for fd in fds {
            if result.contains(&fd.rhs) {
                continue;
            }
            if fd.lhs.is_subset(&result) {
                result.insert(fd.rhs.clone());
                changed = true;
            }
        }
    }
    result
}

/// True when the closure of `attrs` covers every attribute of `relation`.
pub fn is_superkey(
    attrs: &AttributeSet,
    relation: &AttributeSet,
    fds: &[FunctionalDependency],
) -> bool {
    closure(attrs, fds).is_superset(relation)
}

/// Memoized closures for one dependency set.
///
/// Scoped to a single search; dropping it discards every entry.
#[derive(Debug)]
pub struct ClosureCache<'a> {
    fds: &'a [FunctionalDependency],
    entries: HashMap<AttributeSet, AttributeSet>,
    hits: u64,
}

impl<'a> ClosureCache<'a> {
    pub fn new(fds: &'a [FunctionalDependency]) -> Self {
        Self {
            fds,
            entries: HashMap::new(),
            hits: 0,
        }
    }

    pub fn closure(&mut self, attrs: &AttributeSet) -> &AttributeSet {
        if self.entries.contains_key(attrs) {
            self.hits += 1;
        } else {
            let computed = closure(attrs, self.fds);
            self.entries.insert(attrs.clone(), computed);
        }
        &self.entries[attrs]
    }

    pub fn is_superkey(&mut self, attrs: &AttributeSet, relation: &AttributeSet) -> bool {
        self.closure(attrs).is_superset(relation)
    }

    pub fn hits(&self) -> u64 {
        self.hits
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use normcheck_model::attribute_set;

    use super::*;

    fn fd(lhs: &[&str], rhs: &str) -> FunctionalDependency {
        FunctionalDependency::new(lhs.iter().copied(), rhs)
    }

    #[test]
    fn closure_of_empty_inputs() {
        assert!(closure(&AttributeSet::new(), &[]).is_empty());
        assert_eq!(closure(&attribute_set(["A"]), &[]), attribute_set(["A"]));
    }

    #[test]
    fn closure_follows_chains() {
        let fds = vec![fd(&["A"], "B"), fd(&["B"], "C")];
        assert_eq!(
            closure(&attribute_set(["A"]), &fds),
            attribute_set(["A", "B", "C"])
        );
        assert_eq!(
            closure(&attribute_set(["B"]), &fds),
            attribute_set(["B", "C"])
        );
        assert_eq!(closure(&attribute_set(["C"]), &fds), attribute_set(["C"]));
    }

    #[test]
    fn closure_needs_full_lhs() {
        // AB -> C listed before A -> B forces a second pass.
        let fds = vec![fd(&["A", "B"], "C"), fd(&["A"], "B")];
        assert_eq!(
            closure(&attribute_set(["A"]), &fds),
            attribute_set(["A", "B", "C"])
        );
    }

    #[test]
    fn unknown_attributes_are_inert() {
        let fds = vec![fd(&["A"], "B")];
        assert_eq!(
            closure(&attribute_set(["Z"]), &fds),
            attribute_set(["Z"])
        );
    }

    #[test]
    fn superkey_check() {
        let relation = attribute_set(["A", "B", "C"]);
        let fds = vec![fd(&["A"], "B"), fd(&["B"], "C")];
        assert!(is_superkey(&attribute_set(["A"]), &relation, &fds));
        assert!(!is_superkey(&attribute_set(["B"]), &relation, &fds));
        assert!(is_superkey(&attribute_set(["A", "B"]), &relation, &fds));
    }

    #[test]
    fn cache_reuses_entries() {
        let fds = vec![fd(&["A"], "B")];
        let mut cache = ClosureCache::new(&fds);
        let key = attribute_set(["A"]);
        assert_eq!(cache.closure(&key), &attribute_set(["A", "B"]));
        assert_eq!(cache.closure(&key), &attribute_set(["A", "B"]));
        assert_eq!(cache.hits(), 1);
        assert_eq!(cache.len(), 1);
    }
}
