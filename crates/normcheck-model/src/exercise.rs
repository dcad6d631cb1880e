//! One side (reference or student) of a normalization exercise, as handed
//! over by the parsing layer.

use serde::{Deserialize, Serialize};

use crate::attribute::{Attribute, AttributeSet};
use crate::dependency::{CompoundDependency, FdSet, split_all};
use crate::relation::Decomposition;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Exercise {
    /// Universal relation attributes, in answer order.
    pub attributes: Vec<Attribute>,
    /// Functional dependencies of the universal relation.
    pub fds: Vec<CompoundDependency>,
    pub primary_key: Option<Vec<Attribute>>,
    pub partial: Option<Vec<CompoundDependency>>,
    pub transitive: Option<Vec<CompoundDependency>>,
    pub schema_2nf: Option<Decomposition>,
    pub schema_3nf: Option<Decomposition>,
}

impl Exercise {
    pub fn universe(&self) -> AttributeSet {
        self.attributes.iter().cloned().collect()
    }

    /// Dependencies with single-attribute right-hand sides.
    pub fn dependencies(&self) -> FdSet {
        split_all(&self.fds)
    }

    pub fn primary_key_set(&self) -> Option<AttributeSet> {
        self.primary_key
            .as_ref()
            .map(|key| key.iter().cloned().collect())
    }

    pub fn partial_dependencies(&self) -> Option<FdSet> {
        self.partial.as_deref().map(split_all)
    }

    pub fn transitive_dependencies(&self) -> Option<FdSet> {
        self.transitive.as_deref().map(split_all)
    }
}
