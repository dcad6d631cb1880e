use serde::{Deserialize, Serialize};

use crate::attribute::{Attribute, AttributeSet};

/// One table of a proposed schema.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Relation {
    pub name: String,
    pub attributes: AttributeSet,
}

impl Relation {
    pub fn new<I, A>(name: impl Into<String>, attributes: I) -> Self
    where
        I: IntoIterator<Item = A>,
        A: Into<Attribute>,
    {
        Self {
            name: name.into(),
            attributes: attributes.into_iter().map(Into::into).collect(),
        }
    }
}

/// Relations proposed to replace the universal relation, in answer order.
pub type Decomposition = Vec<Relation>;

/// Union of every relation's attributes.
pub fn union_attributes(relations: &[Relation]) -> AttributeSet {
    relations
        .iter()
        .flat_map(|relation| relation.attributes.iter().cloned())
        .collect()
}
