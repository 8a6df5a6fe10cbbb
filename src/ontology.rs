//! Ontology container and the classification scan.
//!
//! An ontology is the unit of analysis: a finite, ordered sequence of
//! primitives. Order and duplication are permitted but carry no meaning;
//! every property defined over an ontology is membership-only. The scan
//! in this module is the single computable decision surface the crate
//! exposes: it replaces the unbounded quantification over frameworks that
//! defines neutrality (see [`crate::neutrality`]) with one linear pass
//! over the sequence itself.

use serde::{Deserialize, Serialize};

use crate::primitive::Primitive;

/// A finite, ordered collection of primitives.
///
/// Any sequence is valid, including the empty one; there is no invariant
/// to maintain. Constructed wholesale by the caller and read-only to
/// every component of the core.
///
/// # Examples
///
/// ```
/// use ontic::{Ontology, Primitive};
///
/// let ontology = Ontology::new(vec![
///     Primitive::neutral("entity_A").unwrap(),
///     Primitive::causal("A_caused_B").unwrap(),
/// ]);
/// assert!(ontology.contains_causal_or_normative());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Ontology {
    primitives: Vec<Primitive>,
}

impl Ontology {
    /// Creates an ontology from a sequence of primitives.
    #[must_use]
    pub fn new(primitives: Vec<Primitive>) -> Self {
        Self { primitives }
    }

    /// Creates an empty ontology.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Number of primitives in the sequence, duplicates included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.primitives.len()
    }

    /// Returns true if the ontology asserts nothing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.primitives.is_empty()
    }

    /// Membership test, structural equality on kind and id.
    #[must_use]
    pub fn contains(&self, primitive: &Primitive) -> bool {
        self.primitives.contains(primitive)
    }

    /// Iterates the primitives in sequence order.
    pub fn iter(&self) -> std::slice::Iter<'_, Primitive> {
        self.primitives.iter()
    }

    /// The classification scan: reports whether any primitive in the
    /// sequence is of non-neutral kind.
    ///
    /// Pure, total, and deterministic; terminates in time linear in the
    /// sequence length. By the equivalence documented in
    /// [`crate::neutrality`], a `false` result is authoritative for the
    /// otherwise non-executable neutrality predicate.
    #[must_use]
    pub fn contains_causal_or_normative(&self) -> bool {
        self.primitives.iter().any(|p| !p.kind.is_neutral())
    }

    /// First non-neutral primitive in sequence order, if any.
    ///
    /// This is the witness the contraposition argument extracts: one
    /// contested primitive suffices to defeat neutrality, regardless of
    /// how many others the ontology contains.
    #[must_use]
    pub fn first_non_neutral(&self) -> Option<&Primitive> {
        self.primitives.iter().find(|p| !p.kind.is_neutral())
    }
}

impl From<Vec<Primitive>> for Ontology {
    fn from(primitives: Vec<Primitive>) -> Self {
        Self::new(primitives)
    }
}

impl FromIterator<Primitive> for Ontology {
    fn from_iter<I: IntoIterator<Item = Primitive>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Ontology {
    type Item = &'a Primitive;
    type IntoIter = std::slice::Iter<'a, Primitive>;

    fn into_iter(self) -> Self::IntoIter {
        self.primitives.iter()
    }
}
