//! Extension consistency: what happens when a framework is layered over
//! an ontology.
//!
//! Extending an ontology with a framework is inconsistent exactly when
//! the framework denies something the ontology asserts. The relation is
//! existential over membership and total, since `denies` answers for
//! every primitive. Affirmation and silence never create inconsistency;
//! only denial of a member does.

use crate::framework::Framework;
use crate::ontology::Ontology;
use crate::primitive::Primitive;

/// Returns true if the framework denies at least one primitive the
/// ontology contains.
#[must_use]
pub fn extension_inconsistent(ontology: &Ontology, framework: &Framework) -> bool {
    ontology.iter().any(|p| framework.denies(p))
}

/// First member primitive the framework denies, in sequence order.
///
/// `Some` exactly when [`extension_inconsistent`] is true.
#[must_use]
pub fn inconsistency_witness<'a>(
    ontology: &'a Ontology,
    framework: &Framework,
) -> Option<&'a Primitive> {
    ontology.iter().find(|p| framework.denies(p))
}
