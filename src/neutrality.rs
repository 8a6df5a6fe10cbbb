//! Neutrality: extension stability under every admissible framework.
//!
//! An ontology `S` is *neutral* when no admissible framework produces an
//! extension inconsistency with it:
//!
//! ```text
//! Neutral(S)  :=  for every admissible framework F,
//!                 NOT extension_inconsistent(S, F)
//! ```
//!
//! This quantifies over an open-ended space of frameworks and is not
//! evaluable by enumeration; nothing in this crate attempts to. Instead,
//! neutrality is established indirectly through the equivalence below,
//! which reduces it to the linear classification scan
//! [`Ontology::contains_causal_or_normative`].
//!
//! # Domain axioms
//!
//! Two facts are assumed about any domain this model is applied to. They
//! are preconditions supplied by the caller's context, never checked or
//! checkable by code here:
//!
//! 1. **Framework relativity**: every primitive of non-neutral kind is
//!    denied by at least one admissible framework. Causal and normative
//!    claims are always contested by some legitimate stance.
//! 2. **Neutral primitives undisputed**: no admissible framework denies a
//!    primitive of neutral kind. Pure existence and identity claims are
//!    never rejected.
//!
//! A caller whose domain violates either axiom must treat the equivalence
//! as inapplicable rather than expect a runtime check to catch it.
//!
//! # The equivalence
//!
//! For every ontology `S`, given the axioms:
//!
//! ```text
//! Neutral(S)  <=>  contains_causal_or_normative(S) = false
//! ```
//!
//! *Forward, by contraposition*: if the scan reports true, it yields a
//! witness primitive of non-neutral kind; by framework relativity some
//! admissible framework denies that witness; layering that framework over
//! `S` is an extension inconsistency, since the witness is a member and
//! is denied. One witness suffices however many non-neutral primitives
//! `S` contains.
//!
//! *Backward*: if the scan reports false, every member of `S` is of
//! neutral kind. Suppose some admissible framework denied a member; that
//! member would be neutral-kind, contradicting the second axiom. So no
//! admissible framework denies any member, which is neutrality. The
//! empty ontology satisfies this trivially.
//!
//! The equivalence is exercised as a randomized property in
//! `tests/equivalence.rs`, with framework generation constrained to the
//! two axioms.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::ontology::Ontology;
use crate::primitive::Primitive;

/// Outcome of assessing an ontology for neutrality via the scan.
///
/// `Contested` carries the first non-neutral primitive found: the
/// witness whose denial (guaranteed by framework relativity) defeats
/// neutrality.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "verdict")]
pub enum Verdict {
    /// No causal or normative primitive present; by the equivalence the
    /// ontology is stable under every admissible framework.
    Neutral,
    /// At least one primitive is contestable.
    Contested {
        /// First non-neutral primitive in sequence order.
        witness: Primitive,
    },
}

impl Verdict {
    /// Returns true for the `Neutral` verdict.
    #[must_use]
    pub const fn is_neutral(&self) -> bool {
        matches!(self, Self::Neutral)
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Neutral => write!(f, "neutral"),
            Self::Contested { witness } => write!(f, "contested by {witness}"),
        }
    }
}

/// Assesses an ontology for neutrality.
///
/// A thin wrapper over the classification scan; authoritative for the
/// non-executable predicate under the module-level domain axioms.
#[must_use]
pub fn assess(ontology: &Ontology) -> Verdict {
    match ontology.first_non_neutral() {
        None => Verdict::Neutral,
        Some(witness) => Verdict::Contested {
            witness: witness.clone(),
        },
    }
}
