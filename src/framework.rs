//! Interpretive frameworks and their consistency invariant.
//!
//! A framework is an interpretive stance: for every primitive it answers
//! whether it affirms it, denies it, or stays silent. The source model
//! treats `affirms` and `denies` as total predicates over an unbounded
//! primitive domain; here they are explicit partial lookups over a finite
//! stance table, with silence the default for unmapped primitives. The
//! queries remain total and the frameworks stay finite and constructible.
//!
//! The one invariant, enforced at construction so a violating value never
//! exists: no primitive is both affirmed and denied by the same framework.

use std::collections::HashSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{OnticResult, ValidationError};
use crate::primitive::Primitive;

/// A framework's answer for a single primitive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Stance {
    /// The framework accepts the primitive.
    Affirmed,
    /// The framework rejects the primitive.
    Denied,
    /// The framework takes no position. This is the answer for every
    /// primitive outside the framework's stance table.
    #[default]
    Silent,
}

impl fmt::Display for Stance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Affirmed => write!(f, "affirmed"),
            Self::Denied => write!(f, "denied"),
            Self::Silent => write!(f, "silent"),
        }
    }
}

/// An internally consistent interpretive stance over primitives.
///
/// Built only through [`FrameworkBuilder`], which rejects any attempt to
/// both affirm and deny the same primitive. Deserialization runs the same
/// check, so no construction path yields an inconsistent value. `affirms`
/// and `denies` are total: every primitive gets an answer, with silence
/// for primitives the framework never mentions.
///
/// # Examples
///
/// ```
/// use ontic::{Framework, Primitive, Stance};
///
/// let contested = Primitive::causal("A_caused_B").unwrap();
/// let framework = Framework::builder()
///     .deny(contested.clone())
///     .build()
///     .unwrap();
///
/// assert!(framework.denies(&contested));
/// assert_eq!(
///     framework.stance(&Primitive::neutral("entity_A").unwrap()),
///     Stance::Silent,
/// );
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "StanceTable")]
pub struct Framework {
    affirmed: HashSet<Primitive>,
    denied: HashSet<Primitive>,
}

impl Framework {
    /// Single validated construction path; every other way of obtaining a
    /// `Framework` funnels through here.
    fn from_stances(
        affirmed: HashSet<Primitive>,
        denied: HashSet<Primitive>,
    ) -> OnticResult<Self> {
        if let Some(conflicted) = affirmed.intersection(&denied).next() {
            return Err(ValidationError::ConflictingStance {
                id: conflicted.id.clone(),
            });
        }
        Ok(Self { affirmed, denied })
    }

    /// Starts building a framework.
    #[must_use]
    pub fn builder() -> FrameworkBuilder {
        FrameworkBuilder::default()
    }

    /// The framework with an empty stance table: silent on everything.
    #[must_use]
    pub fn silent() -> Self {
        Self::default()
    }

    /// Returns true if this framework affirms the primitive. Total.
    #[must_use]
    pub fn affirms(&self, primitive: &Primitive) -> bool {
        self.affirmed.contains(primitive)
    }

    /// Returns true if this framework denies the primitive. Total.
    #[must_use]
    pub fn denies(&self, primitive: &Primitive) -> bool {
        self.denied.contains(primitive)
    }

    /// Three-valued stance lookup.
    #[must_use]
    pub fn stance(&self, primitive: &Primitive) -> Stance {
        if self.affirmed.contains(primitive) {
            Stance::Affirmed
        } else if self.denied.contains(primitive) {
            Stance::Denied
        } else {
            Stance::Silent
        }
    }

    /// Number of primitives with a non-silent stance.
    #[must_use]
    pub fn len(&self) -> usize {
        self.affirmed.len() + self.denied.len()
    }

    /// Returns true if the framework is silent on every primitive.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.affirmed.is_empty() && self.denied.is_empty()
    }

    /// Iterates the primitives this framework denies.
    pub fn denied_primitives(&self) -> impl Iterator<Item = &Primitive> {
        self.denied.iter()
    }
}

/// Builder for [`Framework`] values.
///
/// Collects stances and enforces the consistency invariant in
/// [`build`](FrameworkBuilder::build): a primitive recorded on both sides
/// makes the whole framework unbuildable.
#[derive(Debug, Default)]
pub struct FrameworkBuilder {
    affirmed: HashSet<Primitive>,
    denied: HashSet<Primitive>,
}

impl FrameworkBuilder {
    /// Creates an empty builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records an affirming stance on the primitive.
    #[must_use]
    pub fn affirm(mut self, primitive: Primitive) -> Self {
        self.affirmed.insert(primitive);
        self
    }

    /// Records a denying stance on the primitive.
    #[must_use]
    pub fn deny(mut self, primitive: Primitive) -> Self {
        self.denied.insert(primitive);
        self
    }

    /// Builds the framework, rejecting any primitive with stances on
    /// both sides.
    pub fn build(self) -> OnticResult<Framework> {
        Framework::from_stances(self.affirmed, self.denied)
    }
}

/// Raw stance sets as they appear on the wire. Deserialization goes
/// through `TryFrom` so a document with a primitive on both sides is
/// rejected instead of materializing an inconsistent framework.
#[derive(Debug, Deserialize)]
struct StanceTable {
    #[serde(default)]
    affirmed: HashSet<Primitive>,
    #[serde(default)]
    denied: HashSet<Primitive>,
}

impl TryFrom<StanceTable> for Framework {
    type Error = ValidationError;

    fn try_from(table: StanceTable) -> Result<Self, Self::Error> {
        Self::from_stances(table.affirmed, table.denied)
    }
}
