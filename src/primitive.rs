//! Primitive types: the classified atomic assertions under analysis.
//!
//! A primitive is the smallest unit an ontology asserts. Its kind is the
//! only attribute the neutrality machinery ever inspects; the identifier
//! is opaque and carried only so frameworks can address individual
//! primitives.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{OnticResult, ValidationError};

/// Classification of a primitive assertion.
///
/// The enumeration is closed: every primitive is exactly one of these,
/// and no other classification is representable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PrimitiveKind {
    /// A claim that something brings about something else.
    Causal,
    /// A claim about obligation, permission, or value.
    Normative,
    /// A pure existence or identity claim with no causal or
    /// normative content.
    Neutral,
}

impl PrimitiveKind {
    /// Returns true for the `Neutral` kind.
    #[must_use]
    pub const fn is_neutral(&self) -> bool {
        matches!(self, Self::Neutral)
    }

    /// Returns true for the `Causal` kind.
    #[must_use]
    pub const fn is_causal(&self) -> bool {
        matches!(self, Self::Causal)
    }

    /// Returns true for the `Normative` kind.
    #[must_use]
    pub const fn is_normative(&self) -> bool {
        matches!(self, Self::Normative)
    }
}

impl fmt::Display for PrimitiveKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Causal => write!(f, "causal"),
            Self::Normative => write!(f, "normative"),
            Self::Neutral => write!(f, "neutral"),
        }
    }
}

/// A classified atomic assertion.
///
/// Equality is structural: two primitives are the same assertion exactly
/// when both kind and identifier match. The identifier is never
/// interpreted by this crate.
///
/// # Examples
///
/// ```
/// use ontic::{Primitive, PrimitiveKind};
///
/// let p = Primitive::causal("A_caused_B").unwrap();
/// assert_eq!(p.kind, PrimitiveKind::Causal);
/// assert!(!p.kind.is_neutral());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Primitive {
    /// The classification driving all neutrality analysis.
    pub kind: PrimitiveKind,
    /// Opaque identifier; distinct ids denote distinct assertions.
    pub id: String,
}

impl Primitive {
    /// Creates a primitive of the given kind.
    ///
    /// Rejects an empty identifier: an assertion with no identity
    /// cannot be addressed by any framework. This guard is the only
    /// place the identifier is ever inspected; the neutrality model
    /// itself treats it as fully opaque.
    pub fn new(kind: PrimitiveKind, id: impl Into<String>) -> OnticResult<Self> {
        let id = id.into();
        if id.is_empty() {
            return Err(ValidationError::EmptyPrimitiveId);
        }
        Ok(Self { kind, id })
    }

    /// Creates a causal primitive.
    pub fn causal(id: impl Into<String>) -> OnticResult<Self> {
        Self::new(PrimitiveKind::Causal, id)
    }

    /// Creates a normative primitive.
    pub fn normative(id: impl Into<String>) -> OnticResult<Self> {
        Self::new(PrimitiveKind::Normative, id)
    }

    /// Creates a neutral primitive.
    pub fn neutral(id: impl Into<String>) -> OnticResult<Self> {
        Self::new(PrimitiveKind::Neutral, id)
    }
}

impl fmt::Display for Primitive {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.kind, self.id)
    }
}
