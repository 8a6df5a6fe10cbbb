//! Admissibility policy for frameworks.
//!
//! Neutrality quantifies over *admissible* frameworks only. The current
//! model applies a single global policy: every internally consistent
//! framework is admissible. The policy is an injectable strategy so a
//! narrower, domain-specific rule can be substituted later without
//! touching the rest of the model; no such rule is assumed here.

use crate::framework::Framework;

/// Decides which frameworks count as legitimate interpretive stances.
pub trait AdmissibilityPolicy {
    /// Returns true if the framework is admissible under this policy.
    fn admits(&self, framework: &Framework) -> bool;
}

/// The permissive global policy: every consistent framework qualifies.
///
/// Consistency is a construction invariant of [`Framework`], so this
/// policy admits every framework value that exists.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PermitAllConsistent;

impl AdmissibilityPolicy for PermitAllConsistent {
    fn admits(&self, _framework: &Framework) -> bool {
        true
    }
}
