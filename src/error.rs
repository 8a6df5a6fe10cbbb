//! Error types for ontic.
//!
//! The core has no runtime failure modes: every query is total over valid
//! values. The only errors are construction-time rejections of values that
//! would break an invariant the rest of the model depends on.

use thiserror::Error;

/// Validation errors raised while constructing model values.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// A framework recorded both an affirming and a denying stance on the
    /// same primitive. Such a framework is internally inconsistent and no
    /// downstream property holds for it, so the value is never built.
    #[error("framework both affirms and denies primitive '{id}'")]
    ConflictingStance {
        /// Identifier of the primitive with contradictory stances.
        id: String,
    },

    /// Primitive identifier cannot be empty.
    #[error("primitive id cannot be empty")]
    EmptyPrimitiveId,
}

/// Result type alias for ontic constructors.
pub type OnticResult<T> = Result<T, ValidationError>;
