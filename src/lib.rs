//! # ontic - stance-neutrality analysis for classified ontologies
//!
//! ontic decides whether a finite collection of classified assertions can
//! remain logically stable when layered with arbitrary, mutually
//! disagreeing interpretive frameworks.
//!
//! ## Core concepts
//!
//! - **Primitive**: a classified atomic assertion (causal, normative, or
//!   neutral) with an opaque identifier
//! - **Ontology**: a finite, ordered collection of primitives, the unit
//!   of analysis
//! - **Framework**: an interpretive stance assigning affirm/deny/silent
//!   outcomes to primitives, consistent by construction
//! - **Neutrality**: the property that no admissible framework denies
//!   anything the ontology asserts; decided via the linear
//!   classification scan, not by enumerating frameworks
//!
//! ## Usage
//!
//! ```
//! use ontic::{neutrality, Ontology, Primitive};
//!
//! let ontology = Ontology::new(vec![
//!     Primitive::neutral("entity_A").unwrap(),
//!     Primitive::causal("A_caused_B").unwrap(),
//! ]);
//!
//! assert!(ontology.contains_causal_or_normative());
//! assert!(!neutrality::assess(&ontology).is_neutral());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod admissibility;
pub mod error;
pub mod extension;
pub mod framework;
pub mod neutrality;
pub mod ontology;
pub mod primitive;

// Re-export primary types at crate root for convenience
pub use admissibility::{AdmissibilityPolicy, PermitAllConsistent};
pub use error::{OnticResult, ValidationError};
pub use extension::{extension_inconsistent, inconsistency_witness};
pub use framework::{Framework, FrameworkBuilder, Stance};
pub use neutrality::Verdict;
pub use ontology::Ontology;
pub use primitive::{Primitive, PrimitiveKind};
