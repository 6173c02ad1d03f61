//! # cstructgen
//!
//! C struct header generation from Rust type shape descriptors.
//!
//! Given a record type, cstructgen recursively discovers every nested record
//! reachable from it, validates that each field has a C-representable type,
//! and emits a single deterministic C header containing typedef'd structs and
//! the `#include` directives their field types require.
//!
//! ## Quick Start
//!
//! ```ignore
//! use cstructgen::prelude::*;
//!
//! #[derive(CShape)]
//! struct Sample {
//!     id: u64,
//!     values: [f64; 8],
//!     active: bool,
//! }
//!
//! let mut generator = Generator::new(GeneratorOptions::default());
//! generator.add_type::<Sample>()?;
//! generator.write_to("sample_gen.h", "SAMPLE_GEN_H")?;
//! ```
//!
//! ## Crate Organization
//!
//! - [`shape`] - Type shape descriptors and validation
//! - [`collect`] - Recursive, deduplicating struct collection
//! - [`render`] - Deterministic C header rendering
//! - [`generator`] - Configuration and the accumulate-then-write façade

pub mod collect;
pub mod defs;
pub mod error;
pub mod generator;
pub mod prelude;
pub mod render;

/// Type shape descriptors and validation.
pub mod shape {
    pub use cstructgen_shape::*;
}

pub use cstructgen_derive::CShape;
pub use cstructgen_shape::CShape;
pub use defs::{IncludeSet, StructDefs, StructField, TypeModifier};
pub use error::CodegenError;
pub use generator::{Generator, GeneratorOptions};
