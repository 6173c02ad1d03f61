//! Convenience re-exports for common usage.

pub use crate::error::CodegenError;
pub use crate::generator::{Generator, GeneratorOptions};
pub use cstructgen_derive::CShape;
pub use cstructgen_shape::{CShape, FieldKind, FieldShape, RecordShape, TypeShape};
