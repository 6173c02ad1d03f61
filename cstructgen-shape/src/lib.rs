//! # cstructgen Shape
//!
//! Type shape descriptors and C-representability validation.
//!
//! This crate provides:
//! - An abstract type-shape model decoupled from any reflection mechanism
//! - The [`CShape`] trait through which Rust types describe their own shape
//! - Validation that a shape has a faithful C representation

pub mod describe;
pub mod error;
pub mod types;
pub mod validation;

pub use describe::CShape;
pub use error::ShapeError;
pub use types::{FieldKind, FieldShape, RecordShape, TypeShape};
pub use validation::validate_shape;
