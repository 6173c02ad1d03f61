//! Error types for shape validation.

use thiserror::Error;

/// Error type for shape validation.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ShapeError {
    /// The shape has no valid C representation.
    #[error("cannot translate a {kind} to C, field '{field_path}'")]
    InvalidType {
        /// Kind of the offending shape.
        kind: &'static str,
        /// Dotted path from the root record to the offending field.
        field_path: String,
    },

    /// A machine-width integer with no explicit bit width.
    #[error(
        "a {kind} can vary in size across C platforms, use an explicit bit width (i.e. i32 instead of isize), field '{field_path}'"
    )]
    UnderspecifiedType {
        /// Kind of the offending shape.
        kind: &'static str,
        /// Dotted path from the root record to the offending field.
        field_path: String,
    },

    /// An anonymous record, which cannot be given a C typedef.
    #[error("anonymous records are not supported, add a name, field '{field_path}'")]
    AnonymousName {
        /// Dotted path from the root record to the offending field.
        field_path: String,
    },
}

impl ShapeError {
    /// Creates an invalid type error.
    pub fn invalid_type(kind: &'static str, field_path: impl Into<String>) -> Self {
        Self::InvalidType {
            kind,
            field_path: field_path.into(),
        }
    }

    /// Creates an underspecified type error.
    pub fn underspecified(kind: &'static str, field_path: impl Into<String>) -> Self {
        Self::UnderspecifiedType {
            kind,
            field_path: field_path.into(),
        }
    }

    /// Creates an anonymous name error.
    pub fn anonymous(field_path: impl Into<String>) -> Self {
        Self::AnonymousName {
            field_path: field_path.into(),
        }
    }
}
