//! Accumulated struct definitions.
//!
//! This module holds the output side of the collection pass: one emitted C
//! field line per struct field, keyed by record name. Field order within a
//! record follows source declaration order; cross-record order is imposed by
//! the renderer, so the backing maps stay unordered.

use std::collections::{HashMap, HashSet};
use std::fmt;

/// Mapping from record name to its ordered field list.
pub type StructDefs = HashMap<String, Vec<StructField>>;

/// Set of required include directives, deduplicated. Sorted at render time.
pub type IncludeSet = HashSet<&'static str>;

/// The single outermost wrapping applied to a field's base type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeModifier {
    /// No wrapping.
    None,
    /// Pointer to the base type.
    Pointer,
    /// Fixed-size array with the given element count.
    Array(usize),
}

/// One emitted line inside a C struct body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StructField {
    /// How the base type is wrapped.
    pub modifier: TypeModifier,
    /// C base type token, e.g. `int32_t` or `point_t`.
    pub base_type: String,
    /// Field name.
    pub name: String,
}

impl StructField {
    /// Creates a struct field.
    #[must_use]
    pub fn new(
        modifier: TypeModifier,
        base_type: impl Into<String>,
        name: impl Into<String>,
    ) -> Self {
        Self {
            modifier,
            base_type: base_type.into(),
            name: name.into(),
        }
    }
}

impl fmt::Display for StructField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.modifier {
            TypeModifier::Pointer => write!(f, "{}* {}", self.base_type, self.name),
            TypeModifier::Array(len) => write!(f, "{} {}[{}]", self.base_type, self.name, len),
            TypeModifier::None => write!(f, "{} {}", self.base_type, self.name),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_field() {
        let field = StructField::new(TypeModifier::None, "int8_t", "f1");
        assert_eq!(field.to_string(), "int8_t f1");
    }

    #[test]
    fn test_pointer_field() {
        let field = StructField::new(TypeModifier::Pointer, "double", "samples");
        assert_eq!(field.to_string(), "double* samples");
    }

    #[test]
    fn test_array_field() {
        let field = StructField::new(TypeModifier::Array(16), "uint8_t", "tag");
        assert_eq!(field.to_string(), "uint8_t tag[16]");
    }
}
