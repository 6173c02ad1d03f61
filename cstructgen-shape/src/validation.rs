//! Shape validation.
//!
//! Recursively checks a type shape for C-representability before any struct
//! collection takes place.

use crate::error::ShapeError;
use crate::types::{FieldKind, TypeShape};
use tracing::warn;

/// Validates that a shape has a faithful C representation.
///
/// `field_path` is the dotted path from the root record to the shape being
/// checked; it is empty for the root record itself. Pointer and array
/// wrappers do not add a path segment.
///
/// Opaque address types pass validation but cannot be checked further; they
/// are emitted as `void*` and a warning is logged.
///
/// # Errors
/// Returns `ShapeError` describing the first unrepresentable field found.
pub fn validate_shape(shape: &TypeShape, field_path: &str) -> Result<(), ShapeError> {
    match shape {
        TypeShape::Map
        | TypeShape::Channel
        | TypeShape::Function
        | TypeShape::Interface
        | TypeShape::Complex => Err(ShapeError::invalid_type(shape.kind_name(), field_path)),
        TypeShape::MachineInt { .. } => {
            Err(ShapeError::underspecified(shape.kind_name(), field_path))
        }
        TypeShape::Scalar(FieldKind::VoidPtr) => {
            warn!(
                field_path,
                "cannot validate the pointee of a raw pointer, it will be emitted as a void*"
            );
            Ok(())
        }
        TypeShape::Scalar(_) => Ok(()),
        TypeShape::Pointer(elem) => validate_shape(elem, field_path),
        TypeShape::Array { elem, .. } => validate_shape(elem, field_path),
        TypeShape::Record(record) => {
            if record.name.is_empty() {
                return Err(ShapeError::anonymous(field_path));
            }
            for field in &record.fields {
                let child_path = if field_path.is_empty() {
                    field.name.clone()
                } else {
                    format!("{field_path}.{}", field.name)
                };
                validate_shape(&field.shape, &child_path)?;
            }
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{FieldShape, RecordShape};

    fn record(name: &str, fields: Vec<FieldShape>) -> TypeShape {
        TypeShape::Record(RecordShape::new(name, fields))
    }

    #[test]
    fn test_valid_record() {
        let shape = record(
            "point",
            vec![
                FieldShape::new("x", TypeShape::Scalar(FieldKind::Float)),
                FieldShape::new("y", TypeShape::Scalar(FieldKind::Float)),
                FieldShape::new("label", TypeShape::Scalar(FieldKind::CharPtr)),
            ],
        );
        assert!(validate_shape(&shape, "").is_ok());
    }

    #[test]
    fn test_raw_pointer_is_soft() {
        let shape = record(
            "handle",
            vec![FieldShape::new(
                "ctx",
                TypeShape::Scalar(FieldKind::VoidPtr),
            )],
        );
        assert!(validate_shape(&shape, "").is_ok());
    }

    #[test]
    fn test_map_field_fails_with_path() {
        let inner = record("inner", vec![FieldShape::new("lookup", TypeShape::Map)]);
        let shape = record(
            "outer",
            vec![
                FieldShape::new("id", TypeShape::Scalar(FieldKind::Uint32)),
                FieldShape::new("inner", inner),
            ],
        );
        let err = validate_shape(&shape, "").unwrap_err();
        assert_eq!(
            err,
            ShapeError::InvalidType {
                kind: "map",
                field_path: "inner.lookup".to_string(),
            }
        );
    }

    #[test]
    fn test_machine_int_fails() {
        let shape = record(
            "sizes",
            vec![FieldShape::new(
                "count",
                TypeShape::MachineInt { signed: false },
            )],
        );
        let err = validate_shape(&shape, "").unwrap_err();
        assert!(matches!(
            err,
            ShapeError::UnderspecifiedType { field_path, .. } if field_path == "count"
        ));
    }

    #[test]
    fn test_anonymous_record_fails() {
        let anon = record("", Vec::new());
        let shape = record("outer", vec![FieldShape::new("inner", anon)]);
        let err = validate_shape(&shape, "").unwrap_err();
        assert_eq!(
            err,
            ShapeError::AnonymousName {
                field_path: "inner".to_string(),
            }
        );
    }

    #[test]
    fn test_modifier_does_not_extend_path() {
        let shape = record(
            "outer",
            vec![FieldShape::new(
                "callbacks",
                TypeShape::Array {
                    len: 4,
                    elem: Box::new(TypeShape::Pointer(Box::new(TypeShape::Function))),
                },
            )],
        );
        let err = validate_shape(&shape, "").unwrap_err();
        assert_eq!(
            err,
            ShapeError::InvalidType {
                kind: "function",
                field_path: "callbacks".to_string(),
            }
        );
    }
}
