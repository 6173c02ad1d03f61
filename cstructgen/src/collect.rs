//! Struct collection.
//!
//! Recursively walks a validated type shape and accumulates struct
//! definitions and required includes. Record bodies are expanded at most
//! once: a record name already present in the definitions map is only ever
//! referenced again, never re-expanded, which also bounds the recursion when
//! the same record is reachable through multiple paths.

use crate::defs::{IncludeSet, StructDefs, StructField, TypeModifier};
use cstructgen_shape::TypeShape;
use std::collections::HashMap;

/// Walks `shape` and appends its C representation to `defs` and `includes`.
///
/// `record_name` is the record the current field belongs to (empty at the top
/// level), `field_name` the name the field is emitted under, and `modifier`
/// the wrapping accumulated from enclosing pointer/array shapes. Record names
/// are resolved through `renames` before use.
///
/// Assumes `shape` already passed validation; encountering a shape that
/// validation would have rejected is an internal invariant violation.
pub fn collect_shape(
    shape: &TypeShape,
    record_name: &str,
    field_name: &str,
    modifier: TypeModifier,
    renames: &HashMap<String, String>,
    defs: &mut StructDefs,
    includes: &mut IncludeSet,
) {
    match shape {
        TypeShape::Scalar(kind) => {
            defs.entry(record_name.to_string())
                .or_default()
                .push(StructField::new(modifier, kind.c_token(), field_name));
            if let Some(include) = kind.include() {
                includes.insert(include);
            }
        }
        TypeShape::Array { len, elem } => {
            collect_shape(
                elem,
                record_name,
                field_name,
                TypeModifier::Array(*len),
                renames,
                defs,
                includes,
            );
        }
        TypeShape::Pointer(elem) => {
            collect_shape(
                elem,
                record_name,
                field_name,
                TypeModifier::Pointer,
                renames,
                defs,
                includes,
            );
        }
        TypeShape::Record(record) => {
            let resolved = renames
                .get(&record.name)
                .cloned()
                .unwrap_or_else(|| record.name.clone());

            if !record_name.is_empty() {
                defs.entry(record_name.to_string()).or_default().push(
                    StructField::new(modifier, format!("{resolved}_t"), field_name),
                );
            }

            // Already expanded under this name: reference only.
            if defs.contains_key(&resolved) {
                return;
            }
            defs.insert(resolved.clone(), Vec::new());

            // A wrapping modifier applies to the referencing field, not to
            // the record's own fields.
            for field in &record.fields {
                collect_shape(
                    &field.shape,
                    &resolved,
                    &field.name,
                    TypeModifier::None,
                    renames,
                    defs,
                    includes,
                );
            }
        }
        TypeShape::MachineInt { .. }
        | TypeShape::Map
        | TypeShape::Channel
        | TypeShape::Function
        | TypeShape::Interface
        | TypeShape::Complex => {
            unreachable!("unvalidated shape passed to the collector: {}", shape.kind_name())
        }
    }
}
