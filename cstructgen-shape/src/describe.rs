//! The [`CShape`] descriptor trait and its standard implementations.
//!
//! Rust types describe their own shape through [`CShape`]; the
//! `#[derive(CShape)]` macro from `cstructgen-derive` generates the record
//! implementation for plain structs with named fields. The impls below cover
//! the scalar building blocks plus a few deliberately unsupported std types
//! (maps, channel endpoints, function pointers) so that using one in a
//! derived struct is caught by validation with a precise diagnostic rather
//! than by a missing-impl compile error alone.
//!
//! Pointer fields are expressed with `Box<T>`; `*const c_void` / `*mut
//! c_void` describe opaque addresses that are emitted as plain `void*`.

use crate::types::{FieldKind, TypeShape};
use std::collections::{BTreeMap, HashMap};

/// A type that can describe its own shape for C struct generation.
pub trait CShape {
    /// Returns the shape descriptor for this type.
    fn shape() -> TypeShape;
}

macro_rules! scalar_shapes {
    ($($ty:ty => $kind:ident),* $(,)?) => {
        $(
            impl CShape for $ty {
                fn shape() -> TypeShape {
                    TypeShape::Scalar(FieldKind::$kind)
                }
            }
        )*
    };
}

scalar_shapes! {
    i8 => Int8,
    i16 => Int16,
    i32 => Int32,
    i64 => Int64,
    u8 => Uint8,
    u16 => Uint16,
    u32 => Uint32,
    u64 => Uint64,
    f32 => Float,
    f64 => Double,
    bool => Bool,
    String => CharPtr,
    *const core::ffi::c_void => VoidPtr,
    *mut core::ffi::c_void => VoidPtr,
}

impl CShape for &str {
    fn shape() -> TypeShape {
        TypeShape::Scalar(FieldKind::CharPtr)
    }
}

impl CShape for isize {
    fn shape() -> TypeShape {
        TypeShape::MachineInt { signed: true }
    }
}

impl CShape for usize {
    fn shape() -> TypeShape {
        TypeShape::MachineInt { signed: false }
    }
}

impl<T: CShape + ?Sized> CShape for Box<T> {
    fn shape() -> TypeShape {
        TypeShape::Pointer(Box::new(T::shape()))
    }
}

impl<T: CShape, const N: usize> CShape for [T; N] {
    fn shape() -> TypeShape {
        TypeShape::Array {
            len: N,
            elem: Box::new(T::shape()),
        }
    }
}

impl<K, V, S> CShape for HashMap<K, V, S> {
    fn shape() -> TypeShape {
        TypeShape::Map
    }
}

impl<K, V> CShape for BTreeMap<K, V> {
    fn shape() -> TypeShape {
        TypeShape::Map
    }
}

impl<T> CShape for std::sync::mpsc::Sender<T> {
    fn shape() -> TypeShape {
        TypeShape::Channel
    }
}

impl<T> CShape for std::sync::mpsc::Receiver<T> {
    fn shape() -> TypeShape {
        TypeShape::Channel
    }
}

impl<R> CShape for fn() -> R {
    fn shape() -> TypeShape {
        TypeShape::Function
    }
}

impl<A, R> CShape for fn(A) -> R {
    fn shape() -> TypeShape {
        TypeShape::Function
    }
}

impl<A, B, R> CShape for fn(A, B) -> R {
    fn shape() -> TypeShape {
        TypeShape::Function
    }
}

impl CShape for dyn std::any::Any {
    fn shape() -> TypeShape {
        TypeShape::Interface
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scalar_shapes() {
        assert_eq!(i8::shape(), TypeShape::Scalar(FieldKind::Int8));
        assert_eq!(u64::shape(), TypeShape::Scalar(FieldKind::Uint64));
        assert_eq!(f32::shape(), TypeShape::Scalar(FieldKind::Float));
        assert_eq!(bool::shape(), TypeShape::Scalar(FieldKind::Bool));
        assert_eq!(String::shape(), TypeShape::Scalar(FieldKind::CharPtr));
        assert_eq!(<&str>::shape(), TypeShape::Scalar(FieldKind::CharPtr));
    }

    #[test]
    fn test_machine_ints() {
        assert_eq!(isize::shape(), TypeShape::MachineInt { signed: true });
        assert_eq!(usize::shape(), TypeShape::MachineInt { signed: false });
    }

    #[test]
    fn test_opaque_pointers() {
        assert_eq!(
            <*const core::ffi::c_void>::shape(),
            TypeShape::Scalar(FieldKind::VoidPtr)
        );
        assert_eq!(
            <*mut core::ffi::c_void>::shape(),
            TypeShape::Scalar(FieldKind::VoidPtr)
        );
    }

    #[test]
    fn test_wrapped_shapes() {
        assert_eq!(
            <Box<i32>>::shape(),
            TypeShape::Pointer(Box::new(TypeShape::Scalar(FieldKind::Int32)))
        );
        assert_eq!(
            <[u8; 4]>::shape(),
            TypeShape::Array {
                len: 4,
                elem: Box::new(TypeShape::Scalar(FieldKind::Uint8)),
            }
        );
    }

    #[test]
    fn test_unsupported_shapes() {
        assert_eq!(<HashMap<String, u8>>::shape(), TypeShape::Map);
        assert_eq!(<BTreeMap<String, u8>>::shape(), TypeShape::Map);
        assert_eq!(<std::sync::mpsc::Sender<u8>>::shape(), TypeShape::Channel);
        assert_eq!(<fn(u8) -> u8>::shape(), TypeShape::Function);
        assert_eq!(<dyn std::any::Any>::shape(), TypeShape::Interface);
    }
}
