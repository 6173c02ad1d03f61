//! Type shape definitions.
//!
//! This module contains the data structures describing the discovered
//! structure of a type: a primitive kind, a pointer, a fixed-size array,
//! or a record with an ordered field list.

/// C type tokens that scalar fields are emitted as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldKind {
    /// Untyped pointer (`void*`).
    VoidPtr,
    /// C string (`char*`).
    CharPtr,
    /// Signed 8-bit integer.
    Int8,
    /// Signed 16-bit integer.
    Int16,
    /// Signed 32-bit integer.
    Int32,
    /// Signed 64-bit integer.
    Int64,
    /// Unsigned 8-bit integer.
    Uint8,
    /// Unsigned 16-bit integer.
    Uint16,
    /// Unsigned 32-bit integer.
    Uint32,
    /// Unsigned 64-bit integer.
    Uint64,
    /// 32-bit floating point.
    Float,
    /// 64-bit floating point.
    Double,
    /// Boolean.
    Bool,
}

impl FieldKind {
    /// Returns the C type token for this kind.
    #[must_use]
    pub const fn c_token(&self) -> &'static str {
        match self {
            Self::VoidPtr => "void*",
            Self::CharPtr => "char*",
            Self::Int8 => "int8_t",
            Self::Int16 => "int16_t",
            Self::Int32 => "int32_t",
            Self::Int64 => "int64_t",
            Self::Uint8 => "uint8_t",
            Self::Uint16 => "uint16_t",
            Self::Uint32 => "uint32_t",
            Self::Uint64 => "uint64_t",
            Self::Float => "float",
            Self::Double => "double",
            Self::Bool => "bool",
        }
    }

    /// Returns the include directive this kind requires, if any.
    #[must_use]
    pub const fn include(&self) -> Option<&'static str> {
        match self {
            Self::VoidPtr | Self::CharPtr => None,
            Self::Int8
            | Self::Int16
            | Self::Int32
            | Self::Int64
            | Self::Uint8
            | Self::Uint16
            | Self::Uint32
            | Self::Uint64
            | Self::Float
            | Self::Double => Some("<stdint.h>"),
            Self::Bool => Some("<stdbool.h>"),
        }
    }
}

/// The discovered structure of a type.
///
/// Shapes are produced by [`CShape`](crate::CShape) implementations (or built
/// by hand) and consumed by validation and struct collection. The unsupported
/// kinds are representable here so that validation can name them in
/// diagnostics; they never survive past validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeShape {
    /// Scalar with a direct C token mapping.
    Scalar(FieldKind),
    /// Machine-width integer with no explicit bit width.
    MachineInt {
        /// Whether the integer is signed.
        signed: bool,
    },
    /// Pointer to another shape.
    Pointer(Box<TypeShape>),
    /// Fixed-size array of another shape.
    Array {
        /// Element count of the source array.
        len: usize,
        /// Element shape.
        elem: Box<TypeShape>,
    },
    /// Named record with ordered fields.
    Record(RecordShape),
    /// Associative map. Not representable in C.
    Map,
    /// Channel / queue endpoint. Not representable in C.
    Channel,
    /// Callable / function value. Not representable in C.
    Function,
    /// Open interface / any. Not representable in C.
    Interface,
    /// Complex number. Not representable in C.
    Complex,
}

impl TypeShape {
    /// Returns a human-readable name for this shape's kind, used in
    /// diagnostics.
    #[must_use]
    pub const fn kind_name(&self) -> &'static str {
        match self {
            Self::Scalar(FieldKind::VoidPtr) => "raw pointer",
            Self::Scalar(FieldKind::CharPtr) => "string",
            Self::Scalar(_) => "scalar",
            Self::MachineInt { signed: true } => "machine-width signed integer",
            Self::MachineInt { signed: false } => "machine-width unsigned integer",
            Self::Pointer(_) => "pointer",
            Self::Array { .. } => "array",
            Self::Record(_) => "record",
            Self::Map => "map",
            Self::Channel => "channel",
            Self::Function => "function",
            Self::Interface => "interface",
            Self::Complex => "complex number",
        }
    }

    /// Returns true if this shape is a record.
    #[must_use]
    pub const fn is_record(&self) -> bool {
        matches!(self, Self::Record(_))
    }
}

/// A named record with an ordered field list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordShape {
    /// Record name. Empty for anonymous records, which are rejected by
    /// validation.
    pub name: String,
    /// Fields in source declaration order.
    pub fields: Vec<FieldShape>,
}

impl RecordShape {
    /// Creates a record shape with the given name and fields.
    #[must_use]
    pub fn new(name: impl Into<String>, fields: Vec<FieldShape>) -> Self {
        Self {
            name: name.into(),
            fields,
        }
    }
}

/// One field of a record shape.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldShape {
    /// Field name.
    pub name: String,
    /// Field shape.
    pub shape: TypeShape,
}

impl FieldShape {
    /// Creates a field shape.
    #[must_use]
    pub fn new(name: impl Into<String>, shape: TypeShape) -> Self {
        Self {
            name: name.into(),
            shape,
        }
    }
}
