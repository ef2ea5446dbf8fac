use alloc::string::String;

use crate::Dynamic;
use crate::info::ShapeKind;
use crate::ops::{ArrayShape, EnvStruct, ListShape, OpaqueShape, PointerShape};
use crate::ops::{FloatMut, FloatRef, IntMut, IntRef, UintMut, UintRef};

// -----------------------------------------------------------------------------
// ShapeRef

/// A shared view of a shaped location, one arm per [`ShapeKind`].
///
/// Obtained via [`EnvShape::shape_ref`](crate::EnvShape::shape_ref).
pub enum ShapeRef<'a> {
    Bool(&'a bool),
    Int(IntRef<'a>),
    Uint(UintRef<'a>),
    Float(FloatRef<'a>),
    String(&'a String),
    Pointer(&'a dyn PointerShape),
    Array(&'a dyn ArrayShape),
    List(&'a dyn ListShape),
    Struct(&'a dyn EnvStruct),
    Dynamic(&'a Dynamic),
    Opaque(&'a dyn OpaqueShape),
    /// Associative containers are described but never traversed.
    Map { type_name: &'static str },
}

// -----------------------------------------------------------------------------
// ShapeMut

/// A mutable view of a shaped location, one arm per [`ShapeKind`].
///
/// Obtained via [`EnvShape::shape_mut`](crate::EnvShape::shape_mut).
pub enum ShapeMut<'a> {
    Bool(&'a mut bool),
    Int(IntMut<'a>),
    Uint(UintMut<'a>),
    Float(FloatMut<'a>),
    String(&'a mut String),
    Pointer(&'a mut dyn PointerShape),
    Array(&'a mut dyn ArrayShape),
    List(&'a mut dyn ListShape),
    Struct(&'a mut dyn EnvStruct),
    Dynamic(&'a mut Dynamic),
    Opaque(&'a mut dyn OpaqueShape),
    /// Associative containers are described but never traversed.
    Map { type_name: &'static str },
}

macro_rules! impl_kind_fn {
    () => {
        /// Returns the [`ShapeKind`] of this view.
        pub const fn kind(&self) -> ShapeKind {
            match self {
                Self::Bool(_) => ShapeKind::Bool,
                Self::Int(_) => ShapeKind::Int,
                Self::Uint(_) => ShapeKind::Uint,
                Self::Float(_) => ShapeKind::Float,
                Self::String(_) => ShapeKind::String,
                Self::Pointer(_) => ShapeKind::Pointer,
                Self::Array(_) => ShapeKind::Array,
                Self::List(_) => ShapeKind::List,
                Self::Struct(_) => ShapeKind::Struct,
                Self::Dynamic(_) => ShapeKind::Dynamic,
                Self::Opaque(_) => ShapeKind::Opaque,
                Self::Map { .. } => ShapeKind::Map,
            }
        }
    };
}

impl ShapeRef<'_> {
    impl_kind_fn!();
}

impl ShapeMut<'_> {
    impl_kind_fn!();
}
