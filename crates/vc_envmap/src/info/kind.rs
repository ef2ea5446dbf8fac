use core::fmt;

// -----------------------------------------------------------------------------
// ShapeKind

/// An enumeration of the "kinds" of a shaped location.
///
/// The set is closed: every type usable by the engine resolves to exactly one
/// kind through [`EnvShape`], and the engine matches on it exhaustively.
///
/// A [`ShapeKind`] is obtained via [`EnvShape::shape_kind`],
/// or via [`ShapeRef::kind`] and [`ShapeMut::kind`].
///
/// [`EnvShape`]: crate::EnvShape
/// [`EnvShape::shape_kind`]: crate::EnvShape::shape_kind
/// [`ShapeRef::kind`]: crate::ops::ShapeRef::kind
/// [`ShapeMut::kind`]: crate::ops::ShapeMut::kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    Bool,
    Int,
    Uint,
    Float,
    String,
    Pointer,
    Array,
    List,
    Struct,
    Dynamic,
    Opaque,
    Map,
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool => f.pad("Bool"),
            Self::Int => f.pad("Int"),
            Self::Uint => f.pad("Uint"),
            Self::Float => f.pad("Float"),
            Self::String => f.pad("String"),
            Self::Pointer => f.pad("Pointer"),
            Self::Array => f.pad("Array"),
            Self::List => f.pad("List"),
            Self::Struct => f.pad("Struct"),
            Self::Dynamic => f.pad("Dynamic"),
            Self::Opaque => f.pad("Opaque"),
            Self::Map => f.pad("Map"),
        }
    }
}
