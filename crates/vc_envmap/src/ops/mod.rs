//! Provide views and interfaces for data access.
//!
//! ## Menu
//!
//! ### Views
//!
//! - [`ShapeRef`] / [`ShapeMut`]: one arm per [`ShapeKind`], returned by [`EnvShape`].
//! - [`IntRef`], [`UintRef`], [`FloatRef`] (and the `Mut` versions): width-tagged numbers.
//!
//! ### Interface
//!
//! The container kinds are accessed through object-safe traits:
//!
//! - [`PointerShape`]: For pointer-like wrappers (e.g. `Option<T>`, `Box<T>`) .
//! - [`ArrayShape`]: For fixed-size sequences (e.g. `[i32; 3]`) .
//! - [`ListShape`]: For growable sequences (e.g. `Vec<i32>`) .
//! - [`EnvStruct`]: For records with named fields (e.g. `A{ .. }`) .
//! - [`OpaqueShape`]: For leaves with their own text form (e.g. `SocketAddr`) .
//!
//! ### Text coercion
//!
//! - [`parse_int`]: base-0 integer parsing shared by every integer width.
//! - [`parse_bool`]: boolean literal parsing.
//!
//! [`ShapeKind`]: crate::info::ShapeKind
//! [`EnvShape`]: crate::EnvShape

// -----------------------------------------------------------------------------
// Modules

mod array_ops;
mod kind;
mod list_ops;
mod opaque_ops;
mod pointer_ops;
mod scalar_ops;
mod struct_ops;

// -----------------------------------------------------------------------------
// Exports

pub use kind::{ShapeMut, ShapeRef};

pub use array_ops::ArrayShape;
pub use list_ops::ListShape;
pub use opaque_ops::OpaqueShape;
pub use pointer_ops::{PointeeFn, PointerShape};
pub use struct_ops::EnvStruct;

pub use scalar_ops::{FloatMut, FloatRef, IntMut, IntRef, UintMut, UintRef};
pub use scalar_ops::{FromRadix, parse_bool, parse_int};
