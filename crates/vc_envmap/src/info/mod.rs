//! Static shape information.
//!
//! - [`ShapeKind`]: the closed set of kinds the engine dispatches on.
//! - [`StructInfo`]: field list of a record, generated by `#[derive(EnvShape)]`.
//! - [`NamedField`]: identifier, tags and writability of one field.
//! - [`FieldTags`]: raw tag strings of one field, keyed by tag key.

// -----------------------------------------------------------------------------
// Modules

mod kind;
mod struct_info;

// -----------------------------------------------------------------------------
// Exports

pub use kind::ShapeKind;
pub use struct_info::{FieldTags, NamedField, StructInfo};
