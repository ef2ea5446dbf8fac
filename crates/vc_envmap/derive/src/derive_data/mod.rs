//! Provide some tools for parsing token stream.

// -----------------------------------------------------------------------------
// Modules

mod attributes;
mod env_derive;
mod env_meta;
mod env_struct;

// -----------------------------------------------------------------------------
// Internal API

pub(crate) use attributes::{FieldAttributes, TypeAttributes};

pub(crate) use env_derive::EnvDerive;
pub(crate) use env_meta::EnvMeta;
pub(crate) use env_struct::EnvStructData;
