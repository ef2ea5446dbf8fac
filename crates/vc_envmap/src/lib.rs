#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![no_std]

// -----------------------------------------------------------------------------
// Extern Self

// Generated code names `vc_envmap` through `macro_utils::Manifest`, which
// cannot name `crate`. The alias lets the derive be used inside this crate.
extern crate self as vc_envmap;

// -----------------------------------------------------------------------------
// no_std support

#[cfg(feature = "std")]
extern crate std;

extern crate alloc;

// -----------------------------------------------------------------------------
// Modules

mod engine;
mod error;
mod impls;
mod shape;

pub mod config;
pub mod info;
pub mod ops;
pub mod source;
pub mod tag;

// -----------------------------------------------------------------------------
// Top-Level exports

#[doc(hidden)]
pub mod __macro_exports;

pub use config::{DEFAULT_TAG_KEY, EnvConfig};
pub use engine::{DefaultSource, EnvParser, parse_with};
pub use error::{BoxError, ElementError, EnvError, ScalarError};
pub use impls::Dynamic;
pub use ops::EnvStruct;
pub use shape::EnvShape;
pub use source::EnvSource;

#[cfg(feature = "std")]
pub use engine::{marshal, parse};
#[cfg(feature = "std")]
pub use source::ProcessEnv;

pub use vc_envmap_derive as derive;

/// Derives [`EnvShape`] and [`EnvStruct`] for a struct with named fields.
///
/// See the [crate documentation](crate) for the `#[env(..)]` attribute.
pub use vc_envmap_derive::EnvShape;
