use alloc::boxed::Box;
use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;
use core::num::{ParseFloatError, ParseIntError};

use thiserror::Error;

use crate::info::ShapeKind;

/// Boxed error produced by opaque `FromStr` implementations.
pub type BoxError = Box<dyn core::error::Error + Send + Sync + 'static>;

// -----------------------------------------------------------------------------
// ScalarError

/// A text value that does not coerce into the target scalar.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ScalarError {
    #[error(transparent)]
    Int(#[from] ParseIntError),

    #[error(transparent)]
    Float(#[from] ParseFloatError),

    #[error("value out of range")]
    FloatRange,

    #[error("invalid boolean literal")]
    Bool,

    #[error("{0}")]
    Opaque(BoxError),
}

// -----------------------------------------------------------------------------
// EnvError

/// Errors returned by [`EnvParser::parse`] and [`EnvParser::marshal`].
///
/// Record traversal stops at the first error. Sequence elements are all
/// attempted and their failures are reported together as [`EnvError::Elements`].
///
/// [`EnvParser::parse`]: crate::EnvParser::parse
/// [`EnvParser::marshal`]: crate::EnvParser::marshal
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum EnvError {
    #[error("missing environment key: {key}")]
    MissingValue { key: String },

    #[error("cannot parse `{text}` at `{key}` as {expected}: {source}")]
    Coercion {
        key: String,
        text: String,
        expected: &'static str,
        #[source]
        source: ScalarError,
    },

    #[error("unsupported type `{type_name}` at `{key}`: map types are not supported")]
    Unsupported {
        key: String,
        type_name: &'static str,
    },

    #[error("`{key}`: expected source data to have length less or equal to {capacity}, got {len}")]
    SizeExceeded {
        key: String,
        capacity: usize,
        len: usize,
    },

    #[error("`{key}`: {} sequence element(s) failed to parse", .errors.len())]
    Elements {
        key: String,
        errors: Vec<ElementError>,
    },

    #[error("`{key}`: {kind} elements cannot be rendered as text")]
    NotRenderable { key: String, kind: ShapeKind },
}

impl EnvError {
    /// Returns the environment key the error was raised for.
    ///
    /// Errors raised inside sequence elements carry an empty key, the
    /// enclosing [`EnvError::Elements`] carries the sequence's key.
    pub fn key(&self) -> &str {
        match self {
            Self::MissingValue { key }
            | Self::Coercion { key, .. }
            | Self::Unsupported { key, .. }
            | Self::SizeExceeded { key, .. }
            | Self::Elements { key, .. }
            | Self::NotRenderable { key, .. } => key,
        }
    }

    #[inline]
    pub fn is_missing_value(&self) -> bool {
        matches!(self, Self::MissingValue { .. })
    }

    #[inline]
    pub fn is_coercion(&self) -> bool {
        matches!(self, Self::Coercion { .. })
    }

    #[inline]
    pub fn is_unsupported(&self) -> bool {
        matches!(self, Self::Unsupported { .. })
    }

    #[inline]
    pub fn is_size_exceeded(&self) -> bool {
        matches!(self, Self::SizeExceeded { .. })
    }

    #[inline]
    pub fn is_elements(&self) -> bool {
        matches!(self, Self::Elements { .. })
    }

    /// Per-element failures of an [`EnvError::Elements`], empty otherwise.
    pub fn element_errors(&self) -> &[ElementError] {
        match self {
            Self::Elements { errors, .. } => errors,
            _ => &[],
        }
    }
}

// -----------------------------------------------------------------------------
// ElementError

/// The failure of one sequence element.
#[derive(Debug)]
pub struct ElementError {
    pub index: usize,
    pub error: Box<EnvError>,
}

impl ElementError {
    #[inline]
    pub fn new(index: usize, error: EnvError) -> Self {
        Self {
            index,
            error: Box::new(error),
        }
    }
}

impl fmt::Display for ElementError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "element {}: {}", self.index, self.error)
    }
}

impl core::error::Error for ElementError {
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        Some(&*self.error)
    }
}
