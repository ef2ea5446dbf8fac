use alloc::string::String;
use core::fmt;

use crate::EnvShape;
use crate::ops::{ShapeMut, ShapeRef};

/// A dynamically typed slot.
///
/// Parsing always stores the raw text as [`Dynamic::Text`]; no richer type
/// is guessed. The other variants exist so callers can pre-populate a slot
/// before marshalling.
///
/// # Examples
///
/// ```
/// use vc_envmap::Dynamic;
///
/// assert_eq!(Dynamic::from("1,2").to_string(), "1,2");
/// assert_eq!(Dynamic::from(3_i64).to_string(), "3");
/// assert_eq!(Dynamic::Unset.to_string(), "");
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Dynamic {
    #[default]
    Unset,
    Text(String),
    Bool(bool),
    Int(i64),
    Float(f64),
}

impl fmt::Display for Dynamic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unset => Ok(()),
            Self::Text(text) => f.write_str(text),
            Self::Bool(value) => fmt::Display::fmt(value, f),
            Self::Int(value) => fmt::Display::fmt(value, f),
            Self::Float(value) => fmt::Display::fmt(value, f),
        }
    }
}

impl From<&str> for Dynamic {
    #[inline]
    fn from(value: &str) -> Self {
        Self::Text(value.into())
    }
}

impl From<String> for Dynamic {
    #[inline]
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<bool> for Dynamic {
    #[inline]
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i64> for Dynamic {
    #[inline]
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<f64> for Dynamic {
    #[inline]
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl EnvShape for Dynamic {
    #[inline]
    fn shape_ref(&self) -> ShapeRef<'_> {
        ShapeRef::Dynamic(self)
    }

    #[inline]
    fn shape_mut(&mut self) -> ShapeMut<'_> {
        ShapeMut::Dynamic(self)
    }
}
