use alloc::string::String;

use std::collections::HashMap;
use std::path::PathBuf;

use crate::EnvShape;
use crate::error::BoxError;
use crate::ops::{OpaqueShape, ShapeMut, ShapeRef};

impl<K, V, S> EnvShape for HashMap<K, V, S> {
    #[inline]
    fn shape_ref(&self) -> ShapeRef<'_> {
        ShapeRef::Map {
            type_name: core::any::type_name::<Self>(),
        }
    }

    #[inline]
    fn shape_mut(&mut self) -> ShapeMut<'_> {
        ShapeMut::Map {
            type_name: core::any::type_name::<Self>(),
        }
    }
}

// `PathBuf` has no `Display`, paths render lossily.
impl EnvShape for PathBuf {
    #[inline]
    fn shape_ref(&self) -> ShapeRef<'_> {
        ShapeRef::Opaque(self)
    }

    #[inline]
    fn shape_mut(&mut self) -> ShapeMut<'_> {
        ShapeMut::Opaque(self)
    }
}

impl OpaqueShape for PathBuf {
    #[inline]
    fn type_name(&self) -> &'static str {
        "PathBuf"
    }

    fn assign_text(&mut self, text: &str) -> Result<(), BoxError> {
        *self = PathBuf::from(text);
        Ok(())
    }

    fn render_text(&self) -> String {
        self.to_string_lossy().into_owned()
    }
}
