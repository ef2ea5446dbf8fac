use crate::info::ShapeKind;
use crate::ops::{ShapeMut, ShapeRef};

/// The entry point of the shape model.
///
/// A type implementing `EnvShape` describes how the engine reaches its data:
/// [`shape_ref`] for marshal, [`shape_mut`] for parse. Both return a view
/// whose arm is fixed by the type, so [`shape_kind`] never changes for a
/// given type.
///
/// Implemented for primitives, `String`, `Option`, `Box`, arrays, `Vec`,
/// `VecDeque`, [`Dynamic`] and maps, and derived for records with
/// `#[derive(EnvShape)]`.
///
/// # Examples
///
/// ```
/// use vc_envmap::{EnvShape, info::ShapeKind};
///
/// assert_eq!(7_u16.shape_kind(), ShapeKind::Uint);
/// assert_eq!(Some(1.5_f32).shape_kind(), ShapeKind::Pointer);
/// assert_eq!(vec![true].shape_kind(), ShapeKind::List);
/// ```
///
/// [`shape_ref`]: EnvShape::shape_ref
/// [`shape_mut`]: EnvShape::shape_mut
/// [`shape_kind`]: EnvShape::shape_kind
/// [`Dynamic`]: crate::Dynamic
pub trait EnvShape {
    fn shape_ref(&self) -> ShapeRef<'_>;

    fn shape_mut(&mut self) -> ShapeMut<'_>;

    #[inline]
    fn shape_kind(&self) -> ShapeKind {
        self.shape_ref().kind()
    }
}

/// Implements `shape_ref`/`shape_mut` for kinds viewed as a trait object.
macro_rules! impl_shape_cast_fn {
    ($kind:ident) => {
        #[inline]
        fn shape_ref(&self) -> $crate::ops::ShapeRef<'_> {
            $crate::ops::ShapeRef::$kind(self)
        }

        #[inline]
        fn shape_mut(&mut self) -> $crate::ops::ShapeMut<'_> {
            $crate::ops::ShapeMut::$kind(self)
        }

        #[inline]
        fn shape_kind(&self) -> $crate::info::ShapeKind {
            $crate::info::ShapeKind::$kind
        }
    };
}

pub(crate) use impl_shape_cast_fn;
