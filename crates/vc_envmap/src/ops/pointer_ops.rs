use crate::EnvShape;
use crate::error::EnvError;

/// Callback run on a pointee by [`PointerShape::populate_fresh`].
pub type PointeeFn<'f> = dyn FnMut(&mut dyn EnvShape) -> Result<(), EnvError> + 'f;

/// Interface of pointer-like wrappers, e.g. `Option<T>` and `Box<T>`.
///
/// The engine either writes through [`pointee_mut`] (merging into the value
/// already held) or asks for a fresh pointee with [`populate_fresh`], which
/// is committed only when population succeeds.
///
/// [`pointee_mut`]: PointerShape::pointee_mut
/// [`populate_fresh`]: PointerShape::populate_fresh
pub trait PointerShape {
    /// Returns the held value, if any.
    fn pointee(&self) -> Option<&dyn EnvShape>;

    fn pointee_mut(&mut self) -> Option<&mut dyn EnvShape>;

    /// Runs `populate` on a default-constructed pointee and stores it on success.
    ///
    /// On error the current value is left untouched.
    fn populate_fresh(&mut self, populate: &mut PointeeFn<'_>) -> Result<(), EnvError>;
}
