use crate::EnvShape;

/// Interface of fixed-size sequences, e.g. `[T; N]`.
///
/// # Examples
///
/// ```
/// use vc_envmap::ops::ArrayShape;
///
/// let mut array = [1_u8, 2, 3];
/// assert_eq!(ArrayShape::capacity(&array), 3);
///
/// array.reset();
/// assert_eq!(array, [0, 0, 0]);
/// ```
pub trait ArrayShape {
    /// Returns the fixed number of elements.
    fn capacity(&self) -> usize;

    fn item(&self, index: usize) -> Option<&dyn EnvShape>;

    fn item_mut(&mut self, index: usize) -> Option<&mut dyn EnvShape>;

    /// Replaces every element with its default value.
    fn reset(&mut self);
}
