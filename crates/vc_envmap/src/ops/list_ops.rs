use crate::EnvShape;

/// Interface of growable sequences, e.g. `Vec<T>`.
///
/// # Examples
///
/// ```
/// use vc_envmap::ops::ListShape;
///
/// let mut list = vec![String::from("a")];
/// list.push_default();
/// assert_eq!(ListShape::len(&list), 2);
///
/// ListShape::clear(&mut list);
/// assert!(ListShape::is_empty(&list));
/// ```
pub trait ListShape {
    fn len(&self) -> usize;

    #[inline]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn item(&self, index: usize) -> Option<&dyn EnvShape>;

    fn item_mut(&mut self, index: usize) -> Option<&mut dyn EnvShape>;

    /// Appends a default-constructed element.
    fn push_default(&mut self);

    /// Removes every element.
    fn clear(&mut self);
}
