use crate::EnvShape;
use crate::ops::ArrayShape;
use crate::shape::impl_shape_cast_fn;

impl<T: EnvShape + Default, const N: usize> EnvShape for [T; N] {
    impl_shape_cast_fn!(Array);
}

impl<T: EnvShape + Default, const N: usize> ArrayShape for [T; N] {
    #[inline]
    fn capacity(&self) -> usize {
        N
    }

    #[inline]
    fn item(&self, index: usize) -> Option<&dyn EnvShape> {
        self.get(index).map(|value| value as &dyn EnvShape)
    }

    #[inline]
    fn item_mut(&mut self, index: usize) -> Option<&mut dyn EnvShape> {
        self.get_mut(index).map(|value| value as &mut dyn EnvShape)
    }

    fn reset(&mut self) {
        self.iter_mut().for_each(|value| *value = T::default());
    }
}
