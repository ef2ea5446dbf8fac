use alloc::boxed::Box;
use alloc::collections::{BTreeMap, VecDeque};
use alloc::string::String;
use alloc::vec::Vec;

use crate::EnvShape;
use crate::error::EnvError;
use crate::ops::{ListShape, PointeeFn, PointerShape, ShapeMut, ShapeRef};
use crate::shape::impl_shape_cast_fn;

// -----------------------------------------------------------------------------
// String

impl EnvShape for String {
    #[inline]
    fn shape_ref(&self) -> ShapeRef<'_> {
        ShapeRef::String(self)
    }

    #[inline]
    fn shape_mut(&mut self) -> ShapeMut<'_> {
        ShapeMut::String(self)
    }
}

// -----------------------------------------------------------------------------
// Pointers

impl<T: EnvShape + Default> EnvShape for Option<T> {
    impl_shape_cast_fn!(Pointer);
}

impl<T: EnvShape + Default> PointerShape for Option<T> {
    #[inline]
    fn pointee(&self) -> Option<&dyn EnvShape> {
        self.as_ref().map(|value| value as &dyn EnvShape)
    }

    #[inline]
    fn pointee_mut(&mut self) -> Option<&mut dyn EnvShape> {
        self.as_mut().map(|value| value as &mut dyn EnvShape)
    }

    fn populate_fresh(&mut self, populate: &mut PointeeFn<'_>) -> Result<(), EnvError> {
        let mut value = T::default();
        populate(&mut value)?;
        *self = Some(value);
        Ok(())
    }
}

impl<T: EnvShape + Default> EnvShape for Box<T> {
    impl_shape_cast_fn!(Pointer);
}

impl<T: EnvShape + Default> PointerShape for Box<T> {
    #[inline]
    fn pointee(&self) -> Option<&dyn EnvShape> {
        Some(&**self)
    }

    #[inline]
    fn pointee_mut(&mut self) -> Option<&mut dyn EnvShape> {
        Some(&mut **self)
    }

    fn populate_fresh(&mut self, populate: &mut PointeeFn<'_>) -> Result<(), EnvError> {
        let mut value = Box::new(T::default());
        populate(&mut *value)?;
        *self = value;
        Ok(())
    }
}

// -----------------------------------------------------------------------------
// Lists

macro_rules! impl_list_shape {
    ($list:ident, $push:ident) => {
        impl<T: EnvShape + Default> EnvShape for $list<T> {
            impl_shape_cast_fn!(List);
        }

        impl<T: EnvShape + Default> ListShape for $list<T> {
            #[inline]
            fn len(&self) -> usize {
                <$list<T>>::len(self)
            }

            #[inline]
            fn item(&self, index: usize) -> Option<&dyn EnvShape> {
                self.get(index).map(|value| value as &dyn EnvShape)
            }

            #[inline]
            fn item_mut(&mut self, index: usize) -> Option<&mut dyn EnvShape> {
                self.get_mut(index).map(|value| value as &mut dyn EnvShape)
            }

            #[inline]
            fn push_default(&mut self) {
                self.$push(T::default());
            }

            #[inline]
            fn clear(&mut self) {
                <$list<T>>::clear(self);
            }
        }
    };
}

impl_list_shape!(Vec, push);
impl_list_shape!(VecDeque, push_back);

// -----------------------------------------------------------------------------
// Maps

impl<K, V> EnvShape for BTreeMap<K, V> {
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
