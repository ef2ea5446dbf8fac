use crate::EnvShape;
use crate::ops::{FloatMut, FloatRef, IntMut, IntRef, ShapeMut, ShapeRef, UintMut, UintRef};

impl EnvShape for bool {
    #[inline]
    fn shape_ref(&self) -> ShapeRef<'_> {
        ShapeRef::Bool(self)
    }

    #[inline]
    fn shape_mut(&mut self) -> ShapeMut<'_> {
        ShapeMut::Bool(self)
    }
}

macro_rules! impl_number_shape {
    ($kind:ident, $ref_ty:ident, $mut_ty:ident, { $($variant:ident => $ty:ty),* $(,)? }) => {$(
        impl EnvShape for $ty {
            #[inline]
            fn shape_ref(&self) -> ShapeRef<'_> {
                ShapeRef::$kind($ref_ty::$variant(self))
            }

            #[inline]
            fn shape_mut(&mut self) -> ShapeMut<'_> {
                ShapeMut::$kind($mut_ty::$variant(self))
            }
        }
    )*};
}

impl_number_shape!(Int, IntRef, IntMut, {
    I8 => i8,
    I16 => i16,
    I32 => i32,
    I64 => i64,
    I128 => i128,
    Isize => isize,
});

impl_number_shape!(Uint, UintRef, UintMut, {
    U8 => u8,
    U16 => u16,
    U32 => u32,
    U64 => u64,
    U128 => u128,
    Usize => usize,
});

impl_number_shape!(Float, FloatRef, FloatMut, {
    F32 => f32,
    F64 => f64,
});
