use crate::EnvShape;
use crate::info::{NamedField, StructInfo};

/// Interface of records with named fields.
///
/// Implemented by `#[derive(EnvShape)]`; field indices follow declaration
/// order and match [`StructInfo::field_at`].
///
/// # Examples
///
/// ```
/// use vc_envmap::{EnvShape, EnvStruct, ops::ShapeRef};
///
/// #[derive(EnvShape, Default)]
/// struct Foo {
///     pub a: i32,
///     pub b: bool,
/// }
///
/// let foo = Foo { a: 7, b: true };
/// assert_eq!(foo.field_len(), 2);
///
/// match foo.field("b").unwrap().shape_ref() {
///     ShapeRef::Bool(value) => assert!(*value),
///     _ => unreachable!(),
/// }
/// ```
pub trait EnvStruct: EnvShape {
    fn struct_info(&self) -> &'static StructInfo;

    fn field_at(&self, index: usize) -> Option<&dyn EnvShape>;

    fn field_at_mut(&mut self, index: usize) -> Option<&mut dyn EnvShape>;

    #[inline]
    fn field_len(&self) -> usize {
        self.struct_info().field_len()
    }

    /// Returns the information of the field at `index`.
    #[inline]
    fn field_info(&self, index: usize) -> Option<&'static NamedField> {
        self.struct_info().field_at(index)
    }

    /// Returns the field with the given declared identifier.
    fn field(&self, name: &str) -> Option<&dyn EnvShape> {
        let index = self.struct_info().index_of(name)?;
        self.field_at(index)
    }

    fn field_mut(&mut self, name: &str) -> Option<&mut dyn EnvShape> {
        let index = self.struct_info().index_of(name)?;
        self.field_at_mut(index)
    }
}
