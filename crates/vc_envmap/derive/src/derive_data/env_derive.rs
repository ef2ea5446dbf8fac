use proc_macro2::TokenStream;
use syn::{Data, DeriveInput};

use super::{EnvMeta, EnvStructData, TypeAttributes};

/// The parsed input of `#[derive(EnvShape)]`.
pub(crate) enum EnvDerive<'a> {
    Struct(EnvStructData<'a>),
    Opaque(EnvMeta<'a>),
}

impl<'a> EnvDerive<'a> {
    pub fn from_input(input: &'a DeriveInput) -> syn::Result<Self> {
        let attrs = TypeAttributes::parse_attrs(&input.attrs)?;
        let meta = EnvMeta::new(&input.ident, &input.generics);

        if attrs.opaque.is_some() {
            return Ok(Self::Opaque(meta));
        }

        match &input.data {
            Data::Struct(data) => Ok(Self::Struct(EnvStructData::new(meta, &data.fields)?)),
            Data::Enum(data) => Err(syn::Error::new(
                data.enum_token.span,
                "`EnvShape` cannot be derived for enums, use `#[env(opaque)]`",
            )),
            Data::Union(data) => Err(syn::Error::new(
                data.union_token.span,
                "`EnvShape` cannot be derived for unions",
            )),
        }
    }

    pub fn to_tokens(&self) -> TokenStream {
        match self {
            Self::Struct(data) => crate::impls::impl_struct(data),
            Self::Opaque(meta) => crate::impls::impl_opaque(meta),
        }
    }
}
