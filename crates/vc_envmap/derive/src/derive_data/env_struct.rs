use proc_macro2::TokenStream;
use quote::quote;
use syn::{Field, Fields, Ident, Visibility};

use super::{EnvMeta, FieldAttributes};

/// A named field of a derived struct.
pub(crate) struct StructField<'a> {
    pub data: &'a Field,
    pub attrs: FieldAttributes,
    /// Declaration index, also the index used by `EnvStruct::field_at`.
    pub index: usize,
}

impl StructField<'_> {
    #[inline]
    pub fn ident(&self) -> &Ident {
        // Only named fields are collected.
        self.data.ident.as_ref().unwrap()
    }

    /// Fields declared with any `pub` visibility are written by the engine.
    #[inline]
    pub fn is_writable(&self) -> bool {
        !matches!(self.data.vis, Visibility::Inherited)
    }
}

/// A struct with named fields.
pub(crate) struct EnvStructData<'a> {
    meta: EnvMeta<'a>,
    fields: Vec<StructField<'a>>,
}

impl<'a> EnvStructData<'a> {
    pub fn new(meta: EnvMeta<'a>, fields: &'a Fields) -> syn::Result<Self> {
        let Fields::Named(named) = fields else {
            return Err(syn::Error::new(
                meta.ident().span(),
                "`EnvShape` can only be derived for structs with named fields, \
                 use `#[env(opaque)]` for other types",
            ));
        };

        let fields = named
            .named
            .iter()
            .enumerate()
            .map(|(index, data)| {
                Ok(StructField {
                    data,
                    attrs: FieldAttributes::parse_attrs(&data.attrs)?,
                    index,
                })
            })
            .collect::<syn::Result<Vec<_>>>()?;

        Ok(Self { meta, fields })
    }

    #[inline]
    pub fn meta(&self) -> &EnvMeta<'a> {
        &self.meta
    }

    #[inline]
    pub fn fields(&self) -> &[StructField<'a>] {
        &self.fields
    }

    /// Fields the engine may read and write.
    #[inline]
    pub fn writable_fields(&self) -> impl Iterator<Item = &StructField<'a>> + Clone {
        self.fields.iter().filter(|field| field.is_writable())
    }

    /// `FieldType: EnvShape,` for every writable field.
    pub fn field_bounds(&self) -> TokenStream {
        let env_shape_ = crate::path::env_shape_(self.meta.vc_envmap_path());
        let types = self.writable_fields().map(|field| &field.data.ty);
        quote! {
            #(#types: #env_shape_,)*
        }
    }
}
