use proc_macro2::TokenStream;
use quote::quote;
use syn::LitStr;
use syn::ext::IdentExt;

use super::impl_trait_env_shape;
use crate::derive_data::EnvStructData;

/// Implement `EnvShape` and `EnvStruct` for a struct with named fields.
pub(crate) fn impl_struct(info: &EnvStructData) -> TokenStream {
    let bounds = info.field_bounds();

    let env_shape_tokens = impl_trait_env_shape(info.meta(), quote!(Struct), &bounds);
    let env_struct_tokens = impl_trait_env_struct(info, &bounds);

    quote! {
        #env_shape_tokens

        #env_struct_tokens
    }
}

/// Generate `EnvStruct` trait implementation tokens.
///
/// Non-writable fields are described in `StructInfo` but not reachable
/// through `field_at`, so their types need no `EnvShape` implementation.
fn impl_trait_env_struct(info: &EnvStructData, bounds: &TokenStream) -> TokenStream {
    let meta = info.meta();
    let vc_envmap_path = meta.vc_envmap_path();
    let env_shape_ = crate::path::env_shape_(vc_envmap_path);
    let env_struct_ = crate::path::env_struct_(vc_envmap_path);
    let struct_info_ = crate::path::struct_info_(vc_envmap_path);
    let named_field_ = crate::path::named_field_(vc_envmap_path);
    let field_tags_ = crate::path::field_tags_(vc_envmap_path);

    let type_name = LitStr::new(&meta.ident().unraw().to_string(), meta.ident().span());
    let field_count = info.fields().len();

    let named_fields = info.fields().iter().map(|field| {
        let ident = field.ident();
        let name = LitStr::new(&ident.unraw().to_string(), ident.span());
        let writable = field.is_writable();
        let tags = field.attrs.tags.iter().map(|(key, value)| {
            quote! { (#key, #value) }
        });

        quote! {
            #named_field_::new(#name, #field_tags_::new(&[#(#tags),*]), #writable)
        }
    });

    let indices = info.writable_fields().map(|field| field.index);
    let members = info.writable_fields().map(|field| field.ident());
    let indices_mut = indices.clone();
    let members_mut = members.clone();

    let header = meta.impl_header(&env_struct_, bounds);

    quote! {
        #header {
            fn struct_info(&self) -> &'static #struct_info_ {
                static FIELDS: [#named_field_; #field_count] = [#(#named_fields),*];
                static INFO: #struct_info_ = #struct_info_::new(#type_name, &FIELDS);
                &INFO
            }

            fn field_at(&self, index: usize) -> ::core::option::Option<&dyn #env_shape_> {
                match index {
                    #(#indices => ::core::option::Option::Some(&self.#members),)*
                    _ => ::core::option::Option::None,
                }
            }

            fn field_at_mut(&mut self, index: usize) -> ::core::option::Option<&mut dyn #env_shape_> {
                match index {
                    #(#indices_mut => ::core::option::Option::Some(&mut self.#members_mut),)*
                    _ => ::core::option::Option::None,
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use syn::{DeriveInput, parse_quote};

    use crate::derive_data::EnvDerive;

    #[test]
    fn accessors_cover_writable_fields_only() {
        let input: DeriveInput = parse_quote! {
            struct Args {
                pub open: i32,
                hidden: i32,
                pub(crate) shared: u8,
            }
        };

        let tokens = EnvDerive::from_input(&input).unwrap().to_tokens().to_string();

        assert!(tokens.contains("fn field_at_mut"));
        assert!(tokens.contains("(& mut self . open)"));
        assert!(tokens.contains("(& mut self . shared)"));
        assert!(tokens.contains("(& self . shared)"));
        assert!(tokens.contains("2usize =>"));
        assert!(!tokens.contains("self . hidden"));
    }
}
