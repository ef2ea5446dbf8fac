use proc_macro2::TokenStream;
use quote::quote;

use super::impl_trait_env_shape;
use crate::derive_data::EnvMeta;

/// Implement `EnvShape` and `OpaqueShape` for a `FromStr + Display` type.
pub(crate) fn impl_opaque(meta: &EnvMeta) -> TokenStream {
    let bounds = TokenStream::new();

    let env_shape_tokens = impl_trait_env_shape(meta, quote!(Opaque), &bounds);
    let opaque_shape_tokens = impl_trait_opaque_shape(meta, &bounds);

    quote! {
        #env_shape_tokens

        #opaque_shape_tokens
    }
}

/// Generate `OpaqueShape` trait implementation tokens.
fn impl_trait_opaque_shape(meta: &EnvMeta, bounds: &TokenStream) -> TokenStream {
    let vc_envmap_path = meta.vc_envmap_path();
    let opaque_shape_ = crate::path::opaque_shape_(vc_envmap_path);
    let box_error_ = crate::path::box_error_(vc_envmap_path);
    let macro_exports_ = crate::path::macro_exports_(vc_envmap_path);

    let header = meta.impl_header(&opaque_shape_, bounds);

    quote! {
        #header {
            #[inline]
            fn type_name(&self) -> &'static str {
                ::core::any::type_name::<Self>()
            }

            fn assign_text(&mut self, text: &str) -> ::core::result::Result<(), #box_error_> {
                *self = <Self as ::core::str::FromStr>::from_str(text)
                    .map_err(#box_error_::from)?;
                ::core::result::Result::Ok(())
            }

            #[inline]
            fn render_text(&self) -> #macro_exports_::String {
                #macro_exports_::ToString::to_string(self)
            }
        }
    }
}
