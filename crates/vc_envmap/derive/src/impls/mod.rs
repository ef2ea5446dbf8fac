// -----------------------------------------------------------------------------
// Modules

mod opaque_kind;
mod struct_kind;

// -----------------------------------------------------------------------------
// Internal API

pub(crate) use opaque_kind::impl_opaque;
pub(crate) use struct_kind::impl_struct;

use proc_macro2::TokenStream;
use quote::quote;

use crate::derive_data::EnvMeta;

/// Generate `EnvShape` implementation tokens for a trait-object kind.
///
/// `kind` is the name of the `ShapeRef`/`ShapeMut`/`ShapeKind` variant.
pub(crate) fn impl_trait_env_shape(
    meta: &EnvMeta,
    kind: TokenStream,
    bounds: &TokenStream,
) -> TokenStream {
    let vc_envmap_path = meta.vc_envmap_path();
    let env_shape_ = crate::path::env_shape_(vc_envmap_path);
    let shape_ref_ = crate::path::shape_ref_(vc_envmap_path);
    let shape_mut_ = crate::path::shape_mut_(vc_envmap_path);
    let shape_kind_ = crate::path::shape_kind_(vc_envmap_path);

    let header = meta.impl_header(&env_shape_, bounds);

    quote! {
        #header {
            #[inline]
            fn shape_ref(&self) -> #shape_ref_<'_> {
                #shape_ref_::#kind(self)
            }

            #[inline]
            fn shape_mut(&mut self) -> #shape_mut_<'_> {
                #shape_mut_::#kind(self)
            }

            #[inline]
            fn shape_kind(&self) -> #shape_kind_ {
                #shape_kind_::#kind
            }
        }
    }
}
