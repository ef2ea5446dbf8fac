//! Paths of `vc_envmap` items named by generated code.
//!
//! Kept in one place so a change to the layout of `vc_envmap` only touches
//! this module.

use proc_macro2::TokenStream;
use quote::quote;

// -----------------------------------------------------------------------------
// Crate Path

/// Get the correct access path to the `vc_envmap` crate.
///
/// 1. For crates that depend on `vc_envmap`, `::vc_envmap` is returned.
/// 2. For crates that depend on `vc_env`, `::vc_env::envmap` is returned.
/// 3. For other situations, `::vc_envmap` is returned, but this may be incorrect.
///
/// Reads the caller's `Cargo.toml`, so it is called once per derive and the
/// result is passed around.
pub(crate) fn vc_envmap() -> syn::Path {
    vc_macro_utils::Manifest::shared(|manifest| manifest.get_crate_path("vc_envmap"))
}

// -----------------------------------------------------------------------------
// Items

#[inline(always)]
pub(crate) fn env_shape_(vc_envmap_path: &syn::Path) -> TokenStream {
    quote! {
        #vc_envmap_path::EnvShape
    }
}

#[inline(always)]
pub(crate) fn env_struct_(vc_envmap_path: &syn::Path) -> TokenStream {
    quote! {
        #vc_envmap_path::EnvStruct
    }
}

#[inline(always)]
pub(crate) fn opaque_shape_(vc_envmap_path: &syn::Path) -> TokenStream {
    quote! {
        #vc_envmap_path::ops::OpaqueShape
    }
}

#[inline(always)]
pub(crate) fn shape_ref_(vc_envmap_path: &syn::Path) -> TokenStream {
    quote! {
        #vc_envmap_path::ops::ShapeRef
    }
}

#[inline(always)]
pub(crate) fn shape_mut_(vc_envmap_path: &syn::Path) -> TokenStream {
    quote! {
        #vc_envmap_path::ops::ShapeMut
    }
}

#[inline(always)]
pub(crate) fn shape_kind_(vc_envmap_path: &syn::Path) -> TokenStream {
    quote! {
        #vc_envmap_path::info::ShapeKind
    }
}

#[inline(always)]
pub(crate) fn struct_info_(vc_envmap_path: &syn::Path) -> TokenStream {
    quote! {
        #vc_envmap_path::info::StructInfo
    }
}

#[inline(always)]
pub(crate) fn named_field_(vc_envmap_path: &syn::Path) -> TokenStream {
    quote! {
        #vc_envmap_path::info::NamedField
    }
}

#[inline(always)]
pub(crate) fn field_tags_(vc_envmap_path: &syn::Path) -> TokenStream {
    quote! {
        #vc_envmap_path::info::FieldTags
    }
}

#[inline(always)]
pub(crate) fn box_error_(vc_envmap_path: &syn::Path) -> TokenStream {
    quote! {
        #vc_envmap_path::BoxError
    }
}

#[inline(always)]
pub(crate) fn macro_exports_(vc_envmap_path: &syn::Path) -> TokenStream {
    quote! {
        #vc_envmap_path::__macro_exports
    }
}
