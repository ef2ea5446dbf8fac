use proc_macro2::TokenStream;
use quote::{ToTokens, quote};
use syn::{Generics, Ident, Path};

/// Data shared by every derive kind.
pub(crate) struct EnvMeta<'a> {
    vc_envmap_path: Path,
    ident: &'a Ident,
    generics: &'a Generics,
}

impl core::fmt::Debug for EnvMeta<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("EnvMeta")
            .field("vc_envmap_path", &self.vc_envmap_path.to_token_stream())
            .field("ident", &self.ident)
            .finish()
    }
}

impl<'a> EnvMeta<'a> {
    #[inline]
    pub fn new(ident: &'a Ident, generics: &'a Generics) -> Self {
        Self {
            vc_envmap_path: crate::path::vc_envmap(),
            ident,
            generics,
        }
    }

    #[inline]
    pub fn vc_envmap_path(&self) -> &Path {
        &self.vc_envmap_path
    }

    #[inline]
    pub fn ident(&self) -> &'a Ident {
        self.ident
    }

    /// Generates `impl #impl_generics #trait_ for #ident #ty_generics #where_clause`.
    ///
    /// `bounds` are extra where-clause predicates, each followed by a comma.
    pub fn impl_header(&self, trait_: &TokenStream, bounds: &TokenStream) -> TokenStream {
        let ident = self.ident;
        let (impl_generics, ty_generics, where_clause) = self.generics.split_for_impl();

        let predicates = where_clause.map(|clause| {
            let predicates = clause.predicates.iter();
            quote! { #(#predicates,)* }
        });

        quote! {
            impl #impl_generics #trait_ for #ident #ty_generics
            where
                #predicates
                #bounds
        }
    }
}
