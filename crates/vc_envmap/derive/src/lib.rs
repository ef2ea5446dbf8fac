//! See following macros:
//!
//! - [`EnvShape`](derive_env_shape)
#![cfg_attr(docsrs, feature(doc_cfg))]
#![allow(clippy::std_instead_of_core, reason = "proc-macro lib")]
#![allow(clippy::std_instead_of_alloc, reason = "proc-macro lib")]

use proc_macro::TokenStream;
use quote::quote;
use syn::{DeriveInput, parse_macro_input};

static ENV_ATTRIBUTE_NAME: &str = "env";

// -----------------------------------------------------------------------------
// Modules

mod derive_data;
mod impls;
mod path;

// -----------------------------------------------------------------------------
// Macros

/// # Environment Shape Derivation
///
/// `#[derive(EnvShape)]` on a struct with named fields implements:
///
/// - `EnvShape` (kind `Struct`)
/// - `EnvStruct`
///
/// Fields are described in declaration order. Only fields declared `pub`
/// (with any restriction, e.g. `pub(crate)`) are visited by the engine; their
/// types must implement `EnvShape`. Other fields are left untouched and need
/// no implementation.
///
/// ## Field Tags
///
/// A field tag is a comma separated list of clauses, see the `vc_envmap`
/// crate documentation for the grammar.
///
/// ```rust, ignore
/// #[derive(EnvShape, Default)]
/// struct Config {
///     // Stored under the default tag key `env`.
///     #[env("prefix:DB_,default:5432,PORT")]
///     pub port: u16,
///     // Stored under the key `emp`, read when the parser is configured
///     // with `EnvConfig::with_tag_key("emp")`.
///     #[env(emp = "DATABASE_DSN")]
///     pub dsn: String,
///     // Both at once.
///     #[env("-", emp = "LEVEL")]
///     pub level: String,
/// }
/// ```
///
/// When a key appears several times the first value wins.
///
/// ## Opaque Types
///
/// `#[env(opaque)]` on the type treats it as a leaf converted through
/// `FromStr` and `Display`, instead of inspecting its fields. This also works
/// for enums and tuple structs.
///
/// ```rust, ignore
/// #[derive(EnvShape)]
/// #[env(opaque)]
/// enum Level { Debug, Info }
///
/// impl FromStr for Level { /* ... */ }
/// impl Display for Level { /* ... */ }
/// ```
///
/// Tuple structs, unit structs, enums and unions are rejected otherwise.
///
/// ## Generics
///
/// Generic parameters are kept; a `FieldType: EnvShape` bound is added for
/// every visited field.
#[proc_macro_derive(EnvShape, attributes(env))]
pub fn derive_env_shape(input: TokenStream) -> TokenStream {
    let ast = parse_macro_input!(input as DeriveInput);

    let derive_data = match derive_data::EnvDerive::from_input(&ast) {
        Ok(data) => data,
        Err(err) => return err.into_compile_error().into(),
    };

    let impl_tokens = derive_data.to_tokens();

    TokenStream::from(quote! {
        const _: () = {
            #impl_tokens
        };
    })
}
