use proc_macro2::Span;
use syn::ext::IdentExt;
use syn::parse::ParseStream;
use syn::{Attribute, Ident, LitStr, Token};

use crate::ENV_ATTRIBUTE_NAME;

/// The tag key used by `#[env("..")]`.
const DEFAULT_TAG_KEY: &str = "env";

// -----------------------------------------------------------------------------
// TypeAttributes

/// Attributes placed on the type.
///
/// - `#[env(opaque)]`: derive an opaque leaf from `FromStr + Display`.
#[derive(Default, Debug)]
pub(crate) struct TypeAttributes {
    pub opaque: Option<Span>,
}

impl TypeAttributes {
    pub fn parse_attrs(attrs: &[Attribute]) -> syn::Result<Self> {
        let mut this = Self::default();

        for attr in attrs.iter().filter(|attr| attr.path().is_ident(ENV_ATTRIBUTE_NAME)) {
            attr.parse_args_with(|input: ParseStream| this.parse_inner_stream(input))?;
        }

        Ok(this)
    }

    fn parse_inner_stream(&mut self, input: ParseStream) -> syn::Result<()> {
        while !input.is_empty() {
            let ident = input.call(Ident::parse_any)?;
            if ident != "opaque" {
                return Err(syn::Error::new(
                    ident.span(),
                    "unknown type attribute, expected `opaque`",
                ));
            }
            if self.opaque.is_some() {
                return Err(syn::Error::new(ident.span(), "duplicate `opaque` attribute"));
            }
            self.opaque = Some(ident.span());

            if input.is_empty() {
                break;
            }
            input.parse::<Token![,]>()?;
        }
        Ok(())
    }
}

// -----------------------------------------------------------------------------
// FieldAttributes

/// Attributes placed on a field.
///
/// - `#[env("clauses")]`: tag stored under the default key `env`.
/// - `#[env(key = "clauses")]`: tag stored under `key`.
///
/// Several attributes and several entries per attribute are kept in order.
#[derive(Default, Debug)]
pub(crate) struct FieldAttributes {
    pub tags: Vec<(String, LitStr)>,
}

impl FieldAttributes {
    pub fn parse_attrs(attrs: &[Attribute]) -> syn::Result<Self> {
        let mut this = Self::default();

        for attr in attrs.iter().filter(|attr| attr.path().is_ident(ENV_ATTRIBUTE_NAME)) {
            attr.parse_args_with(|input: ParseStream| this.parse_inner_stream(input))?;
        }

        Ok(this)
    }

    fn parse_inner_stream(&mut self, input: ParseStream) -> syn::Result<()> {
        while !input.is_empty() {
            if input.peek(LitStr) {
                let value: LitStr = input.parse()?;
                self.tags.push((DEFAULT_TAG_KEY.to_owned(), value));
            } else {
                let key = input.call(Ident::parse_any)?;
                if !input.peek(Token![=]) {
                    return Err(syn::Error::new(
                        key.span(),
                        "expected `\"clauses\"` or `key = \"clauses\"`",
                    ));
                }
                input.parse::<Token![=]>()?;
                let value: LitStr = input.parse()?;
                self.tags.push((key.unraw().to_string(), value));
            }

            if input.is_empty() {
                break;
            }
            input.parse::<Token![,]>()?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::{FieldAttributes, TypeAttributes};
    use syn::{Attribute, parse_quote};

    #[test]
    fn field_tags_in_order() {
        let attrs: Vec<Attribute> = vec![
            parse_quote!(#[env("prefix:DB_")]),
            parse_quote!(#[doc = "ignored"]),
            parse_quote!(#[env(emp = "DSN", r#type = "x", "default:1")]),
        ];

        let parsed = FieldAttributes::parse_attrs(&attrs).unwrap();
        let tags: Vec<(String, String)> = parsed
            .tags
            .iter()
            .map(|(key, value)| (key.clone(), value.value()))
            .collect();

        assert_eq!(
            tags,
            [
                ("env".to_owned(), "prefix:DB_".to_owned()),
                ("emp".to_owned(), "DSN".to_owned()),
                ("type".to_owned(), "x".to_owned()),
                ("env".to_owned(), "default:1".to_owned()),
            ]
        );
    }

    #[test]
    fn field_rejects_bare_ident() {
        let attrs: Vec<Attribute> = vec![parse_quote!(#[env(opaque)])];
        assert!(FieldAttributes::parse_attrs(&attrs).is_err());
    }

    #[test]
    fn type_opaque() {
        let attrs: Vec<Attribute> = vec![parse_quote!(#[env(opaque)])];
        assert!(TypeAttributes::parse_attrs(&attrs).unwrap().opaque.is_some());

        let attrs: Vec<Attribute> = vec![parse_quote!(#[env(opaque, opaque)])];
        assert!(TypeAttributes::parse_attrs(&attrs).is_err());

        let attrs: Vec<Attribute> = vec![parse_quote!(#[env(transparent)])];
        assert!(TypeAttributes::parse_attrs(&attrs).is_err());
    }
}
