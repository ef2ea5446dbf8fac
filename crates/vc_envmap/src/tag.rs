//! The field tag grammar.
//!
//! A tag is a comma-separated list of clauses:
//!
//! | Clause            | Effect                                   |
//! |-------------------|------------------------------------------|
//! | `-`               | ignore the field                         |
//! | `prefix:<value>`  | prefix for this field and its children   |
//! | `name:<value>`    | rename the field                         |
//! | `default:<value>` | text used when the lookup yields nothing |
//! | `<value>`         | shorthand for `name:<value>`             |
//!
//! Clauses are trimmed. Empty clauses and `key:value` clauses with an unknown
//! key have no effect. Later clauses override earlier ones. Parsing never
//! fails.

/// The directive parsed from one field tag.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Directive<'a> {
    pub rename: Option<&'a str>,
    pub local_prefix: Option<&'a str>,
    pub default_value: Option<&'a str>,
    pub ignore: bool,
}

impl<'a> Directive<'a> {
    /// Parses a raw tag string.
    ///
    /// # Examples
    ///
    /// ```
    /// use vc_envmap::tag::Directive;
    ///
    /// let directive = Directive::parse("prefix:DB_,default:5432,PORT");
    /// assert_eq!(directive.local_prefix, Some("DB_"));
    /// assert_eq!(directive.default_value, Some("5432"));
    /// assert_eq!(directive.rename, Some("PORT"));
    /// assert!(!directive.ignore);
    ///
    /// assert!(Directive::parse("-").ignore);
    /// assert_eq!(Directive::parse(""), Directive::default());
    /// ```
    pub fn parse(raw: &'a str) -> Self {
        let mut directive = Self::default();

        for clause in raw.split(',').map(str::trim) {
            if clause.is_empty() {
                continue;
            }
            if clause == "-" {
                directive.ignore = true;
                continue;
            }
            match clause.split_once(':') {
                Some(("prefix", value)) => directive.local_prefix = Some(value),
                Some(("name", value)) => directive.rename = Some(value),
                Some(("default", value)) => directive.default_value = Some(value),
                Some(_) => {}
                None => directive.rename = Some(clause),
            }
        }

        directive
    }

    /// Returns the rename, or `declared` when there is none.
    #[inline]
    pub fn resolved_name(&self, declared: &'a str) -> &'a str {
        match self.rename {
            Some(name) if !name.is_empty() => name,
            _ => declared,
        }
    }

    /// Returns the local prefix, or `""` when there is none.
    #[inline]
    pub fn prefix(&self) -> &'a str {
        self.local_prefix.unwrap_or("")
    }

    /// Returns the default text, or `""` when there is none.
    #[inline]
    pub fn default_text(&self) -> &'a str {
        self.default_value.unwrap_or("")
    }
}

/// Parses a raw tag string, see [`Directive::parse`].
#[inline]
pub fn parse_directive(raw: &str) -> Directive<'_> {
    Directive::parse(raw)
}
