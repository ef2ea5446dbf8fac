use alloc::borrow::ToOwned;
use alloc::format;
use alloc::string::String;

use crate::EnvConfig;
use crate::info::{NamedField, ShapeKind};
use crate::tag::Directive;

// -----------------------------------------------------------------------------
// Frame

/// The traversal state of one location.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Frame<'a> {
    pub prefix: &'a str,
    pub name: &'a str,
    pub default: &'a str,
    pub direct: bool,
}

impl<'a> Frame<'a> {
    /// The frame of the value passed to [`EnvParser`](crate::EnvParser).
    #[inline]
    pub fn root(config: &'a EnvConfig) -> Self {
        Self {
            prefix: config.key_prefix(),
            name: "",
            default: "",
            direct: config.direct_default(),
        }
    }

    /// The frame of one sequence element, whose text is injected directly.
    #[inline]
    pub fn element(text: &'a str) -> Self {
        Self {
            prefix: "",
            name: "",
            default: text,
            direct: true,
        }
    }

    /// Returns `prefix + name`.
    #[inline]
    pub fn key(&self) -> String {
        format!("{}{}", self.prefix, self.name)
    }
}

// -----------------------------------------------------------------------------
// FieldPlan

/// How one record field is visited, shared by parse and marshal.
#[derive(Debug)]
pub(crate) struct FieldPlan {
    prefix: String,
    name: &'static str,
    default: &'static str,
}

impl FieldPlan {
    /// Returns `None` for fields that are not visited at all.
    ///
    /// A record-kind field with no `prefix:` clause takes its own resolved
    /// name as prefix under `auto_prefix`, dropping the outer prefix.
    pub fn new(
        config: &EnvConfig,
        field: &NamedField,
        kind: ShapeKind,
        outer_prefix: &str,
    ) -> Option<Self> {
        if !field.is_writable() {
            log::trace!("skipping non-writable field `{}`", field.name());
            return None;
        }

        let directive = Directive::parse(field.tags().get(config.tag_key()));
        if directive.ignore {
            log::trace!("skipping ignored field `{}`", field.name());
            return None;
        }

        let name = directive.resolved_name(field.name());
        let local_prefix = directive.prefix();
        let prefix = if kind == ShapeKind::Struct && local_prefix.is_empty() && config.auto_prefix()
        {
            name.to_owned()
        } else {
            format!("{outer_prefix}{local_prefix}")
        };

        Some(Self {
            prefix,
            name,
            default: directive.default_text(),
        })
    }

    #[inline]
    pub fn frame(&self, direct: bool) -> Frame<'_> {
        Frame {
            prefix: &self.prefix,
            name: self.name,
            default: self.default,
            direct,
        }
    }
}
