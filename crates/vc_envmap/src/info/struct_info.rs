use core::fmt;

// -----------------------------------------------------------------------------
// FieldTags

/// The raw tag strings attached to one field, keyed by tag key.
///
/// Generated by `#[derive(EnvShape)]` from `#[env(...)]` attributes:
///
/// - `#[env("prefix:DB_")]` stores `"prefix:DB_"` under [`DEFAULT_TAG_KEY`].
/// - `#[env(emp = "DSN")]` stores `"DSN"` under `"emp"`.
///
/// The engine only ever reads the value stored under its configured tag key.
///
/// [`DEFAULT_TAG_KEY`]: crate::DEFAULT_TAG_KEY
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct FieldTags {
    pairs: &'static [(&'static str, &'static str)],
}

impl FieldTags {
    /// A tag set without any entry.
    pub const EMPTY: Self = Self { pairs: &[] };

    /// Creates a tag set from `(key, value)` pairs, in declaration order.
    #[inline]
    pub const fn new(pairs: &'static [(&'static str, &'static str)]) -> Self {
        Self { pairs }
    }

    /// Returns the value stored under `key`, or `""` when there is none.
    ///
    /// When a key was declared several times the first declaration wins.
    ///
    /// # Examples
    ///
    /// ```
    /// use vc_envmap::info::FieldTags;
    ///
    /// let tags = FieldTags::new(&[("env", "prefix:DB_"), ("emp", "DSN")]);
    /// assert_eq!(tags.get("emp"), "DSN");
    /// assert_eq!(tags.get("yaml"), "");
    /// ```
    pub fn get(&self, key: &str) -> &'static str {
        self.lookup(key).unwrap_or("")
    }

    /// Returns the value stored under `key`, distinguishing absence from `""`.
    pub fn lookup(&self, key: &str) -> Option<&'static str> {
        self.pairs
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, value)| *value)
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Iterates over all `(key, value)` pairs.
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &'static str)> {
        self.pairs.iter().copied()
    }
}

impl fmt::Debug for FieldTags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

// -----------------------------------------------------------------------------
// NamedField

/// Information for a named struct field.
///
/// # Examples
///
/// ```
/// use vc_envmap::{EnvShape, EnvStruct};
///
/// #[derive(EnvShape, Default)]
/// struct Foo {
///     #[env("prefix:APP_")]
///     pub port: u16,
///     secret: String,
/// }
///
/// let info = Foo::default().struct_info();
/// let port = info.field_at(0).unwrap();
///
/// assert_eq!(port.name(), "port");
/// assert_eq!(port.tags().get("env"), "prefix:APP_");
/// assert!(port.is_writable());
/// assert!(!info.field_at(1).unwrap().is_writable());
/// ```
#[derive(Clone, Copy, Debug)]
pub struct NamedField {
    name: &'static str,
    tags: FieldTags,
    writable: bool,
}

impl NamedField {
    /// Creates a new [`NamedField`].
    ///
    /// `writable` is `false` for fields the engine must leave alone
    /// (non-`pub` fields when generated by the derive macro).
    #[inline]
    pub const fn new(name: &'static str, tags: FieldTags, writable: bool) -> Self {
        Self {
            name,
            tags,
            writable,
        }
    }

    /// Returns the declared field identifier.
    #[inline]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    #[inline]
    pub const fn tags(&self) -> &FieldTags {
        &self.tags
    }

    #[inline]
    pub const fn is_writable(&self) -> bool {
        self.writable
    }
}

// -----------------------------------------------------------------------------
// StructInfo

/// Static information of a record type, fields in declaration order.
#[derive(Clone, Copy, Debug)]
pub struct StructInfo {
    name: &'static str,
    fields: &'static [NamedField],
}

impl StructInfo {
    #[inline]
    pub const fn new(name: &'static str, fields: &'static [NamedField]) -> Self {
        Self { name, fields }
    }

    /// Returns the type identifier, without module path or generics.
    #[inline]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    #[inline]
    pub const fn field_len(&self) -> usize {
        self.fields.len()
    }

    #[inline]
    pub fn field_at(&self, index: usize) -> Option<&'static NamedField> {
        self.fields.get(index)
    }

    /// Returns the field with the given declared identifier.
    pub fn field(&self, name: &str) -> Option<&'static NamedField> {
        self.fields.iter().find(|field| field.name == name)
    }

    /// Returns the index of the field with the given declared identifier.
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.fields.iter().position(|field| field.name == name)
    }

    /// Iterates over the fields in declaration order.
    #[inline]
    pub fn iter(&self) -> core::slice::Iter<'static, NamedField> {
        self.fields.iter()
    }
}
