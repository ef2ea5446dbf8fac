use alloc::borrow::Cow;
use alloc::string::String;
use alloc::sync::Arc;
use alloc::vec::Vec;
use core::fmt;

/// The tag key read from field metadata unless configured otherwise.
pub const DEFAULT_TAG_KEY: &str = "env";

/// Splits one source value into per-element texts.
pub type SplitFn = Arc<dyn Fn(&str) -> Vec<String> + Send + Sync>;

/// Joins rendered element texts back into one value, the inverse of [`SplitFn`].
pub type JoinFn = Arc<dyn Fn(&[String]) -> String + Send + Sync>;

/// Splits on every `,`, an empty text yields no element.
///
/// # Examples
///
/// ```
/// use vc_envmap::config::split_comma;
///
/// assert_eq!(split_comma("a,,b"), ["a", "", "b"]);
/// assert!(split_comma("").is_empty());
/// ```
pub fn split_comma(text: &str) -> Vec<String> {
    if text.is_empty() {
        return Vec::new();
    }
    text.split(',').map(String::from).collect()
}

/// Joins with `,`.
pub fn join_comma(parts: &[String]) -> String {
    parts.join(",")
}

// -----------------------------------------------------------------------------
// EnvConfig

/// Options of one parse or marshal run.
///
/// # Examples
///
/// ```
/// use vc_envmap::EnvConfig;
///
/// let config = EnvConfig::new()
///     .with_key_prefix("APP_")
///     .with_allow_empty(true)
///     .with_split_fn(|text: &str| text.split(';').map(String::from).collect());
///
/// assert_eq!(config.key_prefix(), "APP_");
/// assert_eq!(config.split("a;b"), ["a", "b"]);
/// ```
#[derive(Clone)]
pub struct EnvConfig {
    zero_before_write: bool,
    tag_key: Cow<'static, str>,
    key_prefix: Cow<'static, str>,
    auto_prefix: bool,
    allow_empty: bool,
    direct_default: bool,
    split_fn: SplitFn,
    join_fn: JoinFn,
}

impl Default for EnvConfig {
    fn default() -> Self {
        Self {
            zero_before_write: false,
            tag_key: Cow::Borrowed(DEFAULT_TAG_KEY),
            key_prefix: Cow::Borrowed(""),
            auto_prefix: false,
            allow_empty: false,
            direct_default: false,
            split_fn: Arc::new(split_comma),
            join_fn: Arc::new(join_comma),
        }
    }
}

impl EnvConfig {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace pointers and sequences with fresh values instead of merging.
    #[inline]
    pub fn with_zero_before_write(mut self, value: bool) -> Self {
        self.zero_before_write = value;
        self
    }

    /// Read field tags stored under `key` instead of [`DEFAULT_TAG_KEY`].
    #[inline]
    pub fn with_tag_key(mut self, key: impl Into<Cow<'static, str>>) -> Self {
        self.tag_key = key.into();
        self
    }

    /// Prepend `prefix` to every key.
    #[inline]
    pub fn with_key_prefix(mut self, prefix: impl Into<Cow<'static, str>>) -> Self {
        self.key_prefix = prefix.into();
        self
    }

    /// Use the resolved name of a nested record as the prefix of its fields
    /// when the field declares no `prefix:` of its own.
    #[inline]
    pub fn with_auto_prefix(mut self, value: bool) -> Self {
        self.auto_prefix = value;
        self
    }

    /// Accept missing or empty values, which then yield the zero value.
    #[inline]
    pub fn with_allow_empty(mut self, value: bool) -> Self {
        self.allow_empty = value;
        self
    }

    /// Skip the source entirely and use each field's `default:` text.
    #[inline]
    pub fn with_direct_default(mut self, value: bool) -> Self {
        self.direct_default = value;
        self
    }

    #[inline]
    pub fn with_split_fn(
        mut self,
        split: impl Fn(&str) -> Vec<String> + Send + Sync + 'static,
    ) -> Self {
        self.split_fn = Arc::new(split);
        self
    }

    #[inline]
    pub fn with_join_fn(
        mut self,
        join: impl Fn(&[String]) -> String + Send + Sync + 'static,
    ) -> Self {
        self.join_fn = Arc::new(join);
        self
    }

    #[inline]
    pub fn zero_before_write(&self) -> bool {
        self.zero_before_write
    }

    #[inline]
    pub fn tag_key(&self) -> &str {
        &self.tag_key
    }

    #[inline]
    pub fn key_prefix(&self) -> &str {
        &self.key_prefix
    }

    #[inline]
    pub fn auto_prefix(&self) -> bool {
        self.auto_prefix
    }

    #[inline]
    pub fn allow_empty(&self) -> bool {
        self.allow_empty
    }

    #[inline]
    pub fn direct_default(&self) -> bool {
        self.direct_default
    }

    /// Splits `text` with the configured split function.
    #[inline]
    pub fn split(&self, text: &str) -> Vec<String> {
        (self.split_fn)(text)
    }

    /// Joins `parts` with the configured join function.
    #[inline]
    pub fn join(&self, parts: &[String]) -> String {
        (self.join_fn)(parts)
    }
}

impl fmt::Debug for EnvConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EnvConfig")
            .field("zero_before_write", &self.zero_before_write)
            .field("tag_key", &self.tag_key)
            .field("key_prefix", &self.key_prefix)
            .field("auto_prefix", &self.auto_prefix)
            .field("allow_empty", &self.allow_empty)
            .field("direct_default", &self.direct_default)
            .finish_non_exhaustive()
    }
}
