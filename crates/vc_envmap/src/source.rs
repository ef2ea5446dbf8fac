use alloc::borrow::ToOwned;
use alloc::collections::BTreeMap;
use alloc::string::String;

/// A read-only key/value store the engine looks keys up in.
///
/// Lookups must not have side effects; the engine may query the same key
/// any number of times.
///
/// # Examples
///
/// ```
/// use std::collections::BTreeMap;
/// use vc_envmap::{EnvSource, source::FnSource};
///
/// let map = BTreeMap::from([("PORT".to_owned(), "80".to_owned())]);
/// assert_eq!(map.lookup("PORT").as_deref(), Some("80"));
///
/// let pairs = [("HOST", "localhost")];
/// assert_eq!(pairs.as_slice().lookup("HOST").as_deref(), Some("localhost"));
///
/// let upper = FnSource(|key: &str| Some(key.to_uppercase()));
/// assert_eq!(upper.lookup("abc").as_deref(), Some("ABC"));
/// ```
pub trait EnvSource {
    /// Returns the value stored under `key`, `None` when absent.
    fn lookup(&self, key: &str) -> Option<String>;
}

impl<S: EnvSource + ?Sized> EnvSource for &S {
    #[inline]
    fn lookup(&self, key: &str) -> Option<String> {
        (**self).lookup(key)
    }
}

impl EnvSource for BTreeMap<String, String> {
    #[inline]
    fn lookup(&self, key: &str) -> Option<String> {
        self.get(key).cloned()
    }
}

impl EnvSource for BTreeMap<&str, &str> {
    #[inline]
    fn lookup(&self, key: &str) -> Option<String> {
        self.get(key).map(|value| (*value).to_owned())
    }
}

impl EnvSource for [(&str, &str)] {
    fn lookup(&self, key: &str) -> Option<String> {
        self.iter()
            .find(|(k, _)| *k == key)
            .map(|(_, value)| (*value).to_owned())
    }
}

/// A source holding nothing, every lookup yields `None`.
///
/// Useful with [`EnvConfig::with_direct_default`] where the source is never read.
///
/// [`EnvConfig::with_direct_default`]: crate::EnvConfig::with_direct_default
#[derive(Debug, Clone, Copy, Default)]
pub struct EmptySource;

impl EnvSource for EmptySource {
    #[inline]
    fn lookup(&self, _key: &str) -> Option<String> {
        None
    }
}

/// A source backed by a closure.
#[derive(Debug, Clone, Copy)]
pub struct FnSource<F>(pub F);

impl<F: Fn(&str) -> Option<String>> EnvSource for FnSource<F> {
    #[inline]
    fn lookup(&self, key: &str) -> Option<String> {
        (self.0)(key)
    }
}

// -----------------------------------------------------------------------------
// std

#[cfg(feature = "std")]
mod std_source {
    use alloc::string::String;
    use core::hash::BuildHasher;
    use std::collections::HashMap;

    use super::EnvSource;

    /// The environment of the current process.
    ///
    /// Values that are not valid unicode are treated as absent.
    #[derive(Debug, Clone, Copy, Default)]
    pub struct ProcessEnv;

    impl EnvSource for ProcessEnv {
        #[inline]
        fn lookup(&self, key: &str) -> Option<String> {
            std::env::var(key).ok()
        }
    }

    impl<S: BuildHasher> EnvSource for HashMap<String, String, S> {
        #[inline]
        fn lookup(&self, key: &str) -> Option<String> {
            self.get(key).cloned()
        }
    }
}

#[cfg(feature = "std")]
pub use std_source::ProcessEnv;
