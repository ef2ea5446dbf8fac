//! The traversal engine.
//!
//! One depth-first walk over the [shape](crate::EnvShape) of a value serves
//! both directions:
//!
//! - **parse**: every visited location reads `prefix + name` from an
//!   [`EnvSource`] and coerces the text into the location.
//! - **marshal**: every visited location renders its current value as a
//!   `KEY=value` line; the source is never read.
//!
//! Records are visited field by field in declaration order and fail on the
//! first error. Sequence elements are all attempted, their failures are
//! reported together as [`EnvError::Elements`].

// -----------------------------------------------------------------------------
// Modules

mod forward;
mod lookup;
mod plan;
mod reverse;

// -----------------------------------------------------------------------------
// Imports

use alloc::string::String;

use crate::error::EnvError;
use crate::{EnvConfig, EnvShape, EnvSource};

use plan::Frame;

#[cfg(feature = "std")]
pub type DefaultSource = crate::ProcessEnv;

#[cfg(not(feature = "std"))]
pub type DefaultSource = crate::source::EmptySource;

// -----------------------------------------------------------------------------
// Walker

/// The borrowed state of one traversal.
struct Walker<'p, S: ?Sized> {
    config: &'p EnvConfig,
    source: &'p S,
}

// -----------------------------------------------------------------------------
// EnvParser

/// Maps environment values onto a shaped value, and back.
///
/// A parser only borrows itself during a call; marshal output is
/// accumulated in a value local to the call. One parser can therefore serve
/// any number of calls, from several threads when `S: Sync`.
///
/// # Examples
///
/// ```
/// use std::collections::BTreeMap;
/// use vc_envmap::{EnvConfig, EnvParser, EnvShape};
///
/// #[derive(EnvShape, Default, Debug)]
/// struct Server {
///     #[env("PORT")]
///     pub port: u16,
///     #[env("default:localhost")]
///     pub host: String,
/// }
///
/// let source = BTreeMap::from([("APP_PORT", "8080")]);
/// let parser = EnvParser::with_source(EnvConfig::new().with_key_prefix("APP_"), source);
///
/// let mut server = Server::default();
/// parser.parse(&mut server).unwrap();
/// assert_eq!(server.port, 8080);
/// assert_eq!(server.host, "localhost");
///
/// assert_eq!(parser.marshal(&server).unwrap(), "APP_PORT=8080\nAPP_host=localhost\n");
/// ```
#[derive(Debug, Clone, Default)]
pub struct EnvParser<S = DefaultSource> {
    config: EnvConfig,
    source: S,
}

#[cfg(feature = "std")]
impl EnvParser {
    /// Creates a parser reading the process environment.
    #[inline]
    pub fn new(config: EnvConfig) -> Self {
        Self::with_source(config, crate::ProcessEnv)
    }
}

impl<S> EnvParser<S> {
    /// Creates a parser reading `source`.
    #[inline]
    pub const fn with_source(config: EnvConfig, source: S) -> Self {
        Self { config, source }
    }

    #[inline]
    pub const fn config(&self) -> &EnvConfig {
        &self.config
    }

    #[inline]
    pub const fn source(&self) -> &S {
        &self.source
    }

    #[inline]
    fn walker(&self) -> Walker<'_, S> {
        Walker {
            config: &self.config,
            source: &self.source,
        }
    }

    /// Renders `value` as env-file text, one `KEY=value\n` line per visited
    /// leaf or sequence, in traversal order.
    ///
    /// `None` pointers render nothing. Ignored and non-writable fields are
    /// skipped, so the output parses back into the same shape.
    pub fn marshal<T: EnvShape>(&self, value: &T) -> Result<String, EnvError> {
        log::debug!("marshalling `{}`", core::any::type_name::<T>());

        let mut out = String::new();
        self.walker()
            .marshal_value(value, Frame::root(&self.config), &mut out)?;
        Ok(out)
    }
}

impl<S: EnvSource> EnvParser<S> {
    /// Populates `target` from the source.
    ///
    /// Fields are written as they are parsed; on error the fields visited
    /// before the failure keep their new values.
    pub fn parse<T: EnvShape>(&self, target: &mut T) -> Result<(), EnvError> {
        log::debug!("parsing `{}`", core::any::type_name::<T>());

        self.walker().parse_value(target, Frame::root(&self.config))
    }
}

// -----------------------------------------------------------------------------
// Shortcuts

/// Populates `target` from the process environment with the default options.
///
/// # Examples
///
/// ```
/// use vc_envmap::EnvShape;
///
/// #[derive(EnvShape, Default)]
/// struct Model {
///     // Set by cargo when running tests.
///     #[env("CARGO_PKG_NAME")]
///     pub package: String,
///     #[env("-")]
///     pub skipped: i32,
/// }
///
/// let mut model = Model::default();
/// vc_envmap::parse(&mut model).unwrap();
/// assert_eq!(model.package, "vc_envmap");
/// ```
#[cfg(feature = "std")]
#[inline]
pub fn parse<T: EnvShape>(target: &mut T) -> Result<(), EnvError> {
    EnvParser::new(EnvConfig::default()).parse(target)
}

/// Renders `value` with the default options, see [`EnvParser::marshal`].
#[cfg(feature = "std")]
#[inline]
pub fn marshal<T: EnvShape>(value: &T) -> Result<String, EnvError> {
    EnvParser::new(EnvConfig::default()).marshal(value)
}

/// Populates `target` from `source` with the given options.
#[inline]
pub fn parse_with<S: EnvSource, T: EnvShape>(
    config: EnvConfig,
    source: S,
    target: &mut T,
) -> Result<(), EnvError> {
    EnvParser::with_source(config, source).parse(target)
}
