use core::net::{IpAddr, Ipv4Addr, Ipv6Addr, SocketAddr};

/// Implements [`EnvShape`] as an opaque leaf for types with `FromStr` and `Display`.
///
/// The `FromStr` error must implement `core::error::Error + Send + Sync`.
///
/// # Examples
///
/// ```
/// use core::fmt;
/// use core::str::FromStr;
///
/// #[derive(Debug, PartialEq)]
/// struct Level(u8);
///
/// impl FromStr for Level {
///     type Err = core::num::ParseIntError;
///     fn from_str(s: &str) -> Result<Self, Self::Err> {
///         s.strip_prefix('L').unwrap_or(s).parse().map(Level)
///     }
/// }
///
/// impl fmt::Display for Level {
///     fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
///         write!(f, "L{}", self.0)
///     }
/// }
///
/// vc_envmap::impl_env_opaque!(Level);
///
/// use vc_envmap::{EnvShape, info::ShapeKind};
/// assert_eq!(Level(3).shape_kind(), ShapeKind::Opaque);
/// ```
///
/// [`EnvShape`]: crate::EnvShape
#[macro_export]
macro_rules! impl_env_opaque {
    ($($ty:ty),+ $(,)?) => {$(
        impl $crate::EnvShape for $ty {
            #[inline]
            fn shape_ref(&self) -> $crate::ops::ShapeRef<'_> {
                $crate::ops::ShapeRef::Opaque(self)
            }

            #[inline]
            fn shape_mut(&mut self) -> $crate::ops::ShapeMut<'_> {
                $crate::ops::ShapeMut::Opaque(self)
            }
        }

        impl $crate::ops::OpaqueShape for $ty {
            #[inline]
            fn type_name(&self) -> &'static str {
                ::core::any::type_name::<$ty>()
            }

            fn assign_text(&mut self, text: &str) -> ::core::result::Result<(), $crate::BoxError> {
                *self = <$ty as ::core::str::FromStr>::from_str(text)
                    .map_err($crate::BoxError::from)?;
                ::core::result::Result::Ok(())
            }

            fn render_text(&self) -> $crate::__macro_exports::String {
                $crate::__macro_exports::ToString::to_string(self)
            }
        }
    )+};
}

crate::impl_env_opaque!(char, IpAddr, Ipv4Addr, Ipv6Addr, SocketAddr);
