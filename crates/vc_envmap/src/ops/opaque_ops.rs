use alloc::string::String;

use crate::error::BoxError;

/// Interface of leaves converted through their own text form.
///
/// Implemented for `FromStr + Display` types with [`impl_env_opaque`] or
/// `#[derive(EnvShape)] #[env(opaque)]`.
///
/// [`impl_env_opaque`]: crate::impl_env_opaque
pub trait OpaqueShape {
    /// Returns the type name used in error messages.
    fn type_name(&self) -> &'static str;

    /// Replaces the value with the one parsed from `text`.
    fn assign_text(&mut self, text: &str) -> Result<(), BoxError>;

    fn render_text(&self) -> String;
}
