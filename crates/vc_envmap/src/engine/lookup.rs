use alloc::borrow::ToOwned;
use alloc::string::String;

use super::plan::Frame;
use crate::EnvSource;
use crate::error::EnvError;

/// Resolves the text of the location at `key`.
///
/// In direct mode the frame's default is returned verbatim and the source is
/// never read. Otherwise an absent or empty value falls back to the default,
/// and a still-empty text fails unless `allow_empty` is set.
pub(crate) fn get_env_string<S: EnvSource + ?Sized>(
    source: &S,
    key: &str,
    frame: Frame<'_>,
    allow_empty: bool,
) -> Result<String, EnvError> {
    if frame.direct {
        return Ok(frame.default.to_owned());
    }

    let text = match source.lookup(key) {
        Some(text) if !text.is_empty() => {
            log::trace!("`{key}` found");
            text
        }
        _ => {
            if !frame.default.is_empty() {
                log::debug!("`{key}` unset, using default `{}`", frame.default);
            }
            frame.default.to_owned()
        }
    };

    if text.is_empty() && !allow_empty {
        return Err(EnvError::MissingValue {
            key: key.to_owned(),
        });
    }

    Ok(text)
}
