//! A minimal reader for `.env` files.
//!
//! ```text
//! # comment
//! export DB_DRIVER=postgres
//! DB_DSN="postgres://localhost:5432/postgres"
//! ```

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use thiserror::Error;
use vc_env::EnvSource;

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum EnvFileError {
    #[error("cannot read `{}`", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("line {line}: expected `KEY=VALUE`, got `{content}`")]
    Malformed { line: usize, content: String },
}

/// Parses env-file text into key/value pairs. Later entries override earlier ones.
pub fn parse_env_file(text: &str) -> Result<BTreeMap<String, String>, EnvFileError> {
    let mut entries = BTreeMap::new();

    for (index, raw) in text.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let line = line.strip_prefix("export ").unwrap_or(line);
        let Some((key, value)) = line.split_once('=') else {
            return Err(EnvFileError::Malformed {
                line: index + 1,
                content: raw.to_owned(),
            });
        };

        let key = key.trim();
        if key.is_empty() {
            return Err(EnvFileError::Malformed {
                line: index + 1,
                content: raw.to_owned(),
            });
        }

        entries.insert(key.to_owned(), unquote(value.trim()).to_owned());
    }

    Ok(entries)
}

/// Reads and parses the env file at `path`.
pub fn load(path: &Path) -> Result<BTreeMap<String, String>, EnvFileError> {
    let text = std::fs::read_to_string(path).map_err(|source| EnvFileError::Io {
        path: path.to_owned(),
        source,
    })?;

    let entries = parse_env_file(&text)?;
    log::info!("loaded {} entries from `{}`", entries.len(), path.display());
    Ok(entries)
}

fn unquote(value: &str) -> &str {
    for quote in ['"', '\''] {
        if let Some(inner) = value
            .strip_prefix(quote)
            .and_then(|rest| rest.strip_suffix(quote))
        {
            return inner;
        }
    }
    value
}

// -----------------------------------------------------------------------------
// Layered

/// Env-file entries first, `fallback` for every key the file does not set.
#[derive(Debug, Clone)]
pub struct Layered<S> {
    entries: BTreeMap<String, String>,
    fallback: S,
}

impl<S> Layered<S> {
    pub fn new(entries: BTreeMap<String, String>, fallback: S) -> Self {
        Self { entries, fallback }
    }
}

impl<S: EnvSource> EnvSource for Layered<S> {
    fn lookup(&self, key: &str) -> Option<String> {
        match self.entries.get(key) {
            Some(value) => {
                log::trace!("`{key}` read from env file");
                Some(value.clone())
            }
            None => self.fallback.lookup(key),
        }
    }
}
