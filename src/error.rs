//! Errors raised while loading the site configuration.
//!
//! They never reach an HTTP client: the loaders log them and fall back to
//! defaults.

use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("site config root must be an object, found {0}")]
    NotAnObject(&'static str),
    #[error("invalid `{key}` section: {source}")]
    Section {
        key: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
