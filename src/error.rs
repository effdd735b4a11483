//! Error types for dictionary loading and search setup.
//!
//! The search itself cannot fail; every error here happens before the first
//! candidate is tested.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for subword operations.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    /// The dictionary could not be read. No partial dictionary is ever used.
    #[error("dictionary source unavailable: {}: {source}", path.display())]
    DictionarySourceUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// The worker pool could not be built.
    #[error("thread pool error: {0}")]
    ThreadPool(String),
}
