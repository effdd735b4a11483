//! Tunables for a single search run.

use std::path::PathBuf;

use rayon::{ThreadPool, ThreadPoolBuilder};
use tracing_subscriber::EnvFilter;

use crate::error::{Error, Result};
use crate::scanner::ScanOptions;

/// Dictionary used when none is given.
pub const DEFAULT_DICTIONARY_PATH: &str = "/usr/share/dict/words";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchConfig {
    pub dictionary_path: PathBuf,
    /// Longest word accepted; `None` means the length of the search input.
    pub max_len: Option<usize>,
    /// Worker threads; `None` uses rayon's default.
    pub threads: Option<usize>,
    pub keep_unterminated: bool,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            dictionary_path: PathBuf::from(DEFAULT_DICTIONARY_PATH),
            max_len: None,
            threads: None,
            keep_unterminated: false,
        }
    }
}

impl SearchConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_dictionary_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.dictionary_path = path.into();
        self
    }

    pub fn with_max_len(mut self, max_len: usize) -> Self {
        self.max_len = Some(max_len);
        self
    }

    pub fn with_threads(mut self, threads: usize) -> Self {
        self.threads = Some(threads);
        self
    }

    pub fn with_keep_unterminated(mut self, keep: bool) -> Self {
        self.keep_unterminated = keep;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.max_len == Some(0) {
            return Err(Error::InvalidConfig("max_len must be at least 1".into()));
        }
        if self.threads == Some(0) {
            return Err(Error::InvalidConfig("threads must be at least 1".into()));
        }
        Ok(())
    }

    /// Maximum word length for `input`: the configured value, or the input's
    /// length.
    pub fn effective_max_len(&self, input: &str) -> usize {
        self.max_len.unwrap_or(input.len())
    }

    pub fn scan_options(&self) -> ScanOptions {
        ScanOptions {
            keep_unterminated: self.keep_unterminated,
        }
    }

    /// Build a dedicated pool when a thread count is configured.
    pub fn thread_pool(&self) -> Result<Option<ThreadPool>> {
        let Some(threads) = self.threads else {
            return Ok(None);
        };
        ThreadPoolBuilder::new()
            .num_threads(threads)
            .thread_name(|i| format!("subword-{i}"))
            .build()
            .map(Some)
            .map_err(|e| Error::ThreadPool(e.to_string()))
    }
}

/// Log filter for the binary.
///
/// A valid `rust_log` directive (usually the `RUST_LOG` variable) wins;
/// otherwise the level is `debug` when `verbose` is set and `info` if not.
pub fn log_filter(verbose: bool, rust_log: Option<&str>) -> EnvFilter {
    let fallback = if verbose { "debug" } else { "info" };
    rust_log
        .filter(|directives| !directives.trim().is_empty())
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .unwrap_or_else(|| EnvFilter::new(fallback))
}
