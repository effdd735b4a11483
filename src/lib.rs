//! # Subword
//!
//! A multithreaded finder for dictionary words hidden in a string.
//!
//! Given some letters, the finder returns every dictionary word that can be
//! spelled by picking a subset of those letters in any order, using each
//! position at most once. The dictionary is indexed with a bitmap-assisted
//! line scanner, repeated letters are pruned per recursion level, and the
//! first letter choice fans out across rayon workers.

pub mod baseline;
pub mod config;
pub mod dictionary;
pub mod dispatch;
pub mod error;
pub mod progress;
pub mod scanner;
pub mod search;

pub use config::{SearchConfig, DEFAULT_DICTIONARY_PATH};
pub use dictionary::{BuildStats, Dictionary};
pub use dispatch::{Dispatcher, SearchOutcome};
pub use error::{Error, Result};
pub use scanner::{LineBitmap, ScanOptions};
pub use search::CancelToken;

/// Load the configured dictionary and search it for words in `input`.
///
/// Fails only if the dictionary cannot be read or the config is invalid; the
/// search never runs against a missing index.
pub fn find_words(config: &SearchConfig, input: &str) -> Result<SearchOutcome> {
    config.validate()?;
    let dict = Dictionary::load_with(
        &config.dictionary_path,
        config.effective_max_len(input),
        config.scan_options(),
    )?;
    let dispatcher = Dispatcher::new(&dict);
    Ok(match config.thread_pool()? {
        Some(pool) => dispatcher.search_on(&pool, input),
        None => dispatcher.search(input),
    })
}
