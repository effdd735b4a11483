//! Dictionary index: a read-only membership set of lowercase words.

use std::path::Path;

use rustc_hash::FxHashSet;

use crate::error::{Error, Result};
use crate::scanner::{self, LineBitmap, ScanOptions};

/// Counters collected while building a [`Dictionary`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BuildStats {
    /// Lines found in the source, including a kept unterminated tail.
    pub lines: usize,
    /// Lines that made it into the index (before duplicate folding).
    pub kept: usize,
    pub too_long: usize,
    pub empty: usize,
    pub invalid_utf8: usize,
    /// Indexed lines that ended in `\r\n`; the `\r` is not part of the word.
    pub crlf: usize,
}

/// Set of lowercase words no longer than `max_len` bytes.
///
/// Built once, never mutated afterwards, and safe to share across threads
/// without locking. Lookups are exact: callers query with lowercase strings.
/// Every candidate prefix of a search is hashed here, so the set uses Fx
/// hashing rather than SipHash.
#[derive(Debug, Clone)]
pub struct Dictionary {
    words: FxHashSet<String>,
    max_len: usize,
    stats: BuildStats,
}

impl Dictionary {
    /// Read and index the newline-delimited file at `path`.
    ///
    /// A read failure aborts the build; no partial dictionary is returned.
    pub fn load(path: impl AsRef<Path>, max_len: usize) -> Result<Self> {
        Self::load_with(path, max_len, ScanOptions::default())
    }

    pub fn load_with(path: impl AsRef<Path>, max_len: usize, options: ScanOptions) -> Result<Self> {
        let path = path.as_ref();
        let buffer = std::fs::read(path).map_err(|source| Error::DictionarySourceUnavailable {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self::with_options(&buffer, max_len, options))
    }

    /// Index an in-memory newline-delimited buffer.
    pub fn from_bytes(buffer: &[u8], max_len: usize) -> Self {
        Self::with_options(buffer, max_len, ScanOptions::default())
    }

    pub fn with_options(buffer: &[u8], max_len: usize, options: ScanOptions) -> Self {
        let bitmap = LineBitmap::from_buffer(buffer);
        let ranges = scanner::line_ranges(buffer, &bitmap, max_len, options);
        let mut lines = bitmap.count();
        if options.keep_unterminated && scanner::has_unterminated_tail(buffer) {
            lines += 1;
        }

        let mut stats = BuildStats {
            lines,
            too_long: lines.saturating_sub(ranges.len()),
            ..BuildStats::default()
        };
        let mut words = FxHashSet::with_capacity_and_hasher(ranges.len(), Default::default());

        for range in ranges {
            if buffer.get(range.end) == Some(&scanner::CARRIAGE_RETURN) {
                stats.crlf += 1;
            }
            let line = &buffer[range];
            if line.is_empty() {
                stats.empty += 1;
                continue;
            }
            match String::from_utf8(line.to_ascii_lowercase()) {
                Ok(word) => {
                    words.insert(word);
                    stats.kept += 1;
                }
                Err(_) => stats.invalid_utf8 += 1,
            }
        }

        tracing::debug!(
            lines = stats.lines,
            kept = stats.kept,
            unique = words.len(),
            too_long = stats.too_long,
            invalid_utf8 = stats.invalid_utf8,
            crlf = stats.crlf,
            max_len,
            "dictionary built"
        );

        Self {
            words,
            max_len,
            stats,
        }
    }

    /// Build from already-split words, applying the same folding and length
    /// filter as the scanner path.
    pub fn from_words<I, S>(words: I, max_len: usize) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut stats = BuildStats::default();
        let mut set = FxHashSet::default();
        for word in words {
            let word = word.as_ref();
            stats.lines += 1;
            if word.is_empty() {
                stats.empty += 1;
            } else if word.len() > max_len {
                stats.too_long += 1;
            } else {
                set.insert(word.to_ascii_lowercase());
                stats.kept += 1;
            }
        }
        Self {
            words: set,
            max_len,
            stats,
        }
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    /// Number of distinct words.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Longest word length (in bytes) the index may contain.
    pub fn max_len(&self) -> usize {
        self.max_len
    }

    pub fn stats(&self) -> BuildStats {
        self.stats
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }
}
