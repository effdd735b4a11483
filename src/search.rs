//! Recursive subsequence-permutation search.
//!
//! Each level of the recursion picks one more position from the remaining
//! letters and appends it to the prefix. A letter value that repeats within
//! the remaining letters is tried only once per level, so every distinct
//! string is reached through exactly one path.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::dictionary::Dictionary;

/// Set of byte values, one bit per value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeenBytes([u64; 4]);

impl SeenBytes {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark `byte` as seen. Returns `false` if it was already present.
    #[inline]
    pub fn insert(&mut self, byte: u8) -> bool {
        let (word, bit) = ((byte >> 6) as usize, 1u64 << (byte & 63));
        let fresh = self.0[word] & bit == 0;
        self.0[word] |= bit;
        fresh
    }

    #[inline]
    pub fn contains(&self, byte: u8) -> bool {
        self.0[(byte >> 6) as usize] & (1u64 << (byte & 63)) != 0
    }

    pub fn len(&self) -> usize {
        self.0.iter().map(|w| w.count_ones() as usize).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.0.iter().all(|&w| w == 0)
    }
}

/// Cooperative cancellation flag shared between a caller and search tasks.
#[derive(Debug, Clone, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

/// Extend `prefix` by every distinct letter of `remaining`, recursively,
/// collecting each candidate that is a dictionary word.
///
/// `depth` is the length of `prefix`; candidates are at most `target_depth`
/// letters long once recursion starts. `remaining` must be ASCII and
/// lowercase. Results come back in a deterministic left-to-right order.
pub fn extend(
    dict: &Dictionary,
    prefix: &str,
    remaining: &[u8],
    depth: usize,
    target_depth: usize,
) -> Vec<String> {
    let mut out = Vec::new();
    let mut prefix = prefix.to_owned();
    extend_into(dict, &mut prefix, remaining, depth, target_depth, None, &mut out);
    out
}

/// Like [`extend`], returning early with partial results once `cancel` fires.
pub fn extend_cancellable(
    dict: &Dictionary,
    prefix: &str,
    remaining: &[u8],
    depth: usize,
    target_depth: usize,
    cancel: &CancelToken,
) -> Vec<String> {
    let mut out = Vec::new();
    let mut prefix = prefix.to_owned();
    extend_into(
        dict,
        &mut prefix,
        remaining,
        depth,
        target_depth,
        Some(cancel),
        &mut out,
    );
    out
}

pub(crate) fn extend_into(
    dict: &Dictionary,
    prefix: &mut String,
    remaining: &[u8],
    depth: usize,
    target_depth: usize,
    cancel: Option<&CancelToken>,
    out: &mut Vec<String>,
) {
    if cancel.is_some_and(CancelToken::is_cancelled) {
        return;
    }

    let mut seen = SeenBytes::new();
    for (j, &c) in remaining.iter().enumerate() {
        if !seen.insert(c) {
            continue;
        }

        prefix.push(char::from(c));
        if dict.contains(prefix) {
            out.push(prefix.clone());
        }
        if depth + 1 < target_depth && remaining.len() > 1 {
            let rest = without(remaining, j);
            extend_into(dict, prefix, &rest, depth + 1, target_depth, cancel, out);
        }
        prefix.pop();
    }
}

/// Copy of `letters` with position `index` removed.
pub(crate) fn without(letters: &[u8], index: usize) -> Vec<u8> {
    let mut rest = Vec::with_capacity(letters.len().saturating_sub(1));
    rest.extend_from_slice(&letters[..index]);
    rest.extend_from_slice(&letters[index + 1..]);
    rest
}
