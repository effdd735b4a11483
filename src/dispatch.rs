//! Root-level fan-out of the subsequence search.
//!
//! Only the first letter choice is parallelised: one rayon task per distinct
//! starting letter, each exploring its subtree sequentially into a private
//! list. Task results are merged into a shared list under a mutex that is
//! held only for the append.

use std::time::Instant;

use parking_lot::Mutex;
use rayon::ThreadPool;

use crate::dictionary::Dictionary;
use crate::search::{self, CancelToken, SeenBytes};

/// Matched words and their count.
///
/// Word order is the order in which tasks merged their results, which varies
/// between runs. Each distinct word appears once.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchOutcome {
    pub words: Vec<String>,
    pub count: usize,
}

impl SearchOutcome {
    fn new(words: Vec<String>) -> Self {
        let count = words.len();
        Self { words, count }
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.iter().any(|w| w == word)
    }

    /// Same outcome with words in alphabetical order, for stable display.
    pub fn sorted(mut self) -> Self {
        self.words.sort_unstable();
        self
    }
}

/// Runs searches against a shared, read-only [`Dictionary`].
#[derive(Debug, Clone)]
pub struct Dispatcher<'a> {
    dict: &'a Dictionary,
    cancel: Option<CancelToken>,
}

impl<'a> Dispatcher<'a> {
    pub fn new(dict: &'a Dictionary) -> Self {
        Self { dict, cancel: None }
    }

    /// Abort outstanding recursion once `cancel` fires. Words found before
    /// that point are still returned.
    pub fn with_cancel(mut self, cancel: CancelToken) -> Self {
        self.cancel = Some(cancel);
        self
    }

    /// Run the search on a specific pool instead of rayon's global one.
    pub fn search_on(&self, pool: &ThreadPool, input: &str) -> SearchOutcome {
        pool.install(|| self.search(input))
    }

    /// Find every dictionary word spelled by some ordered subset of the
    /// letters of `input`.
    pub fn search(&self, input: &str) -> SearchOutcome {
        let letters = normalize(input);
        let span = tracing::debug_span!("search", input, letters = letters.len());
        let _entered = span.enter();

        if letters.is_empty() {
            return SearchOutcome::default();
        }

        let start = Instant::now();
        let target_depth = letters.len().min(self.dict.max_len());
        let results = Mutex::new(Vec::new());
        let mut tasks = 0usize;

        rayon::scope(|scope| {
            let mut seen = SeenBytes::new();
            for (j, &c) in letters.iter().enumerate() {
                if !seen.insert(c) {
                    continue;
                }

                let first = char::from(c).to_string();
                if self.dict.contains(&first) {
                    results.lock().push(first.clone());
                }
                if target_depth < 2 || letters.len() < 2 {
                    continue;
                }

                let rest = search::without(&letters, j);
                let results = &results;
                let dict = self.dict;
                let cancel = self.cancel.as_ref();
                let parent = span.clone();
                tasks += 1;

                scope.spawn(move |_| {
                    let _p = parent.enter();
                    let mut prefix = first;
                    let mut found = Vec::new();
                    search::extend_into(
                        dict,
                        &mut prefix,
                        &rest,
                        1,
                        target_depth,
                        cancel,
                        &mut found,
                    );
                    if !found.is_empty() {
                        results.lock().append(&mut found);
                    }
                });
            }
        });

        let outcome = SearchOutcome::new(results.into_inner());
        tracing::debug!(
            tasks,
            target_depth,
            count = outcome.count,
            elapsed_us = start.elapsed().as_micros() as u64,
            "search finished"
        );
        outcome
    }
}

/// ASCII-lowercase `input`, dropping any non-ASCII bytes.
fn normalize(input: &str) -> Vec<u8> {
    let letters: Vec<u8> = input
        .bytes()
        .filter(u8::is_ascii)
        .map(|b| b.to_ascii_lowercase())
        .collect();
    if letters.len() != input.len() {
        tracing::warn!(
            dropped = input.len() - letters.len(),
            "ignoring non-ASCII bytes in search input"
        );
    }
    letters
}
