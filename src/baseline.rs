//! Brute-force reference counter.
//!
//! Enumerates every ordered selection of positions of the input, with no
//! per-level deduplication and no parallelism, collects the distinct strings,
//! and keeps those found in the dictionary. Exponentially slower than
//! [`crate::Dispatcher`]; useful as a correctness reference on short inputs.

use std::collections::HashSet;

use crate::dictionary::Dictionary;

/// Every distinct string formed by an ordered selection of 1..=`max_len`
/// positions of `letters`.
pub fn permutations(letters: &str, max_len: usize) -> HashSet<String> {
    let letters: Vec<char> = letters.chars().collect();
    let mut combos = HashSet::new();
    let mut prefix = String::new();
    permute(&mut prefix, &letters, max_len.min(letters.len()), &mut combos);
    combos
}

fn permute(prefix: &mut String, rest: &[char], max_len: usize, combos: &mut HashSet<String>) {
    if !prefix.is_empty() {
        combos.insert(prefix.clone());
    }
    if prefix.chars().count() == max_len {
        return;
    }
    for i in 0..rest.len() {
        let mut remaining = rest.to_vec();
        let c = remaining.remove(i);
        prefix.push(c);
        permute(prefix, &remaining, max_len, combos);
        prefix.pop();
    }
}

/// Dictionary words among [`permutations`] of the ASCII-lowercased input.
pub fn matching_words(dict: &Dictionary, input: &str) -> HashSet<String> {
    let input = input.to_ascii_lowercase();
    permutations(&input, dict.max_len())
        .into_iter()
        .filter(|w| dict.contains(w))
        .collect()
}

/// Number of distinct dictionary words reachable from `input`.
pub fn count(dict: &Dictionary, input: &str) -> usize {
    matching_words(dict, input).len()
}
