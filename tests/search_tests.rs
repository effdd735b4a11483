use subword::search::{extend, extend_cancellable, SeenBytes};
use subword::{CancelToken, Dictionary};

fn dict(words: &[&str], max_len: usize) -> Dictionary {
    Dictionary::from_words(words, max_len)
}

#[test]
fn test_seen_bytes() {
    let mut seen = SeenBytes::new();
    assert!(seen.is_empty());
    assert!(seen.insert(b'a'));
    assert!(!seen.insert(b'a'));
    assert!(seen.insert(0));
    assert!(seen.insert(255));
    assert!(seen.contains(b'a'));
    assert!(seen.contains(255));
    assert!(!seen.contains(b'b'));
    assert_eq!(seen.len(), 3);
}

#[test]
fn test_extend_finds_words_below_prefix() {
    let d = dict(&["cat", "ca", "ct", "c"], 3);
    // "c" itself is the caller's business, only extensions are reported
    let found = extend(&d, "c", b"at", 1, 3);
    assert_eq!(found, vec!["ca", "cat", "ct"]);
}

#[test]
fn test_extend_is_left_to_right() {
    let d = dict(&["ab", "ac", "abc", "acb"], 3);
    let found = extend(&d, "a", b"bc", 1, 3);
    assert_eq!(found, vec!["ab", "abc", "ac", "acb"]);
}

#[test]
fn test_extend_respects_target_depth() {
    let d = dict(&["ab", "abc"], 3);
    // Candidates may be two letters long but no recursion past that
    let found = extend(&d, "a", b"bc", 1, 2);
    assert_eq!(found, vec!["ab"]);
}

#[test]
fn test_repeated_letters_tried_once_per_level() {
    let d = dict(&["ba", "baa", "bab"], 3);
    let found = extend(&d, "b", b"aa", 1, 3);
    assert_eq!(found, vec!["ba", "baa"]);
}

#[test]
fn test_empty_remaining() {
    let d = dict(&["a"], 1);
    assert!(extend(&d, "a", b"", 1, 1).is_empty());
}

#[test]
fn test_cancelled_search_returns_nothing() {
    let d = dict(&["ab", "abc"], 3);
    let cancel = CancelToken::new();
    assert!(!cancel.is_cancelled());
    cancel.cancel();
    assert!(cancel.is_cancelled());
    assert!(extend_cancellable(&d, "a", b"bc", 1, 3, &cancel).is_empty());
}

#[test]
fn test_uncancelled_matches_plain_extend() {
    let d = dict(&["ab", "abc", "ac"], 3);
    let cancel = CancelToken::new();
    assert_eq!(
        extend_cancellable(&d, "a", b"bc", 1, 3, &cancel),
        extend(&d, "a", b"bc", 1, 3)
    );
}
