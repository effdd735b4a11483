use std::io::Write;

use subword::{Dictionary, Error, ScanOptions};

#[test]
fn test_lowercases_entries() {
    let dict = Dictionary::from_bytes(b"Cat\nACT\ntac\n", 3);
    assert_eq!(dict.len(), 3);
    assert!(dict.contains("cat"));
    assert!(dict.contains("act"));
    assert!(dict.contains("tac"));
    assert!(!dict.contains("Cat"));
}

#[test]
fn test_length_filter() {
    let dict = Dictionary::from_bytes(b"a\nat\ncat\ncats\nscatter\n", 3);
    assert!(dict.contains("a"));
    assert!(dict.contains("at"));
    assert!(dict.contains("cat"));
    assert!(!dict.contains("cats"));
    assert!(!dict.contains("scatter"));
    assert!(dict.iter().all(|w| w.len() <= dict.max_len()));

    let stats = dict.stats();
    assert_eq!(stats.lines, 5);
    assert_eq!(stats.kept, 3);
    assert_eq!(stats.too_long, 2);
}

#[test]
fn test_index_matches_lines() {
    let source = "Apple\nbanana\nKiwi\nfig\nDurian\nfig\n";
    let dict = Dictionary::from_bytes(source.as_bytes(), 5);

    let mut expected: Vec<String> = source
        .lines()
        .filter(|l| l.len() <= 5)
        .map(|l| l.to_ascii_lowercase())
        .collect();
    expected.sort();
    expected.dedup();

    let mut actual: Vec<&str> = dict.iter().collect();
    actual.sort();
    assert_eq!(actual, expected);
}

#[test]
fn test_unterminated_tail() {
    let dropped = Dictionary::from_bytes(b"cat\ndog", 3);
    assert!(dropped.contains("cat"));
    assert!(!dropped.contains("dog"));

    let kept = Dictionary::with_options(
        b"cat\ndog",
        3,
        ScanOptions {
            keep_unterminated: true,
        },
    );
    assert!(kept.contains("dog"));
    assert_eq!(kept.stats().lines, 2);
}

#[test]
fn test_empty_and_invalid_lines() {
    let dict = Dictionary::from_bytes(b"\nok\n\xff\xfe\n\n", 5);
    assert_eq!(dict.len(), 1);
    assert!(dict.contains("ok"));
    assert!(!dict.contains(""));
    let stats = dict.stats();
    assert_eq!(stats.empty, 2);
    assert_eq!(stats.invalid_utf8, 1);
}

#[test]
fn test_from_words() {
    let dict = Dictionary::from_words(["Cat", "", "elephant", "at"], 3);
    assert_eq!(dict.len(), 2);
    assert!(dict.contains("cat"));
    assert!(dict.contains("at"));
    assert_eq!(dict.stats().too_long, 1);
}

#[test]
fn test_load_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(b"Cat\nact\nlonger\n").unwrap();

    let dict = Dictionary::load(file.path(), 3).unwrap();
    assert_eq!(dict.len(), 2);
    assert!(dict.contains("cat"));
    assert_eq!(dict.max_len(), 3);
}

#[test]
fn test_load_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("no-such-dictionary");

    let err = Dictionary::load(&path, 5).unwrap_err();
    match err {
        Error::DictionarySourceUnavailable { path: p, source } => {
            assert_eq!(p, path);
            assert_eq!(source.kind(), std::io::ErrorKind::NotFound);
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_crlf_dictionary() {
    let dict = Dictionary::from_bytes(b"Cat\r\nact\r\ntac\n", 3);
    assert_eq!(dict.len(), 3);
    assert!(dict.contains("cat"));
    assert!(dict.contains("act"));
    assert!(!dict.contains("cat\r"));
    assert_eq!(dict.stats().crlf, 2);
    assert_eq!(dict.stats().too_long, 0);
}

#[test]
fn test_large_dictionary_membership() {
    let source: String = (0..50_000).map(|i| format!("W{:x}\n", i)).collect();
    let dict = Dictionary::from_bytes(source.as_bytes(), 5);

    // "w" plus up to four hex digits, all within max_len
    assert_eq!(dict.len(), 50_000);
    assert!(dict.contains("w0"));
    assert!(dict.contains("wc34f"));
    assert!(!dict.contains("W0"));
    assert!(!dict.contains("wc350"));
}
