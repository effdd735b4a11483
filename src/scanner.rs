//! Bitmap-indexed line scanner.
//!
//! Scanning is split into two passes. The first pass walks the raw buffer once
//! and records every line terminator as a set bit in a [`LineBitmap`]. The
//! second pass replays only the set bits (lowest-set-bit extraction with a
//! de Bruijn lookup) to recover line ranges, so the byte buffer is never
//! searched for separators twice. Length filtering happens on the ranges,
//! before any line content is copied.

use std::ops::Range;

/// Line terminator recognised by the scanner.
pub const TERMINATOR: u8 = b'\n';

/// Stripped from the end of a line, so CRLF sources index the same words.
pub const CARRIAGE_RETURN: u8 = b'\r';

const DEBRUIJN_64: u64 = 0x03f7_9d71_b4cb_0a89;

const DEBRUIJN_INDEX: [u8; 64] = [
    0, 1, 48, 2, 57, 49, 28, 3, //
    61, 58, 50, 42, 38, 29, 17, 4, //
    62, 55, 59, 36, 53, 51, 43, 22, //
    45, 39, 33, 30, 24, 18, 12, 5, //
    63, 47, 56, 27, 60, 41, 37, 16, //
    54, 35, 52, 21, 44, 32, 23, 11, //
    46, 26, 40, 15, 34, 20, 31, 10, //
    25, 14, 19, 9, 13, 8, 7, 6, //
];

/// Position of the single set bit in `lsb`.
#[inline]
fn bit_index(lsb: u64) -> usize {
    debug_assert_eq!(lsb.count_ones(), 1);
    DEBRUIJN_INDEX[(lsb.wrapping_mul(DEBRUIJN_64) >> 58) as usize] as usize
}

/// Options controlling how line boundaries are interpreted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScanOptions {
    /// Also return a final line that has no terminator.
    ///
    /// Off by default: an unterminated tail is silently dropped.
    pub keep_unterminated: bool,
}

/// One bit per byte offset of a buffer; bit `i` is set iff `buffer[i]` is a
/// line terminator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineBitmap {
    words: Vec<u64>,
    len: usize,
}

impl LineBitmap {
    /// Build the bitmap with a single left-to-right pass over `buffer`.
    pub fn from_buffer(buffer: &[u8]) -> Self {
        let mut words = vec![0u64; buffer.len().div_ceil(64)];

        let mut i = 0;
        while i < buffer.len() {
            let Some(pos) = memchr::memchr(TERMINATOR, &buffer[i..]) else {
                break;
            };
            i += pos;
            words[i / 64] |= 1 << (i % 64);
            i += 1;
        }

        Self {
            words,
            len: buffer.len(),
        }
    }

    /// Length in bytes of the buffer this bitmap was built from.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn is_set(&self, offset: usize) -> bool {
        offset < self.len && self.words[offset / 64] & (1 << (offset % 64)) != 0
    }

    /// Number of terminators recorded.
    pub fn count(&self) -> usize {
        self.words.iter().map(|w| w.count_ones() as usize).sum()
    }

    /// Offsets of all set bits, ascending.
    pub fn iter(&self) -> SetBits<'_> {
        SetBits {
            words: &self.words,
            word_idx: 0,
            current: self.words.first().copied().unwrap_or(0),
        }
    }
}

/// Iterator over the set bits of a [`LineBitmap`].
pub struct SetBits<'a> {
    words: &'a [u64],
    word_idx: usize,
    current: u64,
}

impl Iterator for SetBits<'_> {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        while self.current == 0 {
            self.word_idx += 1;
            self.current = *self.words.get(self.word_idx)?;
        }
        let lsb = self.current & self.current.wrapping_neg();
        self.current ^= lsb;
        Some(self.word_idx * 64 + bit_index(lsb))
    }
}

/// Line ranges of `buffer`, terminators (and a `\r` before them) excluded,
/// skipping lines longer than `max_len` bytes. A trailing line without a
/// terminator is dropped.
pub fn scan(buffer: &[u8], max_len: usize) -> Vec<Range<usize>> {
    scan_with(buffer, max_len, ScanOptions::default())
}

/// Like [`scan`], with explicit [`ScanOptions`].
pub fn scan_with(buffer: &[u8], max_len: usize, options: ScanOptions) -> Vec<Range<usize>> {
    line_ranges(buffer, &LineBitmap::from_buffer(buffer), max_len, options)
}

/// Replay a bitmap built from `buffer` into line ranges no longer than
/// `max_len`.
pub fn line_ranges(
    buffer: &[u8],
    bitmap: &LineBitmap,
    max_len: usize,
    options: ScanOptions,
) -> Vec<Range<usize>> {
    debug_assert_eq!(buffer.len(), bitmap.len());
    let mut lines = Vec::with_capacity(bitmap.count() + 1);

    let mut offset = 0;
    for index in bitmap.iter() {
        let line = trim_cr(buffer, offset..index);
        if line.len() <= max_len {
            lines.push(line);
        }
        offset = index + 1;
    }

    if options.keep_unterminated && offset < buffer.len() {
        let line = trim_cr(buffer, offset..buffer.len());
        if line.len() <= max_len {
            lines.push(line);
        }
    }

    lines
}

fn trim_cr(buffer: &[u8], mut line: Range<usize>) -> Range<usize> {
    if line.end > line.start && buffer[line.end - 1] == CARRIAGE_RETURN {
        line.end -= 1;
    }
    line
}

/// Whether `buffer` ends with a line that has no terminator.
pub fn has_unterminated_tail(buffer: &[u8]) -> bool {
    buffer.last().is_some_and(|&b| b != TERMINATOR)
}
