//! Char-indexed helpers over `&str`.
//!
//! All offsets in this crate count Unicode scalar values, not bytes.
//! [`Utf16Map`] translates to and from the UTF-16 code unit offsets that
//! JavaScript strings use.

use crate::model::{Highlight, Segment};

/// Number of chars in `text`.
pub fn char_len(text: &str) -> usize {
    text.chars().count()
}

/// Byte offset of the char at `idx`, or `text.len()` past the end.
fn byte_offset(text: &str, idx: usize) -> usize {
    text.char_indices()
        .nth(idx)
        .map(|(offset, _)| offset)
        .unwrap_or(text.len())
}

/// Slice `text` by char indices `[start, end)`, truncated at the end of the text.
pub fn char_slice(text: &str, start: usize, end: usize) -> &str {
    if end <= start {
        return "";
    }
    let from = byte_offset(text, start);
    let to = from + byte_offset(&text[from..], end - start);
    &text[from..to]
}

/// Char index to UTF-16 offset table for one text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Utf16Map {
    /// UTF-16 offset of each char, followed by the total length.
    units: Vec<usize>,
}

impl Utf16Map {
    pub fn new(text: &str) -> Self {
        let mut units = Vec::with_capacity(text.len() + 1);
        let mut at = 0;
        units.push(at);
        for ch in text.chars() {
            at += ch.len_utf16();
            units.push(at);
        }
        Self { units }
    }

    fn char_count(&self) -> usize {
        self.units.len() - 1
    }

    /// Length of the text in UTF-16 code units.
    pub fn utf16_len(&self) -> usize {
        self.units[self.char_count()]
    }

    /// UTF-16 offset of char index `idx`. Past the end, one unit per char.
    pub fn to_utf16(&self, idx: usize) -> usize {
        match self.units.get(idx) {
            Some(&unit) => unit,
            None => self.utf16_len() + (idx - self.char_count()),
        }
    }

    /// Char index of UTF-16 offset `unit`.
    ///
    /// An offset inside a surrogate pair maps to the char the pair encodes.
    /// Past the end, one char per unit.
    pub fn to_char(&self, unit: usize) -> usize {
        let total = self.utf16_len();
        if unit >= total {
            return self.char_count() + (unit - total);
        }
        self.units.partition_point(|&u| u <= unit) - 1
    }

    /// Convert a highlight given in UTF-16 units into char indices.
    ///
    /// Negative bounds stay as they are, so they keep covering nothing.
    pub fn highlight_from_utf16(&self, highlight: Highlight) -> Highlight {
        let to_char = |unit: i64| match usize::try_from(unit) {
            Ok(unit) => i64::try_from(self.to_char(unit)).unwrap_or(i64::MAX),
            Err(_) => unit,
        };
        let start = to_char(highlight.start_index);
        let end = to_char(highlight.end_index());
        Highlight::new(start, end.saturating_sub(start))
    }

    /// The same segment with bounds in UTF-16 units.
    pub fn segment_to_utf16(&self, segment: &Segment) -> Segment {
        Segment::new(
            self.to_utf16(segment.start),
            self.to_utf16(segment.end),
            segment.highlights.clone(),
        )
    }
}
