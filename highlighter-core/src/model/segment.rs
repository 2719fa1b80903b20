use serde::{Deserialize, Serialize};

use crate::text::char_slice;

/// A maximal run of text whose characters share the same highlight membership.
///
/// `end` is exclusive. `highlights` holds the indices (into the caller's
/// highlight list) covering every character of the run, ascending.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Segment {
    pub start: usize,
    pub end: usize,
    pub highlights: Vec<usize>,
}

impl Segment {
    pub fn new(start: usize, end: usize, highlights: Vec<usize>) -> Self {
        Self {
            start,
            end,
            highlights,
        }
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Only true for the single segment of an empty text.
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Whether any highlight covers this segment (drives the class name).
    pub fn is_highlighted(&self) -> bool {
        !self.highlights.is_empty()
    }

    /// Check if this segment contains the given offset
    pub fn contains(&self, offset: usize) -> bool {
        offset >= self.start && offset < self.end
    }

    /// The slice of `text` this segment covers.
    pub fn text<'a>(&self, text: &'a str) -> &'a str {
        char_slice(text, self.start, self.end)
    }
}

/// Index of the segment containing `offset`.
///
/// An offset equal to the end of the text resolves to the last segment, so a
/// selection boundary placed after the final character still has a home.
pub fn segment_at(segments: &[Segment], offset: usize) -> Option<usize> {
    let last = segments.len().checked_sub(1)?;
    if offset >= segments[last].end {
        return (offset == segments[last].end).then_some(last);
    }
    let idx = segments.partition_point(|s| s.start <= offset);
    idx.checked_sub(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<Segment> {
        vec![
            Segment::new(0, 4, vec![]),
            Segment::new(4, 7, vec![0]),
            Segment::new(7, 11, vec![]),
        ]
    }

    #[test]
    fn test_segment_text() {
        let text = "foo bar baz";
        let segments = sample();
        let parts: Vec<&str> = segments.iter().map(|s| s.text(text)).collect();
        assert_eq!(parts, vec!["foo ", "bar", " baz"]);
        assert!(segments[1].is_highlighted());
        assert!(!segments[0].is_highlighted());
    }

    #[test]
    fn test_segment_at() {
        let segments = sample();
        assert_eq!(segment_at(&segments, 0), Some(0));
        assert_eq!(segment_at(&segments, 3), Some(0));
        assert_eq!(segment_at(&segments, 4), Some(1));
        assert_eq!(segment_at(&segments, 10), Some(2));
        assert_eq!(segment_at(&segments, 11), Some(2));
        assert_eq!(segment_at(&segments, 12), None);
        assert_eq!(segment_at(&[], 0), None);
    }

    #[test]
    fn test_segment_at_empty_text() {
        let segments = vec![Segment::new(0, 0, vec![])];
        assert_eq!(segment_at(&segments, 0), Some(0));
        assert_eq!(segment_at(&segments, 1), None);
    }
}
