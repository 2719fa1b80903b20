use serde::{Deserialize, Serialize};

/// A caller-supplied character range to be visually distinguished.
///
/// Bounds are signed so that malformed input (negative start, negative
/// length, ranges past the end of the text) stays representable. The
/// membership test is total: positions outside the range simply never match.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub struct Highlight {
    pub start_index: i64,
    pub num_chars: i64,
}

impl Highlight {
    pub fn new(start_index: i64, num_chars: i64) -> Self {
        Self {
            start_index,
            num_chars,
        }
    }

    /// Build a highlight from an absolute selection.
    pub fn from_selection(start: usize, len: usize) -> Self {
        Self::new(
            i64::try_from(start).unwrap_or(i64::MAX),
            i64::try_from(len).unwrap_or(i64::MAX),
        )
    }

    /// Exclusive end of the range. A negative length contributes nothing.
    pub fn end_index(&self) -> i64 {
        self.start_index.saturating_add(self.num_chars.max(0))
    }

    /// Check if this highlight covers the given character index
    pub fn contains(&self, idx: usize) -> bool {
        let Ok(idx) = i64::try_from(idx) else {
            return false;
        };
        idx >= self.start_index && idx < self.end_index()
    }

    /// The covered range clipped to `[0, len)`, or `None` when nothing is covered.
    pub fn clamp_to(&self, len: usize) -> Option<(usize, usize)> {
        let len = i64::try_from(len).unwrap_or(i64::MAX);
        let start = self.start_index.clamp(0, len);
        let end = self.end_index().clamp(0, len);
        if start < end {
            // Both bounds are in [0, len], so they fit in usize.
            Some((start as usize, end as usize))
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains() {
        let h = Highlight::new(4, 3);
        assert!(!h.contains(3));
        assert!(h.contains(4));
        assert!(h.contains(6));
        assert!(!h.contains(7));
    }

    #[test]
    fn test_zero_and_negative_length_cover_nothing() {
        let empty = Highlight::new(2, 0);
        let negative = Highlight::new(5, -3);
        for idx in 0..10 {
            assert!(!empty.contains(idx));
            assert!(!negative.contains(idx));
        }
        assert_eq!(negative.clamp_to(10), None);
    }

    #[test]
    fn test_clamp_to_text() {
        assert_eq!(Highlight::new(-2, 5).clamp_to(10), Some((0, 3)));
        assert_eq!(Highlight::new(8, 5).clamp_to(10), Some((8, 10)));
        assert_eq!(Highlight::new(12, 5).clamp_to(10), None);
        assert_eq!(Highlight::new(i64::MAX, i64::MAX).clamp_to(10), None);
    }

    #[test]
    fn test_serde_field_names() {
        let h: Highlight = serde_json::from_str(r#"{"startIndex": 4, "numChars": 11}"#).unwrap();
        assert_eq!(h, Highlight::new(4, 11));
        let json = serde_json::to_string(&h).unwrap();
        assert_eq!(json, r#"{"startIndex":4,"numChars":11}"#);
    }
}
