//! Property-based tests for segmentation and selection mapping.
//!
//! Uses proptest to verify invariants that must hold across all inputs,
//! including malformed highlight bounds.

use highlighter_core::{
    locate, segment, segment_at, Highlight, RawEndpoint, Segmenter, SelectionMarker,
};
use proptest::prelude::*;

// ============================================================================
// Strategies
// ============================================================================

/// Short texts, mixing ASCII and multi-byte chars.
fn text() -> impl Strategy<Value = String> {
    prop::collection::vec(
        prop::sample::select(vec!['a', 'b', ' ', 'é', '中', '\n']),
        0..60,
    )
    .prop_map(|chars| chars.into_iter().collect())
}

/// Highlights that may start before the text, run past it, or have
/// non-positive length.
fn highlights() -> impl Strategy<Value = Vec<Highlight>> {
    prop::collection::vec(
        (-5i64..70, -3i64..30).prop_map(|(start, len)| Highlight::new(start, len)),
        0..12,
    )
}

fn char_count(s: &str) -> usize {
    s.chars().count()
}

// ============================================================================
// Segmentation Properties
// ============================================================================

proptest! {
    /// Segments are contiguous, ordered, and cover [0, len) exactly once.
    #[test]
    fn segments_cover_text(s in text(), hs in highlights()) {
        let segments = segment(&s, &hs);
        let len = char_count(&s);

        prop_assert!(!segments.is_empty());
        prop_assert_eq!(segments[0].start, 0);
        prop_assert_eq!(segments.last().unwrap().end, len);
        for pair in segments.windows(2) {
            prop_assert_eq!(pair[0].end, pair[1].start);
        }
        if len > 0 {
            for seg in &segments {
                prop_assert!(seg.start < seg.end, "empty segment {:?}", seg);
            }
        }
    }

    /// A position's segment lists exactly the highlights covering it.
    #[test]
    fn membership_is_exact(s in text(), hs in highlights()) {
        let segments = segment(&s, &hs);
        for idx in 0..char_count(&s) {
            let seg = &segments[segment_at(&segments, idx).unwrap()];
            prop_assert!(seg.contains(idx));
            let expected: Vec<usize> = hs
                .iter()
                .enumerate()
                .filter(|(_, h)| {
                    let idx = idx as i64;
                    h.start_index <= idx && idx < h.start_index + h.num_chars
                })
                .map(|(i, _)| i)
                .collect();
            prop_assert_eq!(&seg.highlights, &expected);
        }
    }

    /// Neighbouring segments never share a membership set.
    #[test]
    fn segments_are_maximal(s in text(), hs in highlights()) {
        let segments = segment(&s, &hs);
        for pair in segments.windows(2) {
            prop_assert_ne!(&pair[0].highlights, &pair[1].highlights);
        }
    }

    /// The boundary sweep agrees with the per-character scan.
    #[test]
    fn sweep_matches_scan(s in text(), hs in highlights()) {
        let mut segmenter = Segmenter::new();
        prop_assert_eq!(segmenter.segment(&s, &hs), segment(&s, &hs));
    }

    /// Segmenting leaves its inputs alone and is repeatable.
    #[test]
    fn segmentation_is_pure(s in text(), hs in highlights()) {
        let (text_before, highlights_before) = (s.clone(), hs.clone());
        let first = segment(&s, &hs);
        let second = segment(&s, &hs);
        prop_assert_eq!(&first, &second);
        prop_assert_eq!(&s, &text_before);
        prop_assert_eq!(&hs, &highlights_before);

        let joined: String = first.iter().map(|seg| seg.text(&s)).collect();
        prop_assert_eq!(joined, s);
    }
}

// ============================================================================
// Selection Properties
// ============================================================================

proptest! {
    /// Segment-relative end-points resolve to the absolute selection, in
    /// either direction.
    #[test]
    fn locate_recovers_absolute_offsets(
        s in text(),
        hs in highlights(),
        a in 0usize..64,
        b in 0usize..64,
    ) {
        let len = char_count(&s);
        let (a, b) = (a.min(len), b.min(len));
        let segments = segment(&s, &hs);

        let anchor = RawEndpoint::at_offset(&segments, a).unwrap();
        let focus = RawEndpoint::at_offset(&segments, b).unwrap();
        let expected = SelectionMarker::new(a.min(b), a.max(b) - a.min(b));

        prop_assert_eq!(locate(&anchor, &focus, &segments), Some(expected));
        prop_assert_eq!(locate(&focus, &anchor, &segments), Some(expected));
    }
}
