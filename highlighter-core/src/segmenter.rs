//! Split text into segments of uniform highlight membership.
//!
//! A segment is a maximal run of characters covered by exactly the same set of
//! highlights. When highlights don't overlap, segments are simply the
//! highlights and the plain text between them. When they do, the text inside
//! highlight A alone is distinguished from the text inside A and B, and so on.
//!
//! [`segment`] is the reference definition: it walks every character and
//! compares membership vectors. [`Segmenter`] produces identical output by
//! sweeping the sorted highlight boundaries, touching each boundary instead of
//! each character, and keeps its scratch buffers between calls.

use std::collections::BTreeSet;

use tracing::debug;

use crate::model::{Highlight, Segment};
use crate::text::char_len;

/// Indices of the set entries of a membership vector, ascending.
fn covering(membership: &[bool]) -> Vec<usize> {
    membership
        .iter()
        .enumerate()
        .filter_map(|(i, &member)| member.then_some(i))
        .collect()
}

/// Partition `text` into segments of uniform highlight membership.
///
/// Always returns at least one segment; an empty text yields `{0, 0, []}`.
/// Neither argument is modified.
pub fn segment(text: &str, highlights: &[Highlight]) -> Vec<Segment> {
    let len = char_len(text);
    let mut segments = Vec::new();

    let mut segment_start = 0;
    let mut current = vec![false; highlights.len()];
    let mut scratch = vec![false; highlights.len()];

    for idx in 0..len {
        for (slot, h) in scratch.iter_mut().zip(highlights) {
            *slot = h.contains(idx);
        }
        if idx == 0 {
            std::mem::swap(&mut current, &mut scratch);
            continue;
        }
        if scratch != current {
            // `covering` copies out of `current` before the buffers swap.
            segments.push(Segment::new(segment_start, idx, covering(&current)));
            segment_start = idx;
            std::mem::swap(&mut current, &mut scratch);
        }
    }
    segments.push(Segment::new(segment_start, len, covering(&current)));

    debug!(
        chars = len,
        highlights = highlights.len(),
        segments = segments.len(),
        "segmented text"
    );
    segments
}

/// Boundary-sweep segmenter with reusable scratch space.
///
/// Produces exactly the same segments as [`segment`].
#[derive(Debug, Clone, Default)]
pub struct Segmenter {
    boundaries: Vec<usize>,
    starts: Vec<(usize, usize)>,
    ends: Vec<(usize, usize)>,
    active: BTreeSet<usize>,
}

impl Segmenter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn segment(&mut self, text: &str, highlights: &[Highlight]) -> Vec<Segment> {
        let len = char_len(text);
        self.collect_events(len, highlights);

        let mut segments: Vec<Segment> = Vec::with_capacity(self.boundaries.len());
        let (mut next_start, mut next_end) = (0, 0);

        for window in self.boundaries.windows(2) {
            let (from, to) = (window[0], window[1]);

            while next_end < self.ends.len() && self.ends[next_end].0 <= from {
                self.active.remove(&self.ends[next_end].1);
                next_end += 1;
            }
            while next_start < self.starts.len() && self.starts[next_start].0 <= from {
                self.active.insert(self.starts[next_start].1);
                next_start += 1;
            }

            let covering: Vec<usize> = self.active.iter().copied().collect();
            match segments.last_mut() {
                Some(last) if last.highlights == covering => last.end = to,
                _ => segments.push(Segment::new(from, to, covering)),
            }
        }

        if segments.is_empty() {
            segments.push(Segment::new(0, len, Vec::new()));
        }
        segments
    }

    fn collect_events(&mut self, len: usize, highlights: &[Highlight]) {
        self.boundaries.clear();
        self.starts.clear();
        self.ends.clear();
        self.active.clear();

        self.boundaries.reserve(2 + highlights.len() * 2);
        self.boundaries.push(0);
        self.boundaries.push(len);

        for (i, h) in highlights.iter().enumerate() {
            let Some((start, end)) = h.clamp_to(len) else {
                continue;
            };
            self.starts.push((start, i));
            self.ends.push((end, i));
            self.boundaries.push(start);
            self.boundaries.push(end);
        }

        self.starts.sort_unstable();
        self.ends.sort_unstable();
        self.boundaries.sort_unstable();
        self.boundaries.dedup();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const NOW: &str = "now is the time for all good folks to come to the aid of their country";

    fn texts<'a>(text: &'a str, segments: &[Segment]) -> Vec<&'a str> {
        segments.iter().map(|s| s.text(text)).collect()
    }

    fn both(text: &str, highlights: &[Highlight]) -> Vec<Segment> {
        let scanned = segment(text, highlights);
        let swept = Segmenter::new().segment(text, highlights);
        assert_eq!(scanned, swept, "sweep must agree with scan");
        scanned
    }

    #[test]
    fn test_no_highlights() {
        let segments = both("abc", &[]);
        assert_eq!(segments, vec![Segment::new(0, 3, vec![])]);
    }

    #[test]
    fn test_empty_text() {
        assert_eq!(both("", &[]), vec![Segment::new(0, 0, vec![])]);
        assert_eq!(
            both("", &[Highlight::new(0, 5)]),
            vec![Segment::new(0, 0, vec![])]
        );
    }

    #[test]
    fn test_single_highlight() {
        let text = "foo bar baz";
        let segments = both(text, &[Highlight::new(4, 3)]);
        assert_eq!(texts(text, &segments), vec!["foo ", "bar", " baz"]);
        assert_eq!(segments[0].highlights, Vec::<usize>::new());
        assert_eq!(segments[1].highlights, vec![0]);
        assert_eq!(segments[2].highlights, Vec::<usize>::new());
    }

    #[test]
    fn test_multiple_highlights() {
        let highlights = [
            Highlight::new(4, 11),
            Highlight::new(35, 1),
            Highlight::new(38, 15),
        ];
        let segments = both(NOW, &highlights);
        assert_eq!(segments.len(), 7);
        assert_eq!(segments[1].text(NOW), "is the time");
        assert!(segments[1].is_highlighted());
        assert!(!segments[2].is_highlighted());
        assert_eq!(segments[3].text(NOW), "t");
        assert!(segments[3].is_highlighted());
        assert!(!segments[4].is_highlighted());
        assert_eq!(segments[5].text(NOW), "come to the aid");
        assert_eq!(segments[5].highlights, vec![2]);
    }

    #[test]
    fn test_overlapping_highlights() {
        let highlights = [Highlight::new(4, 11), Highlight::new(11, 20)];
        let segments = both(NOW, &highlights);
        assert_eq!(segments.len(), 5);
        assert_eq!(segments[1].text(NOW), "is the ");
        assert_eq!(segments[1].highlights, vec![0]);
        assert_eq!(segments[2].text(NOW), "time");
        assert_eq!(segments[2].highlights, vec![0, 1]);
        assert_eq!(segments[3].text(NOW), " for all good fo");
        assert_eq!(segments[3].highlights, vec![1]);
        assert!(!segments[4].is_highlighted());
    }

    #[test]
    fn test_heavily_overlapping_highlights() {
        let highlights = [
            Highlight::new(2, 40),
            Highlight::new(4, 11),
            Highlight::new(5, 4),
            Highlight::new(6, 2),
            Highlight::new(11, 20),
            Highlight::new(30, 4),
            Highlight::new(33, 3),
            Highlight::new(35, 2),
            Highlight::new(36, 1),
            Highlight::new(38, 1),
            Highlight::new(44, 3),
        ];
        let segments = both(NOW, &highlights);
        assert_eq!(
            texts(NOW, &segments),
            vec![
                "no",
                "w ",
                "i",
                "s",
                " t",
                "h",
                "e ",
                "time",
                " for all good f",
                "o",
                "lk",
                "s",
                " ",
                "t",
                "o",
                " ",
                "c",
                "ome",
                " t",
                "o t",
                "he aid of their country",
            ]
        );
        for (i, s) in segments.iter().enumerate() {
            let plain = matches!(i, 0 | 18 | 20);
            assert_eq!(s.is_highlighted(), !plain, "segment {i}");
        }
        assert_eq!(segments[7].highlights, vec![0, 1, 4]);
    }

    #[test]
    fn test_highlight_at_start_and_end() {
        let segments = both(NOW, &[Highlight::new(0, 4)]);
        assert_eq!(segments[0].text(NOW), "now ");
        assert!(segments[0].is_highlighted());

        let segments = both(NOW, &[Highlight::new(63, 7)]);
        assert_eq!(segments.len(), 2);
        assert_eq!(segments[1].text(NOW), "country");
        assert_eq!(segments[1].end, 70);

        let with_dot = format!("{NOW}.");
        let segments = both(&with_dot, &[Highlight::new(63, 7)]);
        assert_eq!(texts(&with_dot, &segments)[1..], ["country", "."]);
        assert!(!segments[2].is_highlighted());
    }

    #[test]
    fn test_zero_length_highlight_is_ignored() {
        let segments = both("foo bar", &[Highlight::new(3, 0), Highlight::new(4, -2)]);
        assert_eq!(segments, vec![Segment::new(0, 7, vec![])]);
    }

    #[test]
    fn test_out_of_range_highlights() {
        let segments = both("abcdef", &[Highlight::new(-3, 5), Highlight::new(4, 100)]);
        assert_eq!(
            segments,
            vec![
                Segment::new(0, 2, vec![0]),
                Segment::new(2, 4, vec![]),
                Segment::new(4, 6, vec![1]),
            ]
        );
        assert_eq!(both("abc", &[Highlight::new(10, 2)]), vec![Segment::new(0, 3, vec![])]);
    }

    #[test]
    fn test_duplicate_highlights_share_segments() {
        let segments = both("abcdef", &[Highlight::new(1, 2), Highlight::new(1, 2)]);
        assert_eq!(segments[1], Segment::new(1, 3, vec![0, 1]));
        assert_eq!(segments.len(), 3);
    }

    #[test]
    fn test_inputs_are_untouched() {
        let text = String::from(NOW);
        let highlights = vec![Highlight::new(4, 11), Highlight::new(11, 20)];
        let first = segment(&text, &highlights);
        let second = segment(&text, &highlights);
        assert_eq!(first, second);
        assert_eq!(text, NOW);
        assert_eq!(highlights, vec![Highlight::new(4, 11), Highlight::new(11, 20)]);
        let joined: String = first.iter().map(|s| s.text(&text)).collect();
        assert_eq!(joined, NOW);
    }

    #[test]
    fn test_segmenter_reuse() {
        let mut segmenter = Segmenter::new();
        let a = segmenter.segment(NOW, &[Highlight::new(4, 11), Highlight::new(11, 20)]);
        let b = segmenter.segment("foo bar baz", &[Highlight::new(4, 3)]);
        assert_eq!(a.len(), 5);
        assert_eq!(b, segment("foo bar baz", &[Highlight::new(4, 3)]));
    }
}
