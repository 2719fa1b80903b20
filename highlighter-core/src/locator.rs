//! Map a raw selection back to absolute text offsets.
//!
//! Each segment is rendered as its own node, so the platform reports selection
//! end-points relative to whichever node they landed in. Recovering the
//! absolute offset is a table lookup: add the `start` of the segment that
//! produced the node.

use tracing::warn;

use crate::error::{Endpoint, SelectionError};
use crate::model::{Segment, SelectionMarker};
use crate::model::segment::segment_at;

/// What a rendered node is attached to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeLink {
    /// The node renders the segment with this index.
    Segment(usize),
    /// An unsegmented node; its offsets are already absolute.
    Plain,
}

/// One end of a platform selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawEndpoint {
    /// Position of the node in document order.
    pub node: usize,
    /// Offset relative to the start of the node.
    pub offset: usize,
    /// `None` when the node has no parent linkage.
    pub parent: Option<NodeLink>,
}

impl RawEndpoint {
    /// An end-point inside the node rendering segment `segment`.
    pub fn in_segment(segment: usize, offset: usize) -> Self {
        Self {
            node: segment,
            offset,
            parent: Some(NodeLink::Segment(segment)),
        }
    }

    /// An end-point inside an unsegmented node.
    pub fn plain(node: usize, offset: usize) -> Self {
        Self {
            node,
            offset,
            parent: Some(NodeLink::Plain),
        }
    }

    /// The end-point a renderer of `segments` reports for absolute `offset`.
    ///
    /// This is the inverse of [`locate`]'s offset recovery, used by front ends
    /// that place the selection themselves.
    pub fn at_offset(segments: &[Segment], offset: usize) -> Option<Self> {
        let idx = segment_at(segments, offset)?;
        Some(Self::in_segment(idx, offset - segments[idx].start))
    }

    /// Absolute offset of this end-point.
    ///
    /// A segment node's offset may be at most the segment's length. A plain
    /// node spans the whole text, which is bounded by the last segment's end
    /// when a table is given.
    fn absolute(&self, which: Endpoint, segments: &[Segment]) -> Result<usize, SelectionError> {
        let (base, len) = match self.parent {
            None => return Err(SelectionError::MissingParent(which)),
            Some(NodeLink::Plain) => match segments.last() {
                Some(last) => (0, last.end),
                None => return Ok(self.offset),
            },
            Some(NodeLink::Segment(idx)) => {
                let s = segments.get(idx).ok_or(SelectionError::UnknownSegment {
                    endpoint: which,
                    segment: idx,
                    count: segments.len(),
                })?;
                (s.start, s.len())
            }
        };
        if self.offset > len {
            return Err(SelectionError::OffsetOutOfRange {
                endpoint: which,
                offset: self.offset,
                len,
            });
        }
        Ok(base + self.offset)
    }
}

/// Whether the selection runs forward from anchor to focus in document order.
pub fn is_forward(anchor: &RawEndpoint, focus: &RawEndpoint) -> bool {
    if anchor.node == focus.node {
        focus.offset > anchor.offset
    } else {
        anchor.node < focus.node
    }
}

/// Resolve a raw selection, reporting why it failed.
pub fn try_locate(
    anchor: &RawEndpoint,
    focus: &RawEndpoint,
    segments: &[Segment],
) -> Result<SelectionMarker, SelectionError> {
    let (first, first_which, last, last_which) = if is_forward(anchor, focus) {
        (anchor, Endpoint::Anchor, focus, Endpoint::Focus)
    } else {
        (focus, Endpoint::Focus, anchor, Endpoint::Anchor)
    };

    let start = first.absolute(first_which, segments)?;
    let end = last.absolute(last_which, segments)?;

    Ok(SelectionMarker::new(start, end.saturating_sub(start)))
}

/// Resolve a raw selection into absolute text coordinates.
///
/// Returns `None` when either end-point cannot be resolved; the reason is
/// logged. A resolved zero-length marker is returned as-is, and callers treat
/// it as a no-op.
pub fn locate(
    anchor: &RawEndpoint,
    focus: &RawEndpoint,
    segments: &[Segment],
) -> Option<SelectionMarker> {
    match try_locate(anchor, focus, segments) {
        Ok(marker) => Some(marker),
        Err(err) => {
            warn!(%err, "ignoring unresolvable selection");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Highlight;
    use crate::segmenter::segment;

    const NOW: &str = "now is the time for all good folks to come to the aid of their country";

    #[test]
    fn test_plain_text_selection() {
        let anchor = RawEndpoint::plain(0, 20);
        let focus = RawEndpoint::plain(0, 34);
        let marker = locate(&anchor, &focus, &[]).unwrap();
        assert_eq!(marker, SelectionMarker::new(20, 14));
    }

    #[test]
    fn test_segment_relative_offsets() {
        let segments = segment(NOW, &[Highlight::new(4, 11), Highlight::new(55, 2)]);
        // "all good folks" lies inside segment 2, which starts at 15.
        assert_eq!(segments[2].start, 15);
        let anchor = RawEndpoint::in_segment(2, 5);
        let focus = RawEndpoint::in_segment(2, 19);
        let marker = locate(&anchor, &focus, &segments).unwrap();
        assert_eq!(marker, SelectionMarker::new(20, 14));
        assert_eq!(&NOW[20..34], "all good folks");
    }

    #[test]
    fn test_backward_selection() {
        let segments = segment(NOW, &[Highlight::new(4, 11)]);
        let anchor = RawEndpoint::in_segment(2, 3);
        let focus = RawEndpoint::in_segment(1, 2);
        assert!(!is_forward(&anchor, &focus));
        let marker = locate(&anchor, &focus, &segments).unwrap();
        assert_eq!(marker, SelectionMarker::new(6, 12));
    }

    #[test]
    fn test_backward_within_one_node() {
        let anchor = RawEndpoint::plain(0, 9);
        let focus = RawEndpoint::plain(0, 4);
        let marker = locate(&anchor, &focus, &[]).unwrap();
        assert_eq!(marker, SelectionMarker::new(4, 5));
    }

    #[test]
    fn test_collapsed_selection_is_zero_length() {
        let segments = segment("foo bar baz", &[Highlight::new(4, 3)]);
        let point = RawEndpoint::in_segment(1, 1);
        let marker = locate(&point, &point, &segments).unwrap();
        assert!(marker.is_empty());
        assert_eq!(marker.selection_start, 5);
    }

    #[test]
    fn test_missing_parent() {
        let anchor = RawEndpoint {
            node: 0,
            offset: 1,
            parent: None,
        };
        let focus = RawEndpoint::plain(0, 4);
        assert_eq!(
            try_locate(&anchor, &focus, &[]),
            Err(SelectionError::MissingParent(Endpoint::Anchor))
        );
        assert_eq!(locate(&anchor, &focus, &[]), None);
    }

    #[test]
    fn test_unknown_segment() {
        let segments = segment("foo bar baz", &[]);
        let anchor = RawEndpoint::in_segment(0, 1);
        let focus = RawEndpoint::in_segment(4, 0);
        assert_eq!(
            try_locate(&anchor, &focus, &segments),
            Err(SelectionError::UnknownSegment {
                endpoint: Endpoint::Focus,
                segment: 4,
                count: 1,
            })
        );
    }

    #[test]
    fn test_offset_past_segment_end() {
        let segments = segment("foo bar baz", &[]);
        let anchor = RawEndpoint::in_segment(0, 8);
        let focus = RawEndpoint::in_segment(0, 40);
        assert_eq!(
            try_locate(&anchor, &focus, &segments),
            Err(SelectionError::OffsetOutOfRange {
                endpoint: Endpoint::Focus,
                offset: 40,
                len: 11,
            })
        );
        assert_eq!(locate(&anchor, &focus, &segments), None);

        // The end of a segment is still a valid position.
        let focus = RawEndpoint::in_segment(0, 11);
        assert_eq!(
            locate(&anchor, &focus, &segments),
            Some(SelectionMarker::new(8, 3))
        );
    }

    #[test]
    fn test_plain_offset_bounded_by_text() {
        let segments = segment("foo bar baz", &[Highlight::new(4, 3)]);
        let anchor = RawEndpoint::plain(0, 2);
        let focus = RawEndpoint::plain(0, 12);
        assert!(matches!(
            try_locate(&anchor, &focus, &segments),
            Err(SelectionError::OffsetOutOfRange { len: 11, .. })
        ));
    }

    #[test]
    fn test_at_offset_round_trip() {
        let segments = segment(NOW, &[Highlight::new(4, 11), Highlight::new(11, 20)]);
        for offset in [0, 4, 10, 11, 14, 15, 30, 31, 70] {
            let endpoint = RawEndpoint::at_offset(&segments, offset).unwrap();
            let marker = locate(&RawEndpoint::plain(0, 0), &endpoint, &segments).unwrap();
            assert_eq!(marker.end(), offset);
        }
        assert_eq!(RawEndpoint::at_offset(&segments, 71), None);
    }
}
