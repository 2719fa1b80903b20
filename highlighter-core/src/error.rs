//! Error types for selection resolution.

use thiserror::Error;

/// Why a raw selection could not be turned into a [`SelectionMarker`].
///
/// None of these are fatal: the caller treats them all as "no selection".
///
/// [`SelectionMarker`]: crate::model::SelectionMarker
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SelectionError {
    /// The platform reported no selection at all.
    #[error("no active selection")]
    NoSelection,
    /// The selection has no anchor or no focus end-point.
    #[error("selection is missing its {0} end-point")]
    MissingEndpoint(Endpoint),
    /// An end-point's node has no parent linkage.
    #[error("{0} node has no parent")]
    MissingParent(Endpoint),
    /// An end-point refers to a segment that isn't in the current table.
    #[error("{endpoint} refers to segment {segment}, but only {count} segments are rendered")]
    UnknownSegment {
        endpoint: Endpoint,
        segment: usize,
        count: usize,
    },
    /// An end-point's offset lies past the end of the node it is in.
    #[error("{endpoint} offset {offset} is past the end of its node (length {len})")]
    OffsetOutOfRange {
        endpoint: Endpoint,
        offset: usize,
        len: usize,
    },
}

/// Which end of a selection an error concerns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    Anchor,
    Focus,
}

impl std::fmt::Display for Endpoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Endpoint::Anchor => f.write_str("anchor"),
            Endpoint::Focus => f.write_str("focus"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = SelectionError::MissingParent(Endpoint::Focus);
        assert_eq!(err.to_string(), "focus node has no parent");

        let err = SelectionError::UnknownSegment {
            endpoint: Endpoint::Anchor,
            segment: 7,
            count: 3,
        };
        assert!(err.to_string().contains("segment 7"));
        assert!(err.to_string().contains("only 3"));
    }

    #[test]
    fn test_offset_out_of_range_display() {
        let err = SelectionError::OffsetOutOfRange {
            endpoint: Endpoint::Focus,
            offset: 40,
            len: 11,
        };
        assert_eq!(
            err.to_string(),
            "focus offset 40 is past the end of its node (length 11)"
        );
    }
}
