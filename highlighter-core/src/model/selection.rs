use serde::{Deserialize, Serialize};

/// Absolute coordinates of a user selection in the original text.
///
/// A zero length means "no selection".
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct SelectionMarker {
    pub selection_start: usize,
    pub selection_length: usize,
}

impl SelectionMarker {
    pub fn new(selection_start: usize, selection_length: usize) -> Self {
        Self {
            selection_start,
            selection_length,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.selection_length == 0
    }

    /// Exclusive end offset
    pub fn end(&self) -> usize {
        self.selection_start + self.selection_length
    }
}

/// A captured selection: what the selection handler receives.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Selection {
    pub text: String,
    pub start: usize,
    pub length: usize,
}
