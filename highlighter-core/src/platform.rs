//! The live selection state a front end exposes.

use crate::locator::RawEndpoint;

/// Anchor and focus as reported by the platform; either may be missing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RawSelection {
    pub anchor: Option<RawEndpoint>,
    pub focus: Option<RawEndpoint>,
}

impl RawSelection {
    pub fn new(anchor: RawEndpoint, focus: RawEndpoint) -> Self {
        Self {
            anchor: Some(anchor),
            focus: Some(focus),
        }
    }
}

/// A platform selection API: read the current selection, clear it.
pub trait PlatformSelection {
    /// The current selection, or `None` if the platform has no selection state.
    fn current(&self) -> Option<RawSelection>;

    /// Drop every selected range.
    fn remove_all_ranges(&mut self);
}

/// Selection state held in memory, for front ends that draw their own
/// selection (and for tests).
#[derive(Debug, Clone, Default)]
pub struct MemorySelection {
    selection: Option<RawSelection>,
}

impl MemorySelection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn select(&mut self, anchor: RawEndpoint, focus: RawEndpoint) {
        self.selection = Some(RawSelection::new(anchor, focus));
    }

    pub fn set(&mut self, selection: Option<RawSelection>) {
        self.selection = selection;
    }

    pub fn is_active(&self) -> bool {
        self.selection.is_some()
    }
}

impl PlatformSelection for MemorySelection {
    fn current(&self) -> Option<RawSelection> {
        self.selection
    }

    fn remove_all_ranges(&mut self) {
        self.selection = None;
    }
}
