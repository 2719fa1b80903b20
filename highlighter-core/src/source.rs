//! Where a highlighter gets its selections from.
//!
//! The highlighter only depends on [`SelectionSource`]. The default
//! implementation reads a live [`PlatformSelection`]; tests (or embedders that
//! already know the selection) can hand in a plain closure instead.

use tracing::{debug, warn};

use crate::error::{Endpoint, SelectionError};
use crate::locator::try_locate;
use crate::model::{Segment, SelectionMarker};
use crate::platform::PlatformSelection;

/// Supplies the selection to act on when the user finishes selecting.
pub trait SelectionSource {
    /// The current selection in absolute coordinates, if there is one.
    ///
    /// `segments` must be the table the text is currently rendered with.
    fn take_selection(&mut self, segments: &[Segment]) -> Option<SelectionMarker>;
}

impl<F> SelectionSource for F
where
    F: FnMut() -> Option<SelectionMarker>,
{
    fn take_selection(&mut self, _segments: &[Segment]) -> Option<SelectionMarker> {
        self()
    }
}

/// Reads selections from a platform selection API.
///
/// Once a selection has been captured the platform selection is cleared, so
/// asking twice without a new selection in between yields `None`.
#[derive(Debug, Clone, Default)]
pub struct PlatformSource<P> {
    platform: P,
}

impl<P: PlatformSelection> PlatformSource<P> {
    pub fn new(platform: P) -> Self {
        Self { platform }
    }

    pub fn platform(&self) -> &P {
        &self.platform
    }

    pub fn platform_mut(&mut self) -> &mut P {
        &mut self.platform
    }

    fn resolve(&self, segments: &[Segment]) -> Result<SelectionMarker, SelectionError> {
        let selection = self.platform.current().ok_or(SelectionError::NoSelection)?;
        let anchor = selection
            .anchor
            .ok_or(SelectionError::MissingEndpoint(Endpoint::Anchor))?;
        let focus = selection
            .focus
            .ok_or(SelectionError::MissingEndpoint(Endpoint::Focus))?;
        try_locate(&anchor, &focus, segments)
    }
}

impl<P: PlatformSelection> SelectionSource for PlatformSource<P> {
    fn take_selection(&mut self, segments: &[Segment]) -> Option<SelectionMarker> {
        match self.resolve(segments) {
            Ok(marker) => {
                debug!(
                    start = marker.selection_start,
                    length = marker.selection_length,
                    "captured selection"
                );
                self.platform.remove_all_ranges();
                Some(marker)
            }
            Err(err) => {
                warn!(%err, "returning without a selection");
                None
            }
        }
    }
}
