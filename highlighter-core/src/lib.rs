//! Highlighter Core - overlapping highlights as flat segments
//!
//! This crate splits a text into segments of uniform highlight membership so
//! that overlapping or adjacent highlights can be painted as a flat run of
//! spans, and maps selections made over those spans back to absolute text
//! offsets. It's designed to work both in native CLI and WASM environments.

pub mod actions;
pub mod app;
pub mod cursor;
pub mod error;
pub mod highlighter;
pub mod locator;
pub mod model;
pub mod platform;
pub mod segmenter;
pub mod source;
pub mod text;

pub use actions::Action;
pub use app::{App, Focus, Mode};
pub use cursor::CursorState;
pub use error::{Endpoint, SelectionError};
pub use highlighter::{Highlighter, RenderedSpan, SelectionHandler, DEFAULT_CLASS};
pub use locator::{is_forward, locate, try_locate, NodeLink, RawEndpoint};
pub use model::segment::segment_at;
pub use model::{Highlight, Segment, Selection, SelectionMarker};
pub use platform::{MemorySelection, PlatformSelection, RawSelection};
pub use segmenter::{segment, Segmenter};
pub use text::Utf16Map;
pub use source::{PlatformSource, SelectionSource};

/// Parse a JSON array of `{"startIndex", "numChars"}` objects
pub fn highlights_from_json(json: &str) -> serde_json::Result<Vec<Highlight>> {
    serde_json::from_str(json)
}

/// Serialize segments as pretty JSON
pub fn segments_to_json(segments: &[Segment]) -> serde_json::Result<String> {
    serde_json::to_string_pretty(segments)
}
