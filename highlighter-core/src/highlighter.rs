//! The interactive highlighter: text plus highlights in, styled spans out,
//! selections back.
//!
//! Rendering produces one span per segment, each tagged with its segment
//! index so that a selection landing in it can be mapped back to absolute
//! offsets. Highlighted spans carry a class name (the custom class, or
//! [`DEFAULT_CLASS`]); plain spans carry none.
//!
//! The segment table is recomputed whenever the text or the highlight list
//! changes, so selections are always resolved against what is on screen. The
//! highlighter owns a [`Segmenter`] so that recomputation reuses its buffers.

use std::fmt;

use tracing::debug;

use crate::model::{Highlight, Segment, Selection};
use crate::platform::MemorySelection;
use crate::segmenter::Segmenter;
use crate::source::{PlatformSource, SelectionSource};
use crate::text::{char_len, char_slice};

/// Class name used for highlighted spans when no custom class is set.
pub const DEFAULT_CLASS: &str = "default";

/// Called with `(selected_text, selection_start, selection_length)`.
pub type SelectionHandler = Box<dyn FnMut(&str, usize, usize)>;

/// One rendered unit: a segment's text and its styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderedSpan<'a> {
    /// Index of the segment this span renders.
    pub segment: usize,
    /// Absolute char offset of the span's first character.
    pub start: usize,
    pub text: &'a str,
    /// Set only for highlighted spans.
    pub class: Option<&'a str>,
}

impl RenderedSpan<'_> {
    pub fn is_highlighted(&self) -> bool {
        self.class.is_some()
    }
}

pub struct Highlighter<S = PlatformSource<MemorySelection>> {
    text: String,
    highlights: Vec<Highlight>,
    custom_class: Option<String>,
    segments: Vec<Segment>,
    segmenter: Segmenter,
    source: S,
    handler: Option<SelectionHandler>,
}

impl Highlighter {
    pub fn new(text: impl Into<String>, highlights: Vec<Highlight>) -> Self {
        let text = text.into();
        let mut segmenter = Segmenter::new();
        let segments = segmenter.segment(&text, &highlights);
        Self {
            text,
            highlights,
            custom_class: None,
            segments,
            segmenter,
            source: PlatformSource::default(),
            handler: None,
        }
    }
}

impl<S: SelectionSource> Highlighter<S> {
    /// Use `class` instead of [`DEFAULT_CLASS`] for highlighted spans.
    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        self.custom_class = Some(class.into());
        self
    }

    /// Replace where selections come from.
    pub fn with_selection_source<T: SelectionSource>(self, source: T) -> Highlighter<T> {
        Highlighter {
            text: self.text,
            highlights: self.highlights,
            custom_class: self.custom_class,
            segments: self.segments,
            segmenter: self.segmenter,
            source,
            handler: self.handler,
        }
    }

    /// Call `handler` whenever a non-empty selection is made.
    pub fn with_selection_handler(
        mut self,
        handler: impl FnMut(&str, usize, usize) + 'static,
    ) -> Self {
        self.handler = Some(Box::new(handler));
        self
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn highlights(&self) -> &[Highlight] {
        &self.highlights
    }

    /// The segment table for the current text and highlights.
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn class_name(&self) -> &str {
        self.custom_class.as_deref().unwrap_or(DEFAULT_CLASS)
    }

    pub fn selection_source(&self) -> &S {
        &self.source
    }

    pub fn selection_source_mut(&mut self) -> &mut S {
        &mut self.source
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
        self.resegment();
    }

    pub fn set_highlights(&mut self, highlights: Vec<Highlight>) {
        self.highlights = highlights;
        self.resegment();
    }

    pub fn push_highlight(&mut self, highlight: Highlight) {
        self.highlights.push(highlight);
        self.resegment();
    }

    pub fn remove_highlight(&mut self, index: usize) -> Option<Highlight> {
        if index >= self.highlights.len() {
            return None;
        }
        let removed = self.highlights.remove(index);
        self.resegment();
        Some(removed)
    }

    fn resegment(&mut self) {
        self.segments = self.segmenter.segment(&self.text, &self.highlights);
        debug!(segments = self.segments.len(), "resegmented");
    }

    /// One span per segment, in text order.
    pub fn render(&self) -> Vec<RenderedSpan<'_>> {
        let class = self.class_name();
        self.segments
            .iter()
            .enumerate()
            .map(|(idx, s)| RenderedSpan {
                segment: idx,
                start: s.start,
                text: s.text(&self.text),
                class: s.is_highlighted().then_some(class),
            })
            .collect()
    }

    /// Handle the end of a selection gesture.
    ///
    /// Asks the selection source for the current selection. A non-empty one
    /// is passed to the selection handler (at most once) and returned.
    ///
    /// A marker running past the end of the text is cut at the end, so the
    /// reported length is always the length of the reported text.
    pub fn on_mouse_up(&mut self) -> Option<Selection> {
        let marker = self.source.take_selection(&self.segments)?;
        let selected = char_slice(&self.text, marker.selection_start, marker.end()).to_string();
        let length = char_len(&selected);
        if length == 0 {
            return None;
        }

        debug!(start = marker.selection_start, length, "selection made");
        if let Some(handler) = self.handler.as_mut() {
            handler(&selected, marker.selection_start, length);
        }

        Some(Selection {
            text: selected,
            start: marker.selection_start,
            length,
        })
    }
}

impl<S> fmt::Debug for Highlighter<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Highlighter")
            .field("text", &self.text)
            .field("highlights", &self.highlights)
            .field("custom_class", &self.custom_class)
            .field("segments", &self.segments)
            .field("has_handler", &self.handler.is_some())
            .finish_non_exhaustive()
    }
}
