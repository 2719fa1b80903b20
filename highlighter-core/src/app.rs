use tracing::info;

use crate::actions::Action;
use crate::cursor::CursorState;
use crate::highlighter::Highlighter;
use crate::locator::RawEndpoint;
use crate::model::{Highlight, Selection};

/// Application mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Normal,
    Visual,
    Help,
}

/// Focus area
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Editor,
    Sidebar,
}

/// Platform-agnostic application state
pub struct App {
    pub title: String,
    pub highlighter: Highlighter,
    pub cursor: CursorState,
    pub mode: Mode,
    pub focus: Focus,
    pub running: bool,

    // Char offset where the visual selection started
    pub selection_anchor: Option<usize>,

    // Sidebar state
    pub sidebar_selected: usize,

    pub last_selection: Option<Selection>,
    pub status_message: Option<String>,
}

impl App {
    pub fn new() -> Self {
        Self {
            title: "Untitled".to_string(),
            highlighter: Self::logging_highlighter(String::new(), Vec::new()),
            cursor: CursorState::new(),
            mode: Mode::Normal,
            focus: Focus::Editor,
            running: true,

            selection_anchor: None,

            sidebar_selected: 0,

            last_selection: None,
            status_message: None,
        }
    }

    fn logging_highlighter(text: String, highlights: Vec<Highlight>) -> Highlighter {
        Highlighter::new(text, highlights).with_selection_handler(|selected, start, len| {
            info!(selected, start, len, "selection");
        })
    }

    /// Replace the text and highlights being shown
    pub fn load_text(&mut self, title: &str, text: String, highlights: Vec<Highlight>) {
        let mut highlighter = Self::logging_highlighter(text, highlights);
        if self.highlighter.class_name() != crate::highlighter::DEFAULT_CLASS {
            highlighter = highlighter.with_class(self.highlighter.class_name());
        }
        self.cursor.set_content(highlighter.text());
        self.highlighter = highlighter;
        self.title = title.to_string();
        self.mode = Mode::Normal;
        self.selection_anchor = None;
        self.sidebar_selected = 0;
        self.last_selection = None;
    }

    /// Use `class` for highlighted spans
    pub fn set_class(&mut self, class: &str) {
        let highlighter = std::mem::replace(
            &mut self.highlighter,
            Highlighter::new(String::new(), Vec::new()),
        );
        self.highlighter = highlighter.with_class(class);
    }

    pub fn text(&self) -> &str {
        self.highlighter.text()
    }

    pub fn highlights(&self) -> &[Highlight] {
        self.highlighter.highlights()
    }

    /// Get cursor position as (row, col)
    pub fn cursor_pos(&self) -> (usize, usize) {
        self.cursor.cursor()
    }

    pub fn dispatch(&mut self, action: Action) {
        if self.mode == Mode::Help {
            self.mode = Mode::Normal;
            return;
        }

        if action.is_motion() && self.focus == Focus::Sidebar && self.mode == Mode::Normal {
            match action {
                Action::MoveDown => self.next_highlight(),
                Action::MoveUp => self.prev_highlight(),
                _ => {}
            }
            return;
        }

        match action {
            Action::MoveUp => self.cursor.move_up(),
            Action::MoveDown => self.cursor.move_down(),
            Action::MoveLeft => self.cursor.move_left(),
            Action::MoveRight => self.cursor.move_right(),
            Action::MoveWordForward => self.cursor.move_word_forward(self.highlighter.text()),
            Action::MoveWordBack => self.cursor.move_word_back(self.highlighter.text()),
            Action::MoveToLineStart => self.cursor.move_to_start(),
            Action::MoveToLineEnd => self.cursor.move_to_end(),
            Action::MoveToTop => self.cursor.move_to_top(),
            Action::MoveToBottom => self.cursor.move_to_bottom(),
            Action::NextHighlight => self.next_highlight(),
            Action::PrevHighlight => self.prev_highlight(),
            Action::EnterVisual => self.enter_visual_mode(),
            Action::CancelVisual => self.cancel_visual_mode(),
            Action::CommitSelection => {
                self.commit_selection();
            }
            Action::DeleteHighlight => {
                self.delete_selected_highlight();
            }
            Action::ToggleFocus => self.toggle_focus(),
            Action::ShowHelp => self.mode = Mode::Help,
            Action::Quit => self.running = false,
        }
    }

    /// Enter visual/selection mode
    pub fn enter_visual_mode(&mut self) {
        self.mode = Mode::Visual;
        self.focus = Focus::Editor;
        self.selection_anchor = Some(self.cursor.offset());
    }

    pub fn cancel_visual_mode(&mut self) {
        self.mode = Mode::Normal;
        self.selection_anchor = None;
    }

    /// Get selection range for highlighting, as [start, end) char offsets
    pub fn get_selection_range(&self) -> Option<(usize, usize)> {
        if self.mode != Mode::Visual {
            return None;
        }
        let anchor = self.selection_anchor?;
        let focus = self.cursor.offset();
        Some((anchor.min(focus), anchor.max(focus)))
    }

    /// Finish the visual selection and turn it into a highlight.
    ///
    /// The selection is handed to the highlighter the way a platform would
    /// report it: as end-points relative to the rendered segments.
    pub fn commit_selection(&mut self) -> Option<Selection> {
        if self.mode != Mode::Visual {
            return None;
        }
        let anchor = self.selection_anchor.take()?;
        self.mode = Mode::Normal;

        let focus = self.cursor.offset();
        let segments = self.highlighter.segments();
        let anchor = RawEndpoint::at_offset(segments, anchor);
        let focus = RawEndpoint::at_offset(segments, focus);

        if let (Some(anchor), Some(focus)) = (anchor, focus) {
            self.highlighter
                .selection_source_mut()
                .platform_mut()
                .select(anchor, focus);
        }

        match self.highlighter.on_mouse_up() {
            Some(selection) => {
                self.highlighter
                    .push_highlight(Highlight::from_selection(selection.start, selection.length));
                self.sidebar_selected = self.highlighter.highlights().len() - 1;
                self.set_status(&format!(
                    "Highlighted {} chars at {}",
                    selection.length, selection.start
                ));
                self.last_selection = Some(selection.clone());
                Some(selection)
            }
            None => {
                self.set_status("Nothing selected");
                None
            }
        }
    }

    /// Get currently selected highlight (index into the highlight list)
    pub fn selected_highlight(&self) -> Option<(usize, &Highlight)> {
        self.highlighter
            .highlights()
            .get(self.sidebar_selected)
            .map(|h| (self.sidebar_selected, h))
    }

    fn jump_to_selected(&mut self) {
        let len = self.cursor.end_offset();
        if let Some((_, h)) = self.selected_highlight() {
            if let Some((start, _)) = h.clamp_to(len) {
                self.cursor.set_cursor_offset(start);
            }
        }
    }

    /// Navigate to next highlight
    pub fn next_highlight(&mut self) {
        let count = self.highlighter.highlights().len();
        if count > 0 {
            self.sidebar_selected = (self.sidebar_selected + 1) % count;
            self.jump_to_selected();
        }
    }

    /// Navigate to previous highlight
    pub fn prev_highlight(&mut self) {
        let count = self.highlighter.highlights().len();
        if count > 0 {
            self.sidebar_selected = if self.sidebar_selected == 0 {
                count - 1
            } else {
                self.sidebar_selected - 1
            };
            self.jump_to_selected();
        }
    }

    /// Delete selected highlight
    pub fn delete_selected_highlight(&mut self) -> bool {
        if self.highlighter.remove_highlight(self.sidebar_selected).is_none() {
            return false;
        }
        let count = self.highlighter.highlights().len();
        if self.sidebar_selected >= count && count > 0 {
            self.sidebar_selected = count - 1;
        }
        self.set_status("Highlight deleted");
        true
    }

    /// Set status message
    pub fn set_status(&mut self, msg: &str) {
        self.status_message = Some(msg.to_string());
    }

    /// Clear status message
    pub fn clear_status(&mut self) {
        self.status_message = None;
    }

    /// Toggle focus between editor and sidebar
    pub fn toggle_focus(&mut self) {
        self.focus = match self.focus {
            Focus::Editor => Focus::Sidebar,
            Focus::Sidebar => Focus::Editor,
        };
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}
