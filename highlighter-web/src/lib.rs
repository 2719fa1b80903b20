//! Highlighter Web - WebAssembly version of the interactive highlighter
//!
//! This crate provides a browser-based version of the highlighter using
//! Ratzilla for terminal rendering in the DOM, plus a small JS binding to the
//! segmenter.

use std::cell::RefCell;
use std::rc::Rc;

use ratzilla::ratatui::Terminal;
use ratzilla::{event::KeyCode, DomBackend, WebRenderer};
use wasm_bindgen::prelude::*;

use highlighter_core::{Action, App, Highlight, Mode, Selection};

pub mod bindings;
mod ui;

/// Text for the dynamic demo: start with nothing highlighted
const DYNAMIC_TEXT: &str = "I saw the best minds of my generation destroyed by madness, \
starving hysterical naked, dragging themselves...";

/// Text and highlights for the static demo
const STATIC_TEXT: &str =
    "The sky above the port was the color of television, tuned to a dead channel.";
const STATIC_HIGHLIGHTS: &[Highlight] = &[Highlight {
    start_index: 63,
    num_chars: 12,
}];

/// Pick a demo from the location hash (`#static`, otherwise dynamic)
fn demo_app() -> App {
    let hash = web_sys::window()
        .and_then(|w| w.location().hash().ok())
        .unwrap_or_default();

    let mut app = App::new();
    app.set_class("highlighted");
    if hash == "#static" {
        app.load_text("Static Highlights", STATIC_TEXT.to_string(), STATIC_HIGHLIGHTS.to_vec());
        app.set_status("Static demo. Press '?' for help");
    } else {
        app.load_text("Dynamic Highlighter", DYNAMIC_TEXT.to_string(), Vec::new());
        app.set_status("Press 'v' to start selecting, '?' for help");
    }
    app
}

/// Initialize the highlighter web application
#[wasm_bindgen(start)]
pub fn main() -> Result<(), JsValue> {
    // Set up panic hook for better error messages
    console_error_panic_hook::set_once();

    // Wrap in Rc<RefCell> for shared state
    let app_state = Rc::new(RefCell::new(demo_app()));

    // Create terminal with DOM backend
    let backend = DomBackend::new()
        .map_err(|e| JsValue::from_str(&format!("Failed to create backend: {:?}", e)))?;
    let mut terminal = Terminal::new(backend)
        .map_err(|e| JsValue::from_str(&format!("Failed to create terminal: {:?}", e)))?;

    // Set up keyboard handler
    terminal.on_key_event({
        let app_state_cloned = app_state.clone();
        move |event| {
            let mut app = app_state_cloned.borrow_mut();
            app.clear_status();

            if app.mode == Mode::Help {
                app.mode = Mode::Normal;
                return;
            }
            match key_action(app.mode, event.code) {
                Some(Action::CommitSelection) => {
                    if let Some(selection) = app.commit_selection() {
                        log_selection(&selection);
                    }
                }
                Some(action) => app.dispatch(action),
                None => {}
            }
        }
    });

    // Draw loop
    terminal.draw_web(move |frame| {
        let app = app_state.borrow();
        ui::draw(frame, &app);
    });

    web_sys::console::log_1(&"Highlighter WASM initialized".into());

    Ok(())
}

/// Report a new selection on the browser console
fn log_selection(selection: &Selection) {
    web_sys::console::log_1(&format!("selected: {}", selection.text).into());
    web_sys::console::log_1(&format!("start: {}", selection.start).into());
    web_sys::console::log_1(&format!("len: {}", selection.length).into());
}

/// Map a key press to an action for the current mode
fn key_action(mode: Mode, code: KeyCode) -> Option<Action> {
    let motion = match code {
        KeyCode::Char('j') | KeyCode::Down => Some(Action::MoveDown),
        KeyCode::Char('k') | KeyCode::Up => Some(Action::MoveUp),
        KeyCode::Char('h') | KeyCode::Left => Some(Action::MoveLeft),
        KeyCode::Char('l') | KeyCode::Right => Some(Action::MoveRight),
        KeyCode::Char('w') => Some(Action::MoveWordForward),
        KeyCode::Char('b') => Some(Action::MoveWordBack),
        KeyCode::Char('0') => Some(Action::MoveToLineStart),
        KeyCode::Char('$') => Some(Action::MoveToLineEnd),
        KeyCode::Char('g') => Some(Action::MoveToTop),
        KeyCode::Char('G') => Some(Action::MoveToBottom),
        _ => None,
    };
    if motion.is_some() {
        return motion;
    }

    match (mode, code) {
        (Mode::Visual, KeyCode::Esc) => Some(Action::CancelVisual),
        (Mode::Visual, KeyCode::Enter | KeyCode::Char('a')) => Some(Action::CommitSelection),
        (Mode::Visual, _) => None,

        (_, KeyCode::Char('?')) => Some(Action::ShowHelp),
        (_, KeyCode::Char(']')) => Some(Action::NextHighlight),
        (_, KeyCode::Char('[')) => Some(Action::PrevHighlight),
        (_, KeyCode::Char('v')) => Some(Action::EnterVisual),
        (_, KeyCode::Char('d')) => Some(Action::DeleteHighlight),
        (_, KeyCode::Tab) => Some(Action::ToggleFocus),
        _ => None,
    }
}
