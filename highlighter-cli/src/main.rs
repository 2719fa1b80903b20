//! Highlighter CLI - Terminal-based interactive text highlighter

mod args;
mod io;
mod logging;
mod ui;

use std::io::stdout;

use anyhow::{Context, Result};
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::prelude::*;
use tracing::{error, info};

use highlighter_core::{segment, Action, App, Highlight, Mode};

use crate::args::{Command, USAGE};

fn main() -> Result<()> {
    match args::parse(std::env::args().skip(1))? {
        Command::Help => {
            println!("{USAGE}");
            Ok(())
        }
        Command::Segments {
            text_path,
            highlights_path,
        } => print_segments(&text_path, highlights_path.as_deref()),
        Command::Interactive {
            text_path,
            highlights_path,
            class,
        } => run_interactive(text_path.as_deref(), highlights_path.as_deref(), class.as_deref()),
    }
}

fn load_highlights(path: Option<&str>) -> Result<Vec<Highlight>> {
    match path {
        Some(path) => io::load_highlights(path),
        None => Ok(Vec::new()),
    }
}

/// Print the segment table for a text as JSON
fn print_segments(text_path: &str, highlights_path: Option<&str>) -> Result<()> {
    let text = io::load_text(text_path)?;
    let highlights = load_highlights(highlights_path)?;
    let segments = segment(&text.content, &highlights);
    let json = highlighter_core::segments_to_json(&segments)
        .context("Failed to serialize segments")?;
    println!("{json}");
    Ok(())
}

fn run_interactive(
    text_path: Option<&str>,
    highlights_path: Option<&str>,
    class: Option<&str>,
) -> Result<()> {
    if let Err(e) = logging::init() {
        eprintln!("Logging disabled: {:#}", e);
    }

    // Create app
    let mut app = App::new();
    if let Some(class) = class {
        app.set_class(class);
    }

    // Load file if provided
    if let Some(path) = text_path {
        match io::load_text(path).and_then(|text| Ok((text, load_highlights(highlights_path)?))) {
            Ok((text, highlights)) => {
                info!(path, highlights = highlights.len(), "loaded text");
                app.load_text(&text.title, text.content, highlights);
                app.set_status(&format!("Loaded {}", path));
            }
            Err(e) => {
                error!("{:#}", e);
                app.set_status(&format!("Error: {:#}", e));
            }
        }
    } else {
        app.set_status("No file loaded. Pass a file path as argument.");
    }

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Main loop
    let res = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(e) = res {
        error!("{:#}", e);
        eprintln!("Error: {}", e);
    }

    Ok(())
}

fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()> {
    while app.running {
        terminal.draw(|f| ui::draw(f, app))?;

        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }
            // Clear status on any key
            app.clear_status();

            if app.mode == Mode::Help {
                app.mode = Mode::Normal;
                continue;
            }
            if let Some(action) = key_action(app.mode, key.code) {
                app.dispatch(action);
            }
        }
    }
    Ok(())
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
        KeyCode::Char('0') | KeyCode::Home => Some(Action::MoveToLineStart),
        KeyCode::Char('$') | KeyCode::End => Some(Action::MoveToLineEnd),
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

        (_, KeyCode::Char('q')) => Some(Action::Quit),
        (_, KeyCode::Char('?')) => Some(Action::ShowHelp),
        (_, KeyCode::Char(']')) => Some(Action::NextHighlight),
        (_, KeyCode::Char('[')) => Some(Action::PrevHighlight),
        (_, KeyCode::Char('v')) => Some(Action::EnterVisual),
        (_, KeyCode::Char('d')) => Some(Action::DeleteHighlight),
        (_, KeyCode::Tab) => Some(Action::ToggleFocus),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_action_by_mode() {
        assert_eq!(key_action(Mode::Normal, KeyCode::Char('v')), Some(Action::EnterVisual));
        assert_eq!(key_action(Mode::Visual, KeyCode::Char('v')), None);
        assert_eq!(key_action(Mode::Visual, KeyCode::Enter), Some(Action::CommitSelection));
        assert_eq!(key_action(Mode::Visual, KeyCode::Char('w')), Some(Action::MoveWordForward));
        assert_eq!(key_action(Mode::Normal, KeyCode::Char('q')), Some(Action::Quit));
        assert_eq!(key_action(Mode::Visual, KeyCode::Char('q')), None);
    }

    #[test]
    fn test_keys_drive_a_selection() {
        let mut app = App::new();
        app.load_text("t", "foo bar baz".to_string(), Vec::new());
        for code in [
            KeyCode::Char('w'),
            KeyCode::Char('v'),
            KeyCode::Char('l'),
            KeyCode::Char('l'),
            KeyCode::Char('l'),
            KeyCode::Enter,
        ] {
            if let Some(action) = key_action(app.mode, code) {
                app.dispatch(action);
            }
        }
        assert_eq!(app.highlights(), &[Highlight::new(4, 3)]);
        assert_eq!(app.highlighter.render()[1].text, "bar");
    }
}
