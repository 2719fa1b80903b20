//! Terminal UI rendering for the highlighter CLI

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, Paragraph, Wrap},
    Frame,
};

use highlighter_core::{text::char_slice, App, Focus, Mode};

// Catppuccin Mocha colors
const BASE: Color = Color::Rgb(30, 30, 46);
const SURFACE0: Color = Color::Rgb(49, 50, 68);
const SURFACE1: Color = Color::Rgb(69, 71, 90);
const TEXT: Color = Color::Rgb(205, 214, 244);
const SUBTEXT0: Color = Color::Rgb(166, 173, 200);
const YELLOW: Color = Color::Rgb(249, 226, 175);
const BLUE: Color = Color::Rgb(137, 180, 250);
const MAUVE: Color = Color::Rgb(203, 166, 247);

pub fn draw(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Title bar
            Constraint::Min(0),    // Main content
            Constraint::Length(1), // Status bar
        ])
        .split(frame.area());

    draw_title_bar(frame, app, chunks[0]);
    draw_main_area(frame, app, chunks[1]);
    draw_status_bar(frame, app, chunks[2]);

    if app.mode == Mode::Help {
        draw_help(frame);
    }
}

fn draw_title_bar(frame: &mut Frame, app: &App, area: Rect) {
    let title_text = format!(
        " Highlighter - {} [{} highlights, {} segments, class \"{}\"]",
        app.title,
        app.highlights().len(),
        app.highlighter.segments().len(),
        app.highlighter.class_name(),
    );

    let title_bar = Paragraph::new(title_text).style(Style::default().fg(TEXT).bg(SURFACE0));

    frame.render_widget(title_bar, area);
}

fn draw_main_area(frame: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(0),     // Editor
            Constraint::Length(32), // Sidebar
        ])
        .split(area);

    draw_editor(frame, app, chunks[0]);
    draw_sidebar(frame, app, chunks[1]);
}

/// Style for one char of the text
fn char_style(highlighted: bool, selected: bool, under_cursor: bool) -> Style {
    let mut style = if highlighted {
        Style::default().fg(BASE).bg(YELLOW)
    } else {
        Style::default().fg(TEXT)
    };
    if selected {
        style = style.bg(SURFACE1).fg(TEXT).add_modifier(Modifier::BOLD);
    }
    if under_cursor {
        style = style.add_modifier(Modifier::REVERSED);
    }
    style
}

/// Accumulates chars into lines of spans, merging runs of equal style.
#[derive(Default)]
struct LineBuilder {
    lines: Vec<Line<'static>>,
    spans: Vec<Span<'static>>,
    run: String,
    style: Style,
}

impl LineBuilder {
    fn push(&mut self, ch: char, style: Style) {
        if style != self.style {
            self.flush_run();
            self.style = style;
        }
        self.run.push(ch);
    }

    fn flush_run(&mut self) {
        if !self.run.is_empty() {
            self.spans
                .push(Span::styled(std::mem::take(&mut self.run), self.style));
        }
    }

    fn end_line(&mut self) {
        self.flush_run();
        self.lines.push(Line::from(std::mem::take(&mut self.spans)));
    }

    fn finish(mut self) -> Vec<Line<'static>> {
        self.end_line();
        self.lines
    }
}

/// Build display lines from the rendered spans
fn styled_lines(app: &App) -> Vec<Line<'static>> {
    let selection = app.get_selection_range();
    let cursor = app.cursor.offset();
    let cursor_style = char_style(false, false, true);

    let mut builder = LineBuilder::default();
    for span in app.highlighter.render() {
        for (i, ch) in span.text.chars().enumerate() {
            let offset = span.start + i;
            if ch == '\n' {
                if offset == cursor {
                    builder.push(' ', cursor_style);
                }
                builder.end_line();
                continue;
            }

            let selected = selection.is_some_and(|(start, end)| offset >= start && offset < end);
            builder.push(ch, char_style(span.is_highlighted(), selected, offset == cursor));
        }
    }

    // The cursor may sit just past the last char
    if cursor == app.cursor.end_offset() {
        builder.push(' ', cursor_style);
    }
    builder.finish()
}

fn draw_editor(frame: &mut Frame, app: &App, area: Rect) {
    let editor_style = if app.focus == Focus::Editor {
        Style::default().fg(BLUE)
    } else {
        Style::default().fg(SUBTEXT0)
    };

    let mode_indicator = match app.mode {
        Mode::Visual => " [VISUAL]",
        _ => "",
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(editor_style)
        .title(format!("Text{}", mode_indicator));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let lines = styled_lines(app);

    // Calculate scroll offset based on cursor
    let cursor = app.cursor_pos();
    let visible_height = inner.height as usize;
    let scroll_offset = if cursor.0 >= visible_height {
        cursor.0 - visible_height + 1
    } else {
        0
    };

    let paragraph = Paragraph::new(lines)
        .scroll((scroll_offset as u16, 0))
        .wrap(Wrap { trim: false });

    frame.render_widget(paragraph, inner);
}

fn draw_sidebar(frame: &mut Frame, app: &App, area: Rect) {
    let sidebar_style = if app.focus == Focus::Sidebar {
        Style::default().fg(BLUE)
    } else {
        Style::default().fg(SUBTEXT0)
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(sidebar_style)
        .title(format!("Highlights ({})", app.highlights().len()));

    let items: Vec<ListItem> = app
        .highlights()
        .iter()
        .enumerate()
        .map(|(i, h)| {
            let selected = i == app.sidebar_selected;
            let marker = if selected { ">" } else { " " };

            let preview: String = match h.clamp_to(app.cursor.end_offset()) {
                Some((start, end)) => char_slice(app.text(), start, end)
                    .chars()
                    .take(15)
                    .collect::<String>()
                    .replace('\n', " "),
                None => String::new(),
            };

            let line1 = format!("{} #{} @{}+{}", marker, i, h.start_index, h.num_chars);
            let line2 = format!("   \"{}\"", preview);

            let style = if selected {
                Style::default().fg(TEXT).bg(SURFACE1)
            } else {
                Style::default().fg(TEXT)
            };

            ListItem::new(vec![
                Line::from(Span::styled(line1, style)),
                Line::from(Span::styled(line2, style.fg(SUBTEXT0))),
            ])
        })
        .collect();

    let list = List::new(items).block(block);
    frame.render_widget(list, area);
}

fn draw_status_bar(frame: &mut Frame, app: &App, area: Rect) {
    let mode_str = match app.mode {
        Mode::Normal => "NORMAL",
        Mode::Visual => "VISUAL",
        Mode::Help => "HELP",
    };

    let status = app.status_message.as_deref().unwrap_or("");

    let help_hint = "v select | enter highlight | d delete | tab sidebar | ? help | q quit";

    let status_text = format!(
        " {} | {}",
        mode_str,
        if status.is_empty() { help_hint } else { status },
    );

    let status_bar = Paragraph::new(status_text).style(Style::default().fg(SUBTEXT0).bg(SURFACE0));

    frame.render_widget(status_bar, area);
}

fn draw_help(frame: &mut Frame) {
    let area = centered_rect(60, 18, frame.area());
    frame.render_widget(Clear, area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(BLUE))
        .title("Help (press any key to close)");

    let heading = Style::default().fg(MAUVE).add_modifier(Modifier::BOLD);
    let help_text = vec![
        Line::from(Span::styled("Navigation", heading)),
        Line::from("  h/j/k/l  Move cursor"),
        Line::from("  w/b      Next/previous word"),
        Line::from("  0/$      Line start/end"),
        Line::from("  g/G      Go to top/bottom"),
        Line::from("  ]/[      Next/prev highlight"),
        Line::from("  Tab      Toggle text/sidebar"),
        Line::from(""),
        Line::from(Span::styled("Highlights", heading)),
        Line::from("  v        Start selecting"),
        Line::from("  Enter/a  Highlight the selection"),
        Line::from("  Esc      Cancel selection"),
        Line::from("  d        Delete highlight"),
        Line::from(""),
        Line::from(Span::styled("Press any key to close", Style::default().fg(SUBTEXT0))),
    ];

    let paragraph = Paragraph::new(help_text).block(block);
    frame.render_widget(paragraph, area);
}

fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width.min(area.width), height.min(area.height))
}
