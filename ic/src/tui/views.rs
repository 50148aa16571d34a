//! TUI views and rendering
//!
//! All rendering logic is contained here. The views module is responsible
//! for drawing the form based on AppState, but never modifies state.

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use tracing::trace;

use crate::composer::OutputAction;

use super::input::TextInput;
use super::state::{AppState, Field};

/// Form colors
mod colors {
    use ratatui::style::Color;

    pub const HEADER: Color = Color::Rgb(0, 255, 255); // Cyan
    pub const KEYBIND: Color = Color::Rgb(0, 255, 255); // Cyan
    pub const FOCUS: Color = Color::Rgb(0, 255, 127); // Spring green
    pub const TAG: Color = Color::Rgb(100, 149, 237); // Cornflower blue
    pub const ERROR: Color = Color::Rgb(220, 20, 60); // Crimson
    pub const PREVIEW: Color = Color::Rgb(255, 215, 0); // Gold
    pub const SELECTED_BG: Color = Color::Rgb(40, 40, 40);
    pub const DIM: Color = Color::DarkGray;
}

/// Main render function
pub fn render(state: &AppState, frame: &mut Frame) {
    trace!(focus = ?state.focus, "render: called");
    let error_height = if state.task_error.is_some() { 1 } else { 0 };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),            // Header
            Constraint::Length(3),            // Task
            Constraint::Length(error_height), // Task error
            Constraint::Min(5),               // Mood
            Constraint::Length(3),            // Reason
            Constraint::Length(3),            // Preview
            Constraint::Length(1),            // Footer
        ])
        .split(frame.area());

    render_header(frame, chunks[0]);
    render_text_field(state, Field::Task, &state.task, frame, chunks[1]);
    if let Some(ref error) = state.task_error {
        frame.render_widget(
            Paragraph::new(Span::styled(format!(" {}", error), Style::default().fg(colors::ERROR))),
            chunks[2],
        );
    }
    render_mood_picker(state, frame, chunks[3]);
    render_text_field(state, Field::Reason, &state.reason, frame, chunks[4]);
    render_preview(state, frame, chunks[5]);
    render_footer(frame, chunks[6]);

    if state.show_help {
        render_help_overlay(frame, frame.area());
    }
}

fn render_header(frame: &mut Frame, area: Rect) {
    let header = Paragraph::new(Line::from(vec![
        Span::styled(
            "Clarify Intention",
            Style::default().fg(colors::HEADER).add_modifier(Modifier::BOLD),
        ),
        Span::styled("  [F1] Help", Style::default().fg(colors::DIM)),
    ]));
    frame.render_widget(header, area);
}

fn field_block(state: &AppState, field: Field) -> Block<'static> {
    let focused = state.focus == field;
    let border_style = if focused {
        Style::default().fg(colors::FOCUS)
    } else {
        Style::default().fg(colors::DIM)
    };
    Block::default()
        .borders(Borders::ALL)
        .border_style(border_style)
        .title(format!(" {} ", field.title()))
}

/// Render a text field with its cursor (underscore at the end, block in the middle)
fn render_text_field(state: &AppState, field: Field, input: &TextInput, frame: &mut Frame, area: Rect) {
    trace!(?field, len = input.value().len(), "render_text_field: called");
    let focused = state.focus == field;

    let line = if input.is_empty() && !focused {
        Line::from(Span::styled(field.placeholder(), Style::default().fg(colors::DIM)))
    } else if input.is_empty() {
        Line::from(vec![
            Span::styled("_", Style::default().add_modifier(Modifier::SLOW_BLINK)),
            Span::styled(format!(" {}", field.placeholder()), Style::default().fg(colors::DIM)),
        ])
    } else if !focused {
        Line::from(input.value().to_string())
    } else {
        let (before_cursor, after_cursor) = input.split_at_cursor();
        let mut spans = vec![Span::raw(before_cursor.to_string())];

        let mut chars = after_cursor.chars();
        match chars.next() {
            None => spans.push(Span::styled("_", Style::default().add_modifier(Modifier::SLOW_BLINK))),
            Some(c) => {
                spans.push(Span::styled(
                    c.to_string(),
                    Style::default().add_modifier(Modifier::REVERSED),
                ));
                let remaining: String = chars.collect();
                if !remaining.is_empty() {
                    spans.push(Span::raw(remaining));
                }
            }
        }
        Line::from(spans)
    };

    // Keep the cursor in view once the text outgrows the box
    let offset = if focused {
        let inner_width = area.width.saturating_sub(2) as usize;
        input.cursor_column().saturating_sub(inner_width.saturating_sub(1))
    } else {
        0
    };

    let paragraph = Paragraph::new(line)
        .block(field_block(state, field))
        .scroll((0, offset.min(u16::MAX as usize) as u16));
    frame.render_widget(paragraph, area);
}

/// First option row to draw so that `highlight` stays within `rows` rows
fn option_scroll(highlight: usize, rows: usize) -> usize {
    if rows == 0 {
        return highlight;
    }
    (highlight + 1).saturating_sub(rows)
}

/// Render the mood tag picker: selected tags, filter, then options
fn render_mood_picker(state: &AppState, frame: &mut Frame, area: Rect) {
    trace!(selected = state.mood.len(), filter = %state.mood_filter, "render_mood_picker: called");
    let focused = state.focus == Field::Mood;
    let mut lines = Vec::new();

    // Selected tags in selection order
    if state.mood.is_empty() {
        lines.push(Line::from(Span::styled(
            Field::Mood.placeholder(),
            Style::default().fg(colors::DIM),
        )));
    } else {
        let mut spans = Vec::new();
        for label in &state.mood {
            spans.push(Span::styled(
                format!("[{}]", label),
                Style::default().fg(colors::TAG).add_modifier(Modifier::BOLD),
            ));
            spans.push(Span::raw(" "));
        }
        lines.push(Line::from(spans));
    }

    if focused {
        lines.push(Line::from(vec![
            Span::styled("/", Style::default().fg(colors::KEYBIND)),
            Span::raw(state.mood_filter.clone()),
            Span::styled("_", Style::default().add_modifier(Modifier::SLOW_BLINK)),
        ]));

        let visible = state.visible_moods();
        if state.catalog.is_empty() {
            lines.push(Line::from(Span::styled(
                "No moods configured (set custom-moods)",
                Style::default().fg(colors::DIM),
            )));
        } else if visible.is_empty() {
            lines.push(Line::from(Span::styled("No matching moods", Style::default().fg(colors::DIM))));
        }

        // Options get whatever rows the border and the lines above leave
        let rows = (area.height.saturating_sub(2) as usize).saturating_sub(lines.len());
        let start = option_scroll(state.mood_highlight, rows);

        for (row, &idx) in visible.iter().enumerate().skip(start).take(rows) {
            let label = &state.catalog.labels()[idx];
            let marker = if state.is_selected(label) { "[x] " } else { "[ ] " };
            let style = if row == state.mood_highlight {
                Style::default().bg(colors::SELECTED_BG).add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            lines.push(Line::from(Span::styled(format!("{}{}", marker, label), style)));
        }
    }

    let picker = Paragraph::new(lines).block(field_block(state, Field::Mood));
    frame.render_widget(picker, area);
}

fn render_preview(state: &AppState, frame: &mut Frame, area: Rect) {
    let content = match state.preview() {
        Some(sentence) => Span::styled(sentence, Style::default().fg(colors::PREVIEW)),
        None => Span::styled("Fill in a task to see your intention", Style::default().fg(colors::DIM)),
    };
    let preview = Paragraph::new(Line::from(content))
        .block(Block::default().borders(Borders::TOP).title(" Preview "))
        .wrap(Wrap { trim: false });
    frame.render_widget(preview, area);
}

fn render_footer(frame: &mut Frame, area: Rect) {
    let keybinds = [
        ("[Ctrl+P]", OutputAction::Paste.title()),
        ("[Ctrl+Y]", OutputAction::Copy.title()),
        ("[Tab]", "Next Field"),
        ("[Esc]", "Cancel"),
    ];

    let mut spans = Vec::new();
    for (key, action) in keybinds {
        spans.push(Span::styled(key, Style::default().fg(colors::KEYBIND)));
        spans.push(Span::raw(format!(" {}  ", action)));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

/// Render help overlay
fn render_help_overlay(frame: &mut Frame, area: Rect) {
    let help_text = vec![
        Line::from(Span::styled(
            "Actions",
            Style::default().fg(colors::HEADER).add_modifier(Modifier::BOLD),
        )),
        Line::from(format!("  Ctrl+P      {}", OutputAction::Paste.title())),
        Line::from("  Enter       Paste Intention (in Reason)"),
        Line::from(format!("  Ctrl+Y      {}", OutputAction::Copy.title())),
        Line::from("  Esc/Ctrl+C  Cancel"),
        Line::from(""),
        Line::from(Span::styled(
            "Fields",
            Style::default().fg(colors::HEADER).add_modifier(Modifier::BOLD),
        )),
        Line::from("  Tab/S-Tab   Next / previous field"),
        Line::from("  Up/Down     Move between fields (text)"),
        Line::from(""),
        Line::from(Span::styled(
            "Mood picker",
            Style::default().fg(colors::HEADER).add_modifier(Modifier::BOLD),
        )),
        Line::from("  type        Filter moods"),
        Line::from("  Up/Down     Move highlight"),
        Line::from("  Enter/Space Toggle mood"),
        Line::from("  Backspace   Remove last mood"),
        Line::from(""),
        Line::from(Span::styled("Press any key to close", Style::default().fg(colors::DIM))),
    ];

    let width = 48.min(area.width);
    let height = (help_text.len() as u16 + 2).min(area.height);
    let popup = Rect {
        x: area.x + (area.width.saturating_sub(width)) / 2,
        y: area.y + (area.height.saturating_sub(height)) / 2,
        width,
        height,
    };

    frame.render_widget(Clear, popup);
    frame.render_widget(
        Paragraph::new(help_text).block(Block::default().borders(Borders::ALL).title(" Help ")),
        popup,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::composer::IntentionForm;
    use crate::mood::MoodCatalog;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn empty_state(moods: &str) -> AppState {
        AppState::from_form(MoodCatalog::parse(moods), IntentionForm::default())
    }

    fn rendered(state: &AppState) -> String {
        let backend = TestBackend::new(80, 24);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|frame| render(state, frame)).unwrap();
        let buffer = terminal.backend().buffer().clone();
        buffer.content().iter().map(|cell| cell.symbol()).collect()
    }

    #[test]
    fn test_render_empty_form_shows_placeholders() {
        let mut state = empty_state("Focused, Calm");
        state.focus = Field::Mood;
        let screen = rendered(&state);
        assert!(screen.contains("Clarify Intention"));
        assert!(screen.contains("What do you want to do?"));
        assert!(screen.contains("Why are you doing it?"));
        assert!(screen.contains("[ ] Focused"));
        assert!(screen.contains("Paste Intention"));
    }

    #[test]
    fn test_render_task_error() {
        let mut state = empty_state("");
        state.set_task_error("Task is required");
        let screen = rendered(&state);
        assert!(screen.contains("Task is required"));
    }

    #[test]
    fn test_render_preview() {
        let mut state = empty_state("");
        for c in "nap".chars() {
            state.task.insert(c);
        }
        let screen = rendered(&state);
        assert!(screen.contains("I want to nap:"));
    }

    #[test]
    fn test_render_help_overlay() {
        let mut state = empty_state("");
        state.show_help = true;
        let screen = rendered(&state);
        assert!(screen.contains("Press any key to close"));
    }

    #[test]
    fn test_mood_picker_scrolls_to_highlight() {
        let moods: Vec<String> = (0..30).map(|i| format!("Mood{:02}", i)).collect();
        let mut state = empty_state(&moods.join(", "));
        state.focus = Field::Mood;

        let screen = rendered(&state);
        assert!(screen.contains("[ ] Mood00"));
        assert!(!screen.contains("Mood25"));

        for _ in 0..25 {
            state.highlight_next();
        }
        assert_eq!(state.mood_highlight, 25);
        let screen = rendered(&state);
        assert!(screen.contains("[ ] Mood25"));
        assert!(!screen.contains("Mood00"));
        assert!(!screen.contains("Mood26"));
    }

    #[test]
    fn test_option_scroll() {
        assert_eq!(option_scroll(0, 9), 0);
        assert_eq!(option_scroll(8, 9), 0);
        assert_eq!(option_scroll(9, 9), 1);
        assert_eq!(option_scroll(25, 9), 17);
    }

    #[test]
    fn test_long_task_scrolls_to_cursor() {
        let long_task = format!("{}END", "a".repeat(90));
        let state = AppState::from_form(MoodCatalog::default(), IntentionForm::new(long_task.as_str(), vec![], ""));
        assert_eq!(state.focus, Field::Task);

        let screen = rendered(&state);
        assert!(screen.contains("END_"));
    }
}
