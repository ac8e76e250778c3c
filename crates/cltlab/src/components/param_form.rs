use super::{Component, EventResult};
use crate::state::{AppState, ParamField};
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

/// The parameter form for the selected distribution.
///
/// Navigation mode moves focus between fields; edit mode types into the
/// focused field. All form data lives in `AppState` so the component itself
/// stays stateless.
pub struct ParamForm;

impl ParamForm {
    pub fn new() -> Self {
        Self
    }
}

impl Component for ParamForm {
    fn handle_key(&mut self, key: KeyEvent, state: &mut AppState) -> EventResult {
        if state.editing {
            handle_editing_key(key, state)
        } else {
            handle_navigation_key(key, state)
        }
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, state: &AppState) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan))
            .title(format!(" {} Parameters ", state.selected.name()));

        let inner = block.inner(area);
        frame.render_widget(block, area);

        // Each field: 1 line label + 3 lines input box.
        let mut constraints = vec![Constraint::Length(1)];
        for _ in &state.fields {
            constraints.push(Constraint::Length(4));
        }
        constraints.push(Constraint::Min(0));

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints(constraints)
            .split(inner);

        for (idx, field) in state.fields.iter().enumerate() {
            let is_focused = idx == state.focused_field;
            render_field(frame, chunks[idx + 1], field, is_focused, state.editing);
        }
    }
}

fn render_field(
    frame: &mut Frame,
    area: Rect,
    field: &ParamField,
    is_focused: bool,
    is_editing: bool,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Length(3)])
        .split(area);

    let label_style = if is_focused {
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().add_modifier(Modifier::BOLD)
    };
    let label = Paragraph::new(Line::from(Span::styled(field.label, label_style)));
    frame.render_widget(label, chunks[0]);

    let border_color = match (is_focused, is_editing) {
        (true, true) => Color::Cyan,
        (true, false) => Color::Yellow,
        _ => Color::DarkGray,
    };
    let input_block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));
    let input_inner = input_block.inner(chunks[1]);
    frame.render_widget(input_block, chunks[1]);

    let line = if is_focused && is_editing {
        cursor_line(&field.value, field.cursor_pos)
    } else {
        Line::from(Span::styled(
            field.value.clone(),
            Style::default().fg(Color::White),
        ))
    };
    frame.render_widget(Paragraph::new(line), input_inner);
}

/// Value text with the cursor cell rendered reversed.
fn cursor_line(value: &str, cursor_pos: usize) -> Line<'static> {
    let before: String = value.chars().take(cursor_pos).collect();
    let at: String = value.chars().skip(cursor_pos).take(1).collect();
    let after: String = value.chars().skip(cursor_pos + 1).collect();

    let cursor_span = if at.is_empty() {
        Span::styled(" ".to_string(), Style::default().add_modifier(Modifier::REVERSED))
    } else {
        Span::styled(at, Style::default().add_modifier(Modifier::REVERSED))
    };

    Line::from(vec![
        Span::styled(before, Style::default().fg(Color::White)),
        cursor_span,
        Span::styled(after, Style::default().fg(Color::White)),
    ])
}

fn handle_editing_key(key: KeyEvent, state: &mut AppState) -> EventResult {
    let field = &mut state.fields[state.focused_field];

    match key.code {
        KeyCode::Enter | KeyCode::Esc => {
            state.editing = false;
            EventResult::Handled
        }
        KeyCode::Backspace => {
            if field.cursor_pos > 0 {
                field.cursor_pos -= 1;
                field.value.remove(field.cursor_pos);
            }
            EventResult::Handled
        }
        KeyCode::Delete => {
            if field.cursor_pos < field.value.len() {
                field.value.remove(field.cursor_pos);
            }
            EventResult::Handled
        }
        KeyCode::Left => {
            field.cursor_pos = field.cursor_pos.saturating_sub(1);
            EventResult::Handled
        }
        KeyCode::Right => {
            if field.cursor_pos < field.value.len() {
                field.cursor_pos += 1;
            }
            EventResult::Handled
        }
        KeyCode::Home => {
            field.cursor_pos = 0;
            EventResult::Handled
        }
        KeyCode::End => {
            field.cursor_pos = field.value.len();
            EventResult::Handled
        }
        KeyCode::Char(c) => {
            // Numeric fields only.
            if c.is_ascii_digit() || c == '.' || c == '-' {
                field.value.insert(field.cursor_pos, c);
                field.cursor_pos += 1;
            }
            EventResult::Handled
        }
        _ => EventResult::Handled,
    }
}

fn handle_navigation_key(key: KeyEvent, state: &mut AppState) -> EventResult {
    match key.code {
        KeyCode::Enter | KeyCode::Char('e') => {
            state.editing = true;
            let field = &mut state.fields[state.focused_field];
            field.cursor_pos = field.value.len();
            EventResult::Handled
        }
        KeyCode::Tab | KeyCode::Char('j') | KeyCode::Down => {
            state.focused_field = (state.focused_field + 1) % state.fields.len();
            EventResult::Handled
        }
        KeyCode::BackTab | KeyCode::Char('k') | KeyCode::Up => {
            if state.focused_field == 0 {
                state.focused_field = state.fields.len() - 1;
            } else {
                state.focused_field -= 1;
            }
            EventResult::Handled
        }
        _ => EventResult::NotHandled,
    }
}
