use super::{Component, EventResult};
use crate::state::AppState;
use cltlab_core::DistributionKind;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Tabs},
};

/// Selector bar for the five distributions, keyed 1-5.
pub struct DistBar;

impl Component for DistBar {
    fn handle_key(&mut self, key: KeyEvent, state: &mut AppState) -> EventResult {
        // Digits belong to the field value while editing.
        if state.editing {
            return EventResult::NotHandled;
        }

        let kind = match key.code {
            KeyCode::Char('1') => DistributionKind::Binomial,
            KeyCode::Char('2') => DistributionKind::Exponential,
            KeyCode::Char('3') => DistributionKind::Uniform,
            KeyCode::Char('4') => DistributionKind::Poisson,
            KeyCode::Char('5') => DistributionKind::Geometric,
            _ => return EventResult::NotHandled,
        };
        state.select(kind);
        EventResult::Handled
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, state: &AppState) {
        let titles: Vec<Line> = DistributionKind::ALL
            .iter()
            .enumerate()
            .map(|(idx, kind)| {
                let content = format!("[{}] {}", idx + 1, kind.name());

                if *kind == state.selected {
                    Line::from(Span::styled(
                        content,
                        Style::default()
                            .fg(Color::Yellow)
                            .add_modifier(Modifier::BOLD),
                    ))
                } else {
                    Line::from(Span::styled(content, Style::default().fg(Color::Gray)))
                }
            })
            .collect();

        let tabs = Tabs::new(titles)
            .block(Block::default().borders(Borders::BOTTOM))
            .select(state.selected.index())
            .style(Style::default())
            .highlight_style(
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            );

        frame.render_widget(tabs, area);
    }
}
