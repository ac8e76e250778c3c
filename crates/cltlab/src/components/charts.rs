//! The two-panel figure: pooled raw draws on the left, sample means with a
//! fitted normal curve on the right.
//!
//! Histograms are drawn with sub-character block glyphs; overlay curves are
//! drawn as dot glyphs at their count-scaled height, so a well-fitted curve
//! visually tracks the bar tops.

use super::{Component, EventResult};
use crate::state::AppState;
use crate::util::format::format_value;
use cltlab_core::{
    DistributionKind, HISTOGRAM_BINS, Histogram, density_overlay, mean, normal_overlay,
};
use crossterm::event::KeyEvent;
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

/// Block characters for sub-character precision (from empty to full)
const BIN_CHARS: [&str; 9] = [" ", "▁", "▂", "▃", "▄", "▅", "▆", "▇", "█"];

/// Glyph used for the overlay curves.
const CURVE_CHAR: &str = "●";

/// Histogram color per distribution.
fn kind_color(kind: DistributionKind) -> Color {
    match kind {
        DistributionKind::Binomial => Color::Green,
        DistributionKind::Exponential => Color::Blue,
        DistributionKind::Uniform => Color::Red,
        DistributionKind::Poisson => Color::Magenta,
        // Orange from the 256-color palette.
        DistributionKind::Geometric => Color::Indexed(208),
    }
}

pub struct ChartPanel;

impl ChartPanel {
    pub fn new() -> Self {
        Self
    }
}

impl Component for ChartPanel {
    fn handle_key(&mut self, _key: KeyEvent, _state: &mut AppState) -> EventResult {
        EventResult::NotHandled
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, state: &AppState) {
        let Some(outcome) = &state.outcome else {
            let msg = Paragraph::new("No figure yet. Set parameters and press 'g' to generate.")
                .style(Style::default().fg(Color::DarkGray))
                .block(Block::default().borders(Borders::ALL).title(" Figure "));
            frame.render_widget(msg, area);
            return;
        };

        let kind = outcome.spec.kind();
        let color = kind_color(kind);

        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(area);

        // Left panel: pooled raw draws with a smoothed density overlay.
        match Histogram::from_values(&outcome.pooled, HISTOGRAM_BINS) {
            Some(hist) => {
                let curve = density_overlay(&outcome.pooled, &hist);
                let footer = range_footer(
                    &hist,
                    Span::styled(
                        format!("mean={}", format_value(mean(&outcome.pooled))),
                        Style::default().fg(Color::Yellow),
                    ),
                );
                render_histogram(
                    frame,
                    chunks[0],
                    &format!(" Samples ({}) ", kind.name()),
                    &hist,
                    color,
                    curve.as_ref().map(|c| c.points.as_slice()),
                    footer,
                );
            }
            None => render_placeholder(frame, chunks[0], " Samples ", "No draws to plot"),
        }

        // Right panel: sample means with the count-scaled normal curve.
        match Histogram::from_values(&outcome.means, HISTOGRAM_BINS) {
            Some(hist) => {
                // None when the means have zero spread; the histogram spike
                // still renders, the curve is simply skipped.
                let curve = normal_overlay(&outcome.means, &hist);
                let footer = range_footer(
                    &hist,
                    Span::styled(
                        format!(
                            "μ={} σ={}",
                            format_value(outcome.mu),
                            format_value(outcome.sigma)
                        ),
                        Style::default().fg(Color::Yellow),
                    ),
                );
                render_histogram(
                    frame,
                    chunks[1],
                    " Sample Means + Normal Fit ",
                    &hist,
                    color,
                    curve.as_ref().map(|c| c.points.as_slice()),
                    footer,
                );
            }
            None => render_placeholder(frame, chunks[1], " Sample Means ", "No means to plot"),
        }
    }
}

fn render_placeholder(frame: &mut Frame, area: Rect, title: &str, text: &str) {
    let msg = Paragraph::new(text)
        .style(Style::default().fg(Color::DarkGray))
        .block(Block::default().borders(Borders::ALL).title(title.to_string()));
    frame.render_widget(msg, area);
}

/// Axis label line: range endpoints flanking a centered stat annotation.
fn range_footer(hist: &Histogram, center: Span<'static>) -> Line<'static> {
    Line::from(vec![
        Span::styled(
            format!("{:>6}", format_value(hist.min)),
            Style::default().fg(Color::DarkGray),
        ),
        Span::raw("  "),
        center,
        Span::raw("  "),
        Span::styled(
            format!("{:<6}", format_value(hist.max)),
            Style::default().fg(Color::DarkGray),
        ),
    ])
}

/// Draw one histogram panel with an optional overlay curve.
fn render_histogram(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    hist: &Histogram,
    color: Color,
    curve: Option<&[(f64, f64)]>,
    footer: Line<'static>,
) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(title.to_string());
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let num_bins = hist.counts.len();
    let height = (inner.height as usize).saturating_sub(1);

    if height < 3 || (inner.width as usize) < num_bins {
        let msg = Paragraph::new("Area too small").style(Style::default().fg(Color::DarkGray));
        frame.render_widget(msg, inner);
        return;
    }

    let curve_max = curve
        .map(|points| points.iter().map(|&(_, y)| y).fold(0.0_f64, f64::max))
        .unwrap_or(0.0);
    let max_val = (hist.max_count() as f64).max(curve_max);
    if max_val <= 0.0 {
        let msg = Paragraph::new("No data in bins").style(Style::default().fg(Color::DarkGray));
        frame.render_widget(msg, inner);
        return;
    }

    let height_units = height * 8;
    let bar_heights: Vec<usize> = hist
        .counts
        .iter()
        .map(|&c| scale_to_units(c as f64, max_val, height_units))
        .collect();
    let curve_heights: Option<Vec<usize>> = curve.map(|points| {
        (0..num_bins)
            .map(|i| {
                let y = curve_value_at(points, hist, i);
                scale_to_units(y, max_val, height_units)
            })
            .collect()
    });

    let x_offset = (inner.width as usize).saturating_sub(num_bins) / 2;

    for row in 0..height {
        let row_base = (height - 1 - row) * 8;
        let row_top = row_base + 8;
        let mut spans = Vec::new();

        if x_offset > 0 {
            spans.push(Span::raw(" ".repeat(x_offset)));
        }

        for i in 0..num_bins {
            let curve_here = curve_heights
                .as_ref()
                .map(|heights| heights[i])
                .filter(|&u| u > row_base && u <= row_top);

            let span = if curve_here.is_some() {
                Span::styled(
                    CURVE_CHAR,
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD),
                )
            } else {
                let bar_h = bar_heights[i];
                let char_to_use = if bar_h >= row_top {
                    "█"
                } else if bar_h > row_base {
                    BIN_CHARS[(bar_h - row_base).min(8)]
                } else {
                    " "
                };
                Span::styled(char_to_use, Style::default().fg(color))
            };
            spans.push(span);
        }

        let row_area = Rect::new(inner.x, inner.y + row as u16, inner.width, 1);
        frame.render_widget(Paragraph::new(Line::from(spans)), row_area);
    }

    let label_area = Rect::new(inner.x, inner.y + height as u16, inner.width, 1);
    frame.render_widget(Paragraph::new(footer), label_area);
}

/// Map a value into vertical eighth-cell units.
fn scale_to_units(value: f64, max_val: f64, height_units: usize) -> usize {
    ((value / max_val) * height_units as f64).round() as usize
}

/// Overlay height at the center of bin `i`, sampled from the curve's
/// evaluation grid by nearest point.
fn curve_value_at(points: &[(f64, f64)], hist: &Histogram, i: usize) -> f64 {
    if points.is_empty() {
        return 0.0;
    }
    let span = hist.max - hist.min;
    if span <= 0.0 {
        return 0.0;
    }
    let t = ((hist.bin_center(i) - hist.min) / span).clamp(0.0, 1.0);
    let idx = (t * (points.len() - 1) as f64).round() as usize;
    points[idx].1
}
