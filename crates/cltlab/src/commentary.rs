//! Teaching notes shown under the figure after a generation.

use crate::state::AppState;
use crate::util::format::format_value;
use cltlab_core::DistributionKind;
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

/// Notes on what the histograms show for each distribution.
fn notes_for(kind: DistributionKind) -> &'static [&'static str] {
    match kind {
        DistributionKind::Binomial => &[
            "The binomial distribution models the number of successes in a \
             Bernoulli process of n independent trials.",
            "With p near 0.5 the histogram is symmetric around n/2. Small p \
             skews the mass left toward low counts, large p skews it right.",
        ],
        DistributionKind::Exponential => &[
            "The exponential distribution models waiting times between events \
             in a Poisson process, with mean 1/λ.",
            "Its long right tail makes small values common and large values \
             rare, so the raw histogram drops off sharply to the right.",
        ],
        DistributionKind::Uniform => &[
            "The uniform distribution gives every value in [a, b) the same \
             probability, so the raw histogram is flat across the interval \
             with no preferred value.",
        ],
        DistributionKind::Poisson => &[
            "The Poisson distribution models counts of rare events in a fixed \
             interval, with both mean and variance equal to λ.",
        ],
        DistributionKind::Geometric => &[
            "The geometric distribution counts independent trials up to and \
             including the first success in a Bernoulli process.",
            "Smaller p stretches the right tail, since more failures tend to \
             precede the first success.",
        ],
    }
}

/// Closing line shown for every distribution once means are on screen.
const CLT_NOTE: &str = "However the raw draws are shaped, the histogram of \
     per-sample means tends toward the fitted normal curve as the number of \
     samples grows.";

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let block = Block::default().borders(Borders::ALL).title(" Commentary ");

    let mut lines: Vec<Line> = Vec::new();
    match &state.outcome {
        Some(outcome) => {
            let kind = outcome.spec.kind();
            lines.push(Line::from(Span::styled(
                format!(
                    "{} | μ={} σ={}",
                    kind.name(),
                    format_value(outcome.mu),
                    format_value(outcome.sigma)
                ),
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            )));
            for note in notes_for(kind) {
                lines.push(Line::from(*note));
            }
            lines.push(Line::from(Span::styled(
                CLT_NOTE,
                Style::default().fg(Color::Cyan),
            )));
        }
        None => {
            lines.push(Line::from(Span::styled(
                "Pick a distribution, adjust its parameters, and press 'g'.",
                Style::default().fg(Color::DarkGray),
            )));
        }
    }

    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, area);
}
