use std::io;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use rand::{SeedableRng, rngs::SmallRng};
use ratatui::{
    DefaultTerminal, Frame,
    layout::{Constraint, Direction, Layout, Rect},
};

use cltlab_core::{generate, mean, sample_means, std_dev};

use crate::commentary;
use crate::components::{
    Component, EventResult, charts::ChartPanel, dist_bar::DistBar, param_form::ParamForm,
    status_bar::StatusBar,
};
use crate::state::{AppState, GenerationOutcome};

pub struct App {
    state: AppState,
    rng: SmallRng,
    dist_bar: DistBar,
    param_form: ParamForm,
    chart_panel: ChartPanel,
    status_bar: StatusBar,
}

impl App {
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => {
                tracing::info!(seed, "Using fixed seed");
                SmallRng::seed_from_u64(seed)
            }
            None => SmallRng::from_os_rng(),
        };

        Self {
            state: AppState::default(),
            rng,
            dist_bar: DistBar,
            param_form: ParamForm::new(),
            chart_panel: ChartPanel::new(),
            status_bar: StatusBar::new(),
        }
    }

    /// runs the application's main loop until the user quits
    pub fn run(&mut self, terminal: &mut DefaultTerminal) -> color_eyre::Result<()> {
        while !self.state.exit {
            terminal.draw(|frame| self.draw(frame))?;
            self.handle_events()?;
        }
        Ok(())
    }

    fn draw(&mut self, frame: &mut Frame) {
        // Main layout: selector bar, content, status bar
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(2), // Distribution selector
                Constraint::Min(0),    // Content
                Constraint::Length(2), // Status bar
            ])
            .split(frame.area());

        self.dist_bar.render(frame, chunks[0], &self.state);
        self.render_content(frame, chunks[1]);
        self.status_bar.render(frame, chunks[2], &self.state);
    }

    fn render_content(&mut self, frame: &mut Frame, area: Rect) {
        // Form column on the left, figure and commentary on the right.
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(36), Constraint::Min(0)])
            .split(area);

        self.param_form.render(frame, columns[0], &self.state);

        let right = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(10), Constraint::Length(8)])
            .split(columns[1]);

        self.chart_panel.render(frame, right[0], &self.state);
        commentary::render(frame, right[1], &self.state);
    }

    fn handle_events(&mut self) -> io::Result<()> {
        match event::read()? {
            Event::Key(key_event) if key_event.kind == KeyEventKind::Press => {
                self.handle_key_event(key_event)
            }
            _ => {}
        };
        Ok(())
    }

    fn handle_key_event(&mut self, key_event: KeyEvent) {
        // While editing, every key belongs to the form.
        if self.state.editing {
            self.param_form.handle_key(key_event, &mut self.state);
            return;
        }

        // Global key bindings
        match key_event.code {
            KeyCode::Char('q') if key_event.modifiers.is_empty() => {
                self.state.exit = true;
                return;
            }
            KeyCode::Char('c') if key_event.modifiers.contains(KeyModifiers::CONTROL) => {
                self.state.exit = true;
                return;
            }
            KeyCode::Char('g') if key_event.modifiers.is_empty() => {
                self.generate_and_plot();
                return;
            }
            KeyCode::Esc => {
                self.state.clear_error();
                return;
            }
            _ => {}
        }

        if self.dist_bar.handle_key(key_event, &mut self.state) == EventResult::Handled {
            return;
        }

        self.param_form.handle_key(key_event, &mut self.state);
    }

    /// Parse the form, run the generation pipeline, and stash the outcome
    /// for the chart and commentary panels. Failures land in the status bar.
    fn generate_and_plot(&mut self) {
        let spec = match self.state.parse_spec() {
            Ok(spec) => spec,
            Err(message) => {
                tracing::warn!(%message, "Rejected form input");
                self.state.set_error(message);
                return;
            }
        };

        match generate(&mut self.rng, &spec) {
            Ok(samples) => {
                let pooled = samples.pooled();
                let means = sample_means(&samples);
                let mu = mean(&means);
                let sigma = std_dev(&means);

                tracing::info!(
                    kind = spec.kind().name(),
                    num_samples = samples.num_samples(),
                    draws = pooled.len(),
                    mu,
                    sigma,
                    "Generated batch"
                );

                self.state.outcome = Some(GenerationOutcome {
                    spec,
                    pooled,
                    means,
                    mu,
                    sigma,
                });
                self.state.clear_error();
            }
            Err(err) => {
                tracing::warn!(error = %err, "Generation failed");
                self.state.set_error(err.to_string());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cltlab_core::DistributionKind;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn seeded_app() -> App {
        App::new(Some(42))
    }

    #[test]
    fn generate_key_produces_an_outcome() {
        let mut app = seeded_app();
        app.handle_key_event(key(KeyCode::Char('g')));

        let outcome = app.state.outcome.as_ref().unwrap();
        assert_eq!(outcome.spec.kind(), DistributionKind::Binomial);
        assert_eq!(outcome.means.len(), 200);
        assert_eq!(outcome.pooled.len(), 200 * 100);
        assert!(app.state.error_message.is_none());
    }

    #[test]
    fn same_seed_reproduces_the_run() {
        let mut a = seeded_app();
        let mut b = seeded_app();
        a.generate_and_plot();
        b.generate_and_plot();

        assert_eq!(
            a.state.outcome.as_ref().unwrap().means,
            b.state.outcome.as_ref().unwrap().means
        );
    }

    #[test]
    fn bad_form_input_sets_error_and_keeps_last_outcome() {
        let mut app = seeded_app();
        app.generate_and_plot();
        assert!(app.state.outcome.is_some());

        app.state.fields[0].value = "2.5".to_string();
        app.generate_and_plot();

        assert!(app.state.error_message.is_some());
        assert!(app.state.outcome.is_some());
    }

    #[test]
    fn quit_key_sets_exit() {
        let mut app = seeded_app();
        app.handle_key_event(key(KeyCode::Char('q')));
        assert!(app.state.exit);
    }

    #[test]
    fn digit_keys_switch_distribution_outside_editing() {
        let mut app = seeded_app();
        app.handle_key_event(key(KeyCode::Char('4')));
        assert_eq!(app.state.selected, DistributionKind::Poisson);
    }

    #[test]
    fn digits_feed_the_field_while_editing() {
        let mut app = seeded_app();
        app.state.editing = true;
        app.state.fields[0].value.clear();
        app.state.fields[0].cursor_pos = 0;

        app.handle_key_event(key(KeyCode::Char('4')));

        assert_eq!(app.state.selected, DistributionKind::Binomial);
        assert_eq!(app.state.fields[0].value, "4");
    }
}
