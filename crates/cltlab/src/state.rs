use cltlab_core::{DistributionKind, DistributionSpec};

/// One numeric input in the parameter form.
#[derive(Debug, Clone)]
pub struct ParamField {
    pub label: &'static str,
    pub value: String,
    pub cursor_pos: usize,
}

impl ParamField {
    fn new(label: &'static str, value: impl Into<String>) -> Self {
        let value = value.into();
        let cursor_pos = value.len();
        Self {
            label,
            value,
            cursor_pos,
        }
    }
}

/// Result of one "Generate and Plot" run, held until the next run.
#[derive(Debug, Clone)]
pub struct GenerationOutcome {
    pub spec: DistributionSpec,
    /// Every raw draw, pooled across samples.
    pub pooled: Vec<f64>,
    /// Per-sample means, in sample order.
    pub means: Vec<f64>,
    /// Empirical mean of the sample means.
    pub mu: f64,
    /// Empirical (population) standard deviation of the sample means.
    pub sigma: f64,
}

/// All mutable UI state. Everything here is ephemeral; nothing survives the
/// process.
pub struct AppState {
    pub selected: DistributionKind,
    pub fields: Vec<ParamField>,
    pub focused_field: usize,
    pub editing: bool,
    pub outcome: Option<GenerationOutcome>,
    pub error_message: Option<String>,
    pub exit: bool,
}

impl Default for AppState {
    fn default() -> Self {
        let selected = DistributionKind::Binomial;
        Self {
            selected,
            fields: fields_for(selected),
            focused_field: 0,
            editing: false,
            outcome: None,
            error_message: None,
            exit: false,
        }
    }
}

impl AppState {
    /// Switch the active distribution, resetting the form to its defaults.
    pub fn select(&mut self, kind: DistributionKind) {
        if kind == self.selected {
            return;
        }
        self.selected = kind;
        self.fields = fields_for(kind);
        self.focused_field = 0;
        self.editing = false;
        self.clear_error();
    }

    pub fn set_error(&mut self, message: impl Into<String>) {
        self.error_message = Some(message.into());
    }

    pub fn clear_error(&mut self) {
        self.error_message = None;
    }

    /// Build a `DistributionSpec` from the current form values, enforcing
    /// the input-widget ranges on top of the engine's own domain checks.
    pub fn parse_spec(&self) -> Result<DistributionSpec, String> {
        match self.selected {
            DistributionKind::Binomial => {
                let p = parse_in_range(&self.fields[0], 0.0, 1.0)?;
                let n = parse_count(&self.fields[1])?;
                let m = parse_count(&self.fields[2])?;
                Ok(DistributionSpec::Binomial { n: n as u64, p, m })
            }
            DistributionKind::Exponential => {
                let lambda = parse_in_range(&self.fields[0], 0.1, 10.0)?;
                let n = parse_count(&self.fields[1])?;
                let m = parse_count(&self.fields[2])?;
                Ok(DistributionSpec::Exponential { lambda, n, m })
            }
            DistributionKind::Uniform => {
                let a = parse_in_range(&self.fields[0], 0.0, 10.0)?;
                let b = parse_in_range(&self.fields[1], 0.0, 10.0)?;
                let n = parse_count(&self.fields[2])?;
                let m = parse_count(&self.fields[3])?;
                Ok(DistributionSpec::Uniform { a, b, n, m })
            }
            DistributionKind::Poisson => {
                let lambda = parse_in_range(&self.fields[0], 0.1, 100.0)?;
                let m = parse_count(&self.fields[1])?;
                Ok(DistributionSpec::Poisson { lambda, m })
            }
            DistributionKind::Geometric => {
                let p = parse_in_range(&self.fields[0], 0.0, 1.0)?;
                let m = parse_count(&self.fields[1])?;
                Ok(DistributionSpec::Geometric { p, m })
            }
        }
    }
}

/// Form layout per distribution, seeded with the default parameter values.
fn fields_for(kind: DistributionKind) -> Vec<ParamField> {
    match kind.default_spec() {
        DistributionSpec::Binomial { n, p, m } => vec![
            ParamField::new("Success probability (p)", format!("{p}")),
            ParamField::new("Sample size (n)", format!("{n}")),
            ParamField::new("Number of samples (m)", format!("{m}")),
        ],
        DistributionSpec::Exponential { lambda, n, m } => vec![
            ParamField::new("Rate (λ)", format!("{lambda}")),
            ParamField::new("Sample size (n)", format!("{n}")),
            ParamField::new("Number of samples (m)", format!("{m}")),
        ],
        DistributionSpec::Uniform { a, b, n, m } => vec![
            ParamField::new("Lower bound (a)", format!("{a}")),
            ParamField::new("Upper bound (b)", format!("{b}")),
            ParamField::new("Sample size (n)", format!("{n}")),
            ParamField::new("Number of samples (m)", format!("{m}")),
        ],
        DistributionSpec::Poisson { lambda, m } => vec![
            ParamField::new("Rate (λ)", format!("{lambda}")),
            ParamField::new("Number of samples (m)", format!("{m}")),
        ],
        DistributionSpec::Geometric { p, m } => vec![
            ParamField::new("Success probability (p)", format!("{p}")),
            ParamField::new("Number of samples (m)", format!("{m}")),
        ],
    }
}

fn parse_in_range(field: &ParamField, min: f64, max: f64) -> Result<f64, String> {
    let value: f64 = field
        .value
        .trim()
        .parse()
        .map_err(|_| format!("{}: '{}' is not a number", field.label, field.value))?;
    if !value.is_finite() || value < min || value > max {
        return Err(format!(
            "{}: {} is outside [{}, {}]",
            field.label, value, min, max
        ));
    }
    Ok(value)
}

fn parse_count(field: &ParamField) -> Result<usize, String> {
    let value: usize = field
        .value
        .trim()
        .parse()
        .map_err(|_| format!("{}: '{}' is not a whole number", field.label, field.value))?;
    if value < 1 {
        return Err(format!("{} must be at least 1", field.label));
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_form_parses_to_default_spec() {
        for kind in DistributionKind::ALL {
            let mut state = AppState::default();
            state.selected = kind;
            state.fields = fields_for(kind);
            assert_eq!(state.parse_spec().unwrap(), kind.default_spec());
        }
    }

    #[test]
    fn switching_distribution_resets_the_form() {
        let mut state = AppState::default();
        state.fields[0].value = "0.9".to_string();
        state.select(DistributionKind::Poisson);

        assert_eq!(state.selected, DistributionKind::Poisson);
        assert_eq!(state.fields.len(), 2);
        assert_eq!(state.fields[0].value, "10");
    }

    #[test]
    fn out_of_range_probability_is_rejected() {
        let mut state = AppState::default();
        state.fields[0].value = "1.5".to_string();

        let err = state.parse_spec().unwrap_err();
        assert!(err.contains("outside"), "unexpected message: {err}");
    }

    #[test]
    fn exponential_rate_clamped_to_widget_range() {
        let mut state = AppState::default();
        state.select(DistributionKind::Exponential);
        state.fields[0].value = "50".to_string();

        assert!(state.parse_spec().is_err());
    }

    #[test]
    fn garbage_input_reports_the_field_label() {
        let mut state = AppState::default();
        state.fields[2].value = "lots".to_string();

        let err = state.parse_spec().unwrap_err();
        assert!(err.contains("Number of samples"), "unexpected message: {err}");
    }

    #[test]
    fn fractional_count_is_rejected() {
        let mut state = AppState::default();
        state.fields[1].value = "10.5".to_string();

        assert!(state.parse_spec().is_err());
    }
}
