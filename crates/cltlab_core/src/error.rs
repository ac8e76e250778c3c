use std::fmt;

/// Errors for parameters outside a distribution's valid domain.
///
/// Validation runs before any sampling, so a `ParameterError` guarantees
/// that no entropy was consumed.
#[derive(Debug, Clone, PartialEq)]
pub enum ParameterError {
    /// A probability parameter lies outside its valid interval.
    ProbabilityOutOfRange {
        name: &'static str,
        value: f64,
        /// Lower bound is exclusive when true (Geometric needs p > 0).
        exclusive_zero: bool,
    },
    /// A rate parameter must be strictly positive.
    NonPositiveRate { name: &'static str, value: f64 },
    /// Uniform interval with a >= b.
    EmptyInterval { lower: f64, upper: f64 },
    /// A sample count (n or m) of zero.
    ZeroCount { name: &'static str },
    /// A parameter that must be finite is NaN or infinite.
    NonFinite { name: &'static str, value: f64 },
}

impl fmt::Display for ParameterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParameterError::ProbabilityOutOfRange {
                name,
                value,
                exclusive_zero,
            } => {
                let range = if *exclusive_zero { "(0, 1]" } else { "[0, 1]" };
                write!(f, "{name} = {value} is outside {range}")
            }
            ParameterError::NonPositiveRate { name, value } => {
                write!(f, "{name} = {value} must be > 0")
            }
            ParameterError::EmptyInterval { lower, upper } => {
                write!(f, "interval [{lower}, {upper}) is empty: a must be < b")
            }
            ParameterError::ZeroCount { name } => {
                write!(f, "{name} must be at least 1")
            }
            ParameterError::NonFinite { name, value } => {
                write!(f, "{name} = {value} is not finite")
            }
        }
    }
}

impl std::error::Error for ParameterError {}
