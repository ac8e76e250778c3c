use serde::{Deserialize, Serialize};

use crate::error::ParameterError;

/// The five distributions the tool can simulate, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DistributionKind {
    Binomial,
    Exponential,
    Uniform,
    Poisson,
    Geometric,
}

impl DistributionKind {
    pub const ALL: [DistributionKind; 5] = [
        DistributionKind::Binomial,
        DistributionKind::Exponential,
        DistributionKind::Uniform,
        DistributionKind::Poisson,
        DistributionKind::Geometric,
    ];

    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            DistributionKind::Binomial => "Binomial",
            DistributionKind::Exponential => "Exponential",
            DistributionKind::Uniform => "Uniform",
            DistributionKind::Poisson => "Poisson",
            DistributionKind::Geometric => "Geometric",
        }
    }

    #[must_use]
    pub fn index(&self) -> usize {
        DistributionKind::ALL
            .iter()
            .position(|k| k == self)
            .unwrap_or(0)
    }

    /// Default parameter set for this distribution.
    #[must_use]
    pub fn default_spec(&self) -> DistributionSpec {
        match self {
            DistributionKind::Binomial => DistributionSpec::Binomial {
                n: 100,
                p: 0.5,
                m: 200,
            },
            DistributionKind::Exponential => DistributionSpec::Exponential {
                lambda: 1.0,
                n: 100,
                m: 500,
            },
            DistributionKind::Uniform => DistributionSpec::Uniform {
                a: 0.0,
                b: 1.0,
                n: 100,
                m: 500,
            },
            DistributionKind::Poisson => DistributionSpec::Poisson { lambda: 10.0, m: 500 },
            DistributionKind::Geometric => DistributionSpec::Geometric { p: 0.15, m: 500 },
        }
    }
}

/// A fully-parameterized generation request.
///
/// `m` is always the number of samples. For Binomial, Exponential and Uniform
/// each sample is `n` draws; for Poisson and Geometric each sample is a single
/// draw, so `m` is also the total draw count. Binomial reuses `n` as both the
/// trial count and the per-sample draw count.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum DistributionSpec {
    Binomial { n: u64, p: f64, m: usize },
    Exponential { lambda: f64, n: usize, m: usize },
    Uniform { a: f64, b: f64, n: usize, m: usize },
    Poisson { lambda: f64, m: usize },
    Geometric { p: f64, m: usize },
}

impl DistributionSpec {
    #[must_use]
    pub fn kind(&self) -> DistributionKind {
        match self {
            DistributionSpec::Binomial { .. } => DistributionKind::Binomial,
            DistributionSpec::Exponential { .. } => DistributionKind::Exponential,
            DistributionSpec::Uniform { .. } => DistributionKind::Uniform,
            DistributionSpec::Poisson { .. } => DistributionKind::Poisson,
            DistributionSpec::Geometric { .. } => DistributionKind::Geometric,
        }
    }

    /// Number of samples this spec will generate.
    #[must_use]
    pub fn num_samples(&self) -> usize {
        match self {
            DistributionSpec::Binomial { m, .. }
            | DistributionSpec::Exponential { m, .. }
            | DistributionSpec::Uniform { m, .. }
            | DistributionSpec::Poisson { m, .. }
            | DistributionSpec::Geometric { m, .. } => *m,
        }
    }

    /// Check every parameter against its domain.
    ///
    /// Geometric requires p > 0 (p = 0 would never terminate a trial run);
    /// Binomial accepts the closed interval [0, 1].
    pub fn validate(&self) -> Result<(), ParameterError> {
        match *self {
            DistributionSpec::Binomial { n, p, m } => {
                check_finite("p", p)?;
                if !(0.0..=1.0).contains(&p) {
                    return Err(ParameterError::ProbabilityOutOfRange {
                        name: "p",
                        value: p,
                        exclusive_zero: false,
                    });
                }
                check_count("n", n as usize)?;
                check_count("m", m)
            }
            DistributionSpec::Exponential { lambda, n, m } => {
                check_finite("lambda", lambda)?;
                if lambda <= 0.0 {
                    return Err(ParameterError::NonPositiveRate {
                        name: "lambda",
                        value: lambda,
                    });
                }
                check_count("n", n)?;
                check_count("m", m)
            }
            DistributionSpec::Uniform { a, b, n, m } => {
                check_finite("a", a)?;
                check_finite("b", b)?;
                if a >= b {
                    return Err(ParameterError::EmptyInterval { lower: a, upper: b });
                }
                check_count("n", n)?;
                check_count("m", m)
            }
            DistributionSpec::Poisson { lambda, m } => {
                check_finite("lambda", lambda)?;
                if lambda <= 0.0 {
                    return Err(ParameterError::NonPositiveRate {
                        name: "lambda",
                        value: lambda,
                    });
                }
                check_count("m", m)
            }
            DistributionSpec::Geometric { p, m } => {
                check_finite("p", p)?;
                if p <= 0.0 || p > 1.0 {
                    return Err(ParameterError::ProbabilityOutOfRange {
                        name: "p",
                        value: p,
                        exclusive_zero: true,
                    });
                }
                check_count("m", m)
            }
        }
    }
}

fn check_finite(name: &'static str, value: f64) -> Result<(), ParameterError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ParameterError::NonFinite { name, value })
    }
}

fn check_count(name: &'static str, value: usize) -> Result<(), ParameterError> {
    if value >= 1 {
        Ok(())
    } else {
        Err(ParameterError::ZeroCount { name })
    }
}
