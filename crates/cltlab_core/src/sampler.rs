use rand::{Rng, distr::Distribution};

use crate::error::ParameterError;
use crate::spec::DistributionSpec;

/// One generation batch.
///
/// `Batched` keeps the per-sample draw vectors (Binomial, Exponential,
/// Uniform); `Scalar` is the collapsed one-draw-per-sample shape used by
/// Poisson and Geometric.
#[derive(Debug, Clone, PartialEq)]
pub enum SampleSet {
    Batched(Vec<Vec<f64>>),
    Scalar(Vec<f64>),
}

impl SampleSet {
    /// Number of samples (outer length).
    #[must_use]
    pub fn num_samples(&self) -> usize {
        match self {
            SampleSet::Batched(samples) => samples.len(),
            SampleSet::Scalar(draws) => draws.len(),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.num_samples() == 0
    }

    /// Flatten every draw into one sequence, in sample order.
    #[must_use]
    pub fn pooled(&self) -> Vec<f64> {
        match self {
            SampleSet::Batched(samples) => samples.iter().flatten().copied().collect(),
            SampleSet::Scalar(draws) => draws.clone(),
        }
    }
}

/// Generate a batch of independent samples from `spec`.
///
/// Parameters are validated before any draw, so invalid input fails without
/// touching the random source.
pub fn generate<R: Rng + ?Sized>(
    rng: &mut R,
    spec: &DistributionSpec,
) -> Result<SampleSet, ParameterError> {
    spec.validate()?;

    match *spec {
        DistributionSpec::Binomial { n, p, m } => {
            let dist = rand_distr::Binomial::new(n, p).map_err(|_| {
                ParameterError::ProbabilityOutOfRange {
                    name: "p",
                    value: p,
                    exclusive_zero: false,
                }
            })?;
            // n doubles as the per-sample draw count.
            let samples = (0..m)
                .map(|_| (0..n).map(|_| dist.sample(rng) as f64).collect())
                .collect();
            Ok(SampleSet::Batched(samples))
        }
        DistributionSpec::Exponential { lambda, n, m } => {
            // Exp::new takes the rate, so the mean is 1/lambda.
            let dist = rand_distr::Exp::new(lambda).map_err(|_| {
                ParameterError::NonPositiveRate {
                    name: "lambda",
                    value: lambda,
                }
            })?;
            let samples = (0..m)
                .map(|_| (0..n).map(|_| dist.sample(rng)).collect())
                .collect();
            Ok(SampleSet::Batched(samples))
        }
        DistributionSpec::Uniform { a, b, n, m } => {
            // Half-open [a, b).
            let dist = rand_distr::Uniform::new(a, b)
                .map_err(|_| ParameterError::EmptyInterval { lower: a, upper: b })?;
            let samples = (0..m)
                .map(|_| (0..n).map(|_| dist.sample(rng)).collect())
                .collect();
            Ok(SampleSet::Batched(samples))
        }
        DistributionSpec::Poisson { lambda, m } => {
            let dist = rand_distr::Poisson::new(lambda).map_err(|_| {
                ParameterError::NonPositiveRate {
                    name: "lambda",
                    value: lambda,
                }
            })?;
            let draws = (0..m).map(|_| dist.sample(rng)).collect();
            Ok(SampleSet::Scalar(draws))
        }
        DistributionSpec::Geometric { p, m } => {
            let dist = rand_distr::Geometric::new(p).map_err(|_| {
                ParameterError::ProbabilityOutOfRange {
                    name: "p",
                    value: p,
                    exclusive_zero: true,
                }
            })?;
            // rand_distr counts failures before the first success; shift to
            // trials-until-success so the support starts at 1.
            let draws = (0..m).map(|_| dist.sample(rng) as f64 + 1.0).collect();
            Ok(SampleSet::Scalar(draws))
        }
    }
}
