//! Descriptive statistics, histogram binning, and the fitted-curve overlays.
//!
//! The one piece of numerical care in this crate is the count scaling: both
//! overlays multiply a density by `len * bin_width` so that a curve drawn over
//! an unnormalized histogram peaks at the same height as the bars.

use crate::sampler::SampleSet;

/// Fixed bin count for both histogram panels.
pub const HISTOGRAM_BINS: usize = 30;

/// Number of x positions the overlay curves are evaluated at.
pub const CURVE_POINTS: usize = 100;

/// Arithmetic mean. Zero for an empty slice.
#[must_use]
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Population standard deviation (ddof = 0).
#[must_use]
pub fn std_dev(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let mu = mean(values);
    let variance = values.iter().map(|v| (v - mu).powi(2)).sum::<f64>() / values.len() as f64;
    variance.sqrt()
}

/// Reduce each sample to its arithmetic mean, in order.
///
/// Scalar-shaped sets (Poisson, Geometric) pass through unchanged: the mean
/// of a single draw is the draw itself.
#[must_use]
pub fn sample_means(samples: &SampleSet) -> Vec<f64> {
    match samples {
        SampleSet::Batched(samples) => samples.iter().map(|s| mean(s)).collect(),
        SampleSet::Scalar(draws) => draws.clone(),
    }
}

/// Equal-width histogram over the data range.
#[derive(Debug, Clone, PartialEq)]
pub struct Histogram {
    pub min: f64,
    pub max: f64,
    pub bin_width: f64,
    pub counts: Vec<usize>,
}

impl Histogram {
    /// Bin `values` into `bins` equal-width bins spanning [min, max].
    ///
    /// Returns `None` for empty input or any non-finite value. All-equal
    /// input collapses to a single occupied bin with a unit bin width so
    /// that count scaling stays defined.
    #[must_use]
    pub fn from_values(values: &[f64], bins: usize) -> Option<Self> {
        if values.is_empty() || bins == 0 {
            return None;
        }
        if values.iter().any(|v| !v.is_finite()) {
            return None;
        }

        let min = values.iter().copied().fold(f64::INFINITY, f64::min);
        let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        let range = max - min;

        let mut counts = vec![0usize; bins];
        if range <= 0.0 {
            // Degenerate spread: everything lands in one bin.
            counts[0] = values.len();
            return Some(Self {
                min,
                max,
                bin_width: 1.0,
                counts,
            });
        }

        let bin_width = range / bins as f64;
        for &v in values {
            let idx = ((v - min) / bin_width) as usize;
            counts[idx.min(bins - 1)] += 1;
        }

        Some(Self {
            min,
            max,
            bin_width,
            counts,
        })
    }

    #[must_use]
    pub fn max_count(&self) -> usize {
        self.counts.iter().copied().max().unwrap_or(0)
    }

    /// Midpoint of bin `i`.
    #[must_use]
    pub fn bin_center(&self, i: usize) -> f64 {
        self.min + (i as f64 + 0.5) * self.bin_width
    }
}

/// Normal probability density at `x`.
#[must_use]
pub fn normal_pdf(x: f64, mu: f64, sigma: f64) -> f64 {
    let z = (x - mu) / sigma;
    (-0.5 * z * z).exp() / (sigma * (2.0 * std::f64::consts::PI).sqrt())
}

/// A normal curve fitted to the sample means, scaled to histogram counts.
#[derive(Debug, Clone, PartialEq)]
pub struct NormalCurve {
    pub mu: f64,
    pub sigma: f64,
    /// (x, scaled height) at `CURVE_POINTS` positions across the histogram range.
    pub points: Vec<(f64, f64)>,
}

/// Fit a normal curve to `means` and scale it to the count height of `hist`.
///
/// Each PDF value is multiplied by `means.len() * bin_width`. Returns `None`
/// when the means have zero spread, in which case the curve degenerates to a
/// spike and is skipped rather than drawn.
#[must_use]
pub fn normal_overlay(means: &[f64], hist: &Histogram) -> Option<NormalCurve> {
    let mu = mean(means);
    let sigma = std_dev(means);
    if sigma <= 0.0 || !sigma.is_finite() {
        return None;
    }

    let scale = means.len() as f64 * hist.bin_width;
    let span = hist.max - hist.min;
    let step = span / (CURVE_POINTS - 1) as f64;
    let points = (0..CURVE_POINTS)
        .map(|i| {
            let x = hist.min + i as f64 * step;
            (x, normal_pdf(x, mu, sigma) * scale)
        })
        .collect();

    Some(NormalCurve { mu, sigma, points })
}

/// Gaussian kernel density estimate, scaled to histogram counts.
#[derive(Debug, Clone, PartialEq)]
pub struct DensityCurve {
    pub bandwidth: f64,
    pub points: Vec<(f64, f64)>,
}

/// Smoothed density estimate over `values`, scaled like [`normal_overlay`].
///
/// Uses a Gaussian kernel with Silverman's rule-of-thumb bandwidth. Returns
/// `None` when the data has zero spread.
#[must_use]
pub fn density_overlay(values: &[f64], hist: &Histogram) -> Option<DensityCurve> {
    let n = values.len();
    let sigma = std_dev(values);
    if n == 0 || sigma <= 0.0 || !sigma.is_finite() {
        return None;
    }

    let bandwidth = 1.06 * sigma * (n as f64).powf(-0.2);
    // Count-scaled KDE: (1/(n h)) * sum K(...) * n * w = (w/h) * sum K(...)
    let scale = hist.bin_width / bandwidth;
    let norm = 1.0 / (2.0 * std::f64::consts::PI).sqrt();

    let span = hist.max - hist.min;
    let step = span / (CURVE_POINTS - 1) as f64;
    let points = (0..CURVE_POINTS)
        .map(|i| {
            let x = hist.min + i as f64 * step;
            let kernel_sum: f64 = values
                .iter()
                .map(|&v| {
                    let z = (x - v) / bandwidth;
                    norm * (-0.5 * z * z).exp()
                })
                .sum();
            (x, kernel_sum * scale)
        })
        .collect();

    Some(DensityCurve { bandwidth, points })
}
