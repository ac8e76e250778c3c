//! Sampling engine for the CLT Lab teaching tool
//!
//! This crate holds the non-UI half of the application: parametric
//! distribution specs, batch sample generation, the sample-mean reducer,
//! and the histogram/overlay math used to illustrate the Central Limit
//! Theorem. It knows nothing about terminals or rendering.
//!
//! The random source is always passed in by the caller, so every pipeline
//! run is reproducible under a fixed seed.

// ============================================================================
// Core modules
// ============================================================================

pub mod error;
pub mod sampler;
pub mod spec;
pub mod stats;

// ============================================================================
// Test modules
// ============================================================================

#[cfg(test)]
mod tests;

// ============================================================================
// Public re-exports for convenience
// ============================================================================

pub use error::ParameterError;
pub use sampler::{SampleSet, generate};
pub use spec::{DistributionKind, DistributionSpec};
pub use stats::{
    CURVE_POINTS, DensityCurve, HISTOGRAM_BINS, Histogram, NormalCurve, density_overlay, mean,
    normal_overlay, normal_pdf, sample_means, std_dev,
};
