//! Tests for batch sample generation
//!
//! These tests verify that:
//! - Every spec produces exactly m samples with the documented shape
//! - Draws stay inside each distribution's support
//! - Invalid parameters fail eagerly with a ParameterError

use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::error::ParameterError;
use crate::sampler::{SampleSet, generate};
use crate::spec::DistributionSpec;

#[test]
fn binomial_shape_reuses_n_as_sample_length() {
    let mut rng = StdRng::seed_from_u64(42);
    let spec = DistributionSpec::Binomial { n: 20, p: 0.3, m: 50 };

    let set = generate(&mut rng, &spec).unwrap();
    assert_eq!(set.num_samples(), 50);

    match &set {
        SampleSet::Batched(samples) => {
            for sample in samples {
                assert_eq!(sample.len(), 20, "each sample uses n draws");
            }
        }
        SampleSet::Scalar(_) => panic!("binomial must produce batched samples"),
    }
}

#[test]
fn binomial_draws_are_integers_in_support() {
    let mut rng = StdRng::seed_from_u64(42);
    let spec = DistributionSpec::Binomial { n: 100, p: 0.5, m: 20 };

    let set = generate(&mut rng, &spec).unwrap();
    for draw in set.pooled() {
        assert!(draw >= 0.0 && draw <= 100.0, "draw {draw} outside [0, n]");
        assert_eq!(draw, draw.trunc(), "draw {draw} is not an integer");
    }
}

#[test]
fn exponential_shape_and_support() {
    let mut rng = StdRng::seed_from_u64(7);
    let spec = DistributionSpec::Exponential {
        lambda: 2.0,
        n: 40,
        m: 100,
    };

    let set = generate(&mut rng, &spec).unwrap();
    assert_eq!(set.num_samples(), 100);
    match &set {
        SampleSet::Batched(samples) => {
            assert!(samples.iter().all(|s| s.len() == 40));
        }
        SampleSet::Scalar(_) => panic!("exponential must produce batched samples"),
    }
    assert!(set.pooled().iter().all(|&d| d >= 0.0));
}

#[test]
fn exponential_mean_matches_one_over_lambda() {
    let mut rng = StdRng::seed_from_u64(42);
    let spec = DistributionSpec::Exponential {
        lambda: 4.0,
        n: 100,
        m: 100,
    };

    let set = generate(&mut rng, &spec).unwrap();
    let pooled = set.pooled();
    let mean = pooled.iter().sum::<f64>() / pooled.len() as f64;

    // 10,000 draws with mean 0.25; allow generous sampling tolerance.
    assert!(
        (mean - 0.25).abs() < 0.02,
        "pooled mean {mean} too far from 0.25"
    );
}

#[test]
fn uniform_draws_stay_in_half_open_interval() {
    let mut rng = StdRng::seed_from_u64(42);
    let spec = DistributionSpec::Uniform {
        a: 2.0,
        b: 5.0,
        n: 100,
        m: 50,
    };

    let set = generate(&mut rng, &spec).unwrap();
    for draw in set.pooled() {
        assert!((2.0..5.0).contains(&draw), "draw {draw} outside [2, 5)");
    }
}

#[test]
fn poisson_collapses_to_m_scalars() {
    let mut rng = StdRng::seed_from_u64(42);
    let spec = DistributionSpec::Poisson { lambda: 10.0, m: 500 };

    let set = generate(&mut rng, &spec).unwrap();
    assert_eq!(set.num_samples(), 500);
    match &set {
        SampleSet::Scalar(draws) => {
            assert_eq!(draws.len(), 500);
            for &d in draws {
                assert!(d >= 0.0 && d == d.trunc(), "poisson draw {d} invalid");
            }
        }
        SampleSet::Batched(_) => panic!("poisson must produce scalar samples"),
    }
}

#[test]
fn geometric_support_starts_at_one() {
    let mut rng = StdRng::seed_from_u64(42);
    let spec = DistributionSpec::Geometric { p: 0.15, m: 500 };

    let set = generate(&mut rng, &spec).unwrap();
    assert_eq!(set.num_samples(), 500);
    match &set {
        SampleSet::Scalar(draws) => {
            for &d in draws {
                assert!(d >= 1.0 && d == d.trunc(), "geometric draw {d} invalid");
            }
        }
        SampleSet::Batched(_) => panic!("geometric must produce scalar samples"),
    }
}

#[test]
fn geometric_certain_success_always_one() {
    let mut rng = StdRng::seed_from_u64(42);
    let spec = DistributionSpec::Geometric { p: 1.0, m: 100 };

    let set = generate(&mut rng, &spec).unwrap();
    assert!(set.pooled().iter().all(|&d| d == 1.0));
}

#[test]
fn fixed_seed_is_reproducible() {
    let spec = DistributionSpec::Uniform {
        a: 0.0,
        b: 1.0,
        n: 10,
        m: 10,
    };

    let mut rng_a = StdRng::seed_from_u64(123);
    let mut rng_b = StdRng::seed_from_u64(123);
    let set_a = generate(&mut rng_a, &spec).unwrap();
    let set_b = generate(&mut rng_b, &spec).unwrap();

    assert_eq!(set_a, set_b);
}

#[test]
fn invalid_binomial_probability_rejected_before_sampling() {
    let mut rng = StdRng::seed_from_u64(42);
    let spec = DistributionSpec::Binomial { n: 100, p: 1.5, m: 200 };

    let err = generate(&mut rng, &spec).unwrap_err();
    assert!(matches!(
        err,
        ParameterError::ProbabilityOutOfRange { name: "p", .. }
    ));
}

#[test]
fn invalid_rate_rejected() {
    let mut rng = StdRng::seed_from_u64(42);

    let spec = DistributionSpec::Exponential {
        lambda: 0.0,
        n: 10,
        m: 10,
    };
    assert!(matches!(
        generate(&mut rng, &spec).unwrap_err(),
        ParameterError::NonPositiveRate { name: "lambda", .. }
    ));

    let spec = DistributionSpec::Poisson { lambda: -1.0, m: 10 };
    assert!(matches!(
        generate(&mut rng, &spec).unwrap_err(),
        ParameterError::NonPositiveRate { name: "lambda", .. }
    ));
}

#[test]
fn empty_uniform_interval_rejected() {
    let mut rng = StdRng::seed_from_u64(42);
    let spec = DistributionSpec::Uniform {
        a: 3.0,
        b: 3.0,
        n: 10,
        m: 10,
    };

    assert!(matches!(
        generate(&mut rng, &spec).unwrap_err(),
        ParameterError::EmptyInterval { .. }
    ));
}

#[test]
fn zero_counts_rejected() {
    let mut rng = StdRng::seed_from_u64(42);

    let spec = DistributionSpec::Exponential {
        lambda: 1.0,
        n: 0,
        m: 10,
    };
    assert!(matches!(
        generate(&mut rng, &spec).unwrap_err(),
        ParameterError::ZeroCount { name: "n" }
    ));

    let spec = DistributionSpec::Poisson { lambda: 1.0, m: 0 };
    assert!(matches!(
        generate(&mut rng, &spec).unwrap_err(),
        ParameterError::ZeroCount { name: "m" }
    ));
}

#[test]
fn geometric_zero_probability_rejected() {
    let mut rng = StdRng::seed_from_u64(42);
    let spec = DistributionSpec::Geometric { p: 0.0, m: 10 };

    assert!(matches!(
        generate(&mut rng, &spec).unwrap_err(),
        ParameterError::ProbabilityOutOfRange {
            name: "p",
            exclusive_zero: true,
            ..
        }
    ));
}

#[test]
fn non_finite_parameter_rejected() {
    let mut rng = StdRng::seed_from_u64(42);
    let spec = DistributionSpec::Exponential {
        lambda: f64::NAN,
        n: 10,
        m: 10,
    };

    assert!(matches!(
        generate(&mut rng, &spec).unwrap_err(),
        ParameterError::NonFinite { name: "lambda", .. }
    ));
}
