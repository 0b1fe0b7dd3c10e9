//! Property-based tests for the descriptive statistics
//!
//! These pin the conventions (Bessel correction, Pearson kurtosis) and the
//! missing-value contract across a wide range of inputs.

use approx::assert_abs_diff_eq;
use proptest::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use rand_distr::{Distribution, Normal, Uniform};
use research_descriptive::*;

fn normal_sample(n: usize, mean: f64, sd: f64, seed: u64) -> Vec<Option<f64>> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let normal = Normal::new(mean, sd).unwrap();
    (0..n).map(|_| Some(normal.sample(&mut rng))).collect()
}

fn with_gaps(values: Vec<f64>, mask: Vec<bool>) -> Vec<Option<f64>> {
    values
        .into_iter()
        .zip(mask.into_iter().chain(std::iter::repeat(false)))
        .map(|(x, missing)| if missing { None } else { Some(x) })
        .collect()
}

#[test]
fn test_kurtosis_of_normal_converges_to_three() {
    let sample = normal_sample(200_000, 10.0, 2.0, 42);
    let k = kurtosis(&sample);
    assert_abs_diff_eq!(k, 3.0, epsilon = 0.05);
    assert_abs_diff_eq!(excess_kurtosis(&sample), 0.0, epsilon = 0.05);
}

#[test]
fn test_skew_of_normal_near_zero() {
    let sample = normal_sample(200_000, 0.0, 1.0, 7);
    assert_abs_diff_eq!(skew(&sample), 0.0, epsilon = 0.03);
}

#[test]
fn test_uniform_kurtosis_is_platykurtic() {
    // Continuous uniform has Pearson kurtosis 1.8
    let mut rng = ChaCha8Rng::seed_from_u64(3);
    let uniform = Uniform::new(0.0, 1.0);
    let sample: Vec<Option<f64>> = (0..100_000).map(|_| Some(uniform.sample(&mut rng))).collect();
    assert_abs_diff_eq!(kurtosis(&sample), 1.8, epsilon = 0.03);
}

#[test]
fn test_reference_values() {
    let sample = [Some(1.0), Some(2.0), None, Some(4.0), Some(5.0)];
    assert_eq!(count(&sample), 4);
    assert_eq!(value_range(&sample), 4.0);

    let full = [Some(1.0), Some(2.0), Some(3.0), Some(4.0), Some(5.0)];
    assert_abs_diff_eq!(variance(&full), 2.5, epsilon = 1e-12);
}

proptest! {
    #[test]
    fn prop_sd_squared_is_variance(
        values in prop::collection::vec(-1.0e3..1.0e3f64, 2..200),
    ) {
        let sample: Vec<Option<f64>> = values.iter().map(|&x| Some(x)).collect();
        let var = variance(&sample);
        let sd = standard_deviation(&sample);
        prop_assert!((sd * sd - var).abs() <= 1e-9 * var.max(1.0));
    }

    #[test]
    fn prop_missing_entries_are_excluded(
        values in prop::collection::vec(-1.0e3..1.0e3f64, 0..100),
        mask in prop::collection::vec(any::<bool>(), 0..100),
    ) {
        let gappy = with_gaps(values, mask);
        let dense: Vec<Option<f64>> = gappy.iter().copied().flatten().map(Some).collect();
        prop_assert_eq!(count(&gappy), dense.len());

        let same = |a: f64, b: f64| (a.is_nan() && b.is_nan()) || a == b;
        prop_assert!(same(variance(&gappy), variance(&dense)));
        prop_assert!(same(standard_error(&gappy), standard_error(&dense)));
        prop_assert!(same(value_range(&gappy), value_range(&dense)));
        prop_assert!(same(kurtosis(&gappy), kurtosis(&dense)));
    }

    #[test]
    fn prop_idempotent(
        values in prop::collection::vec(prop::option::of(-1.0e6..1.0e6f64), 0..64),
    ) {
        let first = describe(&values);
        let second = describe(&values);
        prop_assert_eq!(first.n, second.n);
        prop_assert_eq!(first.mean.to_bits(), second.mean.to_bits());
        prop_assert_eq!(first.variance.to_bits(), second.variance.to_bits());
        prop_assert_eq!(first.skew.to_bits(), second.skew.to_bits());
        prop_assert_eq!(first.kurtosis.to_bits(), second.kurtosis.to_bits());
    }

    #[test]
    fn prop_range_is_non_negative(
        values in prop::collection::vec(-1.0e6..1.0e6f64, 1..64),
    ) {
        let sample: Vec<Option<f64>> = values.iter().map(|&x| Some(x)).collect();
        prop_assert!(value_range(&sample) >= 0.0);
    }

    #[test]
    fn prop_kurtosis_at_least_one(
        values in prop::collection::vec(-1.0e3..1.0e3f64, 2..64),
    ) {
        // Pearson kurtosis is bounded below by 1 (and by skew^2 + 1)
        let sample: Vec<Option<f64>> = values.iter().map(|&x| Some(x)).collect();
        let k = kurtosis(&sample);
        if !k.is_nan() {
            let s = skew(&sample);
            prop_assert!(k >= s * s + 1.0 - 1e-6);
        }
    }
}
