use statrs::distribution::{ContinuousCDF, Normal};
use vanilla_lib::{norm_cdf, NormalCdf};

/// Φ must agree with an independent implementation to 1e-9 over [-10, 10].
#[test]
fn test_matches_statrs_on_practical_range() {
    let reference = Normal::new(0.0, 1.0).unwrap();
    let mut worst: f64 = 0.0;

    for i in -10_000..=10_000 {
        let x = i as f64 * 0.001;
        let err = (norm_cdf(x) - reference.cdf(x)).abs();
        worst = worst.max(err);
        assert!(err < 1e-9, "x={} ours={} statrs={}", x, norm_cdf(x), reference.cdf(x));
    }

    println!("Max absolute deviation from statrs: {:.3e}", worst);
}

/// Outside the practical range the function saturates and never fails.
#[test]
fn test_total_over_extreme_arguments() {
    let cdf = NormalCdf;
    for x in [-1e308, -1e6, -50.0, -38.5, 38.5, 50.0, 1e6, 1e308] {
        let value = cdf.cdf(x);
        assert!(value.is_finite(), "x={}", x);
        assert!((0.0..=1.0).contains(&value), "x={} value={}", x, value);
    }
    assert_eq!(cdf.cdf(-1e6), 0.0);
    assert_eq!(cdf.cdf(1e6), 1.0);
}
