use super::*;
use crate::special::{gamma_inc, gamma_inc_upper};
use crate::{Error, FloatScalar};

fn assert_near(a: f64, b: f64, tol: f64) {
    assert!((a - b).abs() <= tol, "{a} vs {b} (diff = {}, tol = {tol})", (a - b).abs());
}

fn assert_round_trip<D: ContinuousDistribution<f64>>(d: &D, us: &[f64], tol: f64) {
    for &u in us {
        let x = d.inverse_f(u).unwrap();
        assert_near(d.cdf(x), u, tol);
    }
}

const GRID: [f64; 7] = [1e-6, 0.01, 0.2, 0.5, 0.8, 0.99, 0.999_999];

// ======================== Normal ========================

#[test]
fn normal_cdf_standard() {
    let n = Normal::new(0.0_f64, 1.0).unwrap();
    assert_near(n.cdf(0.0), 0.5, 1e-15);
    assert_near(n.cdf(1.0), 0.8413447460685429, 1e-14);
    assert_near(n.bar_f(1.0), 0.15865525393145707, 1e-14);
    assert_near(n.density(0.0), 0.3989422804014327, 1e-15);
}

#[test]
fn normal_upper_tail_is_not_cancelled() {
    let n = Normal::new(0.0_f64, 1.0).unwrap();
    // Φ(-10) ≈ 7.6198530241605e-24
    let q = n.bar_f(10.0);
    assert!(((q - 7.619_853_024_160_527e-24) / q).abs() < 1e-10);
}

#[test]
fn normal_inverse_round_trip() {
    let n = Normal::new(3.0_f64, 2.0).unwrap();
    assert_round_trip(&n, &GRID, 1e-13);
    assert_near(n.inverse_f(0.5).unwrap(), 3.0, 1e-12);
}

#[test]
fn normal_inverse_edges() {
    let n = Normal::new(0.0_f64, 1.0).unwrap();
    assert_eq!(n.inverse_f(0.0).unwrap(), f64::NEG_INFINITY);
    assert_eq!(n.inverse_f(1.0).unwrap(), f64::INFINITY);
    assert_eq!(n.inverse_f(1.5), Err(Error::ProbabilityOutOfRange));
}

#[test]
fn normal_moments() {
    let n = Normal::new(3.0_f64, 2.0).unwrap();
    assert_eq!(n.mean(), 3.0);
    assert_eq!(n.variance(), 4.0);
    assert_eq!(n.std_dev(), 2.0);
}

#[test]
fn normal_invalid() {
    assert_eq!(Normal::new(0.0_f64, 0.0), Err(Error::InvalidParameter));
    assert_eq!(Normal::new(0.0_f64, -1.0), Err(Error::InvalidParameter));
    assert_eq!(Normal::new(f64::NAN, 1.0), Err(Error::InvalidParameter));
}

#[test]
fn normal_f32() {
    let n = Normal::new(0.0_f32, 1.0).unwrap();
    assert!((n.cdf(0.0) - 0.5).abs() < 1e-6);
    let x = n.inverse_f(0.9).unwrap();
    assert!((x - 1.281_551_6).abs() < 1e-4);
}

// ======================== Exponential ========================

#[test]
fn exponential_closed_form_inverse() {
    let e = Exponential::new(2.0_f64).unwrap();
    assert_eq!(e.inverse_f(0.0).unwrap(), 0.0);
    assert_eq!(e.inverse_f(1.0).unwrap(), f64::INFINITY);
    assert_near(e.inverse_f(1.0 - (-1.0_f64).exp()).unwrap(), 0.5, 1e-15);
    assert_eq!(e.inverse_f(-0.1), Err(Error::ProbabilityOutOfRange));
}

#[test]
fn exponential_bisection_agrees_with_closed_form() {
    let e = Exponential::new(0.5_f64).unwrap();
    for &u in &GRID {
        let exact = e.inverse_f(u).unwrap();
        let x = e.inverse_f_bisection(u).unwrap();
        assert!(((x - exact) / exact).abs() < 1e-9, "u = {u}");
    }
}

#[test]
fn exponential_moments() {
    let e = Exponential::new(4.0_f64).unwrap();
    assert_near(e.mean(), 0.25, 1e-16);
    assert_near(e.variance(), 0.0625, 1e-16);
    assert_near(e.bar_f(1.0), (-4.0_f64).exp(), 1e-16);
    assert_eq!(Exponential::new(0.0_f64), Err(Error::InvalidParameter));
}

// ======================== Folded normal ========================

#[test]
fn folded_normal_half_normal_case() {
    let d = FoldedNormal::new(0.0_f64, 2.0).unwrap();
    assert_near(d.mean(), 2.0 * (2.0 / core::f64::consts::PI).sqrt(), 1e-14);
    assert_near(d.variance(), 4.0 * (1.0 - 2.0 / core::f64::consts::PI), 1e-13);
    assert_near(d.inverse_f(0.5).unwrap(), 2.0 * 0.6744897501960817, 1e-12);
}

#[test]
fn folded_normal_cdf_and_tail() {
    let d = FoldedNormal::new(2.0_f64, 1.0).unwrap();
    for x in [0.1, 1.0, 2.0, 3.5, 6.0] {
        assert_near(d.cdf(x) + d.bar_f(x), 1.0, 1e-15);
    }
    assert_eq!(d.cdf(-1.0), 0.0);
    assert_eq!(d.density(-1.0), 0.0);
    assert_round_trip(&d, &GRID, 1e-13);
}

#[test]
fn folded_normal_large_location_is_normal() {
    let d = FoldedNormal::new(50.0_f64, 1.0).unwrap();
    assert_near(d.mean(), 50.0, 1e-12);
    assert_near(d.variance(), 1.0, 1e-9);
}

#[test]
fn folded_normal_invalid() {
    assert_eq!(FoldedNormal::new(-1.0_f64, 1.0), Err(Error::InvalidParameter));
    assert_eq!(FoldedNormal::new(1.0_f64, 0.0), Err(Error::InvalidParameter));
}

// ======================== Inverse Gaussian ========================

#[test]
fn inverse_gaussian_round_trip() {
    let d = InverseGaussian::new(1.0_f64, 2.0).unwrap();
    assert_round_trip(&d, &GRID, 1e-13);
    for x in [0.05, 0.5, 1.0, 3.0] {
        assert_near(d.cdf(x) + d.bar_f(x), 1.0, 1e-14);
    }
}

#[test]
fn inverse_gaussian_large_shape_does_not_overflow() {
    // e^{2λ/μ} alone would overflow
    let d = InverseGaussian::new(1.0_f64, 1000.0).unwrap();
    let p = d.cdf(1.0);
    assert!(p.is_finite() && p > 0.4 && p < 0.6);
    assert_round_trip(&d, &[0.1, 0.5, 0.9], 1e-12);
}

#[test]
fn inverse_gaussian_moments() {
    let d = InverseGaussian::new(2.0_f64, 4.0).unwrap();
    assert_eq!(d.mean(), 2.0);
    assert_eq!(d.variance(), 2.0);
    assert_eq!(InverseGaussian::new(0.0_f64, 1.0), Err(Error::InvalidParameter));
}

// ======================== Gamma ========================

#[test]
fn gamma_round_trip() {
    for &(alpha, lambda) in &[(0.5, 1.0), (2.5, 3.0), (30.0, 0.1)] {
        let g = Gamma::new(alpha, lambda).unwrap();
        assert_round_trip(&g, &[0.01, 0.2, 0.5, 0.8, 0.99], 1e-12);
    }
}

#[test]
fn gamma_shape_one_is_exponential() {
    let g = Gamma::new(1.0_f64, 2.0).unwrap();
    let e = Exponential::new(2.0_f64).unwrap();
    for &u in &[0.1, 0.5, 0.9] {
        assert_near(g.inverse_f(u).unwrap(), e.inverse_f(u).unwrap(), 1e-12);
    }
    assert_near(g.density(0.0), 2.0, 1e-15);
}

#[test]
fn gamma_tail_uses_upper_function() {
    let g = Gamma::new(3.0_f64, 1.0).unwrap();
    assert_near(g.bar_f(50.0), gamma_inc_upper(3.0, 50.0).unwrap(), 1e-30);
    assert!(g.bar_f(50.0) > 0.0);
    assert_near(g.cdf(2.0), gamma_inc(3.0, 2.0).unwrap(), 1e-16);
}

#[test]
fn gamma_invalid() {
    assert_eq!(Gamma::new(0.0_f64, 1.0), Err(Error::InvalidParameter));
    assert_eq!(Gamma::new(1.0_f64, f64::INFINITY), Err(Error::InvalidParameter));
}

// ======================== Poisson ========================

fn poisson_pmf(lambda: f64, k: i64) -> f64 {
    let kf = k as f64;
    (kf * lambda.ln() - lambda - FloatScalar::ln_gamma(kf + 1.0)).exp()
}

#[test]
fn poisson_table_backed() {
    let p = Poisson::new(50.0_f64).unwrap();
    assert!(p.table().is_some());
    for x in [30, 45, 50, 60, 75] {
        assert_near(p.cdf(x), gamma_inc_upper(x as f64 + 1.0, 50.0).unwrap(), 1e-12);
        assert_near(p.prob(x), poisson_pmf(50.0, x), 1e-14);
    }
}

#[test]
fn poisson_outside_table_sums_tails() {
    let p = Poisson::new(100.0_f64).unwrap();
    let t = p.table().unwrap();
    assert!(t.xmin() > 0);
    let low = p.cdf(0);
    let expected = (-100.0_f64).exp();
    assert!(((low - expected) / expected).abs() < 1e-10);

    let x = t.xmax() + 50;
    let high = p.bar_f(x);
    let expected = gamma_inc(x as f64, 100.0).unwrap();
    assert!(((high - expected) / expected).abs() < 1e-6);
}

#[test]
fn poisson_inverse_matches_cdf() {
    let p = Poisson::new(7.5_f64).unwrap();
    for i in 1..100 {
        let u = i as f64 / 100.0;
        let x = p.inverse_f_int(u).unwrap();
        assert!(p.cdf(x) >= u);
        assert!(x == 0 || p.cdf(x - 1) < u);
    }
    assert_eq!(p.inverse_f_int(0.0).unwrap(), 0);
    assert_eq!(p.inverse_f_int(1.0).unwrap(), i64::MAX);
}

#[test]
fn poisson_large_rate_skips_table() {
    let lambda = 2.0e5_f64;
    let p = Poisson::new(lambda).unwrap();
    assert!(p.table().is_none());
    let x = p.inverse_f_int(0.5).unwrap();
    assert!((x - 200_000).abs() <= 1);
    assert!(p.cdf(x) >= 0.5 && p.cdf(x - 1) < 0.5);
    assert_near(p.cdf(x - 1) + p.bar_f(x), 1.0, 1e-9);

    let x = p.inverse_f_int(0.999).unwrap();
    assert!(p.cdf(x) >= 0.999 && p.cdf(x - 1) < 0.999);
    assert_eq!(p.inverse_f_int(2.0), Err(Error::ProbabilityOutOfRange));
}

#[test]
fn poisson_invalid() {
    assert_eq!(Poisson::new(0.0_f64), Err(Error::InvalidParameter));
    assert_eq!(Poisson::new(f64::NAN), Err(Error::InvalidParameter));
}

// ======================== Binomial ========================

#[test]
fn binomial_cdf_matches_direct_sum() {
    let b = Binomial::new(40, 0.3_f64).unwrap();
    let mut acc = 0.0;
    for k in 0..=40_i64 {
        let kf = k as f64;
        let lnc = FloatScalar::ln_gamma(41.0_f64)
            - FloatScalar::ln_gamma(kf + 1.0)
            - FloatScalar::ln_gamma(41.0 - kf);
        acc += (lnc + k as f64 * 0.3_f64.ln() + (40 - k) as f64 * 0.7_f64.ln()).exp();
        assert_near(b.cdf(k), acc.min(1.0), 1e-12);
    }
    assert_eq!(b.cdf(-1), 0.0);
    assert_eq!(b.bar_f(41), 0.0);
}

#[test]
fn binomial_moments_and_inverse() {
    let b = Binomial::new(20, 0.25_f64).unwrap();
    assert_eq!(b.mean(), 5.0);
    assert_near(b.variance(), 3.75, 1e-15);
    assert_eq!(b.support(), crate::Support::new(0, 20).unwrap());
    let mut last = 0;
    for i in 1..200 {
        let x = b.inverse_f_int(i as f64 / 200.0).unwrap();
        assert!(x >= last);
        last = x;
    }
    assert_eq!(b.inverse_f_int(1.0).unwrap(), 20);
}

#[test]
fn binomial_degenerate_probabilities() {
    let zero = Binomial::new(10, 0.0_f64).unwrap();
    assert_eq!(zero.prob(0), 1.0);
    assert_eq!(zero.inverse_f_int(0.7).unwrap(), 0);
    let one = Binomial::new(10, 1.0_f64).unwrap();
    assert_eq!(one.prob(10), 1.0);
    assert_eq!(one.inverse_f_int(0.3).unwrap(), 10);
}

#[test]
fn binomial_invalid() {
    assert_eq!(Binomial::new(0, 0.5_f64), Err(Error::InvalidParameter));
    assert_eq!(Binomial::new(5, 1.5_f64), Err(Error::InvalidParameter));
}

// ======================== Negative binomial ========================

#[test]
fn negative_binomial_geometric_case() {
    let d = NegativeBinomial::new(1.0_f64, 0.2).unwrap();
    for x in 0..30 {
        assert_near(d.prob(x), 0.2 * 0.8_f64.powi(x as i32), 1e-15);
        assert_near(d.bar_f(x), 0.8_f64.powi(x as i32), 1e-14);
    }
}

#[test]
fn negative_binomial_real_size() {
    let d = NegativeBinomial::new(3.5_f64, 0.4).unwrap();
    assert_near(d.mean(), 3.5 * 0.6 / 0.4, 1e-14);
    assert_near(d.variance(), 3.5 * 0.6 / 0.16, 1e-13);
    let total: f64 = d.table().pmf().iter().sum();
    assert_near(total, 1.0, 1e-12);
    for i in 1..50 {
        let u = i as f64 / 50.0;
        let x = d.inverse_f_int(u).unwrap();
        assert!(d.cdf(x) >= u - 1e-14);
        assert!(x == 0 || d.cdf(x - 1) < u + 1e-14);
    }
}

#[test]
fn negative_binomial_invalid() {
    assert_eq!(NegativeBinomial::new(0.0_f64, 0.5), Err(Error::InvalidParameter));
    assert_eq!(NegativeBinomial::new(1.0_f64, 0.0), Err(Error::InvalidParameter));
}

// ======================== Integer search ========================

#[test]
fn search_int_finds_step() {
    let cdf = |x: i64| if x >= 1234 { 1.0 } else { 0.0 };
    let s = crate::Support::naturals();
    assert_eq!(search_int(cdf, 0.5_f64, s, 0, 1), 1234);
    assert_eq!(search_int(cdf, 0.5_f64, s, 1_000_000, 3), 1234);
    assert_eq!(search_int(cdf, 0.5_f64, s, 1234, 10), 1234);
}

// ======================== Below the table ========================

fn assert_inverts_below_table<D: DiscreteDistribution<f64>>(d: &D, xmin: i64) {
    let x = xmin - 3;
    let u = d.cdf(x);
    assert!(u > 0.0, "cdf({x}) = {u}");
    let got = d.inverse_f_int(u).unwrap();
    assert_eq!(got, x, "u = {u:e}");
    assert!(d.cdf(got - 1) < u);
}

#[test]
fn inverse_below_first_table_entry() {
    let p = Poisson::new(100.0_f64).unwrap();
    assert_inverts_below_table(&p, p.table().unwrap().xmin());

    let nb = NegativeBinomial::new(50.0_f64, 0.2).unwrap();
    assert_inverts_below_table(&nb, nb.table().xmin());

    let b = Binomial::new(1000, 0.5_f64).unwrap();
    assert_inverts_below_table(&b, b.table().xmin());
}

#[test]
fn inverse_below_table_at_support_edge() {
    // Table starts at 0: nothing lies under it
    let p = Poisson::new(2.0_f64).unwrap();
    assert_eq!(p.table().unwrap().xmin(), 0);
    assert_eq!(p.inverse_f_int(1e-300).unwrap(), 0);
    assert_eq!(p.inverse_f_int(0.0).unwrap(), 0);
}

// ======================== Logging ========================

#[cfg(feature = "std")]
#[test]
fn failed_incomplete_gamma_warns() {
    use crate::testing::count_warnings;

    let (v, warnings) =
        count_warnings(|| incomplete_or_nan::<f64>(Err(Error::NoConvergence { iterations: 7 })));
    assert!(v.is_nan());
    assert_eq!(warnings, 1);

    let (v, warnings) = count_warnings(|| incomplete_or_nan(Ok(0.25_f64)));
    assert_eq!(v, 0.25);
    assert_eq!(warnings, 0);
}

mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn gamma_inverse_round_trip(alpha in 0.5f64..50.0, u in 0.001f64..0.999) {
            let g = Gamma::new(alpha, 1.0).unwrap();
            let x = g.inverse_f(u).unwrap();
            prop_assert!((g.cdf(x) - u).abs() < 1e-10);
        }

        #[test]
        fn inverse_gaussian_round_trip(mu in 0.1f64..10.0, lambda in 0.1f64..100.0, u in 0.001f64..0.999) {
            let d = InverseGaussian::new(mu, lambda).unwrap();
            let x = d.inverse_f(u).unwrap();
            prop_assert!((d.cdf(x) - u).abs() < 1e-10);
        }
    }
}
