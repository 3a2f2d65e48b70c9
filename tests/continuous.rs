//! End-to-end checks of the continuous engine through the public API.

use distinv::inverse::{
    bisect, find_bracket, inverse_bisection, inverse_brent, solve, RootSettings,
};
use distinv::stats::{ContinuousDistribution, Exponential, FoldedNormal, Gamma, InverseGaussian, Normal};
use distinv::{Error, PrecisionBudget, Support};

#[test]
fn square_on_unit_interval() {
    let f = |x: f64| x * x;
    let unit = Support::new(0.0, 1.0).unwrap();
    let r = solve(&f, 0.0, 1.0, 0.25, unit, &RootSettings::default()).unwrap();
    assert!(r.converged);
    assert!((r.x - 0.5).abs() < 1e-10);

    let r = bisect(&f, 0.0, 1.0, 0.25, &RootSettings::bisection()).unwrap();
    assert!((r.x - 0.5).abs() < 1e-10);
}

#[test]
fn edges_map_to_support() {
    let d = Gamma::new(2.0_f64, 1.0).unwrap();
    assert_eq!(d.inverse_f(0.0).unwrap(), 0.0);
    assert_eq!(d.inverse_f(1.0).unwrap(), f64::INFINITY);
    let unit = Support::new(0.0, 1.0).unwrap();
    let r = inverse_bisection(&|x: f64| x, 1.0, unit, &RootSettings::bisection()).unwrap();
    assert_eq!(r.x, 1.0);
}

#[test]
fn round_trip_through_every_family() {
    let families: Vec<Box<dyn ContinuousDistribution<f64>>> = vec![
        Box::new(Normal::new(-2.0, 0.5).unwrap()),
        Box::new(Exponential::new(3.0).unwrap()),
        Box::new(FoldedNormal::new(1.0, 2.0).unwrap()),
        Box::new(InverseGaussian::new(2.0, 5.0).unwrap()),
        Box::new(Gamma::new(4.0, 0.5).unwrap()),
    ];
    for d in &families {
        for i in 1..20 {
            let u = i as f64 / 20.0;
            let x = d.inverse_f(u).unwrap();
            assert!(d.support().contains(x));
            assert!((d.cdf(x) - u).abs() < 1e-12, "u = {u}, x = {x}");
            let y = d.inverse_f_bisection(u).unwrap();
            assert!((d.cdf(y) - u).abs() < 1e-10, "bisection u = {u}, y = {y}");
        }
    }
}

#[test]
fn bracket_then_solve_matches_combined_call() {
    let d = Normal::new(0.0_f64, 1.0).unwrap();
    let cdf = |x: f64| d.cdf(x);
    let u = 0.999;
    let br = find_bracket(&cdf, u, d.support()).unwrap();
    assert!(cdf(br.a) <= u && u <= cdf(br.b));
    let manual = solve(&cdf, br.a, br.b, u, d.support(), &RootSettings::default()).unwrap();
    let combined = inverse_brent(&cdf, u, d.support(), &RootSettings::default()).unwrap();
    assert_eq!(manual.x, combined.x);
}

#[test]
fn invalid_arguments_are_reported() {
    let d = Normal::new(0.0_f64, 1.0).unwrap();
    assert_eq!(d.inverse_f(-0.5), Err(Error::ProbabilityOutOfRange));
    let f = |x: f64| x;
    assert_eq!(
        solve(&f, 1.0, 2.0, 0.0, Support::real_line(), &RootSettings::default()),
        Err(Error::InvalidBracket)
    );
    let too_fine = RootSettings::bisection().with_precision(PrecisionBudget::new(20).unwrap());
    assert_eq!(
        inverse_bisection(&f, 0.5, Support::real_line(), &too_fine),
        Err(Error::PrecisionOutOfRange)
    );
}

#[test]
fn iteration_cap_is_reported_not_fatal() {
    let f = |x: f64| x.powi(3);
    let capped = RootSettings::default().with_max_iter(2);
    let r = inverse_brent(&f, 0.7, Support::new(0.0, 1.0).unwrap(), &capped).unwrap();
    assert!(!r.converged);
    assert_eq!(r.converged_or_err(), Err(Error::NoConvergence { iterations: 2 }));
}
