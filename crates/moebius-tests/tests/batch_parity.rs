//! Batch Parity Tests
//!
//! Every batch entry point must produce exactly what the scalar operation
//! produces for each element: the same values bit for bit, and the same
//! first error when an element fails.

use moebius_core::batch::{
    apply_all, apply_all_with, apply_batch, apply_each, apply_interleaved, par_apply_all,
    par_apply_all_with, par_transform_circles, par_transform_circles_with, transform_circles,
    transform_circles_with,
};
use moebius_core::{Circle, Complex, Error, MoebiusTransform, Tolerance};
use moebius_tests::patterns::{self, PointPattern};
use moebius_tests::{point_errors, run_property};

const SIZES: [usize; 4] = [0, 1, 17, 4096];

#[test]
fn test_batch_matches_scalar_for_all_patterns() {
    eprintln!("\n=== Batch vs Scalar ===");

    let mut rng = patterns::rng(42);
    let t = patterns::random_transform(&mut rng);

    for pattern in [
        PointPattern::Random(7),
        PointPattern::Grid,
        PointPattern::UnitCircle,
        PointPattern::Spiral,
    ] {
        for size in SIZES {
            let points = patterns::generate_points(pattern, size);
            let scalar: Vec<_> = points.iter().map(|&z| t.apply(z)).collect();

            match scalar.iter().cloned().collect::<Result<Vec<Complex>, Error>>() {
                Ok(expected) => {
                    let batch = apply_all(&t, &points).unwrap();
                    let stats = point_errors(&expected, &batch);
                    eprintln!("  {pattern:?} x {size}: max error {:.2e}", stats.max);
                    assert_eq!(batch, expected);
                }
                Err(first) => assert_eq!(apply_all(&t, &points), Err(first)),
            }
            assert_eq!(apply_each(&t, &points), scalar);
        }
    }
}

#[test]
fn test_parallel_matches_sequential() {
    let report = run_property("parallel", 0..50, |rng| {
        let t = patterns::random_transform(rng);
        let points: Vec<Complex> = (0..257).map(|_| patterns::random_complex(rng)).collect();
        if par_apply_all(&t, &points) != apply_all(&t, &points) {
            return Err("par_apply_all differs".to_string());
        }

        let circles: Vec<Circle> = (0..33)
            .map(|_| patterns::random_circle_avoiding_pole(rng, &t))
            .collect();
        if par_transform_circles(&t, &circles) != transform_circles(&t, &circles) {
            return Err("par_transform_circles differs".to_string());
        }
        Ok(())
    });
    report.assert_passed();
}

#[test]
fn test_interleaved_matches_complex_batch() {
    let mut rng = patterns::rng(7);
    let t = patterns::random_transform(&mut rng);
    let points: Vec<Complex> = (0..100)
        .map(|_| patterns::random_complex(&mut rng))
        .filter(|&z| t.apply(z).is_ok())
        .collect();

    let flat: Vec<f64> = points.iter().flat_map(|z| [z.re, z.im]).collect();
    // Extra room at the end must be left untouched
    let mut out = vec![f64::NAN; flat.len() + 2];
    apply_interleaved(&t, &flat, &mut out).unwrap();

    let expected = apply_all(&t, &points).unwrap();
    for (i, w) in expected.iter().enumerate() {
        assert_eq!(out[2 * i], w.re);
        assert_eq!(out[2 * i + 1], w.im);
    }
    assert!(out[flat.len()..].iter().all(|v| v.is_nan()));
}

#[test]
fn test_buffer_size_errors() {
    let t = MoebiusTransform::inversion();
    let points = patterns::generate_points(PointPattern::UnitCircle, 8);

    let mut short = vec![Complex::new(0.0, 0.0); 4];
    assert_eq!(
        apply_batch(&t, &points, &mut short),
        Err(Error::BufferSize {
            expected: 8,
            actual: 4
        })
    );

    let mut out = [0.0; 4];
    assert!(matches!(
        apply_interleaved(&t, &[1.0, 0.0, 2.0], &mut out),
        Err(Error::BufferSize { .. })
    ));
}

#[test]
fn test_circle_batch_stops_at_first_failure() {
    let c = Complex::new;
    let t = MoebiusTransform::inversion();
    let circles = [
        Circle::new(c(2.0, 0.0), 0.5).unwrap(),
        Circle::new(c(1.0, 0.0), 1.0).unwrap(),
        Circle::new(c(0.0, 3.0), 4.0).unwrap(),
    ];
    assert!(matches!(
        transform_circles(&t, &circles),
        Err(Error::DegenerateCircle { .. })
    ));
    assert_eq!(transform_circles(&t, &circles[..1]).unwrap().len(), 1);
}

#[test]
fn test_relative_tolerance_is_scale_invariant() {
    let c = Complex::new;
    // z/(z − 1) with coefficients blown up by 1e6
    let t = MoebiusTransform::new(c(1.0, 0.0), c(0.0, 0.0), c(1.0, 0.0), c(-1.0, 0.0))
        .scale(c(1e6, 0.0));
    let points = [c(3.0, 0.0), c(1.0 + 1e-12, 0.0)];
    let relative = Tolerance::relative(1e-10);

    // The absolute default only sees a denominator of about 1e-6
    assert!(apply_all(&t, &points).is_ok());
    assert!(matches!(
        apply_all_with(&t, &points, &relative),
        Err(Error::Pole { .. })
    ));
    assert_eq!(
        par_apply_all_with(&t, &points, &relative),
        apply_all_with(&t, &points, &relative)
    );

    let circles = [
        Circle::new(c(3.0, 0.0), 0.5).unwrap(),
        Circle::new(c(-2.0, 1.0), 0.25).unwrap(),
    ];
    let images = transform_circles_with(&t, &circles, &relative).unwrap();
    assert_eq!(images, transform_circles(&t, &circles).unwrap());
    assert_eq!(
        par_transform_circles_with(&t, &circles, &relative).unwrap(),
        images
    );
}
