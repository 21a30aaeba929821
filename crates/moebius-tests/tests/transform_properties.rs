//! Transform Algebra Properties
//!
//! Randomized checks of the group structure: composition agrees with
//! sequential application, inversion undoes a map, and inverting twice
//! restores the original coefficients. Inputs come from seeded generators,
//! so a failing seed can be replayed on its own.

use moebius_core::{Complex, MoebiusTransform};
use moebius_tests::patterns::{self, MIN_POLE_CLEARANCE};
use moebius_tests::run_property;

const SEEDS: std::ops::Range<u64> = 0..500;

/// Relative tolerance for values that pass through a few divisions
const TOLERANCE: f64 = 1e-8;

fn close(actual: Complex, expected: Complex) -> bool {
    (actual - expected).norm() <= TOLERANCE * expected.norm().max(1.0)
}

fn clear_of_pole(t: &MoebiusTransform, z: Complex) -> bool {
    t.pole().is_none_or(|pole| (z - pole).norm() >= MIN_POLE_CLEARANCE)
}

fn max_coefficient(t: &MoebiusTransform) -> f64 {
    t.coefficients().iter().map(|z| z.norm()).fold(1.0, f64::max)
}

#[test]
fn test_compose_matches_sequential_apply() {
    eprintln!("\n=== Composition vs Sequential Application ===");

    let report = run_property("compose", SEEDS, |rng| {
        let t1 = patterns::random_transform(rng);
        let t2 = patterns::random_transform(rng);
        let composed = t1.compose(&t2);

        for _ in 0..8 {
            let z = patterns::random_complex(rng);
            let Ok(mid) = t2.apply(z) else { continue };
            if !clear_of_pole(&t2, z) || !clear_of_pole(&t1, mid) {
                continue;
            }
            let sequential = t1.apply(mid).map_err(|e| e.to_string())?;
            let direct = composed.apply(z).map_err(|e| e.to_string())?;
            if !close(direct, sequential) {
                return Err(format!("z = {z}: composed {direct}, sequential {sequential}"));
            }
        }
        Ok(())
    });

    eprintln!("{report}");
    report.assert_passed();
}

#[test]
fn test_compose_is_associative() {
    let report = run_property("associativity", SEEDS, |rng| {
        let t1 = patterns::random_transform(rng);
        let t2 = patterns::random_transform(rng);
        let t3 = patterns::random_transform(rng);

        let left = (t1 * t2) * t3;
        let right = t1 * (t2 * t3);
        let scale = max_coefficient(&left);
        if left.approx_eq(&right, 1e-12 * scale) {
            Ok(())
        } else {
            Err(format!("{left:?} != {right:?}"))
        }
    });
    report.assert_passed();
}

#[test]
fn test_inverse_undoes_transform() {
    eprintln!("\n=== Inverse Round Trip ===");

    let report = run_property("inverse round trip", SEEDS, |rng| {
        let t = patterns::random_transform(rng);
        let inv = t.invert().map_err(|e| e.to_string())?;

        for _ in 0..8 {
            let z = patterns::random_complex(rng);
            if !clear_of_pole(&t, z) {
                continue;
            }
            let w = t.apply(z).map_err(|e| e.to_string())?;
            let back = inv.apply(w).map_err(|e| format!("{e} at w = {w}"))?;
            if !close(back, z) {
                return Err(format!("z = {z} came back as {back}"));
            }
        }

        if !inv.compose(&t).is_identity(TOLERANCE) {
            return Err("inverse ∘ t is not the identity".to_string());
        }
        Ok(())
    });

    eprintln!("{report}");
    report.assert_passed();
}

#[test]
fn test_double_inverse_restores_coefficients() {
    let report = run_property("double inverse", SEEDS, |rng| {
        let t = patterns::random_transform(rng);
        let back = t
            .invert()
            .and_then(|inv| inv.invert())
            .map_err(|e| e.to_string())?;

        if back.approx_eq(&t, TOLERANCE * max_coefficient(&t)) {
            Ok(())
        } else {
            Err(format!("{t:?} came back as {back:?}"))
        }
    });
    report.assert_passed();
}

#[test]
fn test_inverse_determinant_is_reciprocal() {
    let report = run_property("inverse determinant", SEEDS, |rng| {
        let t = patterns::random_transform(rng);
        let inv = t.invert().map_err(|e| e.to_string())?;
        let product = inv.determinant() * t.determinant();
        if close(product, Complex::new(1.0, 0.0)) {
            Ok(())
        } else {
            Err(format!("det(t⁻¹)·det(t) = {product}"))
        }
    });
    report.assert_passed();
}

#[test]
fn test_scaled_coefficients_give_same_map() {
    let report = run_property("scale invariance", SEEDS, |rng| {
        let t = patterns::random_transform(rng);
        let k = patterns::random_complex(rng) + Complex::new(2.0, 0.0);
        let scaled = t.scale(k);

        if !scaled.equivalent_to(&t, TOLERANCE) {
            return Err(format!("scaling by {k} is not equivalent"));
        }
        let z = patterns::random_complex(rng);
        if !clear_of_pole(&t, z) {
            return Ok(());
        }
        let (w1, w2) = (
            t.apply(z).map_err(|e| e.to_string())?,
            scaled.apply(z).map_err(|e| e.to_string())?,
        );
        if close(w2, w1) {
            Ok(())
        } else {
            Err(format!("z = {z}: {w1} vs scaled {w2}"))
        }
    });
    report.assert_passed();
}

#[test]
fn test_identity_is_exact() {
    for z in patterns::generate_points(patterns::PointPattern::Spiral, 200) {
        assert_eq!(MoebiusTransform::IDENTITY.apply(z).unwrap(), z);
    }
}

#[test]
fn test_pole_always_rejected() {
    let report = run_property("pole", SEEDS, |rng| {
        let t = patterns::random_transform(rng);
        match t.pole() {
            Some(pole) if t.apply(pole).is_ok() => Err(format!("pole {pole} produced a value")),
            _ => Ok(()),
        }
    });
    report.assert_passed();
}
