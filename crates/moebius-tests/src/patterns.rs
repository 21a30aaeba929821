//! Test pattern generation
//!
//! Seeded generators for the inputs of the property tests. Coordinates are
//! drawn from the square `[-0.5, 0.5] × [-0.5, 0.5]`; degenerate draws are
//! rejected and redrawn so every generated value is valid input.

use moebius_core::{Circle, Complex, MoebiusTransform};
use rand::prelude::*;
use rand_chacha::ChaCha8Rng;

/// Smallest determinant magnitude accepted for a random transformation
pub const MIN_DETERMINANT: f64 = 1e-2;

/// Smallest pairwise distance within a random triple
pub const MIN_SEPARATION: f64 = 0.05;

/// Smallest gap between a random circle and the transformation's pole
pub const MIN_POLE_CLEARANCE: f64 = 0.05;

/// Create the generator used by all patterns
pub fn rng(seed: u64) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(seed)
}

/// Point distribution types
#[derive(Debug, Clone, Copy)]
pub enum PointPattern {
    /// Uniform in the centered unit square
    Random(u64),
    /// Regular grid over the centered unit square
    Grid,
    /// Evenly spaced points on the unit circle
    UnitCircle,
    /// Spiral from radius 0.1 to 2
    Spiral,
}

/// Generate `count` points in the given pattern
pub fn generate_points(pattern: PointPattern, count: usize) -> Vec<Complex> {
    match pattern {
        PointPattern::Random(seed) => {
            let mut rng = rng(seed);
            (0..count).map(|_| random_complex(&mut rng)).collect()
        }
        PointPattern::Grid => {
            let side = (count as f64).sqrt().ceil().max(1.0) as usize;
            (0..count)
                .map(|i| {
                    let (x, y) = (i % side, i / side);
                    Complex::new(
                        x as f64 / side as f64 - 0.5,
                        y as f64 / side as f64 - 0.5,
                    )
                })
                .collect()
        }
        PointPattern::UnitCircle => (0..count)
            .map(|i| Complex::from_polar(1.0, std::f64::consts::TAU * i as f64 / count as f64))
            .collect(),
        PointPattern::Spiral => (0..count)
            .map(|i| {
                let t = i as f64 / count.max(1) as f64;
                Complex::from_polar(0.1 + 1.9 * t, 12.0 * t)
            })
            .collect(),
    }
}

/// Uniform random point in the centered unit square
pub fn random_complex(rng: &mut impl Rng) -> Complex {
    Complex::new(rng.r#gen::<f64>() - 0.5, rng.r#gen::<f64>() - 0.5)
}

/// Random transformation with `|det| >= MIN_DETERMINANT`
pub fn random_transform(rng: &mut impl Rng) -> MoebiusTransform {
    loop {
        let t = MoebiusTransform::new(
            random_complex(rng),
            random_complex(rng),
            random_complex(rng),
            random_complex(rng),
        );
        if t.determinant().norm() >= MIN_DETERMINANT {
            return t;
        }
    }
}

/// Random triple of points at least `MIN_SEPARATION` apart
pub fn random_triple(rng: &mut impl Rng) -> [Complex; 3] {
    loop {
        let triple = [random_complex(rng), random_complex(rng), random_complex(rng)];
        let separated = [(0, 1), (1, 2), (0, 2)]
            .iter()
            .all(|&(i, j)| (triple[i] - triple[j]).norm() >= MIN_SEPARATION);
        if separated {
            return triple;
        }
    }
}

/// Random circle with radius in `[0.01, 0.3]`
pub fn random_circle(rng: &mut impl Rng) -> Circle {
    loop {
        let center = random_complex(rng);
        let radius = rng.gen_range(0.01..0.3);
        if let Ok(circle) = Circle::new(center, radius) {
            return circle;
        }
    }
}

/// Random circle staying at least `MIN_POLE_CLEARANCE` away from the pole of `t`
pub fn random_circle_avoiding_pole(rng: &mut impl Rng, t: &MoebiusTransform) -> Circle {
    loop {
        let circle = random_circle(rng);
        let clear = match t.pole() {
            Some(pole) => circle.distance_to_boundary(pole) >= MIN_POLE_CLEARANCE,
            None => true,
        };
        if clear {
            return circle;
        }
    }
}
