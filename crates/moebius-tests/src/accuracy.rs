//! Accuracy measurement for transformed points and circles
//!
//! Errors are reported relative to the size of the quantity being checked:
//! a boundary error is divided by the image radius (floored at 1), a point
//! error by the magnitude of the expected point (floored at 1). Images near a
//! pole can be very large, and absolute errors grow with them.

use moebius_core::{Circle, Complex};

/// Statistics from an error comparison
#[derive(Debug, Clone)]
pub struct ErrorStats {
    /// Mean relative error across all samples
    pub mean: f64,
    /// Maximum relative error
    pub max: f64,
    /// 95th percentile relative error
    pub p95: f64,
    /// Number of samples
    pub count: usize,
}

impl ErrorStats {
    /// Check if all errors are at round-off level (< 1e-12)
    pub fn is_exact(&self) -> bool {
        self.max < 1e-12
    }

    /// Check if all errors are below `tolerance`
    pub fn within(&self, tolerance: f64) -> bool {
        self.max < tolerance
    }

    fn from_errors(mut errors: Vec<f64>) -> Self {
        errors.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

        let count = errors.len();
        let mean = if count == 0 {
            0.0
        } else {
            errors.iter().sum::<f64>() / count as f64
        };
        let max = *errors.last().unwrap_or(&0.0);
        let p95_idx = (count as f64 * 0.95) as usize;
        let p95 = errors.get(p95_idx).copied().unwrap_or(max);

        Self {
            mean,
            max,
            p95,
            count,
        }
    }
}

/// Relative distances of `points` from the boundary of `circle`
pub fn boundary_errors(circle: &Circle, points: &[Complex]) -> ErrorStats {
    let scale = circle.radius().max(1.0);
    ErrorStats::from_errors(
        points
            .iter()
            .map(|&p| circle.distance_to_boundary(p) / scale)
            .collect(),
    )
}

/// Relative errors between expected and actual points
pub fn point_errors(expected: &[Complex], actual: &[Complex]) -> ErrorStats {
    assert_eq!(expected.len(), actual.len());

    ErrorStats::from_errors(
        expected
            .iter()
            .zip(actual.iter())
            .map(|(e, a)| (e - a).norm() / e.norm().max(1.0))
            .collect(),
    )
}
