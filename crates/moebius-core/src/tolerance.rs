//! Near-zero tolerance configuration
//!
//! Every degeneracy check in this crate (poles, vanishing determinants,
//! coincident points, circles through the inversion center) goes through a
//! [`Tolerance`]. Each check supplies the magnitude of the quantities the
//! tested value was computed from, so relative mode scales with the inputs.

use num_complex::Complex64;

/// Smallest scale used in relative mode
///
/// Keeps a relative check meaningful when all inputs are themselves tiny.
pub const MIN_SCALE: f64 = 1.0;

/// Default epsilon for near-zero checks
pub const DEFAULT_EPSILON: f64 = 1e-10;

/// How `epsilon` is interpreted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ToleranceMode {
    /// `|v| <= epsilon`
    #[default]
    Absolute,
    /// `|v| <= epsilon * max(scale, MIN_SCALE)`
    Relative,
}

/// Tolerance used for all near-zero checks
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tolerance {
    /// Threshold below which a value counts as zero
    pub epsilon: f64,
    /// Absolute or relative interpretation of `epsilon`
    pub mode: ToleranceMode,
}

impl Default for Tolerance {
    fn default() -> Self {
        Self {
            epsilon: DEFAULT_EPSILON,
            mode: ToleranceMode::Absolute,
        }
    }
}

impl Tolerance {
    /// Create a tolerance with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Absolute tolerance with the given epsilon
    pub fn absolute(epsilon: f64) -> Self {
        Self {
            epsilon,
            mode: ToleranceMode::Absolute,
        }
    }

    /// Relative tolerance with the given epsilon
    pub fn relative(epsilon: f64) -> Self {
        Self {
            epsilon,
            mode: ToleranceMode::Relative,
        }
    }

    /// Set epsilon
    pub fn with_epsilon(mut self, epsilon: f64) -> Self {
        self.epsilon = epsilon;
        self
    }

    /// Set mode
    pub fn with_mode(mut self, mode: ToleranceMode) -> Self {
        self.mode = mode;
        self
    }

    /// Threshold for a value computed from inputs of magnitude `scale`
    #[inline]
    pub fn threshold(&self, scale: f64) -> f64 {
        match self.mode {
            ToleranceMode::Absolute => self.epsilon,
            ToleranceMode::Relative => self.epsilon * scale.max(MIN_SCALE),
        }
    }

    /// Check whether a real magnitude is negligible
    #[inline]
    pub fn is_negligible(&self, value: f64, scale: f64) -> bool {
        value.abs() <= self.threshold(scale)
    }

    /// Check whether a complex value is negligible
    #[inline]
    pub fn is_zero(&self, z: Complex64, scale: f64) -> bool {
        self.is_negligible(z.norm(), scale)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_absolute() {
        let tol = Tolerance::default();
        assert_eq!(tol.mode, ToleranceMode::Absolute);
        assert_eq!(tol.epsilon, DEFAULT_EPSILON);
        assert!(tol.is_negligible(1e-11, 1e6));
        assert!(!tol.is_negligible(1e-9, 1e-6));
    }

    #[test]
    fn test_relative_scales_with_inputs() {
        let tol = Tolerance::relative(1e-10);
        assert!(tol.is_negligible(1e-5, 1e6));
        assert!(!tol.is_negligible(1e-5, 1.0));
        // Small scales are floored at MIN_SCALE
        assert!(tol.is_negligible(5e-11, 1e-20));
    }

    #[test]
    fn test_builder() {
        let tol = Tolerance::new()
            .with_epsilon(1e-6)
            .with_mode(ToleranceMode::Relative);
        assert_eq!(tol, Tolerance::relative(1e-6));
    }

    #[test]
    fn test_complex_zero() {
        let tol = Tolerance::absolute(1e-8);
        assert!(tol.is_zero(Complex64::new(1e-9, -1e-9), 1.0));
        assert!(!tol.is_zero(Complex64::new(0.0, 1e-7), 1.0));
    }
}
