//! Error types for moebius

use num_complex::Complex64;
use thiserror::Error;

/// Result type for moebius operations
pub type Result<T> = std::result::Result<T, Error>;

/// Which triple of a point correspondence an error refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TripleSide {
    /// The source triple `(z1, z2, z3)`
    Source,
    /// The target triple `(w1, w2, w3)`
    Target,
}

impl std::fmt::Display for TripleSide {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TripleSide::Source => write!(f, "source"),
            TripleSide::Target => write!(f, "target"),
        }
    }
}

/// Errors that can occur in moebius operations
#[derive(Error, Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum Error {
    /// The evaluation point is the pole of the transformation (`c·z + d ≈ 0`)
    #[error("point {z} is the pole of the transformation")]
    Pole { z: Complex64 },

    /// The determinant `a·d − b·c` vanishes
    #[error("degenerate transformation: determinant {determinant} is zero")]
    DegenerateTransform { determinant: Complex64 },

    /// Two points of a correspondence triple coincide
    #[error("{side} points {first} and {second} coincide")]
    CollinearOrDuplicatePoints {
        side: TripleSide,
        first: usize,
        second: usize,
    },

    /// The circle passes through the inversion center, or its radius is not positive
    #[error("degenerate circle: center {center}, radius {radius}")]
    DegenerateCircle { center: Complex64, radius: f64 },

    /// A non-finite value was produced or supplied
    #[error("non-finite value in {0}")]
    NonFinite(&'static str),

    /// Buffer size mismatch
    #[error("Buffer size mismatch: expected {expected}, got {actual}")]
    BufferSize { expected: usize, actual: usize },
}
