//! # moebius - Moebius transformations of the complex plane
//!
//! A small algebra toolkit for linear-fractional maps
//! `f(z) = (a·z + b) / (c·z + d)`:
//!
//! - **Transform**: evaluate, compose and invert transformations
//! - **Correspondence**: the unique transformation taking three points to three points
//! - **Circle**: the image of a circle, by factoring into affine and inversion stages
//! - **Batch**: elementwise evaluation over slices and interleaved buffers
//!
//! Degenerate inputs (poles, vanishing determinants, coincident points,
//! circles through the inversion center) are reported as [`Error`] values,
//! never as NaN or infinite results. All near-zero checks go through a
//! configurable [`Tolerance`].
//!
//! ## Quick Start
//!
//! ```
//! use moebius_core::{Circle, Complex, MoebiusTransform, derive};
//!
//! let c = |re, im| Complex::new(re, im);
//!
//! // The map taking 0, 1, 2 to i, 1 + i, 3 + i
//! let t = derive(c(0.0, 0.0), c(1.0, 0.0), c(2.0, 0.0), c(0.0, 1.0), c(1.0, 1.0), c(3.0, 1.0))?;
//! assert!((t.apply(c(1.0, 0.0))? - c(1.0, 1.0)).norm() < 1e-9);
//!
//! // Inverting twice gives back the same coefficients
//! assert!(t.invert()?.invert()?.approx_eq(&t, 1e-9));
//!
//! // Image of a circle under z ↦ 1/z
//! let image = Circle::new(c(2.0, 0.0), 0.5)?.transform(&MoebiusTransform::inversion())?;
//! assert!((image.radius() - 2.0 / 15.0).abs() < 1e-12);
//! # Ok::<(), moebius_core::Error>(())
//! ```

pub mod batch;
pub mod circle;
pub mod correspondence;
pub mod error;
pub mod tolerance;
pub mod transform;

pub use circle::{Circle, inverse_circle, inverse_circle_with, transform_circle, transform_circle_with};
pub use correspondence::{derive, derive_from_triples, derive_with};
pub use error::{Error, Result, TripleSide};
pub use tolerance::{Tolerance, ToleranceMode};
pub use transform::MoebiusTransform;

/// Complex number type used throughout the crate
pub use num_complex::Complex64 as Complex;

/// Version of moebius
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
