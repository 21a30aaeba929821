//! Images of circles under Moebius transformations
//!
//! A general transformation with `c ≠ 0` factors into three stages:
//!
//! ```text
//! w1 = c·z + d                    (affine)
//! w2 = 1 / w1                     (inversion in the unit circle)
//! w3 = (b − a·d/c)·w2 + a/c       (affine)
//! ```
//!
//! An affine stage `z ↦ m·z + t` moves the center by the same map and scales
//! the radius by `|m|`. The inversion stage is handled by [`inverse_circle`].
//! When `c ≈ 0` the transformation is itself affine, `z ↦ (a/d)·z + b/d`.

use std::f64::consts::TAU;

use num_complex::Complex64;

use crate::tolerance::Tolerance;
use crate::transform::MoebiusTransform;
use crate::{Error, Result};

/// A circle `{z : |z − center| = radius}` with positive radius
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Circle {
    center: Complex64,
    radius: f64,
}

impl Circle {
    /// Create a circle
    ///
    /// Fails with [`Error::DegenerateCircle`] for a radius that is not
    /// positive, and [`Error::NonFinite`] for non-finite input.
    pub fn new(center: Complex64, radius: f64) -> Result<Self> {
        if !center.is_finite() || !radius.is_finite() {
            return Err(Error::NonFinite("circle"));
        }
        if radius <= 0.0 {
            return Err(Error::DegenerateCircle { center, radius });
        }
        Ok(Self { center, radius })
    }

    /// Center of the circle
    #[inline]
    pub fn center(&self) -> Complex64 {
        self.center
    }

    /// Radius of the circle
    #[inline]
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Point on the circle at angle `theta`
    #[inline]
    pub fn point_at(&self, theta: f64) -> Complex64 {
        self.center + Complex64::from_polar(self.radius, theta)
    }

    /// `n` evenly spaced boundary points, starting at angle zero
    pub fn sample_boundary(&self, n: usize) -> Vec<Complex64> {
        (0..n)
            .map(|k| self.point_at(TAU * k as f64 / n as f64))
            .collect()
    }

    /// Distance from `z` to the nearest point of the circle
    #[inline]
    pub fn distance_to_boundary(&self, z: Complex64) -> f64 {
        ((z - self.center).norm() - self.radius).abs()
    }

    /// Check whether `z` lies strictly inside the circle
    #[inline]
    pub fn contains(&self, z: Complex64) -> bool {
        (z - self.center).norm() < self.radius
    }

    /// Image of this circle under `transform`
    pub fn transform(&self, transform: &MoebiusTransform) -> Result<Self> {
        transform_circle(self, transform)
    }
}

/// Invert the circle with center `z` and radius `r` in the unit circle
///
/// Returns the center and radius of the image under `w ↦ 1/w`.
pub fn inverse_circle(z: Complex64, r: f64) -> Result<(Complex64, f64)> {
    inverse_circle_with(z, r, &Tolerance::default())
}

/// Invert a circle in the unit circle using `tol` to detect circles through
/// the origin
///
/// The two points of the circle on the line through the origin and `z` lie
/// at signed distances `R − r` and `R + r` along that line, where `R = |z|`.
/// Inversion keeps them on the (conjugated) line and they stay diametrically
/// opposite, so the image is centered at their midpoint. A negative `R − r`
/// (origin inside the circle) is handled by the same formula.
pub fn inverse_circle_with(z: Complex64, r: f64, tol: &Tolerance) -> Result<(Complex64, f64)> {
    if !z.is_finite() || !r.is_finite() {
        return Err(Error::NonFinite("inverse_circle"));
    }
    if r <= 0.0 {
        return Err(Error::DegenerateCircle { center: z, radius: r });
    }

    let big_r = z.norm();
    if tol.is_negligible(big_r - r, big_r + r) {
        tracing::debug!(?z, r, "circle passes through the inversion center");
        return Err(Error::DegenerateCircle { center: z, radius: r });
    }

    let near = 1.0 / (big_r - r);
    let far = 1.0 / (big_r + r);
    let r_inv = (near - far).abs() / 2.0;
    let z_inv = Complex64::from_polar((near + far) / 2.0, -z.arg());
    Ok((z_inv, r_inv))
}

/// Image of `circle` under `transform`
pub fn transform_circle(circle: &Circle, transform: &MoebiusTransform) -> Result<Circle> {
    transform_circle_with(circle, transform, &Tolerance::default())
}

/// Image of `circle` under `transform` using `tol` for all degeneracy checks
pub fn transform_circle_with(
    circle: &Circle,
    transform: &MoebiusTransform,
    tol: &Tolerance,
) -> Result<Circle> {
    transform.check_determinant(tol)?;
    let [a, b, c, d] = transform.coefficients();
    let (z0, r0) = (circle.center, circle.radius);

    if transform.is_affine_with(tol) {
        tracing::trace!("affine transform, mapping circle directly");
        let scale = a / d;
        return Circle::new(scale * z0 + b / d, scale.norm() * r0);
    }

    let (z1, r1) = (c * z0 + d, c.norm() * r0);
    let (z2, r2) = inverse_circle_with(z1, r1, tol)?;

    let scale = b - a * d / c;
    Circle::new(scale * z2 + a / c, scale.norm() * r2)
}
