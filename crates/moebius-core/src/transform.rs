//! Moebius transformations
//!
//! A Moebius transformation is the map
//!
//! ```text
//! f(z) = (a·z + b) / (c·z + d),    a·d − b·c ≠ 0
//! ```
//!
//! The coefficients form the 2×2 complex matrix `[[a, b], [c, d]]`;
//! composition of maps is matrix multiplication. Any nonzero scalar multiple
//! of the coefficients describes the same map. Coefficients are never
//! renormalized here: [`MoebiusTransform::invert`] scales by the determinant
//! so that inverting twice gives back exactly the original coefficients.

use std::ops::Mul;

use num_complex::Complex64;
use num_traits::One;

use crate::tolerance::Tolerance;
use crate::{Error, Result};

const ZERO: Complex64 = Complex64::new(0.0, 0.0);
const ONE: Complex64 = Complex64::new(1.0, 0.0);

/// A Moebius transformation `z ↦ (a·z + b) / (c·z + d)`
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MoebiusTransform {
    a: Complex64,
    b: Complex64,
    c: Complex64,
    d: Complex64,
}

impl MoebiusTransform {
    /// The identity map `z ↦ z`
    pub const IDENTITY: Self = Self::new(ONE, ZERO, ZERO, ONE);

    /// Create a transformation from raw coefficients
    ///
    /// The determinant is not checked; use [`try_new`](Self::try_new) for
    /// untrusted coefficients.
    #[inline]
    pub const fn new(a: Complex64, b: Complex64, c: Complex64, d: Complex64) -> Self {
        Self { a, b, c, d }
    }

    /// Create a transformation, rejecting a vanishing determinant
    pub fn try_new(a: Complex64, b: Complex64, c: Complex64, d: Complex64) -> Result<Self> {
        Self::try_new_with(a, b, c, d, &Tolerance::default())
    }

    /// Create a transformation, rejecting a vanishing determinant under `tol`
    pub fn try_new_with(
        a: Complex64,
        b: Complex64,
        c: Complex64,
        d: Complex64,
        tol: &Tolerance,
    ) -> Result<Self> {
        let t = Self::new(a, b, c, d);
        t.check_determinant(tol)?;
        Ok(t)
    }

    /// The inversion `z ↦ 1/z`
    pub const fn inversion() -> Self {
        Self::new(ZERO, ONE, ONE, ZERO)
    }

    /// The affine map `z ↦ scale·z + offset`
    pub const fn affine(scale: Complex64, offset: Complex64) -> Self {
        Self::new(scale, offset, ZERO, ONE)
    }

    /// Coefficient `a`
    #[inline]
    pub fn a(&self) -> Complex64 {
        self.a
    }

    /// Coefficient `b`
    #[inline]
    pub fn b(&self) -> Complex64 {
        self.b
    }

    /// Coefficient `c`
    #[inline]
    pub fn c(&self) -> Complex64 {
        self.c
    }

    /// Coefficient `d`
    #[inline]
    pub fn d(&self) -> Complex64 {
        self.d
    }

    /// Coefficients as `[a, b, c, d]`
    #[inline]
    pub fn coefficients(&self) -> [Complex64; 4] {
        [self.a, self.b, self.c, self.d]
    }

    /// Calculate the determinant `a·d − b·c`
    #[inline]
    pub fn determinant(&self) -> Complex64 {
        self.a * self.d - self.b * self.c
    }

    /// Magnitude of the terms the determinant is computed from
    #[inline]
    fn determinant_scale(&self) -> f64 {
        (self.a * self.d).norm() + (self.b * self.c).norm()
    }

    pub(crate) fn check_determinant(&self, tol: &Tolerance) -> Result<Complex64> {
        let determinant = self.determinant();
        if tol.is_zero(determinant, self.determinant_scale()) {
            tracing::debug!(%determinant, "degenerate moebius transform");
            return Err(Error::DegenerateTransform { determinant });
        }
        Ok(determinant)
    }

    /// Evaluate the transformation at `z`
    ///
    /// Fails with [`Error::Pole`] when `z` is the pole `−d/c`.
    #[inline]
    pub fn apply(&self, z: Complex64) -> Result<Complex64> {
        self.apply_with(z, &Tolerance::default())
    }

    /// Evaluate the transformation at `z` using `tol` for the pole check
    pub fn apply_with(&self, z: Complex64, tol: &Tolerance) -> Result<Complex64> {
        let cz = self.c * z;
        let denominator = cz + self.d;
        if tol.is_zero(denominator, cz.norm() + self.d.norm()) {
            tracing::debug!(?z, "evaluation point is the pole");
            return Err(Error::Pole { z });
        }

        let w = (self.a * z + self.b) / denominator;
        if !w.is_finite() {
            tracing::debug!(?z, "non-finite image");
            return Err(Error::NonFinite("apply"));
        }
        Ok(w)
    }

    /// Compose two transformations
    ///
    /// Returns `self ∘ other`: `other` is applied first.
    #[inline]
    pub fn compose(&self, other: &Self) -> Self {
        Self {
            a: self.a * other.a + self.b * other.c,
            b: self.a * other.b + self.b * other.d,
            c: self.c * other.a + self.d * other.c,
            d: self.c * other.b + self.d * other.d,
        }
    }

    /// Calculate the inverse transformation
    ///
    /// The inverse coefficients are `(−d, b, c, −a) / det`. Their determinant
    /// is `1/det`, so `t.invert()?.invert()?` reproduces the coefficients of
    /// `t`, not just an equivalent multiple of them.
    pub fn invert(&self) -> Result<Self> {
        self.invert_with(&Tolerance::default())
    }

    /// Calculate the inverse transformation using `tol` for the determinant check
    pub fn invert_with(&self, tol: &Tolerance) -> Result<Self> {
        let det = self.check_determinant(tol)?;
        Ok(Self {
            a: -self.d / det,
            b: self.b / det,
            c: self.c / det,
            d: -self.a / det,
        })
    }

    /// Scale all coefficients by `k`
    ///
    /// The map is unchanged for any nonzero `k`.
    #[inline]
    pub fn scale(&self, k: Complex64) -> Self {
        Self {
            a: self.a * k,
            b: self.b * k,
            c: self.c * k,
            d: self.d * k,
        }
    }

    /// Check whether `c` vanishes, i.e. the map is affine
    pub fn is_affine(&self) -> bool {
        self.is_affine_with(&Tolerance::default())
    }

    /// Check whether `c` vanishes under `tol`
    pub fn is_affine_with(&self, tol: &Tolerance) -> bool {
        tol.is_zero(self.c, self.a.norm() + self.b.norm() + self.d.norm())
    }

    /// The pole `−d/c`, or `None` for an affine map
    pub fn pole(&self) -> Option<Complex64> {
        self.pole_with(&Tolerance::default())
    }

    /// The pole `−d/c`, or `None` when `c` vanishes under `tol`
    pub fn pole_with(&self, tol: &Tolerance) -> Option<Complex64> {
        if self.is_affine_with(tol) {
            None
        } else {
            Some(-self.d / self.c)
        }
    }

    /// Check if coefficients are approximately equal to another's
    pub fn approx_eq(&self, other: &Self, epsilon: f64) -> bool {
        self.coefficients()
            .iter()
            .zip(other.coefficients().iter())
            .all(|(p, q)| (p - q).norm() <= epsilon)
    }

    /// Check if both transformations describe the same map
    ///
    /// True when the coefficient vectors are parallel: every 2×2 minor
    /// `p_i·q_j − p_j·q_i` is below `epsilon` relative to the coefficient
    /// magnitudes.
    pub fn equivalent_to(&self, other: &Self, epsilon: f64) -> bool {
        let p = self.coefficients();
        let q = other.coefficients();
        let max_p = p.iter().map(|z| z.norm()).fold(0.0, f64::max);
        let max_q = q.iter().map(|z| z.norm()).fold(0.0, f64::max);
        if max_p == 0.0 || max_q == 0.0 {
            return false;
        }

        let bound = epsilon * max_p * max_q;
        for i in 0..4 {
            for j in (i + 1)..4 {
                if (p[i] * q[j] - p[j] * q[i]).norm() > bound {
                    return false;
                }
            }
        }
        true
    }

    /// Check if this is the identity map up to a scalar multiple
    pub fn is_identity(&self, epsilon: f64) -> bool {
        self.equivalent_to(&Self::IDENTITY, epsilon)
    }
}

impl Default for MoebiusTransform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Mul for MoebiusTransform {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        self.compose(&rhs)
    }
}

impl Mul<&MoebiusTransform> for &MoebiusTransform {
    type Output = MoebiusTransform;

    fn mul(self, rhs: &MoebiusTransform) -> Self::Output {
        self.compose(rhs)
    }
}

impl One for MoebiusTransform {
    fn one() -> Self {
        Self::IDENTITY
    }
}

impl From<[Complex64; 4]> for MoebiusTransform {
    fn from(c: [Complex64; 4]) -> Self {
        Self::new(c[0], c[1], c[2], c[3])
    }
}
