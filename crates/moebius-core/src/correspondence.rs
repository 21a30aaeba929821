//! Moebius transformations from three point correspondences
//!
//! A Moebius transformation is fixed by the images of three distinct points.
//! Each triple is first sent to the reference configuration `(0, 1, ∞)` by
//!
//! ```text
//! K(z) = (k·z − k·z1) / (z − z3),    k = (z2 − z3) / (z2 − z1)
//! ```
//!
//! and the transformation taking `(z1, z2, z3)` to `(w1, w2, w3)` is then
//! `K_w⁻¹ ∘ K_z`.

use num_complex::Complex64;

use crate::error::TripleSide;
use crate::tolerance::Tolerance;
use crate::transform::MoebiusTransform;
use crate::{Error, Result};

/// Index pairs of a triple, in the order they are checked
const PAIRS: [(usize, usize); 3] = [(0, 1), (1, 2), (0, 2)];

/// Derive the transformation taking `z1, z2, z3` to `w1, w2, w3`
pub fn derive(
    z1: Complex64,
    z2: Complex64,
    z3: Complex64,
    w1: Complex64,
    w2: Complex64,
    w3: Complex64,
) -> Result<MoebiusTransform> {
    derive_with([z1, z2, z3], [w1, w2, w3], &Tolerance::default())
}

/// Derive the transformation taking each `src[i]` to `dst[i]`
pub fn derive_from_triples(src: [Complex64; 3], dst: [Complex64; 3]) -> Result<MoebiusTransform> {
    derive_with(src, dst, &Tolerance::default())
}

/// Derive the transformation taking each `src[i]` to `dst[i]` using `tol`
/// for the coincidence checks
pub fn derive_with(
    src: [Complex64; 3],
    dst: [Complex64; 3],
    tol: &Tolerance,
) -> Result<MoebiusTransform> {
    let k_z = reference_map(src, TripleSide::Source, tol)?;
    let k_w = reference_map(dst, TripleSide::Target, tol)?;

    // det K_w = k·(w1 − w3) can still fall below tolerance for points that
    // pass the pairwise check but crowd together
    let k_w_inv = k_w
        .invert_with(tol)
        .map_err(|_| coincidence_error(&dst, TripleSide::Target))?;
    Ok(k_w_inv.compose(&k_z))
}

/// Transformation sending `points` to `(0, 1, ∞)`
fn reference_map(
    points: [Complex64; 3],
    side: TripleSide,
    tol: &Tolerance,
) -> Result<MoebiusTransform> {
    check_distinct(&points, side, tol)?;

    let [z1, z2, z3] = points;
    let k = (z2 - z3) / (z2 - z1);
    Ok(MoebiusTransform::new(
        k,
        -z1 * k,
        Complex64::new(1.0, 0.0),
        -z3,
    ))
}

fn check_distinct(points: &[Complex64; 3], side: TripleSide, tol: &Tolerance) -> Result<()> {
    if points.iter().any(|z| !z.is_finite()) {
        return Err(Error::NonFinite("point correspondence"));
    }

    for (first, second) in PAIRS {
        let (p, q) = (points[first], points[second]);
        if tol.is_zero(p - q, p.norm().max(q.norm())) {
            return Err(pair_error(side, first, second));
        }
    }
    Ok(())
}

/// Error naming the closest pair of `points`
fn coincidence_error(points: &[Complex64; 3], side: TripleSide) -> Error {
    let (first, second) = PAIRS
        .into_iter()
        .min_by(|&(i, j), &(k, l)| {
            (points[i] - points[j])
                .norm()
                .total_cmp(&(points[k] - points[l]).norm())
        })
        .unwrap_or(PAIRS[0]);
    pair_error(side, first, second)
}

fn pair_error(side: TripleSide, first: usize, second: usize) -> Error {
    tracing::debug!(
        ?side,
        first = first + 1,
        second = second + 1,
        "coincident points in correspondence triple"
    );
    Error::CollinearOrDuplicatePoints {
        side,
        first: first + 1,
        second: second + 1,
    }
}
