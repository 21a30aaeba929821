//! Batch evaluation over many points or circles
//!
//! Every function here is elementwise-equivalent to calling the scalar
//! operation on each input in order. Kernels are compiled for several
//! instruction sets with `multiversion` and dispatched at runtime.
//!
//! A failing element fails the whole call and output buffers are left
//! untouched. Use [`apply_each`] to keep the per-point results instead.
//!
//! With the `parallel` feature, `par_*` variants split the work across the
//! rayon thread pool.

use multiversion::multiversion;
use num_complex::Complex64;

use crate::circle::{Circle, transform_circle_with};
use crate::tolerance::Tolerance;
use crate::transform::MoebiusTransform;
use crate::{Error, Result};

#[multiversion(targets("x86_64+avx2", "x86_64+sse4.1", "aarch64+neon",))]
fn map_points<F>(src: &[Complex64], map_fn: F) -> Result<Vec<Complex64>>
where
    F: Fn(Complex64) -> Result<Complex64>,
{
    let mut images = Vec::with_capacity(src.len());
    for &z in src {
        images.push(map_fn(z)?);
    }
    Ok(images)
}

/// Apply `transform` to every point of `src`, writing into `dst`
///
/// Stops at the first failing point and returns its error, leaving `dst`
/// unchanged. `dst` must hold at least `src.len()` points.
pub fn apply_batch(
    transform: &MoebiusTransform,
    src: &[Complex64],
    dst: &mut [Complex64],
) -> Result<()> {
    apply_batch_with(transform, src, dst, &Tolerance::default())
}

/// [`apply_batch`] with an explicit tolerance
pub fn apply_batch_with(
    transform: &MoebiusTransform,
    src: &[Complex64],
    dst: &mut [Complex64],
    tol: &Tolerance,
) -> Result<()> {
    if dst.len() < src.len() {
        return Err(Error::BufferSize {
            expected: src.len(),
            actual: dst.len(),
        });
    }
    let images = map_points(src, |z| transform.apply_with(z, tol))?;
    dst[..images.len()].copy_from_slice(&images);
    Ok(())
}

/// Apply `transform` to every point, collecting the images
pub fn apply_all(transform: &MoebiusTransform, points: &[Complex64]) -> Result<Vec<Complex64>> {
    apply_all_with(transform, points, &Tolerance::default())
}

/// [`apply_all`] with an explicit tolerance
pub fn apply_all_with(
    transform: &MoebiusTransform,
    points: &[Complex64],
    tol: &Tolerance,
) -> Result<Vec<Complex64>> {
    map_points(points, |z| transform.apply_with(z, tol))
}

/// Apply `transform` to every point, keeping each point's own result
pub fn apply_each(transform: &MoebiusTransform, points: &[Complex64]) -> Vec<Result<Complex64>> {
    apply_each_with(transform, points, &Tolerance::default())
}

/// [`apply_each`] with an explicit tolerance
pub fn apply_each_with(
    transform: &MoebiusTransform,
    points: &[Complex64],
    tol: &Tolerance,
) -> Vec<Result<Complex64>> {
    points.iter().map(|&z| transform.apply_with(z, tol)).collect()
}

/// Apply `transform` to interleaved `[re, im, re, im, …]` buffers
pub fn apply_interleaved(
    transform: &MoebiusTransform,
    src: &[f64],
    dst: &mut [f64],
) -> Result<()> {
    apply_interleaved_with(transform, src, dst, &Tolerance::default())
}

/// [`apply_interleaved`] with an explicit tolerance
pub fn apply_interleaved_with(
    transform: &MoebiusTransform,
    src: &[f64],
    dst: &mut [f64],
    tol: &Tolerance,
) -> Result<()> {
    if src.len() % 2 != 0 {
        return Err(Error::BufferSize {
            expected: src.len() + 1,
            actual: src.len(),
        });
    }
    if dst.len() < src.len() {
        return Err(Error::BufferSize {
            expected: src.len(),
            actual: dst.len(),
        });
    }

    let points: &[Complex64] = bytemuck::try_cast_slice(src).map_err(|_| Error::BufferSize {
        expected: src.len() + 1,
        actual: src.len(),
    })?;
    let out: &mut [Complex64] = bytemuck::try_cast_slice_mut(&mut dst[..src.len()])
        .map_err(|_| Error::BufferSize {
            expected: src.len(),
            actual: src.len(),
        })?;
    apply_batch_with(transform, points, out, tol)
}

/// Images of every circle under `transform`
pub fn transform_circles(transform: &MoebiusTransform, circles: &[Circle]) -> Result<Vec<Circle>> {
    transform_circles_with(transform, circles, &Tolerance::default())
}

/// [`transform_circles`] with an explicit tolerance
pub fn transform_circles_with(
    transform: &MoebiusTransform,
    circles: &[Circle],
    tol: &Tolerance,
) -> Result<Vec<Circle>> {
    circles
        .iter()
        .map(|circle| transform_circle_with(circle, transform, tol))
        .collect()
}

/// Parallel [`apply_all`]
#[cfg(feature = "parallel")]
pub fn par_apply_all(transform: &MoebiusTransform, points: &[Complex64]) -> Result<Vec<Complex64>> {
    par_apply_all_with(transform, points, &Tolerance::default())
}

/// Parallel [`apply_all_with`]
#[cfg(feature = "parallel")]
pub fn par_apply_all_with(
    transform: &MoebiusTransform,
    points: &[Complex64],
    tol: &Tolerance,
) -> Result<Vec<Complex64>> {
    use rayon::prelude::*;

    points
        .par_iter()
        .map(|&z| transform.apply_with(z, tol))
        .collect()
}

/// Parallel [`transform_circles`]
#[cfg(feature = "parallel")]
pub fn par_transform_circles(
    transform: &MoebiusTransform,
    circles: &[Circle],
) -> Result<Vec<Circle>> {
    par_transform_circles_with(transform, circles, &Tolerance::default())
}

/// Parallel [`transform_circles_with`]
#[cfg(feature = "parallel")]
pub fn par_transform_circles_with(
    transform: &MoebiusTransform,
    circles: &[Circle],
    tol: &Tolerance,
) -> Result<Vec<Circle>> {
    use rayon::prelude::*;

    circles
        .par_iter()
        .map(|circle| transform_circle_with(circle, transform, tol))
        .collect()
}
