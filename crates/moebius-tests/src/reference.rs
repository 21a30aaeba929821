//! Reference computations
//!
//! Independent ways of obtaining the quantities moebius computes, used to
//! cross-check it:
//! - the image of a circle as the circumcircle of three image points
//! - the cross ratio, which every Moebius transformation preserves

use moebius_core::{Circle, Complex, MoebiusTransform};

/// Circle through three points, or `None` if they are (nearly) collinear
pub fn circumcircle(p1: Complex, p2: Complex, p3: Complex) -> Option<Circle> {
    let (ax, ay) = (p1.re, p1.im);
    let (bx, by) = (p2.re, p2.im);
    let (cx, cy) = (p3.re, p3.im);

    let d = 2.0 * (ax * (by - cy) + bx * (cy - ay) + cx * (ay - by));
    let scale = [p1, p2, p3].iter().map(|p| p.norm_sqr()).fold(1.0, f64::max);
    if d.abs() < 1e-14 * scale {
        return None;
    }

    let a2 = p1.norm_sqr();
    let b2 = p2.norm_sqr();
    let c2 = p3.norm_sqr();
    let ux = (a2 * (by - cy) + b2 * (cy - ay) + c2 * (ay - by)) / d;
    let uy = (a2 * (cx - bx) + b2 * (ax - cx) + c2 * (bx - ax)) / d;

    let center = Complex::new(ux, uy);
    Circle::new(center, (p1 - center).norm()).ok()
}

/// Image of `circle` under `t`, fitted through three mapped boundary points
pub fn circle_image(circle: &Circle, t: &MoebiusTransform) -> Option<Circle> {
    let images: Vec<Complex> = circle
        .sample_boundary(3)
        .into_iter()
        .map(|z| t.apply(z))
        .collect::<Result<_, _>>()
        .ok()?;
    circumcircle(images[0], images[1], images[2])
}

/// Cross ratio `(z1, z2; z3, z4)`
pub fn cross_ratio(z1: Complex, z2: Complex, z3: Complex, z4: Complex) -> Complex {
    ((z1 - z3) * (z2 - z4)) / ((z2 - z3) * (z1 - z4))
}
