//! Point and triangle primitives for cubic handle geometry.
//!
//! For a segment `p0, p1, p2, p3` the handle rays `p0→p1` and `p3→p2` are
//! extended to their intersection `I`, giving the triangle `(p0, p3, I)`:
//!
//! - `b` = `|p0 p3|`, the chord
//! - `c` = `|p0 I|`, the side carrying the start handle
//! - `a` = `|p3 I|`, the side carrying the end handle
//! - `alpha` at `p0`, `gamma` at `p3`, `beta` at `I`
//!
//! A zero-length handle takes its direction from the opposite handle.

use std::f64::consts::PI;

use super::Point2;

/// Returns twice the signed area of the triangle `a, b, c`.
///
/// Positive when `c` lies to the left of the directed line `a→b`.
#[must_use]
pub fn signed_triangle_area(a: &Point2, b: &Point2, c: &Point2) -> f64 {
    (b.x - a.x) * (c.y - a.y) - (c.x - a.x) * (b.y - a.y)
}

/// Returns `true` if `c` lies strictly left of the directed line `a→b`.
#[must_use]
pub fn is_on_left(a: &Point2, b: &Point2, c: &Point2) -> bool {
    signed_triangle_area(a, b, c) > 0.0
}

/// Returns `true` if `c` lies strictly right of the directed line `a→b`.
#[must_use]
pub fn is_on_right(a: &Point2, b: &Point2, c: &Point2) -> bool {
    signed_triangle_area(a, b, c) < 0.0
}

/// Returns `true` if `a`, `b` and `c` are exactly collinear.
#[must_use]
#[allow(clippy::float_cmp)]
pub fn is_collinear(a: &Point2, b: &Point2, c: &Point2) -> bool {
    signed_triangle_area(a, b, c) == 0.0
}

/// Euclidean distance between two points.
#[must_use]
pub fn distance(p0: &Point2, p1: &Point2) -> f64 {
    ((p0.x - p1.x).powi(2) + (p0.y - p1.y).powi(2)).sqrt()
}

/// Euclidean distance rounded to the nearest integer, ties to even.
#[must_use]
pub fn distance_rounded(p0: &Point2, p1: &Point2) -> f64 {
    distance(p0, p1).round_ties_even()
}

/// Returns the triangle angles `(alpha, beta, gamma)` in radians.
///
/// `alpha` is measured with `atan2(dy, dx)`, `gamma` with the axis-swapped
/// `atan2(dx, dy)`; `beta = π - alpha - gamma`. The angles are signed and
/// only meaningful through their sines, which is how [`triangle_sides`]
/// consumes them.
#[must_use]
#[allow(clippy::similar_names)]
pub fn triangle_angles(p0: &Point2, p1: &Point2, p2: &Point2, p3: &Point2) -> (f64, f64, f64) {
    let alpha1 = (p3.y - p0.y).atan2(p3.x - p0.x);
    let alpha2 = if p1 == p0 {
        // Zero start handle: aim at the end handle instead.
        (p2.y - p0.y).atan2(p2.x - p0.x)
    } else {
        (p1.y - p0.y).atan2(p1.x - p0.x)
    };
    let alpha = alpha1 - alpha2;

    let gamma1 = (p3.x - p0.x).atan2(p3.y - p0.y);
    let gamma2 = if p2 == p3 {
        // Zero end handle: aim at the start handle instead.
        (p3.x - p1.x).atan2(p3.y - p1.y)
    } else {
        (p3.x - p2.x).atan2(p3.y - p2.y)
    };
    let gamma = gamma1 - gamma2;

    let beta = PI - alpha - gamma;

    (alpha, beta, gamma)
}

/// Returns the triangle side lengths `(a, b, c)` by the law of sines.
///
/// Not guarded against `sin(beta) == 0`: parallel handle rays yield
/// infinite, huge or NaN sides.
#[must_use]
pub fn triangle_sides(p0: &Point2, p1: &Point2, p2: &Point2, p3: &Point2) -> (f64, f64, f64) {
    let (alpha, beta, gamma) = triangle_angles(p0, p1, p2, p3);

    let b = distance(p0, p3);
    let a = b * alpha.sin() / beta.sin();
    let c = b * gamma.sin() / beta.sin();

    (a, b, c)
}

/// Places a point `distance` away from `reference` along `reference→target`.
///
/// If `target` coincides with `reference` the direction
/// `reference→alternate` is used instead.
#[must_use]
pub fn new_coordinates(
    target: &Point2,
    reference: &Point2,
    alternate: &Point2,
    distance: f64,
) -> Point2 {
    let phi = if target == reference {
        (alternate.y - reference.y).atan2(alternate.x - reference.x)
    } else {
        (target.y - reference.y).atan2(target.x - reference.x)
    };
    Point2::new(
        reference.x + phi.cos() * distance,
        reference.y + phi.sin() * distance,
    )
}
