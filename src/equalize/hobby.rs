//! Hobby's spline control points for a single segment.
//!
//! Implements the two-point case of J. D. Hobby, "Smooth, easy to compute
//! interpolating splines" (1986): given the anchors, the tangent directions
//! at both ends and a tension, the control points follow in closed form.
//! Points are handled as complex numbers `x + iy`.

use crate::geometry::{CubicSegment, HandlePair};
use crate::math::complex::{phase, principal_sqrt};
use crate::math::{Complex, Point2};

/// Tension used when none is given.
pub const DEFAULT_SPLINE_TENSION: f64 = 1.75;

/// Hobby's velocity function `ρ(θ, φ)`.
///
/// ```text
///          2 + √2 (sin θ − sin φ / 16) (sin φ − sin θ / 16) (cos θ − cos φ)
/// ρ(θ,φ) = ────────────────────────────────────────────────────────────────
///               3 (1 + ½(√5 − 1) cos θ + ½(3 − √5) cos φ)
/// ```
#[must_use]
pub fn velocity(theta: f64, phi: f64) -> Complex {
    let (st, ct) = theta.sin_cos();
    let (sp, cp) = phi.sin_cos();
    let sqrt2 = principal_sqrt(Complex::new(2.0, 0.0));
    let sqrt5 = principal_sqrt(Complex::new(5.0, 0.0));

    let numerator = sqrt2 * ((st - sp / 16.0) * (sp - st / 16.0) * (ct - cp)) + 2.0;
    let denominator = ((sqrt5 - 1.0) * (0.5 * ct) + (-sqrt5 + 3.0) * (0.5 * cp) + 1.0) * 3.0;

    numerator / denominator
}

/// Control points `(u, v)` for the segment `z0 → z1` leaving `z0` along `w0`
/// and arriving at `z1` along `w1`, with tensions `alpha` and `beta`.
///
/// `z0 == z1` divides by zero and yields NaN.
#[must_use]
pub fn control_points(
    z0: Complex,
    w0: Complex,
    alpha: f64,
    beta: f64,
    w1: Complex,
    z1: Complex,
) -> (Complex, Complex) {
    let chord = z1 - z0;
    let theta = phase(w0 / chord);
    let phi = phase(chord / w1);

    let u = z0 + Complex::from_polar(1.0, theta) * chord * velocity(theta, phi) / alpha;
    let v = z1 - Complex::from_polar(1.0, -phi) * chord * velocity(phi, theta) / beta;

    (u, v)
}

/// Unit tangent along `delta`, built from the axis-swapped angle
/// `atan2(re, im)`. A zero delta gives `i` (straight up).
fn tangent(delta: Complex) -> Complex {
    let angle = delta.re.atan2(delta.im);
    Complex::new(angle.sin(), angle.cos())
}

/// Replaces both handles by Hobby's control points for `tension`.
///
/// The tangents are the current handle directions `p1 - p0` and `p3 - p2`,
/// taken as they are: a zero handle is not substituted and points along +y.
#[must_use]
pub fn eq_spline(segment: &CubicSegment, tension: f64) -> HandlePair {
    let CubicSegment { p0, p1, p2, p3 } = segment;
    let z0 = Complex::new(p0.x, p0.y);
    let z1 = Complex::new(p3.x, p3.y);

    let w0 = tangent(Complex::new(p1.x, p1.y) - z0);
    let w1 = tangent(z1 - Complex::new(p2.x, p2.y));

    let (u, v) = control_points(z0, w0, tension, tension, w1, z1);

    HandlePair::new(Point2::new(u.re, u.im), Point2::new(v.re, v.im))
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;

    const TOL: f64 = 1e-9;

    #[test]
    fn velocity_of_straight_line_is_one_third() {
        let rho = velocity(0.0, 0.0);
        assert_abs_diff_eq!(rho.re, 1.0 / 3.0, epsilon = 1e-12);
        assert_abs_diff_eq!(rho.im, 0.0, epsilon = 1e-12);
    }

    #[test]
    fn velocity_with_equal_angles() {
        // The √2 term vanishes and the cosine weights sum to one.
        for angle in [0.3_f64, 0.9, 1.4] {
            let rho = velocity(angle, angle);
            assert_abs_diff_eq!(rho.re, 2.0 / (3.0 * (1.0 + angle.cos())), epsilon = 1e-12);
        }
    }

    #[test]
    fn velocity_matches_real_formula() {
        let (theta, phi) = (0.7_f64, -0.2_f64);
        let (st, ct) = theta.sin_cos();
        let (sp, cp) = phi.sin_cos();
        let expected = (2.0
            + 2.0_f64.sqrt() * (st - sp / 16.0) * (sp - st / 16.0) * (ct - cp))
            / (3.0 * (1.0 + 0.5 * (5.0_f64.sqrt() - 1.0) * ct + 0.5 * (3.0 - 5.0_f64.sqrt()) * cp));
        let rho = velocity(theta, phi);
        assert_abs_diff_eq!(rho.re, expected, epsilon = 1e-12);
        assert_abs_diff_eq!(rho.im, 0.0, epsilon = 1e-12);
    }

    #[test]
    fn straight_segment_gets_thirds() {
        let seg = CubicSegment::from_coords([(0.0, 0.0), (30.0, 0.0), (70.0, 0.0), (100.0, 0.0)]);
        let h = eq_spline(&seg, 1.0);
        assert_abs_diff_eq!(h.p1.x, 100.0 / 3.0, epsilon = TOL);
        assert_abs_diff_eq!(h.p1.y, 0.0, epsilon = TOL);
        assert_abs_diff_eq!(h.p2.x, 200.0 / 3.0, epsilon = TOL);
        assert_abs_diff_eq!(h.p2.y, 0.0, epsilon = TOL);
    }

    #[test]
    fn tension_shortens_handles() {
        let seg = CubicSegment::from_coords([(0.0, 0.0), (30.0, 0.0), (70.0, 0.0), (100.0, 0.0)]);
        let h = eq_spline(&seg, 2.0);
        assert_abs_diff_eq!(h.p1.x, 100.0 / 6.0, epsilon = TOL);
        assert_abs_diff_eq!(h.p2.x, 100.0 - 100.0 / 6.0, epsilon = TOL);
    }

    #[test]
    fn symmetric_input_gives_symmetric_output() {
        // Handles mirror each other across x = 50.
        let seg = CubicSegment::from_coords([(0.0, 0.0), (20.0, 30.0), (80.0, 30.0), (100.0, 0.0)]);
        let h = eq_spline(&seg, 1.0);
        assert_abs_diff_eq!(h.p1.x + h.p2.x, 100.0, epsilon = TOL);
        assert_abs_diff_eq!(h.p1.y, h.p2.y, epsilon = TOL);

        let cos = 20.0 / 1300.0_f64.sqrt();
        let sin = 30.0 / 1300.0_f64.sqrt();
        let rho = 2.0 / (3.0 * (1.0 + cos));
        assert_abs_diff_eq!(h.p1.x, 100.0 * rho * cos, epsilon = TOL);
        assert_abs_diff_eq!(h.p1.y, 100.0 * rho * sin, epsilon = TOL);
    }

    #[test]
    fn handle_length_does_not_matter() {
        let short = CubicSegment::from_coords([(0.0, 0.0), (2.0, 3.0), (98.0, 3.0), (100.0, 0.0)]);
        let long = CubicSegment::from_coords([(0.0, 0.0), (40.0, 60.0), (60.0, 60.0), (100.0, 0.0)]);
        let a = eq_spline(&short, 1.0);
        let b = eq_spline(&long, 1.0);
        assert_abs_diff_eq!(a.p1.x, b.p1.x, epsilon = TOL);
        assert_abs_diff_eq!(a.p1.y, b.p1.y, epsilon = TOL);
        assert_abs_diff_eq!(a.p2.x, b.p2.x, epsilon = TOL);
        assert_abs_diff_eq!(a.p2.y, b.p2.y, epsilon = TOL);
    }

    #[test]
    fn zero_start_handle_points_up() {
        // Zero delta: tangent i. End tangent is straight down, so θ = φ = π/2.
        let seg = CubicSegment::from_coords([(0.0, 0.0), (0.0, 0.0), (100.0, 30.0), (100.0, 0.0)]);
        let h = eq_spline(&seg, 1.0);
        assert_abs_diff_eq!(h.p1.x, 0.0, epsilon = TOL);
        assert_abs_diff_eq!(h.p1.y, 200.0 / 3.0, epsilon = TOL);
        assert_abs_diff_eq!(h.p2.x, 100.0, epsilon = TOL);
        assert_abs_diff_eq!(h.p2.y, 200.0 / 3.0, epsilon = TOL);
    }

    #[test]
    fn coincident_anchors_yield_nan() {
        let seg = CubicSegment::from_coords([(50.0, 50.0), (60.0, 70.0), (40.0, 70.0), (50.0, 50.0)]);
        let h = eq_spline(&seg, 1.0);
        assert!(!h.is_finite(), "{h:?}");
    }
}
