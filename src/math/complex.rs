//! Complex helpers for the Hobby spline solver.
//!
//! Branch convention of [`principal_sqrt`]: the result always has a
//! non-negative real part, and for purely imaginary or negative-real inputs
//! the sign of the imaginary part follows the sign of `Im z` (with `+0`
//! treated as the upper half-plane).

use super::Complex;

/// Returns the principal square root of `z`.
///
/// Uses the cancellation-free form `s = sqrt((|Re z| + |z|) / 2)`,
/// `d = Im z / (2s)` and picks the components by quadrant.
#[must_use]
#[allow(clippy::float_cmp)]
pub fn principal_sqrt(z: Complex) -> Complex {
    if z.re == 0.0 && z.im == 0.0 {
        return Complex::new(0.0, 0.0);
    }

    let s = (0.5 * (z.re.abs() + z.re.hypot(z.im))).sqrt();
    let d = 0.5 * z.im / s;

    if z.re > 0.0 {
        Complex::new(s, d)
    } else if z.im >= 0.0 {
        Complex::new(d, s)
    } else {
        Complex::new(-d, -s)
    }
}

/// Returns the argument (phase angle) of `z` in `[-π, π]`.
///
/// A negative real `z` with `Im z == -0.0` gives `-π`.
#[must_use]
pub fn phase(z: Complex) -> f64 {
    z.im.atan2(z.re)
}
