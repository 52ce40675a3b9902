use crate::geometry::{CubicSegment, HandlePair};
use crate::math::triangle_2d::{new_coordinates, triangle_sides};

use super::{handles_diverge, handles_on_same_side};

/// Handle length, as a fraction of the triangle side, that approximates a
/// circular arc: `4(√2 - 1) / 3`, rounded.
pub const CIRCLE_CURVATURE: f64 = 0.552;

/// Places each handle at `curvature` times its triangle side.
///
/// Leaves the handles unchanged when both are zero, when their directions
/// differ by less than [`super::MIN_HANDLE_ANGLE`], or when they lie on
/// opposite sides of the chord (an S-curve has no handle triangle). A
/// single zero handle also fails the side test.
#[must_use]
pub fn eq_percentage(segment: &CubicSegment, curvature: f64) -> HandlePair {
    if segment.has_zero_start_handle() && segment.has_zero_end_handle() {
        return segment.handles();
    }
    if !handles_diverge(segment) || !handles_on_same_side(segment) {
        return segment.handles();
    }

    let CubicSegment { p0, p1, p2, p3 } = segment;
    let (a, _, c) = triangle_sides(p0, p1, p2, p3);
    let a = a * curvature;
    let c = c * curvature;

    HandlePair::new(new_coordinates(p1, p0, p2, c), new_coordinates(p2, p3, p1, a))
}
