use crate::geometry::{CubicSegment, HandlePair};
use crate::math::triangle_2d::{distance, new_coordinates, triangle_sides};

use super::{handles_diverge, handles_on_same_side};

/// Extra tension applied when exactly one handle is zero.
pub const ZERO_HANDLE_TENSION_ADJUST: f64 = 1.18;

/// Gives both handles the same fraction of their triangle side.
///
/// Each handle's length is expressed as a fraction of its triangle side;
/// both are then set to the mean fraction. With exactly one zero handle the
/// mean is multiplied by [`ZERO_HANDLE_TENSION_ADJUST`] and the side test is
/// skipped. Two zero handles are returned unchanged.
#[must_use]
pub fn eq_balance(segment: &CubicSegment) -> HandlePair {
    let zero_start = segment.has_zero_start_handle();
    let zero_end = segment.has_zero_end_handle();
    if zero_start && zero_end {
        return segment.handles();
    }
    let zero = zero_start || zero_end;
    let factor = if zero { ZERO_HANDLE_TENSION_ADJUST } else { 1.0 };

    if !handles_diverge(segment) || !(zero || handles_on_same_side(segment)) {
        return segment.handles();
    }

    let CubicSegment { p0, p1, p2, p3 } = segment;
    let (a, _, c) = triangle_sides(p0, p1, p2, p3);

    let end_fraction = distance(p3, p2) / a;
    let start_fraction = distance(p0, p1) / c;
    let fraction = (end_fraction + start_fraction) / 2.0 * factor;

    let a = a * fraction;
    let c = c * fraction;

    HandlePair::new(new_coordinates(p1, p0, p2, c), new_coordinates(p2, p3, p1, a))
}
