use crate::geometry::{CubicSegment, HandlePair};
use crate::math::triangle_2d::{distance, new_coordinates};

/// Sets both handle lengths to a third of the control polygon length
/// `|p0 p1| + |p1 p2| + |p2 p3|`.
///
/// The start handle is placed first. A zero end handle then takes its
/// direction from the *new* start handle.
#[must_use]
pub fn eq_thirds(segment: &CubicSegment) -> HandlePair {
    let CubicSegment { p0, p1, p2, p3 } = segment;

    let polygon = distance(p0, p1) + distance(p1, p2) + distance(p2, p3);
    let third = polygon / 3.0;

    let start = new_coordinates(p1, p0, p2, third);
    let end = new_coordinates(p2, p3, &start, third);

    HandlePair::new(start, end)
}
