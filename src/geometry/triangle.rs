use crate::math::triangle_2d::{new_coordinates, triangle_angles, triangle_sides};
use crate::math::Point2;

use super::CubicSegment;

/// The triangle spanned by a segment's chord and its two handle rays.
///
/// Mirrors the quantities used by the percentage and balance methods, for
/// callers that want to draw the construction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HandleTriangle {
    /// Signed angle at the start anchor.
    pub alpha: f64,
    /// Signed angle at the ray intersection.
    pub beta: f64,
    /// Signed angle at the end anchor.
    pub gamma: f64,
    /// Length from the end anchor to the intersection.
    pub a: f64,
    /// Chord length.
    pub b: f64,
    /// Length from the start anchor to the intersection.
    pub c: f64,
    start: Point2,
    start_handle: Point2,
    end_handle: Point2,
}

impl HandleTriangle {
    /// Builds the triangle for `segment`.
    #[must_use]
    pub fn new(segment: &CubicSegment) -> Self {
        let CubicSegment { p0, p1, p2, p3 } = segment;
        let (alpha, beta, gamma) = triangle_angles(p0, p1, p2, p3);
        let (a, b, c) = triangle_sides(p0, p1, p2, p3);
        Self {
            alpha,
            beta,
            gamma,
            a,
            b,
            c,
            start: *p0,
            start_handle: *p1,
            end_handle: *p2,
        }
    }

    /// Returns `true` if the handle rays do not form a usable triangle.
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        !(self.a.is_finite() && self.c.is_finite())
    }

    /// Returns the intersection of the two handle rays, if it exists.
    #[must_use]
    pub fn apex(&self) -> Option<Point2> {
        if self.is_degenerate() {
            return None;
        }
        Some(new_coordinates(
            &self.start_handle,
            &self.start,
            &self.end_handle,
            self.c,
        ))
    }
}
