use std::fmt;

use crate::math::Point2;

/// A cubic Bézier segment: start anchor, start handle, end handle, end anchor.
///
/// Equalization only ever produces new handles; the anchors `p0` and `p3`
/// are read, never replaced.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CubicSegment {
    /// Start anchor (on-curve).
    pub p0: Point2,
    /// Handle of the start anchor.
    pub p1: Point2,
    /// Handle of the end anchor.
    pub p2: Point2,
    /// End anchor (on-curve).
    pub p3: Point2,
}

impl CubicSegment {
    /// Creates a segment from its four points.
    #[must_use]
    pub fn new(p0: Point2, p1: Point2, p2: Point2, p3: Point2) -> Self {
        Self { p0, p1, p2, p3 }
    }

    /// Creates a segment from raw `(x, y)` coordinates.
    #[must_use]
    pub fn from_coords(points: [(f64, f64); 4]) -> Self {
        let [p0, p1, p2, p3] = points.map(|(x, y)| Point2::new(x, y));
        Self { p0, p1, p2, p3 }
    }

    /// Returns `true` if the start handle coincides with its anchor.
    #[must_use]
    pub fn has_zero_start_handle(&self) -> bool {
        self.p1 == self.p0
    }

    /// Returns `true` if the end handle coincides with its anchor.
    #[must_use]
    pub fn has_zero_end_handle(&self) -> bool {
        self.p2 == self.p3
    }

    /// Returns the current handles.
    #[must_use]
    pub fn handles(&self) -> HandlePair {
        HandlePair::new(self.p1, self.p2)
    }

    /// Returns a copy of this segment with its handles replaced.
    #[must_use]
    pub fn with_handles(&self, handles: HandlePair) -> Self {
        Self {
            p1: handles.p1,
            p2: handles.p2,
            ..*self
        }
    }
}

impl fmt::Display for CubicSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({}, {}) ({}, {}) ({}, {}) ({}, {})",
            self.p0.x, self.p0.y, self.p1.x, self.p1.y, self.p2.x, self.p2.y, self.p3.x, self.p3.y
        )
    }
}

/// The two off-curve points produced by an equalization method.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HandlePair {
    /// New handle of the start anchor.
    pub p1: Point2,
    /// New handle of the end anchor.
    pub p2: Point2,
}

impl HandlePair {
    /// Creates a handle pair.
    #[must_use]
    pub fn new(p1: Point2, p2: Point2) -> Self {
        Self { p1, p2 }
    }

    /// Returns `true` if every coordinate is finite.
    #[must_use]
    pub fn is_finite(&self) -> bool {
        [self.p1.x, self.p1.y, self.p2.x, self.p2.y]
            .iter()
            .all(|v| v.is_finite())
    }

    /// Rounds both handles to integer coordinates, as done when committing
    /// an equalized outline.
    #[must_use]
    pub fn rounded(&self) -> Self {
        Self {
            p1: Point2::new(self.p1.x.round(), self.p1.y.round()),
            p2: Point2::new(self.p2.x.round(), self.p2.y.round()),
        }
    }
}
