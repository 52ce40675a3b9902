//! Handle equalization methods.
//!
//! Each method takes a [`CubicSegment`] and returns new handles; anchors
//! are never moved. [`EqMethod`] selects a method together with its
//! parameter and is the entry point used by editor integrations.

mod balance;
mod hobby;
mod percentage;
mod settings;
mod thirds;

use std::f64::consts::FRAC_PI_4;
use std::fmt;
use std::str::FromStr;

pub use balance::{eq_balance, ZERO_HANDLE_TENSION_ADJUST};
pub use hobby::{control_points, eq_spline, velocity, DEFAULT_SPLINE_TENSION};
pub use percentage::{eq_percentage, CIRCLE_CURVATURE};
pub use settings::{
    CurvaturePreset, EqSettings, CURVATURE_FREE_RANGE, CURVATURE_PRESETS, TENSION_RANGE,
};
pub use thirds::eq_thirds;

use crate::error::{MethodError, Result};
use crate::geometry::{CubicSegment, HandlePair};
use crate::math::triangle_2d::{is_on_left, is_on_right};

/// Minimum angle between the two handle directions for the triangle
/// methods to act. Below it the handles count as parallel.
pub const MIN_HANDLE_ANGLE: f64 = FRAC_PI_4;

/// Returns `true` if the raw handle directions differ by at least
/// [`MIN_HANDLE_ANGLE`]. A zero handle reports a direction of 0.
fn handles_diverge(segment: &CubicSegment) -> bool {
    let CubicSegment { p0, p1, p2, p3 } = segment;
    let alpha = (p1.y - p0.y).atan2(p1.x - p0.x);
    let beta = (p2.y - p3.y).atan2(p2.x - p3.x);
    (alpha - beta).abs() >= MIN_HANDLE_ANGLE
}

/// Returns `true` if both handles lie strictly on the same side of the chord.
fn handles_on_same_side(segment: &CubicSegment) -> bool {
    let CubicSegment { p0, p1, p2, p3 } = segment;
    (is_on_left(p0, p3, p1) && is_on_left(p0, p3, p2))
        || (is_on_right(p0, p3, p1) && is_on_right(p0, p3, p2))
}

/// Method selector without parameters, as offered by a method picker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum EqMethodKind {
    /// Circle approximation, curvature 0.552.
    #[default]
    Circle,
    /// Rule of thirds.
    Thirds,
    /// Balance both handles against each other.
    Balance,
    /// Percentage with one of the [`CURVATURE_PRESETS`].
    Fixed,
    /// Percentage with a free curvature.
    Free,
    /// Hobby spline with a tension.
    Hobby,
}

impl EqMethodKind {
    /// All kinds in picker order.
    pub const ALL: [Self; 6] = [
        Self::Circle,
        Self::Thirds,
        Self::Balance,
        Self::Fixed,
        Self::Free,
        Self::Hobby,
    ];

    /// Returns the kind at picker position `index`.
    ///
    /// # Errors
    ///
    /// Returns [`MethodError::UnknownSelector`] if `index` is not in `0..=5`.
    pub fn from_index(index: usize) -> Result<Self> {
        Self::ALL
            .get(index)
            .copied()
            .ok_or_else(|| MethodError::UnknownSelector(index).into())
    }

    /// Returns the picker position of this kind.
    #[must_use]
    pub fn index(self) -> usize {
        match self {
            Self::Circle => 0,
            Self::Thirds => 1,
            Self::Balance => 2,
            Self::Fixed => 3,
            Self::Free => 4,
            Self::Hobby => 5,
        }
    }

    /// Canonical lowercase name.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Circle => "circle",
            Self::Thirds => "thirds",
            Self::Balance => "balance",
            Self::Fixed => "fixed",
            Self::Free => "free",
            Self::Hobby => "hobby",
        }
    }
}

impl fmt::Display for EqMethodKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for EqMethodKind {
    type Err = crate::error::CurveEqError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "circle" | "fl" => Ok(Self::Circle),
            "thirds" => Ok(Self::Thirds),
            "balance" => Ok(Self::Balance),
            "fixed" | "adjust" => Ok(Self::Fixed),
            "free" => Ok(Self::Free),
            "hobby" => Ok(Self::Hobby),
            _ => Err(MethodError::UnknownName(s.to_owned()).into()),
        }
    }
}

/// An equalization method with its parameter.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EqMethod {
    /// Percentage method at [`CIRCLE_CURVATURE`].
    Circle,
    /// Rule of thirds.
    Thirds,
    /// Balance method.
    Balance,
    /// Percentage method at a preset curvature.
    Fixed(CurvaturePreset),
    /// Percentage method at an arbitrary curvature.
    Free { curvature: f64 },
    /// Hobby spline with symmetric tension.
    Hobby { tension: f64 },
}

impl EqMethod {
    /// Returns the parameterless kind of this method.
    #[must_use]
    pub fn kind(&self) -> EqMethodKind {
        match self {
            Self::Circle => EqMethodKind::Circle,
            Self::Thirds => EqMethodKind::Thirds,
            Self::Balance => EqMethodKind::Balance,
            Self::Fixed(_) => EqMethodKind::Fixed,
            Self::Free { .. } => EqMethodKind::Free,
            Self::Hobby { .. } => EqMethodKind::Hobby,
        }
    }

    /// Computes new handles for `segment`.
    ///
    /// Degenerate geometry is not rejected: the result may contain NaN or
    /// infinite coordinates, see [`HandlePair::is_finite`].
    #[must_use]
    pub fn apply(&self, segment: &CubicSegment) -> HandlePair {
        tracing::trace!(method = %self, %segment, "equalizing segment");

        let handles = match *self {
            Self::Circle => eq_percentage(segment, CIRCLE_CURVATURE),
            Self::Thirds => eq_thirds(segment),
            Self::Balance => eq_balance(segment),
            Self::Fixed(preset) => eq_percentage(segment, preset.value()),
            Self::Free { curvature } => eq_percentage(segment, curvature),
            Self::Hobby { tension } => eq_spline(segment, tension),
        };

        if !handles.is_finite() {
            tracing::warn!(method = %self, %segment, "equalization produced non-finite handles");
        } else if handles == segment.handles() {
            tracing::debug!(method = %self, "handles left unchanged");
        }

        handles
    }
}

impl fmt::Display for EqMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Fixed(preset) => write!(f, "fixed({})", preset.value()),
            Self::Free { curvature } => write!(f, "free({curvature})"),
            Self::Hobby { tension } => write!(f, "hobby({tension})"),
            _ => f.write_str(self.kind().name()),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;
    use crate::math::triangle_2d::distance;
    use crate::math::Point2;

    fn quarter() -> CubicSegment {
        CubicSegment::from_coords([(0.0, 0.0), (0.0, 40.0), (70.0, 100.0), (100.0, 100.0)])
    }

    // ── selectors ──

    #[test]
    fn kind_index_round_trips() {
        for kind in EqMethodKind::ALL {
            assert_eq!(EqMethodKind::from_index(kind.index()).unwrap(), kind);
        }
    }

    #[test]
    fn unknown_selector_is_rejected() {
        let err = EqMethodKind::from_index(6).unwrap_err();
        assert_eq!(err.to_string(), "unknown method selector: 6");
    }

    #[test]
    fn kind_parses_canonical_and_legacy_names() {
        assert_eq!("circle".parse::<EqMethodKind>().unwrap(), EqMethodKind::Circle);
        assert_eq!("fl".parse::<EqMethodKind>().unwrap(), EqMethodKind::Circle);
        assert_eq!("adjust".parse::<EqMethodKind>().unwrap(), EqMethodKind::Fixed);
        assert_eq!(" Hobby ".parse::<EqMethodKind>().unwrap(), EqMethodKind::Hobby);
        for kind in EqMethodKind::ALL {
            assert_eq!(kind.to_string().parse::<EqMethodKind>().unwrap(), kind);
        }
    }

    #[test]
    fn unknown_name_is_rejected() {
        let err = "quad".parse::<EqMethodKind>().unwrap_err();
        assert!(matches!(
            err,
            crate::error::CurveEqError::Method(MethodError::UnknownName(ref name)) if name == "quad"
        ));
    }

    #[test]
    fn method_display() {
        assert_eq!(EqMethod::Circle.to_string(), "circle");
        assert_eq!(EqMethod::Free { curvature: 0.75 }.to_string(), "free(0.75)");
        assert_eq!(EqMethod::Hobby { tension: 1.75 }.to_string(), "hobby(1.75)");
        let fixed = EqMethod::Fixed(CurvaturePreset::new(2).unwrap());
        assert_eq!(fixed.to_string(), "fixed(0.602)");
        assert_eq!(fixed.kind(), EqMethodKind::Fixed);
    }

    // ── dispatch ──

    #[test]
    fn circle_dispatches_to_circle_curvature() {
        let seg = quarter();
        assert_eq!(
            EqMethod::Circle.apply(&seg),
            eq_percentage(&seg, CIRCLE_CURVATURE)
        );
        let h = EqMethod::Circle.apply(&seg);
        assert_abs_diff_eq!(h.p1.y, 55.2, epsilon = 1e-9);
    }

    #[test]
    fn fixed_and_free_dispatch_to_percentage() {
        let seg = quarter();
        let fixed = EqMethod::Fixed(CurvaturePreset::new(4).unwrap()).apply(&seg);
        assert_eq!(fixed, eq_percentage(&seg, 0.652));
        let free = EqMethod::Free { curvature: 0.9 }.apply(&seg);
        assert_eq!(free, eq_percentage(&seg, 0.9));
    }

    #[test]
    fn remaining_methods_dispatch() {
        let seg = quarter();
        assert_eq!(EqMethod::Thirds.apply(&seg), eq_thirds(&seg));
        assert_eq!(EqMethod::Balance.apply(&seg), eq_balance(&seg));
        assert_eq!(
            EqMethod::Hobby { tension: 0.8 }.apply(&seg),
            eq_spline(&seg, 0.8)
        );
    }

    #[test]
    fn anchors_never_move() {
        let seg = quarter();
        for method in [
            EqMethod::Circle,
            EqMethod::Thirds,
            EqMethod::Balance,
            EqMethod::Free { curvature: 0.6 },
            EqMethod::Hobby { tension: 1.0 },
        ] {
            let out = seg.with_handles(method.apply(&seg));
            assert_eq!(out.p0, seg.p0, "{method}");
            assert_eq!(out.p3, seg.p3, "{method}");
        }
    }

    // ── typical inputs stay finite ──

    /// Same-side segments over a chord of 100 with handle directions
    /// `theta1` (start) and `theta2` (end), both measured from +x.
    fn corpus() -> Vec<CubicSegment> {
        let mut segments = Vec::new();
        for theta1_deg in [20.0_f64, 40.0, 60.0, 80.0] {
            for spread_deg in [50.0_f64, 70.0, 90.0] {
                for (len1, len2) in [(30.0, 30.0), (15.0, 45.0), (60.0, 20.0)] {
                    for flip in [1.0, -1.0] {
                        let t1 = theta1_deg.to_radians();
                        let t2 = (theta1_deg + spread_deg).to_radians();
                        let p0 = Point2::new(0.0, 0.0);
                        let p3 = Point2::new(100.0, 0.0);
                        let p1 = Point2::new(len1 * t1.cos(), flip * len1 * t1.sin());
                        let p2 =
                            Point2::new(100.0 + len2 * t2.cos(), flip * len2 * t2.sin());
                        segments.push(CubicSegment::new(p0, p1, p2, p3));
                    }
                }
            }
        }
        segments
    }

    #[test]
    fn typical_segments_produce_finite_handles() {
        for seg in corpus() {
            for curvature in [0.5, 0.552, 0.75, 1.0] {
                let h = eq_percentage(&seg, curvature);
                assert!(h.is_finite(), "percentage {curvature} on {seg}");
            }
            assert!(eq_thirds(&seg).is_finite(), "thirds on {seg}");
            assert!(eq_balance(&seg).is_finite(), "balance on {seg}");
            for tension in [0.5, 1.0, 1.75, 2.0] {
                assert!(eq_spline(&seg, tension).is_finite(), "hobby {tension} on {seg}");
            }
        }
    }

    #[test]
    fn corpus_segments_are_actually_equalized() {
        // Every corpus segment passes the angle and side gates.
        for seg in corpus() {
            let h = eq_percentage(&seg, 1.0);
            assert_ne!(h, seg.handles(), "{seg}");
            assert!(distance(&seg.p0, &h.p1) > 0.0);
        }
    }
}
