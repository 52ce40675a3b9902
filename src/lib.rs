pub mod equalize;
pub mod error;
pub mod geometry;
pub mod math;

pub use equalize::{EqMethod, EqMethodKind, EqSettings};
pub use error::{CurveEqError, Result};
pub use geometry::{CubicSegment, HandlePair};
