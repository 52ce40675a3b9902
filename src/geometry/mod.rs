pub mod segment;
pub mod triangle;

pub use segment::{CubicSegment, HandlePair};
pub use triangle::HandleTriangle;
