pub mod complex;
pub mod triangle_2d;

/// 2D point type.
pub type Point2 = nalgebra::Point2<f64>;

/// Complex number type used by the Hobby spline solver.
pub type Complex = nalgebra::Complex<f64>;
