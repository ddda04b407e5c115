pub mod projection;

/// 2D point type (page coordinates, y grows downward).
pub type Point2 = nalgebra::Point2<f64>;

/// 3D point type (excavation model space, y grows upward).
pub type Point3 = nalgebra::Point3<f64>;

/// 2D vector type.
pub type Vector2 = nalgebra::Vector2<f64>;

/// Global geometric tolerance for floating-point comparisons.
pub const TOLERANCE: f64 = 1e-10;
