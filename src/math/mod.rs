pub mod distance_2d;

/// 2D vector type.
pub type Vector2 = nalgebra::Vector2<f64>;

/// 3D point type.
pub type Point3 = nalgebra::Point3<f64>;

/// 3D vector type.
pub type Vector3 = nalgebra::Vector3<f64>;

/// 3x3 matrix.
pub type Matrix3 = nalgebra::Matrix3<f64>;

/// Squared length below which a segment is treated as a single point.
pub const DEGENERATE_LENGTH_SQ: f64 = 1e-20;
