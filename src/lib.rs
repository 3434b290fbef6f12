pub mod error;
pub mod geometry;
pub mod math;
pub mod operations;
pub mod topology;

pub use error::{Result, TinError};
pub use geometry::Coordinate;
pub use operations::triangulation::{DelaunayTriangulator, TriangulationParams, TriangulationState};
pub use topology::Mesh;
