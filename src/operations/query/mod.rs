mod elevation_at;
mod is_delaunay;

pub use elevation_at::ElevationAt;
pub use is_delaunay::{DelaunayViolation, IsDelaunay};
