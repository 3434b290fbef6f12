use crate::geometry::Coordinate;
use crate::topology::Mesh;

/// Samples the elevation of a finished mesh at a planar position.
pub struct ElevationAt {
    x: f64,
    y: f64,
}

impl ElevationAt {
    /// Creates a new `ElevationAt` query.
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Executes the query.
    ///
    /// Returns the plane elevation of the triangle containing the position
    /// (edges included), or `None` outside the mesh.
    #[must_use]
    pub fn execute(&self, mesh: &Mesh) -> Option<f64> {
        let id = mesh.locate_containing_inclusive(Coordinate::planar(self.x, self.y))?;
        let data = mesh.triangle(id).ok()?;
        Some(data.shape().plane_depth_at(self.x, self.y))
    }
}
