use tracing::debug;

use crate::topology::Mesh;

/// Removes triangles with any planar edge longer than a threshold.
///
/// Useful for cutting the long sliver triangles a convex hull leaves around
/// a concave point set.
pub struct TrimLongEdges {
    max_edge: f64,
}

impl TrimLongEdges {
    /// Creates a new `TrimLongEdges` operation.
    #[must_use]
    pub fn new(max_edge: f64) -> Self {
        Self { max_edge }
    }

    /// Executes the trim and returns the number of triangles removed.
    ///
    /// Survivors that bordered a removed triangle become boundary triangles
    /// on that edge. A NaN threshold removes nothing.
    pub fn execute(&self, mesh: &mut Mesh) -> usize {
        let max_edge = self.max_edge;
        if max_edge.is_nan() {
            return 0;
        }
        let removed = mesh.retain_triangles(|data| data.shape().longest_edge() <= max_edge);
        debug!(removed, max_edge, "trimmed long-edged triangles");
        removed
    }
}
