use crate::topology::{Mesh, TriangleId, VertexId};

/// A mesh vertex lying strictly inside the circumcircle of a triangle it is
/// not a corner of.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DelaunayViolation {
    pub triangle: TriangleId,
    pub vertex: VertexId,
}

/// Checks the empty-circumcircle property of every triangle against every
/// mesh vertex.
pub struct IsDelaunay;

impl IsDelaunay {
    /// Creates a new `IsDelaunay` query.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Executes the check, returning every violation found.
    ///
    /// An empty result means the mesh is Delaunay. Cocircular vertices are
    /// not violations.
    #[must_use]
    pub fn execute(&self, mesh: &Mesh) -> Vec<DelaunayViolation> {
        let mut violations = Vec::new();
        for (triangle, data) in mesh.triangles() {
            for (vertex, position) in mesh.vertices() {
                if !data.has_vertex(vertex) && data.shape().is_point_in_circumcircle(position) {
                    violations.push(DelaunayViolation { triangle, vertex });
                }
            }
        }
        violations
    }
}

impl Default for IsDelaunay {
    fn default() -> Self {
        Self::new()
    }
}
