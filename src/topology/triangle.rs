use crate::error::TopologyError;
use crate::geometry::Triangle;

use super::segment::Segment;
use super::vertex::VertexId;

slotmap::new_key_type! {
    /// Unique identifier for a triangle in the mesh.
    pub struct TriangleId;
}

/// Data associated with a mesh triangle.
///
/// `neighbors[i]` is the triangle across the edge that does not touch
/// `vertices[i]`: index 0 is the neighbor opposite `a` (across b–c), index 1
/// opposite `b` (across a–c), index 2 opposite `c` (across a–b). `None`
/// marks a mesh boundary.
#[derive(Debug, Clone)]
pub struct TriangleData {
    vertices: [VertexId; 3],
    neighbors: [Option<TriangleId>; 3],
    shape: Triangle,
}

impl TriangleData {
    /// Creates an unlinked triangle from its vertex handles and corner geometry.
    #[must_use]
    pub fn new(vertices: [VertexId; 3], shape: Triangle) -> Self {
        Self {
            vertices,
            neighbors: [None; 3],
            shape,
        }
    }

    /// Returns the vertex handles in assembly order.
    #[must_use]
    pub fn vertices(&self) -> [VertexId; 3] {
        self.vertices
    }

    /// Returns the neighbor handles, indexed by opposite vertex.
    #[must_use]
    pub fn neighbors(&self) -> [Option<TriangleId>; 3] {
        self.neighbors
    }

    /// Returns the triangle's geometry.
    #[must_use]
    pub fn shape(&self) -> &Triangle {
        &self.shape
    }

    /// Returns the three edges: ab, bc, ca.
    #[must_use]
    pub fn edges(&self) -> [Segment; 3] {
        let [a, b, c] = self.vertices;
        [Segment::new(a, b), Segment::new(b, c), Segment::new(c, a)]
    }

    /// Returns `true` if `vertex` is a corner of this triangle.
    #[must_use]
    pub fn has_vertex(&self, vertex: VertexId) -> bool {
        self.vertices.contains(&vertex)
    }

    /// Returns `true` if both endpoints of `edge` are corners of this triangle.
    #[must_use]
    pub fn shares_edge(&self, edge: &Segment) -> bool {
        self.has_vertex(edge.a()) && self.has_vertex(edge.b())
    }

    /// Index of the corner not on `edge`, if `edge` is one of this triangle's edges.
    fn opposite_slot(&self, edge: &Segment) -> Option<usize> {
        if edge.a() == edge.b() || !self.shares_edge(edge) {
            return None;
        }
        self.vertices.iter().position(|&v| !edge.contains(v))
    }

    /// Returns this triangle's corner that is not on `edge`.
    #[must_use]
    pub fn non_edge_vertex(&self, edge: &Segment) -> Option<VertexId> {
        self.opposite_slot(edge).map(|i| self.vertices[i])
    }

    /// Returns the neighbor across `edge`.
    ///
    /// `None` if the edge is on the mesh boundary or is not an edge of this
    /// triangle.
    #[must_use]
    pub fn opposite_neighbor(&self, edge: &Segment) -> Option<TriangleId> {
        self.opposite_slot(edge).and_then(|i| self.neighbors[i])
    }

    /// Overwrites the neighbor across `edge`.
    ///
    /// This writes one side only; [`Mesh::link`](super::Mesh::link) keeps
    /// both sides in step.
    ///
    /// # Errors
    ///
    /// Returns [`TopologyError::NotAnEdge`] if `edge` is not an edge of this
    /// triangle.
    pub fn set_neighbor(
        &mut self,
        edge: &Segment,
        neighbor: Option<TriangleId>,
    ) -> Result<(), TopologyError> {
        let slot = self
            .opposite_slot(edge)
            .ok_or_else(|| TopologyError::NotAnEdge(format!("{edge:?}")))?;
        self.neighbors[slot] = neighbor;
        Ok(())
    }

    /// Clears every neighbor reference equal to `removed`.
    pub(crate) fn forget_neighbor(&mut self, removed: TriangleId) {
        for neighbor in &mut self.neighbors {
            if *neighbor == Some(removed) {
                *neighbor = None;
            }
        }
    }
}
