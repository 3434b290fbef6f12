pub mod query;
pub mod segment;
pub mod triangle;
pub mod vertex;

pub use query::NearestEdge;
pub use segment::Segment;
pub use triangle::{TriangleData, TriangleId};
pub use vertex::VertexId;

use crate::error::TopologyError;
use crate::geometry::{Coordinate, Triangle};
use slotmap::SlotMap;

/// Central arena that owns the mesh vertices and its live triangles.
///
/// Triangles reference their corners and neighbors via typed IDs
/// (generational indices). Adjacency lives on the triangles; the arena only
/// records membership. Adding or removing a triangle never touches other
/// triangles: callers keep neighbor links reciprocal, normally through
/// [`Mesh::link`].
#[derive(Debug, Default)]
pub struct Mesh {
    vertices: SlotMap<VertexId, Coordinate>,
    triangles: SlotMap<TriangleId, TriangleData>,
}

impl Mesh {
    /// Creates a new, empty mesh.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // --- Vertex operations ---

    /// Inserts a vertex and returns its ID.
    pub fn add_vertex(&mut self, coordinate: Coordinate) -> VertexId {
        self.vertices.insert(coordinate)
    }

    /// Returns the vertex position, or an error if not found.
    ///
    /// # Errors
    ///
    /// Returns an error if the vertex is not in the mesh.
    pub fn vertex(&self, id: VertexId) -> Result<Coordinate, TopologyError> {
        self.vertices
            .get(id)
            .copied()
            .ok_or_else(|| TopologyError::EntityNotFound("vertex".into()))
    }

    /// Removes a vertex from the arena; triangles are not inspected.
    pub fn remove_vertex(&mut self, id: VertexId) -> Option<Coordinate> {
        self.vertices.remove(id)
    }

    /// Iterates over all vertices.
    pub fn vertices(&self) -> impl Iterator<Item = (VertexId, Coordinate)> + '_ {
        self.vertices.iter().map(|(id, c)| (id, *c))
    }

    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    // --- Triangle operations ---

    /// Builds an unlinked triangle over three existing vertices.
    ///
    /// # Errors
    ///
    /// Returns an error if any vertex is not in the mesh.
    pub fn make_triangle(
        &self,
        a: VertexId,
        b: VertexId,
        c: VertexId,
    ) -> Result<TriangleData, TopologyError> {
        let shape = Triangle::new(self.vertex(a)?, self.vertex(b)?, self.vertex(c)?);
        Ok(TriangleData::new([a, b, c], shape))
    }

    /// Inserts a triangle and returns its ID.
    pub fn add_triangle(&mut self, data: TriangleData) -> TriangleId {
        self.triangles.insert(data)
    }

    /// Removes a triangle and returns its data, leaving neighbors untouched.
    ///
    /// # Errors
    ///
    /// Returns an error if the triangle is not in the mesh.
    pub fn remove_triangle(&mut self, id: TriangleId) -> Result<TriangleData, TopologyError> {
        self.triangles
            .remove(id)
            .ok_or_else(|| TopologyError::EntityNotFound("triangle".into()))
    }

    /// Returns a reference to the triangle data, or an error if not found.
    ///
    /// # Errors
    ///
    /// Returns an error if the triangle is not in the mesh.
    pub fn triangle(&self, id: TriangleId) -> Result<&TriangleData, TopologyError> {
        self.triangles
            .get(id)
            .ok_or_else(|| TopologyError::EntityNotFound("triangle".into()))
    }

    /// Returns a mutable reference to the triangle data, or an error if not found.
    ///
    /// # Errors
    ///
    /// Returns an error if the triangle is not in the mesh.
    pub fn triangle_mut(&mut self, id: TriangleId) -> Result<&mut TriangleData, TopologyError> {
        self.triangles
            .get_mut(id)
            .ok_or_else(|| TopologyError::EntityNotFound("triangle".into()))
    }

    /// Returns `true` if the triangle is live.
    #[must_use]
    pub fn contains_triangle(&self, id: TriangleId) -> bool {
        self.triangles.contains_key(id)
    }

    /// Iterates over all live triangles.
    pub fn triangles(&self) -> impl Iterator<Item = (TriangleId, &TriangleData)> + '_ {
        self.triangles.iter()
    }

    #[must_use]
    pub fn triangle_count(&self) -> usize {
        self.triangles.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.triangles.is_empty()
    }

    // --- Adjacency ---

    /// Makes `neighbor` the triangle across `edge` from `id`, and `id` the
    /// triangle across `edge` from `neighbor`.
    ///
    /// With `None`, only `id`'s side is written (the edge becomes boundary).
    ///
    /// # Errors
    ///
    /// Returns an error if either triangle is missing or does not have `edge`.
    pub fn link(
        &mut self,
        id: TriangleId,
        edge: &Segment,
        neighbor: Option<TriangleId>,
    ) -> Result<(), TopologyError> {
        if let Some(other) = neighbor {
            // Check the far side first so a failure leaves both untouched.
            if !self.triangle(other)?.shares_edge(edge) {
                return Err(TopologyError::NotAnEdge(format!("{edge:?}")));
            }
        }
        self.triangle_mut(id)?.set_neighbor(edge, neighbor)?;
        if let Some(other) = neighbor {
            self.triangle_mut(other)?.set_neighbor(edge, Some(id))?;
        }
        Ok(())
    }

    /// Removes a triangle and clears every reference to it held by its
    /// neighbors.
    ///
    /// # Errors
    ///
    /// Returns an error if the triangle is not in the mesh.
    pub fn detach_triangle(&mut self, id: TriangleId) -> Result<TriangleData, TopologyError> {
        let data = self.remove_triangle(id)?;
        for neighbor in data.neighbors().into_iter().flatten() {
            if let Some(n) = self.triangles.get_mut(neighbor) {
                n.forget_neighbor(id);
            }
        }
        Ok(data)
    }

    /// Checks that every neighbor reference is live and reciprocal.
    ///
    /// # Errors
    ///
    /// Returns [`TopologyError::InvalidTopology`] describing the first
    /// violation found.
    pub fn validate_adjacency(&self) -> Result<(), TopologyError> {
        for (id, data) in &self.triangles {
            let [a, b, c] = data.vertices();
            let across = [Segment::new(b, c), Segment::new(a, c), Segment::new(a, b)];
            for (edge, neighbor) in across.iter().zip(data.neighbors()) {
                let Some(neighbor) = neighbor else { continue };
                let Some(other) = self.triangles.get(neighbor) else {
                    return Err(TopologyError::InvalidTopology(format!(
                        "{id:?} references removed triangle {neighbor:?}"
                    )));
                };
                if other.opposite_neighbor(edge) != Some(id) {
                    return Err(TopologyError::InvalidTopology(format!(
                        "{id:?} -> {neighbor:?} across {edge:?} is not reciprocated"
                    )));
                }
            }
        }
        Ok(())
    }

    /// Removes every triangle failing `keep`, detaching it from its
    /// neighbors. Returns the number of triangles removed.
    pub fn retain_triangles<F>(&mut self, mut keep: F) -> usize
    where
        F: FnMut(&TriangleData) -> bool,
    {
        let doomed: Vec<TriangleId> = self
            .triangles
            .iter()
            .filter(|(_, data)| !keep(data))
            .map(|(id, _)| id)
            .collect();
        let mut removed = 0;
        for id in doomed {
            if self.detach_triangle(id).is_ok() {
                removed += 1;
            }
        }
        removed
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    /// Two triangles (a, b, c) and (b, a, d) sharing edge a–b.
    pub(crate) fn diamond() -> (Mesh, [VertexId; 4], TriangleId, TriangleId) {
        let mut mesh = Mesh::new();
        let a = mesh.add_vertex(Coordinate::planar(0.0, 0.0));
        let b = mesh.add_vertex(Coordinate::planar(2.0, 0.0));
        let c = mesh.add_vertex(Coordinate::planar(1.0, 2.0));
        let d = mesh.add_vertex(Coordinate::planar(1.0, -2.0));
        let upper = mesh.make_triangle(a, b, c).unwrap();
        let lower = mesh.make_triangle(b, a, d).unwrap();
        let upper = mesh.add_triangle(upper);
        let lower = mesh.add_triangle(lower);
        (mesh, [a, b, c, d], upper, lower)
    }

    #[test]
    fn link_writes_both_sides() {
        let (mut mesh, [a, b, ..], upper, lower) = diamond();
        mesh.link(upper, &Segment::new(a, b), Some(lower)).unwrap();
        assert_eq!(mesh.triangle(upper).unwrap().neighbors(), [None, None, Some(lower)]);
        assert_eq!(mesh.triangle(lower).unwrap().neighbors(), [None, None, Some(upper)]);
        mesh.validate_adjacency().unwrap();
    }

    #[test]
    fn link_rejects_unshared_edge_without_writing() {
        let (mut mesh, [a, _, c, _], upper, lower) = diamond();
        let err = mesh.link(upper, &Segment::new(a, c), Some(lower)).unwrap_err();
        assert!(matches!(err, TopologyError::NotAnEdge(_)));
        assert_eq!(mesh.triangle(upper).unwrap().neighbors(), [None; 3]);
    }

    #[test]
    fn validation_catches_one_sided_link() {
        let (mut mesh, [a, b, ..], upper, lower) = diamond();
        mesh.triangle_mut(upper)
            .unwrap()
            .set_neighbor(&Segment::new(a, b), Some(lower))
            .unwrap();
        assert!(matches!(
            mesh.validate_adjacency(),
            Err(TopologyError::InvalidTopology(_))
        ));
    }

    #[test]
    fn validation_catches_dangling_link() {
        let (mut mesh, [a, b, ..], upper, lower) = diamond();
        mesh.link(upper, &Segment::new(a, b), Some(lower)).unwrap();
        mesh.remove_triangle(lower).unwrap();
        assert!(mesh.validate_adjacency().is_err());
    }

    #[test]
    fn detach_clears_reciprocal_links() {
        let (mut mesh, [a, b, ..], upper, lower) = diamond();
        mesh.link(upper, &Segment::new(a, b), Some(lower)).unwrap();
        mesh.detach_triangle(lower).unwrap();
        assert_eq!(mesh.triangle(upper).unwrap().neighbors(), [None; 3]);
        mesh.validate_adjacency().unwrap();
    }

    #[test]
    fn retain_removes_and_unlinks() {
        let (mut mesh, [a, b, _, d], upper, lower) = diamond();
        mesh.link(upper, &Segment::new(a, b), Some(lower)).unwrap();
        let removed = mesh.retain_triangles(|t| !t.has_vertex(d));
        assert_eq!(removed, 1);
        assert_eq!(mesh.triangle_count(), 1);
        assert!(mesh.contains_triangle(upper));
        mesh.validate_adjacency().unwrap();
    }

    #[test]
    fn retain_counts_every_removed_triangle() {
        let (mut mesh, [a, b, ..], upper, lower) = diamond();
        mesh.link(upper, &Segment::new(a, b), Some(lower)).unwrap();
        assert_eq!(mesh.retain_triangles(|_| false), 2);
        assert!(mesh.is_empty());
        assert_eq!(mesh.retain_triangles(|_| false), 0);
    }

    #[test]
    fn missing_entities_are_errors() {
        let (mut mesh, [.., d], _, lower) = diamond();
        mesh.remove_triangle(lower).unwrap();
        assert!(mesh.triangle(lower).is_err());
        assert!(mesh.remove_triangle(lower).is_err());
        mesh.remove_vertex(d);
        assert!(mesh.vertex(d).is_err());
    }
}
