//! Exhaustive-scan queries over the live triangles of a [`Mesh`].
//!
//! Every query visits triangles in arena order, which is also the tie-break
//! order where one is needed.

use crate::geometry::Coordinate;

use super::{Mesh, Segment, TriangleId, VertexId};

/// The mesh edge nearest to a query point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NearestEdge {
    /// The edge, as a pair of vertex handles.
    pub edge: Segment,
    /// The triangle the edge was measured on.
    pub triangle: TriangleId,
    /// Planar distance from the query point to the edge.
    pub distance: f64,
}

impl Mesh {
    /// Returns the first triangle strictly containing `point`.
    ///
    /// Points exactly on an edge are not found.
    #[must_use]
    pub fn locate_containing(&self, point: Coordinate) -> Option<TriangleId> {
        self.triangles()
            .find(|(_, data)| data.shape().contains(point))
            .map(|(id, _)| id)
    }

    /// Returns the first triangle containing `point`, edges included.
    ///
    /// For lookups on a finished mesh; insertion uses
    /// [`Mesh::locate_containing`].
    #[must_use]
    pub fn locate_containing_inclusive(&self, point: Coordinate) -> Option<TriangleId> {
        self.triangles()
            .find(|(_, data)| data.shape().contains_inclusive(point))
            .map(|(id, _)| id)
    }

    /// Returns the first triangle having both endpoints of `edge` as corners.
    #[must_use]
    pub fn find_any_triangle_on_edge(&self, edge: &Segment) -> Option<TriangleId> {
        self.triangles()
            .find(|(_, data)| data.shares_edge(edge))
            .map(|(id, _)| id)
    }

    /// Returns the edge nearest to `point` over all triangles.
    ///
    /// `None` only for an empty mesh.
    #[must_use]
    pub fn nearest_edge(&self, point: Coordinate) -> Option<NearestEdge> {
        let mut best: Option<NearestEdge> = None;
        for (id, data) in self.triangles() {
            let local = data.shape().nearest_edge(point);
            if best.is_some_and(|b| b.distance <= local.distance) {
                continue;
            }
            let (i, j) = local.edge.corners();
            let vertices = data.vertices();
            best = Some(NearestEdge {
                edge: Segment::new(vertices[i], vertices[j]),
                triangle: id,
                distance: local.distance,
            });
        }
        best
    }

    /// Removes every triangle having `vertex` as a corner and returns how
    /// many were removed.
    ///
    /// Surviving neighbors lose their references to the removed triangles,
    /// so they become boundary edges.
    pub fn purge_using_vertex(&mut self, vertex: VertexId) -> usize {
        self.retain_triangles(|data| !data.has_vertex(vertex))
    }

    /// Returns every triangle having `vertex` as a corner.
    #[cfg(test)]
    #[must_use]
    pub(crate) fn triangles_using_vertex(&self, vertex: VertexId) -> Vec<TriangleId> {
        self.triangles()
            .filter(|(_, data)| data.has_vertex(vertex))
            .map(|(id, _)| id)
            .collect()
    }
}
