use tracing::{debug, warn};

use crate::error::TopologyError;
use crate::topology::{Mesh, Segment, TriangleId, VertexId};

use super::legalize::legalize;

/// How a vertex entered the mesh.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsertionKind {
    /// The vertex was strictly inside a triangle, which was split in three.
    Interior,
    /// The vertex was on an edge; the two triangles sharing it were split
    /// into four.
    EdgeSplit,
}

/// Summary of a single vertex insertion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InsertionOutcome {
    pub kind: InsertionKind,
    /// Edge flips performed while legalizing.
    pub flips: usize,
}

/// Inserts an existing mesh vertex into the triangulation and legalizes the
/// edges around it.
///
/// # Errors
///
/// Returns [`TopologyError::DegenerateBoundaryInsertion`] if the vertex lies
/// on an edge with only one adjacent triangle, or another topology error if
/// the mesh adjacency is inconsistent.
pub fn insert_vertex(mesh: &mut Mesh, vertex: VertexId) -> Result<InsertionOutcome, TopologyError> {
    let point = mesh.vertex(vertex)?;

    let (kind, pending) = if let Some(host) = mesh.locate_containing(point) {
        (InsertionKind::Interior, split_triangle(mesh, host, vertex)?)
    } else {
        // On an edge, either exactly or through rounding.
        debug!(x = point.x, y = point.y, "point not strictly inside any triangle, splitting nearest edge");
        (InsertionKind::EdgeSplit, split_edge(mesh, vertex)?)
    };

    let flips = legalize(mesh, vertex, &pending)?;
    Ok(InsertionOutcome { kind, flips })
}

/// Replaces `host` with the three triangles `(a, b, p)`, `(b, c, p)`,
/// `(c, a, p)` and returns them paired with their outer edges.
fn split_triangle(
    mesh: &mut Mesh,
    host: TriangleId,
    point: VertexId,
) -> Result<Vec<(TriangleId, Segment)>, TopologyError> {
    let old = mesh.remove_triangle(host)?;
    let [a, b, c] = old.vertices();

    let mut fan = Vec::with_capacity(3);
    for (start, end) in [(a, b), (b, c), (c, a)] {
        let data = mesh.make_triangle(start, end, point)?;
        fan.push((mesh.add_triangle(data), Segment::new(start, end)));
    }

    for (i, &(id, outer)) in fan.iter().enumerate() {
        let (next, next_outer) = fan[(i + 1) % fan.len()];
        // Consecutive fan triangles share the spoke to the next start corner.
        mesh.link(id, &Segment::new(next_outer.a(), point), Some(next))?;
        mesh.link(id, &outer, old.opposite_neighbor(&outer))?;
    }

    Ok(fan)
}

/// Splits the edge nearest to `point` and the two triangles sharing it into
/// four triangles around `point`, returned paired with their outer edges.
fn split_edge(
    mesh: &mut Mesh,
    point: VertexId,
) -> Result<Vec<(TriangleId, Segment)>, TopologyError> {
    let position = mesh.vertex(point)?;
    let nearest = mesh
        .nearest_edge(position)
        .ok_or_else(|| TopologyError::EntityNotFound("triangle".into()))?;
    let edge = nearest.edge;

    let first = mesh
        .find_any_triangle_on_edge(&edge)
        .ok_or_else(|| TopologyError::EntityNotFound("triangle on nearest edge".into()))?;
    let Some(second) = mesh.triangle(first)?.opposite_neighbor(&edge) else {
        warn!(x = position.x, y = position.y, "nearest edge has a single adjacent triangle");
        return Err(TopologyError::DegenerateBoundaryInsertion {
            x: position.x,
            y: position.y,
        });
    };

    let not_on_edge = |id: TriangleId, mesh: &Mesh| -> Result<VertexId, TopologyError> {
        mesh.triangle(id)?
            .non_edge_vertex(&edge)
            .ok_or_else(|| TopologyError::NotAnEdge(format!("{edge:?}")))
    };
    let first_apex = not_on_edge(first, mesh)?;
    let second_apex = not_on_edge(second, mesh)?;

    let old_first = mesh.remove_triangle(first)?;
    let old_second = mesh.remove_triangle(second)?;
    let (u, v) = (edge.a(), edge.b());

    let mut build = |end: VertexId, apex: VertexId| -> Result<(TriangleId, Segment), TopologyError> {
        let data = mesh.make_triangle(end, apex, point)?;
        Ok((mesh.add_triangle(data), Segment::new(end, apex)))
    };
    let quad: [(TriangleId, Segment); 4] = [
        build(u, first_apex)?,
        build(v, first_apex)?,
        build(u, second_apex)?,
        build(v, second_apex)?,
    ];
    let [(t1, _), (t2, _), (t3, _), (t4, _)] = quad;

    mesh.link(t1, &Segment::new(first_apex, point), Some(t2))?;
    mesh.link(t3, &Segment::new(second_apex, point), Some(t4))?;
    mesh.link(t1, &Segment::new(u, point), Some(t3))?;
    mesh.link(t2, &Segment::new(v, point), Some(t4))?;

    for (i, &(id, outer)) in quad.iter().enumerate() {
        let old = if i < 2 { &old_first } else { &old_second };
        mesh.link(id, &outer, old.opposite_neighbor(&outer))?;
    }

    Ok(quad.to_vec())
}
