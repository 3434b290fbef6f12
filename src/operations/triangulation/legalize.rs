use tracing::trace;

use crate::error::TopologyError;
use crate::topology::{Mesh, Segment, TriangleId, VertexId};

/// Restores the Delaunay property around a freshly inserted vertex.
///
/// Each entry of `pending` is a triangle having `point` as a corner together
/// with its edge opposite `point`. Whenever the triangle across that edge has
/// `point` inside its circumcircle, the shared edge is flipped and the two
/// new outer edges are queued. Entries are visited depth-first in the order
/// given. Returns the number of flips performed.
///
/// # Errors
///
/// Returns an error if the adjacency around `point` is inconsistent.
pub fn legalize(
    mesh: &mut Mesh,
    point: VertexId,
    pending: &[(TriangleId, Segment)],
) -> Result<usize, TopologyError> {
    let position = mesh.vertex(point)?;
    let mut stack: Vec<(TriangleId, Segment)> = pending.iter().rev().copied().collect();
    let mut flips = 0;

    while let Some((triangle, edge)) = stack.pop() {
        if !mesh.contains_triangle(triangle) {
            continue;
        }
        // Boundary edges are legal by definition.
        let Some(neighbor) = mesh.triangle(triangle)?.opposite_neighbor(&edge) else {
            continue;
        };
        if !mesh.triangle(neighbor)?.shape().is_point_in_circumcircle(position) {
            continue;
        }

        let (apex, [first, second]) = flip(mesh, triangle, neighbor, &edge, point)?;
        flips += 1;
        trace!(?triangle, ?neighbor, "flipped edge");

        stack.push((second, Segment::new(apex, edge.b())));
        stack.push((first, Segment::new(apex, edge.a())));
    }

    Ok(flips)
}

/// Replaces `triangle` and `neighbor`, which share `edge`, with the two
/// triangles over the other diagonal of their quadrilateral.
///
/// `triangle` must have `point` as its corner off `edge`. Returns the
/// neighbor's far corner and the new triangles `(apex, edge.a, point)` and
/// `(apex, edge.b, point)`.
fn flip(
    mesh: &mut Mesh,
    triangle: TriangleId,
    neighbor: TriangleId,
    edge: &Segment,
    point: VertexId,
) -> Result<(VertexId, [TriangleId; 2]), TopologyError> {
    if mesh.triangle(triangle)?.non_edge_vertex(edge) != Some(point) {
        return Err(TopologyError::InvalidTopology(format!(
            "{triangle:?} is not opposite {point:?} across {edge:?}"
        )));
    }
    let apex = mesh
        .triangle(neighbor)?
        .non_edge_vertex(edge)
        .ok_or_else(|| TopologyError::NotAnEdge(format!("{edge:?}")))?;

    let old_near = mesh.remove_triangle(triangle)?;
    let old_far = mesh.remove_triangle(neighbor)?;
    let (ea, eb) = (edge.a(), edge.b());

    let data = mesh.make_triangle(apex, ea, point)?;
    let first = mesh.add_triangle(data);
    let data = mesh.make_triangle(apex, eb, point)?;
    let second = mesh.add_triangle(data);

    mesh.link(first, &Segment::new(apex, point), Some(second))?;
    for (new, end) in [(first, ea), (second, eb)] {
        let near_edge = Segment::new(end, point);
        mesh.link(new, &near_edge, old_near.opposite_neighbor(&near_edge))?;
        let far_edge = Segment::new(apex, end);
        mesh.link(new, &far_edge, old_far.opposite_neighbor(&far_edge))?;
    }

    Ok((apex, [first, second]))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::geometry::Coordinate;

    /// Kite a(0,0) b(2,-1) c(4,0) d(2,1).
    fn kite() -> (Mesh, [VertexId; 4]) {
        let mut mesh = Mesh::new();
        let a = mesh.add_vertex(Coordinate::planar(0.0, 0.0));
        let b = mesh.add_vertex(Coordinate::planar(2.0, -1.0));
        let c = mesh.add_vertex(Coordinate::planar(4.0, 0.0));
        let d = mesh.add_vertex(Coordinate::planar(2.0, 1.0));
        (mesh, [a, b, c, d])
    }

    fn pair(
        mesh: &mut Mesh,
        near: [VertexId; 3],
        far: [VertexId; 3],
        shared: Segment,
    ) -> (TriangleId, TriangleId) {
        let data = mesh.make_triangle(near[0], near[1], near[2]).unwrap();
        let near = mesh.add_triangle(data);
        let data = mesh.make_triangle(far[0], far[1], far[2]).unwrap();
        let far = mesh.add_triangle(data);
        mesh.link(near, &shared, Some(far)).unwrap();
        (near, far)
    }

    #[test]
    fn illegal_edge_is_flipped() {
        // Long diagonal a–c: d lies inside the circumcircle of (a, b, c).
        let (mut mesh, [a, b, c, d]) = kite();
        let (near, far) = pair(&mut mesh, [a, c, d], [a, b, c], Segment::new(a, c));

        let flips = legalize(&mut mesh, d, &[(near, Segment::new(a, c))]).unwrap();
        assert_eq!(flips, 1);
        assert_eq!(mesh.triangle_count(), 2);
        assert!(!mesh.contains_triangle(near));
        assert!(!mesh.contains_triangle(far));
        mesh.validate_adjacency().unwrap();

        let diagonal = Segment::new(b, d);
        for (_, data) in mesh.triangles() {
            assert!(data.shares_edge(&diagonal));
            assert!(data.opposite_neighbor(&diagonal).is_some());
        }
        assert!(mesh.find_any_triangle_on_edge(&Segment::new(a, c)).is_none());
    }

    #[test]
    fn legal_edge_is_kept() {
        // Short diagonal b–d is already Delaunay.
        let (mut mesh, [a, b, c, d]) = kite();
        let (near, far) = pair(&mut mesh, [a, b, d], [b, c, d], Segment::new(b, d));

        let flips = legalize(&mut mesh, a, &[(near, Segment::new(b, d))]).unwrap();
        assert_eq!(flips, 0);
        assert!(mesh.contains_triangle(near));
        assert!(mesh.contains_triangle(far));
    }

    #[test]
    fn boundary_edge_needs_no_flip() {
        let (mut mesh, [a, b, c, d]) = kite();
        let (near, _) = pair(&mut mesh, [a, c, d], [a, b, c], Segment::new(a, c));

        let flips = legalize(&mut mesh, c, &[(near, Segment::new(a, d))]).unwrap();
        assert_eq!(flips, 0);
        assert!(mesh.contains_triangle(near));
        assert_eq!(mesh.triangle_count(), 2);
    }

    #[test]
    fn flip_rewires_outer_neighbors() {
        let (mut mesh, [a, b, c, d]) = kite();
        let (near, far) = pair(&mut mesh, [a, c, d], [a, b, c], Segment::new(a, c));
        let e = mesh.add_vertex(Coordinate::planar(1.0, -3.0));
        let data = mesh.make_triangle(a, e, b).unwrap();
        let outer = mesh.add_triangle(data);
        mesh.link(outer, &Segment::new(a, b), Some(far)).unwrap();

        let flips = legalize(&mut mesh, d, &[(near, Segment::new(a, c))]).unwrap();
        assert_eq!(flips, 1);
        mesh.validate_adjacency().unwrap();

        let ab = Segment::new(a, b);
        let (replacement, data) = mesh
            .triangles()
            .find(|(_, t)| t.shares_edge(&ab) && t.has_vertex(d))
            .unwrap();
        assert_eq!(data.opposite_neighbor(&ab), Some(outer));
        assert_eq!(
            mesh.triangle(outer).unwrap().opposite_neighbor(&ab),
            Some(replacement)
        );
    }

    #[test]
    fn triangle_without_point_is_rejected() {
        let (mut mesh, [a, b, c, d]) = kite();
        let (near, far) = pair(&mut mesh, [a, c, d], [a, b, c], Segment::new(a, c));
        let stray = mesh.add_vertex(Coordinate::planar(2.0, -0.5));

        // `stray` violates the far circumcircle but is not a corner of `near`.
        let err = legalize(&mut mesh, stray, &[(near, Segment::new(a, c))]).unwrap_err();
        assert!(matches!(err, TopologyError::InvalidTopology(_)));
        assert!(mesh.contains_triangle(near));
        assert!(mesh.contains_triangle(far));
    }
}
