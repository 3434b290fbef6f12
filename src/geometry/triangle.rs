use std::cell::OnceCell;

use crate::math::distance_2d::point_to_segment_dist;
use crate::math::{Matrix3, Vector3};

use super::Coordinate;

/// One of the three edges of a triangle, named by its corners.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EdgeSlot {
    /// Edge from corner `a` to corner `b`.
    Ab,
    /// Edge from corner `b` to corner `c`.
    Bc,
    /// Edge from corner `c` to corner `a`.
    Ca,
}

impl EdgeSlot {
    /// All edges in scan order.
    pub const ALL: [EdgeSlot; 3] = [EdgeSlot::Ab, EdgeSlot::Bc, EdgeSlot::Ca];

    /// Corner indices (0 = a, 1 = b, 2 = c) of the edge's endpoints.
    #[must_use]
    pub fn corners(self) -> (usize, usize) {
        match self {
            EdgeSlot::Ab => (0, 1),
            EdgeSlot::Bc => (1, 2),
            EdgeSlot::Ca => (2, 0),
        }
    }
}

/// Nearest edge of a triangle together with its distance to the query point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EdgeDistance {
    pub edge: EdgeSlot,
    pub distance: f64,
}

/// A planar triangle with elevations at its corners.
///
/// Corners are kept in the order they were given; no orientation is
/// enforced, so every orientation-sensitive predicate consults
/// [`Triangle::is_oriented_ccw`] itself.
#[derive(Debug, Clone)]
pub struct Triangle {
    corners: [Coordinate; 3],
    normal: OnceCell<Vector3>,
}

impl Triangle {
    /// Creates a triangle from its three corners.
    #[must_use]
    pub fn new(a: Coordinate, b: Coordinate, c: Coordinate) -> Self {
        Self {
            corners: [a, b, c],
            normal: OnceCell::new(),
        }
    }

    #[must_use]
    pub fn a(&self) -> Coordinate {
        self.corners[0]
    }

    #[must_use]
    pub fn b(&self) -> Coordinate {
        self.corners[1]
    }

    #[must_use]
    pub fn c(&self) -> Coordinate {
        self.corners[2]
    }

    /// Returns the corners in assembly order.
    #[must_use]
    pub fn corners(&self) -> &[Coordinate; 3] {
        &self.corners
    }

    /// Returns the endpoints of the given edge.
    #[must_use]
    pub fn edge(&self, slot: EdgeSlot) -> (Coordinate, Coordinate) {
        let (i, j) = slot.corners();
        (self.corners[i], self.corners[j])
    }

    /// Pseudo cross products of `point` against the edges ab, bc and ca.
    fn edge_products(&self, point: Coordinate) -> (f64, f64, f64) {
        let [a, b, c] = self.corners;
        let pab = (point - a).cross_2d(b - a);
        let pbc = (point - b).cross_2d(c - b);
        let pca = (point - c).cross_2d(a - c);
        (pab, pbc, pca)
    }

    /// Strict point-in-triangle test.
    ///
    /// A point exactly on an edge is reported as outside. The insertion
    /// algorithm relies on this to route such points to the edge split.
    #[must_use]
    pub fn contains(&self, point: Coordinate) -> bool {
        let (pab, pbc, pca) = self.edge_products(point);
        has_same_sign(pab, pbc) && has_same_sign(pab, pca)
    }

    /// Inclusive point-in-triangle test.
    ///
    /// Points on an edge count as inside, so that queries on a finished mesh
    /// find a triangle for every point on a shared edge.
    #[must_use]
    #[allow(clippy::float_cmp)]
    pub fn contains_inclusive(&self, point: Coordinate) -> bool {
        let (pab, pbc, pca) = self.edge_products(point);

        if pab == 0.0 && pca * pbc >= 0.0 {
            return true;
        }
        if pbc == 0.0 && pca * pab >= 0.0 {
            return true;
        }
        if pca == 0.0 && pab * pbc >= 0.0 {
            return true;
        }

        has_same_sign(pab, pbc) && has_same_sign(pab, pca)
    }

    /// Returns `true` if the corners `a, b, c` wind counter-clockwise.
    ///
    /// Collinear corners are reported as clockwise.
    #[must_use]
    pub fn is_oriented_ccw(&self) -> bool {
        let [a, b, c] = self.corners;
        let a11 = a.x - c.x;
        let a21 = b.x - c.x;
        let a12 = a.y - c.y;
        let a22 = b.y - c.y;

        a11 * a22 - a12 * a21 > 0.0
    }

    /// Returns `true` if `point` lies strictly inside the circumcircle.
    ///
    /// For a counter-clockwise triangle a positive lifted determinant means
    /// inside; for a clockwise one the sign is reversed. Cocircular points
    /// (zero determinant) are outside.
    #[must_use]
    pub fn is_point_in_circumcircle(&self, point: Coordinate) -> bool {
        let det = self.circumcircle_determinant(point);

        if self.is_oriented_ccw() {
            det > 0.0
        } else {
            det < 0.0
        }
    }

    fn circumcircle_determinant(&self, point: Coordinate) -> f64 {
        let [a, b, c] = self.corners.map(|corner| corner - point);
        let lifted = |v: Coordinate| v.x * v.x + v.y * v.y;

        #[rustfmt::skip]
        let m = Matrix3::new(
            a.x, a.y, lifted(a),
            b.x, b.y, lifted(b),
            c.x, c.y, lifted(c),
        );
        m.determinant()
    }

    /// Returns the edge closest to `point`, measured in the plane.
    ///
    /// Ties go to the first edge in ab, bc, ca order.
    #[must_use]
    pub fn nearest_edge(&self, point: Coordinate) -> EdgeDistance {
        let mut best = EdgeDistance {
            edge: EdgeSlot::Ab,
            distance: f64::INFINITY,
        };
        for slot in EdgeSlot::ALL {
            let (start, end) = self.edge(slot);
            let distance = point_to_segment_dist(point.x, point.y, start.x, start.y, end.x, end.y);
            if distance < best.distance {
                best = EdgeDistance {
                    edge: slot,
                    distance,
                };
            }
        }
        best
    }

    /// Planar lengths of the edges ab, bc and ca.
    #[must_use]
    pub fn edge_lengths(&self) -> [f64; 3] {
        EdgeSlot::ALL.map(|slot| {
            let (start, end) = self.edge(slot);
            (end - start).magnitude()
        })
    }

    /// Planar length of the longest edge.
    #[must_use]
    pub fn longest_edge(&self) -> f64 {
        self.edge_lengths().into_iter().fold(0.0, f64::max)
    }

    /// Returns the (unnormalized) plane normal `(a - b) × (a - c)`.
    ///
    /// Computed on first use and cached.
    #[must_use]
    pub fn normal(&self) -> Vector3 {
        *self.normal.get_or_init(|| {
            let [a, b, c] = self.corners;
            (a - b).cross(a - c).to_vector()
        })
    }

    /// Elevation of the triangle's plane above `(x, y)`.
    ///
    /// A triangle that is vertical in projection has no unique elevation;
    /// corner `a`'s elevation is returned instead.
    #[must_use]
    #[allow(clippy::float_cmp)]
    pub fn plane_depth_at(&self, x: f64, y: f64) -> f64 {
        let a = self.a();
        let n = self.normal();
        if n.z == 0.0 {
            return a.z;
        }
        a.z - (n.x * (x - a.x) + n.y * (y - a.y)) / n.z
    }
}

/// Returns `true` if both values are non-zero with the same sign.
fn has_same_sign(lhs: f64, rhs: f64) -> bool {
    (lhs > 0.0 && rhs > 0.0) || (lhs < 0.0 && rhs < 0.0)
}
