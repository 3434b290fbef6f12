use crate::geometry::Coordinate;

use super::TriangulationParams;

/// Returns the corners of a triangle enclosing every point in `points`.
///
/// With `M = seed_scale * max(|x|, |y|)` and `s = seed_spread`, the corners
/// are `(0, sM)`, `(sM, 0)` and `(-sM, -sM)`. A point set sitting entirely
/// at the origin is treated as if its extent were 1.
#[must_use]
pub fn bounding_triangle(points: &[Coordinate], params: &TriangulationParams) -> [Coordinate; 3] {
    let extent = points
        .iter()
        .map(|p| p.x.abs().max(p.y.abs()))
        .fold(0.0, f64::max);
    let extent = if extent > 0.0 { extent } else { 1.0 };
    let reach = params.seed_spread * params.seed_scale * extent;

    [
        Coordinate::planar(0.0, reach),
        Coordinate::planar(reach, 0.0),
        Coordinate::planar(-reach, -reach),
    ]
}
