use super::DEGENERATE_LENGTH_SQ;

/// Returns the point on the segment from `(ax, ay)` to `(bx, by)` closest to
/// `(px, py)`.
#[must_use]
pub fn closest_point_on_segment(px: f64, py: f64, ax: f64, ay: f64, bx: f64, by: f64) -> (f64, f64) {
    let dx = bx - ax;
    let dy = by - ay;
    let len_sq = dx * dx + dy * dy;

    if len_sq < DEGENERATE_LENGTH_SQ {
        // Degenerate segment (zero length).
        return (ax, ay);
    }

    // Project point onto the infinite line, clamp to [0, 1].
    let t = ((px - ax) * dx + (py - ay) * dy) / len_sq;
    let t = t.clamp(0.0, 1.0);

    (ax + t * dx, ay + t * dy)
}

/// Returns the minimum distance from point `(px, py)` to the line segment
/// from `(ax, ay)` to `(bx, by)`.
#[must_use]
pub fn point_to_segment_dist(px: f64, py: f64, ax: f64, ay: f64, bx: f64, by: f64) -> f64 {
    let (cx, cy) = closest_point_on_segment(px, py, ax, ay, bx, by);
    (px - cx).hypot(py - cy)
}
