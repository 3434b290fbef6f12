#![allow(dead_code)]

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tinmesh::{Coordinate, Mesh};

/// Half-width of the square every generated point set spans.
pub const HALF_WIDTH: f64 = 10.0;

/// The four corners of the spanning square followed by `interior` random
/// points kept one unit away from its sides.
///
/// The hull is always the square, so a set of `n` points triangulates into
/// `2n - 6` triangles.
pub fn boxed_points(seed: u64, interior: usize) -> Vec<Coordinate> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut points = vec![
        Coordinate::planar(-HALF_WIDTH, -HALF_WIDTH),
        Coordinate::planar(HALF_WIDTH, -HALF_WIDTH),
        Coordinate::planar(HALF_WIDTH, HALF_WIDTH),
        Coordinate::planar(-HALF_WIDTH, HALF_WIDTH),
    ];
    let inner = HALF_WIDTH - 1.0;
    points.extend((0..interior).map(|_| {
        Coordinate::new(
            rng.random_range(-inner..inner),
            rng.random_range(-inner..inner),
            rng.random_range(0.0..5.0),
        )
    }));
    points
}

/// `n` uniform points over a wide, shallow band; the hull is irregular.
pub fn scattered_points(seed: u64, n: usize) -> Vec<Coordinate> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..n)
        .map(|_| Coordinate::planar(rng.random_range(-100.0..100.0), rng.random_range(-1.0..100.0)))
        .collect()
}

/// Number of convex hull vertices, collinear ones excluded (monotone chain).
pub fn hull_size(points: &[Coordinate]) -> usize {
    let mut sorted: Vec<(f64, f64)> = points.iter().map(|p| (p.x, p.y)).collect();
    sorted.sort_by(|l, r| l.0.total_cmp(&r.0).then(l.1.total_cmp(&r.1)));
    let lower = half_hull(sorted.iter().copied());
    let upper = half_hull(sorted.iter().rev().copied());
    lower + upper
}

/// Vertices of one half hull, excluding its last point.
fn half_hull(points: impl Iterator<Item = (f64, f64)>) -> usize {
    let turn = |o: (f64, f64), a: (f64, f64), b: (f64, f64)| {
        (a.0 - o.0) * (b.1 - o.1) - (a.1 - o.1) * (b.0 - o.0)
    };
    let mut half: Vec<(f64, f64)> = Vec::new();
    for point in points {
        while half.len() >= 2 && turn(half[half.len() - 2], half[half.len() - 1], point) <= 0.0 {
            half.pop();
        }
        half.push(point);
    }
    half.len().saturating_sub(1)
}

pub type CornerKey = [(u64, u64); 3];

/// Order-independent key for one triangle: its sorted planar corners by bit
/// pattern.
pub fn corner_key(corners: [(f64, f64); 3]) -> CornerKey {
    let mut key = corners.map(|(x, y)| (x.to_bits(), y.to_bits()));
    key.sort_unstable();
    key
}

/// Sorted corner keys of every live triangle.
pub fn triangle_keys(mesh: &Mesh) -> Vec<CornerKey> {
    let mut keys: Vec<CornerKey> = mesh
        .triangles()
        .map(|(_, data)| corner_key(data.shape().corners().map(|c| (c.x, c.y))))
        .collect();
    keys.sort_unstable();
    keys
}
