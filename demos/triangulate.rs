//! Triangulates a small terrain sample and prints the resulting triangles.
//!
//! Usage:
//! ```text
//! cargo run --example triangulate
//! RUST_LOG=tinmesh=trace cargo run --example triangulate
//! ```

use tinmesh::operations::query::{ElevationAt, IsDelaunay};
use tinmesh::{Coordinate, DelaunayTriangulator, Result};

fn main() -> Result<()> {
    // Default: WARN for everything, INFO for tinmesh.
    // Override with RUST_LOG env var (e.g. RUST_LOG=tinmesh=debug).
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into())
        .add_directive("triangulate=info".parse().unwrap_or_default())
        .add_directive("tinmesh=info".parse().unwrap_or_default());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let samples = vec![
        Coordinate::new(0.0, 0.0, 12.0),
        Coordinate::new(10.0, 0.0, 14.5),
        Coordinate::new(10.0, 10.0, 18.0),
        Coordinate::new(0.0, 10.0, 13.0),
        Coordinate::new(4.0, 3.0, 15.2),
        Coordinate::new(7.0, 6.5, 16.8),
        Coordinate::new(2.5, 7.5, 14.1),
    ];

    let mut triangulator = DelaunayTriangulator::new(samples);
    let mesh = triangulator.triangulate()?;

    for (id, data) in mesh.triangles() {
        let [a, b, c] = *data.shape().corners();
        println!("{id:?}: {a} {b} {c}");
    }
    println!(
        "{} triangles, {} Delaunay violations",
        mesh.triangle_count(),
        IsDelaunay::new().execute(mesh).len()
    );
    if let Some(z) = ElevationAt::new(5.0, 5.0).execute(mesh) {
        println!("elevation at (5, 5): {z:.3}");
    }
    Ok(())
}
