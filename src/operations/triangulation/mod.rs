mod insertion;
mod legalize;
mod seed;

pub use insertion::{insert_vertex, InsertionKind, InsertionOutcome};
pub use legalize::legalize;
pub use seed::bounding_triangle;

use rand::seq::SliceRandom;
use rand::Rng;
use tracing::{debug, trace, warn};

use crate::error::{OperationError, Result, TinError};
use crate::geometry::Coordinate;
use crate::topology::Mesh;

/// Parameters controlling triangulation.
#[derive(Debug, Clone, Copy)]
pub struct TriangulationParams {
    /// Multiplier applied to the largest absolute input component to size
    /// the bounding triangle.
    ///
    /// A hull triangle whose circumcircle reaches a bounding corner is lost
    /// in cleanup, so thin triangles along the hull need a larger scale
    /// than the default.
    pub seed_scale: f64,
    /// Distance of the bounding corners from the origin, in units of the
    /// scaled extent.
    pub seed_spread: f64,
    /// Check neighbor reciprocity after every insertion.
    pub validate_adjacency: bool,
}

impl Default for TriangulationParams {
    fn default() -> Self {
        Self {
            seed_scale: 16.0,
            seed_spread: 3.0,
            validate_adjacency: false,
        }
    }
}

/// Progress of a [`DelaunayTriangulator`] run.
#[derive(Debug, Clone, PartialEq)]
pub enum TriangulationState {
    Uninitialized,
    /// The bounding triangle is in place.
    Seeded,
    /// Inserting the point at this index of the input sequence.
    Inserting(usize),
    /// Removing triangles that touch the bounding triangle.
    Cleanup,
    Done,
    Failed(TinError),
}

/// Incremental Delaunay triangulator.
///
/// Owns the input sequence and, after a successful run, the resulting
/// [`Mesh`]. Points are inserted in sequence order; the order shapes the
/// intermediate meshes but not the final triangulation.
#[derive(Debug)]
pub struct DelaunayTriangulator {
    points: Vec<Coordinate>,
    params: TriangulationParams,
    state: TriangulationState,
    mesh: Option<Mesh>,
}

impl DelaunayTriangulator {
    /// Creates a triangulator over `points` with default parameters.
    #[must_use]
    pub fn new(points: Vec<Coordinate>) -> Self {
        Self::with_params(points, TriangulationParams::default())
    }

    /// Creates a triangulator over `points`.
    #[must_use]
    pub fn with_params(points: Vec<Coordinate>, params: TriangulationParams) -> Self {
        Self {
            points,
            params,
            state: TriangulationState::Uninitialized,
            mesh: None,
        }
    }

    /// Returns the input points in insertion order.
    #[must_use]
    pub fn points(&self) -> &[Coordinate] {
        &self.points
    }

    #[must_use]
    pub fn params(&self) -> &TriangulationParams {
        &self.params
    }

    #[must_use]
    pub fn state(&self) -> &TriangulationState {
        &self.state
    }

    /// Randomly permutes the insertion order.
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.points.shuffle(rng);
    }

    /// Reorders the points so that the `i`-th inserted point is the one
    /// previously at `permutation[i]`.
    ///
    /// # Errors
    ///
    /// Returns [`OperationError::InvalidPermutation`] unless `permutation`
    /// contains every index `0..n` exactly once.
    pub fn permute(&mut self, permutation: &[usize]) -> Result<()> {
        let n = self.points.len();
        if permutation.len() != n {
            return Err(OperationError::InvalidPermutation(format!(
                "expected {n} indices, got {}",
                permutation.len()
            ))
            .into());
        }
        let mut seen = vec![false; n];
        for &index in permutation {
            match seen.get_mut(index) {
                Some(slot) if !*slot => *slot = true,
                Some(_) => {
                    return Err(OperationError::InvalidPermutation(format!(
                        "index {index} appears twice"
                    ))
                    .into())
                }
                None => {
                    return Err(OperationError::InvalidPermutation(format!(
                        "index {index} is out of range for {n} points"
                    ))
                    .into())
                }
            }
        }
        self.points = permutation.iter().map(|&i| self.points[i]).collect();
        Ok(())
    }

    /// Builds the Delaunay triangulation of the points.
    ///
    /// Any mesh from a previous run is discarded first.
    ///
    /// # Errors
    ///
    /// Returns [`OperationError::NotEnoughPoints`] for fewer than three
    /// points, and
    /// [`TopologyError::DegenerateBoundaryInsertion`](crate::error::TopologyError::DegenerateBoundaryInsertion)
    /// if a point lands on an edge of the current mesh boundary.
    pub fn triangulate(&mut self) -> Result<&Mesh> {
        self.mesh = None;
        self.state = TriangulationState::Uninitialized;

        if self.points.len() < 3 {
            let err: TinError = OperationError::NotEnoughPoints {
                found: self.points.len(),
            }
            .into();
            warn!(points = self.points.len(), "refusing to triangulate");
            self.state = TriangulationState::Failed(err.clone());
            return Err(err);
        }

        match self.run() {
            Ok(mesh) => {
                self.state = TriangulationState::Done;
                debug!(triangles = mesh.triangle_count(), "triangulation done");
                Ok(&*self.mesh.insert(mesh))
            }
            Err(err) => {
                warn!(state = ?self.state, error = %err, "triangulation failed");
                self.state = TriangulationState::Failed(err.clone());
                Err(err)
            }
        }
    }

    fn run(&mut self) -> Result<Mesh> {
        let mut mesh = Mesh::new();

        let corners = bounding_triangle(&self.points, &self.params);
        let seed = corners.map(|corner| mesh.add_vertex(corner));
        let data = mesh.make_triangle(seed[0], seed[1], seed[2])?;
        mesh.add_triangle(data);
        self.state = TriangulationState::Seeded;
        debug!(reach = corners[1].x, points = self.points.len(), "seeded bounding triangle");

        for (index, &point) in self.points.iter().enumerate() {
            self.state = TriangulationState::Inserting(index);
            let vertex = mesh.add_vertex(point);
            let outcome = insert_vertex(&mut mesh, vertex)?;
            trace!(index, kind = ?outcome.kind, flips = outcome.flips, "inserted point");

            if self.params.validate_adjacency {
                mesh.validate_adjacency()?;
            }
        }

        self.state = TriangulationState::Cleanup;
        let mut purged = 0;
        for vertex in seed {
            purged += mesh.purge_using_vertex(vertex);
            mesh.remove_vertex(vertex);
        }
        debug!(purged, "removed triangles touching the bounding triangle");

        Ok(mesh)
    }

    /// Returns the mesh of the last successful run.
    #[must_use]
    pub fn mesh(&self) -> Option<&Mesh> {
        self.mesh.as_ref()
    }

    /// Returns the mesh of the last successful run for post-filtering.
    pub fn mesh_mut(&mut self) -> Option<&mut Mesh> {
        self.mesh.as_mut()
    }

    /// Consumes the triangulator, returning the mesh of the last successful run.
    #[must_use]
    pub fn into_mesh(self) -> Option<Mesh> {
        self.mesh
    }
}
