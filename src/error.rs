use thiserror::Error;

/// Top-level error type for the triangulation engine.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum TinError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Topology(#[from] TopologyError),

    #[error(transparent)]
    Operation(#[from] OperationError),
}

/// Errors related to geometric computations.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum GeometryError {
    #[error("target elevation {target} is outside the segment's elevation range [{low}, {high}]")]
    UndefinedElevationInterpolation { target: f64, low: f64, high: f64 },
}

/// Errors related to the mesh arena and triangle adjacency.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum TopologyError {
    #[error("entity not found: {0}")]
    EntityNotFound(String),

    #[error("segment is not an edge of the triangle: {0}")]
    NotAnEdge(String),

    #[error("invalid topology: {0}")]
    InvalidTopology(String),

    /// The point fell on an edge that has only one adjacent triangle.
    #[error("point ({x}, {y}) lies on a mesh boundary edge with a single adjacent triangle")]
    DegenerateBoundaryInsertion { x: f64, y: f64 },
}

/// Errors related to triangulation operations.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum OperationError {
    #[error("not enough points: need at least 3, got {found}")]
    NotEnoughPoints { found: usize },

    #[error("invalid permutation: {0}")]
    InvalidPermutation(String),
}

/// Convenience type alias for results using [`TinError`].
pub type Result<T> = std::result::Result<T, TinError>;
