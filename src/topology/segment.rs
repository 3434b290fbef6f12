use std::hash::{Hash, Hasher};

use super::vertex::VertexId;

/// An unordered pair of vertices describing a mesh edge.
///
/// Equality and hashing ignore endpoint order, so `(a, b)` and `(b, a)` are
/// the same segment. The stored order is kept for callers that build
/// triangles from `a()` and `b()`.
#[derive(Debug, Clone, Copy, Eq)]
pub struct Segment {
    a: VertexId,
    b: VertexId,
}

impl Segment {
    /// Creates a segment between two vertices.
    #[must_use]
    pub fn new(a: VertexId, b: VertexId) -> Self {
        Self { a, b }
    }

    #[must_use]
    pub fn a(&self) -> VertexId {
        self.a
    }

    #[must_use]
    pub fn b(&self) -> VertexId {
        self.b
    }

    /// Returns `true` if `vertex` is one of the endpoints.
    #[must_use]
    pub fn contains(&self, vertex: VertexId) -> bool {
        self.a == vertex || self.b == vertex
    }

    /// Returns the opposite endpoint, or `None` if `vertex` is not on the segment.
    #[must_use]
    pub fn other(&self, vertex: VertexId) -> Option<VertexId> {
        if vertex == self.a {
            Some(self.b)
        } else if vertex == self.b {
            Some(self.a)
        } else {
            None
        }
    }

    fn ordered(&self) -> (VertexId, VertexId) {
        if self.a <= self.b {
            (self.a, self.b)
        } else {
            (self.b, self.a)
        }
    }
}

impl PartialEq for Segment {
    fn eq(&self, other: &Self) -> bool {
        self.ordered() == other.ordered()
    }
}

impl Hash for Segment {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.ordered().hash(state);
    }
}
