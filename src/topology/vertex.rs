slotmap::new_key_type! {
    /// Unique identifier for a vertex in the mesh.
    ///
    /// Vertices are identified by handle, not by position: two equal
    /// coordinates added separately are distinct vertices.
    pub struct VertexId;
}
