mod trim_long_edges;

pub use trim_long_edges::TrimLongEdges;
