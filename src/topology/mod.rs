//! Mesh topology derived from a face-vertex list.
//!
//! [`AdjacencyIndex`] answers the adjacency questions the neighborhood
//! queries need (edges around a vertex, faces around a vertex, the face
//! across an edge) and classifies every undirected edge as boundary or
//! interior.

mod adjacency;

pub use adjacency::{AdjacencyIndex, NonManifoldOverwrite, UndirectedEdge};
