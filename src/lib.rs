//! # Meshring
//!
//! Adjacency queries and n-ring neighborhood selection on triangle meshes.
//!
//! Meshring builds an immutable vertex, edge, and face adjacency index from a
//! plain face-vertex mesh and runs breadth-first "n-ring" searches seeded at a
//! picked vertex, edge, or face. The results are per-primitive hop distances
//! that a renderer can color-code.
//!
//! ## Features
//!
//! - **Undirected edge extraction**: one id per edge, with boundary flags
//! - **Type-safe indices**: vertex, edge, and face ids cannot be mixed up
//! - **Flexible indexing**: Support for 16-bit, 32-bit, and 64-bit indices
//! - **Ring searches**: vertex, edge, edge-adjacent face, and
//!   vertex-adjacent face neighborhoods
//! - **Selection state**: multi-seed selection with distance labels
//! - **File formats**: OFF
//!
//! ## Quick Start
//!
//! ```no_run
//! use meshring::prelude::*;
//!
//! let mut session: MeshSession = MeshSession::load("bunny.off").unwrap();
//! println!("Edges: {}", session.index().num_edges());
//!
//! session.select(&[Primitive::Face(FaceId::new(0))]).unwrap();
//! let colors = session.face_colors();
//! ```
//!
//! ## Building an Index
//!
//! ```
//! use meshring::prelude::*;
//!
//! // Closed tetrahedron
//! let faces = [[0, 2, 1], [0, 1, 3], [1, 2, 3], [2, 0, 3]];
//! let index: AdjacencyIndex = AdjacencyIndex::from_triangles(4, &faces).unwrap();
//!
//! assert_eq!(index.num_edges(), 6);
//! assert!(index.is_closed());
//! assert_eq!(index.euler_characteristic(), 2);
//! ```
//!
//! ## Ring Queries
//!
//! ```
//! use meshring::prelude::*;
//! use meshring::algo::neighborhood::find_neighbor_faces;
//!
//! let index: AdjacencyIndex = AdjacencyIndex::from_triangles(4, &[[0, 1, 3], [1, 2, 3]]).unwrap();
//!
//! let ring = find_neighbor_faces(&index, FaceId::new(0), 1, FaceAdjacency::EdgeAdjacent).unwrap();
//! assert_eq!(ring.distance(FaceId::new(1)), Some(1));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod algo;
pub mod error;
pub mod io;
pub mod mesh;
pub mod selection;
pub mod session;
pub mod topology;

/// Prelude module for convenient imports.
///
/// This module re-exports the most commonly used types:
///
/// ```
/// use meshring::prelude::*;
/// ```
pub mod prelude {
    pub use crate::algo::neighborhood::{FaceAdjacency, RingNeighborhood};
    pub use crate::error::{MeshError, Result};
    pub use crate::mesh::{EdgeId, FaceId, MeshIndex, MeshStore, Primitive, PrimitiveKind, VertexId};
    pub use crate::selection::{
        PickMode, SelectionConfig, SelectionController, SelectionLabels, SelectionPalette,
    };
    pub use crate::session::MeshSession;
    pub use crate::topology::{AdjacencyIndex, UndirectedEdge};
}

// Re-export nalgebra types for convenience
pub use nalgebra;

#[cfg(test)]
mod tests {
    use super::prelude::*;
    use nalgebra::Point3;

    #[test]
    fn test_tetrahedron_session() {
        let store = MeshStore::new(
            vec![
                Point3::new(0.0, 0.0, 0.0),
                Point3::new(1.0, 0.0, 0.0),
                Point3::new(0.5, 1.0, 0.0),
                Point3::new(0.5, 0.5, 1.0),
            ],
            vec![
                [0, 2, 1], // bottom
                [0, 1, 3], // front
                [1, 2, 3], // right
                [2, 0, 3], // left
            ],
        );

        let config = SelectionConfig::new()
            .with_pick_mode(PickMode::Face)
            .with_face_adjacency(FaceAdjacency::EdgeAdjacent)
            .with_ring_radius(1);
        let mut session: MeshSession = MeshSession::with_config(store, config).unwrap();

        assert!(session.index().is_closed());
        assert!(session.index().is_manifold());

        // Every face of a tetrahedron shares an edge with the other three
        session.select(&[Primitive::Face(FaceId::new(0))]).unwrap();
        assert_eq!(session.labels().raw_faces(), vec![0, 1, 1, 1]);

        // Every vertex is one hop from every other
        session.controller_mut().set_pick_mode(PickMode::Vertex);
        session.select(&[Primitive::Vertex(VertexId::new(3))]).unwrap();
        assert_eq!(session.labels().raw_vertices(), vec![1, 1, 1, 0]);
        assert_eq!(session.labels().raw_faces(), vec![-1, -1, -1, -1]);
    }
}
