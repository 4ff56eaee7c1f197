//! Mesh traversal algorithms.
//!
//! - **Neighborhoods**: N-ring breadth-first searches over vertices, edges,
//!   and faces
//!
//! Algorithms operate on a prebuilt [`AdjacencyIndex`](crate::topology::AdjacencyIndex)
//! and never mutate it.

pub mod neighborhood;
