//! Core mesh data structures.
//!
//! This module provides the face-vertex mesh storage and the type-safe ids
//! used to address its elements.
//!
//! # Index Types
//!
//! Mesh elements are identified by type-safe index wrappers:
//! - [`VertexId`] - Identifies a vertex
//! - [`EdgeId`] - Identifies an undirected edge
//! - [`FaceId`] - Identifies a face
//!
//! These indices are generic over the underlying integer type ([`MeshIndex`] trait),
//! allowing you to choose `u16`, `u32`, or `u64` based on mesh size.
//! [`Primitive`] tags an id with its category.
//!
//! # Storage
//!
//! ```
//! use meshring::mesh::MeshStore;
//! use nalgebra::Point3;
//!
//! let vertices = vec![
//!     Point3::new(0.0, 0.0, 0.0),
//!     Point3::new(1.0, 0.0, 0.0),
//!     Point3::new(0.5, 1.0, 0.0),
//! ];
//! let store = MeshStore::new(vertices, vec![[0, 1, 2]]);
//! assert!(store.face_normal(0).z > 0.0);
//! ```

mod index;
mod primitive;
mod store;

pub use index::{EdgeId, FaceId, MeshIndex, VertexId};
pub use primitive::{Primitive, PrimitiveKind};
pub use store::{MeshStore, MAX_FACE_GAP};
