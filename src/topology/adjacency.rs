//! Vertex/edge/face adjacency index for triangle meshes.
//!
//! The index is derived once from a face-vertex list and is immutable
//! afterwards. It stores:
//!
//! - a **directed edge map**: for each vertex `i`, the faces owning the
//!   directed edges `(i, j)` leaving it, keyed by `j`
//! - a deduplicated list of **undirected edges** `(start, end)` with
//!   `start < end`, each flagged as boundary or interior
//! - per-vertex incident edge and face lists
//!
//! # Directed edge convention
//!
//! For face `f = [v0, v1, v2]` (counter-clockwise) and each corner `k`, the
//! directed edge `(v[k+1], v[k])` is recorded as owned by `f`. Walking
//! `v[k+1] -> v[k]` keeps `f` on the right, so looking up `(v[k], v[k+1])`
//! answers "which face lies across this edge of `f`".

use std::collections::BTreeMap;

use crate::error::{MeshError, Result};
use crate::mesh::{EdgeId, FaceId, MeshIndex, MeshStore, Primitive, PrimitiveKind, VertexId};

/// An undirected edge with `start < end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UndirectedEdge<I: MeshIndex = u32> {
    /// The lower-indexed endpoint.
    pub start: VertexId<I>,
    /// The higher-indexed endpoint.
    pub end: VertexId<I>,
    /// True if only one face owns this edge.
    pub boundary: bool,
}

impl<I: MeshIndex> UndirectedEdge<I> {
    /// Both endpoints, lower index first.
    #[inline]
    pub fn vertices(&self) -> [VertexId<I>; 2] {
        [self.start, self.end]
    }

    /// Check if this edge lies on the mesh boundary.
    #[inline]
    pub fn is_boundary(&self) -> bool {
        self.boundary
    }

    /// Check if `v` is an endpoint of this edge.
    #[inline]
    pub fn contains(&self, v: VertexId<I>) -> bool {
        self.start == v || self.end == v
    }

    /// The endpoint opposite `v`, or `None` if `v` is not on this edge.
    pub fn opposite(&self, v: VertexId<I>) -> Option<VertexId<I>> {
        if v == self.start {
            Some(self.end)
        } else if v == self.end {
            Some(self.start)
        } else {
            None
        }
    }
}

/// A directed edge claimed by more than one face while building the index.
///
/// The later face replaces the earlier one in the directed edge map, so
/// edge-adjacent face queries across this edge see only `replacement`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NonManifoldOverwrite<I: MeshIndex = u32> {
    /// Key vertex of the directed edge.
    pub from: VertexId<I>,
    /// Target vertex of the directed edge.
    pub to: VertexId<I>,
    /// The face that owned the edge before.
    pub previous: FaceId<I>,
    /// The face that owns the edge now.
    pub replacement: FaceId<I>,
}

/// Immutable adjacency index over a triangle mesh.
#[derive(Debug, Clone)]
pub struct AdjacencyIndex<I: MeshIndex = u32> {
    /// Vertex ids of each face, counter-clockwise.
    faces: Vec<[VertexId<I>; 3]>,

    /// `directed[i][j]` is the face owning directed edge `(i, j)`.
    directed: Vec<BTreeMap<usize, FaceId<I>>>,

    /// Undirected edges in discovery order.
    edges: Vec<UndirectedEdge<I>>,

    /// Edges incident to each vertex.
    vertex_edges: Vec<Vec<EdgeId<I>>>,

    /// Faces incident to each vertex.
    vertex_faces: Vec<Vec<FaceId<I>>>,

    /// Directed edges that were claimed twice.
    overwrites: Vec<NonManifoldOverwrite<I>>,

    /// Total number of directed edge insertions (always `3 * F`).
    directed_insertions: usize,
}

/// Every id of a category must fit below the `INVALID` sentinel of `I`.
fn check_capacity<I: MeshIndex>(name: &'static str, count: usize) -> Result<()> {
    if count > I::MAX.to_usize() {
        return Err(MeshError::invalid_param(
            name,
            count,
            "too many elements for the mesh index type",
        ));
    }
    Ok(())
}

impl<I: MeshIndex> AdjacencyIndex<I> {
    /// Build the index from a mesh store.
    ///
    /// See [`AdjacencyIndex::from_triangles`].
    pub fn build(store: &MeshStore) -> Result<Self> {
        Self::from_triangles(store.num_vertices(), store.faces())
    }

    /// Build the index from a vertex count and counter-clockwise triangles.
    ///
    /// # Errors
    ///
    /// - [`MeshError::VertexOutOfRange`] if a face references a vertex `>= num_vertices`
    /// - [`MeshError::DegenerateFace`] if a face repeats a vertex
    /// - [`MeshError::InvalidParameter`] if the vertex, face, or edge count
    ///   does not fit the index type `I`
    ///
    /// A directed edge claimed by two faces is not an error: the later face
    /// wins and the occurrence is logged and recorded in
    /// [`non_manifold_overwrites`](Self::non_manifold_overwrites).
    ///
    /// # Example
    /// ```
    /// use meshring::topology::AdjacencyIndex;
    ///
    /// // Unit square split along the diagonal (1, 3)
    /// let index: AdjacencyIndex = AdjacencyIndex::from_triangles(4, &[[0, 1, 3], [1, 2, 3]]).unwrap();
    ///
    /// assert_eq!(index.num_edges(), 5);
    /// assert_eq!(index.num_boundary_edges(), 4);
    /// ```
    pub fn from_triangles(num_vertices: usize, faces: &[[usize; 3]]) -> Result<Self> {
        check_capacity::<I>("vertices", num_vertices)?;
        check_capacity::<I>("faces", faces.len())?;

        for (fi, face) in faces.iter().enumerate() {
            for &vi in face {
                if vi >= num_vertices {
                    return Err(MeshError::VertexOutOfRange {
                        face: fi,
                        vertex: vi,
                        num_vertices,
                    });
                }
            }
            if face[0] == face[1] || face[1] == face[2] || face[0] == face[2] {
                return Err(MeshError::DegenerateFace { face: fi });
            }
        }

        let mut directed: Vec<BTreeMap<usize, FaceId<I>>> = vec![BTreeMap::new(); num_vertices];
        let mut vertex_faces: Vec<Vec<FaceId<I>>> = vec![Vec::new(); num_vertices];
        let mut overwrites = Vec::new();
        let mut directed_insertions = 0;

        // First pass: directed edges, keyed by the successor corner
        for (fi, face) in faces.iter().enumerate() {
            let face_id = FaceId::new(fi);
            for k in 0..3 {
                let from = face[(k + 1) % 3];
                let to = face[k];
                directed_insertions += 1;

                if let Some(previous) = directed[from].insert(to, face_id) {
                    log::warn!(
                        "directed edge ({}, {}) claimed by face {} and face {}; keeping face {}",
                        from,
                        to,
                        previous.index(),
                        fi,
                        fi
                    );
                    overwrites.push(NonManifoldOverwrite {
                        from: VertexId::new(from),
                        to: VertexId::new(to),
                        previous,
                        replacement: face_id,
                    });
                }
            }

            for &v in face {
                vertex_faces[v].push(face_id);
            }
        }

        // Second pass: emit each undirected edge exactly once
        let mut edges: Vec<UndirectedEdge<I>> = Vec::with_capacity(faces.len() * 3 / 2 + 1);
        let mut vertex_edges: Vec<Vec<EdgeId<I>>> = vec![Vec::new(); num_vertices];

        for i in 0..num_vertices {
            for &j in directed[i].keys() {
                let has_reverse = directed[j].contains_key(&i);

                let (start, end) = if i < j {
                    (i, j)
                } else if has_reverse {
                    // Emitted from the lower-indexed side
                    continue;
                } else {
                    (j, i)
                };

                check_capacity::<I>("edges", edges.len() + 1)?;
                let edge_id = EdgeId::new(edges.len());
                edges.push(UndirectedEdge {
                    start: VertexId::new(start),
                    end: VertexId::new(end),
                    boundary: !has_reverse,
                });
                vertex_edges[start].push(edge_id);
                vertex_edges[end].push(edge_id);
            }
        }

        let index = Self {
            faces: faces
                .iter()
                .map(|f| [VertexId::new(f[0]), VertexId::new(f[1]), VertexId::new(f[2])])
                .collect(),
            directed,
            edges,
            vertex_edges,
            vertex_faces,
            overwrites,
            directed_insertions,
        };

        log::debug!(
            "adjacency index: {} vertices, {} faces, {} undirected edges ({} boundary)",
            index.num_vertices(),
            index.num_faces(),
            index.num_edges(),
            index.num_boundary_edges()
        );

        Ok(index)
    }

    // ==================== Counts ====================

    /// Get the number of vertices.
    #[inline]
    pub fn num_vertices(&self) -> usize {
        self.vertex_edges.len()
    }

    /// Get the number of faces.
    #[inline]
    pub fn num_faces(&self) -> usize {
        self.faces.len()
    }

    /// Get the number of undirected edges.
    #[inline]
    pub fn num_edges(&self) -> usize {
        self.edges.len()
    }

    /// Number of primitives of the given category.
    #[inline]
    pub fn count(&self, kind: PrimitiveKind) -> usize {
        match kind {
            PrimitiveKind::Vertex => self.num_vertices(),
            PrimitiveKind::Edge => self.num_edges(),
            PrimitiveKind::Face => self.num_faces(),
        }
    }

    /// Fail with [`MeshError::SeedOutOfRange`] unless `index` names an
    /// existing primitive of category `kind`.
    pub fn check_seed(&self, kind: PrimitiveKind, index: usize) -> Result<()> {
        let count = self.count(kind);
        if index < count {
            Ok(())
        } else {
            Err(MeshError::SeedOutOfRange { kind, index, count })
        }
    }

    /// Turn a raw id into a primitive of category `kind`, checked against
    /// this index.
    ///
    /// Use this for ids from outside the crate (user input, picking).
    pub fn primitive(&self, kind: PrimitiveKind, index: usize) -> Result<Primitive<I>> {
        self.check_seed(kind, index)?;
        Primitive::try_new(kind, index).ok_or(MeshError::SeedOutOfRange {
            kind,
            index,
            count: self.count(kind),
        })
    }

    /// Number of distinct directed edges in the directed edge map.
    pub fn num_directed_edges(&self) -> usize {
        self.directed.iter().map(BTreeMap::len).sum()
    }

    /// Number of directed edge insertions performed while building, `3 * F`.
    ///
    /// Differs from [`num_directed_edges`](Self::num_directed_edges) by the
    /// number of non-manifold overwrites.
    #[inline]
    pub fn directed_insertions(&self) -> usize {
        self.directed_insertions
    }

    /// Number of boundary edges.
    pub fn num_boundary_edges(&self) -> usize {
        self.edges.iter().filter(|e| e.boundary).count()
    }

    /// Check if the mesh has no boundary edges.
    pub fn is_closed(&self) -> bool {
        self.edges.iter().all(|e| !e.boundary)
    }

    /// Check if no directed edge was claimed by more than one face.
    #[inline]
    pub fn is_manifold(&self) -> bool {
        self.overwrites.is_empty()
    }

    /// Directed edges that were claimed by more than one face.
    #[inline]
    pub fn non_manifold_overwrites(&self) -> &[NonManifoldOverwrite<I>] {
        &self.overwrites
    }

    /// Euler characteristic `V - E + F`.
    pub fn euler_characteristic(&self) -> i64 {
        self.num_vertices() as i64 - self.num_edges() as i64 + self.num_faces() as i64
    }

    // ==================== Element Access ====================

    /// Get an undirected edge by ID.
    #[inline]
    pub fn edge(&self, e: EdgeId<I>) -> &UndirectedEdge<I> {
        &self.edges[e.index()]
    }

    /// All undirected edges in id order.
    #[inline]
    pub fn edges(&self) -> &[UndirectedEdge<I>] {
        &self.edges
    }

    /// Vertex ids of a face, counter-clockwise.
    #[inline]
    pub fn face_vertices(&self, f: FaceId<I>) -> [VertexId<I>; 3] {
        self.faces[f.index()]
    }

    /// Iterate over all vertex IDs.
    pub fn vertex_ids(&self) -> impl Iterator<Item = VertexId<I>> + '_ {
        (0..self.num_vertices()).map(VertexId::new)
    }

    /// Iterate over all edge IDs.
    pub fn edge_ids(&self) -> impl Iterator<Item = EdgeId<I>> + '_ {
        (0..self.num_edges()).map(EdgeId::new)
    }

    /// Iterate over all face IDs.
    pub fn face_ids(&self) -> impl Iterator<Item = FaceId<I>> + '_ {
        (0..self.num_faces()).map(FaceId::new)
    }

    /// Iterate over the IDs of boundary edges.
    pub fn boundary_edges(&self) -> impl Iterator<Item = EdgeId<I>> + '_ {
        self.edges
            .iter()
            .enumerate()
            .filter(|(_, e)| e.boundary)
            .map(|(i, _)| EdgeId::new(i))
    }

    // ==================== Topology Queries ====================

    /// Edges incident to vertex `v`, in discovery order.
    #[inline]
    pub fn vertex_edges(&self, v: VertexId<I>) -> &[EdgeId<I>] {
        &self.vertex_edges[v.index()]
    }

    /// Faces incident to vertex `v`, in face order.
    #[inline]
    pub fn vertex_faces(&self, v: VertexId<I>) -> &[FaceId<I>] {
        &self.vertex_faces[v.index()]
    }

    /// Vertices sharing an edge with `v`.
    pub fn vertex_neighbors(&self, v: VertexId<I>) -> impl Iterator<Item = VertexId<I>> + '_ {
        self.vertex_edges(v)
            .iter()
            .filter_map(move |&e| self.edge(e).opposite(v))
    }

    /// Number of edges incident to `v`.
    #[inline]
    pub fn valence(&self, v: VertexId<I>) -> usize {
        self.vertex_edges[v.index()].len()
    }

    /// The face owning directed edge `(from, to)` in the directed edge map.
    ///
    /// Returns `None` if no face claimed it.
    pub fn directed_edge_face(&self, from: VertexId<I>, to: VertexId<I>) -> Option<FaceId<I>> {
        self.directed
            .get(from.index())
            .and_then(|m| m.get(&to.index()))
            .copied()
    }

    /// The face across the `k`-th edge `(v[k], v[k+1])` of face `f`.
    ///
    /// Returns `None` on a boundary edge.
    ///
    /// # Panics
    /// Panics if `k >= 3`.
    pub fn edge_adjacent_face(&self, f: FaceId<I>, k: usize) -> Option<FaceId<I>> {
        assert!(k < 3, "triangle edge index {} out of range", k);
        let v = self.face_vertices(f);
        self.directed_edge_face(v[k], v[(k + 1) % 3])
    }

    /// Faces across the three edges of `f`, in corner order.
    pub fn edge_adjacent_faces(&self, f: FaceId<I>) -> [Option<FaceId<I>>; 3] {
        [
            self.edge_adjacent_face(f, 0),
            self.edge_adjacent_face(f, 1),
            self.edge_adjacent_face(f, 2),
        ]
    }

    /// Find the undirected edge between `a` and `b`.
    pub fn find_edge(&self, a: VertexId<I>, b: VertexId<I>) -> Option<EdgeId<I>> {
        self.vertex_edges
            .get(a.index())?
            .iter()
            .copied()
            .find(|&e| self.edge(e).opposite(a) == Some(b))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit_square() -> AdjacencyIndex {
        AdjacencyIndex::from_triangles(4, &[[0, 1, 3], [1, 2, 3]]).unwrap()
    }

    fn tetrahedron() -> AdjacencyIndex {
        AdjacencyIndex::from_triangles(4, &[[0, 2, 1], [0, 1, 3], [1, 2, 3], [2, 0, 3]]).unwrap()
    }

    fn grid_faces(n: usize) -> Vec<[usize; 3]> {
        let mut faces = Vec::new();
        for j in 0..n {
            for i in 0..n {
                let v00 = j * (n + 1) + i;
                let v10 = v00 + 1;
                let v01 = v00 + (n + 1);
                let v11 = v01 + 1;
                faces.push([v00, v10, v11]);
                faces.push([v00, v11, v01]);
            }
        }
        faces
    }

    fn edge_pair(index: &AdjacencyIndex, e: usize) -> (usize, usize) {
        let edge = index.edge(EdgeId::new(e));
        (edge.start.index(), edge.end.index())
    }

    #[test]
    fn test_unit_square_edges() {
        let index = unit_square();

        assert_eq!(index.num_vertices(), 4);
        assert_eq!(index.num_faces(), 2);
        assert_eq!(index.num_edges(), 5);

        let diagonal = index.find_edge(VertexId::new(1), VertexId::new(3)).unwrap();
        assert!(!index.edge(diagonal).is_boundary());

        let outer = [(0, 1), (1, 2), (2, 3), (0, 3)];
        for (a, b) in outer {
            let e = index.find_edge(VertexId::new(a), VertexId::new(b)).unwrap();
            assert!(index.edge(e).is_boundary(), "edge ({}, {}) should be boundary", a, b);
        }
        assert_eq!(index.num_boundary_edges(), 4);
        assert!(!index.is_closed());
    }

    #[test]
    fn test_edge_ids_in_discovery_order() {
        let index = unit_square();
        let pairs: Vec<_> = (0..index.num_edges()).map(|e| edge_pair(&index, e)).collect();
        assert_eq!(pairs, vec![(0, 3), (0, 1), (1, 3), (1, 2), (2, 3)]);
    }

    #[test]
    fn test_edges_are_canonical() {
        let index = tetrahedron();
        for e in index.edges() {
            assert!(e.start < e.end);
        }
    }

    #[test]
    fn test_closed_mesh_edge_count() {
        let index = tetrahedron();
        assert_eq!(index.num_edges(), 3 * index.num_faces() / 2);
        assert!(index.is_closed());
        assert_eq!(index.boundary_edges().count(), 0);
        assert_eq!(index.euler_characteristic(), 2);
    }

    #[test]
    fn test_directed_insertions() {
        for index in [unit_square(), tetrahedron()] {
            assert_eq!(index.directed_insertions(), 3 * index.num_faces());
            assert_eq!(index.num_directed_edges(), 3 * index.num_faces());
        }
    }

    #[test]
    fn test_boundary_edges_have_one_direction() {
        let index: AdjacencyIndex = AdjacencyIndex::from_triangles(16, &grid_faces(3)).unwrap();
        assert_eq!(index.num_edges(), 33);
        assert_eq!(index.num_boundary_edges(), 12);
        assert_eq!(index.euler_characteristic(), 1);

        for e in index.edges() {
            let forward = index.directed_edge_face(e.start, e.end);
            let backward = index.directed_edge_face(e.end, e.start);
            if e.is_boundary() {
                assert!(forward.is_none() || backward.is_none());
                assert!(forward.is_some() || backward.is_some());
            } else {
                assert!(forward.is_some() && backward.is_some());
            }
        }
    }

    #[test]
    fn test_every_edge_listed_at_both_endpoints() {
        let index = tetrahedron();
        for e in index.edge_ids() {
            let edge = *index.edge(e);
            assert!(index.vertex_edges(edge.start).contains(&e));
            assert!(index.vertex_edges(edge.end).contains(&e));
        }
        for v in index.vertex_ids() {
            assert_eq!(index.valence(v), 3);
            assert_eq!(index.vertex_faces(v).len(), 3);
        }
    }

    #[test]
    fn test_vertex_incidence() {
        let index = unit_square();
        assert_eq!(index.vertex_faces(VertexId::new(0)), &[FaceId::new(0)]);
        assert_eq!(
            index.vertex_faces(VertexId::new(1)),
            &[FaceId::new(0), FaceId::new(1)]
        );

        let mut neighbors: Vec<_> = index
            .vertex_neighbors(VertexId::new(1))
            .map(|v| v.index())
            .collect();
        neighbors.sort();
        assert_eq!(neighbors, vec![0, 2, 3]);
    }

    #[test]
    fn test_edge_adjacent_faces() {
        let index = unit_square();
        // Face 0 = [0, 1, 3]: edges (0,1), (1,3), (3,0)
        assert_eq!(
            index.edge_adjacent_faces(FaceId::new(0)),
            [None, Some(FaceId::new(1)), None]
        );
        // Face 1 = [1, 2, 3]: edges (1,2), (2,3), (3,1)
        assert_eq!(
            index.edge_adjacent_faces(FaceId::new(1)),
            [None, None, Some(FaceId::new(0))]
        );
    }

    #[test]
    fn test_non_manifold_overwrite_is_recorded() {
        // Face 2 duplicates face 0, so all three of its directed edges collide
        let index: AdjacencyIndex =
            AdjacencyIndex::from_triangles(4, &[[0, 1, 3], [1, 2, 3], [0, 1, 3]]).unwrap();

        assert!(!index.is_manifold());
        assert_eq!(index.non_manifold_overwrites().len(), 3);
        for o in index.non_manifold_overwrites() {
            assert_eq!(o.previous, FaceId::new(0));
            assert_eq!(o.replacement, FaceId::new(2));
        }

        // Last writer wins
        assert_eq!(index.edge_adjacent_face(FaceId::new(1), 2), Some(FaceId::new(2)));
        assert_eq!(index.directed_insertions(), 9);
        assert_eq!(index.num_directed_edges(), 6);
        assert_eq!(index.num_edges(), 5);

        // Duplicate faces are not deduplicated in vertex incidence
        assert_eq!(index.vertex_faces(VertexId::new(0)).len(), 2);
    }

    #[test]
    fn test_vertex_out_of_range() {
        let result: Result<AdjacencyIndex> = AdjacencyIndex::from_triangles(3, &[[0, 1, 3]]);
        assert!(matches!(
            result,
            Err(MeshError::VertexOutOfRange {
                face: 0,
                vertex: 3,
                num_vertices: 3
            })
        ));
    }

    #[test]
    fn test_degenerate_face() {
        let result: Result<AdjacencyIndex> = AdjacencyIndex::from_triangles(3, &[[0, 0, 2]]);
        assert!(matches!(result, Err(MeshError::DegenerateFace { face: 0 })));
    }

    #[test]
    fn test_empty_and_isolated() {
        let index: AdjacencyIndex = AdjacencyIndex::from_triangles(2, &[]).unwrap();
        assert_eq!(index.num_edges(), 0);
        assert_eq!(index.num_faces(), 0);
        assert!(index.vertex_edges(VertexId::new(1)).is_empty());
        assert!(index.is_closed());
    }

    #[test]
    fn test_check_seed() {
        let index = unit_square();
        assert!(index.check_seed(PrimitiveKind::Edge, 4).is_ok());
        assert!(matches!(
            index.check_seed(PrimitiveKind::Edge, 5),
            Err(MeshError::SeedOutOfRange {
                kind: PrimitiveKind::Edge,
                index: 5,
                count: 5
            })
        ));
    }

    #[test]
    fn test_small_index_type() {
        let index: AdjacencyIndex<u16> = AdjacencyIndex::from_triangles(4, &[[0, 1, 3], [1, 2, 3]]).unwrap();
        assert_eq!(index.num_edges(), 5);
        assert_eq!(index.count(PrimitiveKind::Face), 2);
    }

    #[test]
    fn test_small_index_type_overflow_rejected() {
        let too_many_vertices = AdjacencyIndex::<u16>::from_triangles(70_000, &[[0, 1, 2]]);
        assert!(matches!(
            too_many_vertices,
            Err(MeshError::InvalidParameter { name: "vertices", .. })
        ));

        let faces = vec![[0, 1, 2]; 65_535];
        let too_many_faces = AdjacencyIndex::<u16>::from_triangles(3, &faces);
        assert!(matches!(
            too_many_faces,
            Err(MeshError::InvalidParameter { name: "faces", .. })
        ));

        // 149 x 149 vertices and 43 808 faces fit, but the 66 008 edges do not
        let too_many_edges = AdjacencyIndex::<u16>::from_triangles(149 * 149, &grid_faces(148));
        assert!(matches!(
            too_many_edges,
            Err(MeshError::InvalidParameter { name: "edges", .. })
        ));

        let fits: AdjacencyIndex = AdjacencyIndex::from_triangles(149 * 149, &grid_faces(148)).unwrap();
        assert_eq!(fits.num_edges(), 66_008);
    }

    #[test]
    fn test_checked_primitive() {
        let index: AdjacencyIndex<u16> = AdjacencyIndex::from_triangles(4, &[[0, 1, 3], [1, 2, 3]]).unwrap();

        assert_eq!(
            index.primitive(PrimitiveKind::Edge, 4).unwrap(),
            Primitive::Edge(EdgeId::new(4))
        );
        // Would wrap to face 1 with an unchecked u16 conversion
        assert!(matches!(
            index.primitive(PrimitiveKind::Face, 65_537),
            Err(MeshError::SeedOutOfRange {
                kind: PrimitiveKind::Face,
                index: 65_537,
                count: 2
            })
        ));
    }

    #[test]
    fn test_build_from_store() {
        use nalgebra::Point3;

        let store = MeshStore::new(
            vec![
                Point3::new(0.0, 0.0, 0.0),
                Point3::new(1.0, 0.0, 0.0),
                Point3::new(0.5, 1.0, 0.0),
            ],
            vec![[0, 1, 2]],
        );
        let index: AdjacencyIndex = AdjacencyIndex::build(&store).unwrap();
        assert_eq!(index.num_edges(), 3);
        assert_eq!(index.num_boundary_edges(), 3);
    }
}
