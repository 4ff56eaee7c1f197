//! N-ring neighborhood queries.
//!
//! Breadth-first traversals over an [`AdjacencyIndex`] that label every
//! primitive reachable from a seed within `ring_limit` hops with its hop
//! distance. Four adjacency relations are supported:
//!
//! - [`find_neighbor_vertices`]: vertices sharing an edge
//! - [`find_neighbor_edges`]: edges sharing an endpoint
//! - [`find_edge_adjacent_faces`]: faces sharing an edge
//! - [`find_vertex_adjacent_faces`]: faces sharing a vertex
//!
//! The seed is at distance 0. A primitive's neighbors are labeled and
//! enqueued only while its own distance is below `ring_limit`, so no result
//! contains a distance greater than `ring_limit`. Each search keeps its own
//! visited set and never touches selection state.
//!
//! # Example
//!
//! ```
//! use meshring::prelude::*;
//! use meshring::algo::neighborhood::find_neighbor_vertices;
//!
//! let index: AdjacencyIndex = AdjacencyIndex::from_triangles(4, &[[0, 1, 3], [1, 2, 3]]).unwrap();
//! let ring = find_neighbor_vertices(&index, VertexId::new(0), 1).unwrap();
//!
//! assert_eq!(ring.distance(VertexId::new(0)), Some(0));
//! assert_eq!(ring.distance(VertexId::new(1)), Some(1));
//! assert_eq!(ring.distance(VertexId::new(3)), Some(1));
//! assert_eq!(ring.distance(VertexId::new(2)), None);
//! ```

use std::collections::{HashMap, HashSet, VecDeque};
use std::hash::Hash;

use crate::error::Result;
use crate::mesh::{EdgeId, FaceId, MeshIndex, Primitive, PrimitiveKind, VertexId};
use crate::topology::AdjacencyIndex;

/// Which faces count as neighbors of a face.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FaceAdjacency {
    /// Faces sharing an edge.
    EdgeAdjacent,
    /// Faces sharing at least one vertex.
    #[default]
    VertexAdjacent,
}

/// Primitives reached by a ring search, with their hop distances.
///
/// Entries are kept in discovery order, so distances never decrease when
/// iterating.
#[derive(Debug, Clone)]
pub struct RingNeighborhood<T> {
    entries: Vec<(T, usize)>,
    distances: HashMap<T, usize>,
}

impl<T: Copy + Eq + Hash> RingNeighborhood<T> {
    fn from_entries(entries: Vec<(T, usize)>) -> Self {
        let distances = entries.iter().copied().collect();
        Self { entries, distances }
    }

    /// The seed the search started from.
    ///
    /// # Panics
    /// Never panics for results returned by the search functions, which
    /// always contain their seed.
    pub fn seed(&self) -> T {
        self.entries[0].0
    }

    /// Hop distance of `id`, or `None` if it was not reached.
    #[inline]
    pub fn distance(&self, id: T) -> Option<usize> {
        self.distances.get(&id).copied()
    }

    /// Check if `id` was reached.
    #[inline]
    pub fn contains(&self, id: T) -> bool {
        self.distances.contains_key(&id)
    }

    /// Number of primitives reached, including the seed.
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if nothing was reached.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over `(id, distance)` pairs in discovery order.
    pub fn iter(&self) -> impl Iterator<Item = (T, usize)> + '_ {
        self.entries.iter().copied()
    }

    /// Iterate over reached ids in discovery order.
    pub fn ids(&self) -> impl Iterator<Item = T> + '_ {
        self.entries.iter().map(|&(id, _)| id)
    }

    /// Iterate over the ids at exactly `distance` hops.
    pub fn ring(&self, distance: usize) -> impl Iterator<Item = T> + '_ {
        self.entries
            .iter()
            .filter(move |&&(_, d)| d == distance)
            .map(|&(id, _)| id)
    }

    /// Largest distance reached.
    pub fn max_distance(&self) -> Option<usize> {
        self.entries.last().map(|&(_, d)| d)
    }

    /// Id-to-distance map of the result.
    pub fn as_map(&self) -> &HashMap<T, usize> {
        &self.distances
    }

    /// Convert every id with `f`, keeping distances and order.
    pub fn map<U: Copy + Eq + Hash>(self, f: impl Fn(T) -> U) -> RingNeighborhood<U> {
        RingNeighborhood::from_entries(self.entries.into_iter().map(|(id, d)| (f(id), d)).collect())
    }
}

/// Breadth-first search shared by all queries.
///
/// `neighbors(x)` yields the raw ids adjacent to raw id `x`; it may yield
/// already visited ids, including `x` itself.
fn breadth_first<T, N, It>(seed: usize, ring_limit: usize, mut neighbors: N) -> RingNeighborhood<T>
where
    T: From<usize> + Copy + Eq + Hash,
    N: FnMut(usize) -> It,
    It: IntoIterator<Item = usize>,
{
    let mut visited: HashSet<usize> = HashSet::new();
    let mut entries: Vec<(T, usize)> = Vec::new();
    let mut queue: VecDeque<(usize, usize)> = VecDeque::new();

    visited.insert(seed);
    entries.push((T::from(seed), 0));
    queue.push_back((seed, 0));

    while let Some((current, distance)) = queue.pop_front() {
        // Parent check: only primitives inside the ring expand
        if distance >= ring_limit {
            continue;
        }

        for next in neighbors(current) {
            if !visited.insert(next) {
                continue;
            }
            entries.push((T::from(next), distance + 1));
            queue.push_back((next, distance + 1));
        }
    }

    RingNeighborhood::from_entries(entries)
}

/// Find all vertices within `ring_limit` edge hops of `seed`.
///
/// # Errors
/// [`MeshError::SeedOutOfRange`](crate::error::MeshError::SeedOutOfRange)
/// if `seed` is not a vertex of the index.
pub fn find_neighbor_vertices<I: MeshIndex>(
    index: &AdjacencyIndex<I>,
    seed: VertexId<I>,
    ring_limit: usize,
) -> Result<RingNeighborhood<VertexId<I>>> {
    index.check_seed(PrimitiveKind::Vertex, seed.index())?;

    Ok(breadth_first(seed.index(), ring_limit, move |v| {
        index
            .vertex_edges(VertexId::new(v))
            .iter()
            .flat_map(move |&e| index.edge(e).vertices())
            .map(|w| w.index())
    }))
}

/// Find all edges within `ring_limit` hops of `seed`, where two edges are
/// adjacent if they share an endpoint.
///
/// # Errors
/// [`MeshError::SeedOutOfRange`](crate::error::MeshError::SeedOutOfRange)
/// if `seed` is not an edge of the index.
pub fn find_neighbor_edges<I: MeshIndex>(
    index: &AdjacencyIndex<I>,
    seed: EdgeId<I>,
    ring_limit: usize,
) -> Result<RingNeighborhood<EdgeId<I>>> {
    index.check_seed(PrimitiveKind::Edge, seed.index())?;

    Ok(breadth_first(seed.index(), ring_limit, move |e| {
        index
            .edge(EdgeId::new(e))
            .vertices()
            .into_iter()
            .flat_map(move |v| index.vertex_edges(v).iter().map(|a| a.index()))
    }))
}

/// Find all faces within `ring_limit` hops of `seed`, where two faces are
/// adjacent if they share an edge. Boundary edges contribute no neighbor.
///
/// # Errors
/// [`MeshError::SeedOutOfRange`](crate::error::MeshError::SeedOutOfRange)
/// if `seed` is not a face of the index.
pub fn find_edge_adjacent_faces<I: MeshIndex>(
    index: &AdjacencyIndex<I>,
    seed: FaceId<I>,
    ring_limit: usize,
) -> Result<RingNeighborhood<FaceId<I>>> {
    index.check_seed(PrimitiveKind::Face, seed.index())?;

    Ok(breadth_first(seed.index(), ring_limit, move |f| {
        index
            .edge_adjacent_faces(FaceId::new(f))
            .into_iter()
            .flatten()
            .map(|a| a.index())
    }))
}

/// Find all faces within `ring_limit` hops of `seed`, where two faces are
/// adjacent if they share at least one vertex.
///
/// # Errors
/// [`MeshError::SeedOutOfRange`](crate::error::MeshError::SeedOutOfRange)
/// if `seed` is not a face of the index.
pub fn find_vertex_adjacent_faces<I: MeshIndex>(
    index: &AdjacencyIndex<I>,
    seed: FaceId<I>,
    ring_limit: usize,
) -> Result<RingNeighborhood<FaceId<I>>> {
    index.check_seed(PrimitiveKind::Face, seed.index())?;

    Ok(breadth_first(seed.index(), ring_limit, move |f| {
        index
            .face_vertices(FaceId::new(f))
            .into_iter()
            .flat_map(move |v| index.vertex_faces(v).iter().map(|a| a.index()))
    }))
}

/// Find neighboring faces of `seed` under the given adjacency relation.
pub fn find_neighbor_faces<I: MeshIndex>(
    index: &AdjacencyIndex<I>,
    seed: FaceId<I>,
    ring_limit: usize,
    adjacency: FaceAdjacency,
) -> Result<RingNeighborhood<FaceId<I>>> {
    match adjacency {
        FaceAdjacency::EdgeAdjacent => find_edge_adjacent_faces(index, seed, ring_limit),
        FaceAdjacency::VertexAdjacent => find_vertex_adjacent_faces(index, seed, ring_limit),
    }
}

/// Run the query matching the category of `seed`.
///
/// `face_adjacency` is only consulted for face seeds.
pub fn find_neighbors<I: MeshIndex>(
    index: &AdjacencyIndex<I>,
    seed: Primitive<I>,
    ring_limit: usize,
    face_adjacency: FaceAdjacency,
) -> Result<RingNeighborhood<Primitive<I>>> {
    Ok(match seed {
        Primitive::Vertex(v) => find_neighbor_vertices(index, v, ring_limit)?.map(Primitive::Vertex),
        Primitive::Edge(e) => find_neighbor_edges(index, e, ring_limit)?.map(Primitive::Edge),
        Primitive::Face(f) => {
            find_neighbor_faces(index, f, ring_limit, face_adjacency)?.map(Primitive::Face)
        }
    })
}
