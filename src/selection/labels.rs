//! Per-primitive distance labels.

use crate::mesh::{EdgeId, FaceId, MeshIndex, Primitive, PrimitiveKind, VertexId};
use crate::topology::AdjacencyIndex;

/// Ring distance from the current selection for every vertex, edge, and face.
///
/// `None` marks a primitive outside the selection. The renderer reads these
/// arrays after every selection call.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionLabels {
    vertices: Vec<Option<usize>>,
    edges: Vec<Option<usize>>,
    faces: Vec<Option<usize>>,
}

impl SelectionLabels {
    /// Create unlabeled arrays of the given sizes.
    pub fn new(num_vertices: usize, num_edges: usize, num_faces: usize) -> Self {
        Self {
            vertices: vec![None; num_vertices],
            edges: vec![None; num_edges],
            faces: vec![None; num_faces],
        }
    }

    /// Create unlabeled arrays sized for `index`.
    pub fn for_index<I: MeshIndex>(index: &AdjacencyIndex<I>) -> Self {
        Self::new(index.num_vertices(), index.num_edges(), index.num_faces())
    }

    /// Check if the array sizes match `index`.
    pub fn fits<I: MeshIndex>(&self, index: &AdjacencyIndex<I>) -> bool {
        self.vertices.len() == index.num_vertices()
            && self.edges.len() == index.num_edges()
            && self.faces.len() == index.num_faces()
    }

    /// Label of vertex `v`.
    #[inline]
    pub fn vertex<I: MeshIndex>(&self, v: VertexId<I>) -> Option<usize> {
        self.vertices.get(v.index()).copied().flatten()
    }

    /// Label of edge `e`.
    #[inline]
    pub fn edge<I: MeshIndex>(&self, e: EdgeId<I>) -> Option<usize> {
        self.edges.get(e.index()).copied().flatten()
    }

    /// Label of face `f`.
    #[inline]
    pub fn face<I: MeshIndex>(&self, f: FaceId<I>) -> Option<usize> {
        self.faces.get(f.index()).copied().flatten()
    }

    /// Label of any primitive.
    pub fn get<I: MeshIndex>(&self, p: Primitive<I>) -> Option<usize> {
        self.slot(p.kind()).get(p.index()).copied().flatten()
    }

    /// All labels of one category, indexed by raw id.
    pub fn labels(&self, kind: PrimitiveKind) -> &[Option<usize>] {
        self.slot(kind)
    }

    /// Lower the label of `p` to `distance` if it is unlabeled or farther.
    ///
    /// Returns `true` if `p` had no label before.
    ///
    /// # Panics
    /// Panics if `p` is out of range for these arrays.
    pub fn relax<I: MeshIndex>(&mut self, p: Primitive<I>, distance: usize) -> bool {
        let slot = &mut self.slot_mut(p.kind())[p.index()];
        match *slot {
            None => {
                *slot = Some(distance);
                true
            }
            Some(d) => {
                if distance < d {
                    *slot = Some(distance);
                }
                false
            }
        }
    }

    /// Remove the label of `p`. Out-of-range primitives are ignored.
    pub fn clear<I: MeshIndex>(&mut self, p: Primitive<I>) {
        if let Some(slot) = self.slot_mut(p.kind()).get_mut(p.index()) {
            *slot = None;
        }
    }

    /// Remove every label.
    pub fn reset(&mut self) {
        self.vertices.fill(None);
        self.edges.fill(None);
        self.faces.fill(None);
    }

    /// Number of labeled primitives over all categories.
    pub fn labeled_count(&self) -> usize {
        [&self.vertices, &self.edges, &self.faces]
            .into_iter()
            .map(|labels| labels.iter().filter(|l| l.is_some()).count())
            .sum()
    }

    /// Vertex labels as integers, `-1` for unlabeled.
    pub fn raw_vertices(&self) -> Vec<i32> {
        to_raw(&self.vertices)
    }

    /// Edge labels as integers, `-1` for unlabeled.
    pub fn raw_edges(&self) -> Vec<i32> {
        to_raw(&self.edges)
    }

    /// Face labels as integers, `-1` for unlabeled.
    pub fn raw_faces(&self) -> Vec<i32> {
        to_raw(&self.faces)
    }

    fn slot(&self, kind: PrimitiveKind) -> &[Option<usize>] {
        match kind {
            PrimitiveKind::Vertex => &self.vertices,
            PrimitiveKind::Edge => &self.edges,
            PrimitiveKind::Face => &self.faces,
        }
    }

    fn slot_mut(&mut self, kind: PrimitiveKind) -> &mut [Option<usize>] {
        match kind {
            PrimitiveKind::Vertex => &mut self.vertices,
            PrimitiveKind::Edge => &mut self.edges,
            PrimitiveKind::Face => &mut self.faces,
        }
    }
}

fn to_raw(labels: &[Option<usize>]) -> Vec<i32> {
    labels
        .iter()
        .map(|l| l.map_or(-1, |d| i32::try_from(d).unwrap_or(i32::MAX)))
        .collect()
}
