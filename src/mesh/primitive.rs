//! Tagged primitive ids.
//!
//! A pick result or a selection seed names a vertex, an edge, or a face.
//! [`Primitive`] carries the category together with the id so that an id is
//! never interpreted in the wrong id space.

use std::fmt;

use super::index::{EdgeId, FaceId, MeshIndex, VertexId};

/// Category of a mesh primitive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PrimitiveKind {
    /// A vertex.
    Vertex,
    /// An undirected edge.
    Edge,
    /// A triangular face.
    Face,
}

impl fmt::Display for PrimitiveKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            PrimitiveKind::Vertex => "vertex",
            PrimitiveKind::Edge => "edge",
            PrimitiveKind::Face => "face",
        })
    }
}

/// A vertex, edge, or face id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Primitive<I: MeshIndex = u32> {
    /// A vertex id.
    Vertex(VertexId<I>),
    /// An undirected edge id.
    Edge(EdgeId<I>),
    /// A face id.
    Face(FaceId<I>),
}

impl<I: MeshIndex> Primitive<I> {
    /// Build a primitive from a category and a raw id.
    ///
    /// # Panics
    /// Panics if `index` does not fit the index type. Use
    /// [`try_new`](Self::try_new) or
    /// [`AdjacencyIndex::primitive`](crate::topology::AdjacencyIndex::primitive)
    /// for untrusted ids.
    pub fn new(kind: PrimitiveKind, index: usize) -> Self {
        match kind {
            PrimitiveKind::Vertex => Primitive::Vertex(VertexId::new(index)),
            PrimitiveKind::Edge => Primitive::Edge(EdgeId::new(index)),
            PrimitiveKind::Face => Primitive::Face(FaceId::new(index)),
        }
    }

    /// Build a primitive, or `None` if `index` does not fit the index type.
    pub fn try_new(kind: PrimitiveKind, index: usize) -> Option<Self> {
        Some(match kind {
            PrimitiveKind::Vertex => Primitive::Vertex(VertexId::try_new(index)?),
            PrimitiveKind::Edge => Primitive::Edge(EdgeId::try_new(index)?),
            PrimitiveKind::Face => Primitive::Face(FaceId::try_new(index)?),
        })
    }

    /// The category of this primitive.
    #[inline]
    pub fn kind(self) -> PrimitiveKind {
        match self {
            Primitive::Vertex(_) => PrimitiveKind::Vertex,
            Primitive::Edge(_) => PrimitiveKind::Edge,
            Primitive::Face(_) => PrimitiveKind::Face,
        }
    }

    /// The raw id within its category.
    #[inline]
    pub fn index(self) -> usize {
        match self {
            Primitive::Vertex(v) => v.index(),
            Primitive::Edge(e) => e.index(),
            Primitive::Face(f) => f.index(),
        }
    }
}

impl<I: MeshIndex> From<VertexId<I>> for Primitive<I> {
    fn from(v: VertexId<I>) -> Self {
        Primitive::Vertex(v)
    }
}

impl<I: MeshIndex> From<EdgeId<I>> for Primitive<I> {
    fn from(e: EdgeId<I>) -> Self {
        Primitive::Edge(e)
    }
}

impl<I: MeshIndex> From<FaceId<I>> for Primitive<I> {
    fn from(f: FaceId<I>) -> Self {
        Primitive::Face(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_and_index() {
        let p: Primitive = Primitive::new(PrimitiveKind::Edge, 4);
        assert_eq!(p, Primitive::Edge(EdgeId::new(4)));
        assert_eq!(p.kind(), PrimitiveKind::Edge);
        assert_eq!(p.index(), 4);

        let f: Primitive = FaceId::new(2).into();
        assert_eq!(f.kind(), PrimitiveKind::Face);
        assert_ne!(f, Primitive::Vertex(VertexId::new(2)));
    }

    #[test]
    fn test_try_new_rejects_oversized_ids() {
        assert_eq!(
            Primitive::<u16>::try_new(PrimitiveKind::Face, 3),
            Some(Primitive::Face(FaceId::new(3)))
        );
        assert_eq!(Primitive::<u16>::try_new(PrimitiveKind::Face, 65_537), None);
        assert_eq!(Primitive::<u16>::try_new(PrimitiveKind::Vertex, 1 << 20), None);
    }

    #[test]
    fn test_kind_display() {
        assert_eq!(PrimitiveKind::Vertex.to_string(), "vertex");
        assert_eq!(PrimitiveKind::Face.to_string(), "face");
    }
}
