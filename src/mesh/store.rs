//! Vertex and triangle storage.
//!
//! [`MeshStore`] is the plain face-vertex representation a mesh loader hands
//! over: a position per vertex and three counter-clockwise vertex indices per
//! face. It performs no validation; topology is derived from it by
//! [`AdjacencyIndex`](crate::topology::AdjacencyIndex), which rejects bad
//! indices.

use nalgebra::{Point3, Vector3};
use rayon::prelude::*;

/// Largest fraction of the way toward the centroid a shrunken face vertex may move.
pub const MAX_FACE_GAP: f64 = 0.5;

/// Vertex positions and triangle index triples of a loaded mesh.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MeshStore {
    positions: Vec<Point3<f64>>,
    faces: Vec<[usize; 3]>,
}

impl MeshStore {
    /// Create a store from vertex positions and counter-clockwise triangles.
    ///
    /// # Example
    /// ```
    /// use meshring::mesh::MeshStore;
    /// use nalgebra::Point3;
    ///
    /// let store = MeshStore::new(
    ///     vec![
    ///         Point3::new(0.0, 0.0, 0.0),
    ///         Point3::new(1.0, 0.0, 0.0),
    ///         Point3::new(0.0, 1.0, 0.0),
    ///     ],
    ///     vec![[0, 1, 2]],
    /// );
    /// assert_eq!(store.num_vertices(), 3);
    /// assert_eq!(store.num_faces(), 1);
    /// ```
    pub fn new(positions: Vec<Point3<f64>>, faces: Vec<[usize; 3]>) -> Self {
        Self { positions, faces }
    }

    /// Get the number of vertices.
    #[inline]
    pub fn num_vertices(&self) -> usize {
        self.positions.len()
    }

    /// Get the number of faces.
    #[inline]
    pub fn num_faces(&self) -> usize {
        self.faces.len()
    }

    /// All vertex positions.
    #[inline]
    pub fn positions(&self) -> &[Point3<f64>] {
        &self.positions
    }

    /// All triangles.
    #[inline]
    pub fn faces(&self) -> &[[usize; 3]] {
        &self.faces
    }

    /// Position of vertex `v`.
    ///
    /// # Panics
    /// Panics if `v` is out of range.
    #[inline]
    pub fn position(&self, v: usize) -> &Point3<f64> {
        &self.positions[v]
    }

    /// Vertex indices of face `f`.
    ///
    /// # Panics
    /// Panics if `f` is out of range.
    #[inline]
    pub fn face(&self, f: usize) -> [usize; 3] {
        self.faces[f]
    }

    /// Consume the store, returning positions and faces.
    pub fn into_parts(self) -> (Vec<Point3<f64>>, Vec<[usize; 3]>) {
        (self.positions, self.faces)
    }

    /// Corner positions of face `f`.
    #[inline]
    pub fn face_positions(&self, f: usize) -> [Point3<f64>; 3] {
        let [a, b, c] = self.faces[f];
        [self.positions[a], self.positions[b], self.positions[c]]
    }

    /// Unit normal of face `f` from its counter-clockwise winding.
    ///
    /// Returns the zero vector for a face with no area.
    pub fn face_normal(&self, f: usize) -> Vector3<f64> {
        let [p0, p1, p2] = self.face_positions(f);
        (p1 - p0)
            .cross(&(p2 - p0))
            .try_normalize(f64::EPSILON)
            .unwrap_or_else(Vector3::zeros)
    }

    /// Unit normals of every face.
    ///
    /// With `parallel` set, faces are processed on the rayon thread pool.
    pub fn face_normals(&self, parallel: bool) -> Vec<Vector3<f64>> {
        if parallel {
            (0..self.num_faces())
                .into_par_iter()
                .map(|f| self.face_normal(f))
                .collect()
        } else {
            (0..self.num_faces()).map(|f| self.face_normal(f)).collect()
        }
    }

    /// Per-vertex normals: the normalized sum of the unit normals of the
    /// incident faces. Isolated vertices get the zero vector.
    pub fn vertex_normals(&self) -> Vec<Vector3<f64>> {
        let mut normals = vec![Vector3::zeros(); self.num_vertices()];
        for (f, n) in self.face_normals(false).into_iter().enumerate() {
            for v in self.faces[f] {
                normals[v] += n;
            }
        }
        for n in &mut normals {
            *n = n.try_normalize(f64::EPSILON).unwrap_or_else(Vector3::zeros);
        }
        normals
    }

    /// Centroid of face `f`.
    pub fn face_centroid(&self, f: usize) -> Point3<f64> {
        let [p0, p1, p2] = self.face_positions(f);
        Point3::from((p0.coords + p1.coords + p2.coords) / 3.0)
    }

    /// Axis-aligned bounding box, or `None` for a store without vertices.
    pub fn bounding_box(&self) -> Option<(Point3<f64>, Point3<f64>)> {
        let first = *self.positions.first()?;
        Some(self.positions.iter().fold((first, first), |(min, max), p| {
            (min.inf(p), max.sup(p))
        }))
    }

    /// Build the "face with gap" mesh used to display face selections.
    ///
    /// Every face gets three private vertices, each moved `gap` of the way
    /// from the original corner toward the face centroid. `gap` is clamped to
    /// `[0, MAX_FACE_GAP]`. Vertex `3 * f + k` is corner `k` of face `f`.
    pub fn shrunken_faces(&self, gap: f64) -> Vec<Point3<f64>> {
        let gap = gap.clamp(0.0, MAX_FACE_GAP);
        let mut out = Vec::with_capacity(3 * self.num_faces());
        for f in 0..self.num_faces() {
            let center = self.face_centroid(f);
            for p in self.face_positions(f) {
                out.push(p + gap * (center - p));
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit_square() -> MeshStore {
        MeshStore::new(
            vec![
                Point3::new(0.0, 0.0, 0.0),
                Point3::new(1.0, 0.0, 0.0),
                Point3::new(1.0, 1.0, 0.0),
                Point3::new(0.0, 1.0, 0.0),
            ],
            vec![[0, 1, 3], [1, 2, 3]],
        )
    }

    #[test]
    fn test_face_normals_point_up() {
        let store = unit_square();
        for n in store.face_normals(true) {
            assert!((n - Vector3::z()).norm() < 1e-12);
        }
        assert_eq!(store.face_normals(true), store.face_normals(false));
    }

    #[test]
    fn test_vertex_normals() {
        let store = unit_square();
        let normals = store.vertex_normals();
        assert_eq!(normals.len(), 4);
        for n in normals {
            assert!((n.norm() - 1.0).abs() < 1e-12);
            assert!(n.z > 0.99);
        }
    }

    #[test]
    fn test_degenerate_face_normal_is_zero() {
        let store = MeshStore::new(
            vec![
                Point3::new(0.0, 0.0, 0.0),
                Point3::new(1.0, 0.0, 0.0),
                Point3::new(2.0, 0.0, 0.0),
            ],
            vec![[0, 1, 2]],
        );
        assert_eq!(store.face_normal(0), Vector3::zeros());
    }

    #[test]
    fn test_bounding_box() {
        let store = unit_square();
        let (min, max) = store.bounding_box().unwrap();
        assert_eq!(min, Point3::new(0.0, 0.0, 0.0));
        assert_eq!(max, Point3::new(1.0, 1.0, 0.0));

        assert!(MeshStore::default().bounding_box().is_none());
    }

    #[test]
    fn test_shrunken_faces() {
        let store = unit_square();
        let centroid = store.face_centroid(0);

        let none = store.shrunken_faces(0.0);
        assert_eq!(none.len(), 6);
        assert_eq!(none[0], *store.position(0));

        // Gap is clamped to MAX_FACE_GAP
        let half = store.shrunken_faces(3.0);
        let corner = *store.position(0);
        let expected = corner + 0.5 * (centroid - corner);
        assert!((half[0] - expected).norm() < 1e-12);

        // Shrunken corners stay inside their face
        let shrunk = store.shrunken_faces(0.3);
        for k in 0..3 {
            let original = store.face_positions(0)[k];
            assert!((shrunk[k] - centroid).norm() < (original - centroid).norm());
        }
    }
}
