//! Selection parameters and the ring color palette.

use nalgebra::Vector3;

use crate::algo::neighborhood::FaceAdjacency;
use crate::error::{MeshError, Result};
use crate::mesh::PrimitiveKind;

/// Largest ring radius the default palette can color.
pub const MAX_RING_RADIUS: usize = 5;

/// Which primitive category pick events resolve against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PickMode {
    /// Picking disabled.
    None,
    /// Pick vertices.
    Vertex,
    /// Pick edges.
    Edge,
    /// Pick faces.
    #[default]
    Face,
}

impl PickMode {
    /// The category this mode picks, if any.
    pub fn kind(self) -> Option<PrimitiveKind> {
        match self {
            PickMode::None => None,
            PickMode::Vertex => Some(PrimitiveKind::Vertex),
            PickMode::Edge => Some(PrimitiveKind::Edge),
            PickMode::Face => Some(PrimitiveKind::Face),
        }
    }
}

impl From<PrimitiveKind> for PickMode {
    fn from(kind: PrimitiveKind) -> Self {
        match kind {
            PrimitiveKind::Vertex => PickMode::Vertex,
            PrimitiveKind::Edge => PickMode::Edge,
            PrimitiveKind::Face => PickMode::Face,
        }
    }
}

/// Options for selection queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectionConfig {
    /// Number of rings labeled around each seed.
    pub ring_radius: usize,

    /// Active pick category.
    pub pick_mode: PickMode,

    /// Face-to-face adjacency used for face seeds.
    pub face_adjacency: FaceAdjacency,

    /// Upper bound for [`ring_radius`](Self::ring_radius), normally the
    /// largest distance the palette colors.
    pub max_ring_radius: usize,
}

impl Default for SelectionConfig {
    fn default() -> Self {
        Self {
            ring_radius: MAX_RING_RADIUS,
            pick_mode: PickMode::Face,
            face_adjacency: FaceAdjacency::VertexAdjacent,
            max_ring_radius: MAX_RING_RADIUS,
        }
    }
}

impl SelectionConfig {
    /// Create a configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the ring radius, clamped to
    /// [`max_ring_radius`](Self::max_ring_radius).
    pub fn with_ring_radius(mut self, radius: usize) -> Self {
        self.ring_radius = radius.min(self.max_ring_radius);
        self
    }

    /// Set the radius limit and re-clamp the current radius to it.
    ///
    /// [`MeshSession::with_palette`](crate::session::MeshSession::with_palette)
    /// sets this to the palette's [`max_distance`](SelectionPalette::max_distance).
    pub fn with_max_ring_radius(mut self, limit: usize) -> Self {
        self.max_ring_radius = limit;
        self.ring_radius = self.ring_radius.min(limit);
        self
    }

    /// Set the pick mode.
    pub fn with_pick_mode(mut self, mode: PickMode) -> Self {
        self.pick_mode = mode;
        self
    }

    /// Set the face adjacency relation.
    pub fn with_face_adjacency(mut self, adjacency: FaceAdjacency) -> Self {
        self.face_adjacency = adjacency;
        self
    }
}

/// Maps ring distances to display colors.
///
/// Distance `d` uses entry `d` of the palette. Distances past the end use the
/// fallback color, and unlabeled primitives use the base color.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectionPalette {
    colors: Vec<Vector3<f32>>,
    fallback: Vector3<f32>,
    base: Vector3<f32>,
}

impl Default for SelectionPalette {
    fn default() -> Self {
        Self {
            colors: vec![
                Vector3::new(1.0, 0.0, 0.0),
                Vector3::new(1.0, 1.0, 0.0),
                Vector3::new(0.0, 1.0, 0.0),
                Vector3::new(0.0, 1.0, 1.0),
                Vector3::new(0.0, 0.0, 1.0),
                Vector3::new(1.0, 0.0, 1.0),
            ],
            fallback: Vector3::new(0.5, 0.5, 0.5),
            base: Vector3::new(0.95, 0.95, 0.95),
        }
    }
}

impl SelectionPalette {
    /// Create a palette from ring colors and a fallback color.
    ///
    /// # Errors
    /// Returns [`MeshError::InvalidParameter`](crate::error::MeshError::InvalidParameter)
    /// if `colors` is empty.
    pub fn new(colors: Vec<Vector3<f32>>, fallback: Vector3<f32>) -> Result<Self> {
        if colors.is_empty() {
            return Err(MeshError::invalid_param("colors", 0, "palette needs at least one color"));
        }
        Ok(Self {
            colors,
            fallback,
            ..Self::default()
        })
    }

    /// Set the color of unlabeled primitives.
    pub fn with_base(mut self, base: Vector3<f32>) -> Self {
        self.base = base;
        self
    }

    /// Number of ring colors.
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Always false; a palette holds at least one color.
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Largest ring distance with its own color.
    pub fn max_distance(&self) -> usize {
        self.colors.len() - 1
    }

    /// Color for ring distance `distance`.
    pub fn color(&self, distance: usize) -> Vector3<f32> {
        self.colors.get(distance).copied().unwrap_or(self.fallback)
    }

    /// Color for an optional label, using the base color when unlabeled.
    pub fn label_color(&self, label: Option<usize>) -> Vector3<f32> {
        label.map_or(self.base, |d| self.color(d))
    }

    /// Color of unlabeled primitives.
    pub fn base(&self) -> Vector3<f32> {
        self.base
    }

    /// Color for distances past the end of the palette.
    pub fn fallback(&self) -> Vector3<f32> {
        self.fallback
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ring_radius_is_clamped() {
        let config = SelectionConfig::new().with_ring_radius(12);
        assert_eq!(config.ring_radius, MAX_RING_RADIUS);

        let config = SelectionConfig::new().with_ring_radius(2);
        assert_eq!(config.ring_radius, 2);
    }

    #[test]
    fn test_ring_radius_limit_follows_setting() {
        let config = SelectionConfig::new().with_max_ring_radius(7).with_ring_radius(12);
        assert_eq!(config.ring_radius, 7);

        // Lowering the limit pulls the current radius down with it
        let config = config.with_max_ring_radius(3);
        assert_eq!(config.ring_radius, 3);

        let config = SelectionConfig::new().with_ring_radius(4).with_max_ring_radius(9);
        assert_eq!(config.ring_radius, 4);
    }

    #[test]
    fn test_defaults() {
        let config = SelectionConfig::default();
        assert_eq!(config.pick_mode, PickMode::Face);
        assert_eq!(config.face_adjacency, FaceAdjacency::VertexAdjacent);
        assert_eq!(PickMode::None.kind(), None);
        assert_eq!(PickMode::from(PrimitiveKind::Edge), PickMode::Edge);
    }

    #[test]
    fn test_palette_covers_max_radius() {
        let palette = SelectionPalette::default();
        assert_eq!(palette.len(), 6);
        assert_eq!(palette.max_distance(), MAX_RING_RADIUS);
        assert_eq!(palette.color(0), Vector3::new(1.0, 0.0, 0.0));
        assert_eq!(palette.color(5), Vector3::new(1.0, 0.0, 1.0));
    }

    #[test]
    fn test_palette_fallback() {
        let palette = SelectionPalette::default();
        assert_eq!(palette.color(6), palette.fallback());
        assert_eq!(palette.color(100), palette.fallback());
        assert_eq!(palette.label_color(None), palette.base());
        assert_eq!(palette.label_color(Some(1)), palette.color(1));
    }

    #[test]
    fn test_empty_palette_rejected() {
        let result = SelectionPalette::new(Vec::new(), Vector3::zeros());
        assert!(matches!(result, Err(MeshError::InvalidParameter { .. })));

        let palette = SelectionPalette::new(vec![Vector3::x()], Vector3::y()).unwrap();
        assert_eq!(palette.color(1), Vector3::y());
    }
}
