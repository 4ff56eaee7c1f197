//! A loaded mesh with its adjacency index and selection state.

use std::path::Path;

use log::info;
use nalgebra::Vector3;

use crate::error::Result;
use crate::mesh::{MeshIndex, MeshStore, Primitive, PrimitiveKind};
use crate::selection::{SelectionConfig, SelectionController, SelectionLabels, SelectionPalette};
use crate::topology::AdjacencyIndex;

/// Everything a viewer keeps per loaded mesh.
///
/// The index is built once on construction. Selection calls go through the
/// session so the controller always sees the index its labels were sized
/// for.
///
/// # Example
///
/// ```
/// use meshring::prelude::*;
/// use nalgebra::Point3;
///
/// let store = MeshStore::new(
///     vec![
///         Point3::new(0.0, 0.0, 0.0),
///         Point3::new(1.0, 0.0, 0.0),
///         Point3::new(1.0, 1.0, 0.0),
///         Point3::new(0.0, 1.0, 0.0),
///     ],
///     vec![[0, 1, 3], [1, 2, 3]],
/// );
/// let mut session: MeshSession = MeshSession::new(store).unwrap();
///
/// session.controller_mut().set_ring_radius(0);
/// session.select(&[Primitive::Face(FaceId::new(1))]).unwrap();
/// assert_eq!(session.labels().raw_faces(), vec![-1, 0]);
/// ```
#[derive(Debug, Clone)]
pub struct MeshSession<I: MeshIndex = u32> {
    store: MeshStore,
    index: AdjacencyIndex<I>,
    controller: SelectionController<I>,
    palette: SelectionPalette,
}

impl<I: MeshIndex> MeshSession<I> {
    /// Build the adjacency index for `store` with default selection settings.
    ///
    /// # Errors
    /// Fails if a face references a missing vertex or repeats a vertex.
    pub fn new(store: MeshStore) -> Result<Self> {
        Self::with_config(store, SelectionConfig::default())
    }

    /// Build the adjacency index for `store` with the given selection settings.
    pub fn with_config(store: MeshStore, config: SelectionConfig) -> Result<Self> {
        let index = AdjacencyIndex::build(&store)?;
        let controller = SelectionController::new(&index, config);
        info!(
            "mesh session: {} vertices, {} edges, {} faces",
            index.num_vertices(),
            index.num_edges(),
            index.num_faces()
        );
        Ok(Self {
            store,
            index,
            controller,
            palette: SelectionPalette::default(),
        })
    }

    /// Load a mesh file and build its session.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::new(crate::io::load(path)?)
    }

    /// Replace the display palette.
    ///
    /// The ring radius limit becomes the palette's largest colored distance,
    /// so every ring the controller labels gets its own color.
    pub fn with_palette(mut self, palette: SelectionPalette) -> Self {
        let config = self
            .controller
            .config()
            .with_max_ring_radius(palette.max_distance());
        self.controller.set_config(config);
        self.palette = palette;
        self
    }

    /// The mesh geometry.
    pub fn store(&self) -> &MeshStore {
        &self.store
    }

    /// The adjacency index.
    pub fn index(&self) -> &AdjacencyIndex<I> {
        &self.index
    }

    /// The selection controller.
    pub fn controller(&self) -> &SelectionController<I> {
        &self.controller
    }

    /// The selection controller, for changing settings.
    pub fn controller_mut(&mut self) -> &mut SelectionController<I> {
        &mut self.controller
    }

    /// The display palette.
    pub fn palette(&self) -> &SelectionPalette {
        &self.palette
    }

    /// Current distance labels.
    pub fn labels(&self) -> &SelectionLabels {
        self.controller.labels()
    }

    /// Replace the selection with `picks`.
    pub fn select(&mut self, picks: &[Primitive<I>]) -> Result<()> {
        self.controller.select(&self.index, picks)
    }

    /// Add `picks` to the selection.
    pub fn accumulate(&mut self, picks: &[Primitive<I>]) -> Result<()> {
        self.controller.accumulate(&self.index, picks)
    }

    /// Clear the selection.
    pub fn clear_selection(&mut self) {
        self.controller.clear();
    }

    /// Display color of every vertex.
    pub fn vertex_colors(&self) -> Vec<Vector3<f32>> {
        self.colors(self.labels().labels(PrimitiveKind::Vertex))
    }

    /// Display color of every edge.
    pub fn edge_colors(&self) -> Vec<Vector3<f32>> {
        self.colors(self.labels().labels(PrimitiveKind::Edge))
    }

    /// Display color of every face.
    pub fn face_colors(&self) -> Vec<Vector3<f32>> {
        self.colors(self.labels().labels(PrimitiveKind::Face))
    }

    fn colors(&self, labels: &[Option<usize>]) -> Vec<Vector3<f32>> {
        labels.iter().map(|&l| self.palette.label_color(l)).collect()
    }
}
