//! Pick handling and label maintenance.

use log::{debug, trace};

use super::config::{PickMode, SelectionConfig};
use super::labels::SelectionLabels;
use crate::algo::neighborhood::{find_neighbors, FaceAdjacency};
use crate::error::Result;
use crate::mesh::{MeshIndex, Primitive};
use crate::topology::AdjacencyIndex;

/// Turns pick events into distance labels.
///
/// Each call to [`select`](Self::select) or [`accumulate`](Self::accumulate)
/// validates the picks, updates the labels, and runs every ring search to
/// completion before returning, so the labels are never observed half
/// updated.
///
/// # Example
///
/// ```
/// use meshring::prelude::*;
///
/// let index: AdjacencyIndex = AdjacencyIndex::from_triangles(4, &[[0, 1, 3], [1, 2, 3]]).unwrap();
/// let mut controller = SelectionController::new(
///     &index,
///     SelectionConfig::new()
///         .with_pick_mode(PickMode::Vertex)
///         .with_ring_radius(1),
/// );
///
/// controller.select(&index, &[Primitive::Vertex(VertexId::new(0))]).unwrap();
/// assert_eq!(controller.labels().raw_vertices(), vec![0, 1, -1, 1]);
/// ```
#[derive(Debug, Clone)]
pub struct SelectionController<I: MeshIndex = u32> {
    config: SelectionConfig,
    labels: SelectionLabels,
    selected: Vec<Primitive<I>>,
    labeled: Vec<Primitive<I>>,
}

impl<I: MeshIndex> SelectionController<I> {
    /// Create a controller with empty labels sized for `index`.
    pub fn new(index: &AdjacencyIndex<I>, config: SelectionConfig) -> Self {
        Self {
            config,
            labels: SelectionLabels::for_index(index),
            selected: Vec::new(),
            labeled: Vec::new(),
        }
    }

    /// Replace the current selection with `picks`.
    ///
    /// Only picks of the active [`PickMode`] category are used. Labels of
    /// everything the previous selection labeled are cleared, the picks are
    /// labeled 0, and their rings are labeled up to the configured radius.
    /// A primitive reached from several seeds keeps its smallest distance.
    /// An empty pick, or [`PickMode::None`], only clears.
    ///
    /// # Errors
    /// [`MeshError::SeedOutOfRange`](crate::error::MeshError::SeedOutOfRange)
    /// if any relevant pick is out of range. Labels are left unchanged.
    pub fn select(&mut self, index: &AdjacencyIndex<I>, picks: &[Primitive<I>]) -> Result<()> {
        let seeds = self.seeds(index, picks)?;
        self.fit(index);
        self.clear();
        self.label(index, seeds)
    }

    /// Add `picks` to the current selection without clearing it.
    ///
    /// # Errors
    /// Same as [`select`](Self::select).
    pub fn accumulate(&mut self, index: &AdjacencyIndex<I>, picks: &[Primitive<I>]) -> Result<()> {
        let seeds = self.seeds(index, picks)?;
        self.fit(index);
        self.label(index, seeds)
    }

    /// Clear the labels of everything the current selection labeled.
    pub fn clear(&mut self) {
        for p in self.labeled.drain(..) {
            self.labels.clear(p);
        }
        self.selected.clear();
    }

    /// Currently selected seeds, in pick order.
    pub fn selected(&self) -> &[Primitive<I>] {
        &self.selected
    }

    /// Current distance labels.
    pub fn labels(&self) -> &SelectionLabels {
        &self.labels
    }

    /// Current configuration.
    pub fn config(&self) -> &SelectionConfig {
        &self.config
    }

    /// Replace the configuration. Takes effect on the next pick.
    pub fn set_config(&mut self, config: SelectionConfig) {
        self.config = config;
    }

    /// Change the active pick category.
    pub fn set_pick_mode(&mut self, mode: PickMode) {
        self.config.pick_mode = mode;
    }

    /// Change the ring radius, clamped to the configured limit like
    /// [`SelectionConfig::with_ring_radius`].
    pub fn set_ring_radius(&mut self, radius: usize) {
        self.config = self.config.with_ring_radius(radius);
    }

    /// Change the face adjacency relation.
    pub fn set_face_adjacency(&mut self, adjacency: FaceAdjacency) {
        self.config.face_adjacency = adjacency;
    }

    /// Filter picks to the active category and validate them.
    fn seeds(&self, index: &AdjacencyIndex<I>, picks: &[Primitive<I>]) -> Result<Vec<Primitive<I>>> {
        let Some(kind) = self.config.pick_mode.kind() else {
            return Ok(Vec::new());
        };

        let mut seeds: Vec<Primitive<I>> = Vec::new();
        for &p in picks.iter().filter(|p| p.kind() == kind) {
            index.check_seed(kind, p.index())?;
            if !seeds.contains(&p) {
                seeds.push(p);
            }
        }

        if seeds.len() < picks.len() {
            trace!(
                "ignored {} duplicate or non-{} picks",
                picks.len() - seeds.len(),
                kind
            );
        }
        Ok(seeds)
    }

    /// Resize labels if `index` is not the mesh they were sized for.
    fn fit(&mut self, index: &AdjacencyIndex<I>) {
        if !self.labels.fits(index) {
            debug!("resizing selection labels for a new mesh");
            self.labels = SelectionLabels::for_index(index);
            self.labeled.clear();
            self.selected.clear();
        }
    }

    fn label(&mut self, index: &AdjacencyIndex<I>, seeds: Vec<Primitive<I>>) -> Result<()> {
        let radius = self.config.ring_radius;
        let adjacency = self.config.face_adjacency;

        for &seed in &seeds {
            let ring = find_neighbors(index, seed, radius, adjacency)?;
            for (p, d) in ring.iter() {
                if self.labels.relax(p, d) {
                    self.labeled.push(p);
                }
            }
        }

        for seed in seeds {
            if !self.selected.contains(&seed) {
                self.selected.push(seed);
            }
        }

        debug!(
            "{} seeds selected, {} primitives labeled",
            self.selected.len(),
            self.labeled.len()
        );
        Ok(())
    }
}
