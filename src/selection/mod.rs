//! Interactive n-ring selection.
//!
//! A pick event names one or more primitives. The [`SelectionController`]
//! turns the picks of the active [`PickMode`] category into seeds, runs the
//! matching neighborhood query around each, and keeps a ring distance per
//! primitive in [`SelectionLabels`]. A renderer reads the labels and colors
//! each primitive through a [`SelectionPalette`].

mod config;
mod controller;
mod labels;

pub use crate::algo::neighborhood::FaceAdjacency;
pub use crate::mesh::{Primitive, PrimitiveKind};
pub use config::{PickMode, SelectionConfig, SelectionPalette, MAX_RING_RADIUS};
pub use controller::SelectionController;
pub use labels::SelectionLabels;
