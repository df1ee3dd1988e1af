//! Math module
//!
//! Dimension abstraction over glam vector types.
//!
//! The partition tree is written once against [`SpatialVector`] and
//! instantiated for `Vec2` (quad-tree) and `Vec3` (oct-tree).

mod spatial_vector;

pub use spatial_vector::{SpatialVector, axis_major_cmp, AXIS_NAMES};
