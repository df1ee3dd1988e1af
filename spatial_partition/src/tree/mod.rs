//! Partition tree module
//!
//! Provides the fixed-depth quad-tree / oct-tree, its node arena and leaf
//! neighbor grid, the configuration types, and the broad-phase index trait.

mod config;
mod neighbor_grid;
mod node;
mod partition_tree;
mod spatial_index;

use slotmap::new_key_type;

pub use config::{
    TreeConfig, OutOfBoundsPolicy,
    MAX_LEAF_COUNT, DEFAULT_HALF_SIZE, DEFAULT_MAX_DEPTH,
};
pub use node::{PartitionNode, NodeId, Direction};
pub use partition_tree::{PartitionTree, QuadTree, Octree};
pub use spatial_index::SpatialIndex;

new_key_type! {
    /// Stable handle for a host object tracked by a tree.
    ///
    /// Hosts that keep their objects in a `SlotMap<ObjectKey, _>` can pass
    /// the slot keys straight to the tree. Any `Copy + Eq + Hash` type
    /// works as a key; this one is provided for convenience.
    pub struct ObjectKey;
}
