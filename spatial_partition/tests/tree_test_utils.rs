#![allow(dead_code)]
//! Shared helpers for partition tree integration tests
//!
//! Provides a deterministic random source (so failures reproduce), a
//! brute-force leaf overlap oracle, and a consistency check of the
//! membership index through the public API only.

use std::hash::Hash;
use spatial_partition::spatial::math::SpatialVector;
use spatial_partition::spatial::tree::{NodeId, PartitionTree};

/// Small linear congruential generator (Knuth MMIX constants)
pub struct Lcg {
    state: u64,
}

impl Lcg {
    pub fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    pub fn next_u32(&mut self) -> u32 {
        self.state = self.state
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        (self.state >> 33) as u32
    }

    /// Uniform float in `[low, high)`
    pub fn range(&mut self, low: f32, high: f32) -> f32 {
        let unit = self.next_u32() as f32 / (1u64 << 31) as f32;
        low + (high - low) * unit
    }

    /// Random vector with every component in `[low, high)`
    pub fn vector<V: SpatialVector>(&mut self, low: f32, high: f32) -> V {
        let mut v = V::ZERO;
        for axis in 0..V::DIM {
            v[axis] = self.range(low, high);
        }
        v
    }
}

/// Leaves a box `[min, max]` should occupy, computed by scanning every leaf.
///
/// Corners are clamped to the world first. Along each axis a leaf
/// `[lo, hi]` is covered when `hi >= min` and either `lo < max` or it is
/// the first leaf on that axis; this matches descent where a coordinate
/// exactly on a split routes to the lower child. Returned in row-major
/// order, like `occupied_leaves`.
pub fn brute_force_leaves<V, K>(tree: &PartitionTree<V, K>, min: V, max: V) -> Vec<NodeId>
where
    V: SpatialVector,
    K: Copy + Eq + Hash,
{
    let (world_min, world_max) = (tree.world_min(), tree.world_max());
    let mut lo_corner = min;
    let mut hi_corner = max;
    for axis in 0..V::DIM {
        lo_corner[axis] = min[axis].clamp(world_min[axis], world_max[axis]);
        hi_corner[axis] = max[axis].clamp(world_min[axis], world_max[axis]);
    }

    tree.leaves()
        .iter()
        .copied()
        .filter(|&leaf| {
            let node = tree.node(leaf);
            let grid = match node.grid_index() {
                Some(grid) => grid,
                None => return false,
            };
            let (leaf_min, leaf_max) = (node.min(), node.max());
            (0..V::DIM).all(|axis| {
                leaf_max[axis] >= lo_corner[axis]
                    && (leaf_min[axis] < hi_corner[axis] || grid[axis] == 0)
            })
        })
        .collect()
}

/// Assert that per-object and per-leaf membership agree.
pub fn assert_membership_consistent<V, K>(tree: &PartitionTree<V, K>, keys: &[K])
where
    V: SpatialVector,
    K: Copy + Eq + Hash + std::fmt::Debug,
{
    let mut total_occupied = 0;
    for &key in keys {
        for &leaf in tree.occupied_leaves(key) {
            assert!(tree.node(leaf).has_member(&key),
                "{:?} lists leaf {:?} which does not hold it", key, leaf);
        }
        total_occupied += tree.occupied_leaves(key).len();
    }

    let mut total_members = 0;
    for &leaf in tree.leaves() {
        for key in tree.node(leaf).members() {
            assert!(tree.occupied_leaves(*key).contains(&leaf),
                "leaf {:?} holds {:?} which does not list it", leaf, key);
        }
        total_members += tree.node(leaf).member_count();
    }

    assert_eq!(total_occupied, total_members);
}

