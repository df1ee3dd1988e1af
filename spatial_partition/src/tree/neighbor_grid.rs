/// Neighbor grid — dense row-major layout of the leaves and their adjacency.
///
/// After the arena is built, the leaves are collected breadth-first and
/// sorted by center in row-major order (last axis slowest). In that order
/// leaf `i` sits at grid coordinate `(i % side, (i / side) % side, ...)`
/// and its neighbor along axis `a` is `i ± side^a`. Adjacency therefore
/// falls out of index arithmetic; no descent or geometric search is needed.

use std::collections::VecDeque;
use std::hash::Hash;
use crate::error::Result;
use crate::math::{axis_major_cmp, SpatialVector, AXIS_NAMES};
use crate::partition_bail;
use super::node::{Direction, NodeId, PartitionNode, MAX_NEIGHBORS, ROOT};

/// Collect, sort, and link every leaf of the arena.
///
/// Returns the leaves in row-major order.
pub(crate) fn build_leaf_grid<V, K>(nodes: &mut [PartitionNode<V, K>], side: u32) -> Vec<NodeId>
where
    V: SpatialVector,
    K: Copy + Eq + Hash,
{
    let mut leaves = collect_leaves_breadth_first(nodes);
    leaves.sort_by(|a, b| axis_major_cmp(nodes[a.index()].center(), nodes[b.index()].center()));
    link_leaves(nodes, &leaves, side);
    leaves
}

/// Breadth-first walk from the root, keeping only leaves.
pub(crate) fn collect_leaves_breadth_first<V, K>(nodes: &[PartitionNode<V, K>]) -> Vec<NodeId>
where
    V: SpatialVector,
    K: Copy + Eq + Hash,
{
    let mut leaves = Vec::new();
    let mut queue = VecDeque::from([ROOT]);

    while let Some(id) = queue.pop_front() {
        let node = &nodes[id.index()];
        if node.is_leaf() {
            leaves.push(id);
        } else {
            queue.extend(node.children());
        }
    }
    leaves
}

/// Assign grid coordinates and neighbor slots from positions in `leaves`.
fn link_leaves<V, K>(nodes: &mut [PartitionNode<V, K>], leaves: &[NodeId], side: u32)
where
    V: SpatialVector,
    K: Copy + Eq + Hash,
{
    for (linear, &leaf) in leaves.iter().enumerate() {
        let grid = grid_coord::<V>(linear, side);
        let mut neighbors = [None; MAX_NEIGHBORS];

        for axis in 0..V::DIM {
            let stride = axis_stride(axis, side);
            if grid[axis] > 0 {
                neighbors[Direction::Negative.slot(axis)] = Some(leaves[linear - stride]);
            }
            if grid[axis] + 1 < side {
                neighbors[Direction::Positive.slot(axis)] = Some(leaves[linear + stride]);
            }
        }

        nodes[leaf.index()].set_grid_placement(grid, neighbors);
    }
}

/// Check that every positive neighbor lies strictly further along its axis.
///
/// Fails when rounding collapsed leaf centers, which leaves the sorted
/// order (and so the grid) out of step with the geometry.
pub(crate) fn check_leaf_separation<V, K>(nodes: &[PartitionNode<V, K>], leaves: &[NodeId]) -> Result<()>
where
    V: SpatialVector,
    K: Copy + Eq + Hash,
{
    for &leaf in leaves {
        let node = &nodes[leaf.index()];
        for axis in 0..V::DIM {
            let Some(next) = node.neighbor(axis, Direction::Positive) else {
                continue;
            };
            let (here, there) = (node.center()[axis], nodes[next.index()].center()[axis]);
            if there <= here {
                partition_bail!("spatial::PartitionTree", InvalidConfiguration,
                    "leaf centers {} and {} on axis {} are not separable in f32",
                    here, there, AXIS_NAMES[axis]);
            }
        }
    }
    Ok(())
}

/// Distance in the sorted leaf array between neighbors along `axis`: `side^axis`.
pub(crate) fn axis_stride(axis: usize, side: u32) -> usize {
    (side as usize).pow(axis as u32)
}

/// Grid coordinate of the leaf at `linear` in row-major order.
pub(crate) fn grid_coord<V: SpatialVector>(linear: usize, side: u32) -> V::Grid {
    let mut grid = V::Grid::default();
    let mut rest = linear;
    for axis in 0..V::DIM {
        grid[axis] = (rest % side as usize) as u32;
        rest /= side as usize;
    }
    grid
}

/// Row-major position of grid coordinate `grid` (inverse of [`grid_coord`]).
pub(crate) fn linear_index<V: SpatialVector>(grid: V::Grid, side: u32) -> usize {
    (0..V::DIM).rev().fold(0, |acc, axis| acc * side as usize + grid[axis] as usize)
}

#[cfg(test)]
#[path = "neighbor_grid_tests.rs"]
mod tests;
