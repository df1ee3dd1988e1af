/// PartitionNode — one cell of the fixed recursive decomposition.
///
/// Nodes live in a single flat arena owned by the tree. Parent, child,
/// and neighbor relationships are stored as [`NodeId`] indices into that
/// arena, so the structure has no reference cycles and dies with the tree.
///
/// The arena is built breadth-first: the root is at index 0, the
/// `CHILD_COUNT` children of any node are contiguous, and every depth
/// level occupies a contiguous range.

use std::hash::Hash;
use rustc_hash::FxHashSet;
use crate::math::SpatialVector;

/// Index of the root node in the flat node array.
pub(crate) const ROOT: NodeId = NodeId(0);

/// Upper bound on neighbor slots (2 per axis, at most 3 axes).
pub(crate) const MAX_NEIGHBORS: usize = 6;

/// Stable handle to a node in a tree's arena.
///
/// Handles are only meaningful for the tree that produced them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub(crate) u32);

impl NodeId {
    /// Position of the node in the arena
    pub fn index(self) -> usize {
        self.0 as usize
    }

    pub(crate) fn from_index(index: usize) -> Self {
        NodeId(index as u32)
    }
}

/// Step direction along an axis of the leaf grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Toward smaller coordinates
    Negative,
    /// Toward larger coordinates
    Positive,
}

impl Direction {
    /// Slot of this direction on `axis` in a leaf's neighbor array: `2·axis + dir`
    pub fn slot(self, axis: usize) -> usize {
        match self {
            Direction::Negative => 2 * axis,
            Direction::Positive => 2 * axis + 1,
        }
    }

    /// The opposite direction
    pub fn opposite(self) -> Self {
        match self {
            Direction::Negative => Direction::Positive,
            Direction::Positive => Direction::Negative,
        }
    }
}

/// Leaf-only state: grid placement, adjacency, and current members.
#[derive(Debug)]
struct LeafData<V: SpatialVector, K> {
    grid_index: V::Grid,
    neighbors: [Option<NodeId>; MAX_NEIGHBORS],
    members: FxHashSet<K>,
}

/// A single node of the partition tree.
#[derive(Debug)]
pub struct PartitionNode<V: SpatialVector, K> {
    center: V,
    half_size: V,
    depth: u32,
    parent: Option<NodeId>,
    /// First of `CHILD_COUNT` contiguous children (None for leaves)
    first_child: Option<NodeId>,
    /// Present exactly when `depth == max_depth`
    leaf: Option<LeafData<V, K>>,
}

impl<V: SpatialVector, K: Copy + Eq + Hash> PartitionNode<V, K> {
    fn new(center: V, half_size: V, depth: u32, max_depth: u32, parent: Option<NodeId>) -> Self {
        let leaf = (depth >= max_depth).then(|| LeafData {
            grid_index: V::Grid::default(),
            neighbors: [None; MAX_NEIGHBORS],
            members: FxHashSet::default(),
        });
        Self {
            center,
            half_size,
            depth,
            parent,
            first_child: None,
            leaf,
        }
    }

    /// Build the complete arena for a tree rooted at `center` / `half_size`.
    ///
    /// Breadth-first: a node's children are appended together as one block
    /// when the node is reached, so `first_child..first_child + CHILD_COUNT`
    /// is always the full child range. Total size is
    /// `sum(CHILD_COUNT^d for d in 0..=max_depth)`.
    pub(crate) fn build_arena(center: V, half_size: V, max_depth: u32) -> Vec<Self> {
        let mut nodes = Vec::with_capacity(Self::total_node_count(max_depth));
        nodes.push(Self::new(center, half_size, 0, max_depth, None));

        let mut cursor = 0;
        while cursor < nodes.len() {
            let (node_center, node_half, depth) = {
                let node = &nodes[cursor];
                (node.center, node.half_size, node.depth)
            };

            if depth < max_depth {
                let first_child = NodeId::from_index(nodes.len());
                let child_half = node_half * 0.5;
                for octant in 0..V::CHILD_COUNT {
                    let child_center = Self::child_center(node_center, child_half, octant);
                    nodes.push(Self::new(
                        child_center,
                        child_half,
                        depth + 1,
                        max_depth,
                        Some(NodeId::from_index(cursor)),
                    ));
                }
                nodes[cursor].first_child = Some(first_child);
            }
            cursor += 1;
        }

        debug_assert_eq!(nodes.len(), Self::total_node_count(max_depth));
        nodes
    }

    /// Total number of nodes for a given depth: sum of CHILD_COUNT^i for i = 0..=max_depth
    pub(crate) fn total_node_count(max_depth: u32) -> usize {
        let mut count = 0usize;
        let mut level_count = 1usize;
        for _ in 0..=max_depth {
            count += level_count;
            level_count *= V::CHILD_COUNT;
        }
        count
    }

    /// Center of child `octant`.
    ///
    /// Bit `a` of `octant` selects the high (1) or low (0) side along axis `a`.
    /// The same convention is used by [`PartitionNode::child_index_for`].
    fn child_center(parent_center: V, child_half: V, octant: usize) -> V {
        let mut center = parent_center;
        for axis in 0..V::DIM {
            if octant & (1 << axis) != 0 {
                center[axis] += child_half[axis];
            } else {
                center[axis] -= child_half[axis];
            }
        }
        center
    }

    /// Which child contains `point`.
    ///
    /// One bit per axis, set when `point[a] > center[a]`. A coordinate equal
    /// to the center routes to the low child.
    pub fn child_index_for(&self, point: V) -> usize {
        let mut octant = 0;
        for axis in 0..V::DIM {
            if point[axis] > self.center[axis] {
                octant |= 1 << axis;
            }
        }
        octant
    }

    // ===== GEOMETRY =====

    /// Center of the node's bounds
    pub fn center(&self) -> V {
        self.center
    }

    /// Half-size of the node's bounds
    pub fn half_size(&self) -> V {
        self.half_size
    }

    /// Minimum corner of the node's bounds
    pub fn min(&self) -> V {
        self.center - self.half_size
    }

    /// Maximum corner of the node's bounds
    pub fn max(&self) -> V {
        self.center + self.half_size
    }

    /// Test if `point` lies inside the node's closed bounds
    pub fn contains_point(&self, point: V) -> bool {
        let (min, max) = (self.min(), self.max());
        (0..V::DIM).all(|axis| min[axis] <= point[axis] && point[axis] <= max[axis])
    }

    // ===== HIERARCHY =====

    /// Depth of the node (root = 0)
    pub fn depth(&self) -> u32 {
        self.depth
    }

    /// Parent node, None for the root
    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    /// True if the node has no children
    pub fn is_leaf(&self) -> bool {
        self.leaf.is_some()
    }

    /// Child `octant` (0..CHILD_COUNT), None for leaves
    pub fn child(&self, octant: usize) -> Option<NodeId> {
        if octant >= V::CHILD_COUNT {
            return None;
        }
        self.first_child.map(|first| NodeId(first.0 + octant as u32))
    }

    /// All children in octant order (empty for leaves)
    pub fn children(&self) -> impl Iterator<Item = NodeId> + '_ {
        let first = self.first_child.map_or(0, |id| id.0);
        let count = if self.first_child.is_some() { V::CHILD_COUNT as u32 } else { 0 };
        (first..first + count).map(NodeId)
    }

    // ===== LEAF GRID =====

    /// Integer grid coordinate of a leaf, None for internal nodes
    pub fn grid_index(&self) -> Option<V::Grid> {
        self.leaf.as_ref().map(|leaf| leaf.grid_index)
    }

    /// Adjacent leaf along `axis` in `direction`.
    ///
    /// None at the world boundary and for internal nodes.
    pub fn neighbor(&self, axis: usize, direction: Direction) -> Option<NodeId> {
        if axis >= V::DIM {
            return None;
        }
        self.leaf.as_ref().and_then(|leaf| leaf.neighbors[direction.slot(axis)])
    }

    /// The `2·DIM` neighbor slots of a leaf (empty for internal nodes)
    pub fn neighbors(&self) -> &[Option<NodeId>] {
        match &self.leaf {
            Some(leaf) => &leaf.neighbors[..2 * V::DIM],
            None => &[],
        }
    }

    pub(crate) fn set_grid_placement(
        &mut self,
        grid_index: V::Grid,
        neighbors: [Option<NodeId>; MAX_NEIGHBORS],
    ) {
        if let Some(leaf) = self.leaf.as_mut() {
            leaf.grid_index = grid_index;
            leaf.neighbors = neighbors;
        }
    }

    // ===== MEMBERSHIP =====

    /// Objects currently registered in this leaf
    pub fn members(&self) -> impl Iterator<Item = &K> + '_ {
        self.leaf.iter().flat_map(|leaf| leaf.members.iter())
    }

    /// Number of objects in this leaf
    pub fn member_count(&self) -> usize {
        self.leaf.as_ref().map_or(0, |leaf| leaf.members.len())
    }

    /// Test if `key` is a member of this leaf
    pub fn has_member(&self, key: &K) -> bool {
        self.leaf.as_ref().is_some_and(|leaf| leaf.members.contains(key))
    }

    pub(crate) fn add_member(&mut self, key: K) {
        if let Some(leaf) = self.leaf.as_mut() {
            leaf.members.insert(key);
        }
    }

    pub(crate) fn remove_member(&mut self, key: &K) {
        if let Some(leaf) = self.leaf.as_mut() {
            leaf.members.remove(key);
        }
    }

    pub(crate) fn clear_members(&mut self) {
        if let Some(leaf) = self.leaf.as_mut() {
            leaf.members.clear();
        }
    }
}

#[cfg(test)]
#[path = "node_tests.rs"]
mod tests;
