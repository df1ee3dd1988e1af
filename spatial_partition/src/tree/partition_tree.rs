/// PartitionTree — fixed-depth quad-tree / oct-tree broad phase.
///
/// The tree is built once from a [`TreeConfig`] and never changes shape.
/// Leaves form a dense `side^DIM` grid (`side = 2^max_depth`) linked by
/// neighbor handles, and objects are indexed in every leaf their bounding
/// box overlaps.
///
/// Membership is a dual index kept consistent by `update`, `unregister`
/// and `clear` only:
/// - per object: the leaves it occupies (`membership`)
/// - per leaf: the objects it holds (`PartitionNode::members`)
///
/// `update` descends the tree twice (min and max corner) and then walks
/// the neighbor grid across the covered range, so its cost is
/// O(depth + leaves overlapped).
///
/// Single-threaded: all methods take `&self` / `&mut self` and
/// there is no internal locking. Hosts sharing a tree across threads wrap
/// it in their own lock.

use std::hash::Hash;
use std::mem;
use rustc_hash::{FxHashMap, FxHashSet};
use glam::{Vec2, Vec3};
use crate::bounds::BoundedObject;
use crate::error::Result;
use crate::math::SpatialVector;
use crate::{partition_bail, partition_debug, partition_warn};
use super::config::{OutOfBoundsPolicy, TreeConfig};
use super::neighbor_grid::{build_leaf_grid, check_leaf_separation, linear_index};
use super::node::{Direction, NodeId, PartitionNode, ROOT};

/// 2-D partition tree (4 children per node)
pub type QuadTree<K> = PartitionTree<Vec2, K>;

/// 3-D partition tree (8 children per node)
pub type Octree<K> = PartitionTree<Vec3, K>;

/// Fixed-depth spatial partition tree over keys `K`.
///
/// `K` is a cheap, non-owning handle to a host object (a slotmap key,
/// an entity id). The tree never sees the objects themselves except
/// through [`BoundedObject`] during `update`.
pub struct PartitionTree<V: SpatialVector, K: Copy + Eq + Hash> {
    /// Flat arena of all nodes, breadth-first
    nodes: Vec<PartitionNode<V, K>>,
    /// Leaf handles in row-major grid order
    leaves: Vec<NodeId>,
    /// Leaves per axis: 2^max_depth
    side_length: u32,
    config: TreeConfig<V>,
    /// Object → occupied leaves, in row-major walk order
    membership: FxHashMap<K, Vec<NodeId>>,
}

impl<V: SpatialVector, K: Copy + Eq + Hash> PartitionTree<V, K> {
    /// Build a tree from a configuration.
    ///
    /// Allocates every node up front, sorts the leaves into a row-major
    /// grid, and derives neighbor links from their grid positions.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidConfiguration` if the configuration fails
    /// [`TreeConfig::validate`], or if the built leaves are not strictly
    /// ordered along every axis.
    pub fn new(config: TreeConfig<V>) -> Result<Self> {
        config.validate()?;
        // validate() guarantees the shift fits
        let side_length = 1u32 << config.max_depth;

        let mut nodes = PartitionNode::build_arena(config.center, config.half_size, config.max_depth);
        let leaves = build_leaf_grid(&mut nodes, side_length);
        check_leaf_separation(&nodes, &leaves)?;

        partition_debug!("spatial::PartitionTree",
            "Built {}-D tree: depth {}, {} nodes, {} leaves ({} per axis)",
            V::DIM, config.max_depth, nodes.len(), leaves.len(), side_length);

        Ok(Self {
            nodes,
            leaves,
            side_length,
            config,
            membership: FxHashMap::default(),
        })
    }

    /// Build a tree with the default out-of-bounds policy.
    ///
    /// # Errors
    ///
    /// See [`PartitionTree::new`].
    pub fn with_bounds(center: V, half_size: V, max_depth: u32) -> Result<Self> {
        Self::new(TreeConfig::new(center, half_size, max_depth))
    }

    // ===== STRUCTURE =====

    /// Configuration the tree was built with
    pub fn config(&self) -> &TreeConfig<V> {
        &self.config
    }

    /// Depth of the leaves
    pub fn max_depth(&self) -> u32 {
        self.config.max_depth
    }

    /// Leaves per axis: 2^max_depth
    pub fn side_length(&self) -> u32 {
        self.side_length
    }

    /// Minimum corner of the world
    pub fn world_min(&self) -> V {
        self.config.center - self.config.half_size
    }

    /// Maximum corner of the world
    pub fn world_max(&self) -> V {
        self.config.center + self.config.half_size
    }

    /// Handle of the root node
    pub fn root(&self) -> NodeId {
        ROOT
    }

    /// Node by handle
    ///
    /// # Panics
    ///
    /// Panics if `id` did not come from this tree.
    pub fn node(&self, id: NodeId) -> &PartitionNode<V, K> {
        &self.nodes[id.index()]
    }

    /// Total number of nodes (internal + leaves)
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Leaf handles in row-major grid order
    pub fn leaves(&self) -> &[NodeId] {
        &self.leaves
    }

    /// Number of leaves: side_length^DIM
    pub fn leaf_count(&self) -> usize {
        self.leaves.len()
    }

    /// Leaf at grid coordinate `grid`, None if any component is out of range
    pub fn leaf_at(&self, grid: V::Grid) -> Option<NodeId> {
        if (0..V::DIM).any(|axis| grid[axis] >= self.side_length) {
            return None;
        }
        Some(self.leaves[linear_index::<V>(grid, self.side_length)])
    }

    // ===== POINT LOOKUP =====

    /// Descend from the root to the leaf containing `point`.
    ///
    /// No bounds check: a point outside the world lands on the boundary
    /// leaf nearest to it along every axis. Use [`PartitionTree::locate`]
    /// when the point is untrusted.
    pub fn descend_to_leaf(&self, point: V) -> NodeId {
        let mut id = ROOT;
        loop {
            let node = &self.nodes[id.index()];
            match node.child(node.child_index_for(point)) {
                Some(child) => id = child,
                None => return id,
            }
        }
    }

    /// Bounds-checked leaf lookup.
    ///
    /// # Errors
    ///
    /// Returns `Error::OutOfWorldBounds` if `point` is outside the world
    /// (or not finite).
    pub fn locate(&self, point: V) -> Result<NodeId> {
        if !self.nodes[ROOT.index()].contains_point(point) {
            partition_bail!("spatial::PartitionTree", OutOfWorldBounds,
                "point {:?} outside world [{:?}, {:?}]", point, self.world_min(), self.world_max());
        }
        Ok(self.descend_to_leaf(point))
    }

    // ===== REGISTRATION =====

    /// Register `key` with an empty leaf set.
    ///
    /// The object occupies no leaves until its first `update`.
    /// Returns false (and changes nothing) if `key` was already registered.
    pub fn register(&mut self, key: K) -> bool {
        if self.membership.contains_key(&key) {
            return false;
        }
        self.membership.insert(key, Vec::new());
        true
    }

    /// Remove `key` from every leaf it occupies and forget it.
    ///
    /// Returns false if `key` was not registered.
    pub fn unregister(&mut self, key: K) -> bool {
        let Some(leaves) = self.membership.remove(&key) else {
            return false;
        };
        for leaf in leaves {
            self.nodes[leaf.index()].remove_member(&key);
        }
        true
    }

    /// Test if `key` is registered
    pub fn is_registered(&self, key: K) -> bool {
        self.membership.contains_key(&key)
    }

    /// Number of registered objects
    pub fn len(&self) -> usize {
        self.membership.len()
    }

    /// True if no object is registered
    pub fn is_empty(&self) -> bool {
        self.membership.is_empty()
    }

    /// Unregister every object and empty every leaf.
    pub fn clear(&mut self) {
        for node in &mut self.nodes {
            node.clear_members();
        }
        let count = self.membership.len();
        self.membership.clear();
        partition_debug!("spatial::PartitionTree", "Cleared {} objects", count);
    }

    // ===== UPDATE =====

    /// Re-index `key` into the leaves overlapped by `object`'s current box.
    ///
    /// Unregistered keys are ignored (`Ok(())`, nothing changes).
    ///
    /// # Errors
    ///
    /// With [`OutOfBoundsPolicy::Reject`], returns `Error::OutOfWorldBounds`
    /// when a corner lies outside the world. The object then keeps the
    /// leaves it occupied before the call. With `Clamp` this never fails.
    pub fn update<B>(&mut self, key: K, object: &B) -> Result<()>
    where
        B: BoundedObject<V> + ?Sized,
    {
        if !self.membership.contains_key(&key) {
            return Ok(());
        }

        let (min, max) = self.resolve_corners(object.min_point(), object.max_point())?;

        let mut occupied = self.membership.get_mut(&key).map(mem::take).unwrap_or_default();
        for leaf in occupied.drain(..) {
            self.nodes[leaf.index()].remove_member(&key);
        }

        let min_leaf = self.descend_to_leaf(min);
        let max_leaf = self.descend_to_leaf(max);
        self.walk_leaf_range(min_leaf, max_leaf, &mut occupied);

        for &leaf in &occupied {
            self.nodes[leaf.index()].add_member(key);
        }
        self.membership.insert(key, occupied);
        Ok(())
    }

    /// Apply the out-of-bounds policy to a pair of corners.
    fn resolve_corners(&self, min: V, max: V) -> Result<(V, V)> {
        let root = &self.nodes[ROOT.index()];
        match self.config.out_of_bounds {
            OutOfBoundsPolicy::Clamp => Ok((self.clamp_to_world(min), self.clamp_to_world(max))),
            OutOfBoundsPolicy::Reject => {
                if !root.contains_point(min) || !root.contains_point(max) {
                    partition_warn!("spatial::PartitionTree",
                        "Rejected box [{:?}, {:?}] outside world [{:?}, {:?}]",
                        min, max, self.world_min(), self.world_max());
                    partition_bail!("spatial::PartitionTree", OutOfWorldBounds,
                        "box [{:?}, {:?}] outside world [{:?}, {:?}]",
                        min, max, self.world_min(), self.world_max());
                }
                Ok((min, max))
            }
        }
    }

    fn clamp_to_world(&self, point: V) -> V {
        let (world_min, world_max) = (self.world_min(), self.world_max());
        let mut clamped = point;
        for axis in 0..V::DIM {
            clamped[axis] = point[axis].clamp(world_min[axis], world_max[axis]);
        }
        clamped
    }

    /// Collect every leaf in the grid box spanned by `min_leaf` and `max_leaf`.
    ///
    /// Steps along neighbor links only; nothing is re-descended. Leaves
    /// are appended in row-major order. An inverted range (min above max
    /// on some axis) yields nothing.
    fn walk_leaf_range(&self, min_leaf: NodeId, max_leaf: NodeId, out: &mut Vec<NodeId>) {
        let (Some(min_grid), Some(max_grid)) = (
            self.nodes[min_leaf.index()].grid_index(),
            self.nodes[max_leaf.index()].grid_index(),
        ) else {
            return;
        };

        let mut span = V::Grid::default();
        for axis in 0..V::DIM {
            match max_grid[axis].checked_sub(min_grid[axis]) {
                Some(steps) => span[axis] = steps,
                None => return,
            }
        }

        self.walk_axis(V::DIM - 1, min_leaf, &span, out);
    }

    /// Walk `span[axis] + 1` leaves along `axis`, recursing into lower axes.
    fn walk_axis(&self, axis: usize, start: NodeId, span: &V::Grid, out: &mut Vec<NodeId>) {
        let mut current = start;
        for step in 0..=span[axis] {
            if axis == 0 {
                out.push(current);
            } else {
                self.walk_axis(axis - 1, current, span, out);
            }

            if step == span[axis] {
                break;
            }
            match self.nodes[current.index()].neighbor(axis, Direction::Positive) {
                Some(next) => current = next,
                None => break,
            }
        }
    }

    // ===== QUERIES =====

    /// Leaves currently occupied by `key`, in row-major order.
    ///
    /// Empty for unregistered keys and for keys not yet updated.
    pub fn occupied_leaves(&self, key: K) -> &[NodeId] {
        self.membership.get(&key).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Every object sharing at least one leaf with `key`.
    ///
    /// The result includes `key` itself whenever it occupies a leaf;
    /// callers wanting only other objects filter it out. Empty if `key`
    /// is unregistered or occupies no leaves.
    pub fn collision_candidates(&self, key: K) -> FxHashSet<K> {
        let mut results = FxHashSet::default();
        self.collision_candidates_into(key, &mut results);
        results
    }

    /// Like [`PartitionTree::collision_candidates`], appending into `results`.
    pub fn collision_candidates_into(&self, key: K, results: &mut FxHashSet<K>) {
        for &leaf in self.occupied_leaves(key) {
            results.extend(self.nodes[leaf.index()].members().copied());
        }
    }

    /// Every object in a leaf overlapped by the box `[min, max]`.
    ///
    /// The box is resolved with the tree's out-of-bounds policy.
    ///
    /// # Errors
    ///
    /// `Error::OutOfWorldBounds` under the `Reject` policy.
    pub fn query_region(&self, min: V, max: V) -> Result<FxHashSet<K>> {
        let (min, max) = self.resolve_corners(min, max)?;
        let mut leaves = Vec::new();
        self.walk_leaf_range(self.descend_to_leaf(min), self.descend_to_leaf(max), &mut leaves);

        let mut results = FxHashSet::default();
        for leaf in leaves {
            results.extend(self.nodes[leaf.index()].members().copied());
        }
        Ok(results)
    }

    /// Every object in the leaf containing `point`.
    ///
    /// # Errors
    ///
    /// `Error::OutOfWorldBounds` if `point` is outside the world.
    pub fn query_point(&self, point: V) -> Result<FxHashSet<K>> {
        let leaf = self.locate(point)?;
        Ok(self.nodes[leaf.index()].members().copied().collect())
    }
}

impl<V: SpatialVector, K: Copy + Eq + Hash + Ord> PartitionTree<V, K> {
    /// Every unordered pair of distinct objects sharing at least one leaf.
    ///
    /// Pairs are canonicalized as `(min, max)`, deduplicated across
    /// leaves, and returned sorted.
    pub fn candidate_pairs(&self) -> Vec<(K, K)> {
        let mut pairs = Vec::new();
        let mut members: Vec<K> = Vec::new();

        for &leaf in &self.leaves {
            let node = &self.nodes[leaf.index()];
            if node.member_count() < 2 {
                continue;
            }
            members.clear();
            members.extend(node.members().copied());
            members.sort_unstable();
            for (i, &a) in members.iter().enumerate() {
                for &b in &members[i + 1..] {
                    pairs.push((a, b));
                }
            }
        }

        pairs.sort_unstable();
        pairs.dedup();
        pairs
    }
}

#[cfg(test)]
#[path = "partition_tree_tests.rs"]
mod tests;
