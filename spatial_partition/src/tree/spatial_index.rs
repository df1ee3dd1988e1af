/// Broad-phase index abstraction.
///
/// A SpatialIndex tracks keyed objects by their bounding boxes and answers
/// "which objects might touch this one" queries. [`PartitionTree`] is the
/// crate's implementation; hosts can provide others (uniform grids, sweep
/// and prune) behind the same seam.
///
/// Ownership: the host creates and owns the index and passes it by
/// reference to whatever system moves objects each tick.

use std::hash::Hash;
use crate::bounds::BoundedObject;
use crate::error::Result;
use crate::math::SpatialVector;
use super::partition_tree::PartitionTree;

/// Trait for broad-phase spatial indexing of keyed objects.
pub trait SpatialIndex<V: SpatialVector>: Send + Sync {
    /// Object handle type
    type Key: Copy + Eq + Hash;

    /// Start tracking `key`. Returns false if it was already tracked.
    fn register(&mut self, key: Self::Key) -> bool;

    /// Stop tracking `key`. Returns false if it was not tracked.
    fn unregister(&mut self, key: Self::Key) -> bool;

    /// Re-index `key` after its bounding box changed.
    fn update(&mut self, key: Self::Key, object: &dyn BoundedObject<V>) -> Result<()>;

    /// Append every object that might overlap `key` (including `key`).
    /// Each candidate is appended once.
    fn query_candidates(&self, key: Self::Key, results: &mut Vec<Self::Key>);

    /// Stop tracking every object.
    fn clear(&mut self);
}

impl<V, K> SpatialIndex<V> for PartitionTree<V, K>
where
    V: SpatialVector,
    K: Copy + Eq + Hash + Send + Sync,
{
    type Key = K;

    fn register(&mut self, key: K) -> bool {
        PartitionTree::register(self, key)
    }

    fn unregister(&mut self, key: K) -> bool {
        PartitionTree::unregister(self, key)
    }

    fn update(&mut self, key: K, object: &dyn BoundedObject<V>) -> Result<()> {
        PartitionTree::update(self, key, object)
    }

    fn query_candidates(&self, key: K, results: &mut Vec<K>) {
        results.extend(self.collision_candidates(key));
    }

    fn clear(&mut self) {
        PartitionTree::clear(self);
    }
}
