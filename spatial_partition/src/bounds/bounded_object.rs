/// Anything that can report an axis-aligned box as center + half-extent.
///
/// `min_point` and `max_point` derive from the two required methods but
/// may be overridden by shapes that store their corners directly.
///
/// Implementations are expected to report half-extent components that are
/// finite and `>= 0`. Validation belongs here, at the object boundary;
/// the tree trusts what it is given. [`BoundingBox`](super::BoundingBox)
/// is the validating implementation shipped with the crate.

use crate::math::SpatialVector;

/// Capability of reporting an axis-aligned bounding box.
pub trait BoundedObject<V: SpatialVector> {
    /// Center of the box
    fn position(&self) -> V;

    /// Half of the box size along each axis (all components >= 0)
    fn half_extent(&self) -> V;

    /// Minimum corner: `position - half_extent`
    fn min_point(&self) -> V {
        self.position() - self.half_extent()
    }

    /// Maximum corner: `position + half_extent`
    fn max_point(&self) -> V {
        self.position() + self.half_extent()
    }
}

impl<V: SpatialVector, T: BoundedObject<V> + ?Sized> BoundedObject<V> for &T {
    fn position(&self) -> V {
        (**self).position()
    }

    fn half_extent(&self) -> V {
        (**self).half_extent()
    }

    fn min_point(&self) -> V {
        (**self).min_point()
    }

    fn max_point(&self) -> V {
        (**self).max_point()
    }
}
