/// BoundingBox — validated axis-aligned box stored as center + half-extent.
///
/// This is the crate's own [`BoundedObject`] implementation. Hosts with
/// their own shapes can implement the trait directly; hosts without one
/// typically keep a `BoundingBox` per game object and move it each tick.

use crate::error::Result;
use crate::math::{SpatialVector, AXIS_NAMES};
use crate::partition_bail;
use super::bounded_object::BoundedObject;

/// Axis-aligned bounding box in world space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox<V: SpatialVector> {
    position: V,
    half_extent: V,
}

impl<V: SpatialVector> BoundingBox<V> {
    /// Create a box from its center and half-extent.
    ///
    /// # Errors
    ///
    /// Returns `Error::DegenerateExtent` if the position is not finite, or if
    /// any half-extent component is negative or not finite. Zero components
    /// are accepted (points, segments, flat boxes).
    pub fn new(position: V, half_extent: V) -> Result<Self> {
        Self::validate(position, half_extent)?;
        Ok(Self { position, half_extent })
    }

    /// Create a box from center and half-extent, clamping negative extent
    /// components to zero instead of rejecting them.
    ///
    /// Non-finite input is passed through unchanged; use [`BoundingBox::new`]
    /// when the input is untrusted.
    pub fn clamped(position: V, half_extent: V) -> Self {
        let mut half_extent = half_extent;
        for axis in 0..V::DIM {
            if half_extent[axis] < 0.0 {
                half_extent[axis] = 0.0;
            }
        }
        Self { position, half_extent }
    }

    /// Create a box spanning `[min, max]`.
    ///
    /// # Errors
    ///
    /// Returns `Error::DegenerateExtent` if `min > max` on any axis or a
    /// corner is not finite.
    pub fn from_min_max(min: V, max: V) -> Result<Self> {
        Self::new((min + max) * 0.5, (max - min) * 0.5)
    }

    fn validate(position: V, half_extent: V) -> Result<()> {
        if !position.is_finite() {
            partition_bail!("spatial::BoundingBox", DegenerateExtent,
                "position {:?} is not finite", position);
        }
        for axis in 0..V::DIM {
            let extent = half_extent[axis];
            if !extent.is_finite() || extent < 0.0 {
                partition_bail!("spatial::BoundingBox", DegenerateExtent,
                    "half_extent.{} = {} must be finite and >= 0", AXIS_NAMES[axis], extent);
            }
        }
        Ok(())
    }

    /// Center of the box
    pub fn position(&self) -> V {
        self.position
    }

    /// Half-extent of the box
    pub fn half_extent(&self) -> V {
        self.half_extent
    }

    /// Minimum corner
    pub fn min(&self) -> V {
        self.position - self.half_extent
    }

    /// Maximum corner
    pub fn max(&self) -> V {
        self.position + self.half_extent
    }

    /// Move the box to a new center, keeping its extent.
    pub fn set_position(&mut self, position: V) {
        self.position = position;
    }

    /// Move the box by `offset`.
    pub fn translate(&mut self, offset: V) {
        self.position = self.position + offset;
    }

    /// Test if this box intersects (overlaps or touches) another box.
    pub fn intersects(&self, other: &BoundingBox<V>) -> bool {
        let (a_min, a_max) = (self.min(), self.max());
        let (b_min, b_max) = (other.min(), other.max());
        (0..V::DIM).all(|axis| a_min[axis] <= b_max[axis] && a_max[axis] >= b_min[axis])
    }

    /// Test if a point lies inside the box (faces included).
    pub fn contains_point(&self, point: V) -> bool {
        let (min, max) = (self.min(), self.max());
        (0..V::DIM).all(|axis| min[axis] <= point[axis] && point[axis] <= max[axis])
    }
}

impl<V: SpatialVector> BoundedObject<V> for BoundingBox<V> {
    fn position(&self) -> V {
        self.position
    }

    fn half_extent(&self) -> V {
        self.half_extent
    }
}

#[cfg(test)]
#[path = "bounding_box_tests.rs"]
mod tests;
