/// Tree configuration — world extent, depth, and out-of-bounds policy.

use crate::error::Result;
use crate::math::{SpatialVector, AXIS_NAMES};
use crate::partition_bail;

/// Largest leaf grid a tree may allocate (`(2^max_depth)^DIM`).
///
/// 2^21 leaves: depth 7 in 3-D, depth 10 in 2-D.
pub const MAX_LEAF_COUNT: usize = 1 << 21;

/// Default half-size of the world along every axis
pub const DEFAULT_HALF_SIZE: f32 = 64.0;

/// Default maximum depth
pub const DEFAULT_MAX_DEPTH: u32 = 4;

/// What `update` and region queries do with corners outside the world.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutOfBoundsPolicy {
    /// Clamp corners into the world bounds before descending.
    ///
    /// An object straddling the world edge occupies the boundary leaves it
    /// overlaps; an object entirely outside collapses onto the nearest
    /// boundary leaves.
    #[default]
    Clamp,

    /// Return `Error::OutOfWorldBounds` and leave the object's previous
    /// leaf membership untouched.
    Reject,
}

/// Partition tree configuration
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TreeConfig<V: SpatialVector> {
    /// Center of the world
    pub center: V,
    /// Half of the world size along each axis (all components > 0)
    pub half_size: V,
    /// Depth of the leaves (root = 0); the grid side is `2^max_depth`
    pub max_depth: u32,
    /// Handling of object corners outside the world
    pub out_of_bounds: OutOfBoundsPolicy,
}

impl<V: SpatialVector> TreeConfig<V> {
    /// Create a configuration with the default (`Clamp`) policy.
    pub fn new(center: V, half_size: V, max_depth: u32) -> Self {
        Self {
            center,
            half_size,
            max_depth,
            out_of_bounds: OutOfBoundsPolicy::default(),
        }
    }

    /// Replace the out-of-bounds policy
    pub fn with_out_of_bounds(mut self, policy: OutOfBoundsPolicy) -> Self {
        self.out_of_bounds = policy;
        self
    }

    /// Leaves along each axis: `2^max_depth` (None if it overflows `u32`)
    pub fn side_length(&self) -> Option<u32> {
        1u32.checked_shl(self.max_depth)
    }

    /// Total leaf count: `side^DIM` (None if it overflows `usize`)
    pub fn leaf_count(&self) -> Option<usize> {
        let side = self.side_length()? as usize;
        side.checked_pow(V::DIM as u32)
    }

    /// Check the configuration before any allocation happens.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidConfiguration` if:
    /// - the center is not finite
    /// - a half-size component is not finite or not strictly positive
    /// - the leaf grid would exceed [`MAX_LEAF_COUNT`]
    /// - a leaf's half-size falls below the f32 spacing at the world corners,
    ///   so neighboring leaf centers would round onto the same value
    pub fn validate(&self) -> Result<()> {
        if !self.center.is_finite() {
            partition_bail!("spatial::TreeConfig", InvalidConfiguration,
                "center {:?} is not finite", self.center);
        }

        for axis in 0..V::DIM {
            let half = self.half_size[axis];
            if !half.is_finite() || half <= 0.0 {
                partition_bail!("spatial::TreeConfig", InvalidConfiguration,
                    "half_size.{} = {} must be finite and > 0", AXIS_NAMES[axis], half);
            }
        }

        let side = match (self.side_length(), self.leaf_count()) {
            (Some(side), Some(count)) if count <= MAX_LEAF_COUNT => side,
            _ => {
                partition_bail!("spatial::TreeConfig", InvalidConfiguration,
                    "max_depth {} yields more than {} leaves in {} dimensions",
                    self.max_depth, MAX_LEAF_COUNT, V::DIM);
            }
        };

        for axis in 0..V::DIM {
            let leaf_half = self.half_size[axis] / side as f32;
            let corner = self.center[axis].abs() + self.half_size[axis];
            let spacing = f32_spacing(corner);
            if leaf_half < spacing {
                partition_bail!("spatial::TreeConfig", InvalidConfiguration,
                    "leaf half-size {} on axis {} is below the f32 spacing {} at world corner {}",
                    leaf_half, AXIS_NAMES[axis], spacing, corner);
            }
        }

        Ok(())
    }
}

/// Distance from `value` to the next larger f32 (infinite past `f32::MAX`)
fn f32_spacing(value: f32) -> f32 {
    let magnitude = value.abs();
    if !magnitude.is_finite() {
        return f32::INFINITY;
    }
    f32::from_bits(magnitude.to_bits() + 1) - magnitude
}

impl<V: SpatialVector> Default for TreeConfig<V> {
    fn default() -> Self {
        Self::new(V::ZERO, V::splat(DEFAULT_HALF_SIZE), DEFAULT_MAX_DEPTH)
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
