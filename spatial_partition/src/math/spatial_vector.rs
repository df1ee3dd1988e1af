/// SpatialVector — the per-dimension vector contract used by the tree.
///
/// Implemented for `glam::Vec2` (D = 2, 4 children per node) and
/// `glam::Vec3` (D = 3, 8 children per node). Everything dimension
/// specific (axis count, branching factor, integer grid coordinate type)
/// is expressed through this trait so the tree itself is written once.

use std::cmp::Ordering;
use std::fmt::Debug;
use std::ops::{Add, Index, IndexMut, Mul, Sub};
use glam::{UVec2, UVec3, Vec2, Vec3};

/// Human-readable axis names, used in diagnostics.
pub const AXIS_NAMES: [char; 3] = ['x', 'y', 'z'];

/// A D-dimensional real vector usable as a point or extent in the tree.
///
/// Components are addressed by axis index `0..DIM` through `Index`/`IndexMut`.
pub trait SpatialVector:
    Copy
    + Debug
    + PartialEq
    + Send
    + Sync
    + 'static
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<f32, Output = Self>
    + Index<usize, Output = f32>
    + IndexMut<usize>
{
    /// Number of axes (2 or 3)
    const DIM: usize;

    /// Children per internal node: 2^DIM
    const CHILD_COUNT: usize = 1 << Self::DIM;

    /// The zero vector
    const ZERO: Self;

    /// Integer grid coordinate with the same axis count (`UVec2` / `UVec3`)
    type Grid: Copy
        + Debug
        + Default
        + PartialEq
        + Eq
        + Send
        + Sync
        + Index<usize, Output = u32>
        + IndexMut<usize>;

    /// Vector with every component set to `value`
    fn splat(value: f32) -> Self;

    /// True if no component is NaN or infinite
    fn is_finite(self) -> bool;
}

impl SpatialVector for Vec2 {
    const DIM: usize = 2;
    const ZERO: Self = Vec2::ZERO;
    type Grid = UVec2;

    fn splat(value: f32) -> Self {
        Vec2::splat(value)
    }

    fn is_finite(self) -> bool {
        Vec2::is_finite(self)
    }
}

impl SpatialVector for Vec3 {
    const DIM: usize = 3;
    const ZERO: Self = Vec3::ZERO;
    type Grid = UVec3;

    fn splat(value: f32) -> Self {
        Vec3::splat(value)
    }

    fn is_finite(self) -> bool {
        Vec3::is_finite(self)
    }
}

/// Compare two points in row-major order: last axis slowest, first axis fastest.
///
/// For 3-D this compares z, then y, then x. Sorting leaf centers with this
/// ordering lays the leaves out as a dense grid where stepping along axis
/// `a` is a fixed stride of `side^a` in the sorted array.
pub fn axis_major_cmp<V: SpatialVector>(a: V, b: V) -> Ordering {
    for axis in (0..V::DIM).rev() {
        match a[axis].total_cmp(&b[axis]) {
            Ordering::Equal => continue,
            other => return other,
        }
    }
    Ordering::Equal
}

#[cfg(test)]
#[path = "spatial_vector_tests.rs"]
mod tests;
