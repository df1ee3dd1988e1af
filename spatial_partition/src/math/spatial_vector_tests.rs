use std::cmp::Ordering;
use glam::{Vec2, Vec3};
use super::*;

// ============================================================================
// Dimension constants
// ============================================================================

#[test]
fn test_vec2_dimension_constants() {
    assert_eq!(<Vec2 as SpatialVector>::DIM, 2);
    assert_eq!(<Vec2 as SpatialVector>::CHILD_COUNT, 4);
    assert_eq!(<Vec2 as SpatialVector>::ZERO, Vec2::ZERO);
}

#[test]
fn test_vec3_dimension_constants() {
    assert_eq!(<Vec3 as SpatialVector>::DIM, 3);
    assert_eq!(<Vec3 as SpatialVector>::CHILD_COUNT, 8);
    assert_eq!(<Vec3 as SpatialVector>::ZERO, Vec3::ZERO);
}

#[test]
fn test_splat_and_finite() {
    assert_eq!(<Vec3 as SpatialVector>::splat(2.5), Vec3::new(2.5, 2.5, 2.5));
    assert!(SpatialVector::is_finite(Vec2::new(1.0, -3.0)));
    assert!(!SpatialVector::is_finite(Vec3::new(1.0, f32::NAN, 0.0)));
    assert!(!SpatialVector::is_finite(Vec2::new(f32::INFINITY, 0.0)));
}

#[test]
fn test_grid_is_indexable_per_axis() {
    let mut grid = <Vec3 as SpatialVector>::Grid::default();
    grid[0] = 3;
    grid[2] = 7;
    assert_eq!((grid[0], grid[1], grid[2]), (3, 0, 7));
}

// ============================================================================
// axis_major_cmp
// ============================================================================

#[test]
fn test_axis_major_cmp_last_axis_dominates() {
    // z decides before y and x
    let low_z = Vec3::new(5.0, 5.0, -1.0);
    let high_z = Vec3::new(-5.0, -5.0, 1.0);
    assert_eq!(axis_major_cmp(low_z, high_z), Ordering::Less);
    assert_eq!(axis_major_cmp(high_z, low_z), Ordering::Greater);
}

#[test]
fn test_axis_major_cmp_falls_through_to_first_axis() {
    let a = Vec3::new(-1.0, 2.0, 3.0);
    let b = Vec3::new(1.0, 2.0, 3.0);
    assert_eq!(axis_major_cmp(a, b), Ordering::Less);
    assert_eq!(axis_major_cmp(a, a), Ordering::Equal);
}

#[test]
fn test_axis_major_cmp_2d_row_major() {
    let mut points = vec![
        Vec2::new(1.0, 1.0),
        Vec2::new(-1.0, 1.0),
        Vec2::new(1.0, -1.0),
        Vec2::new(-1.0, -1.0),
    ];
    points.sort_by(|a, b| axis_major_cmp(*a, *b));
    assert_eq!(
        points,
        vec![
            Vec2::new(-1.0, -1.0),
            Vec2::new(1.0, -1.0),
            Vec2::new(-1.0, 1.0),
            Vec2::new(1.0, 1.0),
        ]
    );
}
