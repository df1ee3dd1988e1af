use glam::{Vec2, Vec3};
use crate::error::Error;
use super::*;

// ============================================================================
// Construction and validation
// ============================================================================

#[test]
fn test_new_accepts_valid_box() {
    let bb = BoundingBox::new(Vec3::new(1.0, 2.0, 3.0), Vec3::splat(0.5)).unwrap();
    assert_eq!(bb.position(), Vec3::new(1.0, 2.0, 3.0));
    assert_eq!(bb.half_extent(), Vec3::splat(0.5));
}

#[test]
fn test_new_accepts_zero_extent() {
    let point = BoundingBox::new(Vec2::new(3.0, 4.0), Vec2::ZERO).unwrap();
    assert_eq!(point.min(), point.max());
}

#[test]
fn test_new_rejects_negative_extent() {
    let result = BoundingBox::new(Vec3::ZERO, Vec3::new(1.0, -1.0, 1.0));
    match result {
        Err(Error::DegenerateExtent(msg)) => assert!(msg.contains("half_extent.y")),
        other => panic!("expected DegenerateExtent, got {:?}", other),
    }
}

#[test]
fn test_new_rejects_non_finite_input() {
    assert!(matches!(
        BoundingBox::new(Vec3::ZERO, Vec3::new(f32::NAN, 1.0, 1.0)),
        Err(Error::DegenerateExtent(_))
    ));
    assert!(matches!(
        BoundingBox::new(Vec2::new(f32::INFINITY, 0.0), Vec2::ONE),
        Err(Error::DegenerateExtent(_))
    ));
}

#[test]
fn test_clamped_zeroes_negative_components() {
    let bb = BoundingBox::clamped(Vec3::ZERO, Vec3::new(-2.0, 1.0, -0.5));
    assert_eq!(bb.half_extent(), Vec3::new(0.0, 1.0, 0.0));
}

#[test]
fn test_from_min_max() {
    let bb = BoundingBox::from_min_max(Vec3::new(-1.0, 0.0, 2.0), Vec3::new(3.0, 2.0, 2.0)).unwrap();
    assert_eq!(bb.position(), Vec3::new(1.0, 1.0, 2.0));
    assert_eq!(bb.half_extent(), Vec3::new(2.0, 1.0, 0.0));
    assert_eq!(bb.min(), Vec3::new(-1.0, 0.0, 2.0));
    assert_eq!(bb.max(), Vec3::new(3.0, 2.0, 2.0));
}

#[test]
fn test_from_min_max_rejects_inverted_corners() {
    let result = BoundingBox::from_min_max(Vec2::new(1.0, 0.0), Vec2::new(0.0, 1.0));
    assert!(matches!(result, Err(Error::DegenerateExtent(_))));
}

// ============================================================================
// Movement
// ============================================================================

#[test]
fn test_set_position_and_translate() {
    let mut bb = BoundingBox::new(Vec2::ZERO, Vec2::ONE).unwrap();
    bb.set_position(Vec2::new(5.0, 5.0));
    bb.translate(Vec2::new(-1.0, 2.0));
    assert_eq!(bb.position(), Vec2::new(4.0, 7.0));
    assert_eq!(bb.half_extent(), Vec2::ONE);
}

// ============================================================================
// BoundedObject implementation
// ============================================================================

#[test]
fn test_bounded_object_corners() {
    let bb = BoundingBox::new(Vec3::new(1.0, 1.0, 1.0), Vec3::new(1.0, 2.0, 3.0)).unwrap();
    let object: &dyn BoundedObject<Vec3> = &bb;
    assert_eq!(object.min_point(), Vec3::new(0.0, -1.0, -2.0));
    assert_eq!(object.max_point(), Vec3::new(2.0, 3.0, 4.0));
}

#[test]
fn test_bounded_object_through_reference() {
    fn corners<B: BoundedObject<Vec2>>(object: B) -> (Vec2, Vec2) {
        (object.min_point(), object.max_point())
    }

    let bb = BoundingBox::new(Vec2::ZERO, Vec2::splat(2.0)).unwrap();
    assert_eq!(corners(&bb), (Vec2::splat(-2.0), Vec2::splat(2.0)));
}

struct CornerShape {
    min: Vec2,
    max: Vec2,
}

impl BoundedObject<Vec2> for CornerShape {
    fn position(&self) -> Vec2 {
        (self.min + self.max) * 0.5
    }

    fn half_extent(&self) -> Vec2 {
        (self.max - self.min) * 0.5
    }

    fn min_point(&self) -> Vec2 {
        self.min
    }

    fn max_point(&self) -> Vec2 {
        self.max
    }
}

#[test]
fn test_bounded_object_corner_override() {
    let shape = CornerShape { min: Vec2::new(-3.0, 1.0), max: Vec2::new(-1.0, 5.0) };
    assert_eq!(shape.min_point(), Vec2::new(-3.0, 1.0));
    assert_eq!(shape.position(), Vec2::new(-2.0, 3.0));
}

// ============================================================================
// Intersection
// ============================================================================

#[test]
fn test_intersects() {
    let a = BoundingBox::from_min_max(Vec3::splat(-2.0), Vec3::splat(2.0)).unwrap();
    let b = BoundingBox::from_min_max(Vec3::splat(1.0), Vec3::splat(3.0)).unwrap();
    let c = BoundingBox::from_min_max(Vec3::splat(5.0), Vec3::splat(7.0)).unwrap();
    let touching = BoundingBox::from_min_max(Vec3::new(2.0, -1.0, -1.0), Vec3::new(4.0, 1.0, 1.0)).unwrap();

    assert!(a.intersects(&b));
    assert!(!a.intersects(&c));
    assert!(a.intersects(&touching));
}

#[test]
fn test_contains_point() {
    let bb = BoundingBox::new(Vec2::ZERO, Vec2::ONE).unwrap();
    assert!(bb.contains_point(Vec2::new(1.0, -1.0)));
    assert!(!bb.contains_point(Vec2::new(1.01, 0.0)));
}
