//! Bounds module
//!
//! The bounded-object capability consumed by the tree.
//!
//! The tree never owns objects. It only asks them for a position and a
//! half-extent when the host calls `update`.

mod bounded_object;
mod bounding_box;

pub use bounded_object::BoundedObject;
pub use bounding_box::BoundingBox;
