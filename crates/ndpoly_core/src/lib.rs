//! View orchestration for the ndpoly viewer
//!
//! This crate sits between the pure geometry of `ndpoly_math` and whatever
//! draws the result:
//!
//! - [`RotationState`] - Per-plane angles that survive dimension changes
//! - [`Animator`] - Advances every plane's angle over time; can be paused
//! - [`DimensionDebouncer`] - Coalesces rapid dimension requests
//! - [`PolytopeView`] - Owns the current geometry, scale and angles, produces [`Frame`]s
//! - [`ViewSnapshot`] - Saveable view state
//! - [`ViewError`] - Errors raised by view operations

mod error;
mod rotation_state;
mod animator;
mod debounce;
mod view;
mod snapshot;

pub use error::ViewError;
pub use rotation_state::{normalize_angle, RotationState};
pub use animator::Animator;
pub use debounce::{DimensionDebouncer, DEFAULT_QUIET_PERIOD};
pub use view::{DirtyFlags, Frame, PolytopeView};
pub use snapshot::ViewSnapshot;

// Re-export commonly used types from ndpoly_math for convenience
pub use ndpoly_math::{
    Edge, PlaneAngle, Point2, PointN, Polytope, PolytopeFamily, PolytopeGeometry, RotationPlane,
};
pub use ndpoly_math::{CUBE_DIMENSION_CAP, MAX_DIMENSION, MIN_DIMENSION};
