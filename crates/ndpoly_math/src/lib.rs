//! n-Dimensional Polytope Mathematics
//!
//! This crate provides the geometry engine for viewing regular polytopes in
//! arbitrary dimension. Everything here is pure: functions read their inputs
//! and allocate fresh outputs.
//!
//! ## Core Types
//!
//! - [`PointN`] - A point with n coordinates
//! - [`Point2`] - A projected 2D point
//! - [`Edge`] - An index pair into a vertex list
//! - [`RotationPlane`] - A pair of coordinate axes spanning a rotation plane
//!
//! ## Geometry
//!
//! - [`PolytopeFamily`] - Simplex, hypercube or orthoplex
//! - [`PolytopeGeometry`] - Vertices and 1-skeleton edges for one family at one dimension
//! - [`Polytope`] - Trait for anything exposing vertices and edges
//!
//! ## Pipeline
//!
//! dimension → [`generate`] → [`scale`] → [`project`] with the angles of [`planes`]

mod point;
pub mod edge;
pub mod family;
pub mod simplex;
pub mod hypercube;
pub mod orthoplex;
pub mod rotation;
pub mod projection;

pub use point::{PointN, Point2};
pub use edge::{Edge, Polytope};
pub use family::{
    generate, PolytopeFamily, PolytopeGeometry, CUBE_DIMENSION_CAP, MAX_DIMENSION, MIN_DIMENSION,
};
pub use rotation::{planes, rotate_point, axis_name, PlaneAngle, RotationPlane};
pub use projection::{max_norm, project, scale, DEFAULT_SCALE, TARGET_RADIUS};
