//! ndpoly - n-dimensional polytope viewer
//!
//! Library half of the `ndpoly` binary: configuration loading and the
//! systems that drive a [`ndpoly_core::PolytopeView`] frame by frame.

pub mod config;
pub mod input;
pub mod systems;
