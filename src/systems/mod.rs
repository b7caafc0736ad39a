//! Application systems
//!
//! Modular systems extracted from main.rs for better organization and testability.

mod animation;
mod output;

pub use animation::{AnimationResult, AnimationSystem};
pub use output::FrameWriter;
