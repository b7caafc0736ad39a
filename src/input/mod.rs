//! Input handling module
//!
//! Provides input mapping from text commands on stdin to semantic actions.

mod command_mapper;

pub use command_mapper::{CommandMapper, InputAction};
