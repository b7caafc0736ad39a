//! Input mapping from command lines to semantic actions
//!
//! Each line of input is one command:
//!
//! | command            | action                                   |
//! |--------------------|------------------------------------------|
//! | `dim <n>`          | request dimension `n` (debounced)        |
//! | `family <name>`    | switch to simplex, cube or orthoplex     |
//! | `pause` / `resume` | stop or restart the animation            |
//! | `toggle` / `space` | flip between paused and running          |
//! | `reset`            | set every angle back to 0                |
//! | `save <path>`      | write a view snapshot                    |
//! | `load <path>`      | restore a view snapshot                  |
//! | `quit` / `exit`    | stop                                     |

use std::path::PathBuf;
use ndpoly_core::PolytopeFamily;

/// Actions triggered by a command line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputAction {
    /// Request a dimension change
    SetDimension(usize),
    /// Switch polytope family
    SetFamily(PolytopeFamily),
    /// Pause the animation
    Pause,
    /// Resume the animation
    Resume,
    /// Toggle the animation
    TogglePause,
    /// Reset all rotation angles
    ResetRotation,
    /// Save a snapshot to a file
    Save(PathBuf),
    /// Load a snapshot from a file
    Load(PathBuf),
    /// Exit application
    Exit,
}

/// Maps command lines to semantic actions
pub struct CommandMapper;

impl CommandMapper {
    /// Map one line of input to an action
    ///
    /// Returns `Ok(None)` for blank lines and `Err` with a message for
    /// anything unrecognized.
    pub fn map_line(line: &str) -> Result<Option<InputAction>, String> {
        let mut words = line.split_whitespace();
        let Some(command) = words.next() else {
            return Ok(None);
        };
        let argument = words.next();
        if words.next().is_some() {
            return Err(format!("too many arguments in '{}'", line.trim()));
        }

        let action = match (command.to_ascii_lowercase().as_str(), argument) {
            ("dim" | "dimension", Some(n)) => InputAction::SetDimension(
                n.parse().map_err(|_| format!("invalid dimension '{}'", n))?,
            ),
            ("family", Some(name)) => InputAction::SetFamily(name.parse()?),
            ("pause", None) => InputAction::Pause,
            ("resume", None) => InputAction::Resume,
            ("toggle" | "space", None) => InputAction::TogglePause,
            ("reset", None) => InputAction::ResetRotation,
            ("save", Some(path)) => InputAction::Save(PathBuf::from(path)),
            ("load", Some(path)) => InputAction::Load(PathBuf::from(path)),
            ("quit" | "exit", None) => InputAction::Exit,
            _ => return Err(format!("unrecognized command '{}'", line.trim())),
        };
        Ok(Some(action))
    }
}
