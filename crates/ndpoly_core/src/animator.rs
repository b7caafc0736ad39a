//! Rotation animation
//!
//! Each plane spins at its own rate so the motion never looks like a single
//! rigid turn: plane `k` (in enumerator order) turns at
//! `base_speed * (1 + k * speed_step)` radians per second.

use crate::RotationState;

/// Advances rotation angles over time
///
/// A paused animator leaves the state untouched, which is how the repeating
/// animation step is cancelled.
#[derive(Clone, Debug, PartialEq)]
pub struct Animator {
    /// Angular speed of the first plane (radians per second)
    pub base_speed: f64,
    /// Extra fraction of `base_speed` added per plane index
    pub speed_step: f64,
    running: bool,
}

impl Default for Animator {
    fn default() -> Self {
        Self::new()
    }
}

impl Animator {
    /// Create a running animator with default speeds
    pub fn new() -> Self {
        Self {
            base_speed: 0.5,
            speed_step: 0.15,
            running: true,
        }
    }

    /// Set the base speed (builder pattern)
    pub fn with_base_speed(mut self, speed: f64) -> Self {
        self.base_speed = speed;
        self
    }

    /// Set the per-plane speed step (builder pattern)
    pub fn with_speed_step(mut self, step: f64) -> Self {
        self.speed_step = step;
        self
    }

    /// Start paused or running (builder pattern)
    pub fn with_running(mut self, running: bool) -> Self {
        self.running = running;
        self
    }

    /// Angular speed of the plane at enumerator index `k`
    #[inline]
    pub fn plane_speed(&self, k: usize) -> f64 {
        self.base_speed * (1.0 + k as f64 * self.speed_step)
    }

    /// Advance every plane by `dt` seconds
    ///
    /// Returns true if any angle was changed.
    pub fn tick(&self, state: &mut RotationState, dt: f64) -> bool {
        if !self.running || dt <= 0.0 || state.is_empty() {
            return false;
        }
        state.advance((0..state.len()).map(|k| self.plane_speed(k) * dt));
        true
    }

    /// Stop advancing angles
    pub fn pause(&mut self) {
        if self.running {
            log::debug!("Animation paused");
        }
        self.running = false;
    }

    /// Resume advancing angles
    pub fn resume(&mut self) {
        if !self.running {
            log::debug!("Animation resumed");
        }
        self.running = true;
    }

    /// Toggle between paused and running, returning the new running state
    pub fn toggle(&mut self) -> bool {
        if self.running {
            self.pause();
        } else {
            self.resume();
        }
        self.running
    }

    /// Whether ticks currently advance angles
    #[inline]
    pub fn is_running(&self) -> bool {
        self.running
    }
}
