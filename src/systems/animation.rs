//! Animation system
//!
//! Drives a view once per frame:
//! - Delta time calculation
//! - Committing debounced dimension changes
//! - Advancing rotation angles

use std::time::Instant;
use ndpoly_core::{Animator, DimensionDebouncer, PolytopeView};

use crate::config::AnimationConfig;

/// Longest time step applied in one frame, in seconds
const MAX_DT: f64 = 0.25;

/// Result of an animation update
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct AnimationResult {
    /// Dimension committed this frame, if any
    pub dimension_changed: Option<usize>,
    /// Whether the view needs to be redrawn
    pub redraw: bool,
}

/// Manages the animation loop
///
/// Handles:
/// - Delta time calculation
/// - Debounced dimension changes
/// - Stepping the animator
pub struct AnimationSystem {
    animator: Animator,
    debouncer: DimensionDebouncer,
    last_frame: Instant,
}

impl AnimationSystem {
    /// Create a system for a view currently at `dimension`
    pub fn new(config: &AnimationConfig, dimension: usize) -> Self {
        Self {
            animator: config.to_animator(),
            debouncer: DimensionDebouncer::with_quiet_period(dimension, config.debounce()),
            last_frame: Instant::now(),
        }
    }

    /// The animator driving the angles
    pub fn animator(&self) -> &Animator {
        &self.animator
    }

    /// Mutable access to the animator (pause, resume)
    pub fn animator_mut(&mut self) -> &mut Animator {
        &mut self.animator
    }

    /// Ask for a dimension change; applied once requests settle
    pub fn request_dimension(&mut self, n: usize) {
        self.debouncer.request(n, Instant::now());
    }

    /// Run one frame using the wall clock
    pub fn update(&mut self, view: &mut PolytopeView) -> AnimationResult {
        self.update_at(view, Instant::now())
    }

    /// Run one frame as if the current time were `now`
    pub fn update_at(&mut self, view: &mut PolytopeView, now: Instant) -> AnimationResult {
        // 1. Calculate delta time, capped after stalls
        let dt = now
            .saturating_duration_since(self.last_frame)
            .as_secs_f64()
            .min(MAX_DT);
        self.last_frame = now;

        // 2. Commit a settled dimension request against what the view shows now
        self.debouncer.sync(view.dimension());
        let mut dimension_changed = None;
        if let Some(n) = self.debouncer.poll(now) {
            match view.set_dimension(n) {
                Ok(()) => dimension_changed = Some(n),
                Err(e) => {
                    log::error!("Keeping {}-dimensional view: {}", view.dimension(), e);
                    self.debouncer.sync(view.dimension());
                }
            }
        }

        // 3. Advance angles
        view.advance(&self.animator, dt);

        let redraw = view.is_dirty();
        log::trace!("Frame dt={:.4}s redraw={}", dt, redraw);
        AnimationResult { dimension_changed, redraw }
    }
}
