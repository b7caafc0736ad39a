//! Dimension change debouncing
//!
//! Regenerating a polytope can be expensive (the hypercube grows as `2^n`),
//! so a burst of dimension requests is coalesced into a single change once
//! the requests stop for a quiet period.

use std::time::{Duration, Instant};

/// Default quiet period before a requested dimension is committed
pub const DEFAULT_QUIET_PERIOD: Duration = Duration::from_millis(150);

/// Coalesces rapid dimension requests into one committed change
///
/// Times are passed in explicitly so callers control the clock.
#[derive(Clone, Debug)]
pub struct DimensionDebouncer {
    quiet_period: Duration,
    /// Last requested dimension and when it was requested
    pending: Option<(usize, Instant)>,
    /// Last dimension handed out by `poll`
    committed: usize,
}

impl DimensionDebouncer {
    /// Create a debouncer whose current dimension is `initial`
    pub fn new(initial: usize) -> Self {
        Self::with_quiet_period(initial, DEFAULT_QUIET_PERIOD)
    }

    /// Create a debouncer with a custom quiet period
    pub fn with_quiet_period(initial: usize, quiet_period: Duration) -> Self {
        Self {
            quiet_period,
            pending: None,
            committed: initial,
        }
    }

    /// Record a request for dimension `n` at time `now`
    ///
    /// Restarts the quiet period; only the latest request survives.
    pub fn request(&mut self, n: usize, now: Instant) {
        self.pending = Some((n, now));
    }

    /// Commit the pending request if the quiet period has passed
    ///
    /// Returns the new dimension at most once per burst, and only if it
    /// differs from the last committed dimension.
    pub fn poll(&mut self, now: Instant) -> Option<usize> {
        let (n, at) = self.pending?;
        if now.saturating_duration_since(at) < self.quiet_period {
            return None;
        }
        self.pending = None;
        if n == self.committed {
            return None;
        }
        self.committed = n;
        Some(n)
    }

    /// Record that the dimension became `n` by some other route
    ///
    /// A pending request is kept and compared against `n` when it settles.
    pub fn sync(&mut self, n: usize) {
        self.committed = n;
    }

    /// Drop any pending request
    pub fn cancel(&mut self) {
        self.pending = None;
    }

    /// Whether a request is waiting for its quiet period
    #[inline]
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// The last committed dimension
    #[inline]
    pub fn committed(&self) -> usize {
        self.committed
    }
}
