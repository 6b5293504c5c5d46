//! Time control and search limits for chess engines.
//!
//! The search is single-threaded, so time is a plain [`Deadline`] value
//! threaded through the recursion and polled every [`NODE_CHECK_INTERVAL`]
//! nodes. Once it passes, the in-flight call chain unwinds with whatever it
//! has; there is no way to interrupt a node mid-evaluation.

use std::time::{Duration, Instant};

/// How often to check the clock (in nodes). Checking every node is wasteful.
pub const NODE_CHECK_INTERVAL: u64 = 1024;

/// Search limits that control when an engine should stop searching.
///
/// Engines should respect both depth and time limits, stopping when either
/// is reached.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchLimits {
    /// Maximum search depth in plies (half-moves)
    pub depth: u8,
    /// Maximum time allowed for this move (None = infinite)
    pub move_time: Option<Duration>,
}

impl SearchLimits {
    /// Create limits with only depth constraint (no time limit).
    pub fn depth(depth: u8) -> Self {
        Self {
            depth,
            move_time: None,
        }
    }

    /// Create limits with both depth and time constraints.
    pub fn depth_and_time(depth: u8, move_time: Duration) -> Self {
        Self {
            depth,
            move_time: Some(move_time),
        }
    }

    /// Create limits with only time constraint (infinite depth).
    pub fn time(move_time: Duration) -> Self {
        Self {
            depth: u8::MAX,
            move_time: Some(move_time),
        }
    }

    /// Start the clock: the deadline runs from this call.
    pub fn start(&self) -> Deadline {
        match self.move_time {
            Some(t) => Deadline::from_now(t),
            None => Deadline::none(),
        }
    }
}

impl Default for SearchLimits {
    fn default() -> Self {
        Self::depth(4)
    }
}

/// Wall-clock point after which a search should wind down.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Deadline {
    started: Instant,
    expiry: Option<Instant>,
}

impl Deadline {
    /// A deadline that never expires.
    pub fn none() -> Self {
        Self {
            started: Instant::now(),
            expiry: None,
        }
    }

    pub fn from_now(budget: Duration) -> Self {
        let started = Instant::now();
        Self {
            started,
            expiry: started.checked_add(budget),
        }
    }

    pub fn from_millis(millis: u64) -> Self {
        Self::from_now(Duration::from_millis(millis))
    }

    /// Reads the clock.
    pub fn expired(&self) -> bool {
        self.expiry.is_some_and(|e| Instant::now() >= e)
    }

    /// Node-count gated clock check: only reads the clock when `nodes` hits
    /// the polling cadence.
    #[inline]
    pub fn poll(&self, nodes: u64) -> bool {
        self.expiry.is_some() && nodes.is_multiple_of(NODE_CHECK_INTERVAL) && self.expired()
    }

    /// Get elapsed time since search started.
    pub fn elapsed(&self) -> Duration {
        self.started.elapsed()
    }
}

impl Default for Deadline {
    fn default() -> Self {
        Self::none()
    }
}

#[cfg(test)]
#[path = "time_control_tests.rs"]
mod time_control_tests;
