//! Time keeping
//!
//! - `FixedTimestep` turns variable frame deltas into whole simulation steps
//! - `RecurringTimer` is a cancellable repeating deadline, polled each tick

use serde::{Deserialize, Serialize};

/// Slack absorbed when comparing accumulated time against a deadline, so a
/// deadline that lands exactly on a tick boundary fires on that tick.
pub const TIMER_EPSILON: f64 = 1e-6;

/// Accumulator that converts frame time into fixed simulation steps
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FixedTimestep {
    step: f32,
    max_substeps: u32,
    max_frame_dt: f32,
    accumulator: f32,
}

impl FixedTimestep {
    pub fn new(step: f32, max_substeps: u32, max_frame_dt: f32) -> Self {
        Self {
            step,
            max_substeps,
            max_frame_dt,
            accumulator: 0.0,
        }
    }

    pub fn step(&self) -> f32 {
        self.step
    }

    /// Feed one frame's elapsed time and return how many steps to run
    ///
    /// Long frames are clamped and at most `max_substeps` steps are produced;
    /// time beyond that budget is dropped rather than carried forward.
    pub fn advance(&mut self, frame_dt: f32) -> u32 {
        let dt = frame_dt.clamp(0.0, self.max_frame_dt);
        self.accumulator += dt;

        let mut substeps = 0;
        while self.accumulator >= self.step && substeps < self.max_substeps {
            self.accumulator -= self.step;
            substeps += 1;
        }
        if substeps == self.max_substeps {
            self.accumulator = self.accumulator.min(self.step);
        }
        substeps
    }
}

/// Repeating deadline that can be stopped
///
/// The first fire happens one full interval after `start`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecurringTimer {
    interval: f64,
    elapsed: f64,
    running: bool,
    fired: u32,
}

impl RecurringTimer {
    pub fn new(interval_secs: f64) -> Self {
        Self {
            interval: interval_secs,
            elapsed: 0.0,
            running: false,
            fired: 0,
        }
    }

    pub fn start(&mut self) {
        self.elapsed = 0.0;
        self.fired = 0;
        self.running = true;
    }

    /// Stop the timer. Further `advance` calls never fire.
    pub fn cancel(&mut self) {
        self.running = false;
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Total fires since the last `start`
    pub fn fired(&self) -> u32 {
        self.fired
    }

    /// Advance by `dt` seconds and return how many deadlines passed
    ///
    /// Non-finite or negative steps are ignored. The count saturates at
    /// `u32::MAX`.
    pub fn advance(&mut self, dt: f64) -> u32 {
        if !self.running || self.interval <= 0.0 || !dt.is_finite() || dt <= 0.0 {
            return 0;
        }
        self.elapsed += dt;

        let passed = ((self.elapsed + TIMER_EPSILON) / self.interval).floor();
        if passed < 1.0 {
            return 0;
        }
        self.elapsed =
            (self.elapsed - passed * self.interval).clamp(-TIMER_EPSILON, self.interval);
        let fires = passed as u32;
        self.fired = self.fired.saturating_add(fires);
        fires
    }
}
