//! Series engine state and step logic
//!
//! One engine per algorithm. The engine owns all of its state; the
//! firmware publishes read-only copies of the display-relevant fields
//! after each tick. Commands are edge-triggered and consumed before
//! the arithmetic step, so a reset takes effect the same tick it is
//! requested, never one tick late.

use super::{Algorithm, ACCURACY_THRESHOLD, TARGET};
use crate::config::TimerResetPolicy;

/// Commands pending for one engine tick
///
/// Each flag is the result of a non-blocking poll-and-clear on the
/// corresponding one-shot signal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PendingCommands {
    pub start: bool,
    pub stop: bool,
    pub reset: bool,
}

impl PendingCommands {
    pub const NONE: Self = Self {
        start: false,
        stop: false,
        reset: false,
    };
    pub const START: Self = Self {
        start: true,
        stop: false,
        reset: false,
    };
    pub const STOP: Self = Self {
        start: false,
        stop: true,
        reset: false,
    };
    pub const RESET: Self = Self {
        start: false,
        stop: false,
        reset: true,
    };
}

/// State of one series computation
///
/// Invariants:
/// - `iteration` strictly increases while running
/// - `sign` alternates every step
/// - `accuracy_reached` latches until the next reset
/// - `elapsed_ticks` freezes when `accuracy_reached` flips true
#[derive(Debug, Clone)]
pub struct SeriesEngine {
    algorithm: Algorithm,
    timer_reset: TimerResetPolicy,
    approximation: f64,
    iteration: u32,
    sign: f64,
    running: bool,
    accuracy_reached: bool,
    start_tick: u64,
    elapsed_ticks: u64,
}

impl SeriesEngine {
    /// Create an engine with the default timer-reset policy
    pub const fn new(algorithm: Algorithm) -> Self {
        Self::with_policy(algorithm, TimerResetPolicy::OnReset)
    }

    /// Create an engine with an explicit timer-reset policy
    pub const fn with_policy(algorithm: Algorithm, timer_reset: TimerResetPolicy) -> Self {
        Self {
            algorithm,
            timer_reset,
            approximation: algorithm.initial_value(),
            iteration: 0,
            sign: 1.0,
            running: false,
            accuracy_reached: false,
            start_tick: 0,
            elapsed_ticks: 0,
        }
    }

    /// Advance the engine by one scheduling tick
    ///
    /// `now` is the scheduler's monotonic tick count in milliseconds.
    pub fn tick(&mut self, pending: PendingCommands, now: u64) {
        // Commands first, in start/stop/reset order: reset wins over a
        // simultaneous start, and all take effect before the arithmetic
        // step below.
        if pending.start {
            self.running = true;
            self.start_tick = now;
        }

        if pending.stop {
            self.running = false;
        }

        if pending.reset {
            self.approximation = self.algorithm.initial_value();
            self.iteration = 0;
            self.sign = 1.0;
            self.running = false;
            self.accuracy_reached = false;
            if self.timer_reset == TimerResetPolicy::OnReset {
                self.start_tick = now;
                self.elapsed_ticks = 0;
            }
        }

        if self.running {
            self.approximation += self.algorithm.term(self.iteration, self.sign);

            if !self.accuracy_reached {
                let error = self.approximation - TARGET;
                let error = if error < 0.0 { -error } else { error };
                if error < ACCURACY_THRESHOLD {
                    self.accuracy_reached = true;
                    self.elapsed_ticks = now.saturating_sub(self.start_tick);
                }
            }

            self.sign = -self.sign;
            self.iteration += 1;
        }

        if self.running && !self.accuracy_reached {
            self.elapsed_ticks = now.saturating_sub(self.start_tick);
        }
    }

    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    pub fn approximation(&self) -> f64 {
        self.approximation
    }

    pub fn iteration(&self) -> u32 {
        self.iteration
    }

    /// Current term sign, +1.0 or -1.0
    pub fn sign(&self) -> f64 {
        self.sign
    }

    pub fn running(&self) -> bool {
        self.running
    }

    pub fn accuracy_reached(&self) -> bool {
        self.accuracy_reached
    }

    /// Elapsed running time in ticks (ms); frozen once accuracy is reached
    pub fn elapsed_ticks(&self) -> u64 {
        self.elapsed_ticks
    }
}
