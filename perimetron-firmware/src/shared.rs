//! Published series state
//!
//! Each engine task is the single writer of its cell; the controller
//! only loads. The fields are independent scalars with no cross-field
//! atomicity requirement, so Relaxed ordering is enough - a one-tick
//! stale read is invisible on a 2 Hz display.

use portable_atomic::{AtomicBool, AtomicF64, AtomicU64, Ordering};

use perimetron_core::series::{Algorithm, SeriesEngine};

/// Lock-free cell holding the display-relevant fields of one engine
pub struct SharedSeries {
    approximation: AtomicF64,
    running: AtomicBool,
    accuracy_reached: AtomicBool,
    elapsed_ms: AtomicU64,
}

/// Point-in-time copy of a [`SharedSeries`] cell
#[derive(Debug, Clone, Copy, defmt::Format)]
pub struct SeriesSnapshot {
    pub approximation: f64,
    pub running: bool,
    pub accuracy_reached: bool,
    pub elapsed_ms: u64,
}

impl SharedSeries {
    pub const fn new(initial: f64) -> Self {
        Self {
            approximation: AtomicF64::new(initial),
            running: AtomicBool::new(false),
            accuracy_reached: AtomicBool::new(false),
            elapsed_ms: AtomicU64::new(0),
        }
    }

    /// Publish the engine's state after a tick (engine task only)
    pub fn publish(&self, engine: &SeriesEngine) {
        self.approximation
            .store(engine.approximation(), Ordering::Relaxed);
        self.running.store(engine.running(), Ordering::Relaxed);
        self.accuracy_reached
            .store(engine.accuracy_reached(), Ordering::Relaxed);
        self.elapsed_ms.store(engine.elapsed_ticks(), Ordering::Relaxed);
    }

    /// Load a copy of the published state
    pub fn snapshot(&self) -> SeriesSnapshot {
        SeriesSnapshot {
            approximation: self.approximation.load(Ordering::Relaxed),
            running: self.running.load(Ordering::Relaxed),
            accuracy_reached: self.accuracy_reached.load(Ordering::Relaxed),
            elapsed_ms: self.elapsed_ms.load(Ordering::Relaxed),
        }
    }
}

/// Published state, one cell per engine
pub static LEIBNIZ_STATE: SharedSeries = SharedSeries::new(Algorithm::Leibniz.initial_value());
pub static NILKANTHA_STATE: SharedSeries = SharedSeries::new(Algorithm::Nilkantha.initial_value());

/// Cell for the given algorithm
pub fn state_for(algorithm: Algorithm) -> &'static SharedSeries {
    match algorithm {
        Algorithm::Leibniz => &LEIBNIZ_STATE,
        Algorithm::Nilkantha => &NILKANTHA_STATE,
    }
}
