//! Button driver trait

use crate::input::{Button, PressKind};

/// Trait for the debounced button bank
///
/// `poll` samples the raw inputs once; the aggregator calls it at a
/// fixed frequency. `press_kind` returns the classification latched
/// since the last call and clears it (press edges are one-shot).
pub trait ButtonInput {
    /// Sample the raw button inputs once
    fn poll(&mut self);

    /// Take the pending press classification for one button
    fn press_kind(&mut self, button: Button) -> PressKind;
}
