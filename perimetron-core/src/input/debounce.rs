//! Press debouncing and classification
//!
//! Count-based debouncer for a single button. Feed it one raw sample
//! per poll; on release it classifies the press by how many samples it
//! was held and latches the result until taken.

use super::PressKind;

/// Debounce and press-classification state for one button
pub struct PressDebouncer {
    /// Consecutive pressed samples before a press counts at all
    debounce_samples: u16,
    /// Held samples at or above which a press classifies as long
    long_press_samples: u16,
    held: u16,
    latched: PressKind,
}

impl PressDebouncer {
    pub const fn new(debounce_samples: u16, long_press_samples: u16) -> Self {
        Self {
            debounce_samples,
            long_press_samples,
            held: 0,
            latched: PressKind::None,
        }
    }

    /// Feed one raw sample (`true` = pressed)
    ///
    /// Classification happens on the release edge; a press still held
    /// has no classification yet.
    pub fn update(&mut self, pressed: bool) {
        if pressed {
            self.held = self.held.saturating_add(1);
        } else {
            if self.held >= self.long_press_samples {
                self.latched = PressKind::Long;
            } else if self.held >= self.debounce_samples {
                self.latched = PressKind::Short;
            }
            self.held = 0;
        }
    }

    /// Take the classification latched since the last call and clear it
    pub fn take_press(&mut self) -> PressKind {
        core::mem::replace(&mut self.latched, PressKind::None)
    }
}
