//! GPIO button bank
//!
//! Samples four active-low inputs at the aggregator rate and feeds
//! each one through a [`PressDebouncer`]. Thresholds are in samples at
//! the 50 Hz poll rate.

use embassy_rp::gpio::Input;

use perimetron_core::input::{Button, PressDebouncer, PressKind};
use perimetron_core::traits::ButtonInput;

/// Consecutive pressed samples before a press counts at all (debounce)
const DEBOUNCE_SAMPLES: u16 = 2;

/// Pressed samples at or above which a press classifies as long
/// (1 s at the 50 Hz poll rate)
const LONG_PRESS_SAMPLES: u16 = 50;

/// Debounced bank of four active-low GPIO buttons
pub struct GpioButtons {
    pins: [Input<'static>; 4],
    debounce: [PressDebouncer; 4],
}

impl GpioButtons {
    pub fn new(
        s1: Input<'static>,
        s2: Input<'static>,
        s3: Input<'static>,
        s4: Input<'static>,
    ) -> Self {
        Self {
            pins: [s1, s2, s3, s4],
            debounce: core::array::from_fn(|_| {
                PressDebouncer::new(DEBOUNCE_SAMPLES, LONG_PRESS_SAMPLES)
            }),
        }
    }
}

impl ButtonInput for GpioButtons {
    fn poll(&mut self) {
        for (pin, debouncer) in self.pins.iter().zip(self.debounce.iter_mut()) {
            debouncer.update(pin.is_low());
        }
    }

    fn press_kind(&mut self, button: Button) -> PressKind {
        self.debounce[button.index()].take_press()
    }
}
