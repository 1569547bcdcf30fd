//! Input aggregator task
//!
//! Polls the debounced button bank at 50 Hz and posts short-press
//! edges into the shared event set. Highest-priority periodic work in
//! the system: it must not miss button edges, so it owns no state
//! beyond the driver's debounce registers.

use defmt::*;
use embassy_time::{Duration, Ticker};

use perimetron_core::input::{Button, ButtonEventSet, PressKind};
use perimetron_core::traits::ButtonInput;

use crate::channels;
use crate::drivers::GpioButtons;

/// 50 Hz poll rate
const BUTTON_POLL_MS: u64 = 20;

#[embassy_executor::task]
pub async fn button_task(mut buttons: GpioButtons) {
    info!("Button task started");

    let mut ticker = Ticker::every(Duration::from_millis(BUTTON_POLL_MS));

    loop {
        buttons.poll();

        let mut events = ButtonEventSet::new();
        for button in Button::ALL {
            // Long presses are classified but currently unused
            if buttons.press_kind(button) == PressKind::Short {
                events.set(button);
            }
        }

        if !events.is_empty() {
            debug!("Button events: {=u8:#x}", events.bits());
            channels::post_button_events(events);
        }

        ticker.next().await;
    }
}
