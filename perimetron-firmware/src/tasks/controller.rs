//! Controller task
//!
//! The slow loop of the system. Every 500 ms it atomically drains the
//! button event set, dispatches exactly-one-button presses into engine
//! commands, and redraws the status screen for whichever algorithm is
//! currently selected.

use defmt::*;
use embassy_time::{Duration, Ticker};

use perimetron_core::input::{self, ButtonAction};
use perimetron_core::render::{Renderer, DISPLAY_ROWS};
use perimetron_core::series::Algorithm;
use perimetron_core::traits::{DisplayError, TextDisplay};

use crate::channels;
use crate::drivers::UartDisplay;
use crate::shared;

/// Controller loop interval
const CONTROLLER_PERIOD_MS: u64 = 500;

#[embassy_executor::task]
pub async fn controller_task(mut display: UartDisplay) {
    info!("Controller task started");

    if let Err(e) = display.clear() {
        warn!("Display clear failed: {}", e);
    }

    let mut renderer = Renderer::new();
    let mut ticker = Ticker::every(Duration::from_millis(CONTROLLER_PERIOD_MS));

    loop {
        let events = channels::drain_button_events();

        match input::dispatch(events) {
            Some(ButtonAction::Start) => {
                debug!("Start command");
                channels::broadcast_start();
            }
            Some(ButtonAction::Stop) => {
                debug!("Stop command");
                channels::broadcast_stop();
            }
            Some(ButtonAction::Reset) => {
                debug!("Reset command");
                channels::broadcast_reset();
            }
            Some(ButtonAction::SwitchAlgorithm) => {
                let algorithm = channels::toggle_active_algorithm();
                info!("Active algorithm: {}", algorithm);
            }
            None => {
                if !events.is_empty() {
                    debug!("Dropped combined press: {=u8:#x}", events.bits());
                }
            }
        }

        let algorithm = channels::active_algorithm();
        let snapshot = shared::state_for(algorithm).snapshot();
        trace!(
            "{}: running={=bool} accurate={=bool}",
            algorithm,
            snapshot.running,
            snapshot.accuracy_reached
        );

        renderer.render_status(algorithm, snapshot.approximation, snapshot.elapsed_ms);
        if let Err(e) = push_screen(&mut display, &renderer) {
            warn!("Display update failed: {}", e);
        }

        ticker.next().await;
    }
}

fn push_screen(display: &mut UartDisplay, renderer: &Renderer) -> Result<(), DisplayError> {
    display.clear()?;
    for row in 0..DISPLAY_ROWS {
        let line = renderer.screen().line(row);
        if !line.is_empty() {
            display.write_at(row, 0, line)?;
        }
    }
    Ok(())
}
