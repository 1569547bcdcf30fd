//! Perimetron firmware entry point
//!
//! Wires up the RP2040 peripherals and spawns the task set: one button
//! aggregator, two series engines and the display controller.

#![no_std]
#![no_main]

mod channels;
mod drivers;
mod shared;
mod tasks;

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp::gpio::{Input, Pull};
use embassy_rp::uart::{Config as UartConfig, Uart};
use embassy_time::Timer;
use {defmt_rtt as _, panic_probe as _};

use perimetron_core::config::RunConfig;
use perimetron_core::series::Algorithm;

use crate::drivers::{GpioButtons, UartDisplay};

#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("Perimetron starting");

    let p = embassy_rp::init(Default::default());

    // S1-S4 on GPIO2-5, active low with internal pull-ups
    let buttons = GpioButtons::new(
        Input::new(p.PIN_2, Pull::Up),
        Input::new(p.PIN_3, Pull::Up),
        Input::new(p.PIN_4, Pull::Up),
        Input::new(p.PIN_5, Pull::Up),
    );

    // Display terminal on UART0 (GPIO0 TX / GPIO1 RX)
    let uart = Uart::new_blocking(p.UART0, p.PIN_0, p.PIN_1, UartConfig::default());
    let (tx, _rx) = uart.split();
    let display = UartDisplay::new(tx);

    let config = RunConfig::default();

    spawner.spawn(tasks::button_task(buttons)).unwrap();
    spawner
        .spawn(tasks::engine_task(
            Algorithm::Leibniz,
            &channels::LEIBNIZ_COMMANDS,
            &shared::LEIBNIZ_STATE,
            config,
        ))
        .unwrap();
    spawner
        .spawn(tasks::engine_task(
            Algorithm::Nilkantha,
            &channels::NILKANTHA_COMMANDS,
            &shared::NILKANTHA_STATE,
            config,
        ))
        .unwrap();
    spawner.spawn(tasks::controller_task(display)).unwrap();

    info!("All tasks spawned");

    loop {
        Timer::after_secs(60).await;
        trace!("Main loop heartbeat");
    }
}
