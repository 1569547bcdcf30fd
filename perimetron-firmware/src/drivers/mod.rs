//! Hardware edge: button debouncer and display transport

mod buttons;
mod display;

pub use buttons::GpioButtons;
pub use display::UartDisplay;
