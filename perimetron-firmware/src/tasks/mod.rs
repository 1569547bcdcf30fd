//! Embassy task entry points

mod buttons;
mod controller;
mod engine;

pub use buttons::button_task;
pub use controller::controller_task;
pub use engine::engine_task;
