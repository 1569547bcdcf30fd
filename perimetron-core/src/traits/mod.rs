//! Hardware collaborator traits
//!
//! The physical display and the debounced button bank are external
//! collaborators; these traits are the seam the firmware implements
//! at the hardware edge.

mod buttons;
mod display;

pub use buttons::ButtonInput;
pub use display::{DisplayError, TextDisplay};
