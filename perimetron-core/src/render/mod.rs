//! Screen rendering
//!
//! Builds the 4x20 status screen for the character display. The
//! display itself is a dumb text sink; all layout lives here so it can
//! be tested on the host.

mod screen;
mod status;

pub use screen::Screen;
pub use status::Renderer;

/// Display dimensions (4 rows of 20 characters)
pub const DISPLAY_ROWS: u8 = 4;
pub const DISPLAY_COLS: u8 = 20;
