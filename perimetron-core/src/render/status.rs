//! Status screen renderer

use core::fmt::Write;

use heapless::String;

use super::Screen;
use crate::series::Algorithm;

/// Bottom-row command legend: start, stop, reset, change algorithm
const LEGEND: &str = "#STR #STP #RST #CALG";

/// Renderer for the live status screen
pub struct Renderer {
    screen: Screen,
}

impl Renderer {
    pub const fn new() -> Self {
        Self {
            screen: Screen::new(),
        }
    }

    /// Get the current screen buffer
    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    /// Render the active engine's state
    ///
    /// Row 0: algorithm name, row 1: approximation to 8 decimal places,
    /// row 2: elapsed running time, row 3: command legend.
    pub fn render_status(&mut self, algorithm: Algorithm, approximation: f64, elapsed_ms: u64) {
        self.screen.clear();
        self.screen.set_line(0, algorithm.display_name());

        let mut line: String<20> = String::new();
        let _ = write!(line, "PI: {:.8}", approximation);
        self.screen.set_line(1, &line);

        line.clear();
        let _ = write!(line, "Time: {} ms", elapsed_ms);
        self.screen.set_line(2, &line);

        self.screen.set_line(3, LEGEND);
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_rows() {
        let mut renderer = Renderer::new();
        renderer.render_status(Algorithm::Leibniz, core::f64::consts::PI, 1234);

        assert_eq!(renderer.screen().line(0), "Leibniz Series");
        assert_eq!(renderer.screen().line(1), "PI: 3.14159265");
        assert_eq!(renderer.screen().line(2), "Time: 1234 ms");
        assert_eq!(renderer.screen().line(3), "#STR #STP #RST #CALG");
    }

    #[test]
    fn test_nilkantha_title_row() {
        let mut renderer = Renderer::new();
        renderer.render_status(Algorithm::Nilkantha, 3.0, 0);
        assert_eq!(renderer.screen().line(0), "Nilkantha Method");
        assert_eq!(renderer.screen().line(1), "PI: 3.00000000");
        assert_eq!(renderer.screen().line(2), "Time: 0 ms");
    }

    #[test]
    fn test_rows_fit_display_width() {
        let mut renderer = Renderer::new();
        renderer.render_status(Algorithm::Nilkantha, -3.999999995, u64::MAX);
        for row in 0..4 {
            assert!(renderer.screen().line(row).len() <= 20);
        }
    }

    #[test]
    fn test_rerender_replaces_previous_state() {
        let mut renderer = Renderer::new();
        renderer.render_status(Algorithm::Leibniz, 0.0, 99);
        renderer.render_status(Algorithm::Nilkantha, 3.0, 0);
        assert_eq!(renderer.screen().line(0), "Nilkantha Method");
        assert_eq!(renderer.screen().line(2), "Time: 0 ms");
    }
}
