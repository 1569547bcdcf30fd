//! Text screen buffer

use heapless::String;

use super::{DISPLAY_COLS, DISPLAY_ROWS};

/// A screen buffer that can be pushed to the display
pub struct Screen {
    /// Lines of text (4 rows max)
    lines: [String<20>; DISPLAY_ROWS as usize],
}

impl Screen {
    /// Create a new empty screen
    pub const fn new() -> Self {
        Self {
            lines: [String::new(), String::new(), String::new(), String::new()],
        }
    }

    /// Clear the screen
    pub fn clear(&mut self) {
        for line in &mut self.lines {
            line.clear();
        }
    }

    /// Set text at a specific row, truncated to the display width
    ///
    /// Truncation is per character, never through the middle of a
    /// multi-byte sequence; characters that no longer fit the row
    /// buffer are dropped.
    pub fn set_line(&mut self, row: u8, text: &str) {
        if let Some(line) = self.lines.get_mut(row as usize) {
            line.clear();
            for c in text.chars().take(DISPLAY_COLS as usize) {
                if line.push(c).is_err() {
                    break;
                }
            }
        }
    }

    /// Get a line of text
    pub fn line(&self, row: u8) -> &str {
        if (row as usize) < self.lines.len() {
            self.lines[row as usize].as_str()
        } else {
            ""
        }
    }
}

impl Default for Screen {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_and_get_lines() {
        let mut screen = Screen::new();
        screen.set_line(0, "hello");
        screen.set_line(3, "world");
        assert_eq!(screen.line(0), "hello");
        assert_eq!(screen.line(1), "");
        assert_eq!(screen.line(3), "world");
    }

    #[test]
    fn test_long_lines_are_truncated() {
        let mut screen = Screen::new();
        screen.set_line(1, "a line much longer than twenty columns");
        assert_eq!(screen.line(1).len(), 20);
        assert_eq!(screen.line(1), "a line much longer t");
    }

    #[test]
    fn test_truncation_respects_char_boundaries() {
        let mut screen = Screen::new();
        // Two-byte characters: ten fill the 20-byte row exactly
        screen.set_line(0, "ππππππππππππ");
        assert_eq!(screen.line(0), "ππππππππππ");

        // A multi-byte character straddling the width limit is dropped
        screen.set_line(1, "aaaaaaaaaaaaaaaaaaaé");
        assert_eq!(screen.line(1), "aaaaaaaaaaaaaaaaaaa");
    }

    #[test]
    fn test_out_of_range_rows_are_ignored() {
        let mut screen = Screen::new();
        screen.set_line(4, "off screen");
        assert_eq!(screen.line(4), "");
    }

    #[test]
    fn test_clear() {
        let mut screen = Screen::new();
        screen.set_line(2, "text");
        screen.clear();
        assert_eq!(screen.line(2), "");
    }
}
