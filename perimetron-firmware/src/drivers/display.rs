//! UART text display
//!
//! The display side is a dumb serial terminal: clear and cursor
//! addressing use VT100 escape sequences, text is plain ASCII. Writes
//! are blocking; at 115200 baud a full screen refresh is well under
//! one controller period.

use core::fmt::Write;

use embassy_rp::peripherals::UART0;
use embassy_rp::uart::{Blocking, UartTx};
use heapless::String;

use perimetron_core::traits::{DisplayError, TextDisplay};

pub struct UartDisplay {
    tx: UartTx<'static, UART0, Blocking>,
}

impl UartDisplay {
    pub fn new(tx: UartTx<'static, UART0, Blocking>) -> Self {
        Self { tx }
    }

    fn send(&mut self, bytes: &[u8]) -> Result<(), DisplayError> {
        self.tx.blocking_write(bytes).map_err(|_| DisplayError::Io)
    }
}

impl TextDisplay for UartDisplay {
    fn clear(&mut self) -> Result<(), DisplayError> {
        // ED (erase display) + cursor home
        self.send(b"\x1b[2J\x1b[H")
    }

    fn write_at(&mut self, row: u8, col: u8, text: &str) -> Result<(), DisplayError> {
        // CUP is 1-based
        let mut cup: String<12> = String::new();
        let _ = write!(cup, "\x1b[{};{}H", row + 1, col + 1);
        self.send(cup.as_bytes())?;
        self.send(text.as_bytes())
    }
}
