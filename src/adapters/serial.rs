//! Serial line adapter — [`LinePort`] over the UART command link.
//!
//! Splits the raw byte stream into newline-delimited commands.  The
//! framing logic lives in the pure [`LineAssembler`] so it can be tested
//! on the host byte-by-byte, independent of the UART stub.
//!
//! Lines are trimmed at the read site (`\r` and surrounding whitespace),
//! matching what the legacy deposit firmware did with its serial input;
//! the command parser itself stays an exact matcher.

use crate::app::ports::{LineBuf, LinePort, MAX_LINE_LEN};
use crate::drivers::uart::UartLink;

// ───────────────────────────────────────────────────────────────
// LineAssembler (pure)
// ───────────────────────────────────────────────────────────────

/// Accumulates bytes into newline-terminated lines.
///
/// A line longer than [`MAX_LINE_LEN`] is discarded up to its newline:
/// it could never match a command token, and the protocol ignores
/// garbage silently.  Non-UTF-8 input (line noise) is likewise dropped.
pub struct LineAssembler {
    buf: heapless::Vec<u8, MAX_LINE_LEN>,
    overflowed: bool,
}

impl LineAssembler {
    pub fn new() -> Self {
        Self {
            buf: heapless::Vec::new(),
            overflowed: false,
        }
    }

    /// Feed one byte.  Returns a complete trimmed line when `byte` is the
    /// newline terminator, `None` otherwise.
    pub fn push(&mut self, byte: u8) -> Option<LineBuf> {
        if byte == b'\n' {
            let overflowed = core::mem::take(&mut self.overflowed);
            let line = Self::finish(&self.buf, overflowed);
            self.buf.clear();
            return line;
        }

        if self.buf.push(byte).is_err() {
            self.overflowed = true;
            self.buf.clear();
        }
        None
    }

    fn finish(buf: &[u8], overflowed: bool) -> Option<LineBuf> {
        if overflowed {
            return None;
        }
        let trimmed = core::str::from_utf8(buf).ok()?.trim();
        // Cannot overflow: trimming never grows the line.
        LineBuf::try_from(trimmed).ok()
    }
}

impl Default for LineAssembler {
    fn default() -> Self {
        Self::new()
    }
}

// ───────────────────────────────────────────────────────────────
// SerialLineAdapter
// ───────────────────────────────────────────────────────────────

/// How many complete lines can sit between two polls.  The protocol is
/// strictly one command in flight, so 4 is already generous.
const PENDING_LINES: usize = 4;

/// [`LinePort`] implementation over the UART driver.
pub struct SerialLineAdapter {
    uart: UartLink,
    assembler: LineAssembler,
    pending: heapless::Deque<LineBuf, PENDING_LINES>,
}

impl SerialLineAdapter {
    pub fn new(uart: UartLink) -> Self {
        Self {
            uart,
            assembler: LineAssembler::new(),
            pending: heapless::Deque::new(),
        }
    }
}

impl LinePort for SerialLineAdapter {
    fn read_line(&mut self) -> Option<LineBuf> {
        if let Some(line) = self.pending.pop_front() {
            return Some(line);
        }

        let mut chunk = [0u8; 32];
        loop {
            let n = self.uart.read_bytes(&mut chunk);
            if n == 0 {
                break;
            }
            for &byte in &chunk[..n] {
                if let Some(line) = self.assembler.push(byte) {
                    // A full queue means the host is violating the
                    // one-command-at-a-time protocol; drop the excess.
                    let _ = self.pending.push_back(line);
                }
            }
        }

        self.pending.pop_front()
    }

    fn write_line(&mut self, line: &str) {
        self.uart.write_bytes(line.as_bytes());
        self.uart.write_bytes(b"\n");
    }
}
