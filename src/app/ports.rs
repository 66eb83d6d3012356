//! Port traits — the hexagonal boundary between domain logic and the outside world.
//!
//! ```text
//!   Adapter ──▶ Port trait ──▶ AppService (domain)
//! ```
//!
//! Driven adapters (detectors, motor, clock, serial link, event sinks)
//! implement these traits.  The [`AppService`](super::service::AppService)
//! consumes them via generics, so the domain core never touches hardware
//! directly.

use crate::sensors::DetectorSnapshot;

/// Maximum accepted command-line length in bytes, including nothing beyond
/// the payload (the newline terminator is consumed by the assembler).
/// Generous — the longest valid token is 5 bytes.
pub const MAX_LINE_LEN: usize = 64;

/// A fixed-capacity inbound/outbound line.  No allocation on the serial path.
pub type LineBuf = heapless::String<MAX_LINE_LEN>;

// ───────────────────────────────────────────────────────────────
// Detector port (driven adapter: hardware → domain)
// ───────────────────────────────────────────────────────────────

/// Read-side port: the domain calls this to sample the IR break-beam array.
pub trait DetectorPort {
    /// Read every detector and return a fresh snapshot.
    fn read_detectors(&mut self) -> DetectorSnapshot;
}

// ───────────────────────────────────────────────────────────────
// Motor port (driven adapter: domain → hardware)
// ───────────────────────────────────────────────────────────────

/// Direction commands the domain can issue to the gate motor.
///
/// Forward tips an accepted bottle into the bin; Reverse ejects a
/// rejected object back to the user.  The domain is responsible for
/// timing the hold and always finishes with [`MotorCommand::Stop`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MotorCommand {
    Forward,
    Reverse,
    Stop,
}

/// Write-side port: the domain calls this to command the gate motor.
pub trait MotorPort {
    /// Apply a direction.  Takes effect immediately; no queuing.
    fn set_direction(&mut self, command: MotorCommand);
}

// ───────────────────────────────────────────────────────────────
// Clock port (driven adapter: domain → time source)
// ───────────────────────────────────────────────────────────────

/// Monotonic time and blocking delay.
///
/// Injected rather than called directly so tests can substitute a fake
/// clock and run motor-pulse sequences without wall-clock waits.
pub trait ClockPort {
    /// Milliseconds since boot (monotonic).
    fn uptime_ms(&self) -> u64;

    /// Block the calling task for `ms` milliseconds.
    fn sleep_ms(&mut self, ms: u32);
}

// ───────────────────────────────────────────────────────────────
// Line port (driven adapter: domain ↔ serial link)
// ───────────────────────────────────────────────────────────────

/// Newline-delimited ASCII link to the vision host.
///
/// `read_line` is non-blocking: it returns `Some` only once a complete
/// line has arrived, already stripped of `\r`/`\n` and surrounding
/// whitespace.  `write_line` appends the newline terminator itself.
pub trait LinePort {
    fn read_line(&mut self) -> Option<LineBuf>;
    fn write_line(&mut self, line: &str);
}

// ───────────────────────────────────────────────────────────────
// Event sink port (driven adapter: domain → logging / telemetry)
// ───────────────────────────────────────────────────────────────

/// The domain emits structured [`AppEvent`](super::events::AppEvent)s
/// through this port.  Adapters decide where they go (serial log today;
/// a telemetry uplink would implement the same trait).
pub trait EventSink {
    fn emit(&mut self, event: &super::events::AppEvent);
}
