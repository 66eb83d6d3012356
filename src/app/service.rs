//! Application service — the hexagonal core.
//!
//! [`AppService`] implements the whole command cycle: recognize a line,
//! score the detector array, pulse the gate motor, answer the host.
//! All I/O flows through port traits injected at call sites, making the
//! entire service testable with mock adapters.
//!
//! ```text
//!  DetectorPort ──▶ ┌────────────────────────┐ ──▶ MotorPort
//!      LinePort ──▶ │       AppService        │ ──▶ LinePort
//!                   │  dispatch · score · pulse│ ──▶ EventSink
//!                   └────────────────────────┘
//! ```
//!
//! Command handling is synchronous and blocking by design: the motor
//! pulse holds the task until the gate has moved, so a second command
//! can never overlap the single physical motor.

use core::fmt::Write as _;

use log::{debug, info};

use crate::config::SystemConfig;

use super::commands::AppCommand;
use super::events::AppEvent;
use super::ports::{ClockPort, DetectorPort, EventSink, LinePort, MotorCommand, MotorPort};

/// Response line terminating every handled command.
pub const RESP_DONE: &str = "SELESAI";
/// Prefix of the points report sent after a deposit, e.g. `poin:15`.
pub const RESP_POINTS_PREFIX: &str = "poin:";

// ───────────────────────────────────────────────────────────────
// AppService
// ───────────────────────────────────────────────────────────────

/// The application service orchestrates all domain logic.
pub struct AppService {
    config: SystemConfig,
    commands_handled: u64,
}

impl AppService {
    /// Construct the service from configuration.
    pub fn new(config: SystemConfig) -> Self {
        Self {
            config,
            commands_handled: 0,
        }
    }

    // ── Lifecycle ─────────────────────────────────────────────

    /// Announce readiness.  The service is stateless between commands,
    /// so there is nothing else to initialize.
    pub fn start(&mut self, sink: &mut impl EventSink) {
        sink.emit(&AppEvent::Started);
        info!("AppService started, awaiting commands");
    }

    // ── Command handling ──────────────────────────────────────

    /// Process one inbound line to completion.
    ///
    /// Unrecognized lines are a silent no-op on the wire — no response,
    /// no motor command.  The link carries garbled lines while the host
    /// boots, so this is protocol, not an omission.
    ///
    /// The `hw` parameter satisfies **both** [`DetectorPort`] and
    /// [`MotorPort`] — this avoids a double mutable borrow while keeping
    /// the port boundary explicit.
    pub fn dispatch(
        &mut self,
        line: &str,
        hw: &mut (impl DetectorPort + MotorPort),
        clock: &mut impl ClockPort,
        out: &mut impl LinePort,
        sink: &mut impl EventSink,
    ) {
        match AppCommand::parse(line) {
            Some(AppCommand::Deposit) => self.process_deposit(hw, clock, out, sink),
            Some(AppCommand::Reject) => self.process_reject(hw, clock, out, sink),
            None => {
                if !line.is_empty() {
                    debug!("ignoring unrecognized line ({} bytes)", line.len());
                }
            }
        }
    }

    /// Deposit: sample the detector array, award points from the table,
    /// tip the gate forward, report the score.
    ///
    /// Counts of 0 or 1 score zero points — treated as "no valid bottle",
    /// not as an error.  The gate still cycles so the chute is cleared.
    pub fn process_deposit(
        &mut self,
        hw: &mut (impl DetectorPort + MotorPort),
        clock: &mut impl ClockPort,
        out: &mut impl LinePort,
        sink: &mut impl EventSink,
    ) {
        let snapshot = hw.read_detectors();
        let active = snapshot.active_count();
        let points = self.config.score_for_count(active);
        info!("deposit: {}/4 beams interrupted -> {} points", active, points);

        self.pulse(MotorCommand::Forward, hw, clock, sink);

        let mut report = heapless::String::<32>::new();
        // Writing an integer into a 32-byte buffer cannot fail.
        let _ = write!(report, "{}{}", RESP_POINTS_PREFIX, points);
        out.write_line(&report);
        out.write_line(RESP_DONE);

        sink.emit(&AppEvent::DepositScored { active, points });
        self.commands_handled += 1;
    }

    /// Reject: tip the gate in reverse to eject the object.  No detector
    /// read, no scoring.
    pub fn process_reject(
        &mut self,
        hw: &mut impl MotorPort,
        clock: &mut impl ClockPort,
        out: &mut impl LinePort,
        sink: &mut impl EventSink,
    ) {
        info!("reject: ejecting object");

        self.pulse(MotorCommand::Reverse, hw, clock, sink);

        out.write_line(RESP_DONE);

        sink.emit(&AppEvent::Rejected);
        self.commands_handled += 1;
    }

    // ── Queries ───────────────────────────────────────────────

    /// Total deposit/reject commands completed since startup.
    pub fn commands_handled(&self) -> u64 {
        self.commands_handled
    }

    /// Clone of the live configuration.
    pub fn current_config(&self) -> SystemConfig {
        self.config.clone()
    }

    // ── Internal ──────────────────────────────────────────────

    /// Timed, blocking motor activation followed by an automatic stop.
    ///
    /// Invariant: the motor is back in [`MotorCommand::Stop`] before this
    /// returns, so the poll loop never accepts input with the gate moving.
    fn pulse(
        &self,
        command: MotorCommand,
        hw: &mut impl MotorPort,
        clock: &mut impl ClockPort,
        sink: &mut impl EventSink,
    ) {
        let duration_ms = self.config.pulse_duration_ms;
        hw.set_direction(command);
        clock.sleep_ms(duration_ms);
        hw.set_direction(MotorCommand::Stop);
        sink.emit(&AppEvent::MotorPulsed {
            command,
            duration_ms,
        });
    }
}
