//! Mock adapters for integration tests.
//!
//! Record every motor command, response line, and sleep request so tests
//! can assert on the full command history without touching real GPIO or
//! waiting out wall-clock motor pulses.

use botolbox::app::events::AppEvent;
use botolbox::app::ports::{
    ClockPort, DetectorPort, EventSink, LineBuf, LinePort, MotorCommand, MotorPort,
};
use botolbox::sensors::DetectorSnapshot;
use std::collections::VecDeque;

// ── MockHardware ──────────────────────────────────────────────

/// Detector states are scripted; motor commands are recorded in order.
pub struct MockHardware {
    pub beams: [bool; 4],
    pub motor_calls: Vec<MotorCommand>,
}

#[allow(dead_code)]
impl MockHardware {
    pub fn new() -> Self {
        Self {
            beams: [false; 4],
            motor_calls: Vec::new(),
        }
    }

    pub fn with_beams(beams: [bool; 4]) -> Self {
        Self {
            beams,
            motor_calls: Vec::new(),
        }
    }

    /// The motor state after the last recorded command.
    pub fn final_motor_state(&self) -> MotorCommand {
        self.motor_calls
            .last()
            .copied()
            .unwrap_or(MotorCommand::Stop)
    }
}

impl Default for MockHardware {
    fn default() -> Self {
        Self::new()
    }
}

impl DetectorPort for MockHardware {
    fn read_detectors(&mut self) -> DetectorSnapshot {
        DetectorSnapshot::new(self.beams)
    }
}

impl MotorPort for MockHardware {
    fn set_direction(&mut self, command: MotorCommand) {
        self.motor_calls.push(command);
    }
}

// ── FakeClock ─────────────────────────────────────────────────

/// Records sleep requests and advances a virtual uptime instead of
/// blocking the test thread.
pub struct FakeClock {
    pub now_ms: u64,
    pub sleeps: Vec<u32>,
}

#[allow(dead_code)]
impl FakeClock {
    pub fn new() -> Self {
        Self {
            now_ms: 0,
            sleeps: Vec::new(),
        }
    }

    pub fn total_slept_ms(&self) -> u64 {
        self.sleeps.iter().map(|&ms| ms as u64).sum()
    }
}

impl Default for FakeClock {
    fn default() -> Self {
        Self::new()
    }
}

impl ClockPort for FakeClock {
    fn uptime_ms(&self) -> u64 {
        self.now_ms
    }

    fn sleep_ms(&mut self, ms: u32) {
        self.sleeps.push(ms);
        self.now_ms += ms as u64;
    }
}

// ── ScriptedLink ──────────────────────────────────────────────

/// Scripted inbound lines; captured outbound lines.
pub struct ScriptedLink {
    inbound: VecDeque<LineBuf>,
    pub sent: Vec<String>,
}

#[allow(dead_code)]
impl ScriptedLink {
    pub fn new() -> Self {
        Self {
            inbound: VecDeque::new(),
            sent: Vec::new(),
        }
    }

    pub fn queue_line(&mut self, line: &str) {
        self.inbound
            .push_back(LineBuf::try_from(line).expect("test line fits the buffer"));
    }
}

impl Default for ScriptedLink {
    fn default() -> Self {
        Self::new()
    }
}

impl LinePort for ScriptedLink {
    fn read_line(&mut self) -> Option<LineBuf> {
        self.inbound.pop_front()
    }

    fn write_line(&mut self, line: &str) {
        self.sent.push(line.to_string());
    }
}

// ── RecordingSink ─────────────────────────────────────────────

/// Captures emitted events as debug strings for coarse assertions.
pub struct RecordingSink {
    pub events: Vec<String>,
}

#[allow(dead_code)]
impl RecordingSink {
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }
}

impl Default for RecordingSink {
    fn default() -> Self {
        Self::new()
    }
}

impl EventSink for RecordingSink {
    fn emit(&mut self, event: &AppEvent) {
        self.events.push(format!("{:?}", event));
    }
}
