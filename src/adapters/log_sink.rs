//! Log-based event sink adapter.
//!
//! Implements [`EventSink`] by writing structured application events to
//! the logger (UART / USB-CDC console in production).  A telemetry
//! uplink adapter would implement the same trait.

use log::info;

use crate::app::events::AppEvent;
use crate::app::ports::EventSink;

/// Adapter that logs every [`AppEvent`] to the serial console.
pub struct LogEventSink;

impl LogEventSink {
    pub fn new() -> Self {
        Self
    }
}

impl EventSink for LogEventSink {
    fn emit(&mut self, event: &AppEvent) {
        match event {
            AppEvent::Started => {
                info!("START | polling for commands");
            }
            AppEvent::DepositScored { active, points } => {
                info!("SCORE | beams={}/4 points={}", active, points);
            }
            AppEvent::Rejected => {
                info!("REJECT | object ejected");
            }
            AppEvent::MotorPulsed {
                command,
                duration_ms,
            } => {
                info!("MOTOR | {:?} pulse {}ms -> Stop", command, duration_ms);
            }
        }
    }
}
