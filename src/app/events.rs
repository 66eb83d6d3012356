//! Outbound application events.
//!
//! The [`AppService`](super::service::AppService) emits these through the
//! [`EventSink`](super::ports::EventSink) port.  Adapters on the other
//! side decide what to do with them — today they go to the serial log;
//! a telemetry uplink would implement the same trait.  These are
//! observability only and are distinct from the wire protocol responses.

use super::ports::MotorCommand;

/// Structured events emitted by the application core.
#[derive(Debug, Clone)]
pub enum AppEvent {
    /// The application service has started and is polling for commands.
    Started,

    /// A deposit command completed: `active` detectors were interrupted,
    /// awarding `points`.
    DepositScored { active: usize, points: u16 },

    /// A reject command completed.
    Rejected,

    /// The gate motor was pulsed in `command` direction for `duration_ms`
    /// and has been stopped again.
    MotorPulsed {
        command: MotorCommand,
        duration_ms: u32,
    },
}
