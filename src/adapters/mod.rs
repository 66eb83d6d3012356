//! Adapters — concrete implementations of the hexagonal port traits.
//!
//! | Adapter    | Implements   | Connects to             |
//! |------------|--------------|-------------------------|
//! | `hardware` | DetectorPort | ESP32 GPIO (IR beams)   |
//! |            | MotorPort    | ESP32 GPIO (H-bridge)   |
//! | `serial`   | LinePort     | UART command link       |
//! | `log_sink` | EventSink    | Serial log output       |
//! | `time`     | ClockPort    | ESP32 system timer      |

pub mod hardware;
pub mod log_sink;
pub mod serial;
pub mod time;
