//! Hardware adapter — bridges real peripherals to domain port traits.
//!
//! Owns the [`DetectorArray`] and the gate [`MotorDriver`], exposing them
//! through [`DetectorPort`] and [`MotorPort`].  Together with the serial
//! adapter this is the only code that touches actual hardware.  On
//! non-espidf targets the underlying drivers use cfg-gated simulation
//! stubs.

use crate::app::ports::{DetectorPort, MotorCommand, MotorPort};
use crate::drivers::motor::MotorDriver;
use crate::sensors::{DetectorArray, DetectorSnapshot};

/// Concrete adapter that combines detectors and motor behind port traits.
pub struct HardwareAdapter {
    detectors: DetectorArray,
    motor: MotorDriver,
}

impl HardwareAdapter {
    pub fn new(detectors: DetectorArray, motor: MotorDriver) -> Self {
        Self { detectors, motor }
    }

    /// Park all actuators — called once at boot so the gate starts at rest.
    pub fn all_off(&mut self) {
        self.motor.stop();
    }
}

// ── DetectorPort implementation ───────────────────────────────

impl DetectorPort for HardwareAdapter {
    fn read_detectors(&mut self) -> DetectorSnapshot {
        self.detectors.read_all()
    }
}

// ── MotorPort implementation ──────────────────────────────────

impl MotorPort for HardwareAdapter {
    fn set_direction(&mut self, command: MotorCommand) {
        self.motor.set(command);
    }
}
