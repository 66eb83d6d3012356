//! Infrared break-beam detector (TCRT5000-style receiver module).
//!
//! The receiver output is active LOW: the line is pulled LOW while the
//! beam is interrupted by an object, HIGH while the path is clear.  Each
//! detector is wired to a GPIO configured as a pull-up input.
//!
//! ## Dual-target design
//!
//! On ESP-IDF: reads real GPIO levels via hw_init helpers.
//! On host/test: reads per-position sim atomics (default: beam clear).

#[cfg(not(target_os = "espidf"))]
use core::sync::atomic::{AtomicBool, Ordering};

#[cfg(target_os = "espidf")]
use crate::drivers::hw_init;
#[cfg(not(target_os = "espidf"))]
use crate::pins;

#[cfg(not(target_os = "espidf"))]
static SIM_INTERRUPTED: [AtomicBool; pins::IR_BEAM_COUNT] = [
    AtomicBool::new(false),
    AtomicBool::new(false),
    AtomicBool::new(false),
    AtomicBool::new(false),
];

/// Drive the simulated beam state for the detector at chute `position`.
#[cfg(not(target_os = "espidf"))]
pub fn sim_set_beam(position: usize, interrupted: bool) {
    SIM_INTERRUPTED[position].store(interrupted, Ordering::Relaxed);
}

pub struct IrBeamSensor {
    gpio: i32,
}

impl IrBeamSensor {
    pub fn new(gpio: i32) -> Self {
        Self { gpio }
    }

    /// `true` while the beam is interrupted (object present).
    pub fn is_interrupted(&mut self) -> bool {
        // Active LOW: a LOW level means the beam is blocked.
        !self.read_gpio()
    }

    #[cfg(target_os = "espidf")]
    fn read_gpio(&self) -> bool {
        hw_init::gpio_read(self.gpio)
    }

    #[cfg(not(target_os = "espidf"))]
    fn read_gpio(&self) -> bool {
        let position = pins::IR_BEAM_GPIOS
            .iter()
            .position(|&g| g == self.gpio)
            .unwrap_or(0);
        !SIM_INTERRUPTED[position].load(Ordering::Relaxed)
    }
}
