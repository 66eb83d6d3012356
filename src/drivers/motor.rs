//! Gate motor driver (L298N H-bridge).
//!
//! Fixed-speed forward/reverse control via three digital pins: ENA
//! enables the bridge, IN1/IN2 select the direction.  ENA is driven as a
//! plain GPIO — the gate runs at full speed for a timed pulse, so no PWM
//! is involved.
//!
//! ## Invariant
//!
//! At most one direction is energised at a time, and `stop()` drives all
//! three pins LOW.  The application service times the hold and always
//! stops the motor before accepting further input; this driver is a dumb
//! actuator.
//!
//! ## Dual-target design
//!
//! On ESP-IDF: drives real GPIO via hw_init helpers.
//! On host/test: tracks state in-memory only.

use crate::app::ports::MotorCommand;
use crate::drivers::hw_init;
use crate::pins;

pub struct MotorDriver {
    current: MotorCommand,
}

impl MotorDriver {
    pub fn new() -> Self {
        Self {
            current: MotorCommand::Stop,
        }
    }

    /// Apply a direction command to the H-bridge.
    pub fn set(&mut self, command: MotorCommand) {
        match command {
            MotorCommand::Forward => {
                hw_init::gpio_write(pins::MOTOR_IN1_GPIO, true);
                hw_init::gpio_write(pins::MOTOR_IN2_GPIO, false);
                hw_init::gpio_write(pins::MOTOR_ENA_GPIO, true);
            }
            MotorCommand::Reverse => {
                hw_init::gpio_write(pins::MOTOR_IN1_GPIO, false);
                hw_init::gpio_write(pins::MOTOR_IN2_GPIO, true);
                hw_init::gpio_write(pins::MOTOR_ENA_GPIO, true);
            }
            MotorCommand::Stop => {
                hw_init::gpio_write(pins::MOTOR_ENA_GPIO, false);
                hw_init::gpio_write(pins::MOTOR_IN1_GPIO, false);
                hw_init::gpio_write(pins::MOTOR_IN2_GPIO, false);
            }
        }
        self.current = command;
    }

    /// Park the gate: all bridge pins LOW.
    pub fn stop(&mut self) {
        self.set(MotorCommand::Stop);
    }

    pub fn current(&self) -> MotorCommand {
        self.current
    }

    pub fn is_running(&self) -> bool {
        self.current != MotorCommand::Stop
    }
}
