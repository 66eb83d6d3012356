//! Sensor subsystem — IR break-beam drivers and the aggregating
//! [`DetectorArray`].
//!
//! The array owns one [`IrBeamSensor`](ir_beam::IrBeamSensor) per chute
//! position and produces a fresh [`DetectorSnapshot`] each time a deposit
//! command is processed.  Snapshots are never persisted.

pub mod ir_beam;

use crate::pins::IR_BEAM_COUNT;
use ir_beam::IrBeamSensor;

/// Point-in-time state of all four detectors.
///
/// `true` = beam interrupted (an object is present at that position).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DetectorSnapshot {
    pub interrupted: [bool; IR_BEAM_COUNT],
}

impl DetectorSnapshot {
    pub fn new(interrupted: [bool; IR_BEAM_COUNT]) -> Self {
        Self { interrupted }
    }

    /// Number of detectors currently reporting an interrupted beam.
    pub fn active_count(&self) -> usize {
        self.interrupted.iter().filter(|&&b| b).count()
    }
}

/// Aggregates the per-position beam sensors.
pub struct DetectorArray {
    beams: [IrBeamSensor; IR_BEAM_COUNT],
}

impl DetectorArray {
    /// Construct from the pin table.  Built once in `main` where
    /// peripheral ownership is established.
    pub fn new(gpios: [i32; IR_BEAM_COUNT]) -> Self {
        Self {
            beams: gpios.map(IrBeamSensor::new),
        }
    }

    /// Sample every beam and return a unified snapshot.
    pub fn read_all(&mut self) -> DetectorSnapshot {
        let mut interrupted = [false; IR_BEAM_COUNT];
        for (slot, beam) in interrupted.iter_mut().zip(self.beams.iter_mut()) {
            *slot = beam.is_interrupted();
        }
        DetectorSnapshot::new(interrupted)
    }
}
