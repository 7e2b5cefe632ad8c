//! # Hexapod Executable Parameters
//!
//! This module provide parameters for the hexapod executable.

// ------------------------------------------------------------------------------------------------
// IMPORTS
// ------------------------------------------------------------------------------------------------

use serde::Deserialize;

use crate::leg_kin::RobotParams;

// ------------------------------------------------------------------------------------------------
// STRUCTS
// ------------------------------------------------------------------------------------------------

#[derive(Debug, Clone, Deserialize)]
pub struct HexExecParams {

    /// Target period of one control cycle.
    ///
    /// Units: seconds
    pub cycle_period_s: f64,

    /// Number of full gait cycles per second.
    ///
    /// Units: hertz
    pub gait_frequency_hz: f64,

    /// Neutral stance of the robot.
    pub robot: RobotParams,
}

impl HexExecParams {
    /// Returns a description of the first invalid parameter, if any.
    pub fn check(&self) -> Option<String> {
        if !self.cycle_period_s.is_finite() || self.cycle_period_s <= 0.0 {
            return Some(format!(
                "cycle_period_s must be positive and finite, found {}", self.cycle_period_s
            ));
        }
        if !self.gait_frequency_hz.is_finite() || self.gait_frequency_hz < 0.0 {
            return Some(format!(
                "gait_frequency_hz must be positive or zero, found {}", self.gait_frequency_hz
            ));
        }

        None
    }
}
