//! Commands passed into GaitCtrl

// ---------------------------------------------------------------------------
// IMPORTS
// ---------------------------------------------------------------------------

use std::str::FromStr;

use crate::leg_kin::Sign;

// ---------------------------------------------------------------------------
// DATA STRUCTURES
// ---------------------------------------------------------------------------

/// A command to execute a particular gait
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GaitCmd {

    /// The type of gait to perform
    pub gait_type: GaitType,

    /// Speed of the body along its X axis. Used for Walk and Holonomic.
    ///
    /// Units: meters/second
    pub speed_x: Option<f64>,

    /// Speed of the body along its Y axis. Used for Walk and Holonomic.
    ///
    /// Units: meters/second
    pub speed_y: Option<f64>,

    /// Turn made by each rotation step. Used for Rotate and Holonomic.
    ///
    /// Units: radians
    pub omega: Option<f64>,

    /// Direction of the turn.
    pub direction: Sign,
}

// ---------------------------------------------------------------------------
// ENUMERATIONS
// ---------------------------------------------------------------------------

/// Possible gaits to be executed by GaitCtrl.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GaitType {
    /// Stop - hold the neutral stance.
    Stop,
    /// Walk - translate the body without turning.
    Walk,
    /// Rotate - turn the body on the spot.
    Rotate,
    /// Holonomic - blend of walk and rotate.
    Holonomic,
}

// ---------------------------------------------------------------------------
// IMPLEMENTATIONS
// ---------------------------------------------------------------------------

impl GaitCmd {

    /// Hold the neutral stance.
    pub fn stop() -> Self {
        Self {
            gait_type: GaitType::Stop,
            speed_x: None,
            speed_y: None,
            omega: None,
            direction: Sign::Positive,
        }
    }

    /// Translate at the given speed.
    pub fn walk(speed_x: f64, speed_y: f64) -> Self {
        Self {
            gait_type: GaitType::Walk,
            speed_x: Some(speed_x),
            speed_y: Some(speed_y),
            ..Self::stop()
        }
    }

    /// Turn on the spot.
    pub fn rotate(omega: f64, direction: Sign) -> Self {
        Self {
            gait_type: GaitType::Rotate,
            omega: Some(omega),
            direction,
            ..Self::stop()
        }
    }

    /// Translate and turn at the same time.
    pub fn holonomic(speed_x: f64, speed_y: f64, omega: f64, direction: Sign) -> Self {
        Self {
            gait_type: GaitType::Holonomic,
            speed_x: Some(speed_x),
            speed_y: Some(speed_y),
            omega: Some(omega),
            direction,
        }
    }

    /// Determine if the command is valid (i.e. contains all required, finite
    /// data).
    pub fn is_valid(&self) -> bool {
        let finite = |v: Option<f64>| v.map_or(false, f64::is_finite);

        match self.gait_type {
            GaitType::Stop => true,
            GaitType::Walk => finite(self.speed_x) && finite(self.speed_y),
            GaitType::Rotate => finite(self.omega),
            GaitType::Holonomic =>
                finite(self.speed_x) && finite(self.speed_y) && finite(self.omega),
        }
    }
}

impl FromStr for GaitType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "stop" => Ok(GaitType::Stop),
            "walk" => Ok(GaitType::Walk),
            "rotate" => Ok(GaitType::Rotate),
            "holonomic" => Ok(GaitType::Holonomic),
            other => Err(format!(
                "Unknown gait \"{}\", expected one of stop, walk, rotate, holonomic", other
            )),
        }
    }
}
