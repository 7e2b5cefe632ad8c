//! Parameters structure for LegKin

// ---------------------------------------------------------------------------
// IMPORTS
// ---------------------------------------------------------------------------

use nalgebra::Vector3;
use serde::Deserialize;
use std::f64::consts::PI;

use super::{LegId, LegKinError, NUM_JOINTS, NUM_LEGS};

// ---------------------------------------------------------------------------
// DATA STRUCTURES
// ---------------------------------------------------------------------------

/// Geometry of one leg, shared by all six legs of the robot.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct Params {

    // ---- GEOMETRY ----

    /// Length of the coxa, the link between the hip yaw and femur joints.
    ///
    /// Units: `length_unit`
    pub coxa_length: f64,

    /// Length of the femur, between the femur and tibia joints.
    ///
    /// Units: `length_unit`
    pub femur_length: f64,

    /// Length of the tibia, between the tibia joint and the foot.
    ///
    /// Units: `length_unit`
    pub tibia_length: f64,

    /// Yaw of each leg's mounting on the body, legs in index order.
    ///
    /// Units: radians
    pub leg_mount_angle_rad: [f64; NUM_LEGS],

    // ---- CONVENTIONS ----

    /// Direction each motor turns for a positive joint angle, in coxa, femur,
    /// tibia order.
    pub joint_sign: [Sign; NUM_JOINTS],

    /// Offset between the femur motor zero and the geometric femur zero.
    ///
    /// Units: radians
    pub femur_correction_rad: f64,

    /// Offset between the tibia motor zero and the geometric tibia zero.
    ///
    /// Units: radians
    pub tibia_correction_rad: f64,

    /// Sign of the vertical axis seen by the femur elevation term.
    pub z_direction: Sign,

    /// Unit of joint angles given to and returned by the solvers.
    #[serde(default)]
    pub angle_unit: AngleUnit,

    /// Unit of the link lengths. Foot positions are always in meters.
    #[serde(default)]
    pub length_unit: LengthUnit,
}

/// Body parameters supplied by the caller for each evaluation.
#[derive(Debug, Default, Clone, Copy, Deserialize)]
pub struct RobotParams {
    /// Neutral foot position of each leg in the plane of its own frame.
    ///
    /// Units: meters,
    /// Frame: Leg
    pub leg_offset_m: [[f64; 2]; NUM_LEGS],

    /// Height of the feet relative to the hips in the neutral stance.
    ///
    /// Units: meters
    pub body_z_m: f64,
}

// ---------------------------------------------------------------------------
// ENUMERATIONS
// ---------------------------------------------------------------------------

/// A sign convention, either +1 or -1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sign {
    Positive,
    Negative,
}

/// Unit used for joint angles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AngleUnit {
    Radians,
    Degrees,
}

/// Unit used for the link lengths.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LengthUnit {
    Meters,
    Millimeters,
}

// ---------------------------------------------------------------------------
// IMPLEMENTATIONS
// ---------------------------------------------------------------------------

impl Params {
    /// Check that the geometry describes a physical leg.
    pub fn validate(&self) -> Result<(), LegKinError> {
        if !self.coxa_length.is_finite() || self.coxa_length < 0.0 {
            return Err(LegKinError::InvalidParams(format!(
                "coxa_length must be positive or zero, found {}", self.coxa_length
            )));
        }

        let lengths = [
            ("femur_length", self.femur_length),
            ("tibia_length", self.tibia_length),
        ];

        for (name, length) in lengths.iter() {
            if !length.is_finite() || *length <= 0.0 {
                return Err(LegKinError::InvalidParams(format!(
                    "{} must be strictly positive, found {}", name, length
                )));
            }
        }

        let angles = [self.femur_correction_rad, self.tibia_correction_rad];
        if angles.iter().chain(self.leg_mount_angle_rad.iter()).any(|a| !a.is_finite()) {
            return Err(LegKinError::InvalidParams(
                "correction and mount angles must be finite".into()
            ));
        }

        Ok(())
    }

    /// Mounting yaw of the given leg.
    ///
    /// Units: radians
    pub fn mount_angle_rad(&self, leg: LegId) -> f64 {
        self.leg_mount_angle_rad[leg.index()]
    }
}

impl RobotParams {
    /// Neutral foot position of a leg, built from its planar offset and the
    /// body height.
    ///
    /// Units: meters,
    /// Frame: Leg
    pub fn leg_offset(&self, leg: LegId) -> Vector3<f64> {
        let [x, y] = self.leg_offset_m[leg.index()];
        Vector3::new(x, y, self.body_z_m)
    }
}

impl Sign {
    /// Numerical value of the sign.
    pub fn value(self) -> f64 {
        match self {
            Sign::Positive => 1.0,
            Sign::Negative => -1.0,
        }
    }
}

impl Default for Sign {
    fn default() -> Self {
        Sign::Positive
    }
}

impl std::ops::Neg for Sign {
    type Output = Sign;

    fn neg(self) -> Self::Output {
        match self {
            Sign::Positive => Sign::Negative,
            Sign::Negative => Sign::Positive,
        }
    }
}

impl AngleUnit {
    /// Half a turn expressed in this unit.
    pub fn half_turn(self) -> f64 {
        match self {
            AngleUnit::Radians => PI,
            AngleUnit::Degrees => 180.0,
        }
    }

    /// Convert an angle in this unit to radians.
    pub fn to_rad(self, angle: f64) -> f64 {
        match self {
            AngleUnit::Radians => angle,
            AngleUnit::Degrees => angle.to_radians(),
        }
    }

    /// Convert an angle in radians to this unit.
    pub fn from_rad(self, angle_rad: f64) -> f64 {
        match self {
            AngleUnit::Radians => angle_rad,
            AngleUnit::Degrees => angle_rad.to_degrees(),
        }
    }
}

impl Default for AngleUnit {
    fn default() -> Self {
        AngleUnit::Radians
    }
}

impl LengthUnit {
    /// Number of link length units in one meter.
    pub fn per_meter(self) -> f64 {
        match self {
            LengthUnit::Meters => 1.0,
            LengthUnit::Millimeters => 1000.0,
        }
    }
}

impl Default for LengthUnit {
    fn default() -> Self {
        LengthUnit::Meters
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_load_shipped_params() {
        let params: Params = util::params::parse(
            include_str!("../../../params/leg_kin.toml")
        ).unwrap();
        params.validate().unwrap();

        assert_eq!(params.angle_unit, AngleUnit::Radians);
        assert_eq!(params.length_unit, LengthUnit::Meters);

        let robot: RobotParams = util::params::parse(
            "leg_offset_m = [[0.17, 0.0], [0.17, 0.0], [0.17, 0.0], \
             [0.17, 0.0], [0.17, 0.0], [0.17, 0.01]]\nbody_z_m = -0.06\n"
        ).unwrap();
        assert_eq!(
            robot.leg_offset(LegId::ALL[5]),
            Vector3::new(0.17, 0.01, -0.06)
        );
    }

    #[test]
    fn test_validate() {
        let mut params = Params {
            coxa_length: 0.05,
            femur_length: 0.06,
            tibia_length: 0.1,
            ..Default::default()
        };
        assert!(params.validate().is_ok());

        params.tibia_length = 0.0;
        assert!(matches!(params.validate(), Err(LegKinError::InvalidParams(_))));

        params.tibia_length = 0.1;
        params.leg_mount_angle_rad[2] = f64::NAN;
        assert!(matches!(params.validate(), Err(LegKinError::InvalidParams(_))));
    }

    #[test]
    fn test_units() {
        assert_eq!(AngleUnit::Degrees.from_rad(PI), 180.0);
        assert_eq!(AngleUnit::Radians.to_rad(1.5), 1.5);
        assert_eq!(LengthUnit::Millimeters.per_meter(), 1000.0);
        assert_eq!(-Sign::Positive, Sign::Negative);
        assert_eq!(Sign::Negative.value(), -1.0);
    }
}
