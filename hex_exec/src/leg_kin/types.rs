//! Data types exchanged with the leg kinematics solvers

// ---------------------------------------------------------------------------
// IMPORTS
// ---------------------------------------------------------------------------

use nalgebra::Vector3;
use serde::Serialize;

use super::NUM_JOINTS;

// ---------------------------------------------------------------------------
// DATA STRUCTURES
// ---------------------------------------------------------------------------

/// Angles of the three joints of one leg.
///
/// Units: the solver's `AngleUnit`, normalised to the principal range when
///        produced by inverse kinematics.
#[derive(Debug, Default, Clone, Copy, PartialEq, Serialize)]
pub struct JointAngles {
    /// Hip yaw
    pub coxa: f64,
    /// Femur pitch
    pub femur: f64,
    /// Tibia pitch
    pub tibia: f64,
}

/// Positions of every joint along one leg, as computed by forward kinematics.
///
/// Units: meters,
/// Frame: Leg
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LegChain {
    /// The hip, origin of the leg frame.
    pub origin: Vector3<f64>,
    /// End of the coxa, where the femur joint sits.
    pub coxa_end: Vector3<f64>,
    /// End of the femur, where the tibia joint sits.
    pub femur_end: Vector3<f64>,
    /// The foot.
    pub foot: Vector3<f64>,
}

// ---------------------------------------------------------------------------
// IMPLEMENTATIONS
// ---------------------------------------------------------------------------

impl JointAngles {
    pub fn new(coxa: f64, femur: f64, tibia: f64) -> Self {
        Self { coxa, femur, tibia }
    }

    /// Angles in coxa, femur, tibia order.
    pub fn to_array(&self) -> [f64; NUM_JOINTS] {
        [self.coxa, self.femur, self.tibia]
    }
}

impl From<[f64; NUM_JOINTS]> for JointAngles {
    fn from(a: [f64; NUM_JOINTS]) -> Self {
        Self::new(a[0], a[1], a[2])
    }
}

impl LegChain {
    /// Chain points from the hip to the foot.
    pub fn points(&self) -> [Vector3<f64>; 4] {
        [self.origin, self.coxa_end, self.femur_end, self.foot]
    }
}
