//! Leg kinematics module
//!
//! Converts between the joint angles of one three-jointed leg and the
//! position of its foot. All solvers are pure functions of an immutable
//! [`Params`] value, so one [`LegKin`] can be shared by every leg and by any
//! number of threads.

// ---------------------------------------------------------------------------
// MODULES
// ---------------------------------------------------------------------------

mod calc_dk;
mod calc_ik;
mod leg_id;
mod maths;
mod params;
mod solver;
mod types;

// ---------------------------------------------------------------------------
// IMPORTS
// ---------------------------------------------------------------------------

// Internal
pub use leg_id::*;
pub use maths::*;
pub use params::*;
pub use solver::*;
pub use types::*;

// ---------------------------------------------------------------------------
// CONSTANTS
// ---------------------------------------------------------------------------

/// The number of legs on the robot.
pub const NUM_LEGS: usize = 6;

/// The number of joints in each leg (coxa, femur, tibia).
pub const NUM_JOINTS: usize = 3;

/// Smallest distance between the coxa end and the foot target for which the
/// femur elevation can be solved.
///
/// Units: link length unit
pub const MIN_REACH: f64 = 1e-9;

// ---------------------------------------------------------------------------
// ENUMERATIONS
// ---------------------------------------------------------------------------

/// Possible errors that can occur during leg kinematics calculations.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum LegKinError {
    #[error("Foot target is {reach} from the end of the coxa, too close to solve the femur elevation")]
    DegenerateReach { reach: f64 },

    #[error("Leg number {0} is invalid, expected a number between 1 and 6")]
    InvalidLegNumber(usize),

    #[error("Invalid leg kinematics parameters: {0}")]
    InvalidParams(String),
}
