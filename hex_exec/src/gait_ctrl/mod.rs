//! Gait control module
//!
//! Generates the periodic foot trajectories of a tripod gait and converts them
//! into joint angles for all six legs. Three gaits are available: translation
//! (walk), rotation on the spot, and a holonomic blend of both.
//!
//! The gait functions on [`GaitGenerator`] are pure functions of the phase,
//! the command and the parameters. [`GaitCtrl`] wraps them as a cyclic module
//! which latches the latest command and archives its output.

// ---------------------------------------------------------------------------
// MODULES
// ---------------------------------------------------------------------------

mod cmd;
mod generator;
mod params;
mod state;
mod traj;
mod tripod;
mod calc_walk;
mod calc_rotate;
mod calc_holonomic;

// ---------------------------------------------------------------------------
// IMPORTS
// ---------------------------------------------------------------------------

// Internal
pub use cmd::*;
pub use generator::*;
pub use params::*;
pub use state::*;
pub use traj::*;
pub use tripod::*;

use crate::leg_kin::{JointAngles, LegKinError, NUM_LEGS};

// ---------------------------------------------------------------------------
// TYPES
// ---------------------------------------------------------------------------

/// Joint angles of every leg, in leg index order.
pub type LegAngles = [JointAngles; NUM_LEGS];

// ---------------------------------------------------------------------------
// ENUMERATIONS
// ---------------------------------------------------------------------------

/// Possible errors that can occur during GaitCtrl operation.
#[derive(Debug, thiserror::Error)]
pub enum GaitCtrlError {
    #[error("Leg kinematics failed: {0}")]
    LegKin(#[from] LegKinError),

    #[error("Invalid gait trajectory: {0}")]
    Traj(#[from] TrajError),

    #[error("Invalid gait parameters: {0}")]
    InvalidParams(String),

    #[error("Recieved an invalid gait command: {0:#?}")]
    InvalidGaitCmd(GaitCmd),

    #[error("GaitCtrl has not been initialised")]
    NotInitialised,
}

/// Possible errors that can occur while initialising GaitCtrl.
#[derive(Debug, thiserror::Error)]
pub enum GaitCtrlInitError {
    #[error("Cannot load the GaitCtrl parameters: {0}")]
    ParamLoadError(#[from] util::params::LoadError),

    #[error("Invalid parameters: {0}")]
    InvalidParams(#[from] GaitCtrlError),

    #[error("Cannot create the GaitCtrl archive: {0}")]
    ArchiveError(String),
}
