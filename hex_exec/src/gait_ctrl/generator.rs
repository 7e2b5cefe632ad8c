//! Gait generator shared by all gaits

// ---------------------------------------------------------------------------
// IMPORTS
// ---------------------------------------------------------------------------

use log::trace;
use nalgebra::Vector3;

use super::{GaitCtrlError, LegAngles, Params, TripodGroup};
use crate::leg_kin::{JointAngles, LegId, LegKin, RobotParams, NUM_LEGS};

// ---------------------------------------------------------------------------
// DATA STRUCTURES
// ---------------------------------------------------------------------------

/// Generates joint angles for every leg from a gait phase and a command.
///
/// The generator is immutable once built: each gait function is a pure
/// function of its arguments, so calls for different phases can be made in
/// any order, or from several threads at once. The gaits themselves are
/// implemented in `calc_walk`, `calc_rotate` and `calc_holonomic`.
#[derive(Debug, Clone)]
pub struct GaitGenerator {
    pub(crate) leg_kin: LegKin,
    pub(crate) params: Params,
}

// ---------------------------------------------------------------------------
// IMPLEMENTATIONS
// ---------------------------------------------------------------------------

impl GaitGenerator {

    /// Create a new generator, validating the gait parameters.
    pub fn new(leg_kin: LegKin, params: Params) -> Result<Self, GaitCtrlError> {
        params.validate()?;

        Ok(Self { leg_kin, params })
    }

    /// The leg solver used by this generator.
    pub fn leg_kin(&self) -> &LegKin {
        &self.leg_kin
    }

    /// The gait shape parameters.
    pub fn params(&self) -> &Params {
        &self.params
    }

    /// Solve every leg for gait time `t`.
    ///
    /// `group_of` assigns each leg to its tripod group. `foot_target` gives
    /// the displacement of a leg's foot, in robot axes, at the phase of the
    /// leg's own group.
    pub(crate) fn solve_legs<F>(
        &self,
        t: f64,
        robot: &RobotParams,
        group_of: fn(LegId) -> TripodGroup,
        mut foot_target: F,
    ) -> Result<LegAngles, GaitCtrlError>
    where
        F: FnMut(LegId, f64) -> Result<Vector3<f64>, GaitCtrlError>
    {
        let mut angles = [JointAngles::default(); NUM_LEGS];

        for leg in LegId::ALL.iter() {
            let phase = group_of(*leg).phase(t);
            let target = foot_target(*leg, phase)?;

            angles[leg.index()] = self.leg_kin.ik_oriented(&target, *leg, robot)?;

            trace!(
                "{} phase {:.3} target {:?} angles {:?}",
                leg, phase, target.as_slice(), angles[leg.index()].to_array()
            );
        }

        Ok(angles)
    }
}
