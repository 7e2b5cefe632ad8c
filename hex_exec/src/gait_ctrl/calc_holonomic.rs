//! Holonomic (translate and turn) gait calculations

// ---------------------------------------------------------------------------
// IMPORTS
// ---------------------------------------------------------------------------

// Internal imports
use super::*;
use crate::leg_kin::{LegId, RobotParams, Sign};

// ---------------------------------------------------------------------------
// IMPLEMENTATIONS
// ---------------------------------------------------------------------------

impl GaitGenerator {

    /// Compute the joint angles of every leg at gait time `t` while walking
    /// and turning at the same time.
    ///
    /// The walk and rotate trajectories of each leg are sampled at the same
    /// phase and their foot displacements averaged. This is an additive blend
    /// of the two motions, exact only to first order, and not the composition
    /// of a turn with a translation. As a consequence each motion contributes
    /// half of its own amplitude: a holonomic command with no turn moves the
    /// feet like a walk at half the speed.
    pub fn holonomic(
        &self,
        t: f64,
        speed_x: f64,
        speed_y: f64,
        omega: f64,
        direction: Sign,
        robot: &RobotParams,
    ) -> Result<LegAngles, GaitCtrlError> {
        let walk_traj = self.walk_traj(speed_x, speed_y)?;

        let mut rotate_trajs = Vec::with_capacity(LegId::ALL.len());
        for leg in LegId::ALL.iter() {
            rotate_trajs.push(self.rotate_traj(*leg, omega, direction, robot)?);
        }

        self.solve_legs(t, robot, TripodGroup::of, |leg, phase| {
            let turn = rotate_trajs[leg.index()].interpolate(phase);
            let walk = walk_traj.interpolate(phase);

            Ok((turn + walk) / 2.0)
        })
    }
}
