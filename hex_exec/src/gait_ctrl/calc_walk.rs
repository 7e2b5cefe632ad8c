//! Walk (translation) gait calculations

// ---------------------------------------------------------------------------
// IMPORTS
// ---------------------------------------------------------------------------

use nalgebra::Vector3;

// Internal imports
use super::*;
use crate::leg_kin::RobotParams;

// ---------------------------------------------------------------------------
// IMPLEMENTATIONS
// ---------------------------------------------------------------------------

impl GaitGenerator {

    /// Compute the joint angles of every leg at gait time `t` while walking
    /// at the given speed.
    ///
    /// All legs follow the same trajectory, group B half a cycle ahead of
    /// group A.
    ///
    /// Units: `speed_x` and `speed_y` in meters/second, robot body axes.
    pub fn walk(
        &self,
        t: f64,
        speed_x: f64,
        speed_y: f64,
        robot: &RobotParams,
    ) -> Result<LegAngles, GaitCtrlError> {
        let traj = self.walk_traj(speed_x, speed_y)?;

        self.solve_legs(t, robot, TripodGroup::of, |_, phase| Ok(traj.interpolate(phase)))
    }

    /// Build the foot displacement trajectory for a walk.
    ///
    /// The foot rises and moves forwards over the first half of the cycle
    /// then is dragged back to neutral along the ground over the second half.
    pub fn walk_traj(
        &self,
        speed_x: f64,
        speed_y: f64,
    ) -> Result<Trajectory<Vector3<f64>>, TrajError> {
        let p = &self.params;
        let lift = p.lift_gain * (speed_x.abs() + speed_y.abs());

        Trajectory::closed(vec![
            (0.0, Vector3::zeros()),
            (0.25, Vector3::new(p.swing_gain * speed_x, p.swing_gain * speed_y, lift)),
            (0.5, Vector3::new(p.stride_gain * speed_x, p.stride_gain * speed_y, 0.0)),
            (1.0, Vector3::zeros()),
        ])
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use super::super::generator::test_util::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_zero_speed_walk_holds_stance() {
        let gen = shipped_generator();
        let robot = shipped_robot();

        let stance = gen.walk(0.0, 0.0, 0.0, &robot).unwrap();

        for i in 0..40 {
            let t = i as f64 * 0.137 - 1.0;
            assert_eq!(gen.walk(t, 0.0, 0.0, &robot).unwrap(), stance);
        }

        // Every leg of the stance is its neutral solution
        for leg in crate::leg_kin::LegId::ALL.iter() {
            assert_eq!(
                stance[leg.index()],
                gen.leg_kin().ik(&robot.leg_offset(*leg)).unwrap()
            );
        }
    }

    #[test]
    fn test_walk_traj_shape() {
        let gen = shipped_generator();
        let traj = gen.walk_traj(0.1, -0.05).unwrap();

        assert!(traj.is_closed());
        assert!((traj.interpolate(0.25) - Vector3::new(0.02, -0.01, 0.0225)).norm() < 1e-12);
        assert!((traj.interpolate(0.5) - Vector3::new(0.04, -0.02, 0.0)).norm() < 1e-12);
        assert_eq!(traj.interpolate(0.0), Vector3::zeros());
        assert_eq!(traj.interpolate(1.0), Vector3::zeros());
    }

    #[test]
    fn test_walk_tripod_offset() {
        // Identical legs mounted the same way, so only the phase differs
        let mut gen = shipped_generator();
        gen.leg_kin.params.leg_mount_angle_rad = [0.0; crate::leg_kin::NUM_LEGS];
        let robot = RobotParams {
            leg_offset_m: [[0.17, 0.0]; crate::leg_kin::NUM_LEGS],
            body_z_m: -0.06,
        };

        let (sx, sy) = (0.1, 0.05);

        for i in 0..20 {
            let t = i as f64 * 0.05;
            let now = gen.walk(t, sx, sy, &robot).unwrap();
            let later = gen.walk(t + 0.5, sx, sy, &robot).unwrap();

            // Legs within a group move together
            assert_eq!(now[1], now[3]);
            assert_eq!(now[1], now[5]);
            assert_eq!(now[0], now[2]);
            assert_eq!(now[0], now[4]);

            // Group B half a cycle later is where group A is now
            assert_abs_diff_eq!(now[1], later[0], epsilon = 1e-9);
            assert_abs_diff_eq!(now[0], later[1], epsilon = 1e-9);
        }
    }

    #[test]
    fn test_walk_moves_feet() {
        let gen = shipped_generator();
        let robot = shipped_robot();

        // At t = 0.25 group A is at the top of its swing and group B is mid
        // way back along the ground.
        let walk = gen.walk(0.25, 0.1, 0.0, &robot).unwrap();
        let stance = gen.walk(0.25, 0.0, 0.0, &robot).unwrap();

        for leg in crate::leg_kin::LegId::ALL.iter() {
            assert_ne!(walk[leg.index()], stance[leg.index()]);
        }
    }
}
