//! Rotate (turn on the spot) gait calculations

// ---------------------------------------------------------------------------
// IMPORTS
// ---------------------------------------------------------------------------

use nalgebra::Vector3;

// Internal imports
use super::*;
use crate::leg_kin::{rot_z, rotate_z, LegId, RobotParams, Sign};

// ---------------------------------------------------------------------------
// IMPLEMENTATIONS
// ---------------------------------------------------------------------------

impl GaitGenerator {

    /// Compute the joint angles of every leg at gait time `t` while turning
    /// on the spot.
    ///
    /// Legs 1, 3 and 5 follow the gait phase, the opposite of the walk
    /// grouping.
    ///
    /// Units: `omega` in radians turned per step.
    pub fn rotate(
        &self,
        t: f64,
        omega: f64,
        direction: Sign,
        robot: &RobotParams,
    ) -> Result<LegAngles, GaitCtrlError> {
        // Leg trajectories depend on the leg so they are built up front, the
        // solver closure only samples them.
        let mut trajs = Vec::with_capacity(LegId::ALL.len());
        for leg in LegId::ALL.iter() {
            trajs.push(self.rotate_traj(*leg, omega, direction, robot)?);
        }

        self.solve_legs(
            t,
            robot,
            TripodGroup::of_rotate,
            |leg, phase| Ok(trajs[leg.index()].interpolate(phase))
        )
    }

    /// Build the foot displacement trajectory of one leg for a rotation.
    ///
    /// The neutral foot position is recovered by forward kinematics of the
    /// neutral stance and turned about the vertical axis by the commanded
    /// angle. As this turn is about the leg's hip and not the body centre a
    /// fixed correction, expressed in the leg's mounting axes, is added.
    pub fn rotate_traj(
        &self,
        leg: LegId,
        omega: f64,
        direction: Sign,
        robot: &RobotParams,
    ) -> Result<Trajectory<Vector3<f64>>, GaitCtrlError> {
        let p = &self.params;
        let turn = omega * direction.value();

        let neutral = self.leg_kin.ik_oriented(&Vector3::zeros(), leg, robot)?;
        let foot = self.leg_kin.dk(&neutral);

        let correction = rot_z(self.leg_kin.params().mount_angle_rad(leg)).inverse()
            * Vector3::new(p.rotate_correction[0] * turn, p.rotate_correction[1] * turn, 0.0);

        let step = rotate_z(&foot, turn) - foot + correction;

        Ok(Trajectory::closed(vec![
            (0.0, Vector3::zeros()),
            (0.25, Vector3::new(step.x / 2.0, step.y / 2.0, step.z + p.rotate_lift_gain * omega)),
            (0.5, Vector3::new(step.x, step.y, 0.0)),
            (1.0, Vector3::zeros()),
        ])?)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use super::super::generator::test_util::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_zero_turn_holds_stance() {
        let gen = shipped_generator();
        let robot = shipped_robot();

        for i in 0..10 {
            let t = i as f64 * 0.1;
            let rotate = gen.rotate(t, 0.0, Sign::Positive, &robot).unwrap();
            let stance = gen.walk(t, 0.0, 0.0, &robot).unwrap();

            for (r, s) in rotate.iter().zip(stance.iter()) {
                assert_abs_diff_eq!(r, s, epsilon = 1e-12);
            }
        }
    }

    #[test]
    fn test_rotate_traj_shape() {
        let gen = shipped_generator();
        let robot = shipped_robot();
        let omega = 0.2;

        for leg in LegId::ALL.iter() {
            let traj = gen.rotate_traj(*leg, omega, Sign::Positive, &robot).unwrap();
            let k = traj.keyframes();

            assert!(traj.is_closed());
            assert_eq!(k[0].value, Vector3::zeros());
            assert_eq!(k[3].value, Vector3::zeros());

            // Swing top is half way to the stride end and lifted
            assert_abs_diff_eq!(k[1].value.x, k[2].value.x / 2.0, epsilon = 1e-15);
            assert_abs_diff_eq!(k[1].value.y, k[2].value.y / 2.0, epsilon = 1e-15);
            assert_abs_diff_eq!(k[1].value.z, 0.5 * omega, epsilon = 1e-12);
            assert_eq!(k[2].value.z, 0.0);
        }
    }

    #[test]
    fn test_rotate_step_matches_turn() {
        let gen = shipped_generator();
        let robot = shipped_robot();
        let omega = 0.1;
        let leg = LegId::ALL[2];

        let neutral = gen.leg_kin().ik_oriented(&Vector3::zeros(), leg, &robot).unwrap();
        let foot = gen.leg_kin().dk(&neutral);
        let mount = gen.leg_kin().params().mount_angle_rad(leg);

        let traj = gen.rotate_traj(leg, omega, Sign::Positive, &robot).unwrap();
        let step = traj.keyframes()[2].value;

        // Remove the hip correction and the step is the arc swept by the foot
        let correction = rot_z(-mount) * Vector3::new(0.05 * omega, 1.0 * omega, 0.0);
        let arc = step - correction;
        let expected = rotate_z(&foot, omega) - foot;

        assert_abs_diff_eq!(arc.x, expected.x, epsilon = 1e-12);
        assert_abs_diff_eq!(arc.y, expected.y, epsilon = 1e-12);
    }

    #[test]
    fn test_rotate_leg_groups() {
        let gen = shipped_generator();
        let robot = shipped_robot();
        let omega = 0.2;

        let angles = gen.rotate(0.25, omega, Sign::Positive, &robot).unwrap();

        for leg in LegId::ALL.iter() {
            let traj = gen.rotate_traj(*leg, omega, Sign::Positive, &robot).unwrap();

            // Legs 1, 3 and 5 are at the top of their swing, legs 2, 4 and 6
            // half way back along the ground.
            let target = if leg.index() % 2 == 0 {
                traj.keyframes()[1].value
            }
            else {
                traj.interpolate(0.75)
            };

            let expected = gen.leg_kin().ik_oriented(&target, *leg, &robot).unwrap();
            assert_abs_diff_eq!(angles[leg.index()], expected, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_rotate_direction() {
        let gen = shipped_generator();
        let robot = shipped_robot();

        // At t = 0.5 legs 1, 3 and 5 are at the end of their stride and the
        // others are on the ground at neutral, none uses the lift keyframe.
        let ccw = gen.rotate(0.5, -0.2, Sign::Positive, &robot).unwrap();
        let cw = gen.rotate(0.5, 0.2, Sign::Negative, &robot).unwrap();

        for (a, b) in ccw.iter().zip(cw.iter()) {
            assert_abs_diff_eq!(a, b, epsilon = 1e-12);
        }

        let other = gen.rotate(0.5, 0.2, Sign::Positive, &robot).unwrap();
        assert_ne!(other[0], cw[0]);
    }
}
