//! Inverse kinematics calculations

// ---------------------------------------------------------------------------
// IMPORTS
// ---------------------------------------------------------------------------

use log::debug;
use nalgebra::Vector3;
use std::f64::consts::PI;

// Internal imports
use super::*;

// ---------------------------------------------------------------------------
// IMPLEMENTATIONS
// ---------------------------------------------------------------------------

impl LegKin {

    /// Compute the joint angles placing the foot at `target`.
    ///
    /// The coxa yaw is the bearing of the target, except that it is held at
    /// zero when the target lies on the X or Y axis of the leg frame. The
    /// femur and tibia angles close the triangle formed by the femur, the
    /// tibia and the line from the coxa end to the target. Targets out of
    /// reach give the saturated, fully stretched or folded, solution.
    ///
    /// # Inputs
    /// - `target`: foot position in meters, leg frame.
    ///
    /// # Outputs
    /// - Joint angles in the solver's angle unit, each in the principal range.
    /// - `LegKinError::DegenerateReach` if the target sits on the femur joint.
    pub fn ik(&self, target: &Vector3<f64>) -> Result<JointAngles, LegKinError> {
        let p = &self.params;

        let target = target * p.length_unit.per_meter();
        let (x, y, z) = (target.x, target.y, target.z);

        // Axis-aligned targets keep the coxa straight
        let theta_1 = if x == 0.0 || y == 0.0 {
            0.0
        }
        else {
            y.atan2(x)
        };

        let coxa_end = rot_z(theta_1) * Vector3::new(p.coxa_length, 0.0, 0.0);

        let reach = (target - coxa_end).norm();
        if reach < MIN_REACH {
            debug!("IK target {:?} is {} from the coxa end", target, reach);
            return Err(LegKinError::DegenerateReach { reach });
        }

        let theta_2 = (
            alkashi(reach, p.femur_length, p.tibia_length, Sign::Negative)
            - p.z_direction.value() * (z / reach).asin()
            + p.femur_correction_rad
        ) * p.joint_sign[1].value();

        let theta_3 = (
            PI
            + alkashi(p.femur_length, p.tibia_length, reach, Sign::Negative)
            + p.tibia_correction_rad
        ) * p.joint_sign[2].value();

        let theta_1 = theta_1 * p.joint_sign[0].value();

        let unit = p.angle_unit;

        Ok(JointAngles::new(
            modulo_angle(unit.from_rad(theta_1), unit),
            modulo_angle(unit.from_rad(theta_2), unit),
            modulo_angle(unit.from_rad(theta_3), unit),
        ))
    }

    /// Compute the joint angles placing the foot of `leg` at `target`.
    ///
    /// The target is a displacement from the leg's neutral foot position,
    /// expressed in robot axes. It is turned by the leg's mounting yaw and
    /// offset by the neutral position before solving with [`LegKin::ik`].
    ///
    /// # Inputs
    /// - `target`: foot displacement in meters, robot body axes.
    /// - `leg`: the leg to solve for.
    /// - `robot`: the neutral stance of the robot.
    pub fn ik_oriented(
        &self,
        target: &Vector3<f64>,
        leg: LegId,
        robot: &RobotParams,
    ) -> Result<JointAngles, LegKinError> {
        let target_leg = rot_z(self.params.mount_angle_rad(leg)) * target
            + robot.leg_offset(leg);

        self.ik(&target_leg)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use approx::assert_relative_eq;

    fn phantom_params() -> Params {
        util::params::parse(include_str!("../../../params/leg_kin.toml")).unwrap()
    }

    /// Targets inside the workspace, in front of the coxa and off the axes.
    fn reachable_targets() -> Vec<Vector3<f64>> {
        vec![
            Vector3::new(0.12, 0.05, -0.06),
            Vector3::new(0.17, 0.02, -0.06),
            Vector3::new(0.1, -0.08, -0.03),
            Vector3::new(0.15, 0.01, 0.02),
            Vector3::new(-0.1, -0.1, -0.05),
        ]
    }

    #[test]
    fn test_ik_round_trip() {
        let leg = LegKin::new(phantom_params()).unwrap();

        for target in reachable_targets() {
            let angles = leg.ik(&target).unwrap();
            assert_relative_eq!(leg.dk(&angles), target, epsilon = 1e-6);
        }
    }

    #[test]
    fn test_ik_round_trip_conventions() {
        let mut params = phantom_params();
        params.joint_sign = [Sign::Negative, Sign::Negative, Sign::Positive];
        params.femur_correction_rad = 0.2;
        params.tibia_correction_rad = -0.4;
        params.angle_unit = AngleUnit::Degrees;
        params.coxa_length *= 1000.0;
        params.femur_length *= 1000.0;
        params.tibia_length *= 1000.0;
        params.length_unit = LengthUnit::Millimeters;

        let leg = LegKin::new(params).unwrap();

        for target in reachable_targets() {
            let angles = leg.ik(&target).unwrap();

            for a in angles.to_array().iter() {
                assert!(*a > -180.0 && *a <= 180.0);
            }

            assert_relative_eq!(leg.dk(&angles), target, epsilon = 1e-6);
        }
    }

    #[test]
    fn test_ik_axis_targets_keep_coxa_straight() {
        let leg = LegKin::new(phantom_params()).unwrap();

        assert_eq!(leg.ik(&Vector3::new(0.15, 0.0, -0.05)).unwrap().coxa, 0.0);
        assert_eq!(leg.ik(&Vector3::new(0.0, 0.15, -0.05)).unwrap().coxa, 0.0);

        // Even where the bearing would be a half turn
        assert_eq!(leg.ik(&Vector3::new(-0.15, 0.0, -0.05)).unwrap().coxa, 0.0);
    }

    #[test]
    fn test_ik_degenerate_reach() {
        let params = phantom_params();
        let leg = LegKin::new(params.clone()).unwrap();

        match leg.ik(&Vector3::new(params.coxa_length, 0.0, 0.0)) {
            Err(LegKinError::DegenerateReach { reach }) => assert!(reach < MIN_REACH),
            r => panic!("Expected a degenerate reach error, got {:?}", r),
        }
    }

    #[test]
    fn test_ik_out_of_reach_saturates() {
        let params = phantom_params();
        let leg = LegKin::new(params.clone()).unwrap();

        let target = Vector3::new(1.0, 0.5, -0.2);
        let angles = leg.ik(&target).unwrap();

        for a in angles.to_array().iter() {
            assert!(a.is_finite());
        }

        // Fully stretched towards the target
        let chain = leg.dk_detailed(&angles);
        let stretch = (chain.foot - chain.coxa_end).norm();
        assert!((stretch - params.femur_length - params.tibia_length).abs() < 1e-9);
    }

    #[test]
    fn test_ik_oriented() {
        let mut params = phantom_params();
        params.leg_mount_angle_rad = [0.0, std::f64::consts::FRAC_PI_2, 0.0, 0.0, 0.0, 0.0];
        let leg = LegKin::new(params).unwrap();

        let robot = RobotParams {
            leg_offset_m: [[0.17, 0.0]; NUM_LEGS],
            body_z_m: -0.06,
        };

        // Zero displacement solves for the neutral stance
        let neutral = leg.ik_oriented(&Vector3::zeros(), LegId::ALL[0], &robot).unwrap();
        assert_eq!(neutral, leg.ik(&Vector3::new(0.17, 0.0, -0.06)).unwrap());

        // A body X displacement is a leg Y displacement for a leg mounted at 90 degrees
        let angles = leg.ik_oriented(&Vector3::new(0.02, 0.0, 0.0), LegId::ALL[1], &robot)
            .unwrap();
        assert_relative_eq!(leg.dk(&angles), Vector3::new(0.17, 0.02, -0.06), epsilon = 1e-6);
    }
}
