//! Forward kinematics calculations

// ---------------------------------------------------------------------------
// IMPORTS
// ---------------------------------------------------------------------------

use nalgebra::Vector3;

// Internal imports
use super::*;

// ---------------------------------------------------------------------------
// IMPLEMENTATIONS
// ---------------------------------------------------------------------------

impl LegKin {

    /// Compute the position of the foot for the given joint angles.
    ///
    /// Units: meters,
    /// Frame: Leg
    pub fn dk(&self, angles: &JointAngles) -> Vector3<f64> {
        self.dk_detailed(angles).foot
    }

    /// Compute the position of every joint along the leg for the given joint
    /// angles.
    ///
    /// The angles are in the solver's angle unit. Motor signs and zero
    /// corrections are removed first, then the coxa yaw, femur pitch and
    /// tibia pitch are chained from the hip outwards.
    pub fn dk_detailed(&self, angles: &JointAngles) -> LegChain {
        let p = &self.params;
        let unit = p.angle_unit;

        let theta_1 = p.joint_sign[0].value() * unit.to_rad(angles.coxa);
        let theta_2 = p.joint_sign[1].value() * unit.to_rad(angles.femur)
            - p.femur_correction_rad;
        let theta_3 = p.joint_sign[2].value() * unit.to_rad(angles.tibia)
            - p.tibia_correction_rad;

        let yaw = rot_z(theta_1);

        let coxa_end = yaw * Vector3::new(p.coxa_length, 0.0, 0.0);

        let femur_end = coxa_end
            + yaw * rot_y(theta_2) * Vector3::new(p.femur_length, 0.0, 0.0);

        // The tibia frame is the femur frame pitched again by theta_3
        let foot = femur_end
            + yaw * rot_y(theta_2 + theta_3) * Vector3::new(p.tibia_length, 0.0, 0.0);

        let scale = p.length_unit.per_meter();

        LegChain {
            origin: Vector3::zeros(),
            coxa_end: coxa_end / scale,
            femur_end: femur_end / scale,
            foot: foot / scale,
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use approx::assert_abs_diff_eq;
    use std::f64::consts::{FRAC_PI_2, PI};

    fn unit_leg() -> LegKin {
        LegKin::new(Params {
            coxa_length: 1.0,
            femur_length: 1.0,
            tibia_length: 1.0,
            ..Default::default()
        }).unwrap()
    }

    #[test]
    fn test_dk_straight_leg() {
        let chain = unit_leg().dk_detailed(&JointAngles::new(0.0, 0.0, 0.0));

        assert_eq!(chain.origin, Vector3::new(0.0, 0.0, 0.0));
        assert_abs_diff_eq!(chain.coxa_end, Vector3::new(1.0, 0.0, 0.0), epsilon = 1e-12);
        assert_abs_diff_eq!(chain.femur_end, Vector3::new(2.0, 0.0, 0.0), epsilon = 1e-12);
        assert_abs_diff_eq!(chain.foot, Vector3::new(3.0, 0.0, 0.0), epsilon = 1e-12);
    }

    #[test]
    fn test_dk_joints() {
        let leg = unit_leg();

        // Coxa yaw swings the whole leg about the vertical axis
        let chain = leg.dk_detailed(&JointAngles::new(FRAC_PI_2, 0.0, 0.0));
        assert_abs_diff_eq!(chain.foot, Vector3::new(0.0, 3.0, 0.0), epsilon = 1e-12);

        // Positive femur pitch points the femur downwards
        let chain = leg.dk_detailed(&JointAngles::new(0.0, FRAC_PI_2, 0.0));
        assert_abs_diff_eq!(chain.femur_end, Vector3::new(1.0, 0.0, -1.0), epsilon = 1e-12);
        assert_abs_diff_eq!(chain.foot, Vector3::new(1.0, 0.0, -2.0), epsilon = 1e-12);

        // Tibia folded back onto the femur
        let chain = leg.dk_detailed(&JointAngles::new(0.0, 0.0, PI));
        assert_abs_diff_eq!(chain.foot, Vector3::new(1.0, 0.0, 0.0), epsilon = 1e-12);

        assert_eq!(leg.dk(&JointAngles::new(0.3, 0.2, 0.1)),
            leg.dk_detailed(&JointAngles::new(0.3, 0.2, 0.1)).foot);
    }

    #[test]
    fn test_dk_conventions() {
        let leg = LegKin::new(Params {
            coxa_length: 10.0,
            femur_length: 10.0,
            tibia_length: 10.0,
            joint_sign: [Sign::Negative, Sign::Positive, Sign::Positive],
            femur_correction_rad: FRAC_PI_2,
            angle_unit: AngleUnit::Degrees,
            length_unit: LengthUnit::Millimeters,
            ..Default::default()
        }).unwrap();

        // 90 degrees of coxa with a negative sign yaws to -Y, and the femur
        // correction cancels a 90 degree femur command.
        let chain = leg.dk_detailed(&JointAngles::new(90.0, 90.0, 0.0));
        assert_abs_diff_eq!(chain.coxa_end, Vector3::new(0.0, -0.01, 0.0), epsilon = 1e-12);
        assert_abs_diff_eq!(chain.foot, Vector3::new(0.0, -0.03, 0.0), epsilon = 1e-12);
    }
}
