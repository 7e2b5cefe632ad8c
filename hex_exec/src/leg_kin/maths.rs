//! Geometric helpers for the leg solvers

// ---------------------------------------------------------------------------
// IMPORTS
// ---------------------------------------------------------------------------

use nalgebra::{Rotation3, Vector3};
use util::maths::{clamp, rem_euclid};

use super::{AngleUnit, Sign};

// ---------------------------------------------------------------------------
// PUBLIC FUNCTIONS
// ---------------------------------------------------------------------------

/// Solve the angle opposite side `c` of the triangle with sides `a`, `b` and
/// `c`, using the law of cosines.
///
/// `sign` selects between the elbow-up and elbow-down solutions. Returns 0
/// for a degenerate triangle (`a` or `b` of zero length). Triangles which
/// cannot close are saturated to a flat angle rather than reported.
///
/// Units: radians
pub fn alkashi(a: f64, b: f64, c: f64, sign: Sign) -> f64 {
    if a == 0.0 || b == 0.0 {
        return 0.0;
    }

    let cos_angle = (a.powi(2) + b.powi(2) - c.powi(2)) / (2.0 * a * b);

    sign.value() * clamp(cos_angle, -1.0, 1.0).acos()
}

/// Map an angle into the principal range `(-half_turn, half_turn]` of the
/// given unit.
pub fn modulo_angle(angle: f64, unit: AngleUnit) -> f64 {
    let half_turn = unit.half_turn();

    if -half_turn < angle && angle < half_turn {
        return angle;
    }

    let angle = rem_euclid(angle, 2.0 * half_turn);

    if angle > half_turn {
        angle - 2.0 * half_turn
    }
    else {
        angle
    }
}

/// Rotation about the body X axis.
pub fn rot_x(angle_rad: f64) -> Rotation3<f64> {
    Rotation3::from_axis_angle(&Vector3::x_axis(), angle_rad)
}

/// Rotation about the lateral (Y) axis.
pub fn rot_y(angle_rad: f64) -> Rotation3<f64> {
    Rotation3::from_axis_angle(&Vector3::y_axis(), angle_rad)
}

/// Rotation about the vertical (Z) axis.
pub fn rot_z(angle_rad: f64) -> Rotation3<f64> {
    Rotation3::from_axis_angle(&Vector3::z_axis(), angle_rad)
}

/// Rotate a point about the vertical axis.
pub fn rotate_z(point: &Vector3<f64>, angle_rad: f64) -> Vector3<f64> {
    rot_z(angle_rad) * point
}

#[cfg(test)]
mod test {
    use super::*;
    use approx::assert_abs_diff_eq;
    use std::f64::consts::{FRAC_PI_2, FRAC_PI_3, PI};

    #[test]
    fn test_alkashi() {
        for a in [0.001, 0.5, 1.0, 42.0].iter() {
            assert_abs_diff_eq!(alkashi(*a, *a, *a, Sign::Positive), FRAC_PI_3, epsilon = 1e-12);
            assert_abs_diff_eq!(alkashi(*a, *a, *a, Sign::Negative), -FRAC_PI_3, epsilon = 1e-12);
        }

        // 3-4-5 triangle has its right angle opposite the hypotenuse
        assert_abs_diff_eq!(alkashi(3.0, 4.0, 5.0, Sign::Positive), FRAC_PI_2, epsilon = 1e-12);

        // Degenerate triangles
        assert_eq!(alkashi(0.0, 1.0, 1.0, Sign::Negative), 0.0);
        assert_eq!(alkashi(1.0, 0.0, 1.0, Sign::Negative), 0.0);

        // Triangles that cannot close saturate
        assert_abs_diff_eq!(alkashi(1.0, 1.0, 3.0, Sign::Positive), PI, epsilon = 1e-12);
        assert_abs_diff_eq!(alkashi(1.0, 3.0, 1.0, Sign::Negative), 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_modulo_angle() {
        assert_abs_diff_eq!(modulo_angle(1.5 * PI, AngleUnit::Radians), -0.5 * PI, epsilon = 1e-12);
        assert_abs_diff_eq!(modulo_angle(-1.5 * PI, AngleUnit::Radians), 0.5 * PI, epsilon = 1e-12);
        assert_eq!(modulo_angle(PI, AngleUnit::Radians), PI);
        assert_eq!(modulo_angle(-PI, AngleUnit::Radians), PI);
        assert_eq!(modulo_angle(0.25, AngleUnit::Radians), 0.25);
        assert_eq!(modulo_angle(540.0, AngleUnit::Degrees), 180.0);
        assert_eq!(modulo_angle(-190.0, AngleUnit::Degrees), 170.0);
        assert_eq!(modulo_angle(720.0, AngleUnit::Degrees), 0.0);
    }

    #[test]
    fn test_modulo_angle_range() {
        for unit in [AngleUnit::Radians, AngleUnit::Degrees].iter() {
            let half_turn = unit.half_turn();

            for i in -2000..=2000 {
                let x = i as f64 * 0.0137 * half_turn;
                let m = modulo_angle(x, *unit);

                assert!(-half_turn < m && m <= half_turn, "{} -> {}", x, m);
                assert_eq!(modulo_angle(m, *unit), m);
            }
        }
    }

    #[test]
    fn test_rotations() {
        let p = Vector3::new(1.0, 0.0, 0.5);

        let r = rotate_z(&p, FRAC_PI_2);
        assert_abs_diff_eq!(r.x, 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(r.y, 1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(r.z, 0.5, epsilon = 1e-12);

        // Positive pitch about Y points X downwards
        let r = rot_y(FRAC_PI_2) * Vector3::new(1.0, 0.0, 0.0);
        assert_abs_diff_eq!(r.z, -1.0, epsilon = 1e-12);

        let r = rot_x(FRAC_PI_2) * Vector3::new(0.0, 1.0, 0.0);
        assert_abs_diff_eq!(r.z, 1.0, epsilon = 1e-12);
    }
}
