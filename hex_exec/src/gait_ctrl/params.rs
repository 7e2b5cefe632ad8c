//! Parameters structure for GaitCtrl

// ---------------------------------------------------------------------------
// IMPORTS
// ---------------------------------------------------------------------------

use serde::Deserialize;

use super::GaitCtrlError;

// ---------------------------------------------------------------------------
// DATA STRUCTURES
// ---------------------------------------------------------------------------

/// Shape of the gait trajectories.
///
/// Swing keyframes are proportional to the commanded speeds, these gains set
/// the proportions.
#[derive(Debug, Clone, Deserialize)]
pub struct Params {

    // ---- TRANSLATION ----

    /// Horizontal foot displacement at the top of the swing, per unit of
    /// commanded speed.
    ///
    /// Units: seconds
    pub swing_gain: f64,

    /// Horizontal foot displacement at the end of the swing, per unit of
    /// commanded speed.
    ///
    /// Units: seconds
    pub stride_gain: f64,

    /// Foot lift at the top of the swing, per unit of summed absolute speed.
    ///
    /// Units: seconds
    pub lift_gain: f64,

    // ---- ROTATION ----

    /// Foot lift at the top of a rotation swing, per unit of angular rate.
    ///
    /// Units: meters/radian
    pub rotate_lift_gain: f64,

    /// Correction for the rotation being computed about each leg's hip rather
    /// than the body centre, in the leg's own X and Y axes, per unit of turn.
    ///
    /// Units: meters/radian
    pub rotate_correction: [f64; 2],
}

// ---------------------------------------------------------------------------
// IMPLEMENTATIONS
// ---------------------------------------------------------------------------

impl Default for Params {
    fn default() -> Self {
        Self {
            swing_gain: 0.2,
            stride_gain: 0.4,
            lift_gain: 0.15,
            rotate_lift_gain: 0.5,
            rotate_correction: [0.05, 1.0],
        }
    }
}

impl Params {
    /// Check that every gain is finite.
    pub fn validate(&self) -> Result<(), GaitCtrlError> {
        let gains = [
            self.swing_gain,
            self.stride_gain,
            self.lift_gain,
            self.rotate_lift_gain,
            self.rotate_correction[0],
            self.rotate_correction[1],
        ];

        if gains.iter().all(|g| g.is_finite()) {
            Ok(())
        }
        else {
            Err(GaitCtrlError::InvalidParams(format!("gains must be finite: {:?}", self)))
        }
    }
}
