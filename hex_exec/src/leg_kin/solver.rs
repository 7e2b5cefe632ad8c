//! Leg kinematics solver state

// ---------------------------------------------------------------------------
// IMPORTS
// ---------------------------------------------------------------------------

use super::{LegKinError, Params};

// ---------------------------------------------------------------------------
// DATA STRUCTURES
// ---------------------------------------------------------------------------

/// Forward and inverse kinematics solver for one leg geometry.
///
/// The solver holds no state besides its parameters, the forward kinematics
/// are implemented in `calc_dk` and the inverse kinematics in `calc_ik`.
#[derive(Debug, Clone)]
pub struct LegKin {
    pub(crate) params: Params,
}

// ---------------------------------------------------------------------------
// IMPLEMENTATIONS
// ---------------------------------------------------------------------------

impl LegKin {
    /// Create a new solver, validating the geometry.
    pub fn new(params: Params) -> Result<Self, LegKinError> {
        params.validate()?;

        Ok(Self { params })
    }

    /// The geometry used by this solver.
    pub fn params(&self) -> &Params {
        &self.params
    }
}
