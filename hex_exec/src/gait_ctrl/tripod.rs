//! Tripod leg grouping

// ---------------------------------------------------------------------------
// IMPORTS
// ---------------------------------------------------------------------------

use util::maths::rem_euclid;

use crate::leg_kin::LegId;

// ---------------------------------------------------------------------------
// ENUMERATIONS
// ---------------------------------------------------------------------------

/// The two alternating groups of three legs of a tripod gait.
///
/// Group A follows the gait phase and group B runs half a cycle ahead. The
/// translation gaits put legs 2, 4 and 6 in group A, the rotate gait puts
/// legs 1, 3 and 5 in group A.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TripodGroup {
    A,
    B,
}

// ---------------------------------------------------------------------------
// IMPLEMENTATIONS
// ---------------------------------------------------------------------------

impl TripodGroup {
    /// Group the given leg belongs to in the walk and holonomic gaits.
    pub fn of(leg: LegId) -> Self {
        if leg.index() % 2 == 1 {
            TripodGroup::A
        }
        else {
            TripodGroup::B
        }
    }

    /// Group the given leg belongs to in the rotate gait.
    pub fn of_rotate(leg: LegId) -> Self {
        match Self::of(leg) {
            TripodGroup::A => TripodGroup::B,
            TripodGroup::B => TripodGroup::A,
        }
    }

    /// Offset of this group's cycle relative to the gait phase.
    pub fn phase_offset(self) -> f64 {
        match self {
            TripodGroup::A => 0.0,
            TripodGroup::B => 0.5,
        }
    }

    /// Position of this group within its own cycle at gait time `t`, in
    /// `[0, 1]`.
    pub fn phase(self, t: f64) -> f64 {
        rem_euclid(t + self.phase_offset(), 1.0)
    }
}
