//! Leg identifiers
//!
//! Legs are indexed from 0 internally. The 1 to 6 numbering used by operators
//! and the motor wiring is only converted at the boundary.

// ---------------------------------------------------------------------------
// IMPORTS
// ---------------------------------------------------------------------------

use std::fmt::Display;

use super::{LegKinError, NUM_LEGS};

// ---------------------------------------------------------------------------
// DATA STRUCTURES
// ---------------------------------------------------------------------------

/// Identifies one of the robot's legs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LegId(usize);

// ---------------------------------------------------------------------------
// IMPLEMENTATIONS
// ---------------------------------------------------------------------------

impl LegId {
    /// All legs in index order.
    pub const ALL: [LegId; NUM_LEGS] = [
        LegId(0),
        LegId(1),
        LegId(2),
        LegId(3),
        LegId(4),
        LegId(5),
    ];

    /// Get the leg with the given 0-based index.
    pub fn new(index: usize) -> Option<Self> {
        if index < NUM_LEGS {
            Some(LegId(index))
        }
        else {
            None
        }
    }

    /// Get the leg with the given 1-based number.
    pub fn from_number(number: usize) -> Result<Self, LegKinError> {
        number
            .checked_sub(1)
            .and_then(LegId::new)
            .ok_or(LegKinError::InvalidLegNumber(number))
    }

    /// 0-based index of the leg.
    pub fn index(self) -> usize {
        self.0
    }

    /// 1-based number of the leg.
    pub fn number(self) -> usize {
        self.0 + 1
    }
}

impl Display for LegId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "leg {}", self.number())
    }
}
