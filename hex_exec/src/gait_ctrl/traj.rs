//! Keyframe trajectories and their piecewise linear interpolation

// ---------------------------------------------------------------------------
// IMPORTS
// ---------------------------------------------------------------------------

use nalgebra::Vector3;
use std::ops::{Add, Mul, Sub};

// ---------------------------------------------------------------------------
// TRAITS
// ---------------------------------------------------------------------------

/// A value which can be linearly interpolated between keyframes.
pub trait Waypoint: Copy + Add<Output = Self> + Sub<Output = Self> + Mul<f64, Output = Self> {
    /// Value returned when a phase falls outside every segment.
    fn fallback() -> Self;
}

impl Waypoint for f64 {
    fn fallback() -> Self {
        0.0
    }
}

impl Waypoint for Vector3<f64> {
    fn fallback() -> Self {
        Vector3::zeros()
    }
}

// ---------------------------------------------------------------------------
// DATA STRUCTURES
// ---------------------------------------------------------------------------

/// A value pinned at a phase of the gait cycle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Keyframe<T> {
    /// Phase in the cycle, between 0 and 1.
    pub phase: f64,
    pub value: T,
}

/// Keyframes ordered by strictly increasing phase.
#[derive(Debug, Clone, PartialEq)]
pub struct Trajectory<T> {
    keyframes: Vec<Keyframe<T>>,
}

// ---------------------------------------------------------------------------
// ENUMERATIONS
// ---------------------------------------------------------------------------

/// Reasons a list of keyframes cannot form a trajectory.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum TrajError {
    #[error("A trajectory needs at least one keyframe")]
    Empty,

    #[error("Keyframe {index} has phase {phase}, expected a phase between 0 and 1")]
    PhaseOutOfRange { index: usize, phase: f64 },

    #[error("Keyframe {index} does not come strictly after the previous one")]
    NonIncreasingPhase { index: usize },

    #[error("A closed trajectory must start at phase 0 and end at phase 1")]
    NotClosed,
}

// ---------------------------------------------------------------------------
// IMPLEMENTATIONS
// ---------------------------------------------------------------------------

impl<T> From<(f64, T)> for Keyframe<T> {
    fn from((phase, value): (f64, T)) -> Self {
        Self { phase, value }
    }
}

impl<T: Waypoint> Trajectory<T> {

    /// Build a trajectory from `(phase, value)` pairs.
    pub fn new<I>(keyframes: I) -> Result<Self, TrajError>
    where
        I: IntoIterator<Item = (f64, T)>
    {
        let keyframes: Vec<Keyframe<T>> = keyframes
            .into_iter()
            .map(Keyframe::from)
            .collect();

        if keyframes.is_empty() {
            return Err(TrajError::Empty);
        }

        for (index, k) in keyframes.iter().enumerate() {
            if !(0.0..=1.0).contains(&k.phase) {
                return Err(TrajError::PhaseOutOfRange { index, phase: k.phase });
            }
            if index > 0 && k.phase <= keyframes[index - 1].phase {
                return Err(TrajError::NonIncreasingPhase { index });
            }
        }

        Ok(Self { keyframes })
    }

    /// Build a trajectory which covers the whole cycle, from phase 0 to
    /// phase 1.
    pub fn closed<I>(keyframes: I) -> Result<Self, TrajError>
    where
        I: IntoIterator<Item = (f64, T)>
    {
        let traj = Self::new(keyframes)?;

        if traj.is_closed() {
            Ok(traj)
        }
        else {
            Err(TrajError::NotClosed)
        }
    }

    pub fn keyframes(&self) -> &[Keyframe<T>] {
        &self.keyframes
    }

    /// True if the keyframes span exactly the phases 0 to 1.
    pub fn is_closed(&self) -> bool {
        match (self.keyframes.first(), self.keyframes.last()) {
            (Some(first), Some(last)) =>
                self.keyframes.len() > 1 && first.phase == 0.0 && last.phase == 1.0,
            _ => false
        }
    }

    /// Sample the trajectory at phase `t`.
    ///
    /// Linearly interpolates within the segment containing `t`, returning the
    /// keyframe value itself when `t` is exactly on a keyframe. When no
    /// segment contains `t` (including trajectories of a single keyframe) the
    /// `Waypoint::fallback` value, zero, is returned.
    pub fn interpolate(&self, t: f64) -> T {
        for pair in self.keyframes.windows(2) {
            let (k0, k1) = (&pair[0], &pair[1]);

            if k0.phase <= t && t <= k1.phase {
                if t == k1.phase {
                    return k1.value;
                }

                return k0.value
                    + (k1.value - k0.value) * ((t - k0.phase) / (k1.phase - k0.phase));
            }
        }

        T::fallback()
    }
}
