//! # Hexapod library.
//!
//! This library allows other crates in the workspace, the executable and the
//! benchmarks to access the kinematics and gait modules.

// ------------------------------------------------------------------------------------------------
// MODULES
// ------------------------------------------------------------------------------------------------

/// Leg kinematics - converts between joint angles and foot positions for a single leg
pub mod leg_kin;

/// Gait control - generates tripod gait trajectories and the matching joint angles for all legs
pub mod gait_ctrl;

/// Executable parameters
pub mod params;
