//! Implementations for the GaitCtrl state structure

// ---------------------------------------------------------------------------
// IMPORTS
// ---------------------------------------------------------------------------

// External
use log::{debug, trace};

// Internal
use super::{
    GaitCmd, GaitCtrlError, GaitCtrlInitError, GaitGenerator, GaitType, LegAngles, Params,
};
use crate::leg_kin::{self, LegKin, RobotParams, NUM_JOINTS, NUM_LEGS};
use util::{
    archive::{Archived, Archiver},
    module::State,
    params,
    session::{self, Session},
};

// ---------------------------------------------------------------------------
// DATA STRUCTURES
// ---------------------------------------------------------------------------

/// Gait control module state
///
/// Only the latest command and output are kept between cycles, the joint
/// angles of a cycle depend on nothing but that cycle's input.
#[derive(Default)]
pub struct GaitCtrl {

    pub(crate) generator: Option<GaitGenerator>,

    pub(crate) current_cmd: Option<GaitCmd>,

    pub(crate) report: StatusReport,

    pub(crate) phase: f64,

    pub(crate) output: Option<OutputData>,
    arch_output: Archiver,
}

/// Parameter files used to initialise GaitCtrl, relative to the params
/// directory.
#[derive(Clone, Copy, Debug)]
pub struct InitData {
    pub leg_kin_params: &'static str,
    pub gait_ctrl_params: &'static str,
}

/// Input data to Gait Control.
#[derive(Clone, Copy, Debug, Default)]
pub struct InputData {
    /// Gait time, one unit per gait cycle.
    pub phase: f64,

    /// The gait command to be executed, or `None` if there is no new
    /// command on this cycle.
    pub cmd: Option<GaitCmd>,

    /// The robot's neutral stance.
    pub robot: RobotParams,
}

/// Output demands from GaitCtrl that the motor driver must execute.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OutputData {
    /// Joint angle demands of each leg, in leg index order.
    ///
    /// Units: the leg kinematics angle unit
    pub angles: LegAngles,
}

/// Status report for GaitCtrl processing.
#[derive(Clone, Copy, Default, Debug, PartialEq)]
pub struct StatusReport {
    /// A new command was accepted this cycle.
    pub new_cmd: bool,

    /// The robot is holding its neutral stance.
    pub stopped: bool,
}

// ---------------------------------------------------------------------------
// IMPLEMENTATIONS
// ---------------------------------------------------------------------------

impl Default for InitData {
    fn default() -> Self {
        Self {
            leg_kin_params: "leg_kin.toml",
            gait_ctrl_params: "gait_ctrl.toml",
        }
    }
}

impl OutputData {
    /// All joint angles flattened in leg then joint order.
    pub fn flatten(&self) -> [f64; NUM_LEGS * NUM_JOINTS] {
        let mut flat = [0.0; NUM_LEGS * NUM_JOINTS];

        for (leg, angles) in self.angles.iter().enumerate() {
            flat[leg * NUM_JOINTS..(leg + 1) * NUM_JOINTS].copy_from_slice(&angles.to_array());
        }

        flat
    }
}

impl State for GaitCtrl {
    type InitData = InitData;
    type InitError = GaitCtrlInitError;

    type InputData = InputData;
    type OutputData = OutputData;
    type StatusReport = StatusReport;
    type ProcError = GaitCtrlError;

    /// Initialise the GaitCtrl module.
    ///
    /// Loads the leg geometry and gait parameters, and opens the output
    /// archive if a session is given.
    fn init(&mut self, init_data: Self::InitData, session: Option<&Session>)
        -> Result<(), Self::InitError>
    {
        let leg_params: leg_kin::Params = params::load(init_data.leg_kin_params)?;
        let gait_params: Params = params::load(init_data.gait_ctrl_params)?;

        *self = Self::from_params(leg_params, gait_params)?;

        if let Some(session) = session {
            let mut headers = vec![String::from("time_s"), String::from("phase")];
            for leg in leg_kin::LegId::ALL.iter() {
                for joint in ["coxa", "femur", "tibia"].iter() {
                    headers.push(format!("leg_{}_{}", leg.number(), joint));
                }
            }
            let headers: Vec<&str> = headers.iter().map(|h| h.as_str()).collect();

            self.arch_output = Archiver::from_path(
                session, "gait_ctrl/joint_angles.csv", &headers
            ).map_err(|e| GaitCtrlInitError::ArchiveError(e.to_string()))?;
        }

        Ok(())
    }

    /// Perform cyclic processing of Gait Control.
    fn proc(&mut self, input_data: &Self::InputData)
        -> Result<(Self::OutputData, Self::StatusReport), Self::ProcError>
    {
        // Clear the status report
        self.report = StatusReport::default();

        // Check to see if there's a new command
        if let Some(cmd) = input_data.cmd {
            if !cmd.is_valid() {
                return Err(GaitCtrlError::InvalidGaitCmd(cmd));
            }

            debug!("New gait command: {:?}", cmd);
            self.current_cmd = Some(cmd);
            self.report.new_cmd = true;
        }

        let generator = self.generator.as_ref().ok_or(GaitCtrlError::NotInitialised)?;

        // Without a command hold the stance
        let cmd = self.current_cmd.unwrap_or_else(GaitCmd::stop);
        let t = input_data.phase;
        let robot = &input_data.robot;

        // Command validity has been checked so the options are populated
        let speed_x = cmd.speed_x.unwrap_or(0.0);
        let speed_y = cmd.speed_y.unwrap_or(0.0);
        let omega = cmd.omega.unwrap_or(0.0);

        let angles = match cmd.gait_type {
            GaitType::Stop => {
                self.report.stopped = true;
                generator.walk(t, 0.0, 0.0, robot)?
            },
            GaitType::Walk => generator.walk(t, speed_x, speed_y, robot)?,
            GaitType::Rotate => generator.rotate(t, omega, cmd.direction, robot)?,
            GaitType::Holonomic =>
                generator.holonomic(t, speed_x, speed_y, omega, cmd.direction, robot)?,
        };

        let output = OutputData { angles };

        trace!("GaitCtrl output at phase {:.3}: {:?}", t, output.flatten());

        self.phase = t;
        self.output = Some(output);

        Ok((output, self.report))
    }
}

impl Archived for GaitCtrl {
    fn write(&mut self) -> Result<(), Box<dyn std::error::Error>> {
        if let Some(output) = self.output {
            let mut row = vec![session::get_elapsed_seconds(), self.phase];
            row.extend_from_slice(&output.flatten());

            self.arch_output.write_row(&row)?;
        }

        Ok(())
    }
}

impl GaitCtrl {

    /// Build the module directly from parameters, without an archive.
    pub fn from_params(
        leg_params: leg_kin::Params,
        gait_params: Params
    ) -> Result<Self, GaitCtrlError> {
        let leg_kin = LegKin::new(leg_params)?;

        Ok(Self {
            generator: Some(GaitGenerator::new(leg_kin, gait_params)?),
            ..Default::default()
        })
    }

    /// The command currently being executed, if any.
    pub fn current_cmd(&self) -> Option<GaitCmd> {
        self.current_cmd
    }
}
