//! Main hexapod executable entry point.
//!
//! # Architecture
//!
//! The general execution methodology consists of:
//!
//!     - Initialise the session, logging and parameters
//!     - Initialise all modules
//!     - Main loop:
//!         - Gait phase determination
//!         - Gait control processing
//!         - Archiving
//!         - Sleep until the end of the cycle
//!
//! Joint angle demands are archived in the session so that they can be
//! replayed by a motor driver or plotted.

// ---------------------------------------------------------------------------
// IMPORTS
// ---------------------------------------------------------------------------

// External
use color_eyre::{Report, eyre::{WrapErr, eyre}};
use log::{debug, info, trace, warn};
use std::thread;
use std::time::{Duration, Instant};
use structopt::StructOpt;

// Internal
use hex_lib::{
    gait_ctrl::{self, GaitCmd, GaitCtrl, GaitType},
    leg_kin::Sign,
    params::HexExecParams,
};
use util::{
    archive::Archived,
    host,
    logger::{logger_init, LevelFilter},
    module::State,
    session::Session,
};

// ---------------------------------------------------------------------------
// DATA STRUCTURES
// ---------------------------------------------------------------------------

/// Command line options of the hexapod executable.
#[derive(Debug, StructOpt)]
#[structopt(name = "hex_exec", about = "Hexapod gait executable")]
struct Opt {
    /// Gait to execute: stop, walk, rotate or holonomic
    #[structopt(short, long, default_value = "stop")]
    gait: GaitType,

    /// Body speed along X in meters/second
    #[structopt(long, default_value = "0.0", allow_hyphen_values = true)]
    speed_x: f64,

    /// Body speed along Y in meters/second
    #[structopt(long, default_value = "0.0", allow_hyphen_values = true)]
    speed_y: f64,

    /// Turn per step in radians
    #[structopt(long, default_value = "0.0", allow_hyphen_values = true)]
    omega: f64,

    /// Turn clockwise instead of anticlockwise
    #[structopt(long)]
    reverse: bool,

    /// Duration of the run in seconds
    #[structopt(short, long, default_value = "10.0")]
    duration_s: f64,

    /// Log every cycle's output
    #[structopt(short, long)]
    verbose: bool,
}

// ---------------------------------------------------------------------------
// FUNCTIONS
// ---------------------------------------------------------------------------

/// Executable main function, entry point.
fn main() -> Result<(), Report> {

    color_eyre::install()?;

    let opt = Opt::from_args();

    // ---- EARLY INITIALISATION ----

    // Initialise session
    let session = Session::new(
        "hex_exec",
        "sessions"
    ).wrap_err("Failed to create the session")?;

    // Initialise logger
    let log_level = if opt.verbose { LevelFilter::Trace } else { LevelFilter::Debug };
    logger_init(log_level, &session)
        .wrap_err("Failed to initialise logging")?;

    // Log information on this execution.
    info!("Hexapod Executable\n");
    info!(
        "Running on: {:#?}",
        host::get_uname().wrap_err("Failed to get host information")?
    );
    info!("Session directory: {:?}\n", session.session_root);
    debug!("CLI options: {:?}", opt);

    // ---- LOAD PARAMETERS ----

    let exec_params: HexExecParams = util::params::load(
        "hex_exec.toml"
    ).wrap_err("Could not load exec params")?;

    if let Some(problem) = exec_params.check() {
        return Err(eyre!("Invalid exec params: {}", problem));
    }

    info!("Exec parameters loaded");

    // ---- BUILD THE COMMAND ----

    let direction = if opt.reverse { Sign::Negative } else { Sign::Positive };
    let cmd = match opt.gait {
        GaitType::Stop => GaitCmd::stop(),
        GaitType::Walk => GaitCmd::walk(opt.speed_x, opt.speed_y),
        GaitType::Rotate => GaitCmd::rotate(opt.omega, direction),
        GaitType::Holonomic =>
            GaitCmd::holonomic(opt.speed_x, opt.speed_y, opt.omega, direction),
    };

    if !cmd.is_valid() {
        return Err(eyre!("Invalid gait command: {:?}", cmd));
    }

    // ---- INITIALISE MODULES ----

    info!("Initialising modules...");

    let mut gait_ctrl = GaitCtrl::default();
    gait_ctrl.init(gait_ctrl::InitData::default(), Some(&session))
        .wrap_err("Failed to initialise GaitCtrl")?;
    info!("GaitCtrl init complete");

    info!("Module initialisation complete\n");

    // ---- MAIN LOOP ----

    info!("Begining main loop, executing {:?} for {} s\n", cmd.gait_type, opt.duration_s);

    let mut input = gait_ctrl::InputData {
        phase: 0.0,
        cmd: Some(cmd),
        robot: exec_params.robot,
    };

    let cycle_period = Duration::from_secs_f64(exec_params.cycle_period_s);
    let start_instant = Instant::now();
    let mut num_cycles: u64 = 0;
    let mut num_consec_cycle_overruns: u64 = 0;

    loop {

        // Get cycle start time
        let cycle_start_instant = Instant::now();
        let elapsed_s = (cycle_start_instant - start_instant).as_secs_f64();

        if elapsed_s >= opt.duration_s {
            break;
        }

        // ---- GAIT CONTROL ----

        input.phase = elapsed_s * exec_params.gait_frequency_hz;

        let (output, report) = gait_ctrl.proc(&input)
            .wrap_err("GaitCtrl processing failed")?;

        if report.new_cmd {
            info!("Executing new gait command: {:?}", input.cmd);
        }
        trace!("Joint angles: {:?}", output.flatten());

        // Command is latched by GaitCtrl
        input.cmd = None;

        // ---- ARCHIVE ----

        if let Err(e) = gait_ctrl.write() {
            warn!("Could not archive GaitCtrl output: {}", e);
        }

        // ---- CYCLE MANAGEMENT ----

        // Get the cycle duration and sleep for the rest of the period
        let cycle_dur = Instant::now() - cycle_start_instant;

        match cycle_period.checked_sub(cycle_dur) {
            Some(d) => {
                num_consec_cycle_overruns = 0;
                thread::sleep(d);
            },
            None => {
                warn!(
                    "Cycle overran by {:.06} s",
                    cycle_dur.as_secs_f64() - cycle_period.as_secs_f64()
                );
                num_consec_cycle_overruns += 1;
            }
        }

        num_cycles += 1;
    }

    info!("Main loop complete after {} cycles", num_cycles);
    if num_consec_cycle_overruns > 0 {
        warn!("Last {} cycles overran", num_consec_cycle_overruns);
    }

    Ok(())
}
