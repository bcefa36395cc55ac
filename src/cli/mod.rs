// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Command-line interface code. More specific options for `zmanim`
//! subcommands are contained in modules.
//!
//! All booleans must have `#[serde(default)]` annotated, and anything that
//! isn't a boolean must be optional. This allows all arguments to be optional
//! *and* usable in an arguments file.
//!
//! Only 3 things should be public in this module: `Zmanim`, `Zmanim::run`, and
//! `ZmanimError`.

#[macro_use]
mod common;
mod calibration;
mod error;
mod show;
mod sun;

pub use error::ZmanimError;

use chrono::Local;
use clap::{AppSettings, Args, Parser, Subcommand};
use log::info;

use crate::{
    calibration::{CalibrationOffset, ReferenceObservation},
    constants::{CALIBRATION_ENABLED, SHUL_LOCATION},
    solar::compute_sunset,
};

// Add build-time information from the "built" crate.
include!(concat!(env!("OUT_DIR"), "/built.rs"));

#[derive(Debug, Parser)]
#[clap(
    version,
    author,
    about = "Calibrated Mincha and Maariv times for the shul's weekly board"
)]
#[clap(global_setting(AppSettings::DeriveDisplayOrder))]
#[clap(disable_help_subcommand = true)]
#[clap(infer_subcommands = true)]
#[clap(propagate_version = true)]
#[clap(infer_long_args = true)]
pub struct Zmanim {
    #[clap(flatten)]
    global_opts: GlobalArgs,

    #[clap(subcommand)]
    command: Command,
}

#[derive(Debug, Args)]
struct GlobalArgs {
    /// The verbosity of the program. Increase by specifying multiple times
    /// (e.g. -vv). The default is to print only high-level information.
    #[clap(short, long, parse(from_occurrences))]
    #[clap(global = true)]
    verbosity: u8,
}

#[derive(Debug, Subcommand)]
#[clap(arg_required_else_help = true)]
enum Command {
    #[clap(alias = "board")]
    #[clap(about = "Compute this week's prayer times and the reading, and show them on the board.")]
    Show(show::ShowArgs),

    #[clap(alias = "sunsets")]
    #[clap(about = "Print raw and calibrated sunrise/sunset times for a run of days.")]
    Sun(sun::SunArgs),

    #[clap(about = "Print the calibration reference and the offset derived from it.")]
    Calibration(calibration::CalibrationArgs),
}

impl Zmanim {
    pub fn run(self) -> Result<(), ZmanimError> {
        // Set up logging.
        let GlobalArgs { verbosity } = self.global_opts;
        setup_logging(verbosity).expect("Failed to initialise logging.");

        // Print the version of zmanim and its build-time information.
        let sub_command = match &self.command {
            Command::Show(_) => "show",
            Command::Sun(_) => "sun",
            Command::Calibration(_) => "calibration",
        };
        info!("zmanim {} {}", sub_command, env!("CARGO_PKG_VERSION"));
        display_build_info();

        // The offset is computed once and shared by everything below.
        let reference = ReferenceObservation::compiled()?;
        let offset = CalibrationOffset::compute(
            &reference,
            &SHUL_LOCATION,
            &Local,
            CALIBRATION_ENABLED,
            compute_sunset,
        )?;

        match self.command {
            Command::Show(args) => args.merge()?.run(&offset)?,
            Command::Sun(args) => args.run(&offset)?,
            Command::Calibration(args) => args.run(&reference, &offset),
        }

        common::display_warnings();
        info!("zmanim {} complete.", sub_command);
        Ok(())
    }
}

/// Activate a logger. All log messages are put onto `stdout`. `env_logger`
/// automatically only uses colours and fancy symbols if we're on a tty (e.g. a
/// terminal); piped output will be formatted sensibly. Source code lines are
/// displayed in log messages when verbosity >= 3.
fn setup_logging(verbosity: u8) -> Result<(), log::SetLoggerError> {
    let mut builder = env_logger::Builder::from_default_env();
    builder.target(env_logger::Target::Stdout);
    builder.format_target(false);
    match verbosity {
        0 => builder.filter_level(log::LevelFilter::Info),
        1 => builder.filter_level(log::LevelFilter::Debug),
        2 => builder.filter_level(log::LevelFilter::Trace),
        _ => {
            builder.filter_level(log::LevelFilter::Trace);
            builder.format(|buf, record| {
                use std::io::Write;

                let timestamp = buf.timestamp();
                let level = record.level();
                let target = record.target();
                let line = record.line().unwrap_or(0);
                let message = record.args();

                writeln!(buf, "[{timestamp} {level} {target}:{line}] {message}")
            })
        }
    };
    builder.try_init()
}

/// Write many info-level log lines of how this executable was compiled.
fn display_build_info() {
    let dirty = match GIT_DIRTY {
        Some(true) => " (dirty)",
        _ => "",
    };
    match GIT_COMMIT_HASH_SHORT {
        Some(hash) => {
            info!("Compiled on git commit hash: {hash}{dirty}");
        }
        None => info!("Compiled on git commit hash: <no git info>"),
    }
    if let Some(hr) = GIT_HEAD_REF {
        info!("            git head ref: {}", hr);
    }
    info!("            {}", BUILT_TIME_UTC);
    info!("         with compiler {}", RUSTC_VERSION);
    info!("");
}
