pub mod estimate;
mod interactive;

use clap::{ArgAction, Parser, Subcommand};

pub use self::{
    estimate::EstimateArgs,
    interactive::{InteractiveArgs, Session},
};
use crate::{
    core::Environment,
    prelude::*,
    quantity::{acceleration::MetersPerSecondSquared, density::KilogramsPerCubicMeter},
};

#[derive(Parser)]
#[command(author, version, about, propagate_version = true)]
#[must_use]
pub struct Args {
    /// Increase the log verbosity: `-v` for the summary, `-vv` for the intermediate results.
    #[clap(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[clap(flatten)]
    pub environment: EnvironmentArgs,

    /// Interactive session settings, when no subcommand is given.
    #[clap(flatten)]
    pub interactive: InteractiveArgs,

    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Args {
    pub fn into_command(self) -> Command {
        self.command.unwrap_or(Command::Interactive(self.interactive))
    }
}

#[derive(Subcommand)]
pub enum Command {
    /// Menu-driven estimation session (default).
    #[clap(name = "interactive")]
    Interactive(InteractiveArgs),

    /// One-shot estimation from the command-line arguments.
    #[clap(name = "estimate")]
    Estimate(Box<EstimateArgs>),

    /// List the preset vehicle profiles.
    #[clap(name = "profiles")]
    Profiles,
}

/// Ambient conditions, standard sea-level air on Earth by default.
#[derive(Copy, Clone, Parser)]
pub struct EnvironmentArgs {
    /// Air density in kilograms per cubic meter.
    #[clap(long = "air-density", default_value = "1.225", env = "AIR_DENSITY", global = true)]
    pub air_density: KilogramsPerCubicMeter,

    /// Gravitational acceleration in meters per second squared.
    #[clap(long = "gravity", default_value = "9.81", env = "GRAVITY", global = true)]
    pub gravity: MetersPerSecondSquared,
}

impl EnvironmentArgs {
    pub fn try_into_environment(self) -> Result<Environment> {
        Environment::try_new(self.air_density, self.gravity)
            .context("invalid environment parameters")
    }
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum DistanceUnit {
    /// Kilometers.
    #[default]
    Km,

    /// Statute miles.
    Mi,
}
