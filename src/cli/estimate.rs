//! One-shot, non-interactive estimation.

use std::io::Write;

use clap::Parser;
use serde::Serialize;

use crate::{
    cli::DistanceUnit,
    core::{
        DrivingScenario,
        Environment,
        Estimate,
        VehicleParameters,
        profile,
        vehicle::{
            DEFAULT_DRAG_COEFFICIENT,
            DEFAULT_DRIVETRAIN_EFFICIENCY,
            DEFAULT_FRONTAL_AREA,
            DEFAULT_ROLLING_RESISTANCE_COEFFICIENT,
        },
    },
    prelude::*,
    quantity::{
        angle::Grade,
        area::SquareMeters,
        distance::{Kilometers, Miles},
        energy::KilowattHours,
        mass::Kilograms,
        ratios::Percentage,
        speed::KilometersPerHour,
    },
    tables::build_estimate_table,
};

#[derive(Parser)]
pub struct EstimateArgs {
    #[clap(flatten)]
    pub vehicle: VehicleArgs,

    #[clap(flatten)]
    pub scenario: ScenarioArgs,

    /// Distance unit for the printed range.
    #[clap(long, value_enum, default_value_t, env = "DISTANCE_UNIT")]
    pub unit: DistanceUnit,

    #[clap(long, value_enum, default_value_t)]
    pub format: OutputFormat,
}

#[derive(Copy, Clone, Debug, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable table.
    #[default]
    Table,

    /// Machine-readable JSON report.
    Json,
}

/// Either a preset profile, optionally with individual overrides, or a fully custom vehicle.
#[derive(Parser)]
pub struct VehicleArgs {
    /// Preset vehicle profile key, see the `profiles` command.
    #[clap(long, env = "VEHICLE_PROFILE")]
    pub profile: Option<String>,

    /// Vehicle mass in kilograms.
    #[clap(long = "mass-kg")]
    pub mass: Option<Kilograms>,

    /// Aerodynamic drag coefficient.
    #[clap(long = "drag-coefficient")]
    pub drag_coefficient: Option<f64>,

    /// Frontal area in square meters.
    #[clap(long = "frontal-area-m2")]
    pub frontal_area: Option<SquareMeters>,

    /// Rolling resistance coefficient.
    #[clap(long = "rolling-resistance")]
    pub rolling_resistance_coefficient: Option<f64>,

    /// Nominal battery capacity in kilowatt-hours.
    #[clap(long = "battery-kwh")]
    pub battery_capacity: Option<KilowattHours>,

    /// Drivetrain efficiency in percent.
    #[clap(long = "efficiency-percent", env = "DRIVETRAIN_EFFICIENCY_PERCENT")]
    pub drivetrain_efficiency: Option<Percentage>,
}

impl VehicleArgs {
    /// Resolve the vehicle name and parameters.
    pub fn resolve(&self) -> Result<(&str, VehicleParameters)> {
        let (name, preset) = match &self.profile {
            Some(key) => {
                let profile = profile::find(key)?;
                (profile.name, Some(profile.vehicle))
            }
            None => ("Custom vehicle", None),
        };
        let parameters = VehicleParameters::builder()
            .mass(
                self.mass
                    .or(preset.map(|preset| preset.mass))
                    .context("either `--profile` or `--mass-kg` is required")?,
            )
            .battery_capacity(
                self.battery_capacity
                    .or(preset.map(|preset| preset.battery_capacity))
                    .context("either `--profile` or `--battery-kwh` is required")?,
            )
            .drag_coefficient(
                self.drag_coefficient
                    .or(preset.map(|preset| preset.drag_coefficient))
                    .unwrap_or(DEFAULT_DRAG_COEFFICIENT),
            )
            .frontal_area(
                self.frontal_area
                    .or(preset.map(|preset| preset.frontal_area))
                    .unwrap_or(DEFAULT_FRONTAL_AREA),
            )
            .rolling_resistance_coefficient(
                self.rolling_resistance_coefficient
                    .or(preset.map(|preset| preset.rolling_resistance_coefficient))
                    .unwrap_or(DEFAULT_ROLLING_RESISTANCE_COEFFICIENT),
            )
            .drivetrain_efficiency(
                self.drivetrain_efficiency
                    .map(Percentage::to_proportion)
                    .or(preset.map(|preset| preset.drivetrain_efficiency))
                    .unwrap_or_else(|| DEFAULT_DRIVETRAIN_EFFICIENCY.to_proportion()),
            )
            .build()?;
        Ok((name, parameters))
    }
}

#[derive(Parser)]
pub struct ScenarioArgs {
    /// Constant cruising speed in kilometers per hour.
    #[clap(long = "speed-kmh", env = "SPEED_KMH")]
    pub speed: KilometersPerHour,

    /// Road grade in percent, negative for downhill.
    #[clap(long = "grade-percent", default_value = "0", allow_negative_numbers = true)]
    pub grade: Grade,

    /// Usable share of the nominal battery capacity, in percent.
    #[clap(long = "usable-percent", default_value = "90", env = "USABLE_BATTERY_PERCENT")]
    pub usable_battery: Percentage,

    /// Optional trip distance in kilometers to check against the range.
    #[clap(long = "trip-km")]
    pub trip_distance: Option<Kilometers>,
}

impl ScenarioArgs {
    pub fn to_scenario(&self) -> Result<DrivingScenario> {
        Ok(DrivingScenario::builder()
            .speed(self.speed)
            .grade(self.grade)
            .maybe_trip_distance(self.trip_distance)
            .usable_battery(self.usable_battery)
            .build()?)
    }
}

#[derive(Serialize)]
struct Report<'a> {
    vehicle: &'a str,
    parameters: &'a VehicleParameters,
    environment: &'a Environment,
    scenario: &'a DrivingScenario,
    estimate: &'a Estimate,
    range_miles: Miles,
}

#[instrument(skip_all)]
pub fn run(args: &EstimateArgs, environment: &Environment, output: &mut impl Write) -> Result {
    let (vehicle, parameters) = args.vehicle.resolve()?;
    let scenario = args.scenario.to_scenario()?;
    let estimate = Estimate::calculate(environment, &parameters, &scenario)?;
    info!(vehicle, range = %estimate.range, "estimated");

    match args.format {
        OutputFormat::Table => {
            writeln!(output, "{vehicle}")?;
            writeln!(output, "{}", build_estimate_table(&estimate, args.unit))?;
        }
        OutputFormat::Json => {
            let report = Report {
                vehicle,
                parameters: &parameters,
                environment,
                scenario: &scenario,
                estimate: &estimate,
                range_miles: estimate.range.into(),
            };
            serde_json::to_writer_pretty(&mut *output, &report)?;
            writeln!(output)?;
        }
    }
    Ok(())
}
