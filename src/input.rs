//! Interactive collection of the vehicle, driving conditions and system parameters.

use std::io::{BufRead, Write};

use crate::{
    core::{
        EstimationError,
        VehicleParameters,
        profile::{self, PROFILES},
        scenario::DEFAULT_USABLE_BATTERY,
        vehicle::{
            DEFAULT_DRAG_COEFFICIENT,
            DEFAULT_DRIVETRAIN_EFFICIENCY,
            DEFAULT_FRONTAL_AREA,
            DEFAULT_ROLLING_RESISTANCE_COEFFICIENT,
        },
    },
    prelude::*,
    prompt::{NumberField, Prompter},
    quantity::{
        angle::Grade,
        area::SquareMeters,
        distance::Kilometers,
        energy::KilowattHours,
        mass::Kilograms,
        ratios::Percentage,
        speed::KilometersPerHour,
    },
};

const BATTERY_CAPACITY: NumberField =
    NumberField::new("battery capacity", "battery capacity (kWh)", 10.0..=200.0);
const MASS: NumberField = NumberField::new("mass", "vehicle mass (kg)", 800.0..=3000.0);
const DRAG_COEFFICIENT: NumberField =
    NumberField::new("drag coefficient", "drag coefficient (Cd)", 0.15..=0.50)
        .with_default(DEFAULT_DRAG_COEFFICIENT);
const FRONTAL_AREA: NumberField =
    NumberField::new("frontal area", "frontal area (m²)", 1.5..=4.0)
        .with_default(DEFAULT_FRONTAL_AREA.0);
const ROLLING_RESISTANCE: NumberField =
    NumberField::new("rolling resistance", "rolling resistance (Crr)", 0.005..=0.020)
        .with_default(DEFAULT_ROLLING_RESISTANCE_COEFFICIENT);
const SPEED: NumberField = NumberField::new("speed", "speed (km/h)", 10.0..=200.0);
const SLOPE: NumberField =
    NumberField::new("slope", "slope percentage (%)", -15.0..=15.0).with_default(0.0);
const TRIP_DISTANCE: NumberField =
    NumberField::new("trip distance", "trip distance (km, empty to skip)", 0.0..=5000.0);
const DRIVETRAIN_EFFICIENCY: NumberField =
    NumberField::new("drivetrain efficiency", "drivetrain efficiency (%)", 70.0..=98.0)
        .with_default(DEFAULT_DRIVETRAIN_EFFICIENCY.0);
const USABLE_BATTERY: NumberField =
    NumberField::new("usable battery", "battery usable percentage (%)", 70.0..=100.0)
        .with_default(DEFAULT_USABLE_BATTERY.0);

/// Vehicle picked from the presets or entered by hand.
#[must_use]
pub struct SelectedVehicle {
    pub name: String,
    pub parameters: VehicleParameters,
}

pub struct DrivingConditions {
    pub speed: KilometersPerHour,
    pub grade: Grade,
    pub trip_distance: Option<Kilometers>,
}

pub struct SystemParameters {
    pub drivetrain_efficiency: Percentage,
    pub usable_battery: Percentage,
}

enum VehicleSource {
    Preset,
    Custom,
}

pub fn select_vehicle<R: BufRead, W: Write>(
    prompter: &mut Prompter<R, W>,
) -> Result<SelectedVehicle> {
    prompter.say("--- Vehicle Specifications ---")?;
    prompter.say("")?;
    prompter.say("Choose vehicle specification method")?;
    prompter.say(" 1. Use preset vehicle profile")?;
    prompter.say(" 2. Enter custom specifications")?;
    prompter.say("")?;
    let source = prompter.ask("Enter choice 1 or 2: ", |answer| match answer {
        "1" => Ok(VehicleSource::Preset),
        "2" => Ok(VehicleSource::Custom),
        _ => Err(EstimationError::invalid_input("choice", "please enter 1 or 2")),
    })?;
    match source {
        VehicleSource::Preset => select_preset(prompter),
        VehicleSource::Custom => enter_custom(prompter),
    }
}

fn select_preset<R: BufRead, W: Write>(prompter: &mut Prompter<R, W>) -> Result<SelectedVehicle> {
    prompter.say("")?;
    prompter.say("Available vehicle presets:")?;
    for (index, profile) in PROFILES.iter().enumerate() {
        prompter.say(format_args!(" {}. {} ({})", index + 1, profile.name, profile.key))?;
    }
    prompter.say("")?;
    let profile = prompter.ask("Select vehicle (number or key): ", profile::find_by_choice)?;
    info!(key = profile.key, "selected the preset");
    prompter.say("")?;
    prompter.say(format_args!("Selected: {}", profile.name))?;
    prompter.say(format_args!(" Mass: {}", profile.vehicle.mass))?;
    prompter.say(format_args!(" Battery: {}", profile.vehicle.battery_capacity))?;
    prompter.say("")?;
    Ok(SelectedVehicle { name: profile.name.to_string(), parameters: profile.vehicle })
}

fn enter_custom<R: BufRead, W: Write>(prompter: &mut Prompter<R, W>) -> Result<SelectedVehicle> {
    prompter.say("")?;
    prompter.say("Enter custom vehicle specification")?;
    prompter.say("")?;
    let battery_capacity = KilowattHours(prompter.number(&BATTERY_CAPACITY)?);
    let mass = Kilograms(prompter.number(&MASS)?);
    let drag_coefficient = prompter.number(&DRAG_COEFFICIENT)?;
    let frontal_area = SquareMeters(prompter.number(&FRONTAL_AREA)?);
    let rolling_resistance_coefficient = prompter.number(&ROLLING_RESISTANCE)?;
    prompter.say("")?;
    let parameters = VehicleParameters::builder()
        .mass(mass)
        .frontal_area(frontal_area)
        .drag_coefficient(drag_coefficient)
        .rolling_resistance_coefficient(rolling_resistance_coefficient)
        .battery_capacity(battery_capacity)
        .build()?;
    Ok(SelectedVehicle { name: "Custom vehicle".to_string(), parameters })
}

pub fn collect_driving_conditions<R: BufRead, W: Write>(
    prompter: &mut Prompter<R, W>,
) -> Result<DrivingConditions> {
    prompter.say("--- Driving Conditions ---")?;
    prompter.say("")?;
    let speed = KilometersPerHour(prompter.number(&SPEED)?);
    prompter.say("Road slope options:")?;
    prompter.say(" - Enter 0 for flat road")?;
    prompter.say(" - Enter a positive number for uphill (e.g., 5 for 5%)")?;
    prompter.say(" - Enter a negative number for downhill (e.g., -3 for -3%)")?;
    let grade = Grade(prompter.number(&SLOPE)?);
    let trip_distance = prompter.ask("Enter trip distance (km, empty to skip): ", |answer| {
        if answer.is_empty() { Ok(None) } else { TRIP_DISTANCE.parse(answer).map(Kilometers).map(Some) }
    })?;
    prompter.say("")?;
    Ok(DrivingConditions { speed, grade, trip_distance })
}

pub fn collect_system_parameters<R: BufRead, W: Write>(
    prompter: &mut Prompter<R, W>,
) -> Result<SystemParameters> {
    prompter.say("--- System Efficiency Settings ---")?;
    prompter.say("Press Enter to use the default values")?;
    prompter.say("")?;
    let drivetrain_efficiency = Percentage(prompter.number(&DRIVETRAIN_EFFICIENCY)?);
    let usable_battery = Percentage(prompter.number(&USABLE_BATTERY)?);
    prompter.say("")?;
    Ok(SystemParameters { drivetrain_efficiency, usable_battery })
}
