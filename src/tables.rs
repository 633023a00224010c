use comfy_table::{Attribute, Cell, CellAlignment, Color, Table, modifiers, presets};

use crate::{
    cli::DistanceUnit,
    core::{Estimate, profile::Profile},
    quantity::{
        angle::{Degrees, Grade, Radians},
        distance::{Kilometers, Miles},
        energy::KilowattHours,
        power::{Kilowatts, Watts},
        speed::{KilometersPerHour, MetersPerSecond, MilesPerHour},
    },
};

fn new_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(presets::UTF8_FULL_CONDENSED)
        .apply_modifier(modifiers::UTF8_ROUND_CORNERS)
        .enforce_styling();
    table
}

fn format_distance(distance: Kilometers, unit: DistanceUnit) -> String {
    match unit {
        DistanceUnit::Km => distance.to_string(),
        DistanceUnit::Mi => Miles::from(distance).to_string(),
    }
}

fn format_speed(speed: KilometersPerHour, unit: DistanceUnit) -> String {
    match unit {
        DistanceUnit::Km => speed.to_string(),
        DistanceUnit::Mi => MilesPerHour::from(MetersPerSecond::from(speed)).to_string(),
    }
}

fn format_grade(grade: Grade) -> String {
    format!("{grade} ({})", Degrees::from(Radians::from(grade)))
}

#[must_use]
pub fn build_estimate_table(estimate: &Estimate, unit: DistanceUnit) -> Table {
    let mut table = new_table();
    table.set_header(vec!["Estimate", "Value"]);
    table.add_row(vec![
        Cell::new("Estimated range").add_attribute(Attribute::Bold),
        Cell::new(format_distance(estimate.range, unit))
            .set_alignment(CellAlignment::Right)
            .add_attribute(Attribute::Bold),
    ]);
    table.add_row(vec![
        Cell::new("Energy consumption"),
        Cell::new(estimate.consumption_per_kilometer()).set_alignment(CellAlignment::Right),
    ]);
    table.add_row(vec![
        Cell::new("Driving speed"),
        Cell::new(format_speed(estimate.speed, unit)).set_alignment(CellAlignment::Right),
    ]);
    table.add_row(vec![
        Cell::new("Road grade").add_attribute(Attribute::Dim),
        Cell::new(format_grade(estimate.grade)).set_alignment(CellAlignment::Right),
    ]);
    table.add_row(vec![
        Cell::new("Usable energy").add_attribute(Attribute::Dim),
        Cell::new(estimate.usable_energy).set_alignment(CellAlignment::Right),
    ]);
    table.add_row(vec![
        Cell::new("Battery power").add_attribute(Attribute::Dim),
        Cell::new(Kilowatts::from(estimate.battery_power)).set_alignment(CellAlignment::Right),
    ]);
    for (label, power) in [
        ("├ aerodynamic drag", estimate.breakdown.aerodynamic),
        ("├ rolling resistance", estimate.breakdown.rolling),
        ("└ road grade", estimate.breakdown.gradient),
    ] {
        table.add_row(vec![
            Cell::new(label).add_attribute(Attribute::Dim),
            Cell::new(power).set_alignment(CellAlignment::Right).fg(if power < Watts::ZERO {
                Color::Green
            } else {
                Color::Reset
            }),
        ]);
    }
    if let Some(trip) = estimate.trip {
        table.add_row(vec![
            Cell::new("Trip distance"),
            Cell::new(format_distance(trip.distance, unit)).set_alignment(CellAlignment::Right),
        ]);
        table.add_row(vec![
            Cell::new("Trip energy"),
            Cell::new(trip.energy).set_alignment(CellAlignment::Right),
        ]);
        table.add_row(vec![
            Cell::new("Remaining on arrival"),
            Cell::new(trip.remaining_energy).set_alignment(CellAlignment::Right).fg(
                if trip.remaining_energy >= KilowattHours::ZERO { Color::Green } else { Color::Red },
            ),
        ]);
    }
    table
}

#[must_use]
pub fn build_profiles_table(profiles: &[Profile]) -> Table {
    let mut table = new_table();
    table.set_header(vec!["#", "Key", "Vehicle", "Mass", "Cd", "Area", "Crr", "Battery", "η"]);
    for (index, profile) in profiles.iter().enumerate() {
        let vehicle = &profile.vehicle;
        table.add_row(vec![
            Cell::new(index + 1).add_attribute(Attribute::Dim),
            Cell::new(profile.key).add_attribute(Attribute::Bold),
            Cell::new(profile.name),
            Cell::new(vehicle.mass).set_alignment(CellAlignment::Right),
            Cell::new(format!("{:.2}", vehicle.drag_coefficient)).set_alignment(CellAlignment::Right),
            Cell::new(vehicle.frontal_area).set_alignment(CellAlignment::Right),
            Cell::new(format!("{:.3}", vehicle.rolling_resistance_coefficient))
                .set_alignment(CellAlignment::Right),
            Cell::new(vehicle.battery_capacity).set_alignment(CellAlignment::Right),
            Cell::new(format!("{:.0}%", vehicle.drivetrain_efficiency * 100.0))
                .set_alignment(CellAlignment::Right),
        ]);
    }
    table
}
