//! Preset vehicle profiles.

use itertools::Itertools;
use serde::Serialize;

use crate::{
    core::{EstimationError, VehicleParameters},
    quantity::{area::SquareMeters, energy::KilowattHours, mass::Kilograms},
};

#[must_use]
#[derive(Copy, Clone, Debug, Serialize)]
pub struct Profile {
    /// Lookup key, as typed on the command line.
    pub key: &'static str,

    /// Human-readable vehicle name.
    pub name: &'static str,

    pub vehicle: VehicleParameters,
}

pub static PROFILES: &[Profile] = &[
    Profile {
        key: "compact",
        name: "Nissan Leaf",
        vehicle: VehicleParameters {
            mass: Kilograms(1500.0),
            frontal_area: SquareMeters(2.2),
            drag_coefficient: 0.28,
            rolling_resistance_coefficient: 0.010,
            drivetrain_efficiency: 0.88,
            battery_capacity: KilowattHours(50.0),
        },
    },
    Profile {
        key: "suv",
        name: "Volvo EX90",
        vehicle: VehicleParameters {
            mass: Kilograms(2200.0),
            frontal_area: SquareMeters(2.8),
            drag_coefficient: 0.32,
            rolling_resistance_coefficient: 0.012,
            drivetrain_efficiency: 0.88,
            battery_capacity: KilowattHours(80.0),
        },
    },
    Profile {
        key: "sports",
        name: "Tesla Roadster",
        vehicle: VehicleParameters {
            mass: Kilograms(1800.0),
            frontal_area: SquareMeters(2.0),
            drag_coefficient: 0.24,
            rolling_resistance_coefficient: 0.009,
            drivetrain_efficiency: 0.88,
            battery_capacity: KilowattHours(75.0),
        },
    },
];

/// Look the profile up by its exact key.
pub fn find(key: &str) -> Result<&'static Profile, EstimationError> {
    PROFILES.iter().find(|profile| profile.key == key).ok_or_else(|| not_found(key))
}

/// Look the profile up by its 1-based position in the menu.
pub fn find_by_menu_index(index: usize) -> Option<&'static Profile> {
    index.checked_sub(1).and_then(|index| PROFILES.get(index))
}

/// Resolve a menu answer: either the menu number or the profile key.
pub fn find_by_choice(choice: &str) -> Result<&'static Profile, EstimationError> {
    let choice = choice.trim();
    match choice.parse::<usize>() {
        Ok(index) => find_by_menu_index(index).ok_or_else(|| not_found(choice)),
        Err(_) => find(choice),
    }
}

fn not_found(key: &str) -> EstimationError {
    EstimationError::NotFound {
        key: key.to_string(),
        expected: PROFILES.iter().map(|profile| profile.key).join(", "),
    }
}
