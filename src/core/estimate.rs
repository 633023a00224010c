use serde::Serialize;
use tracing::{debug, instrument};

use crate::{
    core::{
        DrivingScenario,
        Environment,
        EstimationError,
        VehicleParameters,
        physics::{self, PowerBreakdown},
    },
    quantity::{
        angle::Grade,
        consumption::{JoulesPerMeter, KilowattHoursPerKilometer, WattHoursPerKilometer},
        distance::{Kilometers, Meters},
        energy::KilowattHours,
        power::Watts,
        speed::KilometersPerHour,
    },
};

/// Result of a single estimation run.
#[must_use]
#[derive(Copy, Clone, Debug, Serialize)]
pub struct Estimate {
    pub speed: KilometersPerHour,
    pub grade: Grade,
    pub breakdown: PowerBreakdown,

    /// Electrical power drawn from the battery, after the drivetrain losses.
    pub battery_power: Watts,

    pub consumption: WattHoursPerKilometer,
    pub usable_energy: KilowattHours,
    pub range: Kilometers,
    pub trip: Option<TripEstimate>,
}

#[must_use]
#[derive(Copy, Clone, Debug, Serialize)]
pub struct TripEstimate {
    pub distance: Kilometers,
    pub energy: KilowattHours,

    /// Usable energy left on arrival, negative when the trip cannot be completed.
    pub remaining_energy: KilowattHours,

    pub is_reachable: bool,
}

impl TripEstimate {
    fn new(distance: Kilometers, consumption: JoulesPerMeter, usable_energy: KilowattHours) -> Self {
        let energy = KilowattHours::from(physics::trip_energy(consumption, Meters::from(distance)));
        let remaining_energy = usable_energy - energy;
        Self { distance, energy, remaining_energy, is_reachable: remaining_energy >= KilowattHours::ZERO }
    }
}

impl Estimate {
    /// Run the whole model once: forces, powers, consumption and finally the range.
    #[instrument(skip_all, fields(speed = %scenario.speed, grade = %scenario.grade))]
    pub fn calculate(
        environment: &Environment,
        vehicle: &VehicleParameters,
        scenario: &DrivingScenario,
    ) -> Result<Self, EstimationError> {
        let breakdown =
            PowerBreakdown::calculate(scenario.speed, environment, vehicle, scenario.grade);
        debug!(
            aerodynamic = %breakdown.aerodynamic,
            rolling = %breakdown.rolling,
            gradient = %breakdown.gradient,
            "calculated the wheel power",
        );

        let battery_power =
            physics::total_propulsion_power(scenario.speed, environment, vehicle, scenario.grade);
        let usable_energy = physics::usable_energy(vehicle.battery_capacity, scenario.usable_battery);
        let consumption = physics::energy_per_distance(battery_power, scenario.speed)?;
        let range = Kilometers::from(physics::estimate_range(
            usable_energy.into(),
            battery_power,
            scenario.speed,
        )?);
        debug!(%battery_power, %consumption, %usable_energy, %range, "estimated");

        Ok(Self {
            speed: scenario.speed.into(),
            grade: scenario.grade,
            breakdown,
            battery_power,
            consumption: consumption.into(),
            usable_energy,
            range,
            trip: scenario
                .trip_distance
                .map(|distance| TripEstimate::new(distance, consumption, usable_energy)),
        })
    }

    pub fn consumption_per_kilometer(&self) -> KilowattHoursPerKilometer {
        self.consumption.into()
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;
    use crate::{
        core::profile,
        quantity::{
            area::SquareMeters,
            mass::Kilograms,
            ratios::Percentage,
            speed::MetersPerSecond,
        },
    };

    fn reference_vehicle() -> VehicleParameters {
        VehicleParameters::builder()
            .mass(Kilograms(1500.0))
            .frontal_area(SquareMeters(2.2))
            .drag_coefficient(0.3)
            .rolling_resistance_coefficient(0.01)
            .drivetrain_efficiency(0.9)
            .battery_capacity(KilowattHours(60.0))
            .build()
            .unwrap()
    }

    #[test]
    fn reference_scenario() {
        let scenario = DrivingScenario::builder()
            .speed(MetersPerSecond(25.0))
            .usable_battery(Percentage(100.0))
            .build()
            .unwrap();
        let estimate =
            Estimate::calculate(&Environment::STANDARD, &reference_vehicle(), &scenario).unwrap();
        assert_abs_diff_eq!(estimate.range.0, 486.235_520_330_16, epsilon = 1e-6);
        assert_abs_diff_eq!(estimate.speed.0, 90.0, epsilon = 1e-9);
        assert_abs_diff_eq!(estimate.battery_power.0, 11_105.729_166_666_666, epsilon = 1e-6);
        assert_abs_diff_eq!(estimate.consumption.0, 123.396_990_740_740_7, epsilon = 1e-6);
        assert_abs_diff_eq!(estimate.consumption_per_kilometer().0, 0.123_397, epsilon = 1e-6);
        assert!(estimate.trip.is_none());
    }

    #[test]
    fn compact_profile_at_highway_speed() {
        let scenario = DrivingScenario::builder()
            .speed(KilometersPerHour(100.0))
            .build()
            .unwrap();
        let vehicle = profile::find("compact").unwrap().vehicle;
        let estimate = Estimate::calculate(&Environment::STANDARD, &vehicle, &scenario).unwrap();
        assert_abs_diff_eq!(estimate.usable_energy.0, 45.0, epsilon = 1e-9);
        assert_abs_diff_eq!(estimate.range.0, 325.274_081_418_800_85, epsilon = 1e-6);
    }

    #[test]
    fn trip() {
        let scenario = DrivingScenario::builder()
            .speed(MetersPerSecond(25.0))
            .usable_battery(Percentage(100.0))
            .trip_distance(Kilometers(100.0))
            .build()
            .unwrap();
        let estimate =
            Estimate::calculate(&Environment::STANDARD, &reference_vehicle(), &scenario).unwrap();
        let trip = estimate.trip.unwrap();
        assert_abs_diff_eq!(trip.energy.0, 12.339_699_074_074_07, epsilon = 1e-6);
        assert_abs_diff_eq!(trip.remaining_energy.0, 60.0 - 12.339_699_074_074_07, epsilon = 1e-6);
        assert!(trip.is_reachable);
    }

    #[test]
    fn unreachable_trip() {
        let scenario = DrivingScenario::builder()
            .speed(MetersPerSecond(25.0))
            .trip_distance(Kilometers(1000.0))
            .build()
            .unwrap();
        let estimate =
            Estimate::calculate(&Environment::STANDARD, &reference_vehicle(), &scenario).unwrap();
        let trip = estimate.trip.unwrap();
        assert!(!trip.is_reachable);
        assert!(trip.remaining_energy < KilowattHours::ZERO);
    }

    #[test]
    fn steep_downhill_is_unbounded() {
        let scenario = DrivingScenario::builder()
            .speed(MetersPerSecond(15.0))
            .grade(Grade(-15.0))
            .build()
            .unwrap();
        let error = Estimate::calculate(&Environment::STANDARD, &reference_vehicle(), &scenario)
            .unwrap_err();
        assert!(matches!(error, EstimationError::DivisionGuard { .. }));
    }
}
