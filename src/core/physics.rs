//! Road-load model: resistive forces, the power to overcome them and the resulting range.
//!
//! All functions are pure. The steady-state assumption is that the vehicle cruises at
//! a constant speed on a constant grade, so there is no inertial term.

use serde::Serialize;

use crate::{
    core::{Environment, EstimationError, VehicleParameters},
    quantity::{
        acceleration::MetersPerSecondSquared,
        angle::{Grade, Radians},
        area::SquareMeters,
        consumption::JoulesPerMeter,
        density::KilogramsPerCubicMeter,
        distance::Meters,
        energy::{Joules, KilowattHours},
        force::Newtons,
        mass::Kilograms,
        power::Watts,
        ratios::Percentage,
        speed::MetersPerSecond,
    },
};

/// `F = ½ ρ Cd A v²`.
pub fn aerodynamic_drag_force(
    speed: MetersPerSecond,
    air_density: KilogramsPerCubicMeter,
    drag_coefficient: f64,
    frontal_area: SquareMeters,
) -> Newtons {
    Newtons(0.5 * air_density.0 * drag_coefficient * frontal_area.0 * speed.0 * speed.0)
}

/// Drag power grows with the cube of the speed.
pub fn aerodynamic_drag_power(
    speed: MetersPerSecond,
    air_density: KilogramsPerCubicMeter,
    drag_coefficient: f64,
    frontal_area: SquareMeters,
) -> Watts {
    aerodynamic_drag_force(speed, air_density, drag_coefficient, frontal_area) * speed
}

/// `F = Crr m g`, flat-road approximation with a constant coefficient.
pub fn rolling_resistance_force(
    mass: Kilograms,
    gravity: MetersPerSecondSquared,
    rolling_coefficient: f64,
) -> Newtons {
    mass * gravity * rolling_coefficient
}

pub fn rolling_resistance_power(
    mass: Kilograms,
    gravity: MetersPerSecondSquared,
    rolling_coefficient: f64,
    speed: MetersPerSecond,
) -> Watts {
    rolling_resistance_force(mass, gravity, rolling_coefficient) * speed
}

/// `F = m g sin(atan(grade))`: negative when going downhill.
pub fn gradient_resistance_force(
    mass: Kilograms,
    gravity: MetersPerSecondSquared,
    grade: Grade,
) -> Newtons {
    mass * gravity * Radians::from(grade).sin()
}

pub fn gradient_resistance_power(
    mass: Kilograms,
    gravity: MetersPerSecondSquared,
    grade: Grade,
    speed: MetersPerSecond,
) -> Watts {
    gradient_resistance_force(mass, gravity, grade) * speed
}

/// Mechanical power at the wheels, per resistance component.
#[must_use]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize)]
pub struct PowerBreakdown {
    pub aerodynamic: Watts,
    pub rolling: Watts,

    /// May be negative downhill.
    pub gradient: Watts,
}

impl PowerBreakdown {
    pub fn calculate(
        speed: MetersPerSecond,
        environment: &Environment,
        vehicle: &VehicleParameters,
        grade: Grade,
    ) -> Self {
        Self {
            aerodynamic: aerodynamic_drag_power(
                speed,
                environment.air_density,
                vehicle.drag_coefficient,
                vehicle.frontal_area,
            ),
            rolling: rolling_resistance_power(
                vehicle.mass,
                environment.gravity,
                vehicle.rolling_resistance_coefficient,
                speed,
            ),
            gradient: gradient_resistance_power(vehicle.mass, environment.gravity, grade, speed),
        }
    }

    /// Net power at the wheels, which is negative when the slope outweighs the resistances.
    pub fn at_wheels(&self) -> Watts {
        self.aerodynamic + self.rolling + self.gradient
    }
}

/// Electrical power drawn from the battery to deliver the wheel power.
///
/// Negative wheel power is clamped to zero: downhill regeneration never extends the range.
pub fn battery_power(at_wheels: Watts, drivetrain_efficiency: f64) -> Watts {
    at_wheels.max(Watts::ZERO) / drivetrain_efficiency
}

/// Total electrical propulsion power: the sum of the resistive powers over the drivetrain efficiency.
pub fn total_propulsion_power(
    speed: MetersPerSecond,
    environment: &Environment,
    vehicle: &VehicleParameters,
    grade: Grade,
) -> Watts {
    let breakdown = PowerBreakdown::calculate(speed, environment, vehicle, grade);
    battery_power(breakdown.at_wheels(), vehicle.drivetrain_efficiency)
}

/// Energy drawn from the battery for every meter travelled.
pub fn energy_per_distance(
    total_power: Watts,
    speed: MetersPerSecond,
) -> Result<JoulesPerMeter, EstimationError> {
    // Raw floats: the quantity ordering puts NaN above everything.
    if !(speed.0 > 0.0) {
        return Err(EstimationError::division_guard("speed", speed));
    }
    Ok(total_power / speed)
}

/// Distance the battery energy lasts at the given power draw and speed.
pub fn estimate_range(
    battery_energy: Joules,
    total_power: Watts,
    speed: MetersPerSecond,
) -> Result<Meters, EstimationError> {
    if !(battery_energy.is_finite() && battery_energy.0 >= 0.0) {
        return Err(EstimationError::invalid_input(
            "battery energy",
            format!("must be a non-negative number, got {battery_energy}"),
        ));
    }
    let consumption = energy_per_distance(total_power, speed)?;
    if !(consumption.is_finite() && consumption.0 > 0.0) {
        return Err(EstimationError::division_guard("energy consumption", consumption));
    }
    Ok(battery_energy / consumption)
}

pub fn usable_energy(capacity: KilowattHours, usable_share: Percentage) -> KilowattHours {
    capacity * usable_share
}

pub fn trip_energy(consumption: JoulesPerMeter, distance: Meters) -> Joules {
    consumption * distance
}

#[cfg(test)]
mod tests {
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    use super::*;
    use crate::quantity::distance::Kilometers;

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

    const STANDARD: Environment = Environment::STANDARD;

    #[test]
    fn aerodynamic_drag() {
        let power = aerodynamic_drag_power(
            MetersPerSecond(25.0),
            STANDARD.air_density,
            0.3,
            SquareMeters(2.2),
        );
        assert_abs_diff_eq!(power.0, 6316.406_25, epsilon = 1e-9);
    }

    #[test]
    fn aerodynamic_drag_power_is_cubic_and_increasing() {
        let power = |speed| {
            aerodynamic_drag_power(
                MetersPerSecond(speed),
                STANDARD.air_density,
                0.28,
                SquareMeters(2.2),
            )
        };
        let mut previous = power(0.5);
        for speed in (1..=60).map(f64::from) {
            let current = power(speed);
            assert!(current > previous, "drag power must grow at {speed} m/s");
            previous = current;
        }
        assert_relative_eq!(power(20.0) / power(10.0), 8.0, max_relative = 1e-12);
    }

    #[test]
    fn rolling_resistance() {
        let force = rolling_resistance_force(Kilograms(1500.0), STANDARD.gravity, 0.01);
        assert_abs_diff_eq!(force.0, 147.15, epsilon = 1e-9);
        let power =
            rolling_resistance_power(Kilograms(1500.0), STANDARD.gravity, 0.01, MetersPerSecond(25.0));
        assert_abs_diff_eq!(power.0, 3678.75, epsilon = 1e-9);
    }

    #[test]
    fn gradient_resistance_sign() {
        let power = |grade| {
            gradient_resistance_power(
                Kilograms(1500.0),
                STANDARD.gravity,
                Grade(grade),
                MetersPerSecond(25.0),
            )
        };
        assert_eq!(power(0.0), Watts::ZERO);
        assert!(power(5.0) > Watts::ZERO);
        assert!(power(-5.0) < Watts::ZERO);
        assert_abs_diff_eq!(power(5.0).0, -power(-5.0).0, epsilon = 1e-9);
        assert_abs_diff_eq!(power(5.0).0, 18_370.800_833_234_36, epsilon = 1e-6);
    }

    #[test]
    fn total_power_divides_by_efficiency() {
        let power = total_propulsion_power(
            MetersPerSecond(25.0),
            &STANDARD,
            &reference_vehicle(),
            Grade::ZERO,
        );
        assert_abs_diff_eq!(power.0, 11_105.729_166_666_666, epsilon = 1e-6);
    }

    #[test]
    fn total_power_is_never_negative() {
        for grade in [-1.0, -5.0, -15.0, -50.0, -100.0] {
            let power = total_propulsion_power(
                MetersPerSecond(15.0),
                &STANDARD,
                &reference_vehicle(),
                Grade(grade),
            );
            assert!(power >= Watts::ZERO, "negative power at {grade} %");
        }
        let steep = total_propulsion_power(
            MetersPerSecond(15.0),
            &STANDARD,
            &reference_vehicle(),
            Grade(-15.0),
        );
        assert_eq!(steep, Watts::ZERO);
    }

    #[test]
    fn reference_range() {
        let vehicle = reference_vehicle();
        let speed = MetersPerSecond(25.0);
        let power = total_propulsion_power(speed, &STANDARD, &vehicle, Grade::ZERO);
        let range =
            estimate_range(Joules::from(vehicle.battery_capacity), power, speed).unwrap();
        assert_abs_diff_eq!(Kilometers::from(range).0, 486.235_520_330_16, epsilon = 1e-6);
    }

    #[test]
    fn zero_speed_is_guarded() {
        let error = estimate_range(Joules(1e6), Watts(1000.0), MetersPerSecond::ZERO).unwrap_err();
        assert!(matches!(error, EstimationError::DivisionGuard { quantity: "speed", .. }));
        assert!(estimate_range(Joules(1e6), Watts(1000.0), MetersPerSecond(-1.0)).is_err());
    }

    #[test]
    fn zero_consumption_is_guarded() {
        let error = estimate_range(Joules(1e6), Watts::ZERO, MetersPerSecond(10.0)).unwrap_err();
        assert!(matches!(
            error,
            EstimationError::DivisionGuard { quantity: "energy consumption", .. }
        ));
    }

    #[test]
    fn nan_speed_is_guarded() {
        let error = estimate_range(Joules(1e6), Watts(1000.0), MetersPerSecond(f64::NAN)).unwrap_err();
        assert!(matches!(error, EstimationError::DivisionGuard { quantity: "speed", .. }));
        assert!(energy_per_distance(Watts(1000.0), MetersPerSecond(f64::NAN)).is_err());
    }

    #[test]
    fn nan_power_is_guarded() {
        let error = estimate_range(Joules(1e6), Watts(f64::NAN), MetersPerSecond(10.0)).unwrap_err();
        assert!(matches!(
            error,
            EstimationError::DivisionGuard { quantity: "energy consumption", .. }
        ));
    }

    #[test]
    fn negative_battery_energy_is_invalid() {
        let error = estimate_range(Joules(-1e6), Watts(1000.0), MetersPerSecond(10.0)).unwrap_err();
        assert!(matches!(error, EstimationError::InvalidInput { parameter: "battery energy", .. }));
        assert!(estimate_range(Joules(f64::NAN), Watts(1000.0), MetersPerSecond(10.0)).is_err());
        assert!(estimate_range(Joules::ZERO, Watts(1000.0), MetersPerSecond(10.0)).is_ok());
    }

    #[test]
    fn usable_and_trip_energy() {
        assert_abs_diff_eq!(
            usable_energy(KilowattHours(50.0), Percentage(90.0)).0,
            45.0,
            epsilon = 1e-12
        );
        assert_abs_diff_eq!(trip_energy(JoulesPerMeter(400.0), Meters(1000.0)).0, 400_000.0);
    }
}
