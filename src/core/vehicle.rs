use bon::bon;
use serde::Serialize;

use crate::{
    core::EstimationError,
    quantity::{area::SquareMeters, energy::KilowattHours, mass::Kilograms, ratios::Percentage},
};

/// Combined motor, inverter and transmission efficiency when nothing else is known.
pub const DEFAULT_DRIVETRAIN_EFFICIENCY: Percentage = Percentage(88.0);

/// Typical modern passenger car values.
pub const DEFAULT_DRAG_COEFFICIENT: f64 = 0.28;
pub const DEFAULT_FRONTAL_AREA: SquareMeters = SquareMeters(2.2);
pub const DEFAULT_ROLLING_RESISTANCE_COEFFICIENT: f64 = 0.010;

#[must_use]
#[derive(Copy, Clone, Debug, PartialEq, Serialize)]
pub struct VehicleParameters {
    pub mass: Kilograms,
    pub frontal_area: SquareMeters,

    /// Aerodynamic drag coefficient, `Cd`.
    pub drag_coefficient: f64,

    /// Rolling resistance coefficient, `Crr`.
    pub rolling_resistance_coefficient: f64,

    /// Share of the battery power that reaches the wheels, `0 < η ≤ 1`.
    pub drivetrain_efficiency: f64,

    pub battery_capacity: KilowattHours,
}

#[bon]
impl VehicleParameters {
    #[builder]
    pub fn new(
        mass: Kilograms,
        frontal_area: SquareMeters,
        drag_coefficient: f64,
        rolling_resistance_coefficient: f64,
        #[builder(default = DEFAULT_DRIVETRAIN_EFFICIENCY.to_proportion())] drivetrain_efficiency: f64,
        battery_capacity: KilowattHours,
    ) -> Result<Self, EstimationError> {
        ensure_positive("mass", mass.0)?;
        ensure_non_negative("frontal area", frontal_area.0)?;
        ensure_non_negative("drag coefficient", drag_coefficient)?;
        ensure_non_negative("rolling resistance coefficient", rolling_resistance_coefficient)?;
        ensure_positive("battery capacity", battery_capacity.0)?;
        if !(drivetrain_efficiency > 0.0 && drivetrain_efficiency <= 1.0) {
            return Err(EstimationError::invalid_input(
                "drivetrain efficiency",
                format!("must be within (0, 1], got {drivetrain_efficiency}"),
            ));
        }
        Ok(Self {
            mass,
            frontal_area,
            drag_coefficient,
            rolling_resistance_coefficient,
            drivetrain_efficiency,
            battery_capacity,
        })
    }
}

impl VehicleParameters {
    /// Re-check a record that was put together without the builder, for example a preset.
    pub fn validate(self) -> Result<Self, EstimationError> {
        Self::builder()
            .mass(self.mass)
            .frontal_area(self.frontal_area)
            .drag_coefficient(self.drag_coefficient)
            .rolling_resistance_coefficient(self.rolling_resistance_coefficient)
            .drivetrain_efficiency(self.drivetrain_efficiency)
            .battery_capacity(self.battery_capacity)
            .build()
    }

    /// Same vehicle behind a different drivetrain.
    pub fn with_drivetrain_efficiency(self, efficiency: f64) -> Result<Self, EstimationError> {
        Self { drivetrain_efficiency: efficiency, ..self }.validate()
    }
}

pub(crate) fn ensure_positive(parameter: &'static str, value: f64) -> Result<(), EstimationError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(EstimationError::invalid_input(parameter, format!("must be positive, got {value}")))
    }
}

pub(crate) fn ensure_non_negative(
    parameter: &'static str,
    value: f64,
) -> Result<(), EstimationError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(EstimationError::invalid_input(parameter, format!("must not be negative, got {value}")))
    }
}
