use serde::Serialize;

use crate::{
    core::EstimationError,
    quantity::{acceleration::MetersPerSecondSquared, density::KilogramsPerCubicMeter},
};

/// Ambient conditions the vehicle drives through.
///
/// Built once at startup and only ever passed around by reference afterwards.
#[must_use]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Environment {
    pub air_density: KilogramsPerCubicMeter,
    pub gravity: MetersPerSecondSquared,
}

impl Default for Environment {
    fn default() -> Self {
        Self::STANDARD
    }
}

impl Environment {
    /// Sea level at 15 °C on Earth.
    pub const STANDARD: Self = Self {
        air_density: KilogramsPerCubicMeter(1.225),
        gravity: MetersPerSecondSquared(9.81),
    };

    pub fn try_new(
        air_density: KilogramsPerCubicMeter,
        gravity: MetersPerSecondSquared,
    ) -> Result<Self, EstimationError> {
        if !air_density.is_finite() || air_density < KilogramsPerCubicMeter::ZERO {
            return Err(EstimationError::invalid_input(
                "air density",
                format!("must be a non-negative number, got {air_density}"),
            ));
        }
        if !gravity.is_finite() || gravity < MetersPerSecondSquared::ZERO {
            return Err(EstimationError::invalid_input(
                "gravity",
                format!("must be a non-negative number, got {gravity}"),
            ));
        }
        Ok(Self { air_density, gravity })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_is_default() {
        assert_eq!(Environment::default(), Environment::STANDARD);
    }

    #[test]
    fn rejects_negative_density() {
        let result = Environment::try_new(KilogramsPerCubicMeter(-1.0), MetersPerSecondSquared(9.81));
        assert!(matches!(result, Err(EstimationError::InvalidInput { parameter: "air density", .. })));
    }

    #[test]
    fn accepts_thin_air() {
        let environment =
            Environment::try_new(KilogramsPerCubicMeter(0.9), MetersPerSecondSquared(9.81)).unwrap();
        assert_eq!(environment.air_density, KilogramsPerCubicMeter(0.9));
    }
}
