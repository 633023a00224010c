use bon::bon;
use serde::Serialize;

use crate::{
    core::{
        EstimationError,
        vehicle::{ensure_non_negative, ensure_positive},
    },
    quantity::{angle::Grade, distance::Kilometers, ratios::Percentage, speed::MetersPerSecond},
};

/// Share of the nominal capacity the battery management system lets us use.
pub const DEFAULT_USABLE_BATTERY: Percentage = Percentage(90.0);

#[must_use]
#[derive(Copy, Clone, Debug, PartialEq, Serialize)]
pub struct DrivingScenario {
    /// Constant cruising speed.
    pub speed: MetersPerSecond,

    /// Signed road grade: positive is uphill.
    pub grade: Grade,

    /// Optional trip to check against the estimate.
    pub trip_distance: Option<Kilometers>,

    pub usable_battery: Percentage,
}

#[bon]
impl DrivingScenario {
    #[builder]
    pub fn new(
        #[builder(into)] speed: MetersPerSecond,
        #[builder(default = Grade::ZERO)] grade: Grade,
        trip_distance: Option<Kilometers>,
        #[builder(default = DEFAULT_USABLE_BATTERY)] usable_battery: Percentage,
    ) -> Result<Self, EstimationError> {
        ensure_positive("speed", speed.try_magnitude()?.0)?;
        if !grade.is_finite() {
            return Err(EstimationError::invalid_input("grade", "must be a finite number"));
        }
        if let Some(trip_distance) = trip_distance {
            ensure_non_negative("trip distance", trip_distance.0)?;
        }
        if !(usable_battery > Percentage::ZERO && usable_battery <= Percentage(100.0)) {
            return Err(EstimationError::invalid_input(
                "usable battery share",
                format!("must be within (0, 100] %, got {usable_battery}"),
            ));
        }
        Ok(Self { speed, grade, trip_distance, usable_battery })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quantity::speed::KilometersPerHour;

    #[test]
    fn defaults() {
        let scenario = DrivingScenario::builder().speed(MetersPerSecond(25.0)).build().unwrap();
        assert_eq!(scenario.grade, Grade::ZERO);
        assert_eq!(scenario.usable_battery, Percentage(90.0));
        assert_eq!(scenario.trip_distance, None);
    }

    #[test]
    fn speed_from_kilometers_per_hour() {
        let scenario = DrivingScenario::builder().speed(KilometersPerHour(36.0)).build().unwrap();
        assert!((scenario.speed.0 - 10.0).abs() < 1e-12);
    }

    #[test]
    fn zero_speed_is_invalid() {
        let error = DrivingScenario::builder().speed(MetersPerSecond(0.0)).build().unwrap_err();
        assert!(matches!(error, EstimationError::InvalidInput { parameter: "speed", .. }));
    }

    #[test]
    fn negative_speed_is_invalid() {
        assert!(DrivingScenario::builder().speed(MetersPerSecond(-5.0)).build().is_err());
    }

    #[test]
    fn usable_battery_bounds() {
        let build = |usable| {
            DrivingScenario::builder()
                .speed(MetersPerSecond(20.0))
                .usable_battery(Percentage(usable))
                .build()
        };
        assert!(build(100.0).is_ok());
        assert!(build(0.0).is_err());
        assert!(build(101.0).is_err());
    }

    #[test]
    fn downhill_is_allowed() {
        let scenario = DrivingScenario::builder()
            .speed(MetersPerSecond(20.0))
            .grade(Grade(-15.0))
            .build()
            .unwrap();
        assert_eq!(scenario.grade, Grade(-15.0));
    }

    #[test]
    fn negative_trip_is_invalid() {
        let result = DrivingScenario::builder()
            .speed(MetersPerSecond(20.0))
            .trip_distance(Kilometers(-1.0))
            .build();
        assert!(result.is_err());
    }
}
