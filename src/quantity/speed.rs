use crate::core::EstimationError;

quantity!(MetersPerSecond, via: f64, suffix: "m/s", precision: 2);
quantity!(KilometersPerHour, via: f64, suffix: "km/h", precision: 0);
quantity!(MilesPerHour, via: f64, suffix: "mph", precision: 0);

/// Kilometers per hour in one meter per second.
const KMH_PER_MS: f64 = 3.6;

const METERS_PER_MILE: f64 = 1609.344;

impl MetersPerSecond {
    /// Accept the speed only as a physical magnitude: finite and non-negative.
    pub fn try_magnitude(self) -> Result<Self, EstimationError> {
        if !self.is_finite() || self < Self::ZERO {
            return Err(EstimationError::invalid_input("speed", format!("{self} is not a magnitude")));
        }
        Ok(self)
    }
}

impl From<KilometersPerHour> for MetersPerSecond {
    fn from(speed: KilometersPerHour) -> Self {
        Self(speed.0 / KMH_PER_MS)
    }
}

impl From<MetersPerSecond> for KilometersPerHour {
    fn from(speed: MetersPerSecond) -> Self {
        Self(speed.0 * KMH_PER_MS)
    }
}

impl From<MilesPerHour> for MetersPerSecond {
    fn from(speed: MilesPerHour) -> Self {
        Self(speed.0 * METERS_PER_MILE / 3600.0)
    }
}

impl From<MetersPerSecond> for MilesPerHour {
    fn from(speed: MetersPerSecond) -> Self {
        Self(speed.0 * 3600.0 / METERS_PER_MILE)
    }
}
