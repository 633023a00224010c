use std::ops::Div;

use crate::quantity::{consumption::JoulesPerMeter, speed::MetersPerSecond};

quantity!(Watts, via: f64, suffix: "W", precision: 0);
quantity!(Kilowatts, via: f64, suffix: "kW", precision: 2);

impl From<Kilowatts> for Watts {
    fn from(kilowatts: Kilowatts) -> Self {
        Self(kilowatts.0 * 1000.0)
    }
}

impl From<Watts> for Kilowatts {
    fn from(watts: Watts) -> Self {
        Self(watts.0 / 1000.0)
    }
}

impl Div<MetersPerSecond> for Watts {
    type Output = JoulesPerMeter;

    /// Energy spent per meter travelled while drawing the power at the given speed.
    ///
    /// The caller is responsible for the zero-speed guard.
    fn div(self, speed: MetersPerSecond) -> Self::Output {
        JoulesPerMeter(self.0 / speed.0)
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;

    #[test]
    fn kilowatts_round_trip() {
        assert_abs_diff_eq!(Kilowatts::from(Watts(11_105.7)).0, 11.1057, epsilon = 1e-12);
        assert_abs_diff_eq!(Watts::from(Kilowatts::from(Watts(987.65))).0, 987.65, epsilon = 1e-9);
    }

    #[test]
    fn power_per_speed() {
        assert_abs_diff_eq!((Watts(10_000.0) / MetersPerSecond(25.0)).0, 400.0);
    }
}
