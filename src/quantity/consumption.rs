//! Energy consumed per unit of distance.

use std::ops::Mul;

use crate::quantity::{
    distance::{Kilometers, Meters},
    energy::{Joules, WattHours},
};

quantity!(JoulesPerMeter, via: f64, suffix: "J/m", precision: 1);
quantity!(WattHoursPerKilometer, via: f64, suffix: "Wh/km", precision: 1);
quantity!(KilowattHoursPerKilometer, via: f64, suffix: "kWh/km", precision: 3);

impl From<JoulesPerMeter> for WattHoursPerKilometer {
    fn from(consumption: JoulesPerMeter) -> Self {
        Self(consumption.0 * 1000.0 / 3600.0)
    }
}

impl From<WattHoursPerKilometer> for JoulesPerMeter {
    fn from(consumption: WattHoursPerKilometer) -> Self {
        Self(consumption.0 * 3600.0 / 1000.0)
    }
}

impl From<WattHoursPerKilometer> for KilowattHoursPerKilometer {
    fn from(consumption: WattHoursPerKilometer) -> Self {
        Self(consumption.0 / 1000.0)
    }
}

impl From<JoulesPerMeter> for KilowattHoursPerKilometer {
    fn from(consumption: JoulesPerMeter) -> Self {
        WattHoursPerKilometer::from(consumption).into()
    }
}

impl Mul<Meters> for JoulesPerMeter {
    type Output = Joules;

    fn mul(self, distance: Meters) -> Self::Output {
        Joules(self.0 * distance.0)
    }
}

impl Mul<Kilometers> for WattHoursPerKilometer {
    type Output = WattHours;

    fn mul(self, distance: Kilometers) -> Self::Output {
        WattHours(self.0 * distance.0)
    }
}
