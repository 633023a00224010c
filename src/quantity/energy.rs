use std::ops::{Div, Mul};

use crate::quantity::{consumption::JoulesPerMeter, distance::Meters, ratios::Percentage};

quantity!(Joules, via: f64, suffix: "J", precision: 0);
quantity!(WattHours, via: f64, suffix: "Wh", precision: 0);
quantity!(KilowattHours, via: f64, suffix: "kWh", precision: 2);

const JOULES_PER_WATT_HOUR: f64 = 3600.0;

impl From<WattHours> for Joules {
    fn from(energy: WattHours) -> Self {
        Self(energy.0 * JOULES_PER_WATT_HOUR)
    }
}

impl From<Joules> for WattHours {
    fn from(energy: Joules) -> Self {
        Self(energy.0 / JOULES_PER_WATT_HOUR)
    }
}

impl From<KilowattHours> for WattHours {
    fn from(energy: KilowattHours) -> Self {
        Self(energy.0 * 1000.0)
    }
}

impl From<WattHours> for KilowattHours {
    fn from(energy: WattHours) -> Self {
        Self(energy.0 / 1000.0)
    }
}

impl From<KilowattHours> for Joules {
    fn from(energy: KilowattHours) -> Self {
        WattHours::from(energy).into()
    }
}

impl From<Joules> for KilowattHours {
    fn from(energy: Joules) -> Self {
        WattHours::from(energy).into()
    }
}

impl Mul<Percentage> for KilowattHours {
    type Output = Self;

    fn mul(self, percentage: Percentage) -> Self::Output {
        self * percentage.to_proportion()
    }
}

impl Div<JoulesPerMeter> for Joules {
    type Output = Meters;

    /// Distance the energy lasts at the given consumption.
    fn div(self, consumption: JoulesPerMeter) -> Self::Output {
        Meters(self.0 / consumption.0)
    }
}
