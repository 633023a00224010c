use std::ops::Mul;

use crate::quantity::{power::Watts, speed::MetersPerSecond};

quantity!(Newtons, via: f64, suffix: "N", precision: 1);

impl Mul<MetersPerSecond> for Newtons {
    type Output = Watts;

    /// Mechanical power needed to hold the force at the given speed.
    fn mul(self, speed: MetersPerSecond) -> Self::Output {
        Watts(self.0 * speed.0)
    }
}
