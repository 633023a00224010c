use std::ops::Mul;

use crate::quantity::{acceleration::MetersPerSecondSquared, force::Newtons};

quantity!(Kilograms, via: f64, suffix: "kg", precision: 0);

impl Mul<MetersPerSecondSquared> for Kilograms {
    type Output = Newtons;

    fn mul(self, acceleration: MetersPerSecondSquared) -> Self::Output {
        Newtons(self.0 * acceleration.0)
    }
}
