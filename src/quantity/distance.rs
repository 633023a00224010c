quantity!(Meters, via: f64, suffix: "m", precision: 0);
quantity!(Kilometers, via: f64, suffix: "km", precision: 2);
quantity!(Miles, via: f64, suffix: "mi", precision: 2);

const KILOMETERS_PER_MILE: f64 = 1.609_344;

impl From<Meters> for Kilometers {
    fn from(distance: Meters) -> Self {
        Self(distance.0 / 1000.0)
    }
}

impl From<Kilometers> for Meters {
    fn from(distance: Kilometers) -> Self {
        Self(distance.0 * 1000.0)
    }
}

impl From<Kilometers> for Miles {
    fn from(distance: Kilometers) -> Self {
        Self(distance.0 / KILOMETERS_PER_MILE)
    }
}

impl From<Miles> for Kilometers {
    fn from(distance: Miles) -> Self {
        Self(distance.0 * KILOMETERS_PER_MILE)
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;

    #[test]
    fn meters_round_trip() {
        assert_abs_diff_eq!(Kilometers::from(Meters(486_235.5)).0, 486.2355, epsilon = 1e-12);
        assert_abs_diff_eq!(Meters::from(Kilometers::from(Meters(1234.5))).0, 1234.5, epsilon = 1e-9);
    }

    #[test]
    fn miles_round_trip() {
        assert_abs_diff_eq!(Miles::from(Kilometers(1.609_344)).0, 1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(Kilometers::from(Miles::from(Kilometers(325.0))).0, 325.0, epsilon = 1e-9);
    }
}
