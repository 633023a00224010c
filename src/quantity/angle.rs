//! Road slope: percentage grade and the inclination angle.

quantity!(Grade, via: f64, suffix: "%", precision: 1);
quantity!(Radians, via: f64, suffix: "rad", precision: 4);
quantity!(Degrees, via: f64, suffix: "°", precision: 2);

impl Radians {
    pub fn sin(self) -> f64 {
        self.0.sin()
    }
}

/// Rise over run, in percent: `5 %` is five meters up per hundred meters forward.
impl From<Grade> for Radians {
    fn from(grade: Grade) -> Self {
        Self((grade.0 / 100.0).atan())
    }
}

impl From<Radians> for Grade {
    fn from(angle: Radians) -> Self {
        Self(angle.0.tan() * 100.0)
    }
}

impl From<Degrees> for Radians {
    fn from(angle: Degrees) -> Self {
        Self(angle.0.to_radians())
    }
}

impl From<Radians> for Degrees {
    fn from(angle: Radians) -> Self {
        Self(angle.0.to_degrees())
    }
}
