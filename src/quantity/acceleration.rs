quantity!(MetersPerSecondSquared, via: f64, suffix: "m/s²", precision: 2);
