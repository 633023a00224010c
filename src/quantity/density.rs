quantity!(KilogramsPerCubicMeter, via: f64, suffix: "kg/m³", precision: 3);
