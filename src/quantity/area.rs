quantity!(SquareMeters, via: f64, suffix: "m²", precision: 2);
