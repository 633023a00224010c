//! Typed physical quantities and the conversions between compatible units.
//!
//! Every quantity is a transparent `f64` newtype, so the conversions are plain [`From`] impls
//! and the physics code cannot accidentally mix, say, kilowatt-hours with joules.

#[macro_use]
mod macros;

pub mod acceleration;
pub mod angle;
pub mod area;
pub mod consumption;
pub mod density;
pub mod distance;
pub mod energy;
pub mod force;
pub mod mass;
pub mod power;
pub mod ratios;
pub mod speed;
