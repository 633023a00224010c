pub mod environment;
pub mod error;
pub mod estimate;
pub mod physics;
pub mod profile;
pub mod scenario;
pub mod vehicle;

pub use self::{
    environment::Environment,
    error::EstimationError,
    estimate::Estimate,
    profile::Profile,
    scenario::DrivingScenario,
    vehicle::VehicleParameters,
};
