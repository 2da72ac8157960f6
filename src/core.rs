//! Energy state simulator: solar generation, home load, battery charge and the operating mode.

pub mod battery;
pub mod error;
pub mod hour;
pub mod load;
pub mod mode;
pub mod policy;
pub mod projection;
pub mod sample;
pub mod simulator;
pub mod solar;
pub mod training;

pub use self::{
    error::InvalidInput,
    hour::HourOfDay,
    mode::OperatingMode,
    projection::ProjectionPoint,
    sample::EnergySample,
    simulator::Simulator,
};
