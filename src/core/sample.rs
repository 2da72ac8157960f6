use serde::Serialize;

use crate::{
    core::{hour::HourOfDay, mode::OperatingMode},
    quantity::{power::Watts, ratios::Percentage},
};

/// Instantaneous energy state at a simulated hour.
///
/// Never stored: the simulator derives a fresh sample on every evaluation,
/// and the mode is always a function of the net power and the battery charge.
#[must_use]
#[derive(Copy, Clone, Debug, PartialEq, Serialize)]
pub struct EnergySample {
    pub hour: HourOfDay,

    #[serde(rename = "solar_watts")]
    pub solar: Watts,

    #[serde(rename = "load_watts")]
    pub load: Watts,

    /// Solar minus load, negative on deficit.
    #[serde(rename = "net_watts")]
    pub net: Watts,

    #[serde(rename = "battery_percent")]
    pub battery: Percentage,

    pub mode: OperatingMode,
}
