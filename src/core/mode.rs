use std::fmt::{Display, Formatter};

use comfy_table::Color;
use serde::{Deserialize, Serialize};

use crate::quantity::{power::Watts, ratios::Percentage};

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OperatingMode {
    /// Nothing to do.
    ///
    /// Kept for compatibility with consumers of the mode label:
    /// [`OperatingMode::classify`] never produces it, because every net power is either
    /// a deficit or a surplus.
    Idle,

    /// Surplus solar power goes into the battery.
    Charging,

    /// Battery is nearly full, surplus solar power goes into the training node.
    Mining,

    /// Load exceeds generation, the battery covers the deficit.
    Draining,
}

impl OperatingMode {
    /// Hierarchy of watts: cover the load first, then fill the battery, then mine.
    pub fn classify(
        net_power: Watts,
        state_of_charge: Percentage,
        mining_threshold: Percentage,
    ) -> Self {
        if net_power <= Watts::ZERO {
            Self::Draining
        } else if state_of_charge > mining_threshold {
            Self::Mining
        } else {
            Self::Charging
        }
    }

    pub const fn color(self) -> Color {
        match self {
            Self::Mining => Color::Green,
            Self::Charging => Color::Blue,
            Self::Draining => Color::Red,
            Self::Idle => Color::Reset,
        }
    }
}

impl Display for OperatingMode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Idle => write!(f, "IDLE"),
            Self::Charging => write!(f, "CHARGING"),
            Self::Mining => write!(f, "MINING"),
            Self::Draining => write!(f, "DRAINING"),
        }
    }
}
