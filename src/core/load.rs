use std::ops::RangeInclusive;

use crate::{core::hour::HourOfDay, quantity::power::Watts};

/// Flat household consumption with an evening peak.
#[must_use]
#[derive(Clone, Debug, PartialEq)]
pub struct LoadProfile {
    pub base: Watts,
    pub evening_peak: Watts,

    /// Hours at which the evening peak applies, inclusive on both ends.
    pub evening: RangeInclusive<u8>,
}

impl Default for LoadProfile {
    fn default() -> Self {
        Self { base: Watts(800.0), evening_peak: Watts(3500.0), evening: 17..=22 }
    }
}

impl LoadProfile {
    #[must_use]
    pub fn is_evening(&self, hour: HourOfDay) -> bool {
        self.evening.contains(&hour.get())
    }

    pub fn power_at(&self, hour: HourOfDay) -> Watts {
        if self.is_evening(hour) { self.evening_peak } else { self.base }
    }
}
