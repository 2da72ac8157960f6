use std::f64::consts::PI;

use crate::{core::hour::HourOfDay, quantity::power::Watts};

/// Half-sine bell of solar generation between sunrise and sunset.
///
/// The live gauge and the daily projection chart use two deliberately different curves,
/// see [`SolarCurve::LIVE`] and [`SolarCurve::PROJECTION`]. They must not be unified.
#[must_use]
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SolarCurve {
    /// Amplitude of the sine.
    pub peak: Watts,

    /// First generating hour, the sine phase is zero here.
    pub sunrise: u8,

    /// Last generating hour, inclusive.
    pub sunset: u8,

    /// Number of hours it takes the sine to complete a half-period.
    pub half_period_hours: f64,
}

impl SolarCurve {
    /// Curve behind the live sample.
    pub const LIVE: Self =
        Self { peak: Watts(5000.0), sunrise: 6, sunset: 19, half_period_hours: 13.0 };

    /// Illustrative curve behind the 24-hour projection chart.
    pub const PROJECTION: Self =
        Self { peak: Watts(5000.0), sunrise: 6, sunset: 18, half_period_hours: 12.0 };

    pub const fn with_peak(mut self, peak: Watts) -> Self {
        self.peak = peak;
        self
    }

    pub fn power_at(&self, hour: HourOfDay) -> Watts {
        let hour = hour.get();
        if hour < self.sunrise || hour > self.sunset {
            return Watts::ZERO;
        }
        let phase = f64::from(hour - self.sunrise) * PI / self.half_period_hours;
        (self.peak * phase.sin()).max(Watts::ZERO)
    }
}
