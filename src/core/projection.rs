use std::ops::Range;

use rand::Rng;
use serde::Serialize;

use crate::{
    core::{hour::HourOfDay, load::LoadProfile, solar::SolarCurve},
    quantity::power::Watts,
};

/// Expected generation and consumption at an hour of the daily chart.
#[must_use]
#[derive(Copy, Clone, Debug, PartialEq, Serialize)]
pub struct ProjectionPoint {
    pub hour: HourOfDay,

    #[serde(rename = "solar_watts")]
    pub solar: Watts,

    #[serde(rename = "load_watts")]
    pub load: Watts,
}

/// Lazy 24-point daily projection, ascending by hour.
///
/// The base load is jittered, so two projections are not expected to be equal.
/// Build a new one from the [`crate::core::Simulator`] to start over.
#[must_use]
pub struct Projection<R> {
    pub(super) solar: SolarCurve,
    pub(super) load: LoadProfile,
    pub(super) max_jitter: Watts,
    pub(super) hours: Range<u8>,
    pub(super) rng: R,
}

impl<R: Rng> Projection<R> {
    fn jitter(&mut self) -> Watts {
        if self.max_jitter > Watts::ZERO {
            Watts(self.rng.gen_range(0.0..self.max_jitter.0))
        } else {
            Watts::ZERO
        }
    }
}

impl<R: Rng> Iterator for Projection<R> {
    type Item = ProjectionPoint;

    fn next(&mut self) -> Option<Self::Item> {
        let hour = HourOfDay::new(self.hours.next()?)?;
        let load = if self.load.is_evening(hour) {
            self.load.evening_peak
        } else {
            self.load.base + self.jitter()
        };
        Some(ProjectionPoint { hour, solar: self.solar.power_at(hour).round(), load: load.round() })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.hours.size_hint()
    }
}

impl<R: Rng> ExactSizeIterator for Projection<R> {}
