use bon::Builder;
use rand::{Rng, rngs::ThreadRng};

use crate::{
    core::{
        battery::state_of_charge,
        error::InvalidInput,
        hour::HourOfDay,
        load::LoadProfile,
        mode::OperatingMode,
        projection::Projection,
        sample::EnergySample,
        solar::SolarCurve,
    },
    prelude::*,
    quantity::{power::Watts, ratios::Percentage},
};

/// Energy state simulator.
///
/// Stateless: every call is independent and idempotent for the given input,
/// so it is safe to call at any rate from a timer or a slider handler.
/// [`Simulator::default`] reproduces the reference household.
#[must_use]
#[derive(Clone, Debug, Builder)]
pub struct Simulator {
    #[builder(default = SolarCurve::LIVE)]
    live_solar: SolarCurve,

    #[builder(default = SolarCurve::PROJECTION)]
    projected_solar: SolarCurve,

    #[builder(default)]
    load: LoadProfile,

    /// Battery charge above which the surplus goes to mining instead of charging.
    #[builder(default = Percentage(90.0))]
    mining_threshold: Percentage,

    /// Exclusive upper bound of the random jitter added to the projected base load.
    #[builder(default = Watts(200.0))]
    load_jitter: Watts,
}

impl Default for Simulator {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl Simulator {
    /// Evaluate the energy state at the hour coming from an untrusted source.
    pub fn evaluate(&self, hour: i64) -> Result<EnergySample, InvalidInput> {
        HourOfDay::try_from(hour).map(|hour| self.sample(hour))
    }

    pub fn sample(&self, hour: HourOfDay) -> EnergySample {
        let solar = self.live_solar.power_at(hour);
        let load = self.load.power_at(hour);
        let net = solar - load;
        let battery = state_of_charge(hour);
        let mode = OperatingMode::classify(net, battery, self.mining_threshold);
        trace!(%hour, %solar, %load, %net, %battery, %mode, "evaluated");
        EnergySample { hour, solar, load, net, battery, mode }
    }

    /// Evaluate every hour of the day starting with midnight.
    pub fn day(&self) -> Vec<EnergySample> {
        HourOfDay::all().map(|hour| self.sample(hour)).collect()
    }

    pub fn projection(&self) -> Projection<ThreadRng> {
        self.projection_with(rand::thread_rng())
    }

    pub fn projection_with<R: Rng>(&self, rng: R) -> Projection<R> {
        Projection {
            solar: self.projected_solar,
            load: self.load.clone(),
            max_jitter: self.load_jitter,
            hours: 0..24,
            rng,
        }
    }
}
