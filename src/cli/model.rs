//! Household model arguments.

use clap::Parser;

use crate::{
    core::{Simulator, load::LoadProfile, solar::SolarCurve},
    prelude::*,
    quantity::{power::Watts, ratios::Percentage},
};

#[must_use]
#[derive(Parser)]
pub struct ModelArgs {
    /// Peak solar generation in watts.
    #[clap(long = "peak-solar-watts", default_value = "5000", env = "PEAK_SOLAR_WATTS")]
    pub peak_solar: Watts,

    /// Household base load in watts.
    #[clap(long = "base-load-watts", default_value = "800", env = "BASE_LOAD_WATTS")]
    pub base_load: Watts,

    /// Household load between 17:00 and 22:00 in watts.
    #[clap(long = "evening-load-watts", default_value = "3500", env = "EVENING_LOAD_WATTS")]
    pub evening_load: Watts,

    /// Battery charge above which the solar surplus goes to mining.
    #[clap(
        long = "mining-threshold-percent",
        default_value = "90",
        env = "MINING_THRESHOLD_PERCENT"
    )]
    pub mining_threshold: Percentage,
}

impl ModelArgs {
    /// Build the simulator, rejecting a household that cannot exist.
    pub fn simulator(&self) -> Result<Simulator> {
        ensure!(
            self.peak_solar.0.is_finite() && self.peak_solar >= Watts::ZERO,
            "peak solar must be a non-negative number of watts, got `{}`",
            self.peak_solar.0,
        );
        for (name, load) in [("base", self.base_load), ("evening", self.evening_load)] {
            ensure!(
                load.0.is_finite() && load > Watts::ZERO,
                "{name} load must be a positive number of watts, got `{}`",
                load.0,
            );
        }
        ensure!(
            (0.0..=100.0).contains(&self.mining_threshold.0),
            "mining threshold must be within 0..=100%, got `{}`",
            self.mining_threshold.0,
        );
        Ok(Simulator::builder()
            .live_solar(SolarCurve::LIVE.with_peak(self.peak_solar))
            .projected_solar(SolarCurve::PROJECTION.with_peak(self.peak_solar))
            .load(LoadProfile {
                base: self.base_load,
                evening_peak: self.evening_load,
                ..LoadProfile::default()
            })
            .mining_threshold(self.mining_threshold)
            .build())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_reference_household() -> Result {
        let args = ModelArgs::try_parse_from(["model"])?;
        let reference = Simulator::default();
        let simulator = args.simulator()?;
        for hour in 0..24 {
            assert_eq!(simulator.evaluate(hour)?, reference.evaluate(hour)?);
        }
        Ok(())
    }

    #[test]
    fn overrides() -> Result {
        let args = ModelArgs::try_parse_from(["model", "--base-load-watts", "500"])?;
        assert_eq!(args.simulator()?.evaluate(3)?.load, Watts(500.0));
        Ok(())
    }

    #[test]
    fn rejects_impossible_households() -> Result {
        for flags in [
            ["--base-load-watts", "0"],
            ["--base-load-watts", "-500"],
            ["--evening-load-watts", "0"],
            ["--peak-solar-watts", "NaN"],
            ["--peak-solar-watts", "-1"],
            ["--peak-solar-watts", "inf"],
            ["--mining-threshold-percent", "101"],
            ["--mining-threshold-percent", "-5"],
        ] {
            let args = ModelArgs::try_parse_from(["model", &format!("{}={}", flags[0], flags[1])])?;
            assert!(args.simulator().is_err(), "{flags:?} must be rejected");
        }
        Ok(())
    }

    #[test]
    fn accepts_edge_values() -> Result {
        let args = ModelArgs::try_parse_from([
            "model",
            "--peak-solar-watts=0",
            "--mining-threshold-percent=100",
        ])?;
        let sample = args.simulator()?.evaluate(12)?;
        assert_eq!(sample.solar, Watts::ZERO);
        assert!(sample.load > Watts::ZERO);
        Ok(())
    }
}
