use clap::Parser;
use itertools::Itertools;
use rand::{SeedableRng, rngs::StdRng};

use crate::{
    cli::ModelArgs,
    core::{HourOfDay, OperatingMode},
    prelude::*,
    tables::{build_projection_table, build_samples_table},
};

#[derive(Parser)]
pub struct EvaluateArgs {
    /// Simulated hour of day, `0..=23`.
    #[clap(long, env = "SIMULATION_HOUR")]
    hour: HourOfDay,

    #[clap(flatten)]
    model: ModelArgs,
}

impl EvaluateArgs {
    pub fn run(self) -> Result {
        let sample = self.model.simulator()?.sample(self.hour);
        info!(hour = %sample.hour, mode = %sample.mode, "evaluated");
        println!("{}", build_samples_table(&[sample]));
        Ok(())
    }
}

#[derive(Parser)]
pub struct DayArgs {
    #[clap(flatten)]
    model: ModelArgs,
}

impl DayArgs {
    pub fn run(self) -> Result {
        let samples = self.model.simulator()?.day();
        let n_mining_hours =
            samples.iter().filter(|sample| sample.mode == OperatingMode::Mining).count();
        info!(n_mining_hours, "simulated the day");
        println!("{}", build_samples_table(&samples));
        Ok(())
    }
}

#[derive(Parser)]
pub struct ProjectionArgs {
    /// Seed the load jitter to get a reproducible chart.
    #[clap(long, env = "PROJECTION_SEED")]
    seed: Option<u64>,

    #[clap(flatten)]
    model: ModelArgs,
}

impl ProjectionArgs {
    pub fn run(self) -> Result {
        let rng = self.seed.map_or_else(StdRng::from_entropy, StdRng::seed_from_u64);
        let points = self.model.simulator()?.projection_with(rng).collect_vec();
        println!("{}", build_projection_table(&points));
        Ok(())
    }
}
