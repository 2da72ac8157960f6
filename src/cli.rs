mod follow;
mod model;
mod node;
mod simulate;

use clap::{Parser, Subcommand};

pub use self::{
    follow::{FollowArgs, Follower, Tick},
    model::ModelArgs,
    node::{NodeArgs, NodeConnectionArgs},
    simulate::{DayArgs, EvaluateArgs, ProjectionArgs},
};
use crate::prelude::*;

#[derive(Parser)]
#[command(author, version, about, propagate_version = true)]
#[must_use]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,
}

impl Args {
    pub async fn run(self) -> Result {
        match self.command {
            Command::Evaluate(args) => args.run(),
            Command::Day(args) => args.run(),
            Command::Projection(args) => args.run(),
            Command::Follow(args) => args.run().await,
            Command::Node(args) => args.run().await,
        }
    }
}

#[derive(Subcommand)]
pub enum Command {
    /// Evaluate the energy state at a single hour.
    #[clap(name = "evaluate")]
    Evaluate(EvaluateArgs),

    /// Evaluate every hour of the day.
    #[clap(name = "day")]
    Day(DayArgs),

    /// Print the daily projection chart.
    #[clap(name = "projection")]
    Projection(ProjectionArgs),

    /// Main command: follow the clock and start or stop the training node accordingly.
    #[clap(name = "follow")]
    Follow(Box<FollowArgs>),

    /// Talk to the training node directly.
    #[clap(name = "node")]
    Node(Box<NodeArgs>),
}
