use bon::Builder;
use chrono::Local;
use clap::Parser;
use tokio::time::{MissedTickBehavior, interval};

use crate::{
    cli::{ModelArgs, NodeConnectionArgs},
    core::{EnergySample, HourOfDay, Simulator, policy::NodeCommand, training::TrainingLog},
    node::Node,
    prelude::*,
    tables::build_training_table,
};

#[derive(Parser)]
pub struct FollowArgs {
    /// Fixed simulated hour, the local wall clock is followed by default.
    #[clap(long, env = "SIMULATION_HOUR")]
    hour: Option<HourOfDay>,

    /// Stop after the number of ticks, run forever by default.
    #[clap(long)]
    ticks: Option<usize>,

    #[clap(long, env = "POLLING_INTERVAL", default_value = "500ms")]
    polling_interval: humantime::Duration,

    #[clap(flatten)]
    model: ModelArgs,

    #[clap(flatten)]
    node: NodeConnectionArgs,
}

impl FollowArgs {
    pub async fn run(self) -> Result {
        let follower = self.follow().await?;
        println!("{}", build_training_table(follower.training()));
        Ok(())
    }

    /// Tick until the tick limit, if any, is reached.
    async fn follow(&self) -> Result<Follower> {
        let mut follower = Follower::builder()
            .simulator(self.model.simulator()?)
            .node(self.node.connect()?)
            .maybe_hour(self.hour)
            .build();

        let mut interval = interval(*self.polling_interval);
        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);

        let mut n_ticks = 0;
        while self.ticks.is_none_or(|ticks| n_ticks < ticks) {
            interval.tick().await;
            follower.tick().await;
            n_ticks += 1;
        }
        Ok(follower)
    }
}

/// Polls the node and keeps it mining exactly while the simulator says so.
#[derive(Builder)]
pub struct Follower {
    simulator: Simulator,
    node: Box<dyn Node>,

    /// Fixed simulated hour, if any.
    hour: Option<HourOfDay>,

    #[builder(default)]
    training: TrainingLog,
}

pub struct Tick {
    pub sample: EnergySample,

    /// Command sent to the node, if any.
    pub command: Option<NodeCommand>,
}

impl Follower {
    /// Node failures are logged and do not stop the loop.
    #[instrument(skip_all)]
    pub async fn tick(&mut self) -> Tick {
        let sample = self.simulator.sample(self.hour.unwrap_or_else(HourOfDay::now));
        info!(
            hour = %sample.hour,
            solar = %sample.solar,
            load = %sample.load,
            net = %sample.net,
            battery = %sample.battery,
            mode = %sample.mode,
            "tick",
        );

        let status = match self.node.status().await {
            Ok(status) => status,
            Err(error) => {
                warn!("failed to poll the node: {error:#}");
                return Tick { sample, command: None };
            }
        };
        if status.is_mining {
            self.training.record(status.epoch, status.loss, Local::now().time());
        }

        let command = NodeCommand::decide(sample.mode, status.is_mining);
        if let Some(command) = command {
            info!(%command, "steering the node…");
            if let Err(error) = self.node.execute(command).await {
                warn!("failed to {command} the node: {error:#}");
            }
        }
        Tick { sample, command }
    }

    pub const fn training(&self) -> &TrainingLog {
        &self.training
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use async_trait::async_trait;
    use rand::{SeedableRng, rngs::StdRng};

    use super::*;
    use crate::{
        core::OperatingMode,
        node::{Acknowledgement, NodeStatus, SimulatedNode},
    };

    fn follower(hour: u8) -> Follower {
        Follower::builder()
            .simulator(Simulator::default())
            .node(Box::new(SimulatedNode::with_rng(StdRng::seed_from_u64(42))))
            .hour(HourOfDay::new(hour).unwrap())
            .build()
    }

    #[tokio::test]
    async fn starts_and_stops_mining() -> Result {
        let mut follower = follower(12);

        let tick = follower.tick().await;
        assert_eq!(tick.sample.mode, OperatingMode::Mining);
        assert_eq!(tick.command, Some(NodeCommand::Start));

        let tick = follower.tick().await;
        assert_eq!(tick.command, None);
        assert_eq!(follower.training().lines().len(), 1);
        assert!(follower.node.status().await?.is_mining);

        follower.hour = HourOfDay::new(18);
        let tick = follower.tick().await;
        assert_eq!(tick.sample.mode, OperatingMode::Draining);
        assert_eq!(tick.command, Some(NodeCommand::Stop));
        assert!(!follower.node.status().await?.is_mining);
        Ok(())
    }

    #[tokio::test]
    async fn charging_leaves_idle_node_alone() {
        let mut follower = follower(8);
        let tick = follower.tick().await;
        assert_eq!(tick.sample.mode, OperatingMode::Charging);
        assert_eq!(tick.command, None);
        assert_eq!(follower.training().losses().len(), 0);
    }

    struct UnreachableNode;

    #[async_trait]
    impl Node for UnreachableNode {
        async fn status(&self) -> Result<NodeStatus> {
            bail!("connection refused")
        }

        async fn start(&self) -> Result<Acknowledgement> {
            bail!("connection refused")
        }

        async fn stop(&self) -> Result<Acknowledgement> {
            bail!("connection refused")
        }

        async fn claim(&self) -> Result<Acknowledgement> {
            bail!("connection refused")
        }
    }

    #[tokio::test]
    async fn follow_stops_after_ticks() -> Result {
        let args = FollowArgs::try_parse_from([
            "follow",
            "--simulated",
            "--hour=12",
            "--ticks=2",
            "--polling-interval=1ms",
        ])?;
        let follower = tokio::time::timeout(Duration::from_secs(5), args.follow()).await??;
        assert_eq!(follower.training().lines().len(), 1);
        assert!(follower.node.status().await?.is_mining);
        assert_eq!(build_training_table(follower.training()).row_count(), 1);
        Ok(())
    }

    #[tokio::test]
    async fn follow_rejects_impossible_household() -> Result {
        let args = FollowArgs::try_parse_from([
            "follow",
            "--simulated",
            "--ticks=1",
            "--base-load-watts=0",
        ])?;
        assert!(args.run().await.is_err());
        Ok(())
    }

    #[tokio::test]
    async fn survives_unreachable_node() {
        let mut follower = Follower::builder()
            .simulator(Simulator::default())
            .node(Box::new(UnreachableNode))
            .hour(HourOfDay::NOON)
            .build();
        let tick = follower.tick().await;
        assert_eq!(tick.sample.mode, OperatingMode::Mining);
        assert_eq!(tick.command, None);
    }
}
