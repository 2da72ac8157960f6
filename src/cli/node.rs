use clap::{Parser, Subcommand};
use reqwest::Url;

use crate::{
    api,
    core::policy::NodeCommand,
    node::{Node, SimulatedNode},
    prelude::*,
    tables::build_status_table,
};

#[must_use]
#[derive(Parser)]
pub struct NodeConnectionArgs {
    /// Base URL of the training node.
    #[clap(long = "node-url", default_value = "http://127.0.0.1:8000", env = "HELIOS_NODE_URL")]
    pub url: Url,

    /// Use an in-process simulated node instead.
    #[clap(long, env = "SIMULATED_NODE")]
    pub simulated: bool,
}

impl NodeConnectionArgs {
    pub fn connect(&self) -> Result<Box<dyn Node>> {
        if self.simulated {
            info!("using the simulated node");
            Ok(Box::new(SimulatedNode::new()))
        } else {
            Ok(Box::new(api::node::Client::new(self.url.clone())?))
        }
    }
}

#[derive(Parser)]
pub struct NodeArgs {
    #[clap(flatten)]
    connection: NodeConnectionArgs,

    #[command(subcommand)]
    command: NodeSubcommand,
}

impl NodeArgs {
    #[instrument(skip_all)]
    pub async fn run(self) -> Result {
        let node = self.connection.connect()?;
        let command = match self.command {
            NodeSubcommand::Status => {
                println!("{}", build_status_table(&node.status().await?));
                return Ok(());
            }
            NodeSubcommand::Start => NodeCommand::Start,
            NodeSubcommand::Stop => NodeCommand::Stop,
            NodeSubcommand::Claim => NodeCommand::Claim,
        };
        let acknowledgement = node.execute(command).await?;
        match acknowledgement.amount {
            Some(amount) => println!("{}: +{amount:.4}", acknowledgement.message),
            None => println!("{}", acknowledgement.message),
        }
        Ok(())
    }
}

#[derive(Subcommand)]
enum NodeSubcommand {
    /// Show the node status.
    Status,

    /// Start training.
    Start,

    /// Stop training.
    Stop,

    /// Claim the pending reward.
    Claim,
}
