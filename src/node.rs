//! Training node the surplus energy is sold to.
//!
//! The simulator never talks to the node by itself: it is an external collaborator
//! driven by the `follow` loop through [`crate::core::policy::NodeCommand`].

mod simulated;
mod status;

use async_trait::async_trait;

pub use self::{
    simulated::SimulatedNode,
    status::{Acknowledgement, NodeStatus},
};
use crate::{core::policy::NodeCommand, prelude::*};

#[async_trait]
pub trait Node: Send + Sync {
    async fn status(&self) -> Result<NodeStatus>;

    async fn start(&self) -> Result<Acknowledgement>;

    async fn stop(&self) -> Result<Acknowledgement>;

    /// Move the pending reward into the balance.
    async fn claim(&self) -> Result<Acknowledgement>;

    async fn execute(&self, command: NodeCommand) -> Result<Acknowledgement> {
        match command {
            NodeCommand::Start => self.start().await,
            NodeCommand::Stop => self.stop().await,
            NodeCommand::Claim => self.claim().await,
        }
    }
}
