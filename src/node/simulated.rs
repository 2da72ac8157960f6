use async_trait::async_trait;
use rand::{Rng, SeedableRng, rngs::StdRng};
use tokio::sync::Mutex;

use crate::{
    node::{Acknowledgement, Node, NodeStatus},
    prelude::*,
};

/// In-process stand-in for the training node.
///
/// Every status poll while mining counts as one training epoch.
pub struct SimulatedNode(Mutex<State>);

struct State {
    is_mining: bool,
    epoch: u64,
    loss: f64,
    balance: f64,
    pending_reward: f64,
    rng: StdRng,
}

impl SimulatedNode {
    pub const INITIAL_BALANCE: f64 = 12450.0;
    pub const REWARD_PER_EPOCH: f64 = 0.005;

    #[must_use]
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }

    #[must_use]
    pub fn with_rng(rng: StdRng) -> Self {
        Self(Mutex::new(State {
            is_mining: false,
            epoch: 0,
            loss: 1.0,
            balance: Self::INITIAL_BALANCE,
            pending_reward: 0.0,
            rng,
        }))
    }
}

impl Default for SimulatedNode {
    fn default() -> Self {
        Self::new()
    }
}

impl State {
    fn train(&mut self) {
        let error: f64 = self.rng.gen_range(-1.5..1.5);
        self.epoch += 1;
        self.loss = error * error;
        self.pending_reward += SimulatedNode::REWARD_PER_EPOCH;
        debug!(epoch = self.epoch, loss = self.loss, "trained");
    }

    fn status(&mut self) -> NodeStatus {
        NodeStatus {
            is_mining: self.is_mining,
            loss: self.loss,
            epoch: self.epoch,
            balance: self.balance,
            pending_reward: self.pending_reward,
            hashrate: if self.is_mining { self.rng.gen_range(440..=460) } else { 0 },
        }
    }
}

#[async_trait]
impl Node for SimulatedNode {
    async fn status(&self) -> Result<NodeStatus> {
        let mut state = self.0.lock().await;
        if state.is_mining {
            state.train();
        }
        Ok(state.status())
    }

    async fn start(&self) -> Result<Acknowledgement> {
        self.0.lock().await.is_mining = true;
        Ok(Acknowledgement::new("Mining Started"))
    }

    async fn stop(&self) -> Result<Acknowledgement> {
        self.0.lock().await.is_mining = false;
        Ok(Acknowledgement::new("Mining Stopped"))
    }

    async fn claim(&self) -> Result<Acknowledgement> {
        let mut state = self.0.lock().await;
        if state.pending_reward > 0.0 {
            let amount = state.pending_reward;
            state.balance += amount;
            state.pending_reward = 0.0;
            Ok(Acknowledgement { message: "Claimed".to_string(), amount: Some(amount) })
        } else {
            Ok(Acknowledgement::new("Nothing to claim"))
        }
    }
}
