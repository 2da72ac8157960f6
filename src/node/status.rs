use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct NodeStatus {
    pub is_mining: bool,

    /// Loss of the latest training epoch.
    pub loss: f64,

    pub epoch: u64,

    pub balance: f64,

    #[serde(rename = "pending")]
    pub pending_reward: f64,

    #[serde(default)]
    pub hashrate: u32,
}

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct Acknowledgement {
    pub message: String,

    /// Claimed amount, only present on a successful claim.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount: Option<f64>,
}

impl Acknowledgement {
    pub fn new(message: impl Into<String>) -> Self {
        Self { message: message.into(), amount: None }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prelude::*;

    #[test]
    fn status_ok() -> Result {
        // language=json
        let body = r#"{
            "is_mining": true,
            "loss": 0.4213,
            "epoch": 118,
            "balance": 12450.0,
            "pending": 0.59,
            "hashrate": 452
        }"#;
        let status = serde_json::from_str::<NodeStatus>(body)?;
        assert!(status.is_mining);
        assert_eq!(status.epoch, 118);
        assert_eq!(status.hashrate, 452);
        Ok(())
    }

    #[test]
    fn status_without_hashrate_ok() -> Result {
        // language=json
        let body = r#"{
            "is_mining": false,
            "loss": 1.0,
            "epoch": 0,
            "balance": 12450,
            "pending": 0
        }"#;
        let status = serde_json::from_str::<NodeStatus>(body)?;
        assert_eq!(status.hashrate, 0);
        Ok(())
    }

    #[test]
    fn claim_acknowledgement_ok() -> Result {
        // language=json
        let body = r#"{"message": "Claimed", "amount": 0.015}"#;
        let acknowledgement = serde_json::from_str::<Acknowledgement>(body)?;
        assert_eq!(acknowledgement.amount, Some(0.015));
        Ok(())
    }

    #[test]
    fn plain_acknowledgement_ok() -> Result {
        // language=json
        let body = r#"{"message": "Mining Started"}"#;
        assert_eq!(
            serde_json::from_str::<Acknowledgement>(body)?,
            Acknowledgement::new("Mining Started"),
        );
        Ok(())
    }
}
