use std::time::Duration;

use async_trait::async_trait;
use reqwest::Url;
use serde::de::DeserializeOwned;

use crate::{
    core::policy::NodeCommand,
    node::{Acknowledgement, Node, NodeStatus},
    prelude::*,
};

/// HTTP client of the training node: `GET /status` and `POST /start`, `/stop`, `/claim`.
pub struct Client {
    inner: reqwest::Client,
    url: Url,
}

impl Client {
    #[instrument(skip_all, fields(url = %url))]
    pub fn new(url: Url) -> Result<Self> {
        let inner = reqwest::Client::builder()
            .user_agent("helios")
            .timeout(Duration::from_secs(3))
            .build()?;
        Ok(Self { inner, url })
    }

    fn endpoint(&self, path: &str) -> Result<Url> {
        self.url.join(path).with_context(|| format!("invalid endpoint `{path}` of `{}`", self.url))
    }

    async fn call<R: DeserializeOwned>(&self, request: reqwest::RequestBuilder) -> Result<R> {
        let response = request.send().await.context("failed to call the node")?;
        let url = response.url().clone();
        response
            .error_for_status()
            .with_context(|| format!("`{url}` failed"))?
            .json()
            .await
            .with_context(|| format!("failed to deserialize the response from `{url}`"))
    }

    #[instrument(skip_all, fields(url = %self.url, command = %command))]
    async fn post(&self, command: NodeCommand) -> Result<Acknowledgement> {
        let acknowledgement: Acknowledgement =
            self.call(self.inner.post(self.endpoint(command.path())?)).await?;
        info!(message = %acknowledgement.message, "acknowledged");
        Ok(acknowledgement)
    }
}

#[async_trait]
impl Node for Client {
    #[instrument(skip_all, level = Level::DEBUG, fields(url = %self.url))]
    async fn status(&self) -> Result<NodeStatus> {
        let status: NodeStatus = self.call(self.inner.get(self.endpoint("status")?)).await?;
        debug!(status.is_mining, status.epoch, status.loss, "polled");
        Ok(status)
    }

    async fn start(&self) -> Result<Acknowledgement> {
        self.post(NodeCommand::Start).await
    }

    async fn stop(&self) -> Result<Acknowledgement> {
        self.post(NodeCommand::Stop).await
    }

    async fn claim(&self) -> Result<Acknowledgement> {
        self.post(NodeCommand::Claim).await
    }
}
