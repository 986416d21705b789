use async_trait::async_trait;
use aws_config::BehaviorVersion;
use aws_sdk_sqs::Client as SqsClient;
use aws_sdk_sqs::config::{Credentials, Region};
use tokio::sync::OnceCell;
use tracing::{info, warn};

use super::MessageQueueFactory;
use super::sqs::SqsQueue;
use crate::core::config::{
    AWS_KEY, AWS_REGION, AWS_SECRET, AWS_SQS_COMMAND_QUEUE_URL, AWS_SQS_ENDPOINT_URL,
    AWS_SQS_EVENT_QUEUE_URL, ConfigReader,
};
use crate::errors::{QueueError, Result};

const CREDENTIALS_PROVIDER_NAME: &str = "sqs-queue-config";

/// Builds event and command queues backed by a single, lazily created SQS client.
///
/// The client is created on the first queue request and reused afterwards, even if the
/// configuration behind `config` changes later. Queue URLs are read on every request.
///
/// When `AWS_KEY` or `AWS_SECRET` is missing, the client falls back to the default AWS
/// credential chain, so authentication problems show up on the first SQS call instead.
pub struct SqsFactory<R> {
    config: R,
    client: OnceCell<SqsClient>,
}

impl<R: ConfigReader> SqsFactory<R> {
    pub fn new(config: R) -> Self {
        Self {
            config,
            client: OnceCell::new(),
        }
    }

    async fn sqs_client(&self) -> Result<SqsClient> {
        self.client
            .get_or_try_init(|| self.build_client())
            .await
            .cloned()
    }

    async fn build_client(&self) -> Result<SqsClient> {
        let region = self.required(AWS_REGION)?;
        let mut loader = aws_config::defaults(BehaviorVersion::latest()).region(Region::new(region));

        match self.static_credentials() {
            Some(credentials) => loader = loader.credentials_provider(credentials),
            None => warn!(
                "{} or {} not set, using the default AWS credential chain",
                AWS_KEY, AWS_SECRET
            ),
        }

        if self.config.has(AWS_SQS_ENDPOINT_URL) {
            let endpoint = self.config.get(AWS_SQS_ENDPOINT_URL)?;
            loader = loader.endpoint_url(endpoint);
        }

        let shared_config = loader.load().await;
        info!(
            region = ?shared_config.region(),
            "Created SQS client"
        );
        Ok(SqsClient::new(&shared_config))
    }

    fn static_credentials(&self) -> Option<Credentials> {
        let key = self.optional(AWS_KEY)?;
        let secret = self.optional(AWS_SECRET)?;
        Some(Credentials::new(
            key,
            secret,
            None,
            None,
            CREDENTIALS_PROVIDER_NAME,
        ))
    }

    fn optional(&self, key: &str) -> Option<String> {
        self.config.get(key).ok().filter(|value| !value.is_empty())
    }

    fn required(&self, key: &str) -> Result<String> {
        self.optional(key).ok_or_else(|| {
            QueueError::MissingConfiguration(format!("Please pass {key} as env variable."))
        })
    }

    async fn create_queue(&self, queue_url_key: &str) -> Result<SqsQueue> {
        let client = self.sqs_client().await?;
        let queue_url = self.required(queue_url_key)?;
        Ok(SqsQueue::new(client, queue_url))
    }
}

#[async_trait]
impl<R: ConfigReader> MessageQueueFactory for SqsFactory<R> {
    type Queue = SqsQueue;

    async fn create_event_message_queue(&self) -> Result<SqsQueue> {
        self.create_queue(AWS_SQS_EVENT_QUEUE_URL).await
    }

    async fn create_command_message_queue(&self) -> Result<SqsQueue> {
        self.create_queue(AWS_SQS_COMMAND_QUEUE_URL).await
    }
}
