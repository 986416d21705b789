use async_trait::async_trait;
use aws_sdk_sqs::Client as SqsClient;
use aws_sdk_sqs::types::QueueAttributeName;
use tracing::{debug, warn};

use super::client::SqsApi;
use super::{Clearable, MessageReceiver, Queue};
use crate::core::models::Message;
use crate::errors::{QueueError, Result};

/// Upper bound SQS accepts for `MaxNumberOfMessages` on a single receive call.
pub const MAX_RECEIVE_BATCH_SIZE: i32 = 10;

/// Long-poll duration for receive calls, in seconds.
pub const RECEIVE_WAIT_TIME_SECONDS: i32 = 20;

/// A [`Queue`] bound to one SQS queue URL.
///
/// Consumed messages are deleted from SQS once the receiver has seen them.
#[derive(Debug, Clone)]
pub struct SqsQueue<C = SqsClient> {
    client: C,
    queue_url: String,
}

impl<C: SqsApi> SqsQueue<C> {
    pub fn new(client: C, queue_url: impl Into<String>) -> Self {
        Self {
            client,
            queue_url: queue_url.into(),
        }
    }

    #[must_use]
    pub fn queue_url(&self) -> &str {
        &self.queue_url
    }

    async fn acknowledge(&self, receipt_handle: Option<&str>) {
        let Some(receipt_handle) = receipt_handle else {
            warn!(queue_url = %self.queue_url, "Consumed message has no receipt handle; not deleting");
            return;
        };

        if let Err(e) = self
            .client
            .delete_message(&self.queue_url, receipt_handle)
            .await
        {
            warn!(queue_url = %self.queue_url, "Failed to delete consumed message: {}", e);
        }
    }
}

#[async_trait]
impl<C: SqsApi> Queue for SqsQueue<C> {
    async fn add(&self, message: Message) -> Result<()> {
        let message_body = message.serialize()?;
        debug!(queue_url = %self.queue_url, name = message.name(), "Sending message to SQS");
        self.client
            .send_message(&self.queue_url, message_body)
            .await
    }

    async fn count(&self) -> Result<u64> {
        let attributes = self
            .client
            .get_queue_attributes(
                &self.queue_url,
                vec![QueueAttributeName::ApproximateNumberOfMessages],
            )
            .await?;

        let raw = attributes
            .get(&QueueAttributeName::ApproximateNumberOfMessages)
            .ok_or_else(|| {
                QueueError::UnexpectedResponse(
                    "ApproximateNumberOfMessages missing from queue attributes".to_string(),
                )
            })?;

        raw.trim().parse::<u64>().map_err(|e| {
            QueueError::UnexpectedResponse(format!(
                "ApproximateNumberOfMessages is not a number ({raw}): {e}"
            ))
        })
    }

    async fn consume(&self, receiver: &mut dyn MessageReceiver, max_messages: i32) -> Result<()> {
        if max_messages < 1 {
            return Err(QueueError::InvalidArgument(
                "You need to consume at least one message.".to_string(),
            ));
        }

        let batch_size = max_messages.min(MAX_RECEIVE_BATCH_SIZE);
        let envelopes = self
            .client
            .receive_messages(&self.queue_url, RECEIVE_WAIT_TIME_SECONDS, batch_size)
            .await?;
        debug!(
            queue_url = %self.queue_url,
            requested = max_messages,
            received = envelopes.len(),
            "Received messages from SQS"
        );

        for envelope in envelopes {
            let Some(body) = envelope.body() else {
                warn!(queue_url = %self.queue_url, message_id = ?envelope.message_id(), "Skipping SQS message without body");
                continue;
            };

            receiver.receive(Message::rehydrate(body)?);
            self.acknowledge(envelope.receipt_handle()).await;
        }

        Ok(())
    }
}

#[async_trait]
impl<C: SqsApi> Clearable for SqsQueue<C> {
    async fn clear(&self) -> Result<()> {
        debug!(queue_url = %self.queue_url, "Purging SQS queue");
        self.client.purge_queue(&self.queue_url).await
    }
}
