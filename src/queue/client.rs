use std::collections::HashMap;

use async_trait::async_trait;
use aws_sdk_sqs::Client as SqsClient;
use aws_sdk_sqs::types::{Message as SqsMessage, QueueAttributeName};

use crate::errors::Result;

/// The subset of the SQS API the queue adapter relies on.
#[async_trait]
pub trait SqsApi: Send + Sync {
    async fn send_message(&self, queue_url: &str, message_body: String) -> Result<()>;

    async fn receive_messages(
        &self,
        queue_url: &str,
        wait_time_seconds: i32,
        max_number_of_messages: i32,
    ) -> Result<Vec<SqsMessage>>;

    async fn delete_message(&self, queue_url: &str, receipt_handle: &str) -> Result<()>;

    async fn get_queue_attributes(
        &self,
        queue_url: &str,
        attribute_names: Vec<QueueAttributeName>,
    ) -> Result<HashMap<QueueAttributeName, String>>;

    async fn purge_queue(&self, queue_url: &str) -> Result<()>;
}

#[async_trait]
impl SqsApi for SqsClient {
    async fn send_message(&self, queue_url: &str, message_body: String) -> Result<()> {
        self.send_message()
            .queue_url(queue_url)
            .message_body(message_body)
            .send()
            .await?;
        Ok(())
    }

    async fn receive_messages(
        &self,
        queue_url: &str,
        wait_time_seconds: i32,
        max_number_of_messages: i32,
    ) -> Result<Vec<SqsMessage>> {
        let output = self
            .receive_message()
            .queue_url(queue_url)
            .wait_time_seconds(wait_time_seconds)
            .max_number_of_messages(max_number_of_messages)
            .send()
            .await?;
        Ok(output.messages.unwrap_or_default())
    }

    async fn delete_message(&self, queue_url: &str, receipt_handle: &str) -> Result<()> {
        self.delete_message()
            .queue_url(queue_url)
            .receipt_handle(receipt_handle)
            .send()
            .await?;
        Ok(())
    }

    async fn get_queue_attributes(
        &self,
        queue_url: &str,
        attribute_names: Vec<QueueAttributeName>,
    ) -> Result<HashMap<QueueAttributeName, String>> {
        let output = self
            .get_queue_attributes()
            .queue_url(queue_url)
            .set_attribute_names(Some(attribute_names))
            .send()
            .await?;
        Ok(output.attributes.unwrap_or_default())
    }

    async fn purge_queue(&self, queue_url: &str) -> Result<()> {
        self.purge_queue().queue_url(queue_url).send().await?;
        Ok(())
    }
}
