//! Queue capabilities and their Amazon SQS implementation.

use async_trait::async_trait;

use crate::core::models::Message;
use crate::errors::Result;

pub mod client;
pub mod factory;
pub mod sqs;

pub use client::SqsApi;
pub use factory::SqsFactory;
pub use sqs::SqsQueue;

/// Callback invoked once for every consumed message.
pub trait MessageReceiver: Send {
    fn receive(&mut self, message: Message);
}

impl<F> MessageReceiver for F
where
    F: FnMut(Message) + Send,
{
    fn receive(&mut self, message: Message) {
        self(message);
    }
}

#[async_trait]
pub trait Queue: Send + Sync {
    async fn add(&self, message: Message) -> Result<()>;

    /// Approximate number of messages currently enqueued.
    async fn count(&self) -> Result<u64>;

    /// Hands at most `max_messages` messages from a single receive call to `receiver`.
    ///
    /// # Errors
    ///
    /// Fails with [`crate::errors::QueueError::InvalidArgument`] if `max_messages` is below one.
    async fn consume(&self, receiver: &mut dyn MessageReceiver, max_messages: i32) -> Result<()>;
}

#[async_trait]
pub trait Clearable: Send + Sync {
    async fn clear(&self) -> Result<()>;
}

#[async_trait]
pub trait MessageQueueFactory: Send + Sync {
    type Queue: Queue + Clearable;

    async fn create_event_message_queue(&self) -> Result<Self::Queue>;

    async fn create_command_message_queue(&self) -> Result<Self::Queue>;
}
