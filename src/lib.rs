//! sqs-queue - Amazon SQS backed message queues.
//!
//! This crate lets an application send, receive, count and purge its messages through
//! Amazon SQS:
//! 1. [`queue::SqsFactory`] reads AWS settings and builds one shared SQS client
//! 2. [`queue::SqsQueue`] binds that client to the event or the command queue URL
//!
//! # Example
//!
//! ```no_run
//! use std::collections::BTreeMap;
//! use sqs_queue::core::{EnvironmentConfigReader, Message};
//! use sqs_queue::queue::{MessageQueueFactory, Queue, SqsFactory};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     sqs_queue::setup_logging();
//!
//!     let factory = SqsFactory::new(EnvironmentConfigReader::from_env());
//!     let commands = factory.create_command_message_queue().await?;
//!
//!     let message = Message::with_current_time(
//!         "update_product",
//!         vec![serde_json::json!("sku-42")],
//!         BTreeMap::new(),
//!     );
//!     commands.add(message).await?;
//!
//!     commands
//!         .consume(&mut |m: Message| println!("Received {}", m.name()), 10)
//!         .await?;
//!
//!     Ok(())
//! }
//! ```

// Module declarations
pub mod core;
pub mod errors;
pub mod queue;

pub use errors::{QueueError, Result};

/// Configure structured JSON logging.
///
/// The level comes from `RUST_LOG` and defaults to `info`. Calling this more than once is
/// harmless; only the first subscriber is installed.
///
/// # Example
///
/// ```
/// sqs_queue::setup_logging();
/// ```
pub fn setup_logging() {
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let default_level = if cfg!(feature = "debug-logs") {
        "debug"
    } else {
        "info"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let fmt_layer = tracing_subscriber::fmt::layer().json().with_target(true);

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init();
}
