use aws_sdk_sqs::error::{DisplayErrorContext, SdkError};
use thiserror::Error;

pub type Result<T, E = QueueError> = std::result::Result<T, E>;

#[derive(Debug, Error)]
pub enum QueueError {
    #[error("Missing configuration: {0}")]
    MissingConfiguration(String),

    #[error("Configuration key is not set: {0}")]
    ConfigKeyNotSet(String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Failed to interact with AWS SQS: {message}")]
    AwsError {
        message: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    #[error("Failed to serialize or rehydrate message: {0}")]
    InvalidMessage(String),

    #[error("Unexpected response from AWS SQS: {0}")]
    UnexpectedResponse(String),
}

impl QueueError {
    /// True for failures raised by the service call itself rather than local checks.
    #[must_use]
    pub fn is_service_error(&self) -> bool {
        matches!(self, QueueError::AwsError { .. })
    }
}

impl From<serde_json::Error> for QueueError {
    fn from(error: serde_json::Error) -> Self {
        QueueError::InvalidMessage(error.to_string())
    }
}

// Generic implementation for AWS SDK errors
impl<E, R> From<SdkError<E, R>> for QueueError
where
    E: std::error::Error + Send + Sync + 'static,
    R: std::fmt::Debug + Send + Sync + 'static,
{
    fn from(error: SdkError<E, R>) -> Self {
        QueueError::AwsError {
            message: DisplayErrorContext(&error).to_string(),
            source: Box::new(error),
        }
    }
}
