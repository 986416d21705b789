use std::collections::HashMap;
use std::env;

use crate::errors::{QueueError, Result};

pub const AWS_KEY: &str = "AWS_KEY";
pub const AWS_SECRET: &str = "AWS_SECRET";
pub const AWS_REGION: &str = "AWS_REGION";
pub const AWS_SQS_EVENT_QUEUE_URL: &str = "AWS_SQS_EVENT_QUEUE_URL";
pub const AWS_SQS_COMMAND_QUEUE_URL: &str = "AWS_SQS_COMMAND_QUEUE_URL";
/// Optional endpoint override for LocalStack, ElasticMQ and similar emulators.
pub const AWS_SQS_ENDPOINT_URL: &str = "AWS_SQS_ENDPOINT_URL";

/// Read access to string settings.
pub trait ConfigReader: Send + Sync {
    /// # Errors
    ///
    /// Returns [`QueueError::ConfigKeyNotSet`] if the key has no value, or
    /// [`QueueError::InvalidArgument`] for an empty key.
    fn get(&self, key: &str) -> Result<String>;

    fn has(&self, key: &str) -> bool;
}

/// Settings captured from the process environment.
///
/// The environment is copied once at construction, so later changes to it are not observed.
#[derive(Debug, Clone, Default)]
pub struct EnvironmentConfigReader {
    vars: HashMap<String, String>,
}

impl EnvironmentConfigReader {
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_vars(env::vars())
    }

    pub fn from_vars<I, K, V>(vars: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            vars: vars
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

fn validate_key(key: &str) -> Result<()> {
    if key.trim().is_empty() {
        return Err(QueueError::InvalidArgument(
            "config key must not be empty".to_string(),
        ));
    }
    Ok(())
}

impl ConfigReader for EnvironmentConfigReader {
    fn get(&self, key: &str) -> Result<String> {
        validate_key(key)?;
        self.vars
            .get(key)
            .cloned()
            .ok_or_else(|| QueueError::ConfigKeyNotSet(key.to_string()))
    }

    fn has(&self, key: &str) -> bool {
        validate_key(key).is_ok() && self.vars.contains_key(key)
    }
}
