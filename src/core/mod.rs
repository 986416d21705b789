pub mod config;
pub mod models;

pub use config::{ConfigReader, EnvironmentConfigReader};
pub use models::Message;
