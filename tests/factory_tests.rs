use sqs_queue::core::EnvironmentConfigReader;
use sqs_queue::core::config::{
    AWS_KEY, AWS_REGION, AWS_SECRET, AWS_SQS_COMMAND_QUEUE_URL, AWS_SQS_EVENT_QUEUE_URL,
};
use sqs_queue::errors::QueueError;
use sqs_queue::queue::{MessageQueueFactory, SqsFactory};

const EVENT_QUEUE_URL: &str = "https://sqs.eu-central-1.amazonaws.com/311520829372/lap-sqs-test-event";
const COMMAND_QUEUE_URL: &str =
    "https://sqs.eu-central-1.amazonaws.com/311520829372/lap-sqs-test-command";

fn factory(vars: &[(&str, &str)]) -> SqsFactory<EnvironmentConfigReader> {
    SqsFactory::new(EnvironmentConfigReader::from_vars(vars.iter().copied()))
}

fn full_config() -> Vec<(&'static str, &'static str)> {
    vec![
        (AWS_SQS_COMMAND_QUEUE_URL, COMMAND_QUEUE_URL),
        (AWS_SQS_EVENT_QUEUE_URL, EVENT_QUEUE_URL),
        (AWS_REGION, "eu-central-1"),
        (AWS_KEY, "MY_AWS_KEY"),
        (AWS_SECRET, "MY_AWS_SECRET"),
    ]
}

fn assert_missing_configuration(result: Result<impl std::fmt::Debug, QueueError>, expected: &str) {
    match result {
        Err(QueueError::MissingConfiguration(msg)) => assert_eq!(msg, expected),
        other => panic!("Unexpected result: {other:?}"),
    }
}

#[tokio::test]
async fn test_create_event_message_queue() {
    let queue = factory(&full_config())
        .create_event_message_queue()
        .await
        .unwrap();
    assert_eq!(queue.queue_url(), EVENT_QUEUE_URL);
}

#[tokio::test]
async fn test_create_command_message_queue() {
    let queue = factory(&full_config())
        .create_command_message_queue()
        .await
        .unwrap();
    assert_eq!(queue.queue_url(), COMMAND_QUEUE_URL);
}

#[tokio::test]
async fn test_fails_without_region() {
    let result = factory(&[(AWS_KEY, "MY_AWS_KEY"), (AWS_SECRET, "MY_AWS_SECRET")])
        .create_command_message_queue()
        .await;
    assert_missing_configuration(result, "Please pass AWS_REGION as env variable.");
}

#[tokio::test]
async fn test_fails_with_empty_region() {
    let mut config = full_config();
    config.retain(|(k, _)| *k != AWS_REGION);
    config.push((AWS_REGION, ""));

    let result = factory(&config).create_event_message_queue().await;
    assert_missing_configuration(result, "Please pass AWS_REGION as env variable.");
}

#[tokio::test]
async fn test_fails_without_event_queue_url() {
    let result = factory(&[
        (AWS_REGION, "eu-central-1"),
        (AWS_KEY, "MY_AWS_KEY"),
        (AWS_SECRET, "MY_AWS_SECRET"),
    ])
    .create_event_message_queue()
    .await;
    assert_missing_configuration(result, "Please pass AWS_SQS_EVENT_QUEUE_URL as env variable.");
}

#[tokio::test]
async fn test_fails_without_command_queue_url() {
    let result = factory(&[
        (AWS_REGION, "eu-central-1"),
        (AWS_KEY, "MY_AWS_KEY"),
        (AWS_SECRET, "MY_AWS_SECRET"),
    ])
    .create_command_message_queue()
    .await;
    assert_missing_configuration(
        result,
        "Please pass AWS_SQS_COMMAND_QUEUE_URL as env variable.",
    );
}

#[tokio::test]
async fn test_missing_credentials_fall_back_to_default_chain() {
    let queue = factory(&[
        (AWS_REGION, "eu-central-1"),
        (AWS_SQS_EVENT_QUEUE_URL, EVENT_QUEUE_URL),
        (AWS_SQS_COMMAND_QUEUE_URL, COMMAND_QUEUE_URL),
    ])
    .create_command_message_queue()
    .await
    .unwrap();

    assert_eq!(queue.queue_url(), COMMAND_QUEUE_URL);
}

#[tokio::test]
async fn test_both_queues_share_one_factory() {
    let factory = factory(&full_config());

    let events = factory.create_event_message_queue().await.unwrap();
    let commands = factory.create_command_message_queue().await.unwrap();

    assert_ne!(events.queue_url(), commands.queue_url());
}
