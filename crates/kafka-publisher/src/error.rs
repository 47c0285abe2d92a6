use thiserror::Error;

/// Errors reported by the broker session.
#[derive(Error, Debug)]
pub enum PublisherError {
    #[error("Kafka error: {0}")]
    Kafka(#[from] rdkafka::error::KafkaError),

    #[error("Failed to connect to Kafka at {broker}: {message}")]
    Connection { broker: String, message: String },

    #[error("Failed to publish to topic '{topic}': {message}")]
    Publish { topic: String, message: String },

    #[error("Topic creation error: {0}")]
    TopicCreation(String),

    #[error("Background task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}

pub type Result<T> = std::result::Result<T, PublisherError>;
