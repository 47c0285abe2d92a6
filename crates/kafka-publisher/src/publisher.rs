//! Broker session and fire-and-forget publishing.

use crate::config::PublisherConfig;
use crate::context::FeedClientContext;
use crate::error::{PublisherError, Result};
use crate::metrics::PublishMetrics;
use crate::session::{SessionEvent, SessionState, SharedState};
use crate::traits::Publish;
use rdkafka::admin::{AdminClient, AdminOptions, NewTopic, TopicReplication};
use rdkafka::client::DefaultClientContext;
use rdkafka::producer::{FutureProducer, FutureRecord, Producer};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{debug, error, info, warn};

/// Exclusive owner of the Kafka producer session.
///
/// Construct once, call [`connect`](Self::connect) to establish the session,
/// then publish through the [`Publish`] trait. Nothing else touches the
/// underlying producer.
pub struct KafkaPublisher {
    producer: Arc<FutureProducer<FeedClientContext>>,
    config: PublisherConfig,
    state: SharedState,
    metrics: Arc<PublishMetrics>,
}

impl KafkaPublisher {
    /// Create the producer. No network I/O happens until [`connect`](Self::connect).
    pub fn new(config: PublisherConfig) -> Result<Self> {
        let producer: FutureProducer<FeedClientContext> = config
            .client_config()
            .create_with_context(FeedClientContext)?;

        Ok(Self {
            producer: Arc::new(producer),
            config,
            state: SharedState::new(),
            metrics: Arc::new(PublishMetrics::new()),
        })
    }

    pub fn config(&self) -> &PublisherConfig {
        &self.config
    }

    pub fn state(&self) -> SessionState {
        self.state.get()
    }

    /// Shared delivery counters.
    pub fn metrics(&self) -> Arc<PublishMetrics> {
        Arc::clone(&self.metrics)
    }

    /// Start establishing the session.
    ///
    /// The attempt runs in the background: a metadata round trip bounded by
    /// the configured connect timeout. Its outcome is sent on `events` as
    /// [`SessionEvent::Ready`] or [`SessionEvent::Failed`]. A failure is not
    /// retried.
    pub fn connect(&self, events: mpsc::Sender<SessionEvent>) -> JoinHandle<()> {
        let producer = Arc::clone(&self.producer);
        let state = self.state.clone();
        let broker = self.config.bootstrap_servers.clone();
        let timeout = self.config.connect_timeout;

        tokio::spawn(async move {
            info!("Connecting to Kafka at {broker}");

            let result = tokio::task::spawn_blocking(move || {
                producer
                    .client()
                    .fetch_metadata(None, timeout)
                    .map(|metadata| metadata.brokers().len())
            })
            .await;

            let event = match result {
                Ok(Ok(broker_count)) => {
                    if state.mark_ready() {
                        info!("Connected to Kafka at {broker} ({broker_count} broker(s))");
                        SessionEvent::Ready
                    } else {
                        debug!("Session closed before connect completed");
                        return;
                    }
                }
                Ok(Err(e)) => SessionEvent::Failed(PublisherError::Connection {
                    broker,
                    message: e.to_string(),
                }),
                Err(e) => SessionEvent::Failed(PublisherError::Task(e)),
            };

            if events.send(event).await.is_err() {
                debug!("Session event receiver dropped");
            }
        })
    }

    /// Create a Kafka topic if it doesn't exist.
    pub async fn create_topic_if_not_exists(&self, topic: &str, partitions: i32) -> Result<()> {
        let admin_client: AdminClient<DefaultClientContext> = self.config.client_config().create()?;

        let new_topic = NewTopic::new(topic, partitions, TopicReplication::Fixed(1));
        let opts = AdminOptions::new().operation_timeout(Some(self.config.connect_timeout));

        match admin_client.create_topics(&[new_topic], &opts).await {
            Ok(results) => {
                for result in results {
                    match result {
                        Ok(topic_name) => {
                            info!("Topic '{topic_name}' created successfully");
                        }
                        Err((topic_name, err)) => {
                            let err_str = err.to_string();
                            if err_str.contains("already exists")
                                || err_str.contains("TopicExistsException")
                            {
                                info!("Topic '{topic_name}' already exists");
                            } else {
                                return Err(PublisherError::TopicCreation(format!(
                                    "Failed to create topic {topic_name}: {err}"
                                )));
                            }
                        }
                    }
                }
            }
            Err(e) => {
                return Err(PublisherError::TopicCreation(format!(
                    "Failed to create topic: {e}"
                )));
            }
        }

        Ok(())
    }

    /// Flush in-flight messages and close the session.
    ///
    /// Messages still undelivered after `timeout` are abandoned.
    pub async fn close(&self, timeout: Duration) -> Result<()> {
        self.state.set(SessionState::Closed);

        let producer = Arc::clone(&self.producer);
        let in_flight = producer.in_flight_count();
        if in_flight > 0 {
            info!("Flushing {in_flight} in-flight message(s)");
        }

        match tokio::task::spawn_blocking(move || producer.flush(timeout)).await? {
            Ok(()) => {
                info!("Kafka session closed");
                Ok(())
            }
            Err(e) => {
                warn!("Kafka session closed with undelivered messages: {e}");
                Err(PublisherError::Kafka(e))
            }
        }
    }
}

impl Publish for KafkaPublisher {
    fn publish(&self, topic: &str, payload: Vec<u8>) -> Result<()> {
        let record = FutureRecord::<(), [u8]>::to(topic).payload(payload.as_slice());

        let delivery = match self.producer.send_result(record) {
            Ok(delivery) => delivery,
            Err((err, _)) => {
                self.metrics.record_rejected();
                return Err(PublisherError::Publish {
                    topic: topic.to_string(),
                    message: err.to_string(),
                });
            }
        };
        self.metrics.record_enqueued();

        let metrics = Arc::clone(&self.metrics);
        let topic = topic.to_string();
        tokio::spawn(async move {
            match delivery.await {
                Ok(Ok(_)) => {
                    metrics.record_delivered();
                    debug!("Message delivered to '{topic}'");
                }
                Ok(Err((err, _))) => {
                    metrics.record_failed();
                    error!("Error sending message to '{topic}': {err}");
                }
                Err(_) => {
                    metrics.record_failed();
                    error!("Delivery report for '{topic}' was lost");
                }
            }
        });

        Ok(())
    }
}
