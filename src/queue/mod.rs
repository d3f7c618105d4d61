pub mod redis_stream;

#[derive(Debug, Clone, thiserror::Error)]
pub enum QueueError {
    #[error("queue publish failed: {0}")]
    PublishFailed(String),
}

#[async_trait::async_trait]
pub trait NotificationQueue: Send + Sync {
    async fn publish(&self, body: &str, group_key: &str, dedup_key: &str) -> Result<String, QueueError>;
}
