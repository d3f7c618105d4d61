use crate::queue::{NotificationQueue, QueueError};

pub struct RedisStreamQueue {
    pub client: redis::Client,
    pub stream_key: String,
}

#[async_trait::async_trait]
impl NotificationQueue for RedisStreamQueue {
    async fn publish(&self, body: &str, group_key: &str, dedup_key: &str) -> Result<String, QueueError> {
        let mut conn = self
            .client
            .get_multiplexed_async_connection()
            .await
            .map_err(|e| QueueError::PublishFailed(e.to_string()))?;

        let message_id: String = redis::cmd("XADD")
            .arg(&self.stream_key)
            .arg("MAXLEN")
            .arg("~")
            .arg(1_000_000)
            .arg("*")
            .arg("event")
            .arg(body)
            .arg("group")
            .arg(group_key)
            .arg("dedup")
            .arg(dedup_key)
            .query_async(&mut conn)
            .await
            .map_err(|e| QueueError::PublishFailed(e.to_string()))?;

        Ok(message_id)
    }
}
