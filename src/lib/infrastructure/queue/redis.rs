//! Redis-backed queue

use anyhow::{Context, Result};
use async_trait::async_trait;
use clap::Parser;
use redis::{aio::ConnectionManager, AsyncCommands, Client, Direction};

use crate::domain::dispatch::{errors::CompleteError, InboundMessage, MessageActions};

/// Queue connection configuration
#[derive(Debug, Clone, PartialEq, Eq, Parser)]
pub struct RedisQueueConfig {
    /// The Redis connection string
    #[clap(long, env = "QUEUE_CONNECTION")]
    pub connection_string: String,

    /// The queue to consume
    #[clap(long, env = "QUEUE_NAME", default_value = "email_request")]
    pub queue: String,

    /// How long one blocking pop waits before returning empty
    #[clap(long, env = "QUEUE_POP_TIMEOUT_SECS", default_value = "5")]
    pub pop_timeout_secs: u64,
}

/// A consumer over one Redis list.
///
/// Deliveries are moved into a `<queue>:processing` list rather than
/// removed outright, so a message that is never completed stays visible to
/// operators for requeueing. Completion removes it from the processing
/// list.
pub struct RedisQueue {
    conn: ConnectionManager,
    queue: String,
    processing: String,
    pop_timeout: f64,
}

impl RedisQueue {
    /// Connect to the queue backend.
    pub async fn connect(config: &RedisQueueConfig) -> Result<Self> {
        let client = Client::open(config.connection_string.as_str())
            .context("invalid queue connection string")?;

        let conn = ConnectionManager::new(client)
            .await
            .context("failed to connect to the queue backend")?;

        Ok(Self {
            conn,
            queue: config.queue.clone(),
            processing: processing_key(&config.queue),
            pop_timeout: config.pop_timeout_secs as f64,
        })
    }

    /// The name of the consumed queue
    pub fn name(&self) -> &str {
        &self.queue
    }

    /// Wait for the next delivery, or `None` when the pop times out.
    pub async fn pop(&mut self) -> Result<Option<InboundMessage>> {
        let payload: Option<Vec<u8>> = self
            .conn
            .blmove(
                &self.queue,
                &self.processing,
                Direction::Right,
                Direction::Left,
                self.pop_timeout,
            )
            .await
            .context("blocking pop failed")?;

        Ok(payload.map(InboundMessage::new))
    }

    /// The acknowledgment handle for deliveries popped from this queue.
    pub fn actions(&self) -> RedisMessageActions {
        RedisMessageActions {
            conn: self.conn.clone(),
            processing: self.processing.clone(),
        }
    }
}

impl std::fmt::Debug for RedisQueue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RedisQueue")
            .field("queue", &self.queue)
            .field("processing", &self.processing)
            .field("pop_timeout", &self.pop_timeout)
            .finish()
    }
}

/// Completion handle over the processing list
#[derive(Clone)]
pub struct RedisMessageActions {
    conn: ConnectionManager,
    processing: String,
}

impl std::fmt::Debug for RedisMessageActions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RedisMessageActions")
            .field("processing", &self.processing)
            .finish()
    }
}

#[async_trait]
impl MessageActions for RedisMessageActions {
    async fn complete(&self, message: &InboundMessage) -> Result<(), CompleteError> {
        let mut conn = self.conn.clone();

        let removed: usize = conn
            .lrem(&self.processing, 1, message.payload())
            .await
            .map_err(|e| CompleteError::UnknownError(e.into()))?;

        if removed == 0 {
            return Err(CompleteError::MessageGone);
        }

        Ok(())
    }
}

fn processing_key(queue: &str) -> String {
    format!("{queue}:processing")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_processing_key_is_derived_from_the_queue_name() {
        assert_eq!(processing_key("email_request"), "email_request:processing");
    }
}
