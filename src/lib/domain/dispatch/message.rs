//! Inbound message and its acknowledgment handle

use async_trait::async_trait;
use uuid::Uuid;

#[cfg(test)]
use mockall::mock;

use crate::domain::dispatch::errors::CompleteError;

/// One message delivered by the queue runtime.
///
/// The payload is opaque to the dispatch core: only a
/// [`RequestParser`](crate::domain::dispatch::parser::RequestParser) ever
/// interprets it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InboundMessage {
    id: Uuid,
    payload: Vec<u8>,
}

impl InboundMessage {
    /// Wrap a raw payload received from the queue, assigning it a message id.
    pub fn new(payload: Vec<u8>) -> Self {
        Self {
            id: Uuid::now_v7(),
            payload,
        }
    }

    /// The id assigned to this delivery
    pub fn id(&self) -> &Uuid {
        &self.id
    }

    /// The raw message payload
    pub fn payload(&self) -> &[u8] {
        &self.payload
    }
}

/// Acknowledgment handle for one inbound message.
#[async_trait]
pub trait MessageActions: Send + Sync + 'static {
    /// Mark the message as successfully processed.
    ///
    /// # Returns
    /// A [`Result`] which is [`Ok`] once the queue backend has permanently
    /// removed the message, or an [`Err`] containing a [`CompleteError`] if
    /// it could not.
    async fn complete(&self, message: &InboundMessage) -> Result<(), CompleteError>;
}

#[cfg(test)]
mock! {
    pub MessageActions {}

    #[async_trait]
    impl MessageActions for MessageActions {
        async fn complete(&self, message: &InboundMessage) -> Result<(), CompleteError>;
    }
}
