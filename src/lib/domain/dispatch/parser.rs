//! Request parser collaborator

use async_trait::async_trait;

#[cfg(test)]
use mockall::mock;

use crate::domain::dispatch::{errors::ParseError, EmailRequest, InboundMessage};

/// Turns a raw inbound message into a structured email request.
///
/// The parser owns the wire encoding of the message payload.
#[async_trait]
pub trait RequestParser: Send + Sync + 'static {
    /// Unpack one inbound message.
    ///
    /// # Returns
    /// A [`Result`] which is [`Ok`] containing [`Some`] request when the
    /// payload decoded to one, [`Ok`] containing [`None`] when the payload
    /// carried no request at all, or an [`Err`] containing a [`ParseError`]
    /// when the payload was present but could not be decoded.
    async fn parse(&self, message: &InboundMessage) -> Result<Option<EmailRequest>, ParseError>;
}

#[cfg(test)]
mock! {
    pub RequestParser {}

    #[async_trait]
    impl RequestParser for RequestParser {
        async fn parse(&self, message: &InboundMessage) -> Result<Option<EmailRequest>, ParseError>;
    }
}
