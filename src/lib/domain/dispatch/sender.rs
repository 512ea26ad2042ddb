//! Email sender collaborator

use async_trait::async_trait;

#[cfg(test)]
use mockall::mock;

use crate::domain::dispatch::{errors::SendError, EmailRequest};

/// Attempts delivery of one email request.
#[async_trait]
pub trait EmailSender: Send + Sync + 'static {
    /// Attempt to deliver the request.
    ///
    /// # Returns
    /// A [`Result`] which is [`Ok`] containing `true` when the transport
    /// accepted the email, [`Ok`] containing `false` when it declined it
    /// without raising an error, or an [`Err`] containing a [`SendError`]
    /// when the attempt itself failed.
    async fn send(&self, request: &EmailRequest) -> Result<bool, SendError>;
}

#[cfg(test)]
mock! {
    pub EmailSender {}

    #[async_trait]
    impl EmailSender for EmailSender {
        async fn send(&self, request: &EmailRequest) -> Result<bool, SendError>;
    }
}
