//! Message handler module

use std::sync::Arc;

use crate::domain::dispatch::{
    logger::Logger, parser::RequestParser, sender::EmailSender, InboundMessage, MessageActions,
};

/// Drives one inbound message from receipt to its acknowledgment decision.
///
/// The contract is deliberately one-sided: the handler never returns an
/// error to the queue loop. Every failure is absorbed, at most one error
/// line is logged, and the message is simply left unacknowledged so that
/// redelivery stays the runtime's concern.
#[derive(Debug, Clone)]
pub struct MessageHandler<P, S, L>
where
    P: RequestParser,
    S: EmailSender,
    L: Logger,
{
    logger: Arc<L>,
    parser: Arc<P>,
    sender: Arc<S>,
}

impl<P, S, L> MessageHandler<P, S, L>
where
    P: RequestParser,
    S: EmailSender,
    L: Logger,
{
    /// Create a new message handler from its collaborators.
    pub fn new(logger: Arc<L>, parser: Arc<P>, sender: Arc<S>) -> Self {
        Self {
            logger,
            parser,
            sender,
        }
    }

    /// Handle one delivery: parse, validate, send, and complete the message
    /// only when the sender reports verified success.
    ///
    /// A missing acknowledgment handle is logged and aborts processing
    /// before the message is touched; a missing message is dropped without
    /// a log line. That asymmetry is part of the inherited contract, not an
    /// oversight.
    pub async fn handle<A: MessageActions>(
        &self,
        message: Option<InboundMessage>,
        actions: Option<&A>,
    ) {
        let Some(actions) = actions else {
            self.logger.error("Message actions cannot be null");
            return;
        };

        let Some(message) = message else {
            return;
        };

        let request = match self.parser.parse(&message).await {
            Ok(Some(request)) => request,
            Ok(None) => return,
            Err(err) => {
                self.logger.error(&format!("email dispatch failed: {err}"));
                return;
            }
        };

        if !request.is_sendable() {
            return;
        }

        match self.sender.send(&request).await {
            Ok(true) => {
                if let Err(err) = actions.complete(&message).await {
                    self.logger.error(&format!("email dispatch failed: {err}"));
                }
            }
            Ok(false) => {}
            Err(err) => {
                self.logger.error(&format!("email dispatch failed: {err}"));
            }
        }
    }
}
