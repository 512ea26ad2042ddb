//! Queue consumption

use std::time::Duration;

use tokio::signal;
use tracing::{debug, error};

use crate::domain::dispatch::{
    logger::Logger, parser::RequestParser, sender::EmailSender, MessageHandler,
};

pub mod redis;

use self::redis::RedisQueue;

/// The worker loop: pops deliveries off the queue and hands each one to the
/// message handler until a shutdown signal arrives.
#[derive(Debug)]
pub struct QueueWorker<P, S, L>
where
    P: RequestParser,
    S: EmailSender,
    L: Logger,
{
    handler: MessageHandler<P, S, L>,
    queue: RedisQueue,
}

impl<P, S, L> QueueWorker<P, S, L>
where
    P: RequestParser,
    S: EmailSender,
    L: Logger,
{
    /// Create a new worker over a connected queue.
    pub fn new(handler: MessageHandler<P, S, L>, queue: RedisQueue) -> Self {
        Self { handler, queue }
    }

    /// Runs the worker until interrupted.
    ///
    /// A pop failure is logged and retried after a short pause; it is never
    /// fatal, since the backend may only be momentarily unreachable.
    #[mutants::skip]
    pub async fn run(mut self) -> anyhow::Result<()> {
        debug!("listening on queue {}", self.queue.name());

        let actions = self.queue.actions();

        let shutdown = shutdown_signal();
        tokio::pin!(shutdown);

        loop {
            tokio::select! {
                _ = &mut shutdown => {
                    debug!("shutting down gracefully");
                    break;
                }
                popped = self.queue.pop() => match popped {
                    Ok(Some(message)) => {
                        self.handler.handle(Some(message), Some(&actions)).await;
                    }
                    Ok(None) => {}
                    Err(err) => {
                        error!("failed to pop from queue: {err}");
                        tokio::time::sleep(Duration::from_secs(1)).await;
                    }
                },
            }
        }

        Ok(())
    }
}

#[mutants::skip]
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
