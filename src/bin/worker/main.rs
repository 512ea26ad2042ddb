#![warn(
    missing_debug_implementations,
    rust_2018_idioms,
    missing_docs,
    rustdoc::broken_intra_doc_links,
    rustdoc::missing_crate_level_docs
)]

//! Email dispatch worker

use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use email_provider::{
    domain::dispatch::MessageHandler,
    infrastructure::{
        codec::JsonRequestParser,
        email::smtp::{SMTPConfig, SMTPMailer},
        queue::{
            redis::{RedisQueue, RedisQueueConfig},
            QueueWorker,
        },
        telemetry::TracingLogger,
    },
};

/// Command-line arguments / environment variables
#[derive(Debug, Parser)]
pub struct Args {
    /// The SMTP configuration
    #[clap(flatten)]
    pub smtp: SMTPConfig,

    /// The queue connection details
    #[clap(flatten)]
    pub queue: RedisQueueConfig,
}

#[mutants::skip]
#[tokio::main]
async fn main() -> Result<()> {
    if let Err(e) = dotenvy::dotenv() {
        eprintln!("Failed to load environment: {}", e);

        return Err(e.into());
    }

    tracing_subscriber::fmt::init();

    let args = Args::parse();

    let handler = MessageHandler::new(
        Arc::new(TracingLogger::new()),
        Arc::new(JsonRequestParser::new()),
        Arc::new(SMTPMailer::new(args.smtp)),
    );

    let queue = RedisQueue::connect(&args.queue).await?;

    QueueWorker::new(handler, queue).run().await
}
