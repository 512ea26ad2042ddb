//! Email dispatch: one inbound queue message is parsed, validated, sent,
//! and completed only on verified delivery. Everything else leaves the
//! message unacknowledged for the queue runtime to redeliver.

mod handler;
mod message;
mod request;

pub mod errors;
pub mod logger;
pub mod parser;
pub mod sender;

pub use handler::MessageHandler;
pub use message::{InboundMessage, MessageActions};
pub use request::EmailRequest;

#[cfg(test)]
pub use message::MockMessageActions;
