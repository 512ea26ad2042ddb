//! Error types for the dispatch module

use thiserror::Error;

/// Errors raised while unpacking an inbound message into an email request
#[derive(Debug, Error)]
pub enum ParseError {
    /// The message payload could not be decoded
    #[error("malformed message payload: {0}")]
    Malformed(String),

    /// Unknown error
    #[error(transparent)]
    UnknownError(anyhow::Error),
}

/// Errors raised while attempting to deliver an email
#[derive(Debug, Error)]
pub enum SendError {
    /// The request's addresses could not be turned into an envelope
    #[error("invalid email envelope: {0}")]
    InvalidEnvelope(String),

    /// Unknown error
    #[error(transparent)]
    UnknownError(anyhow::Error),
}

/// Errors raised while completing a message against the queue backend
#[derive(Debug, Error)]
pub enum CompleteError {
    /// The message is no longer held by the backend
    #[error("message is no longer held by the queue backend")]
    MessageGone,

    /// Unknown error
    #[error(transparent)]
    UnknownError(anyhow::Error),
}
